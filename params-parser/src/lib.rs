//! This crate implements a declarative command line option parser.  Each
//! option is declared exactly once (a typed binding to one of your own
//! variables, a name, and a mandatory help line, plus optionally an arity,
//! a default, or a required flag) and a single parse call over the
//! argument vector then fills those variables in place.  A formatted help
//! summary of everything declared is available afterwards.
//!
//! # Example
//!
//! Declaration and parsing happen through the [`Parser`] type:
//!
//! ```
//! use params_parser::{Binding, Decl, Error, Parser};
//!
//! fn main() -> Result<(), Error> {
//!     let mut iterations = 0i32;
//!     let mut seeds = Vec::<f32>::new();
//!     let mut name = String::new();
//!     let mut help = false;
//!
//!     let mut parser = Parser::new();
//!     parser.declare(Decl::new(
//!         Binding::Int(&mut iterations),
//!         "--iterations",
//!         "The number of iterations to perform.",
//!     ))?;
//!     parser.declare(
//!         Decl::new(Binding::FloatSeq(&mut seeds), "--seeds", "The seeds to begin simulation.")
//!             .arity(3)
//!             .required(false),
//!     )?;
//!     parser.declare(
//!         Decl::new(Binding::Str(&mut name), "--name", "The name for this simulation run.")
//!             .default_value("simulation"),
//!     )?;
//!     parser.declare_help(&mut help)?;
//!
//!     parser.parse(["--iterations", "3", "--name=test"])?;
//!
//!     assert_eq!(iterations, 3);
//!     assert_eq!(name, "test");
//!     assert!(seeds.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! Here is what's happening:
//!
//! * [`Parser::new`] creates an empty, caller-owned parser context.  Any
//!   number of independent parsers can coexist; there is no global state.
//! * [`Decl::new`] describes one option.  A fresh declaration takes
//!   exactly one value and is required, with no default; the builder
//!   methods [`Decl::arity`], [`Decl::required`], and
//!   [`Decl::default_value`] adjust that.
//! * [`Binding`] ties the option to your storage: a scalar slot for
//!   single-value options, a `Vec` slot for multi-value ones.  The shape
//!   is checked against the arity when the declaration is registered.
//! * [`Parser::parse`] tokenizes the arguments once and walks the tokens,
//!   converting each value into the bound variable.
//! * [`Parser::render_help`] returns the formatted summary of everything
//!   declared; printing it is your business.
//!
//! # Behavior
//!
//! Option names are matched verbatim.  Leading dashes are a convention,
//! not a requirement: `"seed"`, `"-s"`, and `"--seed"` are all usable
//! names, and the command line must spell whichever one was declared.
//!
//! `--seed 3` and `--seed=3` are equivalent; every unescaped `=` acts as
//! a separator.  A backslash suppresses the split, and the backslash
//! itself is kept, so `a\=b` reaches the destination verbatim.
//!
//! A token starting with `"` runs to the next `"`, which lets values keep
//! embedded spaces: `--username \"Jory Schossau\"` (the quotes escaped so
//! the shell passes them through) stores the single string
//! `Jory Schossau`.  There is no escaped-quote handling inside a quoted
//! token; the first `"` always ends it.
//!
//! Boolean options consume no value tokens.  Their variable becomes
//! `true` exactly when the name appears, and they can never be required.
//! Matching `--help` additionally stops parsing on the spot: remaining
//! tokens stay unread and required options are not checked, so a bare
//! `--help` works no matter what else the command line demands.
//!
//! An option declared with arity -1 consumes every remaining token,
//! including tokens that look like other options' names.  Such an option
//! must therefore be the last one on the command line; this is a
//! documented property, not an accident.
//!
//! # Limitations and Error Handling
//!
//! There is no short-option clustering, no aliasing, and no subcommand
//! support; names map one-to-one to declarations.
//!
//! Every fallible operation returns [`Error`], which carries an
//! [`ErrorKind`] plus the option name and offending text where known; an
//! underlying conversion failure is preserved as `source()`.  The library
//! never terminates the process itself.  Argument errors are usually
//! unrecoverable user mistakes caught before a program does any real
//! work, though, so [`Parser::parse_env_or_exit`] is provided for
//! binaries that want the classic print-to-stderr-and-exit behavior at
//! the boundary.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// The name reserved by [`Parser::declare_help`]; matching it during
/// parsing short-circuits everything that follows.
const HELP_PHRASE: &str = "--help";

pub struct Error {
    repr: Box<ErrorRepr>,
}

impl Error {
    fn new(kind: ErrorKind) -> Error {
        Error {
            repr: Box::new(ErrorRepr {
                kind,
                option: None,
                value: None,
                expected: None,
                source: None,
            }),
        }
    }

    fn with_option(mut self, option: &str) -> Error {
        self.repr.option = Some(option.to_string());
        self
    }

    fn with_value(mut self, value: &str) -> Error {
        self.repr.value = Some(value.to_string());
        self
    }

    fn with_expected(mut self, expected: &'static str) -> Error {
        self.repr.expected = Some(expected);
        self
    }

    fn with_source(mut self, source: Box<dyn std::error::Error + Send + Sync + 'static>) -> Error {
        self.repr.source = Some(source);
        self
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.repr.kind
    }

    /// The name of the option involved, if known.
    pub fn option(&self) -> Option<&str> {
        self.repr.option.as_deref()
    }

    /// The offending input text (or misuse detail), if any.
    pub fn value(&self) -> Option<&str> {
        self.repr.value.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = self.repr.expected.unwrap_or("value");
        match (self.kind(), self.repr.option.as_deref()) {
            (ErrorKind::UnrecognizedOption, Some(x)) => {
                write!(f, "unrecognized option '{}' in invocation", x)
            }
            (ErrorKind::UnrecognizedOption, None) => {
                write!(f, "unrecognized option in invocation")
            }
            (ErrorKind::MalformedValue, Some(x)) => match self.value() {
                Some(v) => write!(
                    f,
                    "invalid value {:?} for option '{}': expected {}",
                    v, x, expected
                ),
                None => write!(f, "invalid value for option '{}': expected {}", x, expected),
            },
            (ErrorKind::MalformedValue, None) => match self.value() {
                Some(v) => write!(f, "invalid value {:?}: expected {}", v, expected),
                None => write!(f, "invalid value: expected {}", expected),
            },
            (ErrorKind::MissingRequired, Some(x)) => {
                write!(f, "option '{}' required, and not found, or incomplete", x)
            }
            (ErrorKind::MissingRequired, None) => {
                write!(f, "required option not found, or incomplete")
            }
            (ErrorKind::ConstructionMisuse, Some(x)) => match self.value() {
                Some(v) => write!(f, "invalid declaration for option '{}': {}", x, v),
                None => write!(f, "invalid declaration for option '{}'", x),
            },
            (ErrorKind::ConstructionMisuse, None) => match self.value() {
                Some(v) => write!(f, "invalid declaration: {}", v),
                None => write!(f, "invalid declaration"),
            },
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind())
            .field("option", &self.option())
            .field("value", &self.value())
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.repr.source {
            Some(ref source) => Some(&**source),
            None => None,
        }
    }
}

struct ErrorRepr {
    kind: ErrorKind,
    option: Option<String>,
    value: Option<String>,
    expected: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

/// Represents the kind of a parsing or declaration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A token in option position matched no declared option name.
    UnrecognizedOption,
    /// A value token (or a declared default) did not convert to the
    /// option's bound type.
    MalformedValue,
    /// After all tokens were consumed, a required option had never been
    /// fully supplied.
    MissingRequired,
    /// The declaration itself was unusable: a boolean default other than
    /// "true"/"false", an arity of 0 or below -1, or an arity that does
    /// not match the shape of the binding.
    ConstructionMisuse,
}

/// A typed binding from one option to caller-owned storage.
///
/// Scalar variants are for options that take exactly one value (and for
/// booleans, which take none); the `*Seq` variants are for fixed arity
/// above one or unbounded arity, and append each value in order.  The
/// shape is checked against the declared arity at registration time, so a
/// mismatch is a [`ConstructionMisuse`](ErrorKind::ConstructionMisuse)
/// error rather than a latent bug.
pub enum Binding<'a> {
    /// Present-or-absent flag.
    Bool(&'a mut bool),
    /// Single `i32` value.
    Int(&'a mut i32),
    /// Sequence of `i32` values.
    IntSeq(&'a mut Vec<i32>),
    /// Single `u32` value.
    Uint(&'a mut u32),
    /// Sequence of `u32` values.
    UintSeq(&'a mut Vec<u32>),
    /// Single `i64` value.
    Long(&'a mut i64),
    /// Sequence of `i64` values.
    LongSeq(&'a mut Vec<i64>),
    /// Single `f32` value.
    Float(&'a mut f32),
    /// Sequence of `f32` values.
    FloatSeq(&'a mut Vec<f32>),
    /// Single `f64` value.
    Double(&'a mut f64),
    /// Sequence of `f64` values.
    DoubleSeq(&'a mut Vec<f64>),
    /// Single character; conversion takes the first character of the token.
    Char(&'a mut char),
    /// Sequence of characters.
    CharSeq(&'a mut Vec<char>),
    /// Single string, stored verbatim.
    Str(&'a mut String),
    /// Sequence of strings.
    StrSeq(&'a mut Vec<String>),
}

impl Binding<'_> {
    /// The type name used in diagnostics and help text.
    fn type_name(&self) -> &'static str {
        match self {
            Binding::Bool(_) => "bool",
            Binding::Int(_) | Binding::IntSeq(_) => "int",
            Binding::Uint(_) | Binding::UintSeq(_) => "unsigned int",
            Binding::Long(_) | Binding::LongSeq(_) => "long",
            Binding::Float(_) | Binding::FloatSeq(_) => "float",
            Binding::Double(_) | Binding::DoubleSeq(_) => "double",
            Binding::Char(_) | Binding::CharSeq(_) => "char",
            Binding::Str(_) | Binding::StrSeq(_) => "string",
        }
    }

    fn is_bool(&self) -> bool {
        matches!(self, Binding::Bool(_))
    }

    fn is_sequence(&self) -> bool {
        matches!(
            self,
            Binding::IntSeq(_)
                | Binding::UintSeq(_)
                | Binding::LongSeq(_)
                | Binding::FloatSeq(_)
                | Binding::DoubleSeq(_)
                | Binding::CharSeq(_)
                | Binding::StrSeq(_)
        )
    }

    /// Converts one token and writes it through the binding: assignment
    /// for scalars, append for sequences.  An empty token is a no-op; it
    /// stands for "no default supplied".
    fn assign(&mut self, value: &str) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        match self {
            Binding::Bool(slot) => {
                if value.eq_ignore_ascii_case("true") {
                    **slot = true;
                } else if value.eq_ignore_ascii_case("false") {
                    **slot = false;
                } else {
                    return Err(Error::new(ErrorKind::MalformedValue)
                        .with_value(value)
                        .with_expected("bool"));
                }
            }
            Binding::Int(slot) => **slot = convert(value, "int")?,
            Binding::IntSeq(seq) => seq.push(convert(value, "int")?),
            Binding::Uint(slot) => **slot = convert(value, "unsigned int")?,
            Binding::UintSeq(seq) => seq.push(convert(value, "unsigned int")?),
            Binding::Long(slot) => **slot = convert(value, "long")?,
            Binding::LongSeq(seq) => seq.push(convert(value, "long")?),
            Binding::Float(slot) => **slot = convert(value, "float")?,
            Binding::FloatSeq(seq) => seq.push(convert(value, "float")?),
            Binding::Double(slot) => **slot = convert(value, "double")?,
            Binding::DoubleSeq(seq) => seq.push(convert(value, "double")?),
            Binding::Char(slot) => {
                if let Some(ch) = value.chars().next() {
                    **slot = ch;
                }
            }
            Binding::CharSeq(seq) => {
                if let Some(ch) = value.chars().next() {
                    seq.push(ch);
                }
            }
            Binding::Str(slot) => **slot = value.to_string(),
            Binding::StrSeq(seq) => seq.push(value.to_string()),
        }
        Ok(())
    }
}

/// A single option declaration, assembled in one builder-style call.
///
/// A fresh declaration takes exactly one value and is required, with no
/// default.  The help text is a mandatory constructor argument on
/// purpose: there is no way to declare an undocumented option.
pub struct Decl<'a> {
    binding: Binding<'a>,
    name: String,
    help: String,
    arity: i32,
    required: bool,
    default: String,
}

impl<'a> Decl<'a> {
    /// Creates a declaration for an option taking one value of the bound
    /// type, required, with no default.
    pub fn new<N, H>(binding: Binding<'a>, name: N, help: H) -> Decl<'a>
    where
        N: Into<String>,
        H: Into<String>,
    {
        Decl {
            binding,
            name: name.into(),
            help: help.into(),
            arity: 1,
            required: true,
            default: String::new(),
        }
    }

    /// Sets how many value tokens the option consumes: a positive fixed
    /// count, or -1 to consume every remaining token.  Arity other than
    /// one requires a `*Seq` binding.  Ignored for boolean bindings,
    /// which never consume values.
    #[must_use]
    pub fn arity(mut self, arity: i32) -> Decl<'a> {
        self.arity = arity;
        self
    }

    /// Overrides whether the option must appear on the command line.
    /// Boolean options are never required, whatever is requested here.
    #[must_use]
    pub fn required(mut self, required: bool) -> Decl<'a> {
        self.required = required;
        self
    }

    /// Supplies a default as raw text, applied to the destination when
    /// the declaration is registered.  Giving a default also marks the
    /// option not required; call [`required`](Decl::required) afterwards
    /// to demand it anyway.
    #[must_use]
    pub fn default_value<D: Into<String>>(mut self, default: D) -> Decl<'a> {
        self.default = default.into();
        self.required = false;
        self
    }
}

/// One registered option: the declaration plus its parse-time state.
struct Param<'a> {
    binding: Binding<'a>,
    name: String,
    help: String,
    arity: i32,
    required: bool,
    satisfied: bool,
    default: String,
}

impl Param<'_> {
    /// Converts and stores one value token, attributing any failure to
    /// this option.
    fn set(&mut self, value: &str) -> Result<(), Error> {
        self.binding
            .assign(value)
            .map_err(|err| err.with_option(&self.name))
    }
}

/// A declarative command line option parser.
///
/// The parser owns the registry of declared options and borrows the
/// destination storage through their bindings, so the usual life cycle is
/// short: declare everything, parse once, render help if asked, drop.
/// Once the parser's last use is behind you, the borrows end and the
/// destination variables are yours to read again.
pub struct Parser<'a> {
    params: BTreeMap<String, Param<'a>>,
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser::new()
    }
}

impl fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.params.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> Parser<'a> {
    /// Creates an empty parser with no declared options.
    pub fn new() -> Parser<'a> {
        Parser {
            params: BTreeMap::new(),
        }
    }

    /// Registers one declaration.
    ///
    /// The declaration is validated first (arity, binding shape, and
    /// boolean default text) and its default, if any, is applied to the
    /// destination immediately, so a command line that never names the
    /// option leaves the default in place.  For a sequence binding the
    /// default seeds a single element; it is not expanded to the declared
    /// count.  Re-declaring a name replaces the previous declaration.
    ///
    /// Fails with [`ErrorKind::ConstructionMisuse`] on an unusable
    /// declaration, or [`ErrorKind::MalformedValue`] when the default
    /// text does not convert to the bound type.
    pub fn declare(&mut self, decl: Decl<'a>) -> Result<(), Error> {
        let Decl {
            mut binding,
            name,
            help,
            arity,
            mut required,
            default,
        } = decl;

        let mut satisfied = false;
        if binding.is_bool() {
            // Booleans can never be required and count as satisfied from
            // the start; the default (or "false") lands in the slot now.
            required = false;
            satisfied = true;
            let text = if default.is_empty() {
                "false"
            } else {
                default.as_str()
            };
            if !text.eq_ignore_ascii_case("true") && !text.eq_ignore_ascii_case("false") {
                return Err(Error::new(ErrorKind::ConstructionMisuse)
                    .with_option(&name)
                    .with_value(&format!(
                        "boolean default must be \"true\" or \"false\", got '{}'",
                        default
                    )));
            }
            binding.assign(text).map_err(|err| err.with_option(&name))?;
        } else {
            if arity == 0 || arity < -1 {
                return Err(Error::new(ErrorKind::ConstructionMisuse)
                    .with_option(&name)
                    .with_value(&format!(
                        "arity must be a positive count or -1, got {}",
                        arity
                    )));
            }
            if arity == 1 && binding.is_sequence() {
                return Err(Error::new(ErrorKind::ConstructionMisuse)
                    .with_option(&name)
                    .with_value("arity 1 requires a scalar binding"));
            }
            if arity != 1 && !binding.is_sequence() {
                return Err(Error::new(ErrorKind::ConstructionMisuse)
                    .with_option(&name)
                    .with_value(&format!("arity {} requires a sequence binding", arity)));
            }
            binding
                .assign(&default)
                .map_err(|err| err.with_option(&name))?;
        }

        self.params.insert(
            name.clone(),
            Param {
                binding,
                name,
                help,
                arity,
                required,
                satisfied,
                default,
            },
        );
        Ok(())
    }

    /// Declares the conventional help option.
    ///
    /// Equivalent to declaring a boolean binding named `--help` with the
    /// stock help text.  When `--help` is matched during parsing, the
    /// destination is set and parsing stops immediately: remaining tokens
    /// stay unread and required options are not checked.
    pub fn declare_help(&mut self, destination: &'a mut bool) -> Result<(), Error> {
        self.declare(Decl::new(
            Binding::Bool(destination),
            HELP_PHRASE,
            "Prints this help message.",
        ))
    }

    /// Parses the given argument list, excluding the program name.
    ///
    /// Tokens alternate between option names, matched verbatim against
    /// the declarations, and the value(s) each matched option consumes.
    /// On success every named option has been stored into its bound
    /// destination and every required option was satisfied (unless
    /// `--help` short-circuited parsing).
    ///
    /// The first failure is returned: an unrecognized option, a value
    /// that does not convert, or, after all tokens are consumed, the
    /// first required option in lexicographic name order that was never
    /// fully supplied.  Destinations written before the failure keep
    /// their parsed values.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buf = String::new();
        for arg in args {
            buf.push_str(arg.as_ref());
            buf.push(' ');
        }
        let buf = split_equals(&buf);

        let mut spans = tokenize(&buf).into_iter();
        'options: while let Some((start, end)) = spans.next() {
            let name = &buf[start..end];
            let param = match self.params.get_mut(name) {
                Some(param) => param,
                None => {
                    return Err(Error::new(ErrorKind::UnrecognizedOption).with_option(name));
                }
            };

            if param.binding.is_bool() {
                param.set("true")?;
                param.satisfied = true;
                if name == HELP_PHRASE {
                    return Ok(());
                }
                continue 'options;
            }

            let mut remaining = param.arity;
            for (start, end) in spans.by_ref() {
                param.set(&buf[start..end])?;
                remaining -= 1;
                if remaining == 0 {
                    param.satisfied = true;
                    continue 'options;
                }
                if remaining < 0 {
                    // Unbounded: satisfied after the first value, but the
                    // option keeps consuming to the end of the line.
                    param.satisfied = true;
                }
            }
            // Tokens ran out mid-count; a fixed-arity option stays
            // unsatisfied and the required check below decides.
            break;
        }

        for param in self.params.values() {
            if param.required && !param.satisfied {
                return Err(Error::new(ErrorKind::MissingRequired).with_option(&param.name));
            }
        }
        Ok(())
    }

    /// Parses the process's command line, skipping the program name.
    pub fn parse_env(&mut self) -> Result<(), Error> {
        self.parse(std::env::args().skip(1))
    }

    /// Parses the process's command line, printing any diagnostic to
    /// stderr and exiting with a non-zero status on failure.
    ///
    /// Argument errors are user mistakes caught before a program does any
    /// real work, so most binaries want exactly this.  Anything that
    /// needs to recover should call [`parse`](Parser::parse) or
    /// [`parse_env`](Parser::parse_env) and handle the [`Error`] itself.
    pub fn parse_env_or_exit(&mut self) {
        if let Err(err) = self.parse_env() {
            eprintln!("error: {}", err);
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  cause: {}", source);
            }
            std::process::exit(1);
        }
    }

    /// Renders a help-style summary of every declared option.
    ///
    /// Options appear in lexicographic name order (not declaration
    /// order), each as an indented block: the name, the help text, the
    /// arity and type for value-taking options, and the default (the raw
    /// registration text, verbatim) for options that are not required.
    /// The caller decides where the text goes.
    pub fn render_help(&self) -> String {
        let mut details = String::new();
        for param in self.params.values() {
            details.push('\t');
            details.push_str(&param.name);
            details.push_str("\n\t\t");
            details.push_str(&param.help);
            if param.arity > 0 && !param.binding.is_bool() {
                let plural = if param.arity == 1 { "" } else { "s" };
                let _ = write!(
                    details,
                    "\n\t\t{} argument{} of type {}.",
                    param.arity,
                    plural,
                    param.binding.type_name(),
                );
            }
            if !param.required {
                let _ = write!(details, "\n\t\tdefault: '{}'", param.default);
            }
            details.push('\n');
        }
        details
    }
}

/// Converts one token with [`FromStr`], mapping the failure to
/// [`ErrorKind::MalformedValue`] and keeping the parse error as source.
fn convert<V>(value: &str, expected: &'static str) -> Result<V, Error>
where
    V: FromStr,
    V::Err: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    value.parse().map_err(|err: V::Err| {
        Error::new(ErrorKind::MalformedValue)
            .with_value(value)
            .with_expected(expected)
            .with_source(err.into())
    })
}

/// Replaces every separator-eligible `=` with a space.  An `=` is left
/// alone when it is the first character of the buffer or follows a
/// backslash; the backslash itself is kept.
fn split_equals(buf: &str) -> String {
    let mut out = String::with_capacity(buf.len());
    let mut prev: Option<char> = None;
    for ch in buf.chars() {
        if ch == '=' && prev.is_some_and(|prev| prev != '\\') {
            out.push(' ');
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}

/// Splits the joined argument buffer into token spans.
///
/// A word starting with `"` yields a token running to the next `"`,
/// exclusive of both quotes; the first `"` always ends the token, and the
/// character after it is taken to be a separator.  Any other word runs to
/// the next space.  An unterminated quote yields one final token running
/// to the end of the buffer.
fn tokenize(buf: &str) -> Vec<(usize, usize)> {
    let bytes = buf.as_bytes();
    let mut spans = Vec::new();
    let mut location = 0;
    while let Some(offset) = bytes[location..].iter().position(|&b| b != b' ') {
        let start = location + offset;
        if start == bytes.len() - 1 {
            break;
        }
        if bytes[start] == b'"' {
            match bytes[start + 1..].iter().position(|&b| b == b'"') {
                Some(quote) => {
                    spans.push((start + 1, start + 1 + quote));
                    location = start + 1 + quote + 1;
                }
                None => {
                    spans.push((start + 1, bytes.len()));
                    break;
                }
            }
        } else {
            match bytes[start..].iter().position(|&b| b == b' ') {
                Some(space) => {
                    spans.push((start, start + space));
                    location = start + space + 1;
                }
                None => {
                    spans.push((start, bytes.len()));
                    break;
                }
            }
        }
    }
    spans
}
