use std::error::Error as _;

use params_parser::{Binding, Decl, Error, ErrorKind, Parser};

#[test]
fn test_unrecognized_option() -> Result<(), Error> {
    let mut seed = 0i32;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::Int(&mut seed), "--seed", "The seed."))?;

    let err = parser.parse(["--sede", "3"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedOption);
    assert_eq!(err.option(), Some("--sede"));
    assert_eq!(err.to_string(), "unrecognized option '--sede' in invocation");
    Ok(())
}

#[test]
fn test_malformed_value() -> Result<(), Error> {
    let mut seed = 0i32;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::Int(&mut seed), "--seed", "The seed."))?;

    let err = parser.parse(["--seed", "abc"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
    assert_eq!(err.option(), Some("--seed"));
    assert_eq!(err.value(), Some("abc"));
    assert_eq!(
        err.to_string(),
        "invalid value \"abc\" for option '--seed': expected int"
    );
    assert!(err.source().is_some());
    Ok(())
}

#[test]
fn test_uint_rejects_negative_text() -> Result<(), Error> {
    let mut count = 0u32;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::Uint(&mut count), "--count", "A count."))?;

    let err = parser.parse(["--count", "-3"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
    assert_eq!(
        err.to_string(),
        "invalid value \"-3\" for option '--count': expected unsigned int"
    );
    Ok(())
}

#[test]
fn test_missing_required() -> Result<(), Error> {
    let mut iterations = 0i32;
    let mut parser = Parser::new();
    parser.declare(Decl::new(
        Binding::Int(&mut iterations),
        "--iterations",
        "Iteration count.",
    ))?;

    let err = parser.parse(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
    assert_eq!(err.option(), Some("--iterations"));
    assert_eq!(
        err.to_string(),
        "option '--iterations' required, and not found, or incomplete"
    );
    Ok(())
}

#[test]
fn test_missing_required_reports_first_by_name() -> Result<(), Error> {
    let mut zeta = 0i32;
    let mut alpha = 0i32;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::Int(&mut zeta), "--zeta", "Last."))?;
    parser.declare(Decl::new(Binding::Int(&mut alpha), "--alpha", "First."))?;

    let err = parser.parse(Vec::<&str>::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
    assert_eq!(err.option(), Some("--alpha"));
    Ok(())
}

#[test]
fn test_too_few_values_then_end_of_input() -> Result<(), Error> {
    let mut seeds = Vec::<f32>::new();
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::FloatSeq(&mut seeds), "--seeds", "Seeds.").arity(3))?;

    let err = parser.parse(["--seeds", "1", "2"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
    assert_eq!(err.option(), Some("--seeds"));
    // The values read before the count ran out stay written.
    assert_eq!(seeds, vec![1.0, 2.0]);
    Ok(())
}

#[test]
fn test_too_few_values_then_option_is_consumed_as_value() -> Result<(), Error> {
    let mut seeds = Vec::<i32>::new();
    let mut verbose = false;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::IntSeq(&mut seeds), "--seeds", "Seeds.").arity(3))?;
    parser.declare(Decl::new(Binding::Bool(&mut verbose), "--verbose", "Talks."))?;

    // The driver never peeks: "--verbose" lands in value position and
    // fails the int conversion.
    let err = parser.parse(["--seeds", "1", "--verbose"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
    assert_eq!(err.option(), Some("--seeds"));
    assert_eq!(err.value(), Some("--verbose"));
    Ok(())
}

#[test]
fn test_too_few_string_values_absorb_option_name() -> Result<(), Error> {
    let mut names = Vec::<String>::new();
    let mut verbose = false;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::StrSeq(&mut names), "--names", "Names.").arity(3))?;
    parser.declare(Decl::new(Binding::Bool(&mut verbose), "--verbose", "Talks."))?;

    // String conversion cannot fail, so "--verbose" is silently absorbed
    // as a value and the fixed count still comes up short.
    let err = parser.parse(["--names", "a", "--verbose"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
    assert_eq!(err.option(), Some("--names"));
    assert_eq!(names, vec!["a", "--verbose"]);
    assert!(!verbose);
    Ok(())
}

#[test]
fn test_unbounded_option_swallows_later_required_option() -> Result<(), Error> {
    let mut files = Vec::<String>::new();
    let mut seed = 0i32;
    let mut parser = Parser::new();
    parser.declare(
        Decl::new(Binding::StrSeq(&mut files), "--files", "Files.")
            .arity(-1)
            .required(false),
    )?;
    parser.declare(Decl::new(Binding::Int(&mut seed), "--seed", "The seed."))?;

    let err = parser.parse(["--files", "a.txt", "--seed", "3"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
    assert_eq!(err.option(), Some("--seed"));
    assert_eq!(files, vec!["a.txt", "--seed", "3"]);
    Ok(())
}

#[test]
fn test_boolean_default_misuse() {
    let mut flag = false;
    let mut parser = Parser::new();
    let err = parser
        .declare(Decl::new(Binding::Bool(&mut flag), "--flag", "A flag.").default_value("maybe"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstructionMisuse);
    assert_eq!(err.option(), Some("--flag"));
    assert_eq!(
        err.to_string(),
        "invalid declaration for option '--flag': boolean default must be \"true\" or \"false\", got 'maybe'"
    );
}

#[test]
fn test_arity_needs_sequence_binding() {
    let mut seed = 0i32;
    let mut parser = Parser::new();
    let err = parser
        .declare(Decl::new(Binding::Int(&mut seed), "--seeds", "Seeds.").arity(3))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstructionMisuse);
    assert_eq!(
        err.to_string(),
        "invalid declaration for option '--seeds': arity 3 requires a sequence binding"
    );
}

#[test]
fn test_arity_one_needs_scalar_binding() {
    let mut seeds = Vec::<i32>::new();
    let mut parser = Parser::new();
    let err = parser
        .declare(Decl::new(Binding::IntSeq(&mut seeds), "--seed", "The seed."))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstructionMisuse);
    assert_eq!(
        err.to_string(),
        "invalid declaration for option '--seed': arity 1 requires a scalar binding"
    );
}

#[test]
fn test_arity_zero_is_rejected() {
    let mut seeds = Vec::<i32>::new();
    let mut parser = Parser::new();
    let err = parser
        .declare(Decl::new(Binding::IntSeq(&mut seeds), "--seeds", "Seeds.").arity(0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstructionMisuse);
    assert_eq!(
        err.to_string(),
        "invalid declaration for option '--seeds': arity must be a positive count or -1, got 0"
    );
}

#[test]
fn test_malformed_default_reported_at_declare_time() {
    let mut seed = 0i32;
    let mut parser = Parser::new();
    let err = parser
        .declare(Decl::new(Binding::Int(&mut seed), "--seed", "The seed.").default_value("abc"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
    assert_eq!(err.option(), Some("--seed"));
    assert_eq!(err.value(), Some("abc"));
}

#[test]
fn test_error_debug_lists_fields() -> Result<(), Error> {
    let mut seed = 0i32;
    let mut parser = Parser::new();
    parser.declare(Decl::new(Binding::Int(&mut seed), "--seed", "The seed."))?;

    let err = parser.parse(["--sede"]).unwrap_err();
    let debug = format!("{:?}", err);
    assert!(debug.contains("UnrecognizedOption"));
    assert!(debug.contains("--sede"));
    Ok(())
}
