//! This example shows an unbounded option: `--files` consumes every
//! remaining token, so it has to come last on the command line.
use params_parser::{Binding, Decl, Error, Parser};

fn main() -> Result<(), Error> {
    let mut verbose = false;
    let mut label = String::new();
    let mut files = Vec::<String>::new();

    let mut parser = Parser::new();
    parser.declare(Decl::new(
        Binding::Bool(&mut verbose),
        "--verbose",
        "Talks more.",
    ))?;
    parser.declare(
        Decl::new(Binding::Str(&mut label), "--label", "A label for this batch.")
            .default_value("batch"),
    )?;
    parser.declare(
        Decl::new(Binding::StrSeq(&mut files), "--files", "The files to process.")
            .arity(-1)
            .required(false),
    )?;
    parser.parse_env_or_exit();

    println!("label: {}", label);
    println!("files: {:?}", files);
    println!("verbose: {}", verbose);
    Ok(())
}
