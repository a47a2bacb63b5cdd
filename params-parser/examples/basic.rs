//! This is a basic example with manual error printing around `parse`.
use params_parser::{Binding, Decl, Error, Parser};

fn execute() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut number = 0i64;
    let mut shout = false;

    let mut parser = Parser::new();
    parser.declare(
        Decl::new(Binding::Long(&mut number), "--number", "The number to print.")
            .default_value("42"),
    )?;
    parser.declare(Decl::new(
        Binding::Bool(&mut shout),
        "--shout",
        "Shouts the number.",
    ))?;
    parser.parse(&args)?;

    if shout {
        println!("THE NUMBER IS {}!", number);
    } else {
        println!("the number is {}", number);
    }
    Ok(())
}

fn main() {
    use std::error::Error;
    if let Err(err) = execute() {
        eprintln!("error: {}", err);
        if let Some(source) = err.source() {
            eprintln!("  cause: {}", source);
        }
        std::process::exit(1);
    }
}
