//! The classic declare-and-parse setup: a required iteration count, an
//! optional triple of seeds, a defaulted run name, and `--help`.
use params_parser::{Binding, Decl, Error, Parser};

fn main() -> Result<(), Error> {
    let mut show_help = false;
    let mut iterations = 0i32;
    let mut seeds = Vec::<f32>::new();
    let mut name_of_run = String::new();

    let mut parser = Parser::new();
    parser.declare(Decl::new(
        Binding::Int(&mut iterations),
        "--iterations",
        "The number of iterations to perform.",
    ))?;
    parser.declare(
        Decl::new(Binding::FloatSeq(&mut seeds), "--seeds", "The seeds to begin simulation.")
            .arity(3)
            .required(false),
    )?;
    parser.declare(
        Decl::new(
            Binding::Str(&mut name_of_run),
            "--name",
            "The name for this simulation run.",
        )
        .default_value("simulation"),
    )?;
    parser.declare_help(&mut show_help)?;

    let details = parser.render_help();
    parser.parse_env_or_exit();

    if show_help {
        println!("{}", details);
        return Ok(());
    }

    println!(
        "run {:?}: {} iterations, seeds {:?}",
        name_of_run, iterations, seeds
    );
    Ok(())
}
