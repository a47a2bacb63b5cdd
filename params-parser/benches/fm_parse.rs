/*!
# Benchmark: `params_parser::Parser`

Covers the full declare-tokenize-drive path over a representative command
line, plus help rendering on its own.
*/

use brunch::{
    Bench,
    benches,
};
use params_parser::{Binding, Decl, Parser};

/// One representative command line: a scalar, a quoted value, and a
/// fixed-arity triple.
const CLI: [&str; 8] = [
    "--iterations",
    "88",
    "--name",
    "\"Jory Schossau\"",
    "--seeds",
    "17.0",
    "16.0",
    "62.0",
];

benches!(
    Bench::new("params_parser::Parser::parse(8 tokens)")
        .run(|| {
            let mut iterations = 0i32;
            let mut seeds = Vec::<f32>::new();
            let mut name = String::new();
            let mut parser = Parser::new();
            parser
                .declare(Decl::new(
                    Binding::Int(&mut iterations),
                    "--iterations",
                    "Iteration count.",
                ))
                .unwrap();
            parser
                .declare(
                    Decl::new(Binding::FloatSeq(&mut seeds), "--seeds", "Simulation seeds.")
                        .arity(3)
                        .required(false),
                )
                .unwrap();
            parser
                .declare(
                    Decl::new(Binding::Str(&mut name), "--name", "Run name.")
                        .default_value("simulation"),
                )
                .unwrap();
            parser.parse(CLI)
        }),

    Bench::spacer(),

    Bench::new("params_parser::Parser::render_help()")
        .run(|| {
            let mut iterations = 0i32;
            let mut seeds = Vec::<f32>::new();
            let mut parser = Parser::new();
            parser
                .declare(Decl::new(
                    Binding::Int(&mut iterations),
                    "--iterations",
                    "Iteration count.",
                ))
                .unwrap();
            parser
                .declare(
                    Decl::new(Binding::FloatSeq(&mut seeds), "--seeds", "Simulation seeds.")
                        .arity(3)
                        .required(false),
                )
                .unwrap();
            parser.render_help()
        }),
);
