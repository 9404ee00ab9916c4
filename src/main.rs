use clap::Parser;
use numera::{
    evaluate_line, repl,
    reporting::{Diagnostic, Reporter},
};

/// numera is an interactive calculator for arithmetic and logical
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression, print its value, and exit.
    #[arg(short, long)]
    eval: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.eval {
        evaluate_once(&expression);
        return;
    }

    println!("numera - expression calculator");
    println!("Type an expression, or .help for the available commands.");

    if let Err(error) = repl::run_repl(&repl::default_commands()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn evaluate_once(expression: &str) {
    let mut reporter = Reporter::new();
    let result = evaluate_line(expression, &mut reporter);

    for diagnostic in reporter.drain() {
        eprintln!("{diagnostic}");
    }

    match result {
        Ok(value) => println!("{value}"),
        Err(error) => {
            eprintln!("{}", Diagnostic::new(error.to_string()));
            std::process::exit(1);
        },
    }
}
