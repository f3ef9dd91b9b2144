use std::io::{self, BufRead, Write};

use clap::Parser;
use infixa::evaluate;

/// infixa evaluates infix math expressions such as `2sqrt(9)2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start an interactive prompt that evaluates one expression per line.
    #[arg(short, long)]
    interactive: bool,

    /// The expression to evaluate.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.interactive {
        repl();
        return;
    }

    let Some(expression) = args.expression else {
        eprintln!("No expression given. Pass one as an argument, or use --interactive.");
        std::process::exit(1);
    };

    match evaluate(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn repl() {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            return;
        }

        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
