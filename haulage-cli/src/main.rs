//! A command line interface to solve cargo allocation and fleet routing problems.
//!
//! ## Usage
//!
//! - solve a problem defined in pragmatic json format and print a text report:
//!
//!     `haulage solve problem.json`
//!
//! - solve several problems, writing json solutions into a file with logging enabled:
//!
//!     `haulage solve first.json second.json -f json -o solutions.json --log`
//!
//! - generate a random problem:
//!
//!     `haulage generate -c 100 -a 50 -t 5 --seed 42 -o problem.json`
//!
//! For more details, simply run
//!
//!     haulage --help

mod commands;

mod cli {
    use super::commands::generate::{get_generate_app, run_generate};
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Haulage Solver")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to cargo allocation and fleet routing solver")
            .subcommand_required(true)
            .subcommand(get_solve_app())
            .subcommand(get_generate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches),
            Some(("generate", generate_matches)) => run_generate(generate_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}
