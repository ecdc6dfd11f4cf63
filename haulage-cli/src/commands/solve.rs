#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use haulage_cli::core::prelude::*;
use haulage_cli::extensions::solve::config::{Config, create_environment, create_limits, read_config};
use haulage_cli::extensions::solve::{SolvedProblem, solve_problems};
use haulage_cli::pragmatic::format::solution::{Solution as ApiSolution, create_solution};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CONFIG_ARG_NAME: &str = "config";
const OUTPUT_FORMAT_ARG_NAME: &str = "output-format";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves cargo allocation and routing problems defined in pragmatic format")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets problem files to solve").required(true).num_args(1..).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the solver config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUTPUT_FORMAT_ARG_NAME)
                .help("Specifies output format")
                .short('f')
                .long(OUTPUT_FORMAT_ARG_NAME)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), GenericError> {
    let config = get_config(matches)?;
    let paths =
        matches.get_many::<String>(PROBLEM_ARG_NAME).map(|paths| paths.collect::<Vec<_>>()).unwrap_or_default();
    let readers = paths
        .iter()
        .map(|path| open_file(path, "problem").map(BufReader::new))
        .collect::<Result<Vec<_>, _>>()?;

    let results = solve_problems(readers, &create_limits(&config), &create_environment(&config));

    let solved = paths
        .iter()
        .zip(results)
        .map(|(path, result)| result.map_err(|err| format!("cannot solve problem '{path}': {err}").into()))
        .collect::<Result<Vec<_>, GenericError>>()?;

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let writer = create_write_buffer(out_file);

    match matches.get_one::<String>(OUTPUT_FORMAT_ARG_NAME).map(String::as_str) {
        Some("json") => write_json(solved.as_slice(), writer),
        _ => write_text(solved.as_slice(), writer),
    }
}

fn get_config(matches: &ArgMatches) -> Result<Config, GenericError> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    Ok(if matches.get_flag(LOG_ARG_NAME) { config.with_logging() } else { config })
}

fn write_text(solved: &[SolvedProblem], mut writer: BufWriter<Box<dyn Write>>) -> Result<(), GenericError> {
    let reports = solved.iter().map(|(_, solution)| format_report(solution)).collect::<Vec<_>>();

    writer.write_all(reports.join("\n").as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Writes a single solution as json object and many solutions as json array.
fn write_json(solved: &[SolvedProblem], writer: BufWriter<Box<dyn Write>>) -> Result<(), GenericError> {
    let mut solutions =
        solved.iter().map(|(problem, solution)| create_solution(problem, solution)).collect::<Vec<ApiSolution>>();

    let result = if solutions.len() == 1 {
        serde_json::to_writer_pretty(writer, &solutions.swap_remove(0))
    } else {
        serde_json::to_writer_pretty(writer, &solutions)
    };

    result.map_err(|err| format!("cannot write solution: '{err}'").into())
}
