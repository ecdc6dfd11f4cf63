#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, ArgMatches, Command, value_parser};
use haulage_cli::extensions::generate::{GenerateSizes, generate_problem};
use haulage_cli::pragmatic::format::problem::serialize_problem;
use haulage_cli::pragmatic::validation::{ValidationContext, ValidationLimits};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const CARGOS_SIZE_ARG_NAME: &str = "cargos-size";
const ADDRESSES_SIZE_ARG_NAME: &str = "addresses-size";
const TRUCKS_SIZE_ARG_NAME: &str = "trucks-size";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const RANDOM_SEED_ARG_NAME: &str = "seed";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random solvable problems for testing")
        .arg(
            Arg::new(CARGOS_SIZE_ARG_NAME)
                .help("Amount of cargo in generated problem")
                .short('c')
                .long(CARGOS_SIZE_ARG_NAME)
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(ADDRESSES_SIZE_ARG_NAME)
                .help("Amount of addresses in generated problem")
                .short('a')
                .long(ADDRESSES_SIZE_ARG_NAME)
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(TRUCKS_SIZE_ARG_NAME)
                .help("Amount of trucks in generated problem")
                .short('t')
                .long(TRUCKS_SIZE_ARG_NAME)
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed to get reproducible problems")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false)
                .value_parser(value_parser!(u64)),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), GenericError> {
    let sizes = GenerateSizes {
        cargos: get_size(matches, CARGOS_SIZE_ARG_NAME),
        addresses: get_size(matches, ADDRESSES_SIZE_ARG_NAME),
        trucks: get_size(matches, TRUCKS_SIZE_ARG_NAME),
    };

    let mut random = match matches.get_one::<u64>(RANDOM_SEED_ARG_NAME) {
        Some(seed) => SmallRng::seed_from_u64(*seed),
        None => SmallRng::from_entropy(),
    };

    let problem = generate_problem(&sizes, &mut random);

    ValidationContext::new(&problem, &ValidationLimits::default()).validate().map_err(|errors| {
        GenericError::from(format!("generated problem has some validation errors:\n{}", errors.format_many("\n")))
    })?;

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    serialize_problem(create_write_buffer(out_file), &problem)
        .map_err(|err| format!("cannot serialize generated problem: '{err}'").into())
}

fn get_size(matches: &ArgMatches, arg_name: &str) -> usize {
    matches.get_one::<usize>(arg_name).copied().unwrap_or_default()
}
