#[cfg(test)]
#[path = "../../tests/unit/commands/train_test.rs"]
mod train_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use somap::prelude::*;
use somap_cli::extensions::config::read_network_config;
use somap_cli::extensions::export::write_network_state;
use somap_cli::extensions::import::read_csv_inputs;
use somap_cli::extensions::interruption::create_interruption_quota;
use std::io::BufReader;
use std::sync::Arc;

const INPUT_ARG_NAME: &str = "INPUT";
const WIDTH_ARG_NAME: &str = "width";
const HEIGHT_ARG_NAME: &str = "height";
const ITERATIONS_ARG_NAME: &str = "iterations";
const LEARNING_RATE_ARG_NAME: &str = "learning-rate";
const RADIUS_POLICY_ARG_NAME: &str = "radius-policy";
const CONFIG_ARG_NAME: &str = "config";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const PARALLEL_ARG_NAME: &str = "parallel";
const THREADS_ARG_NAME: &str = "threads";
const TIME_ARG_NAME: &str = "max-time";
const HAS_HEADERS_ARG_NAME: &str = "has-headers";
const LOG_ARG_NAME: &str = "log";
const LOG_EVERY_ARG_NAME: &str = "log-every";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_train_app() -> Command {
    Command::new("train")
        .about("Trains Self-Organizing Map on numeric vectors from csv file")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets the csv file with training vectors").required(true).index(1))
        .arg(
            Arg::new(WIDTH_ARG_NAME)
                .help("Specifies amount of neurons along x axis")
                .short('x')
                .long(WIDTH_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(HEIGHT_ARG_NAME)
                .help("Specifies amount of neurons along y axis")
                .short('y')
                .long(HEIGHT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies amount of full passes over training vectors")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LEARNING_RATE_ARG_NAME)
                .help("Specifies initial learning rate")
                .short('r')
                .long(LEARNING_RATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RADIUS_POLICY_ARG_NAME)
                .help("Specifies how initial neighborhood radius is derived from map size")
                .long(RADIUS_POLICY_ARG_NAME)
                .required(false)
                .value_parser(["exact", "truncated"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to network configuration file, flags override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to get reproducible weights")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLEL_ARG_NAME)
                .help("Specifies whether data parallel training is enabled")
                .short('p')
                .long(PARALLEL_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of threads used in parallel mode")
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time training runs in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(HAS_HEADERS_ARG_NAME)
                .help("Specifies whether the first csv record is a header")
                .long(HAS_HEADERS_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_EVERY_ARG_NAME)
                .help("Specifies how often iteration progress is logged")
                .long(LOG_EVERY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for network state output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs training command.
pub fn run_train<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or_else(|| "no input file specified".to_string())?;
    let has_headers = matches.get_flag(HAS_HEADERS_ARG_NAME);
    let inputs = read_csv_inputs(BufReader::new(open_file(input_path, "input")?), has_headers)?;

    let input_dimension =
        inputs.first().map(|input| input.len()).ok_or_else(|| format!("no training vectors in '{input_path}'"))?;

    let config = get_network_config(matches, input_dimension)?;
    let environment = Arc::new(get_environment(matches)?);
    let telemetry_mode = if matches.get_flag(LOG_ARG_NAME) {
        let log_every = parse_int_value::<usize>(matches, LOG_EVERY_ARG_NAME, "log every")?.unwrap_or(100);
        TelemetryMode::OnlyLogging { log_every }
    } else {
        TelemetryMode::None
    };

    let out_result = matches
        .get_one::<String>(OUT_RESULT_ARG_NAME)
        .map(|path| create_file(path, "out result"))
        .transpose()?;

    let mut network = Network::new(config, environment.clone())
        .map_err(|err| format!("cannot create network: '{err}'"))?
        .with_telemetry(telemetry_mode);

    let summary = network.train(inputs.as_slice()).map_err(|err| format!("cannot train network: '{err}'"))?;
    if summary.is_interrupted {
        (environment.logger)(&format!("training is interrupted after {} iterations", summary.iterations));
    }

    let error = network.quantization_error(inputs.as_slice()).map_err(|err| err.to_string())?;
    (environment.logger)(&format!("quantization error: {error:.5}"));

    write_network_state(out_writer_func(out_result), &network)
}

fn get_network_config(matches: &ArgMatches, input_dimension: usize) -> Result<NetworkConfig, String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_network_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let width = parse_int_value::<usize>(matches, WIDTH_ARG_NAME, "width")?.unwrap_or(config.width);
    let height = parse_int_value::<usize>(matches, HEIGHT_ARG_NAME, "height")?.unwrap_or(config.height);
    let iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "iterations")?.unwrap_or(config.iterations);
    let learning_rate =
        parse_float_value::<Float>(matches, LEARNING_RATE_ARG_NAME, "learning rate")?.unwrap_or(config.learning_rate);
    let radius_policy = match matches.get_one::<String>(RADIUS_POLICY_ARG_NAME).map(String::as_str) {
        Some("exact") => RadiusPolicy::Exact,
        Some("truncated") => RadiusPolicy::Truncated,
        Some(other) => return Err(format!("unknown radius policy: '{other}'")),
        None => config.radius_policy,
    };

    Ok(NetworkConfig::new(width, height, input_dimension, iterations, learning_rate).with_radius_policy(radius_policy))
}

fn get_environment(matches: &ArgMatches) -> Result<Environment, String> {
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let threads = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads")?;

    let logger: InfoLogger =
        if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg| println!("{msg}")) } else { Arc::new(|_| {}) };

    let random: Arc<dyn Random> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let parallelism = match (matches.get_flag(PARALLEL_ARG_NAME), threads) {
        (true, Some(0)) => return Err("amount of threads should be positive".to_string()),
        (true, threads) => Parallelism::with_threads(threads.unwrap_or_else(num_cpus::get)),
        (false, _) => Parallelism::Sequential,
    };

    Ok(Environment::new(random, Some(create_interruption_quota(max_time)), parallelism, logger))
}
