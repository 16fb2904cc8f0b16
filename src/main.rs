use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use emojidump::load_dataset;
use emojidump::repl::{run_command, run_loop};

fn main() -> ExitCode {
    init_logging();

    let mut dataset_path = PathBuf::from("emoji.json");
    let mut command: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--command" => match args.next() {
                Some(value) => command = Some(value),
                None => {
                    eprintln!("error: {arg} needs an argument");
                    return ExitCode::from(2);
                }
            },
            "--seed" => match args.next().map(|value| value.parse::<u64>()) {
                Some(Ok(value)) => seed = Some(value),
                _ => {
                    eprintln!("error: --seed needs an integer argument");
                    return ExitCode::from(2);
                }
            },
            _ => dataset_path = PathBuf::from(arg),
        }
    }

    // A dataset failure is fatal; no command can succeed without it.
    let source = match load_dataset(&dataset_path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    if let Some(command) = command {
        return if run_command(&command, &source, &mut rng) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    // Dump everything once before the first command, then hand over to
    // the interactive loop.
    run_command("", &source, &mut rng);
    match run_loop(&source, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("EMOJIDUMP_LOG", "info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
