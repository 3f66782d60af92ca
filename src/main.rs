use std::env;
use std::process;

use hellpod::cli::run_with_args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    process::exit(run_with_args(&args));
}
