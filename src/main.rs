use log::error;
use placement_ga::ga::{GaConfig, GaRunner};
use placement_ga::report::Report;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = GaConfig::default();
    match GaRunner::run(&config) {
        Ok(result) => {
            println!("{}", Report::new(&result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("invalid configuration: {e}");
            ExitCode::FAILURE
        }
    }
}
