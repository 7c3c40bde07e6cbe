use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    env_logger::init();
    debug!("Starting application");
    let _args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match pointer_stride::run(&mut out) {
        Ok(report) => {
            info!(
                "char stride: {}, int stride: {}",
                report.char_step.stride(),
                report.int_step.stride()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
