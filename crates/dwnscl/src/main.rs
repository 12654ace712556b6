//! dwnscl - pixelate an image by averaging square blocks.
//!
//! ```text
//! dwnscl <path/to/image> [scale]
//! ```
//!
//! Writes `<image without extension>_<scale>dwnscl.png` next to the input.

mod cli;
mod logger;
mod run;

use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init_logger();

    let invocation = match cli::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            log::debug!("usage error: {}", err);
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
    };

    match run::run(&invocation) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{}: {:?}", err.stage(), err);
            eprintln!("err: {}", err.stage());
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
