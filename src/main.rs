mod cli;
mod config;
pub mod modules;
pub mod utils;

use std::process::ExitCode;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> ExitCode {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let cli_res = cli::cli();

    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    match cli_res {
        cli::CliRes::NoCli => err_exit,
        cli::CliRes::Ok => ok_exit,
        cli::CliRes::Err => err_exit,
    }
}
