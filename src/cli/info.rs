use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::modules::info::dump_info;

use super::{Cli, CliRes};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct InfoCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Info {
        /// Path to a .tmp or .shp file
        path: PathBuf,
    },
}

pub struct Info;

impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let cli = InfoCli::parse();

        let Commands::Info { path } = cli.command;

        match dump_info(path) {
            Ok(dump) => {
                println!("{}", dump);
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        // handled by clap
        unreachable!()
    }
}
