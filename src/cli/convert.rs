use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::modules::convert::Convert as ConvertModule;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct ConvertCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Convert {
        /// Files to retint (.tmp or .shp), rewritten in place
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Source palette, overrides the config file
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Target palette, overrides the config file
        #[arg(short, long)]
        target: Option<PathBuf>,
    },
}

pub struct Convert;

impl Cli for Convert {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn cli(&self) -> CliRes {
        let cli = ConvertCli::parse();

        let Commands::Convert {
            paths,
            source,
            target,
        } = cli.command;

        let mut convert = ConvertModule::new();

        convert.paths(&paths);

        if let Some(source) = source {
            convert.source_palette(source);
        }

        if let Some(target) = target {
            convert.target_palette(target);
        }

        match convert.run() {
            Ok(_) => CliRes::Ok,
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
