use self::{convert::Convert, info::Info};

mod convert;
mod info;

pub enum CliRes {
    NoCli,
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// `args[1]` picks the module. Arguments for the module start at `args[2]`.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Runs command-line options.
pub fn cli() -> CliRes {
    let args: Vec<String> = std::env::args().collect();

    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Convert, &Info];

    let help = || {
        println!(
            "\
retint

Available modules:"
        );
        for module in modules {
            println!("{}", module.name());
        }
    };

    if args.len() < 2 {
        help();
        return CliRes::NoCli;
    }

    for module in modules {
        if args[1] == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::NoCli
}
