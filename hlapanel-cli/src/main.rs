mod convert;
mod select;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use env_logger::Builder;
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "hlapanel";
    pub const BIN_NAME: &str = "hlapanel";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("hlapanel developers")
        .about("Select representative HLA allele panels for NetMHCpan and NetMHCIIpan from population frequency data.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Print debug messages")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            arg!(-q --quiet "Only print errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(select::cli::create_select_cli())
        .subcommand(convert::cli::create_convert_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        LevelFilter::Error
    } else if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // a logger may already be installed when embedded
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);
    log::debug!("{} version {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // PANEL SELECTION
        //
        Some((select::cli::SELECT_CMD, matches)) => {
            select::handlers::run_select(matches)?;
        }

        //
        // AFND CONVERSION
        //
        Some((convert::cli::CONVERT_CMD, matches)) => {
            convert::handlers::run_convert(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
