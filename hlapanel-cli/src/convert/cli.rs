use clap::{Arg, ArgAction, Command, arg};

pub const CONVERT_CMD: &str = "convert";
pub const DEFAULT_OUT: &str = "hla_freq.tsv";

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Convert an Allele Frequency Net Database dump into a frequency table.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("afnd")
                .required(true)
                .help("AFND TSV dump (optionally gzipped), or - for stdin"),
        )
        .arg(arg!(--output <OUTPUT> "Frequency table to write [default: hla_freq.tsv]"))
        .arg(
            arg!(--"list-populations" "Print the populations found in the dump")
                .action(ArgAction::SetTrue),
        )
}
