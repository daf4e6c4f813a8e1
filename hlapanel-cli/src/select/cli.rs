use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const SELECT_CMD: &str = "select";
pub const DEFAULT_OUT_DIR: &str = ".";

pub fn create_select_cli() -> Command {
    Command::new(SELECT_CMD)
        .about("Select class I and class II allele panels covering the most frequent alleles of each locus.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("freq-table")
                .long("freq-table")
                .value_name("FILE")
                .required(true)
                .help("Allele frequency table with locus, allele and frequency columns"),
        )
        .arg(
            Arg::new("netmhcpan-alleles")
                .long("netmhcpan-alleles")
                .value_name("FILE")
                .required(true)
                .help("NetMHCpan supported allele list (MHC_allele_names.txt)"),
        )
        .arg(
            Arg::new("netmhciipan-alleles")
                .long("netmhciipan-alleles")
                .value_name("FILE")
                .required(true)
                .help("NetMHCIIpan supported allele table (alleles_name.txt)"),
        )
        .arg(arg!(--sep <SEP> "Field separator of the frequency table [default: TAB]"))
        .arg(
            arg!(--population <POPULATION> "Keep only rows of these populations")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--coverage <COVERAGE> "Cumulative frequency to reach per locus [default: 0.9]")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("max-class-i")
                .long("max-class-i")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Maximum number of class I alleles [default: 20]"),
        )
        .arg(
            Arg::new("max-class-ii")
                .long("max-class-ii")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Maximum number of class II alleles [default: 15]"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .help("Where to write the panel files [default: .]"),
        )
        .arg(arg!(-c --config <CONFIG> "TOML file with selection parameters"))
        .arg(arg!(--report <REPORT> "Also write a JSON report of the selection"))
}
