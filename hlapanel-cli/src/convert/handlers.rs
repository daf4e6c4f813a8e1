use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use log::info;

use hlapanel_io::{convert_afnd_file, distinct_populations};

use super::cli::DEFAULT_OUT;

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("afnd")
        .ok_or_else(|| anyhow!("A path to an AFND dump is required."))?;

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let records = convert_afnd_file(Path::new(input), Path::new(output))
        .with_context(|| format!("Failed to convert {}", input))?;

    let populations = distinct_populations(&records);
    info!(
        "Converted {} rows across {} populations",
        records.len(),
        populations.len()
    );

    if matches.get_flag("list-populations") {
        for population in populations {
            println!("{}", population);
        }
    }

    Ok(())
}
