use clap::Parser;
use env_logger::{Builder, Env};

use terroute_lib::cli::{Cli, log_filter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    Builder::from_env(Env::default().default_filter_or(log_filter(cli.verbose))).init();

    let out = terroute_lib::run(&cli)?;
    if let Some(map) = &out.overlay {
        print!("{map}");
    }
    println!("{}", out.report.to_json()?);
    Ok(())
}
