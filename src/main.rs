use clap::Parser;
use env_logger::Env;
use lensbench::{
    config::BenchConfig,
    console::{trace_report, Args, PartialArgs},
    error::BenchResult,
};
use log::info;

fn main() -> BenchResult<()> {
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.to_string()))
        .init();

    //read bench description from file
    info!("Reading bench description {}", args.config_path.display());
    let config = BenchConfig::from_file(&args.config_path)?;

    //build the bench, trace all rays and print the results
    print!("{}", trace_report(&config, args.outline)?);
    Ok(())
}
