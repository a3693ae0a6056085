use anyhow::Result;
use artmatch::cli::SubCommandExtend;
use artmatch::config::{Opts, SubCommand};
use clap::Parser;
use env_logger::Env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    match &opts.subcmd {
        SubCommand::Watch(config) => config.run(&opts).await,
        SubCommand::Compare(config) => config.run(&opts).await,
    }
}
