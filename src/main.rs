use cipherlab::cmd::Cli;
use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    Cli::parse().exe()
}
