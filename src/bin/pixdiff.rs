use anyhow::Result;
use clap::Parser;
use pixdiff::pipeline::{run, DiffConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = DiffConfig::parse();
    run(&cfg)?;

    Ok(())
}
