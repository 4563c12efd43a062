use anyhow::Context;
use roxplan::{cli, init_logging, Config};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load_or_default().context("Failed to load configuration")?;
    let stdout = std::io::stdout();
    cli::run(&args, &config, &mut stdout.lock())
}
