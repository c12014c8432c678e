use anyhow::Result;
use clap::Parser;
use spectre::cli::{self, Cli, LogLevelArg};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.log_level.map(LogLevelArg::to_level_filter));

    log::debug!("spectre {} starting", spectre::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cli, &mut out)
}
