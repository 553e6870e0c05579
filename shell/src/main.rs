use anyhow::Result;
use clap::Parser;
use posts_core::{install_panic_monitor, TracingMonitor};
use posts_shell::{logging, Cli, Shell};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_format, cli.verbose);
    install_panic_monitor(TracingMonitor);

    let mut shell = Shell::from_cli(&cli)?;
    let page = shell.open(&cli.route);
    println!("{page}");

    if cli.click {
        info!(route = %cli.route, "clicking error trigger");
        shell.click();
    }
    Ok(())
}
