use anyhow::Context;
use clap::Parser;
use iface_config::IfaceConfig;

mod cli;
mod generate;

fn main() {
    if let Err(error) = run() {
        eprintln!("ifacemaker error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = IfaceConfig::load().context("failed to load ifacemaker configuration")?;
    let settings = cli.settings(&config.generate);
    let rendered = generate::generate(&settings)?;
    generate::write_output(settings.output.as_deref(), &rendered)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("IFACEMAKER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
