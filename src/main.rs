use anyhow::Result;
use bmpharvest::presentation::cli::{self, Cli};
use clap::Parser;
use console::style;

fn set_up_tracing(default_directive: &str) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_up_tracing(cli.log_directive());

    let report = cli::run(&cli.to_options())?;

    println!();
    println!("{}", report.summary());
    println!("{}", style("[✓] Finished extracting").green().bold());

    Ok(())
}
