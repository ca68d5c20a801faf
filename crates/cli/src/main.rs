use anyhow::Result;
use clap::Parser;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod app;

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = app::Args::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&args, &mut out)
}
