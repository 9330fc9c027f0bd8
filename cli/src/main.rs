//! `todolist`: command-line front end for the to-do lists API.

mod cmd;

use anyhow::Result;
use clap::Parser;
use todolist_core::{ClientConfig, TodoApi};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::cmd::Cli;

/// `RUST_LOG` directives, or `warn` when none are given.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::resolve(cli.base_url.as_deref());
    let api = TodoApi::new(&config)?;

    let output = cmd::run(&api, cli.command).await?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn log_filter_honours_plain_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }
}
