//! fbprep - provisions the Firebird embedded engine on Android

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fbprep_cli::cli::Cli;
use fbprep_cli::output::{OutputContext, json};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_output = cli.json;
    let ctx = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        let message = format!("{e:#}");
        match json_output
            .then(|| json::format_error(&message, json::error_code(&e)))
            .and_then(Result::ok)
        {
            Some(out) => println!("{out}"),
            None => ctx.error(&message),
        }
        std::process::exit(1);
    }
}
