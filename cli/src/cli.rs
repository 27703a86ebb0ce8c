//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::ports::{ConfigStore, PlatformProbe};
use crate::commands;
use crate::domain::SupportedPlatform;
use crate::infra::config::{CONFIG_ENV, YamlConfigStore};
use crate::infra::host::HostPlatform;
use crate::output::OutputContext;

/// Provision the Firebird embedded engine on Android
#[derive(Parser)]
#[command(
    name = "fbprep",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Config file [default: <config dir>/fbprep/config.yaml]
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create engine directories, deploy engine files, set environment
    Provision(commands::provision::ProvisionArgs),

    /// Show the resolved layout and current environment
    Show(commands::LayoutArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ProvisionError::UnsupportedPlatform`] for
    /// `provision` and `show` off Android, before the config is read.
    /// Otherwise returns an error if the config cannot be loaded or the
    /// command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            config,
            command,
        } = self;
        // JSON mode keeps stdout machine-readable.
        let ctx = OutputContext::new(no_color, quiet || json);
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::Provision(args) => {
                SupportedPlatform::check(HostPlatform.os())?;
                let config = YamlConfigStore::new(config).load()?;
                commands::provision::run(&ctx, &config, args, json).await
            }
            Command::Show(args) => {
                SupportedPlatform::check(HostPlatform.os())?;
                let config = YamlConfigStore::new(config).load()?;
                commands::show::run(&ctx, &config, args, json).await
            }
        }
    }
}
