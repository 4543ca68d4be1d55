#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod sinks;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Export tool for MH4U textures and models
struct TopLevel {
    /// log per-file and per-submesh detail
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Texture(commands::texture::TextureCmd),
    Model(commands::model::ModelCmd),
    Info(commands::info::InfoCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::try_from_default_env(), cli.verbose))
        .init();

    match cli.command {
        Commands::Texture(cmd) => {
            commands::texture::handle_texture_command(cmd)?;
        }
        Commands::Model(cmd) => {
            commands::model::handle_model_command(cmd)?;
        }
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
fn log_filter<E>(from_env: Result<EnvFilter, E>, verbose: bool) -> EnvFilter {
    from_env.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}
