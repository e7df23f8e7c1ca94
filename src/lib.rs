//! Menu Storefront
//!
//! Client for per-tenant shop storefront APIs: catalog browsing with search,
//! filters and sorting, a local cart, and table ordering against the shop's
//! suspended-order endpoints. The `menu-storefront` binary is a thin CLI over
//! this library.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod api;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod models;
pub mod orders;
pub mod storefront;

pub use error::{Result, StorefrontError};

use config::StorefrontConfig;

fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,menu_storefront_lib=info",
        1 => "info,menu_storefront_lib=debug",
        _ => "debug,menu_storefront_lib=trace",
    }
}

/// Console (stderr) + daily rolling file logging. `RUST_LOG` wins unless
/// `-v` was given. The returned guard flushes the file writer on drop.
pub fn init_logging(config: &StorefrontConfig, verbosity: u8) -> Option<WorkerGuard> {
    let env_filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(0)))
    } else {
        EnvFilter::new(default_filter(verbosity))
    };

    let log_dir = config.log_dir();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
        warn!(dir = %log_dir.display(), error = %e, "file logging disabled");
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, diagnostics::LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    diagnostics::prune_old_logs(&log_dir);
    Some(guard)
}

/// Binary entry point: parse flags, resolve configuration, start logging and
/// run the command on a tokio runtime.
pub fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let mut config =
        StorefrontConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let _log_guard = init_logging(&config, cli.verbose);
    let build = diagnostics::build_info();
    info!(
        version = build.version,
        git_sha = build.git_sha,
        built_at = build.built_at,
        "menu-storefront starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(cli::execute(cli, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_crate_level() {
        assert_eq!(default_filter(0), "warn,menu_storefront_lib=info");
        assert!(default_filter(1).contains("menu_storefront_lib=debug"));
        assert_eq!(default_filter(5), default_filter(2));
        assert!(EnvFilter::try_new(default_filter(2)).is_ok());
    }
}
