//! # Storefront Library
//!
//! The honey storefront built on `hive-store`: catalog, pending quantities,
//! cart modal, notifications and mock checkout, plus a terminal front-end.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs           ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── config.rs    ◄─── ConfigState (toml + HIVE_* env)
//! │   └── pending.rs   ◄─── Per-product quantity inputs
//! ├── commands/
//! │   ├── mod.rs       ◄─── Storefront, modal, views
//! │   ├── cart.rs      ◄─── add / change / remove
//! │   └── checkout.rs  ◄─── Mock order placement
//! ├── notification.rs  ◄─── Toasts and their expiry
//! ├── view.rs          ◄─── CartView render model
//! ├── shell.rs         ◄─── stdin/stdout front-end
//! └── error.rs         ◄─── ApiError for commands
//! ```

pub mod commands;
pub mod error;
pub mod notification;
pub mod shell;
pub mod state;
pub mod view;

use std::io;
use std::path::PathBuf;

use hive_core::ProductCatalog;
use hive_store::FileStorage;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Storefront;
use error::ApiError;
use state::ConfigState;

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─── tracing-subscriber, RUST_LOG or default     │
/// │  2. Load Config ────────── storefront.toml + HIVE_* overrides          │
/// │     • unreadable or invalid config → ConfigError                       │
/// │  3. Open Storage ───────── FileStorage under data_dir                  │
/// │     • Linux: ~/.local/share/storefront/cart.json                       │
/// │     • directory cannot be created → StorageError                       │
/// │  4. Restore Cart ───────── absent or corrupt slot → empty cart         │
/// │  5. Run Shell ──────────── until quit or EOF                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(config_path: Option<PathBuf>) -> Result<(), ApiError> {
    init_tracing();

    info!("Starting Hive storefront");

    let config = ConfigState::load(config_path)?;
    let mut shop = open_storefront(config)?;

    let stdin = io::stdin();
    shell::run_session(&mut shop, stdin.lock(), io::stdout().lock())?;

    info!("Storefront closed");
    Ok(())
}

/// Opens the cart file under the configured data dir and restores the session.
pub fn open_storefront(config: ConfigState) -> Result<Storefront<FileStorage>, ApiError> {
    let storage = match &config.data_dir {
        Some(dir) => FileStorage::new(dir)?,
        None => FileStorage::open_default()?,
    };
    info!(dir = ?storage.dir(), key = %config.storage_key, "Cart storage opened");

    Ok(Storefront::new(storage, ProductCatalog::storefront(), config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with shell output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hive_store=trace` - Trace the persistence layer only
/// - Default: INFO, DEBUG for the hive crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hive=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
