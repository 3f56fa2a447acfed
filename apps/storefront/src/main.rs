//! # Storefront Entry Point
//!
//! ```text
//! storefront [CONFIG_PATH]
//! ```
//!
//! Without a path the platform config dir is searched for `storefront.toml`.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    match storefront_lib::run(config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
