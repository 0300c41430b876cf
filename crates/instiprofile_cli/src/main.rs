//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `instiprofile_core` linkage and the configured database.
//! - Keep output deterministic for quick local sanity checks.

use instiprofile_core::db::migrations::{current_version, latest_version};
use instiprofile_core::db::open_db;
use instiprofile_core::{core_version, init_logging, ping, CoreConfig};
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;

    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, &log_dir.to_string_lossy())?;
    }

    println!("instiprofile_core ping={}", ping());
    println!("instiprofile_core version={}", core_version());

    let conn = open_db(&config.db_path)?;
    let schema_version = current_version(&conn)?;
    info!("event=cli_probe module=cli status=ok schema_version={schema_version}");

    println!("db_path={}", config.db_path.display());
    println!("schema_version={schema_version} latest={}", latest_version());
    Ok(())
}
