//! Table provisioning for metrics written to PostgreSQL.
//!
//! A writer discovers the shape of each metric at runtime and must make sure
//! the destination table exists before copying rows into it. This crate owns
//! that step: it remembers which tables are known to exist, probes the
//! catalog when it does not know, and renders `CREATE TABLE` statements from
//! configured templates.
//!
//! ## Core Types
//!
//! - [`TableManager`] — Existence cache plus table creation for one destination
//! - [`TargetColumns`] — Ordered column names, types, and roles for one table
//! - [`Wrapper`] — The database handle the manager executes statements on
//! - [`Config`] — Schema namespace and the two `CREATE TABLE` templates
//!
//! ## Statement Synthesis
//!
//! - [`quote()`] / [`qualify()`] — Identifier quoting
//! - [`render()`] — `{TABLE}` / `{COLUMNS}` placeholder substitution
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
mod columns;
mod config;
mod ident;
mod manager;
mod template;
mod wrapper;

pub use columns::*;
pub use config::*;
pub use ident::*;
pub use manager::*;
pub use template::*;
pub use wrapper::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Establishes a database connection.
///
/// Spawns the connection driver onto the current runtime and returns an
/// `Arc<Client>` suitable for sharing across writer tasks.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Initialize terminal logging at INFO level.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::warn!("logger already initialized");
    }
}
