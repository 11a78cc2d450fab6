//! Per-call connection acquisition for SQLite.
//!
//! # Responsibility
//! - Hold the database location supplied at process start.
//! - Hand out a fresh, fully bootstrapped connection for every repository
//!   operation.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.
//! - No retry or backoff: an open failure surfaces to the caller as-is.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Source of scoped connections for the repository layer.
///
/// The provider is the only state repositories share: an immutable database
/// path. Every call to [`ConnectionProvider::connect`] opens a new
/// connection; dropping it releases the handle on every exit path.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    path: PathBuf,
}

impl ConnectionProvider {
    /// Creates a provider for the database at `path`.
    ///
    /// Nothing is opened or validated here; the first `connect` call is
    /// where open and migration failures surface.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured database location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection, applies pragmas and pending migrations.
    ///
    /// # Side effects
    /// - Emits `db_open` logging events with duration and status.
    pub fn connect(&self) -> DbResult<Connection> {
        let started_at = Instant::now();

        let mut conn = match Connection::open(&self.path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match bootstrap_connection(&mut conn) {
            Ok(()) => {
                info!(
                    "event=db_open module=db status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(conn)
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error duration_ms={} error_code=db_bootstrap_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Opens an in-memory SQLite database and applies all pending migrations.
///
/// In-memory databases vanish with their connection, so this is only useful
/// for single-connection migration and schema tests.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(&mut conn)?;
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
