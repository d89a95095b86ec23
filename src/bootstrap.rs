use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use crate::errors::DataError;
use crate::modules::models::driver::Driver;
use crate::modules::service;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Bring the sqlite store up to the current schema. Startup-only; a store
/// that cannot be migrated is fatal to the process.
pub fn run_migrations(conn: &mut SqliteConnection) {
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// One-shot demo seed, run once at process start with an explicit
/// connection. Only touches an empty store; an existing store, even one the
/// user emptied of laps, is left alone.
pub fn seed_demo_data(conn: &mut SqliteConnection) -> Result<(), DataError> {
    if Driver::count(conn)? > 0 {
        return Ok(());
    }

    let driver = service::create_driver(conn, "Lewis Hamilton")?;
    service::create_lap(conn, &driver.id, 85.4, "Silverstone")?;
    service::create_lap(conn, &driver.id, 86.2, "Monza")?;

    info!(target:"bootstrap", "Seeded demo driver {} with 2 laps", driver.id);
    Ok(())
}
