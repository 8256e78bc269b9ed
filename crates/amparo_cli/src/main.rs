//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `amparo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use amparo_core::db::open_db_in_memory;
use amparo_core::SqliteNotificationSpool;

fn main() {
    // Exercise the storage bootstrap independently from the mobile
    // shell runtime setup.
    println!("amparo_core version={}", amparo_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => match SqliteNotificationSpool::try_new(&conn) {
            Ok(spool) => match spool.pending() {
                Ok(triggers) => println!("schema=ok pending_triggers={}", triggers.len()),
                Err(err) => println!("schema=error error={err}"),
            },
            Err(err) => println!("schema=error error={err}"),
        },
        Err(err) => println!("db=error error={err}"),
    }
}
