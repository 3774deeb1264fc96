//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskmaster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskmaster_core::db::open_db_in_memory;
use taskmaster_core::{Priority, SqliteTaskStore, TaskListController};

fn main() {
    println!("taskmaster_core version={}", taskmaster_core::core_version());

    // Exercise the full load -> mutate -> persist path against a throwaway
    // in-memory database.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("db bootstrap failed: {err}");
            std::process::exit(1);
        }
    };
    let probe = SqliteTaskStore::try_new(&conn)
        .map_err(|err| err.to_string())
        .and_then(|store| TaskListController::load(store).map_err(|err| err.to_string()))
        .and_then(|mut controller| {
            controller
                .add("smoke probe", Priority::Medium)
                .map_err(|err| err.to_string())?;
            Ok(controller.counts())
        });

    match probe {
        Ok(counts) => println!(
            "taskmaster_core probe pending={} total={}",
            counts.pending, counts.total
        ),
        Err(err) => {
            eprintln!("probe failed: {err}");
            std::process::exit(1);
        }
    }
}
