//! JSON File Datastore — Console Harness
//!
//! Walks an `Employee` repository through its lifecycle and prints each
//! step, then deletes the store file it created.
//!
//! Wiring sequence:
//! 1. Load datastore.toml (path from the first argument) + validate
//! 2. Init tracing (plain or JSON, `RUST_LOG` overrides the level)
//! 3. Open the `Employee` repository
//! 4. Create, rename, create with explicit id, create again, list
//! 5. Remove the store file

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jsonfile_datastore::config::{LoggingConfig, loader};
use jsonfile_datastore::{CrudProvider, Employee, JsonRepository};

const DEFAULT_CONFIG: &str = "datastore.toml";

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = if Path::new(&config_path).exists() {
        loader::load_config(&config_path).context("Failed to load configuration")?
    } else {
        jsonfile_datastore::config::AppConfig::default()
    };

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        store_path = %config.datastore.store_path.display(),
        "Starting datastore console"
    );

    // ── 3. Open repository ──────────────────────────────────
    let mut staff = JsonRepository::<Employee>::open("Employee", &config.datastore)
        .context("Failed to open Employee repository")?;

    // ── 4. Exercise the CRUD surface ────────────────────────
    let emp = Employee::new("Englebert Humperdink");
    println!("new Employee before save:");
    display(&emp);

    let mut emp = staff.save(emp).context("Initial save failed")?;
    println!("after save:");
    display(&emp);

    emp.name = "King Kong".to_string();
    let emp = staff.save(emp).context("Rename failed")?;
    println!("after update:");
    display(&emp);

    let emp2 = Employee::with_id(10, "Biggie Smalls");
    println!("before save of second new Employee:");
    display(&emp2);
    match staff.save(emp2) {
        Ok(saved) => display(&saved),
        Err(e) if e.is_invalid_argument() => println!("rejected: {e}"),
        Err(e) => return Err(e).context("Saving second Employee failed"),
    }

    let emp3 = Employee::new("Colin Kaepernick");
    println!("before save of third new Employee:");
    display(&emp3);
    staff.save(emp3).context("Saving third Employee failed")?;

    println!("all Employees:");
    for e in staff.read_all()? {
        display(e);
    }

    // ── 5. Clean up ─────────────────────────────────────────
    std::fs::remove_file(staff.store_file())
        .with_context(|| format!("Failed to remove {}", staff.store_file().display()))?;
    info!("Store file removed, exiting");

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn display(emp: &Employee) {
    println!();
    println!("ID = {}", emp.id);
    println!("Name = {}", emp.name);
    println!();
}
