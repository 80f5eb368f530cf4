//! SQLite storage for patients, vaccines and clinic settings.

mod error;
mod schema;
mod entity;
mod table;
mod patients;
mod vaccines;
mod settings;

pub use error::{DbError, DbResult};
pub use schema::SCHEMA;
pub use entity::Entity;
pub use table::Table;

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::{Patient, Settings, Vaccine};

/// Options applied to the schema when the database is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOptions {
    /// Keep the one-vaccine-row-per-patientId constraint.
    pub unique_vaccine_patient_id: bool,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            unique_vaccine_patient_id: true,
        }
    }
}

impl From<&AppConfig> for StorageOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            unique_vaccine_patient_id: config.vaccine_patient_id_unique,
        }
    }
}

/// Cloneable handle over a single SQLite connection.
///
/// Every operation takes the connection lock for its whole duration, so a
/// single storage call never interleaves with another one.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P, options: StorageOptions) -> DbResult<Self> {
        info!("Opening database at {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        Self::initialize(conn, options)
    }

    /// Create in-memory database.
    pub fn open_in_memory(options: StorageOptions) -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn, options)
    }

    pub fn from_config(config: &AppConfig) -> DbResult<Self> {
        let options = StorageOptions::from(config);
        if config.is_in_memory() {
            Self::open_in_memory(options)
        } else {
            Self::open(&config.database_path, options)
        }
    }

    fn initialize(conn: Connection, options: StorageOptions) -> DbResult<Self> {
        schema::apply(&conn, options)?;
        debug!("Schema ready (unique vaccine patientId: {})", options.unique_vaccine_patient_id);
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` on the blocking pool with exclusive access to the connection.
    pub async fn run<F, R>(&self, f: F) -> DbResult<R>
    where
        F: FnOnce(&mut Connection) -> DbResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| DbError::LockPoisoned)?;
            f(&mut guard)
        })
        .await?
    }

    pub fn table<T: Entity>(&self) -> Table<T> {
        Table::new(self.clone())
    }

    pub fn patients(&self) -> Table<Patient> {
        self.table()
    }

    pub fn vaccines(&self) -> Table<Vaccine> {
        self.table()
    }

    pub fn settings(&self) -> Table<Settings> {
        self.table()
    }
}
