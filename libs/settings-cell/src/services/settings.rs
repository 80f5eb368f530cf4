use tracing::{debug, info};

use shared_database::Database;
use shared_models::Settings;

use crate::models::SettingsError;

pub struct SettingsService {
    db: Database,
}

impl SettingsService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    /// The clinic settings, created with defaults on first access.
    pub async fn get_settings(&self) -> Result<Settings, SettingsError> {
        debug!("Fetching clinic settings");

        Ok(self.db.settings().get_or_create().await?)
    }

    /// Field-wise update of the singleton. The stored id never changes.
    pub async fn update_settings(&self, body: Settings) -> Result<Settings, SettingsError> {
        body.validate().map_err(SettingsError::ValidationError)?;

        let mut current = self.db.settings().get_or_create().await?;
        current.apply(body);

        let saved = self.db.settings().upsert_singleton(current).await?;
        info!("Updated clinic settings: {}", saved.clinic_name);
        Ok(saved)
    }
}
