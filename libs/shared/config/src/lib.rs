use std::env;
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "vaccine_tracker.db";
const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub api_prefix: String,
    /// Enforce at most one vaccine row per patientId.
    pub vaccine_patient_id_unique: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            vaccine_patient_id_unique: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using default {}", defaults.host);
                    defaults.host.clone()
                }),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT value {:?} is not a valid port, using default {}", raw, defaults.port);
                    defaults.port
                }),
                Err(_) => {
                    warn!("PORT not set, using default {}", defaults.port);
                    defaults.port
                }
            },
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_PATH not set, using default {}", defaults.database_path);
                    defaults.database_path.clone()
                }),
            api_prefix: env::var("API_PREFIX")
                .map(|prefix| normalize_prefix(&prefix))
                .unwrap_or_else(|_| {
                    warn!("API_PREFIX not set, using default {}", defaults.api_prefix);
                    defaults.api_prefix.clone()
                }),
            vaccine_patient_id_unique: match env::var("VACCINE_PATIENT_ID_UNIQUE") {
                Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                    warn!("VACCINE_PATIENT_ID_UNIQUE value {:?} not understood, keeping constraint enabled", raw);
                    true
                }),
                Err(_) => {
                    warn!(
                        "VACCINE_PATIENT_ID_UNIQUE not set, using default {}",
                        defaults.vaccine_patient_id_unique
                    );
                    defaults.vaccine_patient_id_unique
                }
            },
        };

        if !config.vaccine_patient_id_unique {
            warn!("Vaccine patientId uniqueness disabled - multiple vaccine records per patient allowed");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == ":memory:"
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Ensures a leading slash and no trailing slash, `""` stays empty.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
