//! Settings persistence.
//!
//! The table holds at most one row, always with id 1. The singleton helpers
//! do their read and write under one connection lock, so concurrent first
//! requests cannot create duplicates.

use rusqlite::{params, Connection, Row, ToSql};

use shared_models::Settings;

use crate::entity::select_list;
use crate::{DbResult, Entity, Table};

const SINGLETON_ID: i64 = 1;

impl Entity for Settings {
    const TABLE: &'static str = "settings";

    const COLUMNS: &'static [&'static str] = &[
        "clinic_name",
        "clinic_phone",
        "clinic_email",
        "default_reminder_days",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Settings {
            id: row.get("id")?,
            clinic_name: row.get("clinic_name")?,
            clinic_phone: row.get("clinic_phone")?,
            clinic_email: row.get("clinic_email")?,
            default_reminder_days: row.get("default_reminder_days")?,
        })
    }

    fn params(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.clinic_name,
            &self.clinic_phone,
            &self.clinic_email,
            &self.default_reminder_days,
        ]
    }
}

fn read_singleton(conn: &Connection) -> rusqlite::Result<Settings> {
    let sql = format!("SELECT {} FROM settings WHERE id = ?1", select_list::<Settings>());
    conn.query_row(&sql, [SINGLETON_ID], Settings::from_row)
}

impl Table<Settings> {
    /// Returns the settings row, inserting the defaults first if the table
    /// is empty.
    pub async fn get_or_create(&self) -> DbResult<Settings> {
        self.db()
            .run(|conn| {
                let defaults = Settings::default();
                let inserted = conn.execute(
                    r#"
                    INSERT INTO settings (id, clinic_name, clinic_phone, clinic_email, default_reminder_days)
                    SELECT ?1, ?2, ?3, ?4, ?5
                    WHERE NOT EXISTS (SELECT 1 FROM settings)
                    "#,
                    params![
                        SINGLETON_ID,
                        defaults.clinic_name,
                        defaults.clinic_phone,
                        defaults.clinic_email,
                        defaults.default_reminder_days,
                    ],
                )?;
                if inserted > 0 {
                    tracing::info!("Created default clinic settings");
                }

                read_singleton(conn).map_err(Into::into)
            })
            .await
    }

    /// Writes the four mutable fields onto the singleton row, creating it if
    /// needed. The row keeps id 1 whatever id `settings` carries.
    pub async fn upsert_singleton(&self, settings: Settings) -> DbResult<Settings> {
        self.db()
            .run(move |conn| {
                let updated = conn.execute(
                    r#"
                    UPDATE settings SET
                        clinic_name = ?2,
                        clinic_phone = ?3,
                        clinic_email = ?4,
                        default_reminder_days = ?5
                    WHERE id = ?1
                    "#,
                    params![
                        SINGLETON_ID,
                        settings.clinic_name,
                        settings.clinic_phone,
                        settings.clinic_email,
                        settings.default_reminder_days,
                    ],
                )?;

                if updated == 0 {
                    conn.execute(
                        r#"
                        INSERT INTO settings (id, clinic_name, clinic_phone, clinic_email, default_reminder_days)
                        VALUES (?1, ?2, ?3, ?4, ?5)
                        "#,
                        params![
                            SINGLETON_ID,
                            settings.clinic_name,
                            settings.clinic_phone,
                            settings.clinic_email,
                            settings.default_reminder_days,
                        ],
                    )?;
                }

                read_singleton(conn).map_err(Into::into)
            })
            .await
    }
}
