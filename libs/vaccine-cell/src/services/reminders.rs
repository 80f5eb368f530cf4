use chrono::{Local, NaiveDate};
use tracing::debug;

use shared_database::Database;
use shared_models::{Vaccine, STATUS_UPCOMING};

use crate::models::{VaccineError, VaccineReminder, VaccineStats};

/// Dashboard counters and reminder lists derived from the vaccine records.
pub struct ReminderService {
    db: Database,
}

impl ReminderService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    pub async fn stats(&self) -> Result<VaccineStats, VaccineError> {
        let all = self.db.vaccines().find_all().await?;
        Ok(compute_stats(&all, Local::now().date_naive()))
    }

    pub async fn reminders(&self) -> Result<Vec<VaccineReminder>, VaccineError> {
        let all = self.db.vaccines().find_all().await?;
        let reminders = due_reminders(all, Local::now().date_naive());
        debug!("{} vaccine reminders active", reminders.len());
        Ok(reminders)
    }
}

pub fn compute_stats(vaccines: &[Vaccine], today: NaiveDate) -> VaccineStats {
    VaccineStats {
        total: vaccines.len(),
        completed: vaccines.iter().filter(|v| v.is_completed()).count(),
        upcoming: vaccines
            .iter()
            .filter(|v| v.status.as_deref() == Some(STATUS_UPCOMING))
            .count(),
        overdue: vaccines.iter().filter(|v| v.is_overdue(today)).count(),
    }
}

/// Records inside their reminder window, soonest due first.
pub fn due_reminders(vaccines: Vec<Vaccine>, today: NaiveDate) -> Vec<VaccineReminder> {
    let mut reminders: Vec<VaccineReminder> = vaccines
        .into_iter()
        .filter(|vaccine| vaccine.needs_reminder(today))
        .filter_map(|vaccine| {
            vaccine.days_until_due(today).map(|days_until_due| VaccineReminder {
                vaccine,
                days_until_due,
            })
        })
        .collect();
    reminders.sort_by(|a, b| {
        a.days_until_due
            .cmp(&b.days_until_due)
            .then_with(|| a.vaccine.id.cmp(&b.vaccine.id))
    });
    reminders
}
