use std::marker::PhantomData;

use rusqlite::{params_from_iter, OptionalExtension};
use tracing::debug;

use crate::entity::{insert_sql, select_list, update_sql};
use crate::{Database, DbError, DbResult, Entity};

/// Persistence operations for one record kind.
pub struct Table<T> {
    db: Database,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<T> Table<T> {
    pub(crate) fn new(db: Database) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }
}

impl<T: Entity> Table<T> {
    /// All rows in insertion order. Callers impose any other ordering.
    pub async fn find_all(&self) -> DbResult<Vec<T>> {
        self.db
            .run(|conn| {
                let sql = format!("SELECT {} FROM {} ORDER BY id", select_list::<T>(), T::TABLE);
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], T::from_row)?;
                rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<T>> {
        self.db
            .run(move |conn| {
                let sql = format!("SELECT {} FROM {} WHERE id = ?1", select_list::<T>(), T::TABLE);
                conn.query_row(&sql, [id], T::from_row)
                    .optional()
                    .map_err(Into::into)
            })
            .await
    }

    /// Looks a record up by one of its unique columns.
    pub async fn find_one_by(
        &self,
        column: &'static str,
        value: impl Into<String>,
    ) -> DbResult<Option<T>> {
        if !T::UNIQUE_COLUMNS.contains(&column) {
            return Err(DbError::UnknownColumn(column.to_string()));
        }

        let value = value.into();
        self.db
            .run(move |conn| {
                let sql = format!(
                    "SELECT {} FROM {} WHERE {} = ?1",
                    select_list::<T>(),
                    T::TABLE,
                    column
                );
                conn.query_row(&sql, [value], T::from_row)
                    .optional()
                    .map_err(Into::into)
            })
            .await
    }

    /// Inserts when the record has no id, otherwise replaces every column of
    /// the row with that id. Returns the record with its id populated.
    pub async fn save(&self, mut record: T) -> DbResult<T> {
        self.db
            .run(move |conn| {
                match record.id() {
                    None => {
                        conn.execute(&insert_sql::<T>(), params_from_iter(record.params()))?;
                        let id = conn.last_insert_rowid();
                        record.set_id(id);
                        debug!("Inserted {} row {}", T::TABLE, id);
                    }
                    Some(id) => {
                        let mut params = record.params();
                        params.push(&id);
                        let changed = conn.execute(&update_sql::<T>(), params_from_iter(params))?;
                        if changed == 0 {
                            return Err(DbError::NotFound(format!("{} row {}", T::TABLE, id)));
                        }
                        debug!("Replaced {} row {}", T::TABLE, id);
                    }
                }
                Ok(record)
            })
            .await
    }

    pub async fn exists_by_id(&self, id: i64) -> DbResult<bool> {
        self.db
            .run(move |conn| {
                let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", T::TABLE);
                conn.query_row(&sql, [id], |row| row.get(0)).map_err(Into::into)
            })
            .await
    }

    /// Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<bool> {
        self.db
            .run(move |conn| {
                let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE);
                let removed = conn.execute(&sql, [id])?;
                Ok(removed > 0)
            })
            .await
    }

    pub async fn count(&self) -> DbResult<i64> {
        self.db
            .run(|conn| {
                let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
                conn.query_row(&sql, [], |row| row.get(0)).map_err(Into::into)
            })
            .await
    }
}
