use rusqlite::{Row, ToSql};

/// A record kind persisted in its own table under an integer surrogate key.
pub trait Entity: Sized + Send + 'static {
    const TABLE: &'static str;

    /// Every column except `id`, in the order [`Entity::params`] binds them.
    const COLUMNS: &'static [&'static str];

    /// Columns accepted by `Table::find_one_by`.
    const UNIQUE_COLUMNS: &'static [&'static str] = &[];

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Builds a record from a row selected with `id` plus [`Entity::COLUMNS`].
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn params(&self) -> Vec<&dyn ToSql>;
}

pub(crate) fn select_list<T: Entity>() -> String {
    std::iter::once("id")
        .chain(T::COLUMNS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn insert_sql<T: Entity>() -> String {
    let placeholders = (1..=T::COLUMNS.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders
    )
}

/// Full-row replace; the id is bound after the columns.
pub(crate) fn update_sql<T: Entity>() -> String {
    let assignments = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ?{}", column, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        T::TABLE,
        assignments,
        T::COLUMNS.len() + 1
    )
}
