//! Builds parameterized SELECT and INSERT statements from a record's table descriptor.

use crate::model::Record;

/// Quote identifier for PostgreSQL (safe: only from static descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<i32>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: i32) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

fn select_column_list<R: Record>() -> String {
    R::COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Equality conditions joined with AND; one parameter per filter, bound in order.
fn where_clause<R: Record>(q: &mut QueryBuf, filters: &[(&str, i32)]) -> String {
    let parts: Vec<String> = filters
        .iter()
        .map(|(col, val)| {
            debug_assert!(R::COLUMNS.contains(col), "unknown column {} on {}", col, R::TABLE);
            let n = q.push_param(*val);
            format!("{} = ${}", quoted(col), n)
        })
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", parts.join(" AND "))
    }
}

/// SELECT every row ordered by primary key.
pub fn select_all<R: Record>() -> QueryBuf {
    select_where::<R>(&[])
}

/// SELECT by primary key.
pub fn select_by_id<R: Record>(id: i32) -> QueryBuf {
    select_where::<R>(&[("id", id)])
}

/// SELECT rows matching every (column = value) filter, ordered by primary key.
pub fn select_where<R: Record>(filters: &[(&str, i32)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause::<R>(&mut q, filters);
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list::<R>(),
        quoted(R::TABLE),
        where_sql,
        quoted("id")
    );
    q
}

/// INSERT the given columns, letting the database assign the id; returns the full row.
pub fn insert<R: Record>(values: &[(&str, i32)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        debug_assert!(R::COLUMNS.contains(col), "unknown column {} on {}", col, R::TABLE);
        let n = q.push_param(*val);
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(R::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list::<R>()
    );
    q
}
