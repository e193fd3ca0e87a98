use anyhow::Result;
use chrono::Local;
use std::io::Write;
use std::path::Path;

use super::{generate_dict_sql, generate_schema_sql, write_sql};
use crate::dict::{DictCategory, UuidGenerator};
use crate::schema::TableSchema;

/// Generate the dictionary seed script and save it to `path`
///
/// Returns the number of rows inserted by the script.
pub fn write_dict_script(
    categories: &[&DictCategory],
    path: &Path,
    quiet: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let mut ids = UuidGenerator;
    let sql = generate_dict_sql(categories, &mut ids, Local::now().naive_local());
    write_sql(&sql, path, quiet, out)?;

    Ok(categories.iter().map(|c| c.items.len()).sum())
}

/// Generate the schema script and save it to `path`
///
/// Returns the number of tables created by the script.
pub fn write_schema_script(
    tables: &[&TableSchema],
    database: &str,
    path: &Path,
    quiet: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let sql = generate_schema_sql(tables, database);
    write_sql(&sql, path, quiet, out)?;

    Ok(tables.len())
}
