use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default file for the dictionary seed script
pub const DICT_OUTPUT: &str = "dict_insert.sql";

/// Default file for the schema script
pub const SCHEMA_OUTPUT: &str = "generated_tables.sql";

/// Write generated SQL to `path`, echoing it to `out` unless `quiet`
///
/// Missing parent directories are created.
pub fn write_sql(sql: &str, path: &Path, quiet: bool, out: &mut impl Write) -> Result<()> {
    if !quiet {
        writeln!(out, "{}", sql).context("Failed to write SQL to stdout")?;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    fs::write(path, sql).with_context(|| format!("Failed to write: {:?}", path))?;
    log::info!("SQL saved to {} ({} bytes)", path.display(), sql.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_sql_echoes_and_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.sql");
        let mut echoed: Vec<u8> = Vec::new();

        write_sql("SELECT 1;", &path, false, &mut echoed).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "SELECT 1;");
        assert_eq!(String::from_utf8(echoed).unwrap(), "SELECT 1;\n");
    }

    #[test]
    fn test_write_sql_quiet_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/sql/out.sql");
        let mut echoed: Vec<u8> = Vec::new();

        write_sql("-- empty", &path, true, &mut echoed).unwrap();

        assert!(echoed.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "-- empty");
    }

    #[test]
    fn test_write_sql_reports_bad_path() {
        let dir = tempdir().unwrap();
        let mut echoed: Vec<u8> = Vec::new();

        // A directory cannot be overwritten as a file
        let err = write_sql("x", dir.path(), true, &mut echoed).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
