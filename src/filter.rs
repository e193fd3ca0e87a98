use crate::schema::{get_table, table_names, TableSchema, ALL_TABLES};
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Resolves which tables to generate based on include/exclude filters
///
/// Tables are always returned in catalog order, whatever order the filter
/// names them in.
pub fn resolve_tables(
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> Result<Vec<&'static TableSchema>> {
    match (include, exclude) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --include and --exclude at the same time");
        }
        (Some(include_list), None) => {
            let included = validate(&include_list)?;
            let tables = select(|name| included.contains(name));
            log::info!("Including {} tables:", tables.len());
            for t in &tables {
                log::info!("  - {}", t.name);
            }
            Ok(tables)
        }
        (None, Some(exclude_list)) => {
            let excluded = validate(&exclude_list)?;
            log::info!("Excluding tables: {:?}", exclude_list);
            let tables = select(|name| !excluded.contains(name));
            log::info!("Including {} tables (after exclusions)", tables.len());
            Ok(tables)
        }
        (None, None) => {
            log::info!("Including all {} tables", ALL_TABLES.len());
            Ok(ALL_TABLES.to_vec())
        }
    }
}

/// Check every name against the catalog
fn validate(names: &[String]) -> Result<HashSet<&str>> {
    let mut set = HashSet::new();
    for name in names {
        if get_table(name).is_none() {
            bail!(
                "Unknown table: {} (available: {})",
                name,
                table_names().join(", ")
            );
        }
        set.insert(name.as_str());
    }
    Ok(set)
}

fn select(keep: impl Fn(&str) -> bool) -> Vec<&'static TableSchema> {
    ALL_TABLES.iter().copied().filter(|t| keep(t.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tables: &[&TableSchema]) -> Vec<&'static str> {
        tables.iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_no_filter_returns_catalog() {
        let tables = resolve_tables(None, None).unwrap();
        assert_eq!(tables.len(), ALL_TABLES.len());
    }

    #[test]
    fn test_include_keeps_catalog_order() {
        let include = vec!["t_tag".to_string(), "t_wardrobe_brand".to_string()];
        let tables = resolve_tables(Some(include), None).unwrap();
        assert_eq!(names(&tables), ["t_wardrobe_brand", "t_tag"]);
    }

    #[test]
    fn test_exclude() {
        let exclude = vec!["t_user".to_string(), "t_dict".to_string()];
        let tables = resolve_tables(None, Some(exclude)).unwrap();
        let names = names(&tables);
        assert_eq!(names.len(), ALL_TABLES.len() - 2);
        assert!(!names.contains(&"t_user"));
        assert!(!names.contains(&"t_dict"));
    }

    #[test]
    fn test_unknown_table_error() {
        let err = resolve_tables(Some(vec!["t_nonexistent".to_string()]), None).unwrap_err();
        assert!(err.to_string().contains("t_nonexistent"));
        assert!(resolve_tables(None, Some(vec!["nope".to_string()])).is_err());
    }

    #[test]
    fn test_include_and_exclude_conflict() {
        let result = resolve_tables(Some(vec!["t_tag".to_string()]), Some(vec![]));
        assert!(result.is_err());
    }
}
