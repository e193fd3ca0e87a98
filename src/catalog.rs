//! Serializable view of everything the generators know about

use anyhow::{Context, Result};
use serde::Serialize;

use crate::dict::{DictCategory, ALL_CATEGORIES};
use crate::schema::{resolve_column_type, Field, TableSchema, ALL_TABLES, BASE_FIELDS};

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub base_fields: Vec<ColumnInfo>,
    pub tables: Vec<TableInfo>,
    pub dictionaries: &'static [&'static DictCategory],
}

#[derive(Debug, Serialize)]
pub struct TableInfo {
    pub name: &'static str,
    pub comment: &'static str,
    pub fields: Vec<ColumnInfo>,
}

/// A field with its resolved SQL type
#[derive(Debug, Serialize)]
pub struct ColumnInfo {
    #[serde(flatten)]
    pub field: &'static Field,
    pub sql_type: &'static str,
}

impl ColumnInfo {
    fn new(field: &'static Field) -> Self {
        Self {
            field,
            sql_type: resolve_column_type(field.property_type, field.name),
        }
    }
}

impl TableInfo {
    fn new(schema: &'static TableSchema) -> Self {
        Self {
            name: schema.name,
            comment: schema.comment,
            fields: schema.fields.iter().map(ColumnInfo::new).collect(),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            base_fields: BASE_FIELDS.iter().map(ColumnInfo::new).collect(),
            tables: ALL_TABLES.iter().copied().map(TableInfo::new).collect(),
            dictionaries: ALL_CATEGORIES,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize catalog")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
