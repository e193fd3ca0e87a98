use super::quote;
use crate::schema::{resolve_column_type, TableSchema, COLLATION, PRIMARY_KEY};

/// Default database name used in table header comments
pub const DEFAULT_DATABASE: &str = "myapp";

/// Fields indexed even though they don't end in `_id`
const INDEXED_FIELDS: &[&str] = &["user_id", "status", "created_at", "updated_at"];

/// Fields that together form the table's unique key
const UNIQUE_FIELDS: &[&str] = &["name", "mobile", "code", "invite_code"];

/// Fields of the table (base columns excluded) that get a secondary index
pub fn index_fields(schema: &TableSchema) -> Vec<&'static str> {
    schema
        .fields
        .iter()
        .map(|f| f.name)
        .filter(|name| {
            (name.ends_with("_id") && *name != PRIMARY_KEY) || INDEXED_FIELDS.contains(name)
        })
        .collect()
}

/// Unique key name and columns, if the table has any unique fields
///
/// The key is named after the first two unique fields but covers all of them.
pub fn unique_key(schema: &TableSchema) -> Option<(String, Vec<&'static str>)> {
    let fields: Vec<&'static str> = schema
        .fields
        .iter()
        .map(|f| f.name)
        .filter(|name| UNIQUE_FIELDS.contains(name))
        .collect();

    if fields.is_empty() {
        return None;
    }

    let name = format!(
        "uk_{}",
        fields.iter().take(2).copied().collect::<Vec<_>>().join("_")
    );
    Some((name, fields))
}

/// Generate the CREATE TABLE block for a table schema
pub fn generate_table_sql(schema: &TableSchema, database: &str) -> String {
    let mut lines = Vec::new();
    lines.push(format!("-- 导出  表 {}.{} 结构", database, schema.name));
    lines.push(format!("CREATE TABLE IF NOT EXISTS `{}` (", schema.name));

    for field in schema.all_fields() {
        let sql_type = resolve_column_type(field.property_type, field.name);
        let mut line = format!("    `{}` {} COLLATE {}", field.name, sql_type, COLLATION);
        if !field.constraint.is_empty() {
            line.push(' ');
            line.push_str(field.constraint);
        }
        line.push_str(&format!(" COMMENT {},", quote(field.comment)));
        lines.push(line);
    }

    lines.push(format!("    PRIMARY KEY (`{}`)", PRIMARY_KEY));

    if let Some((name, fields)) = unique_key(schema) {
        let columns: Vec<String> = fields.iter().map(|f| format!("`{}`", f)).collect();
        lines.push(format!("    ,UNIQUE KEY `{}` ({})", name, columns.join(", ")));
    }

    for field in index_fields(schema) {
        lines.push(format!("    ,KEY `idx_{}` (`{}`)", field, field));
    }

    lines.push(format!(
        ") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE={} COMMENT={};",
        COLLATION,
        quote(schema.comment)
    ));
    lines.push(String::new());
    lines.push("-- 数据导出被取消选择。".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Generate the DDL script for a list of tables, in the given order
pub fn generate_schema_sql(tables: &[&TableSchema], database: &str) -> String {
    tables
        .iter()
        .map(|schema| generate_table_sql(schema, database))
        .collect::<Vec<_>>()
        .join("\n")
}
