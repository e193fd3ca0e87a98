use chrono::NaiveDateTime;

use super::quote;
use crate::dict::{dict_code, dict_value, DictCategory, IdGenerator};

/// Table the dictionary rows are inserted into
pub const DICT_TABLE: &str = "t_dict";

const DICT_COLUMNS: &[&str] = &[
    "id",
    "created_at",
    "updated_at",
    "deleted",
    "lock_version",
    "type_code",
    "type_name",
    "dict_code",
    "dict_name",
    "dict_value",
    "sort",
];

/// Generate the INSERT statement for one dictionary item
///
/// `sort` is the item's 1-based position within its category and also seeds
/// the fallback code.
pub fn generate_insert(category: &DictCategory, item_name: &str, sort: usize, id: &str) -> String {
    let columns: Vec<String> = DICT_COLUMNS.iter().map(|c| format!("`{}`", c)).collect();
    let code = dict_code(category.type_code, item_name, sort);
    let value = dict_value(category.type_code, item_name)
        .map(quote)
        .unwrap_or_else(|| "NULL".to_string());

    let values = [
        quote(id),
        "NOW()".to_string(),
        "NOW()".to_string(),
        "0".to_string(),
        "0".to_string(),
        quote(category.type_code),
        quote(category.type_name),
        quote(&code),
        quote(item_name),
        value,
        sort.to_string(),
    ];

    format!(
        "INSERT INTO `{}` ({}) VALUES (\n    {}\n);",
        DICT_TABLE,
        columns.join(", "),
        values.join(",\n    ")
    )
}

/// Generate the dictionary seed script for the given categories
pub fn generate_dict_sql(
    categories: &[&DictCategory],
    ids: &mut impl IdGenerator,
    generated_at: NaiveDateTime,
) -> String {
    let mut lines = Vec::new();
    lines.push("-- 字典表数据插入".to_string());
    lines.push(format!(
        "-- 生成时间: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(String::new());

    for category in categories {
        log::debug!(
            "{}: {} items",
            category.type_code,
            category.items.len()
        );
        lines.push(format!("-- {} ({})", category.type_name, category.type_code));

        for (i, item_name) in category.items.iter().enumerate() {
            let id = ids.next_id();
            lines.push(generate_insert(category, item_name, i + 1, &id));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}
