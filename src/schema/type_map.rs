//! Column type resolution
//!
//! A column's SQL type comes from its name first (so `*_id` columns and
//! free-text columns get the widths the application expects), then from the
//! entity property type, then falls back to `varchar(255)`.

/// SQL type used when neither lookup matches
pub const DEFAULT_SQL_TYPE: &str = "varchar(255)";

/// Entity property type -> MySQL column type
pub static PROPERTY_TYPES: &[(&str, &str)] = &[
    ("String", "varchar(255)"),
    ("Integer", "int"),
    ("Long", "bigint"),
    ("BigDecimal", "decimal(10,2)"),
    ("Date", "datetime"),
    ("LocalDateTime", "datetime"),
    ("Boolean", "tinyint"),
    ("Double", "double"),
    ("int", "int"),
    ("long", "bigint"),
    ("boolean", "tinyint"),
    ("double", "double"),
];

/// Column name -> MySQL column type, taking precedence over the property type
pub static FIELD_TYPES: &[(&str, &str)] = &[
    ("id", "varchar(64)"),
    ("name", "varchar(100)"),
    ("description", "varchar(500)"),
    ("status", "varchar(20)"),
    ("type_code", "varchar(50)"),
    ("dict_code", "varchar(50)"),
    ("color_code", "varchar(20)"),
    ("season_code", "varchar(20)"),
    ("size", "varchar(20)"),
    ("color", "varchar(20)"),
    ("mobile", "varchar(20)"),
    ("address", "varchar(500)"),
    ("path", "varchar(500)"),
    ("logo_path", "varchar(500)"),
    ("avatar", "varchar(255)"),
    ("image_type", "varchar(50)"),
    ("style", "varchar(50)"),
    ("season_type", "varchar(20)"),
    ("occasion_type", "varchar(20)"),
    ("notes", "varchar(500)"),
    ("gender", "varchar(10)"),
    ("real_name", "varchar(50)"),
    ("nick_name", "varchar(100)"),
    ("template_name", "varchar(100)"),
    ("type_name", "varchar(100)"),
    ("dict_name", "varchar(100)"),
    ("code", "varchar(100)"),
    ("icon", "varchar(100)"),
    ("component", "varchar(255)"),
    ("target_address", "varchar(255)"),
    ("target_type", "varchar(20)"),
    ("business_type", "varchar(50)"),
    ("invite_code", "varchar(50)"),
    ("operate_detail", "text"),
    ("content", "text"),
    ("template_content", "text"),
    ("result_message", "text"),
    ("userId", "varchar(64)"),
    ("user_id", "varchar(64)"),
    ("brand_id", "varchar(64)"),
    ("clothing_id", "varchar(64)"),
    ("location_id", "varchar(64)"),
    ("current_location_id", "varchar(64)"),
    ("primary_image_id", "varchar(64)"),
    ("admin_id", "varchar(64)"),
    ("role_id", "varchar(64)"),
    ("permission_id", "varchar(64)"),
    ("parent_id", "varchar(64)"),
    ("inviter_id", "varchar(64)"),
    ("operator_id", "varchar(64)"),
    ("tag_id", "varchar(64)"),
    ("entity_id", "varchar(64)"),
    ("outfit_id", "varchar(64)"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve the MySQL column type for a field
pub fn resolve_column_type(property_type: &str, field_name: &str) -> &'static str {
    lookup(FIELD_TYPES, field_name)
        .or_else(|| lookup(PROPERTY_TYPES, property_type))
        .unwrap_or(DEFAULT_SQL_TYPE)
}
