use serde::Serialize;

/// Collation applied to every column and to the table itself
pub const COLLATION: &str = "utf8mb4_unicode_ci";

/// Column definition
///
/// `property_type` is the entity field type (`String`, `Integer`, ...) the
/// column maps from; the SQL type is resolved from it and the column name.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub property_type: &'static str,
    pub comment: &'static str,
    /// Constraint clause written after the collation, e.g. `NOT NULL`
    pub constraint: &'static str,
}

impl Field {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, property_type: &'static str, comment: &'static str) -> Self {
        Self {
            name,
            property_type,
            comment,
            constraint: "DEFAULT NULL",
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(
        name: &'static str,
        property_type: &'static str,
        comment: &'static str,
    ) -> Self {
        Self {
            name,
            property_type,
            comment,
            constraint: "NOT NULL",
        }
    }

    /// Nullable counter/flag column defaulting to zero
    pub const fn zeroed(name: &'static str, property_type: &'static str, comment: &'static str) -> Self {
        Self {
            name,
            property_type,
            comment,
            constraint: "DEFAULT '0'",
        }
    }

    /// Replace the constraint clause
    pub const fn constraint(self, constraint: &'static str) -> Self {
        Self { constraint, ..self }
    }
}

/// Table schema definition
#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    pub name: &'static str,
    pub comment: &'static str,
    /// Table-specific columns, written after the base columns
    pub fields: &'static [Field],
}

impl TableSchema {
    /// Base columns followed by the table's own fields
    pub fn all_fields(&self) -> impl Iterator<Item = &'static Field> {
        BASE_FIELDS.iter().chain(self.fields.iter())
    }
}

/// Audit columns shared by every table
pub static BASE_FIELDS: &[Field] = &[
    Field::required("id", "String", "主键ID"),
    Field::required("created_at", "LocalDateTime", "创建时间")
        .constraint("NOT NULL DEFAULT CURRENT_TIMESTAMP"),
    Field::required("updated_at", "LocalDateTime", "更新时间")
        .constraint("NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP"),
    Field::required("deleted", "Boolean", "是否删除：0-未删除，1-已删除")
        .constraint("NOT NULL DEFAULT '0'"),
    Field::required("lock_version", "Integer", "乐观锁版本号").constraint("NOT NULL DEFAULT '0'"),
];

/// Name of the primary key column every table carries
pub const PRIMARY_KEY: &str = "id";
