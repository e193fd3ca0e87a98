//! End-to-end tests that generate both scripts into a temp directory and
//! check the saved SQL.

use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

use wardrobe_sqlgen::dict::ALL_CATEGORIES;
use wardrobe_sqlgen::filter::resolve_tables;
use wardrobe_sqlgen::schema::tables::ALL_TABLES;
use wardrobe_sqlgen::writer::{
    write_dict_script, write_schema_script, DEFAULT_DATABASE, DICT_OUTPUT, SCHEMA_OUTPUT,
};

// =============================================================================
// Helpers
// =============================================================================

fn temp_output(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}

/// Split a schema script into its CREATE TABLE blocks
fn table_blocks(sql: &str) -> Vec<&str> {
    sql.split("-- 导出  表 ").filter(|b| !b.is_empty()).collect()
}

/// Split a dictionary script into its INSERT statements
fn inserts(sql: &str) -> Vec<&str> {
    sql.split("INSERT INTO").skip(1).collect()
}

// =============================================================================
// Schema Script
// =============================================================================

#[test]
fn test_schema_script_covers_catalog() {
    let (_dir, path) = temp_output(SCHEMA_OUTPUT);
    let mut echoed: Vec<u8> = Vec::new();

    let count = write_schema_script(ALL_TABLES, DEFAULT_DATABASE, &path, false, &mut echoed)
        .expect("Failed to write schema script");
    assert_eq!(count, ALL_TABLES.len());

    let sql = fs::read_to_string(&path).expect("Failed to read schema script");
    assert_eq!(String::from_utf8(echoed).unwrap(), format!("{}\n", sql));

    let blocks = table_blocks(&sql);
    assert_eq!(blocks.len(), ALL_TABLES.len());

    for (block, table) in blocks.iter().zip(ALL_TABLES) {
        assert!(
            block.starts_with(&format!("myapp.{} 结构\n", table.name)),
            "Block out of order for {}",
            table.name
        );
        assert!(block.contains(&format!("CREATE TABLE IF NOT EXISTS `{}` (", table.name)));
        assert!(block.contains("    PRIMARY KEY (`id`)\n"));
        assert!(block.contains(&format!("COMMENT='{}';", table.comment)));

        // Every column line ends in a comma and precedes the primary key
        let columns = block.lines().filter(|l| l.starts_with("    `")).count();
        assert_eq!(columns, 5 + table.fields.len(), "Column count for {}", table.name);
        for line in block.lines().filter(|l| l.starts_with("    `")) {
            assert!(line.ends_with(','), "Missing separator: {}", line);
        }
    }
}

#[test]
fn test_schema_script_clothing_keys() {
    let (_dir, path) = temp_output("tables.sql");
    let tables = resolve_tables(Some(vec!["t_wardrobe_clothing".to_string()]), None).unwrap();

    write_schema_script(&tables, DEFAULT_DATABASE, &path, true, &mut io::sink()).unwrap();
    let sql = fs::read_to_string(&path).unwrap();

    let tail = "    PRIMARY KEY (`id`)
    ,UNIQUE KEY `uk_name` (`name`)
    ,KEY `idx_user_id` (`user_id`)
    ,KEY `idx_brand_id` (`brand_id`)
    ,KEY `idx_current_location_id` (`current_location_id`)
    ,KEY `idx_primary_image_id` (`primary_image_id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci COMMENT='服装表';

-- 数据导出被取消选择。
";
    assert!(sql.ends_with(tail), "Unexpected tail:\n{}", sql);
    assert!(sql.contains(
        "    `price` decimal(10,2) COLLATE utf8mb4_unicode_ci DEFAULT NULL COMMENT '价格',\n"
    ));
}

#[test]
fn test_schema_script_user_table() {
    let (_dir, path) = temp_output("user.sql");
    let tables = resolve_tables(Some(vec!["t_user".to_string()]), None).unwrap();

    write_schema_script(&tables, "kaleido", &path, true, &mut io::sink()).unwrap();
    let sql = fs::read_to_string(&path).unwrap();

    assert!(sql.starts_with("-- 导出  表 kaleido.t_user 结构\n"));
    assert!(sql.contains("    ,UNIQUE KEY `uk_invite_code_mobile` (`invite_code`, `mobile`)\n"));
    assert!(sql.contains("    ,KEY `idx_status` (`status`)\n"));
    assert!(sql.contains("    ,KEY `idx_inviter_id` (`inviter_id`)\n"));
    assert!(sql.contains("`mobile` varchar(20) COLLATE"));
    assert!(sql.contains("`password_hash` varchar(255) COLLATE"));
}

#[test]
fn test_excluded_tables_absent() {
    let (_dir, path) = temp_output("partial.sql");
    let exclude = vec!["t_dict".to_string(), "t_user".to_string()];
    let tables = resolve_tables(None, Some(exclude)).unwrap();

    let count = write_schema_script(&tables, DEFAULT_DATABASE, &path, true, &mut io::sink())
        .unwrap();
    let sql = fs::read_to_string(&path).unwrap();

    assert_eq!(count, ALL_TABLES.len() - 2);
    assert!(!sql.contains("`t_dict`"));
    assert!(!sql.contains("`t_user`"));
    assert!(sql.contains("`t_tag_relation`"));
}

// =============================================================================
// Dictionary Script
// =============================================================================

#[test]
fn test_dict_script_rows() {
    let (_dir, path) = temp_output(DICT_OUTPUT);
    let mut echoed: Vec<u8> = Vec::new();

    let rows = write_dict_script(ALL_CATEGORIES, &path, false, &mut echoed)
        .expect("Failed to write dictionary script");
    assert_eq!(rows, 32);

    let sql = fs::read_to_string(&path).unwrap();
    assert!(!echoed.is_empty());
    assert!(sql.starts_with("-- 字典表数据插入\n-- 生成时间: "));

    let statements = inserts(&sql);
    assert_eq!(statements.len(), rows);

    let mut ids = std::collections::HashSet::new();
    for stmt in &statements {
        let id_line = stmt.lines().nth(1).expect("Missing id line");
        let id = id_line.trim().trim_end_matches(',').trim_matches('\'');
        assert!(uuid::Uuid::parse_str(id).is_ok(), "Bad id: {}", id);
        assert!(ids.insert(id.to_string()), "Duplicate id: {}", id);
    }
}

#[test]
fn test_dict_script_sections() {
    let (_dir, path) = temp_output("seed/dict.sql");
    write_dict_script(ALL_CATEGORIES, &path, true, &mut io::sink()).unwrap();
    let sql = fs::read_to_string(&path).unwrap();

    let clothing = sql.find("-- 服装类型 (CLOTHING_TYPE)\n").unwrap();
    let color = sql.find("-- 颜色 (COLOR)\n").unwrap();
    let season = sql.find("-- 季节 (SEASON)\n").unwrap();
    assert!(clothing < color && color < season);

    assert!(sql[clothing..color].contains("'TSHIRT',\n    'T恤',\n    NULL,\n    1\n);"));
    assert!(sql[clothing..color].contains("'SHOES',\n    '鞋子',\n    NULL,\n    15\n);"));
    assert!(sql[color..season].contains("'GOLD',\n    '金色',\n    '#FFD700',\n    13\n);"));
    assert!(sql[season..].contains("'WINTER',\n    '冬季',\n    NULL,\n    4\n);\n"));
    assert!(!sql[season..].contains("'#"));
}
