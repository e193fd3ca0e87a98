//! Table definitions for the wardrobe application schema

use super::types::*;

// =============================================================================
// Wardrobe
// =============================================================================

pub static WARDROBE_BRAND: TableSchema = TableSchema {
    name: "t_wardrobe_brand",
    comment: "品牌表",
    fields: &[
        Field::required("name", "String", "品牌名称（唯一）"),
        Field::new("logo_path", "String", "品牌Logo路径（在minio中的文件路径）"),
        Field::new("description", "String", "品牌描述"),
    ],
};

pub static WARDROBE_CLOTHING: TableSchema = TableSchema {
    name: "t_wardrobe_clothing",
    comment: "服装表",
    fields: &[
        Field::required("user_id", "String", "用户ID"),
        Field::required("name", "String", "服装名称"),
        Field::required("type_code", "String", "服装类型编码"),
        Field::required("color_code", "String", "颜色编码"),
        Field::required("season_code", "String", "季节编码"),
        Field::new("brand_id", "String", "品牌ID"),
        Field::new("size", "String", "尺码"),
        Field::new("purchase_date", "LocalDateTime", "购买日期"),
        Field::new("price", "BigDecimal", "价格"),
        Field::new("description", "String", "描述"),
        Field::new("current_location_id", "String", "当前位置ID"),
        Field::new("primary_image_id", "String", "主图ID"),
    ],
};

pub static WARDROBE_CLOTHING_IMAGE: TableSchema = TableSchema {
    name: "t_wardrobe_clothing_image",
    comment: "服装图片表",
    fields: &[
        Field::required("clothing_id", "String", "服装ID"),
        Field::required("path", "String", "图片路径（在minio中的文件路径）"),
        Field::zeroed("image_order", "Integer", "图片排序"),
        Field::zeroed("is_primary", "Boolean", "是否为主图"),
        Field::new("image_size", "Long", "图片大小（字节）"),
        Field::new("image_type", "String", "图片类型"),
        Field::new("width", "Integer", "图片宽度（像素）"),
        Field::new("height", "Integer", "图片高度（像素）"),
    ],
};

pub static WARDROBE_STORAGE_LOCATION: TableSchema = TableSchema {
    name: "t_wardrobe_storage_location",
    comment: "存储位置表",
    fields: &[
        Field::required("user_id", "String", "用户ID"),
        Field::required("name", "String", "位置名称（同一用户下唯一）"),
        Field::new("description", "String", "位置描述"),
        Field::new("address", "String", "具体地址"),
        Field::new("primary_image_id", "String", "主图ID"),
    ],
};

pub static WARDROBE_LOCATION_IMAGE: TableSchema = TableSchema {
    name: "t_wardrobe_location_image",
    comment: "位置图片表",
    fields: &[
        Field::required("location_id", "String", "位置ID"),
        Field::required("path", "String", "图片路径（在minio中的文件路径）"),
        Field::zeroed("image_order", "Integer", "排序序号"),
        Field::zeroed("is_primary", "Boolean", "是否为主图"),
        Field::new("image_size", "Long", "图片大小（字节）"),
        Field::new("image_type", "String", "文件类型"),
        Field::new("width", "Integer", "图片宽度"),
        Field::new("height", "Integer", "图片高度"),
    ],
};

pub static WARDROBE_LOCATION_RECORD: TableSchema = TableSchema {
    name: "t_wardrobe_location_record",
    comment: "位置记录表",
    fields: &[
        Field::required("clothing_id", "String", "服装ID"),
        Field::required("location_id", "String", "位置ID"),
        Field::required("user_id", "String", "用户ID（冗余，便于查询）"),
        Field::required("record_time", "LocalDateTime", "记录时间"),
        Field::new("notes", "String", "备注"),
        Field::zeroed("is_current", "Integer", "是否为当前位置记录"),
    ],
};

pub static WARDROBE_OUTFIT: TableSchema = TableSchema {
    name: "t_wardrobe_outfit",
    comment: "穿搭表",
    fields: &[
        Field::required("user_id", "String", "用户ID"),
        Field::required("name", "String", "穿搭名称"),
        Field::new("description", "String", "穿搭描述"),
        Field::new("season_type", "String", "季节类型"),
        Field::new("occasion_type", "String", "场合类型"),
        Field::new("style", "String", "穿搭风格"),
        Field::zeroed("is_public", "Boolean", "是否公开"),
        Field::zeroed("favorite_count", "Integer", "收藏数"),
        Field::zeroed("view_count", "Integer", "浏览数"),
        Field::new("rating", "Double", "评分"),
        Field::zeroed("rating_count", "Integer", "评分人数"),
    ],
};

pub static WARDROBE_OUTFIT_IMAGE: TableSchema = TableSchema {
    name: "t_wardrobe_outfit_image",
    comment: "穿搭图片表",
    fields: &[
        Field::required("outfit_id", "String", "穿搭ID"),
        Field::required("path", "String", "图片路径（在minio中的文件路径）"),
        Field::zeroed("image_order", "Integer", "图片排序"),
        Field::zeroed("is_primary", "Boolean", "是否为主图"),
        Field::new("image_size", "Long", "图片大小（字节）"),
        Field::new("image_type", "String", "图片类型"),
        Field::new("width", "Integer", "图片宽度（像素）"),
        Field::new("height", "Integer", "图片高度（像素）"),
        Field::new("description", "String", "图片描述"),
    ],
};

// =============================================================================
// Tags
// =============================================================================

pub static TAG: TableSchema = TableSchema {
    name: "t_tag",
    comment: "标签表",
    fields: &[
        Field::required("user_id", "String", "用户ID"),
        Field::required("name", "String", "标签名称"),
        Field::required("type_code", "String", "标签类型编码"),
        Field::new("color", "String", "标签颜色"),
        Field::new("description", "String", "标签描述"),
        Field::zeroed("usage_count", "Integer", "使用次数"),
    ],
};

pub static TAG_RELATION: TableSchema = TableSchema {
    name: "t_tag_relation",
    comment: "标签关联表",
    fields: &[
        Field::required("tag_id", "String", "标签ID"),
        Field::required("entity_id", "String", "实体ID"),
        Field::required("user_id", "String", "用户ID"),
    ],
};

// =============================================================================
// Shared
// =============================================================================

/// Target of the dictionary seed inserts
pub static DICT: TableSchema = TableSchema {
    name: "t_dict",
    comment: "字典表",
    fields: &[
        Field::required("type_code", "String", "字典类型编码"),
        Field::required("type_name", "String", "字典类型名称"),
        Field::required("dict_code", "String", "字典编码"),
        Field::required("dict_name", "String", "字典名称"),
        Field::new("dict_value", "String", "字典值"),
        Field::zeroed("sort", "Integer", "排序"),
    ],
};

pub static USER: TableSchema = TableSchema {
    name: "t_user",
    comment: "用户表",
    fields: &[
        Field::required("nick_name", "String", "昵称"),
        Field::required("password_hash", "String", "密码（hash）"),
        Field::required("status", "String", "用户状态：ACTIVE-活跃，FROZEN-冻结"),
        Field::required("invite_code", "String", "邀请码"),
        Field::new("inviter_id", "String", "邀请人ID"),
        Field::required("mobile", "String", "用户手机号"),
        Field::new("avatar", "String", "用户头像URL地址"),
    ],
};

// =============================================================================
// Schema Registry
// =============================================================================

/// All table schemas in output order
pub static ALL_TABLES: &[&TableSchema] = &[
    &WARDROBE_BRAND,
    &WARDROBE_CLOTHING,
    &WARDROBE_CLOTHING_IMAGE,
    &WARDROBE_STORAGE_LOCATION,
    &WARDROBE_LOCATION_IMAGE,
    &WARDROBE_LOCATION_RECORD,
    &WARDROBE_OUTFIT,
    &WARDROBE_OUTFIT_IMAGE,
    &TAG,
    &TAG_RELATION,
    &DICT,
    &USER,
];

/// Get table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
