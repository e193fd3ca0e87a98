//! Dictionary categories seeded into `t_dict`

use serde::Serialize;

/// A dictionary type and its items, in sort order
#[derive(Debug, Clone, Serialize)]
pub struct DictCategory {
    pub type_code: &'static str,
    pub type_name: &'static str,
    pub items: &'static [&'static str],
}

pub static CLOTHING_TYPE: DictCategory = DictCategory {
    type_code: "CLOTHING_TYPE",
    type_name: "服装类型",
    items: &[
        "T恤", "衬衫", "裤子", "外套", "毛衣", "裙子", "连衣裙", "短裤", "牛仔裤", "运动服",
        "睡衣", "内衣", "袜子", "帽子", "鞋子",
    ],
};

pub static COLOR: DictCategory = DictCategory {
    type_code: "COLOR",
    type_name: "颜色",
    items: &[
        "红色", "橙色", "黄色", "绿色", "蓝色", "紫色", "黑色", "白色", "灰色", "棕色", "粉色",
        "银色", "金色",
    ],
};

pub static SEASON: DictCategory = DictCategory {
    type_code: "SEASON",
    type_name: "季节",
    items: &["春季", "夏季", "秋季", "冬季"],
};

/// All dictionary categories in output order
pub static ALL_CATEGORIES: &[&DictCategory] = &[&CLOTHING_TYPE, &COLOR, &SEASON];
