//! Item code and value derivation for dictionary rows

static CLOTHING_CODES: &[(&str, &str)] = &[
    ("T恤", "TSHIRT"),
    ("衬衫", "SHIRT"),
    ("裤子", "PANTS"),
    ("外套", "COAT"),
    ("毛衣", "SWEATER"),
    ("裙子", "SKIRT"),
    ("连衣裙", "DRESS"),
    ("短裤", "SHORTS"),
    ("牛仔裤", "JEANS"),
    ("运动服", "SPORTSWEAR"),
    ("睡衣", "PAJAMAS"),
    ("内衣", "UNDERWEAR"),
    ("袜子", "SOCKS"),
    ("帽子", "HAT"),
    ("鞋子", "SHOES"),
];

static COLOR_CODES: &[(&str, &str)] = &[
    ("红色", "RED"),
    ("橙色", "ORANGE"),
    ("黄色", "YELLOW"),
    ("绿色", "GREEN"),
    ("蓝色", "BLUE"),
    ("紫色", "PURPLE"),
    ("黑色", "BLACK"),
    ("白色", "WHITE"),
    ("灰色", "GRAY"),
    ("棕色", "BROWN"),
    ("粉色", "PINK"),
    ("银色", "SILVER"),
    ("金色", "GOLD"),
];

static SEASON_CODES: &[(&str, &str)] = &[
    ("春季", "SPRING"),
    ("夏季", "SUMMER"),
    ("秋季", "AUTUMN"),
    ("冬季", "WINTER"),
];

static COLOR_HEX: &[(&str, &str)] = &[
    ("红色", "#FF0000"),
    ("橙色", "#FFA500"),
    ("黄色", "#FFFF00"),
    ("绿色", "#00FF00"),
    ("蓝色", "#0000FF"),
    ("紫色", "#800080"),
    ("黑色", "#000000"),
    ("白色", "#FFFFFF"),
    ("灰色", "#808080"),
    ("棕色", "#A52A2A"),
    ("粉色", "#FFC0CB"),
    ("银色", "#C0C0C0"),
    ("金色", "#FFD700"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Code table and fallback prefix for a dictionary type
fn code_table(type_code: &str) -> Option<(&'static [(&'static str, &'static str)], &'static str)> {
    match type_code {
        "CLOTHING_TYPE" => Some((CLOTHING_CODES, "CLOTHING")),
        "COLOR" => Some((COLOR_CODES, "COLOR")),
        "SEASON" => Some((SEASON_CODES, "SEASON")),
        _ => None,
    }
}

/// Derive the `dict_code` for an item
///
/// Known items map to their English code; anything else falls back to
/// `{PREFIX}_{index:03}` where `index` is the item's 1-based position.
pub fn dict_code(type_code: &str, item_name: &str, index: usize) -> String {
    match code_table(type_code) {
        Some((table, prefix)) => lookup(table, item_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}_{:03}", prefix, index)),
        None => format!("{}_{:03}", type_code, index),
    }
}

/// Derive the `dict_value` for an item; only colors carry one (their hex code)
pub fn dict_value(type_code: &str, item_name: &str) -> Option<&'static str> {
    if type_code == "COLOR" {
        lookup(COLOR_HEX, item_name)
    } else {
        None
    }
}
