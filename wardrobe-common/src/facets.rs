use crate::error::Result;
use std::fmt;

vocabulary! {
    /// 服装类别
    pub enum Category as "category" {
        Tops => ("tops", "Tops"),
        Bottoms => ("bottoms", "Bottoms"),
        Dresses => ("dresses", "Dresses"),
        Outerwear => ("outerwear", "Outerwear"),
        Shoes => ("shoes", "Shoes", "footwear"),
        Accessories => ("accessories", "Accessories"),
    }
}

vocabulary! {
    /// 主色
    pub enum Color as "color" {
        Black => ("black", "Black"),
        White => ("white", "White"),
        Gray => ("gray", "Gray", "grey"),
        Blue => ("blue", "Blue"),
        Navy => ("navy", "Navy"),
        Red => ("red", "Red"),
        Green => ("green", "Green"),
        Yellow => ("yellow", "Yellow"),
        Purple => ("purple", "Purple"),
        Pink => ("pink", "Pink"),
        Brown => ("brown", "Brown"),
        Beige => ("beige", "Beige"),
        Orange => ("orange", "Orange"),
        Multi => ("multi", "Multi", "multicolor"),
    }
}

vocabulary! {
    /// 图案
    pub enum Pattern as "pattern" {
        Solid => ("solid", "Solid"),
        Striped => ("striped", "Striped"),
        Plaid => ("plaid", "Plaid"),
        Floral => ("floral", "Floral"),
        PolkaDot => ("polka_dot", "Polka Dot", "polka-dot"),
        Graphic => ("graphic", "Graphic"),
        Knit => ("knit", "Knit"),
        Other => ("other", "Other"),
    }
}

vocabulary! {
    /// 季节；`All` 表示四季皆宜
    ///
    /// `All` 的机器键是 `all_seasons`，`all` 在筛选参数里表示不限。
    pub enum Season as "season" {
        Spring => ("spring", "Spring"),
        Summer => ("summer", "Summer"),
        Fall => ("fall", "Fall", "autumn"),
        Winter => ("winter", "Winter"),
        All => ("all_seasons", "All Seasons", "all", "all-season", "all season", "all-seasons"),
    }
}

vocabulary! {
    /// 场合
    pub enum Occasion as "occasion" {
        Casual => ("casual", "Casual"),
        Formal => ("formal", "Formal"),
        Business => ("business", "Business"),
        Work => ("work", "Work"),
        Party => ("party", "Party"),
        Date => ("date", "Date Night", "date-night"),
        NightOut => ("night_out", "Night Out", "night-out"),
        Workout => ("workout", "Workout"),
        Beach => ("beach", "Beach"),
        Everyday => ("everyday", "Everyday"),
    }
}

vocabulary! {
    /// 性别分类
    pub enum GenderCategory as "gender" {
        Male => ("male", "Men's", "men"),
        Female => ("female", "Women's", "women"),
        Neutral => ("neutral", "Gender Neutral", "unisex"),
    }
}

vocabulary! {
    /// 穿搭风格（仅用于搭配）
    pub enum Style as "style" {
        Casual => ("casual", "Casual"),
        Formal => ("formal", "Formal"),
        Sporty => ("sporty", "Sporty"),
        Vintage => ("vintage", "Vintage"),
        Minimalist => ("minimalist", "Minimalist"),
        Bohemian => ("bohemian", "Bohemian"),
        Streetwear => ("streetwear", "Streetwear"),
        Business => ("business", "Business"),
    }
}

vocabulary! {
    /// 配色方案（仅用于搭配）
    pub enum ColorScheme as "color_scheme" {
        Monochrome => ("monochrome", "Monochrome"),
        Neutral => ("neutral", "Neutral"),
        Warm => ("warm", "Warm"),
        Cool => ("cool", "Cool"),
        Pastel => ("pastel", "Pastel"),
        Bright => ("bright", "Bright"),
        Earth => ("earth", "Earth Tones", "earth tones"),
    }
}

/// 可筛选的分面字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetField {
    Category,
    Color,
    Pattern,
    Season,
    Occasion,
    Gender,
    Style,
    ColorScheme,
}

impl FacetField {
    pub const ALL: &'static [FacetField] = &[
        FacetField::Category,
        FacetField::Color,
        FacetField::Pattern,
        FacetField::Season,
        FacetField::Occasion,
        FacetField::Gender,
        FacetField::Style,
        FacetField::ColorScheme,
    ];

    /// 字段名（与前端筛选参数的键一致）
    pub fn name(self) -> &'static str {
        match self {
            FacetField::Category => "category",
            FacetField::Color => "color",
            FacetField::Pattern => "pattern",
            FacetField::Season => "season",
            FacetField::Occasion => "occasion",
            FacetField::Gender => "gender",
            FacetField::Style => "style",
            FacetField::ColorScheme => "color_scheme",
        }
    }

    /// 按名称查找字段，未知名称返回 `None`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("colorScheme") {
            return Some(FacetField::ColorScheme);
        }
        if name.eq_ignore_ascii_case("gender_category") || name.eq_ignore_ascii_case("genderCategory") {
            return Some(FacetField::Gender);
        }
        FacetField::ALL
            .iter()
            .copied()
            .find(|field| name.eq_ignore_ascii_case(field.name()))
    }

    /// 将原始字符串解析为该字段词表中的取值
    pub fn parse_value(self, raw: &str) -> Result<FacetValue> {
        let value = match self {
            FacetField::Category => FacetValue::Category(raw.parse()?),
            FacetField::Color => FacetValue::Color(raw.parse()?),
            FacetField::Pattern => FacetValue::Pattern(raw.parse()?),
            FacetField::Season => FacetValue::Season(raw.parse()?),
            FacetField::Occasion => FacetValue::Occasion(raw.parse()?),
            FacetField::Gender => FacetValue::GenderCategory(raw.parse()?),
            FacetField::Style => FacetValue::Style(raw.parse()?),
            FacetField::ColorScheme => FacetValue::ColorScheme(raw.parse()?),
        };
        Ok(value)
    }

    /// 通配取值：记录声明了该值即视为满足此字段上的任意约束。
    /// 目前只有季节字段有通配（“四季皆宜”）。
    pub fn wildcard(self) -> Option<FacetValue> {
        match self {
            FacetField::Season => Some(FacetValue::Season(Season::All)),
            _ => None,
        }
    }
}

impl fmt::Display for FacetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 某个分面字段上的一个具体取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetValue {
    Category(Category),
    Color(Color),
    Pattern(Pattern),
    Season(Season),
    Occasion(Occasion),
    GenderCategory(GenderCategory),
    Style(Style),
    ColorScheme(ColorScheme),
}

impl FacetValue {
    /// 取值所属的字段
    pub fn field(self) -> FacetField {
        match self {
            FacetValue::Category(_) => FacetField::Category,
            FacetValue::Color(_) => FacetField::Color,
            FacetValue::Pattern(_) => FacetField::Pattern,
            FacetValue::Season(_) => FacetField::Season,
            FacetValue::Occasion(_) => FacetField::Occasion,
            FacetValue::GenderCategory(_) => FacetField::Gender,
            FacetValue::Style(_) => FacetField::Style,
            FacetValue::ColorScheme(_) => FacetField::ColorScheme,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FacetValue::Category(v) => v.key(),
            FacetValue::Color(v) => v.key(),
            FacetValue::Pattern(v) => v.key(),
            FacetValue::Season(v) => v.key(),
            FacetValue::Occasion(v) => v.key(),
            FacetValue::GenderCategory(v) => v.key(),
            FacetValue::Style(v) => v.key(),
            FacetValue::ColorScheme(v) => v.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FacetValue::Category(v) => v.label(),
            FacetValue::Color(v) => v.label(),
            FacetValue::Pattern(v) => v.label(),
            FacetValue::Season(v) => v.label(),
            FacetValue::Occasion(v) => v.label(),
            FacetValue::GenderCategory(v) => v.label(),
            FacetValue::Style(v) => v.label(),
            FacetValue::ColorScheme(v) => v.label(),
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
