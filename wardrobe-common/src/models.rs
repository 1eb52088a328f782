use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::facets::{Category, Color, ColorScheme, GenderCategory, Occasion, Pattern, Season, Style};

/// 衣橱单品 - 用户衣橱中的一件衣物
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Item {
    /// 单品唯一标识符
    pub id: String,
    /// 展示名称
    pub name: String,
    /// 描述
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub color: Color,
    pub pattern: Pattern,
    /// 适用季节，可以有多个
    #[serde(default, alias = "season")]
    pub seasons: Vec<Season>,
    /// 适用场合，可以有多个
    #[serde(default, alias = "occasion")]
    pub occasions: Vec<Occasion>,
    #[serde(default, alias = "gender_category")]
    pub gender: Option<GenderCategory>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, alias = "imageUrl", alias = "image")]
    pub image_url: Option<String>,
    /// 加入衣橱的时间
    #[serde(default, alias = "dateAdded")]
    pub date_added: Option<DateTime<Utc>>,
}

/// 搭配中的单件衣物
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutfitPiece {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub color: Color,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

/// 搭配 - 推荐搭配或已收藏搭配
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Outfit {
    pub id: String,
    pub name: String,
    /// 搭配说明
    #[serde(default, alias = "style_notes", alias = "styleNotes")]
    pub description: String,
    pub occasion: Occasion,
    pub season: Season,
    pub style: Style,
    #[serde(default, alias = "colorScheme")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub gender: Option<GenderCategory>,
    /// 组成搭配的衣物
    #[serde(default, alias = "items")]
    pub pieces: Vec<OutfitPiece>,
    /// 推荐评分 (0-100)，超出部分截断
    #[serde(default, alias = "aiScore", deserialize_with = "clamped_score")]
    pub ai_score: u8,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, alias = "dateCreated")]
    pub date_created: Option<DateTime<Utc>>,
}

/// 评分上限
pub const MAX_AI_SCORE: u8 = 100;

// 按 u8 读取以兼容快照编码，再截断到上限
fn clamped_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    u8::deserialize(deserializer).map(|score| score.min(MAX_AI_SCORE))
}

/// 目录 - 宿主应用交给筛选模块的全部数据
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
}

impl Catalog {
    /// 从 JSON 文本解析目录
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.outfits.is_empty()
    }
}
