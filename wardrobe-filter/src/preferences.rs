use serde::{Deserialize, Deserializer, Serialize};
use wardrobe_common::{Color, GenderCategory, Occasion, Pattern, Season, Style};

/// 多选清单 - 切换语义：已选则移除，未选则追加
///
/// 与 [`crate::FilterController::set_field`] 的替换语义不同，
/// 这里是集合的并与差。保持勾选顺序，取值不重复。
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Checklist<T>(Vec<T>);

// 反序列化经过 FromIterator 去重
impl<'de, T: Deserialize<'de> + Copy + PartialEq> Deserialize<'de> for Checklist<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}

impl<T> Default for Checklist<T> {
    fn default() -> Self {
        Checklist(Vec::new())
    }
}

impl<T: Copy + PartialEq> Checklist<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换取值，返回切换后是否被选中
    pub fn toggle(&mut self, value: T) -> bool {
        if let Some(position) = self.0.iter().position(|v| *v == value) {
            self.0.remove(position);
            false
        } else {
            self.0.push(value);
            true
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.0.contains(&value)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Copy + PartialEq> FromIterator<T> for Checklist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Checklist::new();
        for value in iter {
            if !list.contains(value) {
                list.0.push(value);
            }
        }
        list
    }
}

/// 风格偏好 - 偏好设置页面的数据
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StylePreferences {
    #[serde(default)]
    pub favorite_colors: Checklist<Color>,
    #[serde(default)]
    pub preferred_patterns: Checklist<Pattern>,
    #[serde(default)]
    pub occasion_preferences: Checklist<Occasion>,
    #[serde(default)]
    pub seasonal_preferences: Checklist<Season>,
    pub style: Style,
    /// 休闲-正式平衡 (0-100)
    #[serde(default = "default_balance", deserialize_with = "clamped_balance")]
    casual_formal_balance: u8,
    #[serde(default)]
    pub sustainability_focus: bool,
    #[serde(default)]
    pub gender: Option<GenderCategory>,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            favorite_colors: [Color::Blue, Color::Black].into_iter().collect(),
            preferred_patterns: [Pattern::Solid].into_iter().collect(),
            occasion_preferences: [Occasion::Everyday, Occasion::Work].into_iter().collect(),
            seasonal_preferences: [Season::Spring, Season::Summer, Season::Fall].into_iter().collect(),
            style: Style::Casual,
            casual_formal_balance: default_balance(),
            sustainability_focus: false,
            gender: Some(GenderCategory::Neutral),
        }
    }
}

impl StylePreferences {
    pub const MAX_BALANCE: u8 = 100;

    pub fn toggle_color(&mut self, color: Color) -> bool {
        self.favorite_colors.toggle(color)
    }

    pub fn toggle_pattern(&mut self, pattern: Pattern) -> bool {
        self.preferred_patterns.toggle(pattern)
    }

    pub fn toggle_occasion(&mut self, occasion: Occasion) -> bool {
        self.occasion_preferences.toggle(occasion)
    }

    pub fn toggle_season(&mut self, season: Season) -> bool {
        self.seasonal_preferences.toggle(season)
    }

    pub fn casual_formal_balance(&self) -> u8 {
        self.casual_formal_balance
    }

    /// 设置休闲-正式平衡，超出范围时截断到 0..=100
    pub fn set_casual_formal_balance(&mut self, balance: i32) {
        self.casual_formal_balance = clamp_balance(balance);
    }
}

fn default_balance() -> u8 {
    40
}

fn clamp_balance(balance: i32) -> u8 {
    balance.clamp(0, i32::from(StylePreferences::MAX_BALANCE)) as u8
}

fn clamped_balance<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    i32::deserialize(deserializer).map(clamp_balance)
}
