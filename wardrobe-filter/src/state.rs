use std::collections::BTreeMap;
use std::fmt;
use wardrobe_common::{FacetField, FacetValue};

/// 单个字段上的选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 不限
    Any,
    Value(FacetValue),
}

impl From<FacetValue> for Selection {
    fn from(value: FacetValue) -> Self {
        Selection::Value(value)
    }
}

impl From<Option<FacetValue>> for Selection {
    fn from(value: Option<FacetValue>) -> Self {
        value.map_or(Selection::Any, Selection::Value)
    }
}

/// 生效中的筛选条件的键，用于渲染可移除的筛选标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Field(FacetField),
    Search,
}

impl FilterKey {
    pub fn name(self) -> &'static str {
        match self {
            FilterKey::Field(field) => field.name(),
            FilterKey::Search => "search_term",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 筛选状态 - 每个字段最多一个选中值，外加关键词
///
/// 不在映射中的字段不施加约束。只能通过 [`FilterController`] 修改。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    fields: BTreeMap<FacetField, FacetValue>,
    search_term: String,
    needle: String,
}

impl FilterState {
    /// 字段上的约束
    pub fn constraint(&self, field: FacetField) -> Option<FacetValue> {
        self.fields.get(&field).copied()
    }

    /// 全部字段约束，按字段顺序
    pub fn constraints(&self) -> impl Iterator<Item = FacetValue> + '_ {
        self.fields.values().copied()
    }

    /// 用户输入的原始关键词
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// 归一化后的关键词（去除首尾空白，小写）
    pub fn search_needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.needle.is_empty()
    }

    /// 生效中的筛选键集合，由状态推导，始终与状态一致
    pub fn active_filters(&self) -> Vec<FilterKey> {
        let mut keys: Vec<FilterKey> = self.fields.keys().map(|&field| FilterKey::Field(field)).collect();
        if !self.needle.is_empty() {
            keys.push(FilterKey::Search);
        }
        keys
    }
}

/// 筛选状态控制器 - 所有对筛选状态的修改都经过这里
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn into_state(self) -> FilterState {
        self.state
    }

    /// 设置字段；`Selection::Any` 移除该字段。幂等。
    pub fn set_field(&mut self, field: FacetField, selection: Selection) {
        match selection {
            Selection::Any => {
                self.state.fields.remove(&field);
            }
            Selection::Value(value) if value.field() == field => {
                self.state.fields.insert(field, value);
            }
            Selection::Value(value) => {
                log::debug!("忽略不属于字段 {} 的取值: {:?}", field, value);
            }
        }
    }

    pub fn clear_field(&mut self, field: FacetField) {
        self.set_field(field, Selection::Any);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.state.search_term = term.to_string();
        self.state.needle = term.trim().to_lowercase();
    }

    /// 按字符串设置字段，用于前端传入的筛选参数
    ///
    /// 未知字段名被忽略；空串、`any`、`all` 表示不限；
    /// 词表外的取值记录警告并清除该字段。
    pub fn set_raw(&mut self, field_name: &str, value: &str) {
        let Some(field) = FacetField::from_name(field_name) else {
            log::debug!("忽略未知的筛选字段: {}", field_name);
            return;
        };

        if is_unconstrained(value) {
            self.clear_field(field);
            return;
        }

        match field.parse_value(value) {
            Ok(parsed) => self.set_field(field, Selection::Value(parsed)),
            Err(e) => {
                log::warn!("{}，已清除字段 {}", e, field);
                self.clear_field(field);
            }
        }
    }

    /// 清空全部筛选条件
    pub fn clear_all(&mut self) {
        self.state = FilterState::default();
    }

    pub fn active_filters(&self) -> Vec<FilterKey> {
        self.state.active_filters()
    }
}

fn is_unconstrained(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("any") || value.eq_ignore_ascii_case("all")
}
