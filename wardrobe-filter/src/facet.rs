use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use wardrobe_common::{FacetField, FacetValue, Item, Outfit};

use crate::predicate;
use crate::projector::{self, Projection};
use crate::state::FilterState;

/// 记录在某个分面字段上的取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValues {
    /// 该记录类型没有这个字段，字段上的约束对它不生效
    Unsupported,
    /// 记录有这个字段但没有填写
    Missing,
    One(FacetValue),
    Many(Vec<FacetValue>),
}

impl FacetValues {
    /// 展开为取值列表
    pub fn to_vec(&self) -> Vec<FacetValue> {
        match self {
            FacetValues::Unsupported | FacetValues::Missing => Vec::new(),
            FacetValues::One(value) => vec![*value],
            FacetValues::Many(values) => values.clone(),
        }
    }
}

/// 可被分面筛选的记录
pub trait Faceted {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn facet(&self, field: FacetField) -> FacetValues;

    /// 参与关键词搜索的文本：名称、类别文本、描述
    fn search_text(&self) -> [&str; 3];

    /// 用于按时间排序的时间戳
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// 推荐评分，没有评分的记录类型返回 `None`
    fn score(&self) -> Option<u8> {
        None
    }
}

impl Faceted for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn facet(&self, field: FacetField) -> FacetValues {
        match field {
            FacetField::Category => FacetValues::One(self.category.into()),
            FacetField::Color => FacetValues::One(self.color.into()),
            FacetField::Pattern => FacetValues::One(self.pattern.into()),
            FacetField::Season => FacetValues::Many(self.seasons.iter().map(|&s| s.into()).collect()),
            FacetField::Occasion => FacetValues::Many(self.occasions.iter().map(|&o| o.into()).collect()),
            FacetField::Gender => self.gender.map_or(FacetValues::Missing, |g| FacetValues::One(g.into())),
            FacetField::Style | FacetField::ColorScheme => FacetValues::Unsupported,
        }
    }

    fn search_text(&self) -> [&str; 3] {
        [&self.name, self.category.label(), &self.description]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date_added
    }
}

impl Faceted for Outfit {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn facet(&self, field: FacetField) -> FacetValues {
        match field {
            FacetField::Occasion => FacetValues::One(self.occasion.into()),
            FacetField::Season => FacetValues::One(self.season.into()),
            FacetField::Style => FacetValues::One(self.style.into()),
            FacetField::ColorScheme => self.color_scheme.map_or(FacetValues::Missing, |c| FacetValues::One(c.into())),
            FacetField::Gender => self.gender.map_or(FacetValues::Missing, |g| FacetValues::One(g.into())),
            FacetField::Category | FacetField::Color | FacetField::Pattern => FacetValues::Unsupported,
        }
    }

    // 搭配没有类别，以场合作为类别文本
    fn search_text(&self) -> [&str; 3] {
        [&self.name, self.occasion.label(), &self.description]
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }

    fn score(&self) -> Option<u8> {
        Some(self.ai_score)
    }
}

/// 分面索引 - 持有记录集合以及每个字段上出现过的取值
///
/// 取值按首次出现的顺序排列；同时维护取值到记录位置的倒排表，
/// 用于展示每个取值下的记录数。
#[derive(Debug, Clone)]
pub struct FacetIndex<T> {
    records: Vec<T>,
    values: BTreeMap<FacetField, Vec<FacetValue>>,
    postings: HashMap<FacetValue, Vec<usize>>,
}

impl<T: Faceted> FacetIndex<T> {
    /// 为记录集合构建索引，集合顺序保持不变
    pub fn new(records: Vec<T>) -> Self {
        let mut values: BTreeMap<FacetField, Vec<FacetValue>> = BTreeMap::new();
        let mut postings: HashMap<FacetValue, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            for &field in FacetField::ALL {
                for value in record.facet(field).to_vec() {
                    let positions = postings.entry(value).or_default();
                    if positions.last() == Some(&position) {
                        // 同一记录重复声明同一取值
                        continue;
                    }
                    if positions.is_empty() {
                        values.entry(field).or_default().push(value);
                    }
                    positions.push(position);
                }
            }
        }

        log::debug!("分面索引构建完成，记录数: {}, 取值数: {}", records.len(), postings.len());

        Self { records, values, postings }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 字段上出现过的全部取值，按首次出现顺序
    pub fn all_values(&self, field: FacetField) -> &[FacetValue] {
        self.values.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 带有该取值的记录数
    pub fn count(&self, value: FacetValue) -> usize {
        self.positions(value).len()
    }

    /// 带有该取值的记录位置，升序
    pub fn positions(&self, value: FacetValue) -> &[usize] {
        self.postings.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// 判断单条记录是否满足筛选状态
    pub fn matches(&self, record: &T, state: &FilterState) -> bool {
        predicate::matches(record, state)
    }

    /// 在索引持有的集合上执行投影
    pub fn project(&self, state: &FilterState) -> Projection<'_, T> {
        projector::project(&self.records, state)
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T: Faceted> FromIterator<T> for FacetIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
