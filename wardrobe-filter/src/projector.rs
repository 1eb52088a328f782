use serde::Serialize;

use crate::facet::Faceted;
use crate::predicate;
use crate::state::FilterState;

/// 投影结果的类别，用于区分两种空结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionOutcome {
    /// 有匹配的记录
    Matches,
    /// 集合本身为空
    EmptyCollection,
    /// 集合非空但没有记录满足条件，前端应展示“未找到”和清除筛选入口
    NoMatches,
}

/// 投影 - 集合中满足筛选状态的记录，保持原有顺序
#[derive(Debug, Clone)]
pub struct Projection<'a, T> {
    records: Vec<&'a T>,
    collection_size: usize,
}

impl<'a, T> Projection<'a, T> {
    pub fn records(&self) -> &[&'a T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<&'a T> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 投影前集合的大小
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    pub fn outcome(&self) -> ProjectionOutcome {
        if self.collection_size == 0 {
            ProjectionOutcome::EmptyCollection
        } else if self.records.is_empty() {
            ProjectionOutcome::NoMatches
        } else {
            ProjectionOutcome::Matches
        }
    }
}

impl<'a, T: Faceted> Projection<'a, T> {
    pub fn ids(&self) -> Vec<&'a str> {
        self.records.iter().map(|&record| record.id()).collect()
    }
}

/// 对集合执行筛选投影
///
/// 结果是 `collection` 的保序子序列，只包含满足筛选状态的记录。
/// 同样的输入总是得到同样的结果。
pub fn project<'a, T: Faceted>(collection: &'a [T], state: &FilterState) -> Projection<'a, T> {
    let records = if state.is_empty() {
        collection.iter().collect()
    } else {
        collection
            .iter()
            .filter(|record| predicate::matches(*record, state))
            .collect()
    };

    Projection {
        records,
        collection_size: collection.len(),
    }
}
