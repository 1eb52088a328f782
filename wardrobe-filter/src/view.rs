use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::facet::Faceted;
use crate::projector::Projection;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// 排序方式；`Default` 保持集合原有顺序
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Default,
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
    /// 评分从高到低
    Score,
}

/// 展示参数 - 排序与分页
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ViewParams {
    #[serde(default)]
    pub sort: SortOrder,
    /// 当前页码，从1开始 (可选, 默认为1)
    #[serde(default)]
    pub page: Option<usize>,
    /// 每页条数 (可选, 默认为12)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// 一页结果
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    /// 分页前的记录总数
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// 排序，稳定；无时间戳或无评分的记录总是排在最后
pub fn sort_records<T: Faceted>(records: &mut [&T], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::Newest => records.sort_by(|a, b| present_first(a.timestamp(), b.timestamp(), |x, y| y.cmp(x))),
        SortOrder::Oldest => records.sort_by(|a, b| present_first(a.timestamp(), b.timestamp(), |x, y| x.cmp(y))),
        SortOrder::NameAsc => records.sort_by_cached_key(|r| r.name().to_lowercase()),
        SortOrder::NameDesc => {
            records.sort_by(|a, b| b.name().to_lowercase().cmp(&a.name().to_lowercase()))
        }
        SortOrder::Score => records.sort_by(|a, b| present_first(a.score(), b.score(), |x, y| y.cmp(x))),
    }
}

// 两边都有值时按 `cmp` 比较，缺失的一方排在后面
fn present_first<D>(first: Option<D>, second: Option<D>, cmp: impl Fn(&D, &D) -> Ordering) -> Ordering {
    match (first, second) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 分页；页码被限制在 `1..=max(total_pages, 1)`
pub fn paginate<T>(records: Vec<T>, params: &ViewParams) -> Page<T> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let total = records.len();
    let total_pages = total.div_ceil(limit);
    let page = params.page.unwrap_or(1).max(1).min(total_pages.max(1));

    let start = (page - 1) * limit;
    let records = records.into_iter().skip(start).take(limit).collect();

    Page {
        records,
        total,
        page,
        limit,
        total_pages,
    }
}

impl<'a, T: Faceted> Projection<'a, T> {
    /// 对投影结果排序并取出一页
    pub fn view(self, params: &ViewParams) -> Page<&'a T> {
        let mut records = self.into_records();
        sort_records(&mut records, params.sort);
        paginate(records, params)
    }
}
