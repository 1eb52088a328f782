use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::projector::ProjectionOutcome;
use crate::state::FilterController;
use crate::view::ViewParams;

/// 筛选参数 - 客户端传递的筛选条件
#[derive(Deserialize, Debug, Default, Clone)]
pub struct FilterParams {
    /// 字段名到选中值，未知字段名被忽略
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    /// 关键词 (可选)
    #[serde(default, alias = "searchTerm")]
    pub search_term: Option<String>,
    /// 排序与分页
    #[serde(flatten)]
    pub view: ViewParams,
}

impl FilterParams {
    pub fn from_json(json: &str) -> wardrobe_common::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 将参数应用到一个新的筛选状态控制器
    pub fn to_controller(&self) -> FilterController {
        let mut controller = FilterController::new();
        for (field, value) in &self.filters {
            controller.set_raw(field, value);
        }
        if let Some(term) = &self.search_term {
            controller.set_search_term(term);
        }
        controller
    }
}

/// 筛选结果 - 返回给客户端的一页记录及空结果信息
#[derive(Serialize, Debug)]
pub struct FilterResult<'a, T> {
    /// 当前页的记录
    pub records: Vec<&'a T>,
    /// 筛选结果总数
    pub total: usize,
    /// 当前页码
    pub page: usize,
    /// 每页条数
    pub limit: usize,
    /// 总页数
    pub total_pages: usize,
    /// 筛选前的集合大小
    pub collection_size: usize,
    pub outcome: ProjectionOutcome,
    /// 生效中的筛选键，用于渲染筛选标签
    pub active_filters: Vec<&'static str>,
}

/// 下拉框选项 - 字段上的一个取值及其记录数
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub key: &'static str,
    pub label: &'static str,
    pub count: usize,
}
