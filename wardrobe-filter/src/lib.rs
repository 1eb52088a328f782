use wasm_bindgen::prelude::*;
use log::LevelFilter;
use wardrobe_common::{compression, Catalog, FacetField, Item, Outfit};

// 导出模块
pub mod builder;
pub mod facet;
pub mod logging;
pub mod models;
pub mod predicate;
pub mod preferences;
pub mod projector;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_support;

pub use builder::CatalogBuilder;
pub use facet::{FacetIndex, FacetValues, Faceted};
pub use models::{FacetOption, FilterParams, FilterResult};
pub use predicate::matches;
pub use preferences::{Checklist, StylePreferences};
pub use projector::{project, Projection, ProjectionOutcome};
pub use state::{FilterController, FilterKey, FilterState, Selection};
pub use view::{Page, SortOrder, ViewParams};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理和控制台日志
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// 调整控制台日志级别: "off", "error", "warn", "info", "debug", "trace"
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> std::result::Result<(), JsValue> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("无效的日志级别: {}", level)))?;
    logging::init(level);
    Ok(())
}

/// 衣橱筛选器 - 持有已加载的目录，处理单品和搭配的筛选
#[derive(Debug, Clone)]
pub struct WardrobeFilter {
    items: FacetIndex<Item>,
    outfits: FacetIndex<Outfit>,
}

impl WardrobeFilter {
    /// 从目录构建筛选器，同一集合内的标识符必须唯一
    pub fn new(catalog: Catalog) -> wardrobe_common::Result<Self> {
        let mut builder = CatalogBuilder::new();
        builder.extend(catalog);
        let (items, outfits) = builder.build_indexes()?;
        Ok(Self { items, outfits })
    }

    /// 从压缩快照加载
    pub fn from_snapshot(data: &[u8]) -> wardrobe_common::Result<Self> {
        let catalog: Catalog = compression::from_compressed(data)?;
        Self::new(catalog)
    }

    /// 从 JSON 文本加载
    pub fn from_json(json: &str) -> wardrobe_common::Result<Self> {
        Self::new(Catalog::from_json(json)?)
    }

    pub fn items(&self) -> &FacetIndex<Item> {
        &self.items
    }

    pub fn outfits(&self) -> &FacetIndex<Outfit> {
        &self.outfits
    }

    /// 筛选单品
    pub fn filter_items(&self, params: &FilterParams) -> FilterResult<'_, Item> {
        run_filter(&self.items, params)
    }

    /// 筛选搭配
    pub fn filter_outfits(&self, params: &FilterParams) -> FilterResult<'_, Outfit> {
        run_filter(&self.outfits, params)
    }

    /// 单品字段上的可选项
    pub fn item_options(&self, field_name: &str) -> Vec<FacetOption> {
        facet_options(&self.items, field_name)
    }

    /// 搭配字段上的可选项
    pub fn outfit_options(&self, field_name: &str) -> Vec<FacetOption> {
        facet_options(&self.outfits, field_name)
    }
}

fn run_filter<'a, T: Faceted>(index: &'a FacetIndex<T>, params: &FilterParams) -> FilterResult<'a, T> {
    let controller = params.to_controller();
    let projection = index.project(controller.state());
    let collection_size = projection.collection_size();
    let outcome = projection.outcome();

    log::debug!("筛选完成，匹配 {} / {} 条记录", projection.len(), collection_size);

    let page = projection.view(&params.view);
    FilterResult {
        records: page.records,
        total: page.total,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
        collection_size,
        outcome,
        active_filters: controller.active_filters().into_iter().map(FilterKey::name).collect(),
    }
}

fn facet_options<T: Faceted>(index: &FacetIndex<T>, field_name: &str) -> Vec<FacetOption> {
    let Some(field) = FacetField::from_name(field_name) else {
        log::debug!("忽略未知的筛选字段: {}", field_name);
        return Vec::new();
    };

    index
        .all_values(field)
        .iter()
        .map(|&value| FacetOption {
            key: value.key(),
            label: value.label(),
            count: index.count(value),
        })
        .collect()
}

/// 衣橱筛选器JS接口 - 提供给JavaScript使用的筛选API
#[wasm_bindgen]
pub struct WardrobeFilterJS {
    inner: WardrobeFilter,
}

#[wasm_bindgen]
impl WardrobeFilterJS {
    /// 从压缩快照初始化
    pub fn from_snapshot(index_data: &[u8]) -> std::result::Result<WardrobeFilterJS, JsValue> {
        let inner = WardrobeFilter::from_snapshot(index_data).map_err(|e| {
            log::error!("初始化筛选器失败: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(WardrobeFilterJS { inner })
    }

    /// 从 JSON 目录初始化
    pub fn from_json(catalog_json: &str) -> std::result::Result<WardrobeFilterJS, JsValue> {
        let inner = WardrobeFilter::from_json(catalog_json).map_err(|e| {
            log::error!("初始化筛选器失败: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(WardrobeFilterJS { inner })
    }

    /// 所有可筛选字段名
    pub fn facet_fields() -> js_sys::Array {
        FacetField::ALL
            .iter()
            .map(|field| JsValue::from_str(field.name()))
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.inner.items().len()
    }

    pub fn outfit_count(&self) -> usize {
        self.inner.outfits().len()
    }

    /// 单品字段上的可选项
    pub fn item_values(&self, field: &str) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.inner.item_options(field))
    }

    /// 搭配字段上的可选项
    pub fn outfit_values(&self, field: &str) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.inner.outfit_options(field))
    }

    /// 筛选单品
    pub fn filter_items(&self, params_json: &str) -> std::result::Result<JsValue, JsValue> {
        let params = parse_params(params_json)?;
        to_js(&self.inner.filter_items(&params))
    }

    /// 筛选搭配
    pub fn filter_outfits(&self, params_json: &str) -> std::result::Result<JsValue, JsValue> {
        let params = parse_params(params_json)?;
        to_js(&self.inner.filter_outfits(&params))
    }
}

fn parse_params(params_json: &str) -> std::result::Result<FilterParams, JsValue> {
    FilterParams::from_json(params_json).map_err(|e| JsValue::from_str(&format!("解析参数失败: {}", e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("序列化结果失败: {}", e)))
}
