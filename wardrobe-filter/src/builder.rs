use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use wardrobe_common::compression::{to_compressed, SNAPSHOT_VERSION};
use wardrobe_common::{Catalog, Error, Item, Outfit, Result};

use crate::facet::{FacetIndex, Faceted};

/// 目录构建器 - 收集单品和搭配并输出快照
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<Item>,
    outfits: Vec<Outfit>,
}

impl CatalogBuilder {
    /// 创建新的目录构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加单品
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// 添加搭配
    pub fn add_outfit(&mut self, outfit: Outfit) {
        self.outfits.push(outfit);
    }

    /// 合并一个目录，保持原有顺序
    pub fn extend(&mut self, catalog: Catalog) {
        self.items.extend(catalog.items);
        self.outfits.extend(catalog.outfits);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn outfit_count(&self) -> usize {
        self.outfits.len()
    }

    /// 构建目录，同一集合内的标识符必须唯一
    pub fn build(&self) -> Result<Catalog> {
        ensure_unique_ids(&self.items)?;
        ensure_unique_ids(&self.outfits)?;

        log::info!("目录构建完成，单品数量: {}, 搭配数量: {}", self.items.len(), self.outfits.len());

        Ok(Catalog {
            items: self.items.clone(),
            outfits: self.outfits.clone(),
        })
    }

    /// 构建单品和搭配的分面索引
    pub fn build_indexes(&self) -> Result<(FacetIndex<Item>, FacetIndex<Outfit>)> {
        let catalog = self.build()?;
        Ok((FacetIndex::new(catalog.items), FacetIndex::new(catalog.outfits)))
    }

    /// 保存目录快照到文件，返回写入的字节数
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let catalog = self.build()?;

        let compressed_data = to_compressed(&catalog, SNAPSHOT_VERSION)?;

        let mut file = File::create(path)?;
        file.write_all(&compressed_data)?;

        log::info!("目录快照已写入文件: {}，大小: {} 字节", path.display(), compressed_data.len());
        Ok(compressed_data.len())
    }
}

fn ensure_unique_ids<T: Faceted>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(Error::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}
