use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use walkdir::WalkDir;

use wardrobe_common::{Catalog, FacetField};
use wardrobe_filter::{CatalogBuilder, FacetIndex, Faceted};

/// 输出的快照文件名
const SNAPSHOT_FILE: &str = "wardrobe_index.bin";

fn main() {
    let matches = Command::new("衣橱索引生成器")
        .version(env!("CARGO_PKG_VERSION"))
        .about("将衣橱目录 JSON 打包为筛选模块使用的快照")
        .arg(Arg::new("source")
            .short('s')
            .long("source")
            .value_name("SOURCE_DIR")
            .help("目录 JSON 文件所在目录")
            .required(true))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("OUTPUT_DIR")
            .help("快照输出目录")
            .required(true))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("显示详细信息")
            .action(ArgAction::SetTrue))
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();

    // clap 已保证必填参数存在
    let source_dir = matches.get_one::<String>("source").map(PathBuf::from).unwrap_or_default();
    let output_dir = matches.get_one::<String>("output").map(PathBuf::from).unwrap_or_default();

    if let Err(e) = generate_snapshot(&source_dir, &output_dir) {
        log::error!("快照生成失败: {:#}", e);
        std::process::exit(1);
    }
}

// 生成快照的主函数，返回快照文件路径
fn generate_snapshot(source_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    let start_time = Instant::now();

    if !source_dir.is_dir() {
        bail!("源目录不存在或不是有效目录 '{}'", source_dir.display());
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("无法创建输出目录 '{}'", output_dir.display()))?;

    log::info!("源目录: {}", source_dir.display());
    log::info!("输出目录: {}", output_dir.display());

    let builder = scan_catalog_files(source_dir)?;
    if builder.item_count() == 0 && builder.outfit_count() == 0 {
        bail!("没有找到任何单品或搭配");
    }

    let (items, outfits) = builder.build_indexes().context("目录校验失败")?;
    log_facets("单品", &items);
    log_facets("搭配", &outfits);

    let snapshot_path = output_dir.join(SNAPSHOT_FILE);
    builder
        .save_snapshot(&snapshot_path)
        .with_context(|| format!("无法写入快照 '{}'", snapshot_path.display()))?;

    log::info!("快照生成完成！耗时: {:.2}秒", start_time.elapsed().as_secs_f32());
    Ok(snapshot_path)
}

// 按路径顺序扫描 JSON 文件，合并为一个目录
fn scan_catalog_files(dir_path: &Path) -> Result<CatalogBuilder> {
    let mut builder = CatalogBuilder::new();
    let mut file_count = 0;

    for entry in WalkDir::new(dir_path).sort_by_file_name() {
        let entry = entry.context("遍历目录时出错")?;

        // 只处理JSON文件
        if !entry.file_type().is_file() || entry.path().extension().map_or(true, |ext| ext != "json") {
            continue;
        }

        let json = fs::read_to_string(entry.path())
            .with_context(|| format!("无法读取文件 {}", entry.path().display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("解析文件失败 {}", entry.path().display()))?;

        log::debug!(
            "{}: 单品 {} 件, 搭配 {} 套",
            entry.path().display(),
            catalog.items.len(),
            catalog.outfits.len()
        );

        builder.extend(catalog);
        file_count += 1;
    }

    log::info!(
        "扫描完成。共 {} 个文件，单品 {} 件，搭配 {} 套",
        file_count,
        builder.item_count(),
        builder.outfit_count()
    );
    Ok(builder)
}

// 打印每个字段上出现过的取值
fn log_facets<T: Faceted>(kind: &str, index: &FacetIndex<T>) {
    for &field in FacetField::ALL {
        let values = index.all_values(field);
        if values.is_empty() {
            continue;
        }
        let summary: Vec<String> = values
            .iter()
            .map(|&value| format!("{}({})", value.label(), index.count(value)))
            .collect();
        log::debug!("{} {}: {}", kind, field, summary.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_common::compression::from_compressed;

    const TOPS: &str = r#"{ "items": [
        { "id": "2", "name": "White T-Shirt", "category": "Tops", "color": "White", "pattern": "Solid", "season": ["Summer"] }
    ] }"#;

    const BOTTOMS: &str = r#"{ "items": [
        { "id": "3", "name": "Black Jeans", "category": "Bottoms", "color": "Black", "pattern": "Solid", "season": ["All"] }
    ], "outfits": [
        { "id": "1", "name": "Casual Friday", "occasion": "Casual", "season": "Spring", "style": "Casual" }
    ] }"#;

    #[test]
    fn merges_json_files_in_path_order() {
        let source = tempfile::tempdir().unwrap();
        fs::write(source.path().join("b_tops.json"), TOPS).unwrap();
        fs::write(source.path().join("a_bottoms.json"), BOTTOMS).unwrap();
        fs::write(source.path().join("notes.txt"), "ignored").unwrap();

        let builder = scan_catalog_files(source.path()).unwrap();
        let catalog = builder.build().unwrap();
        let ids: Vec<&str> = catalog.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert_eq!(catalog.outfits.len(), 1);
    }

    #[test]
    fn writes_a_loadable_snapshot() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("wardrobe.json"), BOTTOMS).unwrap();

        let path = generate_snapshot(source.path(), &output.path().join("dist")).unwrap();
        let catalog: Catalog = from_compressed(&fs::read(path).unwrap()).unwrap();
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.outfits.len(), 1);
    }

    #[test]
    fn fails_on_duplicate_ids_across_files() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("one.json"), TOPS).unwrap();
        fs::write(source.path().join("two.json"), TOPS).unwrap();

        assert!(generate_snapshot(source.path(), output.path()).is_err());
    }

    #[test]
    fn fails_when_nothing_is_found() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        assert!(generate_snapshot(source.path(), output.path()).is_err());
        assert!(generate_snapshot(&source.path().join("missing"), output.path()).is_err());
    }
}
