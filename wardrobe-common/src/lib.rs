#[macro_use]
mod vocab;

pub mod compression;
pub mod error;
pub mod facets;
pub mod models;

// 重新导出常用类型和函数，方便直接使用
pub use compression::{to_compressed, from_compressed, to_binary, from_binary, validate_compressed_data, SNAPSHOT_VERSION};
pub use error::{Error, Result};
pub use facets::{Category, Color, ColorScheme, FacetField, FacetValue, GenderCategory, Occasion, Pattern, Season, Style};
pub use models::{Catalog, Item, Outfit, OutfitPiece};
