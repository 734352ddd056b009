//! 行政区划参考数据
//!
//! 把省/市/区三级的层级数据集展开成按层级扁平化的记录表，
//! 并提供按层级、按上级编码过滤的查询，以及进程级的只增不减扩展。

mod catalog;
mod error;
mod region;
mod store;

pub use catalog::{Catalog, SarDivision};
pub use error::CatalogError;
pub use region::{
    is_cjk_ideograph, is_special_administrative_region, AdministrativeRegion, ExtraRegionData,
    RegionLevel, RegionNode, RegionRecord,
};
pub use store::RegionStore;

pub type Result<T> = std::result::Result<T, CatalogError>;
