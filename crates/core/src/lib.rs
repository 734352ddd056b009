//! 中文收货地址解析
//!
//! 从用户随手输入的地址文本中提取手机号、邮编、省市区、收件人姓名和详细地址。

pub mod clean;
pub mod contact;
pub mod name;
pub mod options;
pub mod parser;
pub mod region;
pub mod tokenize;

pub use addrparse_catalog::{
    AdministrativeRegion, Catalog, CatalogError, ExtraRegionData, RegionLevel, RegionNode,
    RegionRecord, RegionStore,
};
pub use options::{ParseOptions, Strategy};
pub use parser::{to_json, AddressParser, ParseResult};

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("配置无效: {0}")]
    InvalidConfig(String),
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("区划数据错误: {0}")]
    Catalog(#[from] CatalogError),
}

/// 使用进程级区划数据解析一条地址
///
/// 输入为空时返回 `None`。
pub fn parse(address: &str, options: &ParseOptions) -> Option<ParseResult> {
    AddressParser::default().parse(address, options)
}
