//! 行政区划数据错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("区划数据格式错误: {0}")]
    InvalidDataset(String),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
