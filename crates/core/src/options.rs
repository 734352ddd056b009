//! 解析选项
//!
//! 可以从 JSON 配置文件加载，也可以用环境变量覆盖默认值：
//! - `ADDRPARSE_STRATEGY`: `prefix` / `tree`（兼容旧的 `0` / `1`）
//! - `ADDRPARSE_NAME_MAX_LENGTH`: 姓名最大长度，非正整数时忽略

use std::fs;
use std::path::Path;
use std::str::FromStr;

use addrparse_catalog::ExtraRegionData;
use serde::{Deserialize, Serialize};

use crate::name;
use crate::region::{PrefixStrategy, RegionStrategy, TreeStrategy};
use crate::{CoreError, Result};

const ENV_STRATEGY: &str = "ADDRPARSE_STRATEGY";
const ENV_NAME_MAX_LENGTH: &str = "ADDRPARSE_NAME_MAX_LENGTH";

/// 省市区识别方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// 逐字增长前缀，只接受唯一匹配
    #[default]
    PrefixUniqueness,
    /// 按表序向下查找，首个命中即采用
    TreeDescent,
}

impl Strategy {
    pub fn resolver(self) -> &'static dyn RegionStrategy {
        match self {
            Strategy::PrefixUniqueness => &PrefixStrategy,
            Strategy::TreeDescent => &TreeStrategy,
        }
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "prefix" | "prefix-uniqueness" | "prefixuniqueness" => {
                Ok(Strategy::PrefixUniqueness)
            }
            "1" | "tree" | "tree-descent" | "treedescent" => Ok(Strategy::TreeDescent),
            other => Err(CoreError::InvalidConfig(format!("未知的识别方式: {}", other))),
        }
    }
}

/// 单次解析的选项
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// 省市区识别方式
    pub strategy: Strategy,
    /// 解析前合并进区划表的追加数据（进程内持久）
    pub extra_region_data: Option<ExtraRegionData>,
    /// 额外需要清洗掉的词
    pub extra_stop_words: Vec<String>,
    /// 按姓氏判定姓名时允许的最大长度
    pub name_max_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            extra_region_data: None,
            extra_stop_words: Vec::new(),
            name_max_length: name::default_max_length(),
        }
    }
}

impl ParseOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 默认值叠加环境变量
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// 用 `lookup` 提供的键值覆盖策略和姓名长度
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_STRATEGY) {
            match raw.parse::<Strategy>() {
                Ok(strategy) => self.strategy = strategy,
                Err(err) => log::warn!("[Options] 忽略 {}: {}", ENV_STRATEGY, err),
            }
        }

        if let Some(len) = lookup(ENV_NAME_MAX_LENGTH)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
        {
            self.name_max_length = len;
        }

        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stop_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_name_max_length(mut self, len: usize) -> Self {
        self.name_max_length = len;
        self
    }

    pub fn with_extra_region_data(mut self, extra: ExtraRegionData) -> Self {
        self.extra_region_data = Some(extra);
        self
    }
}
