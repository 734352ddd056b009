//! 行政区划记录与数据集节点

use serde::{Deserialize, Serialize};

/// 特别行政区名称
const SPECIAL_ADMINISTRATIVE_REGIONS: [&str; 2] = ["香港特别行政区", "澳门特别行政区"];

/// 行政区划层级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    /// 省级（含直辖市、自治区、特别行政区）
    Province,
    /// 市级
    City,
    /// 区县级
    Area,
}

/// 扁平化后的行政区划记录
///
/// 市级记录携带 `province_code`，区县级记录同时携带 `city_code` 和 `province_code`。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativeRegion {
    pub code: String,
    pub name: String,
    pub level: RegionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
}

impl AdministrativeRegion {
    pub fn province(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            level: RegionLevel::Province,
            province_code: None,
            city_code: None,
        }
    }

    pub fn city(code: &str, name: &str, province_code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            level: RegionLevel::City,
            province_code: Some(province_code.to_string()),
            city_code: None,
        }
    }

    pub fn area(code: &str, name: &str, city_code: &str, province_code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            level: RegionLevel::Area,
            province_code: Some(province_code.to_string()),
            city_code: Some(city_code.to_string()),
        }
    }
}

/// 层级数据集中的一个节点
///
/// 省节点的 `children` 是市，市节点的 `children` 是区县。
/// 特别行政区只有一个子节点，其子节点直接就是区。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionNode {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RegionNode>,
}

/// 调用方追加的区划记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default)]
    pub city_code: Option<String>,
}

impl RegionRecord {
    /// 转换为指定层级的区划记录
    pub fn to_region(&self, level: RegionLevel) -> AdministrativeRegion {
        AdministrativeRegion {
            code: self.code.clone(),
            name: self.name.clone(),
            level,
            province_code: self.province_code.clone(),
            city_code: self.city_code.clone(),
        }
    }
}

/// 追加的区划数据，按层级分组
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraRegionData {
    pub province: Option<Vec<RegionRecord>>,
    pub city: Option<Vec<RegionRecord>>,
    pub area: Option<Vec<RegionRecord>>,
}

impl ExtraRegionData {
    /// 三个层级都未提供
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.city.is_none() && self.area.is_none()
    }
}

/// 是否为特别行政区
pub fn is_special_administrative_region(name: &str) -> bool {
    SPECIAL_ADMINISTRATIVE_REGIONS.contains(&name)
}

/// CJK 统一汉字基本区（U+4E00..=U+9FA5）
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}')
}
