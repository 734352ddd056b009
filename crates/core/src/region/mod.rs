//! 省市区识别
//!
//! 每个地址片段依次尝试识别省、市、区；已识别的层级不再变化。
//! 两种识别方式实现同一个 [`RegionStrategy`]，由 [`crate::Strategy`] 选择。

mod prefix;
mod tree;

pub use prefix::PrefixStrategy;
pub use tree::TreeStrategy;

use addrparse_catalog::{
    is_special_administrative_region, AdministrativeRegion, Catalog, RegionLevel,
};

/// 已识别的省市区
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRegion {
    pub province: Option<AdministrativeRegion>,
    pub city: Option<AdministrativeRegion>,
    pub area: Option<AdministrativeRegion>,
}

impl ResolvedRegion {
    /// 三级都已识别
    pub fn is_complete(&self) -> bool {
        self.province.is_some() && self.city.is_some() && self.area.is_some()
    }

    /// 已识别层级的名称，依次为省、市、区
    pub fn names(&self) -> Vec<&str> {
        [&self.province, &self.city, &self.area]
            .into_iter()
            .flatten()
            .map(|r| r.name.as_str())
            .filter(|name| !name.is_empty())
            .collect()
    }

    fn province_code(&self) -> Option<String> {
        self.province.as_ref().map(|p| p.code.clone())
    }

    fn city_code(&self) -> Option<String> {
        self.city.as_ref().map(|c| c.code.clone())
    }

    /// 已识别的省是特别行政区时返回它
    fn sar_province(&self) -> Option<&AdministrativeRegion> {
        self.province
            .as_ref()
            .filter(|p| is_special_administrative_region(&p.name))
    }
}

/// 单个片段的识别结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub region: ResolvedRegion,
    /// 去掉省市区名称后剩下的文本
    pub detail: Option<String>,
}

/// 省市区识别方式
pub trait RegionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// 在 `resolved` 的基础上识别 `fragment`
    fn resolve(&self, fragment: &str, resolved: &ResolvedRegion, catalog: &Catalog) -> Resolution;
}

// ============================================================================
// 共用辅助函数
// ============================================================================

/// 按字符截取前 `len` 个字
pub(crate) fn char_prefix(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// 按编码补齐上级区划
pub(crate) fn lookup_parent(
    catalog: &Catalog,
    level: RegionLevel,
    code: Option<&str>,
) -> Option<AdministrativeRegion> {
    let code = code?;
    let found = catalog.find(level, code).cloned();
    if found.is_none() {
        log::warn!("[Region] 上级编码 {} 在 {:?} 表中不存在", code, level);
    }
    found
}

/// 特别行政区的“市”：编码取下级容器，名称沿用特别行政区本身
pub(crate) fn sar_city(catalog: &Catalog, province: &AdministrativeRegion) -> Option<AdministrativeRegion> {
    let division = catalog.sar_division(&province.code)?;
    Some(AdministrativeRegion::city(
        &division.city_code,
        &province.name,
        &province.code,
    ))
}

/// 在特别行政区的容器内找区
///
/// 前缀从 2 个字开始增长，只有前缀与区名完全相同才算命中；
/// 没有任何区以当前前缀开头时停止。返回区记录和命中的文本。
pub(crate) fn match_sar_area(
    catalog: &Catalog,
    province: &AdministrativeRegion,
    city: Option<&AdministrativeRegion>,
    fragment: &str,
) -> Option<(AdministrativeRegion, String)> {
    let division = catalog.sar_division(&province.code)?;
    let city_code = city.map_or(division.city_code.as_str(), |c| c.code.as_str());

    for len in 2..=fragment.chars().count() {
        let prefix = char_prefix(fragment, len);
        let candidate = division.areas.iter().find(|a| a.name.starts_with(prefix))?;
        if candidate.name == prefix {
            let area = AdministrativeRegion::area(
                &candidate.code,
                &candidate.name,
                city_code,
                &province.code,
            );
            return Some((area, prefix.to_string()));
        }
    }

    None
}

/// 片段识别完后剩余的文本，空串视为没有
pub(crate) fn leftover(fragment: String) -> Option<String> {
    (!fragment.is_empty()).then_some(fragment)
}
