//! 唯一前缀识别（默认方式）
//!
//! 前缀从 2 个字开始逐字增长：唯一命中时暂定采用并继续增长，
//! 多个命中时继续增长等待区分，没有命中时停止。
//! 暂定的结果不会因为后面出现歧义而撤销，最终采用最长的唯一前缀。

use addrparse_catalog::{AdministrativeRegion, Catalog, RegionLevel};

use super::{
    char_prefix, leftover, lookup_parent, match_sar_area, sar_city, Resolution, RegionStrategy,
    ResolvedRegion,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixStrategy;

impl RegionStrategy for PrefixStrategy {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn resolve(&self, fragment: &str, resolved: &ResolvedRegion, catalog: &Catalog) -> Resolution {
        let mut region = resolved.clone();
        let mut fragment = fragment.to_string();

        if region.province.is_none() {
            if let Some((province, matched)) =
                grow_unique(catalog, RegionLevel::Province, &fragment, None, None)
            {
                log::debug!("[Region] 前缀 {} -> 省 {}", matched, province.name);
                fragment = fragment.replace(&matched, "");
                region.province = Some(province);
            }
        }

        if region.city.is_none() {
            if let Some(sar) = region.sar_province() {
                region.city = sar_city(catalog, sar);
            } else if let Some((city, matched)) = grow_unique(
                catalog,
                RegionLevel::City,
                &fragment,
                region.province_code().as_deref(),
                None,
            ) {
                log::debug!("[Region] 前缀 {} -> 市 {}", matched, city.name);
                fragment = fragment.replace(&matched, "");
                if region.province.is_none() {
                    region.province =
                        lookup_parent(catalog, RegionLevel::Province, city.province_code.as_deref());
                }
                region.city = Some(city);
            }
        }

        if region.area.is_none() {
            let matched_area = match region.sar_province() {
                Some(sar) => match_sar_area(catalog, sar, region.city.as_ref(), &fragment),
                None => grow_unique(
                    catalog,
                    RegionLevel::Area,
                    &fragment,
                    region.province_code().as_deref(),
                    region.city_code().as_deref(),
                ),
            };

            if let Some((area, matched)) = matched_area {
                log::debug!("[Region] 前缀 {} -> 区 {}", matched, area.name);
                fragment = fragment.replacen(&matched, "", 1);
                if region.province.is_none() {
                    region.province =
                        lookup_parent(catalog, RegionLevel::Province, area.province_code.as_deref());
                }
                if region.city.is_none() {
                    region.city = lookup_parent(catalog, RegionLevel::City, area.city_code.as_deref());
                }
                region.area = Some(area);
            }
        }

        Resolution {
            region,
            detail: leftover(fragment),
        }
    }
}

/// 逐字增长前缀，返回最后一次唯一命中的记录及其前缀
fn grow_unique(
    catalog: &Catalog,
    level: RegionLevel,
    fragment: &str,
    province_code: Option<&str>,
    city_code: Option<&str>,
) -> Option<(AdministrativeRegion, String)> {
    let mut committed = None;

    for len in 2..=fragment.chars().count() {
        let prefix = char_prefix(fragment, len);
        let candidates = catalog.prefix_matches(level, prefix, province_code, city_code);
        match candidates.as_slice() {
            [] => break,
            [only] => committed = Some(((*only).clone(), prefix.to_string())),
            _ => {}
        }
    }

    committed
}
