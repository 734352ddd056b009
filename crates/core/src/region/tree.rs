//! 按表序向下查找
//!
//! 对每条记录，从全名到前 2 个字依次尝试是否为片段开头，首个命中即采用，不检查唯一性。

use addrparse_catalog::{AdministrativeRegion, Catalog, RegionLevel};

use super::{
    char_prefix, leftover, lookup_parent, match_sar_area, sar_city, Resolution, RegionStrategy,
    ResolvedRegion,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeStrategy;

impl RegionStrategy for TreeStrategy {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn resolve(&self, fragment: &str, resolved: &ResolvedRegion, catalog: &Catalog) -> Resolution {
        let mut region = resolved.clone();
        let mut fragment = fragment.to_string();

        if region.province.is_none() {
            if let Some((province, matched)) =
                first_leading(catalog.records(RegionLevel::Province), &fragment, |_| true)
            {
                log::debug!("[Region] 表序 {} -> 省 {}", matched, province.name);
                fragment = fragment.replace(&matched, "");
                region.province = Some(province.clone());
            }
        }

        if region.city.is_none() {
            if let Some(sar) = region.sar_province() {
                region.city = sar_city(catalog, sar);
            } else if let Some(province_code) = region.province_code() {
                let found = first_leading(catalog.records(RegionLevel::City), &fragment, |c| {
                    c.province_code.as_deref() == Some(province_code.as_str())
                });
                if let Some((city, matched)) = found {
                    log::debug!("[Region] 表序 {} -> 市 {}", matched, city.name);
                    fragment = fragment.replace(&matched, "");
                    region.city = Some(city.clone());
                }
            } else if let Some((city, matched)) =
                first_leading(catalog.records(RegionLevel::City), &fragment, |_| true)
            {
                log::debug!("[Region] 表序 {} -> 市 {}", matched, city.name);
                fragment = fragment.replacen(&matched, "", 1);
                region.province =
                    lookup_parent(catalog, RegionLevel::Province, city.province_code.as_deref());
                region.city = Some(city.clone());
            }
        }

        if region.area.is_none() {
            let matched_area = match region.sar_province() {
                Some(sar) => match_sar_area(catalog, sar, region.city.as_ref(), &fragment),
                None => {
                    let province_code = region.province_code();
                    let city_code = region.city_code();
                    let constrained = province_code.is_some() || city_code.is_some();
                    // 省或市任一吻合即可
                    first_leading(catalog.records(RegionLevel::Area), &fragment, |a| {
                        !constrained
                            || (province_code.is_some() && a.province_code == province_code)
                            || (city_code.is_some() && a.city_code == city_code)
                    })
                    .map(|(area, matched)| (area.clone(), matched))
                }
            };

            if let Some((area, matched)) = matched_area {
                log::debug!("[Region] 表序 {} -> 区 {}", matched, area.name);
                fragment = fragment.replacen(&matched, "", 1);
                if region.city.is_none() {
                    region.city = lookup_parent(catalog, RegionLevel::City, area.city_code.as_deref());
                }
                if region.province.is_none() {
                    region.province =
                        lookup_parent(catalog, RegionLevel::Province, area.province_code.as_deref());
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

/// 表序中第一条名称前缀位于片段开头的记录
fn first_leading<'a>(
    records: &'a [AdministrativeRegion],
    fragment: &str,
    accept: impl Fn(&AdministrativeRegion) -> bool,
) -> Option<(&'a AdministrativeRegion, String)> {
    records
        .iter()
        .filter(|&r| accept(r))
        .find_map(|r| leading_prefix(fragment, &r.name).map(|matched| (r, matched)))
}

/// 记录名称从长到短（至少 2 个字）的前缀中，第一个位于片段开头的
fn leading_prefix(fragment: &str, name: &str) -> Option<String> {
    (2..=name.chars().count())
        .rev()
        .map(|len| char_prefix(name, len))
        .find(|prefix| fragment.starts_with(prefix))
        .map(str::to_string)
}
