//! 扁平化区划表
//!
//! 层级数据集在加载时展开成三张表（省、市、区县），查询按表序进行。
//! 特别行政区额外记录其唯一的下级容器节点，区的查询直接在容器内完成。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::region::{
    is_cjk_ideograph, is_special_administrative_region, AdministrativeRegion, ExtraRegionData,
    RegionLevel, RegionNode,
};
use crate::{CatalogError, Result};

/// 内置的行政区划数据集
static BUILTIN_DATASET: &str = include_str!("../data/regions.json");

/// 特别行政区的下级容器
///
/// 特别行政区没有真正的市级，唯一的子节点同时充当“市”占位和区的容器。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SarDivision {
    pub province_code: String,
    pub city_code: String,
    pub areas: Vec<AdministrativeRegion>,
}

/// 行政区划参考表
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    provinces: Vec<AdministrativeRegion>,
    cities: Vec<AdministrativeRegion>,
    areas: Vec<AdministrativeRegion>,
    sar_divisions: HashMap<String, SarDivision>,
}

impl Catalog {
    /// 加载内置数据集
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// 从层级 JSON 加载
    pub fn from_json(json: &str) -> Result<Self> {
        let nodes: Vec<RegionNode> = serde_json::from_str(json)?;
        let catalog = Self::from_tree(&nodes)?;
        log::info!(
            "[Catalog] 已加载区划: 省级 {} 个, 市级 {} 个, 区县级 {} 个",
            catalog.provinces.len(),
            catalog.cities.len(),
            catalog.areas.len()
        );
        Ok(catalog)
    }

    /// 从磁盘上的层级 JSON 文件加载
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// 把层级节点展开为三张表
    pub fn from_tree(nodes: &[RegionNode]) -> Result<Self> {
        let mut catalog = Self::default();

        for province in nodes {
            catalog
                .provinces
                .push(AdministrativeRegion::province(&province.code, &province.name));

            for city in &province.children {
                catalog.cities.push(AdministrativeRegion::city(
                    &city.code,
                    &city.name,
                    &province.code,
                ));
                for area in &city.children {
                    catalog.areas.push(AdministrativeRegion::area(
                        &area.code,
                        &area.name,
                        &city.code,
                        &province.code,
                    ));
                }
            }

            if is_special_administrative_region(&province.name) {
                let container = province.children.first().ok_or_else(|| {
                    CatalogError::InvalidDataset(format!(
                        "特别行政区 {} 缺少下级节点",
                        province.name
                    ))
                })?;
                let areas = container
                    .children
                    .iter()
                    .map(|area| {
                        AdministrativeRegion::area(
                            &area.code,
                            &area.name,
                            &container.code,
                            &province.code,
                        )
                    })
                    .collect();
                catalog.sar_divisions.insert(
                    province.code.clone(),
                    SarDivision {
                        province_code: province.code.clone(),
                        city_code: container.code.clone(),
                        areas,
                    },
                );
            }
        }

        Ok(catalog)
    }

    /// 指定层级的全部记录（表序）
    pub fn records(&self, level: RegionLevel) -> &[AdministrativeRegion] {
        match level {
            RegionLevel::Province => &self.provinces,
            RegionLevel::City => &self.cities,
            RegionLevel::Area => &self.areas,
        }
    }

    /// 按编码精确查找
    pub fn find(&self, level: RegionLevel, code: &str) -> Option<&AdministrativeRegion> {
        self.records(level).iter().find(|r| r.code == code)
    }

    /// 名称以 `prefix` 开头的记录
    ///
    /// 前缀之后的剩余部分必须全是汉字。`province_code` / `city_code`
    /// 为 `Some` 时只保留上级编码一致的记录。
    pub fn prefix_matches(
        &self,
        level: RegionLevel,
        prefix: &str,
        province_code: Option<&str>,
        city_code: Option<&str>,
    ) -> Vec<&AdministrativeRegion> {
        self.records(level)
            .iter()
            .filter(|r| name_has_prefix(&r.name, prefix))
            .filter(|r| province_code.map_or(true, |code| r.province_code.as_deref() == Some(code)))
            .filter(|r| city_code.map_or(true, |code| r.city_code.as_deref() == Some(code)))
            .collect()
    }

    /// 特别行政区的下级容器
    pub fn sar_division(&self, province_code: &str) -> Option<&SarDivision> {
        self.sar_divisions.get(province_code)
    }

    /// 追加区划记录，返回实际新增的条数
    ///
    /// 缺少 `province` 时整批跳过（包括 `city` 和 `area`）。
    /// 同层级已存在的编码不会重复写入。
    pub fn extend(&mut self, extra: &ExtraRegionData) -> usize {
        let Some(provinces) = &extra.province else {
            if !extra.is_empty() {
                log::warn!("[Catalog] 追加数据缺少 province 字段，city/area 一并跳过");
            }
            return 0;
        };

        let mut added = 0;
        for record in provinces {
            added += push_unique(&mut self.provinces, record.to_region(RegionLevel::Province));
        }

        for record in extra.city.iter().flatten() {
            added += push_unique(&mut self.cities, record.to_region(RegionLevel::City));
        }

        for record in extra.area.iter().flatten() {
            let area = record.to_region(RegionLevel::Area);
            let division = area
                .province_code
                .as_deref()
                .and_then(|code| self.sar_divisions.get_mut(code));
            if let Some(division) = division {
                if area.city_code.as_deref() == Some(division.city_code.as_str())
                    && !division.areas.iter().any(|a| a.code == area.code)
                {
                    division.areas.push(area.clone());
                }
            }
            added += push_unique(&mut self.areas, area);
        }

        log::info!(
            "[Catalog] 追加区划 {} 条: 省级 {} 个, 市级 {} 个, 区县级 {} 个",
            added,
            self.provinces.len(),
            self.cities.len(),
            self.areas.len()
        );
        added
    }
}

fn push_unique(records: &mut Vec<AdministrativeRegion>, region: AdministrativeRegion) -> usize {
    if records.iter().any(|r| r.code == region.code) {
        log::debug!("[Catalog] 编码 {} 已存在，跳过 {}", region.code, region.name);
        return 0;
    }
    records.push(region);
    1
}

fn name_has_prefix(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .map_or(false, |rest| rest.chars().all(is_cjk_ideograph))
}
