//! 地址解析流程
//!
//! 清洗 → 提取手机号/邮编 → 分段排序 → 逐段识别省市区 → 识别姓名 → 直辖市修正。

use std::collections::HashSet;
use std::sync::Arc;

use addrparse_catalog::{AdministrativeRegion, Catalog, RegionStore};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clean::clean_address;
use crate::contact::{extract_phone, extract_postal_code};
use crate::name::NameExtractor;
use crate::options::ParseOptions;
use crate::region::ResolvedRegion;
use crate::tokenize::{order_tokens, split_tokens};
use crate::Result;

/// 没有真正市级的直辖省份，市级名称为这些占位词
const GENERIC_CITY_NAMES: [&str; 4] = ["市辖区", "区", "县", "镇"];

/// 县级区划挂在“县”下面的直辖市
const COUNTY_MUNICIPALITY: &str = "重庆市";
const COUNTY_AREA_CODE_PREFIX: &str = "5002";
const COUNTY_CITY_NAME: &str = "县";

/// 解析结果，未识别的字段为空串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub phone: String,
    pub postal_code: String,
    pub province: String,
    pub city: String,
    pub area: String,
    pub detail: String,
    pub name: String,
    pub province_code: String,
    pub city_code: String,
    pub area_code: String,
}

/// 地址解析器
///
/// 持有区划数据的共享存储；每次解析取一份快照，解析过程中不受并发追加影响。
#[derive(Debug, Clone)]
pub struct AddressParser {
    store: Arc<RegionStore>,
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new(RegionStore::global())
    }
}

impl AddressParser {
    pub fn new(store: Arc<RegionStore>) -> Self {
        Self { store }
    }

    /// 使用自定义层级数据集
    pub fn from_dataset_json(json: &str) -> Result<Self> {
        let catalog = Catalog::from_json(json)?;
        Ok(Self::new(Arc::new(RegionStore::new(catalog))))
    }

    pub fn store(&self) -> &Arc<RegionStore> {
        &self.store
    }

    /// 解析一条地址，输入为空时返回 `None`
    pub fn parse(&self, address: &str, options: &ParseOptions) -> Option<ParseResult> {
        if address.is_empty() {
            return None;
        }

        if let Some(extra) = &options.extra_region_data {
            self.store.extend(extra);
        }
        let catalog = self.store.snapshot();

        let cleaned = clean_address(address, &options.extra_stop_words);
        let phone = extract_phone(&cleaned);
        let postal = extract_postal_code(&phone.remaining);

        let tokens = order_tokens(split_tokens(&postal.remaining));
        log::debug!("[Parser] 分段: {:?}", tokens);

        let resolver = options.strategy.resolver();
        let mut region = ResolvedRegion::default();
        let mut detail = Vec::new();

        for token in tokens {
            if region.is_complete() {
                detail.push(token);
                continue;
            }
            let resolution = resolver.resolve(&token, &region, &catalog);
            region = resolution.region;
            detail.extend(resolution.detail);
        }

        let mut detail = dedupe(strip_region_names(detail, &region));

        let name = NameExtractor::new(options.name_max_length)
            .pick(&detail)
            .unwrap_or_default();
        if !name.is_empty() {
            if let Some(index) = detail.iter().position(|d| *d == name) {
                detail.remove(index);
            }
        }

        let city = display_city(&region, &mut detail);

        let result = ParseResult {
            phone: phone.value,
            postal_code: postal.value,
            province: name_of(&region.province),
            city,
            area: name_of(&region.area),
            detail: detail.concat(),
            name,
            province_code: code_of(&region.province),
            city_code: code_of(&region.city),
            area_code: code_of(&region.area),
        };
        log::debug!(
            "[Parser] 使用 {} 识别: {} {} {}",
            resolver.name(),
            result.province,
            result.city,
            result.area
        );
        Some(result)
    }
}

/// 解析结果转 JSON，`None` 对应空对象
pub fn to_json(result: Option<&ParseResult>) -> serde_json::Result<Value> {
    match result {
        Some(result) => serde_json::to_value(result),
        None => Ok(Value::Object(serde_json::Map::new())),
    }
}

/// 从每个详细地址片段中再去掉一次已识别的省市区名称
fn strip_region_names(detail: Vec<String>, region: &ResolvedRegion) -> Vec<String> {
    let names = region.names();
    if names.is_empty() {
        return detail;
    }

    let pattern = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&pattern) {
        Ok(re) => detail
            .into_iter()
            .map(|d| re.replace_all(&d, "").into_owned())
            .collect(),
        Err(err) => {
            log::warn!("[Parser] 区划名称正则无效: {}", err);
            detail
        }
    }
}

/// 去重，保留首次出现的顺序
fn dedupe(detail: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    detail
        .into_iter()
        .filter(|d| seen.insert(d.clone()))
        .collect()
}

/// 展示用的市级名称
fn display_city(region: &ResolvedRegion, detail: &mut [String]) -> String {
    let province = name_of(&region.province);
    let city = name_of(&region.city);

    let county_area = region
        .area
        .as_ref()
        .map_or(false, |a| a.code.starts_with(COUNTY_AREA_CODE_PREFIX));
    if province == COUNTY_MUNICIPALITY && county_area {
        for item in detail.iter_mut() {
            if let Some(rest) = item.strip_prefix(COUNTY_CITY_NAME) {
                *item = rest.to_string();
            }
        }
        return COUNTY_CITY_NAME.to_string();
    }

    if GENERIC_CITY_NAMES.contains(&city.as_str()) {
        return province;
    }
    city
}

fn name_of(region: &Option<AdministrativeRegion>) -> String {
    region.as_ref().map(|r| r.name.clone()).unwrap_or_default()
}

fn code_of(region: &Option<AdministrativeRegion>) -> String {
    region.as_ref().map(|r| r.code.clone()).unwrap_or_default()
}
