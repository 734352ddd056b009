//! 收件人姓名识别
//!
//! 从去掉省市区之后的剩余片段里挑出最像姓名的一个：
//! 含称呼的直接采用；含机构/街道关键词的排除；
//! 其余按长度和首字是否为常见姓氏判断。都不满足时退回最短片段，
//! 但以路、街、号等结尾的片段是街道门牌，不作为退回结果。

use std::collections::HashSet;

use addrparse_catalog::is_cjk_ideograph;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NameHeuristicsConfig {
    #[allow(dead_code)]
    version: String,
    honorifics: Vec<String>,
    excluded_keywords: Vec<String>,
    street_suffixes: Vec<String>,
    default_max_length: usize,
}

static CONFIG: Lazy<NameHeuristicsConfig> = Lazy::new(|| {
    let json_str = include_str!("../data/name_heuristics.json");
    serde_json::from_str(json_str).expect("Failed to parse name_heuristics.json")
});

static SURNAMES: Lazy<HashSet<char>> = Lazy::new(|| {
    include_str!("../data/surnames.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.chars().next())
        .collect()
});

// 成对括号，例如“(公司)”或“（3栋）”
static PARENTHETICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[（(][^）)]*[）)]").expect("valid regex"));

/// 配置文件中的默认姓名最大长度
pub fn default_max_length() -> usize {
    CONFIG.default_max_length
}

/// 姓名识别器
#[derive(Debug, Clone, Copy)]
pub struct NameExtractor {
    max_length: usize,
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(default_max_length())
    }
}

impl NameExtractor {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// 单个片段是否像姓名
    pub fn is_name(&self, fragment: &str) -> bool {
        if !fragment.chars().any(is_cjk_ideograph) {
            return false;
        }

        if CONFIG.honorifics.iter().any(|h| fragment.contains(h.as_str())) {
            return true;
        }

        if CONFIG
            .excluded_keywords
            .iter()
            .any(|k| fragment.contains(k.as_str()))
        {
            return false;
        }

        let len = fragment.chars().count();
        len > 1
            && len <= self.max_length
            && fragment.chars().next().map_or(false, |c| SURNAMES.contains(&c))
    }

    /// 从候选片段中选出姓名
    pub fn pick(&self, candidates: &[String]) -> Option<String> {
        let mut sorted: Vec<&String> = candidates.iter().filter(|c| !c.is_empty()).collect();
        // 稳定排序，等长片段保持原顺序
        sorted.sort_by_key(|c| c.chars().count());

        if let Some(name) = sorted
            .iter()
            .find(|c| !has_parenthetical(c) && self.is_name(c))
        {
            return Some((*name).clone());
        }

        let shortest = sorted.first()?;
        let fallback = shortest.chars().count() <= self.max_length
            && shortest.chars().any(is_cjk_ideograph)
            && !has_parenthetical(shortest)
            && !is_street(shortest);
        if fallback {
            log::debug!("[Name] 未命中规则，退回最短片段 {}", shortest);
        }
        fallback.then(|| (*shortest).clone())
    }
}

fn has_parenthetical(text: &str) -> bool {
    PARENTHETICAL_RE.is_match(text)
}

fn is_street(text: &str) -> bool {
    CONFIG
        .street_suffixes
        .iter()
        .any(|suffix| text.ends_with(suffix.as_str()))
}
