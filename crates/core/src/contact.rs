//! 手机号与邮编提取
//!
//! 两者都只取第一处匹配，匹配到的文本替换为一个空格。

use once_cell::sync::Lazy;
use regex::Regex;

static DASHED_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{3})-([0-9]{4})-([0-9]{4})").expect("valid regex"));
static SPACED_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{3}) ([0-9]{4}) ([0-9]{4})").expect("valid regex"));
static WIDE_SPACED_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4}) ([0-9]{4}) ([0-9]{4})").expect("valid regex"));

static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:0|\+?86-?|17951)?1[3-9][0-9]{9}").expect("valid regex"));
static COUNTRY_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?86-?").expect("valid regex"));

static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[1-9][0-9]{5}").expect("valid regex"));

/// 提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// 去掉匹配内容后的文本
    pub remaining: String,
    /// 匹配到的值，未匹配时为空
    pub value: String,
}

impl Extraction {
    fn unmatched(text: String) -> Self {
        Self {
            remaining: text,
            value: String::new(),
        }
    }
}

/// 提取手机号
///
/// 先把 3-4-4 / 4-4-4 分组的号码拼成连续数字；返回值去掉 `+86` / `86-` 前缀。
pub fn extract_phone(text: &str) -> Extraction {
    let joined = DASHED_PHONE_RE.replace_all(text, "${1}${2}${3}");
    let joined = SPACED_PHONE_RE.replace_all(&joined, "${1}${2}${3}");
    let joined = WIDE_SPACED_PHONE_RE
        .replace_all(&joined, "${1}${2}${3}")
        .into_owned();

    let Some(found) = MOBILE_RE.find(&joined) else {
        return Extraction::unmatched(joined);
    };

    let value = COUNTRY_CODE_RE.replace(found.as_str(), "").into_owned();
    let remaining = splice_space(&joined, found.start(), found.end());
    Extraction { remaining, value }
}

/// 提取邮编：首个不以 0 开头、后面不再紧跟数字的 6 位数字
pub fn extract_postal_code(text: &str) -> Extraction {
    let bytes = text.as_bytes();
    let mut start = 0;

    while let Some(found) = POSTAL_CODE_RE.find_at(text, start) {
        let followed_by_digit = bytes.get(found.end()).map_or(false, u8::is_ascii_digit);
        if !followed_by_digit {
            return Extraction {
                remaining: splice_space(text, found.start(), found.end()),
                value: found.as_str().to_string(),
            };
        }
        // 数字都是单字节，往后挪一个字节不会落在字符中间
        start = found.start() + 1;
    }

    Extraction::unmatched(text.to_string())
}

fn splice_space(text: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push(' ');
    out.push_str(&text[end..]);
    out
}
