//! 地址文本清洗
//!
//! 依次执行：换行/制表符转空格、去除标签词、重庆“市县”修正、
//! 标点转空格（保留括号）、合并连续空格、直辖市叠词去重。

use once_cell::sync::Lazy;
use regex::Regex;

/// 需要去掉的标签词，顺序有意义（长词在前的会先被替换）
const STOP_WORDS: [&str; 18] = [
    "详细地址",
    "收货地址",
    "收件地址",
    "地址",
    "所在地区",
    "姓名",
    "收货人",
    "收件人",
    "联系人",
    "收",
    "邮编",
    "联系电话",
    "电话",
    "联系人手机号码",
    "手机号码",
    "手机号",
    "自治区直辖县级行政区划",
    "省直辖县级行政区划",
];

const MUNICIPALITIES: [&str; 4] = ["北京", "上海", "天津", "重庆"];

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|[\r\n\t]").expect("valid regex"));

// 括号不在其中，括号里的内容可能是门牌或房号
static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[`~!@#$^&*=|{}':;,.<>/?！￥…—【】；："。，、？\[\]]"#).expect("valid regex")
});

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// 清洗原始地址文本
///
/// `extra_stop_words` 按字面匹配，追加在内置标签词之后处理。
pub fn clean_address(raw: &str, extra_stop_words: &[String]) -> String {
    let mut address = LINE_BREAK_RE.replace_all(raw, " ").into_owned();

    let words = STOP_WORDS
        .iter()
        .copied()
        .chain(extra_stop_words.iter().map(String::as_str));
    for word in words.filter(|w| !w.is_empty()) {
        address = address.replace(word, " ");
    }

    address = address.replace("重庆市县", "重庆市");
    address = PUNCTUATION_RE.replace_all(&address, " ").into_owned();
    address = MULTI_SPACE_RE.replace_all(&address, " ").into_owned();

    for city in MUNICIPALITIES {
        address = address.replacen(&city.repeat(2), city, 1);
    }

    address
}
