//! 地址分段与排序

/// 按优先级前置含有这些字的片段
const ORDER_KEYWORDS: [&str; 5] = ["省", "市", "区", "县", "镇"];

/// 按空格切分，丢弃空片段和纯数字片段
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|t| !t.is_empty() && !t.bytes().all(|b| b.is_ascii_digit()))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// 依次把首个含“省/市/区/县/镇”的片段提到前面，其余片段保持原顺序
pub fn order_tokens(mut tokens: Vec<String>) -> Vec<String> {
    let mut ordered = Vec::with_capacity(tokens.len());

    for keyword in ORDER_KEYWORDS {
        if let Some(index) = tokens.iter().position(|t| t.contains(keyword)) {
            ordered.push(tokens.remove(index));
        }
    }

    ordered.extend(tokens);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_digits_and_blanks() {
        let tokens = split_tokens(" 张三  100080 北京市朝阳区 88号 ");
        assert_eq!(tokens, vec!["张三", "北京市朝阳区", "88号"]);
    }

    #[test]
    fn test_order_moves_one_token_per_keyword() {
        let tokens = vec![
            "王晓光".to_string(),
            "万州区".to_string(),
            "太平镇".to_string(),
            "渝北区".to_string(),
            "重庆市".to_string(),
        ];
        assert_eq!(
            order_tokens(tokens),
            vec!["重庆市", "万州区", "太平镇", "王晓光", "渝北区"]
        );
    }

    #[test]
    fn test_order_without_keywords_is_stable() {
        let tokens = vec!["甲".to_string(), "乙".to_string()];
        assert_eq!(order_tokens(tokens), vec!["甲", "乙"]);
    }
}
