// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 规范化URL协议
///
/// 缺少协议前缀的地址默认补全为https
///
/// # 参数
///
/// * `raw` - 原始URL字符串
///
/// # 返回值
///
/// 带协议前缀的URL字符串
pub fn normalize_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// 判断链接是否指向同一站点
///
/// 相对链接一律视为站内链接
pub fn is_internal_link(base: &Url, href: &str) -> bool {
    if href.starts_with("http://") || href.starts_with("https://") {
        base.host_str()
            .map(|host| href.contains(host))
            .unwrap_or(false)
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scheme() {
        assert_eq!(normalize_scheme("example.com"), "https://example.com");
        assert_eq!(normalize_scheme("http://example.com"), "http://example.com");
        assert_eq!(
            normalize_scheme("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_is_internal_link() {
        let base = Url::parse("https://example.com/about").unwrap();
        assert!(is_internal_link(&base, "/contact"));
        assert!(is_internal_link(&base, "https://example.com/pricing"));
        assert!(!is_internal_link(&base, "https://other.com/page"));
    }
}
