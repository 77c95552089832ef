use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

/// 时长标记，用作正则匹配前的快速过滤
pub const DURATION_MARKER: &str = "approxDurationMs";

static DURATION_MS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""approxDurationMs":"(\d+)""#).expect("valid duration regex")
});

static SCRIPT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script").expect("valid script selector"));

/// 从页面HTML的script元素中提取时长（毫秒）
///
/// 按文档顺序扫描。包含标记但正则不匹配的script不会中止扫描，
/// 超出u64范围的数字也视为不匹配。
pub fn extract_duration_ms(html: &str) -> Option<u64> {
    let document = Html::parse_document(html);

    document
        .select(&SCRIPT)
        .map(|script| script.text().collect::<String>())
        .filter(|content| content.contains(DURATION_MARKER))
        .find_map(|content| match_duration_ms(&content))
}

/// 在一段脚本文本里查找 "approxDurationMs":"<digits>"
pub fn match_duration_ms(content: &str) -> Option<u64> {
    DURATION_MS
        .captures(content)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}
