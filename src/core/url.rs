use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DurationError, Result};

// 只锚定开头，后面跟什么都接受；协议可省略，省略时按https请求
static WATCH_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?youtube\.com/watch\?v=").expect("valid watch url regex")
});

/// 检查视频URL是否符合 watch 页前缀格式
pub fn validate_video_url(url: &str) -> Result<()> {
    if WATCH_URL.is_match(url) {
        Ok(())
    } else {
        Err(DurationError::InvalidUrl)
    }
}

/// 实际请求的地址，缺少协议时补上https
pub fn request_url(url: &str) -> Cow<'_, str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{}", url))
    }
}
