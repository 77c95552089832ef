use log::{debug, info, warn};

use crate::core::extract::extract_duration_ms;
use crate::core::page::{HttpPageSource, PageSource};
use crate::core::timefmt::format_duration_ms;
use crate::core::url::{request_url, validate_video_url};
use crate::error::{DurationError, Result};

/// 视频时长获取器：校验URL、请求页面、提取并格式化时长
pub struct DurationFetcher<S> {
    source: S,
}

impl DurationFetcher<HttpPageSource> {
    /// 使用默认HTTP客户端
    pub fn http() -> Self {
        Self::new(HttpPageSource::new())
    }
}

impl<S: PageSource> DurationFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 获取视频时长，返回 HH:MM:SS
    pub fn fetch_duration(&self, video_url: &str) -> Result<String> {
        validate_video_url(video_url)?;

        let url = request_url(video_url);
        info!("请求视频页面: {}", url);
        let page = self.source.get(&url)?;
        if page.status != 200 {
            warn!("页面返回状态码 {}: {}", page.status, url);
            return Err(DurationError::RetrievalFailed {
                status: page.status,
            });
        }

        let duration_ms = extract_duration_ms(&page.body).ok_or(DurationError::DurationNotFound)?;
        debug!("approxDurationMs = {}", duration_ms);

        Ok(format_duration_ms(duration_ms))
    }
}

/// 用默认HTTP客户端获取一次视频时长
pub fn fetch_duration(video_url: &str) -> Result<String> {
    DurationFetcher::http().fetch_duration(video_url)
}
