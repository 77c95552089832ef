use std::io::Write;

use log::{error, info};

use crate::core::page::PageSource;
use crate::error::Result;
use crate::processing::duration_fetcher::DurationFetcher;

/// 结果报告方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// 打印 "Video Duration: ..." 或 "Error: ..."
    Soft,
    /// 不打印结果行，只写日志
    Silent,
}

/// 控制器：在获取器外面包一层报告逻辑
pub struct DurationController<S> {
    fetcher: DurationFetcher<S>,
    mode: ReportMode,
}

impl<S: PageSource> DurationController<S> {
    pub fn new(fetcher: DurationFetcher<S>, mode: ReportMode) -> Self {
        Self { fetcher, mode }
    }

    /// 获取时长并报告结果，失败时返回None
    pub fn run(&self, video_url: &str) -> Option<String> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(video_url, &mut out)
    }

    /// 同 `run`，结果行写到指定输出
    pub fn run_with_output<W: Write>(&self, video_url: &str, out: &mut W) -> Option<String> {
        match self.fetcher.fetch_duration(video_url) {
            Ok(duration) => {
                info!("视频时长: {}", duration);
                self.report(out, &format!("Video Duration: {}", duration));
                Some(duration)
            }
            Err(e) => {
                error!("获取视频时长失败 ({:?}): {}", e.category(), e);
                self.report(out, &format!("Error: {}", e));
                None
            }
        }
    }

    /// 不做报告，直接返回类型化的错误
    pub fn run_strict(&self, video_url: &str) -> Result<String> {
        self.fetcher.fetch_duration(video_url)
    }

    fn report<W: Write>(&self, out: &mut W, line: &str) {
        if self.mode == ReportMode::Soft {
            if let Err(e) = writeln!(out, "{}", line) {
                error!("无法输出结果: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::processing::duration_fetcher::tests::StaticPage;

    const URL: &str = "https://youtube.com/watch?v=abc";
    const PAGE: &str = r#"<html><script>{"approxDurationMs":"725000"}</script></html>"#;

    fn run(page: &StaticPage, mode: ReportMode, url: &str) -> (Option<String>, String) {
        let controller = DurationController::new(DurationFetcher::new(page), mode);
        let mut out = Vec::new();
        let result = controller.run_with_output(url, &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_soft_success_prints_duration() {
        let page = StaticPage::new(200, PAGE);
        let (result, out) = run(&page, ReportMode::Soft, URL);
        assert_eq!(result.as_deref(), Some("00:12:05"));
        assert_eq!(out, "Video Duration: 00:12:05\n");
    }

    #[test]
    fn test_soft_failure_prints_error_and_returns_none() {
        let page = StaticPage::new(200, PAGE);
        let (result, out) = run(&page, ReportMode::Soft, "https://example.com/");
        assert_eq!(result, None);
        assert_eq!(out, "Error: Invalid YouTube URL\n");

        let page = StaticPage::new(200, "<html></html>");
        let (result, out) = run(&page, ReportMode::Soft, URL);
        assert_eq!(result, None);
        assert_eq!(out, "Error: Duration not found\n");

        let page = StaticPage::new(404, PAGE);
        let (result, out) = run(&page, ReportMode::Soft, URL);
        assert_eq!(result, None);
        assert_eq!(out, "Error: Failed to retrieve the YouTube page\n");
    }

    #[test]
    fn test_silent_mode_prints_nothing() {
        let page = StaticPage::new(200, PAGE);
        let (result, out) = run(&page, ReportMode::Silent, URL);
        assert_eq!(result.as_deref(), Some("00:12:05"));
        assert!(out.is_empty());

        let (result, out) = run(&page, ReportMode::Silent, "bogus");
        assert_eq!(result, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_strict_returns_category() {
        let page = StaticPage::new(500, PAGE);
        let controller = DurationController::new(DurationFetcher::new(&page), ReportMode::Soft);
        let err = controller.run_strict(URL).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::RetrievalFailed);
    }
}
