//! 通过视频页面中的 `approxDurationMs` 获取YouTube视频时长。
//!
//! ```no_run
//! let duration = yt_duration::fetch_duration("https://www.youtube.com/watch?v=dQw4w9WgXcQ")?;
//! println!("{}", duration);
//! # Ok::<(), yt_duration::DurationError>(())
//! ```

pub mod cli;
pub mod controller;
pub mod core;
pub mod error;
pub mod logging;
pub mod processing;

pub use controller::{DurationController, ReportMode};
pub use error::{DurationError, ErrorCategory, Result};
pub use processing::duration_fetcher::{fetch_duration, DurationFetcher};
