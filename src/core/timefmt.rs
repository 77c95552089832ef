/// 秒数格式化为 HH:MM:SS，小时不设上限
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// 毫秒向下取整到秒后格式化
pub fn format_duration_ms(duration_ms: u64) -> String {
    format_hms(duration_ms / 1000)
}
