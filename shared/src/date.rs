//! 日期工具模块
//!
//! 服务端对 `date_of_accident` 的序列化格式并不固定（RFC 1123 / ISO 8601 / 纯日期），
//! 这里统一解析为 `NaiveDate`，并提供上传与展示两种格式化。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 事故日期的最早允许值
pub const MIN_ACCIDENT_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(d) => d,
    None => panic!("invalid MIN_ACCIDENT_DATE"),
};

/// 解析服务端返回的日期字符串
///
/// 依次尝试 RFC 3339、RFC 2822 (含 `GMT` 写法)、无时区的 ISO 日期时间和纯日期。
pub fn parse_wire_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// 上传用格式：当天 UTC 零点的 RFC 3339 字符串
pub fn to_wire_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00.000Z").to_string()
}

/// 展示用格式 `M/D/YYYY`，无法解析时原样返回
pub fn display_date(raw: &str) -> String {
    match parse_wire_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// 表单中 `<input type="date">` 的值 (`YYYY-MM-DD`)
pub fn parse_input_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_server_formats() {
        assert_eq!(
            parse_wire_date("Fri, 05 Jan 2024 00:00:00 GMT"),
            Some(ymd(2024, 1, 5))
        );
        assert_eq!(
            parse_wire_date("2024-01-05T00:00:00.000Z"),
            Some(ymd(2024, 1, 5))
        );
        assert_eq!(parse_wire_date("2024-01-05T13:45:00"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_wire_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_wire_date("yesterday"), None);
    }

    #[test]
    fn display_falls_back_to_raw() {
        assert_eq!(display_date("Fri, 05 Jan 2024 00:00:00 GMT"), "1/5/2024");
        assert_eq!(display_date("n/a"), "n/a");
    }

    #[test]
    fn wire_format_is_midnight_utc() {
        assert_eq!(to_wire_date(ymd(2023, 12, 31)), "2023-12-31T00:00:00.000Z");
        assert_eq!(
            parse_wire_date(&to_wire_date(ymd(2023, 12, 31))),
            Some(ymd(2023, 12, 31))
        );
    }

    #[test]
    fn input_date() {
        assert_eq!(parse_input_date("2020-02-29"), Some(ymd(2020, 2, 29)));
        assert_eq!(parse_input_date(""), None);
    }
}
