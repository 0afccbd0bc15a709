use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Convert an interval in milliseconds to shorthand (e.g. `1h`, `1d`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_D => "1d",
            Self::MS_IN_W => "1w",
            _ => "unknown",
        }
    }
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    epoch_sec_to_utc(epoch_ms / 1000)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Invalid timestamps render as an empty string rather than aborting a report
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_ms_formatting() {
        // 2021-01-01T00:00:00Z
        assert_eq!(epoch_ms_to_utc(1_609_459_200_000), "2021-01-01");
    }

    #[test]
    fn test_interval_shorthand() {
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_D), "1d");
        assert_eq!(TimeUtils::interval_to_string(1234), "unknown");
    }
}
