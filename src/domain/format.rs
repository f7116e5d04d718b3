// Display formatting and threshold classification for gauges

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Convert a byte count to the largest binary unit, rounded to two decimals
/// with trailing zeros dropped: `0 B`, `1.5 KB`, `1 MB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(&format!("{:.2}", value)), BYTE_UNITS[unit])
}

fn trim_decimals(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

/// Fixed-precision number, e.g. `format_fixed(2.345, 2) == "2.35"`.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

/// Percentage with one decimal and a `%` suffix.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// CSS width for a progress bar. Integral values render without decimals so
/// 85.0 becomes `85%`.
pub fn bar_width(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{}%", percent as i64)
    } else {
        format!("{}%", percent)
    }
}

/// Gauge colour band for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeStatus {
    Normal,
    Warning,
    Danger,
}

impl GaugeStatus {
    pub const WARNING_ABOVE: f64 = 60.0;
    pub const DANGER_ABOVE: f64 = 80.0;

    pub fn from_percent(value: f64) -> Self {
        if value > Self::DANGER_ABOVE {
            GaugeStatus::Danger
        } else if value > Self::WARNING_ABOVE {
            GaugeStatus::Warning
        } else {
            GaugeStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GaugeStatus::Normal => "normal",
            GaugeStatus::Warning => "warning",
            GaugeStatus::Danger => "danger",
        }
    }

    /// Bar fill colour.
    pub fn color(&self) -> &'static str {
        match self {
            GaugeStatus::Normal => "#2e5a8f",
            GaugeStatus::Warning => "#f59e0b",
            GaugeStatus::Danger => "#ef4444",
        }
    }

    /// Badge class used by the storage page.
    pub fn badge_class(&self) -> &'static str {
        match self {
            GaugeStatus::Normal => "status-active",
            GaugeStatus::Warning => "status-warning",
            GaugeStatus::Danger => "status-inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1 MB");
        assert_eq!(format_bytes(1288490189), "1.2 GB");
        assert_eq!(format_bytes(5 * 1024u64.pow(4)), "5 TB");
        // TB is the largest unit
        assert_eq!(format_bytes(2048 * 1024u64.pow(4)), "2048 TB");
    }

    #[test]
    fn test_format_fixed_and_percent() {
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(2400.456, 2), "2400.46");
        assert_eq!(format_percent(85.0), "85.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(85.0), "85%");
        assert_eq!(bar_width(45.5), "45.5%");
        assert_eq!(bar_width(0.0), "0%");
    }

    #[test]
    fn test_gauge_status_boundaries() {
        assert_eq!(GaugeStatus::from_percent(0.0), GaugeStatus::Normal);
        assert_eq!(GaugeStatus::from_percent(60.0), GaugeStatus::Normal);
        assert_eq!(GaugeStatus::from_percent(60.01), GaugeStatus::Warning);
        assert_eq!(GaugeStatus::from_percent(80.0), GaugeStatus::Warning);
        assert_eq!(GaugeStatus::from_percent(80.01), GaugeStatus::Danger);
        assert_eq!(GaugeStatus::from_percent(100.0), GaugeStatus::Danger);
    }
}
