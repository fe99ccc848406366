pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Number as it appears in plugin performance data: shortest round-trip
/// decimal, `U` when the value is undetermined.
pub fn format_plugin_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "U".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_pick_largest_unit() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GB");
    }

    #[test]
    fn plugin_numbers_are_shortest_form() {
        assert_eq!(format_plugin_number(50.0), "50");
        assert_eq!(format_plugin_number(12.5), "12.5");
        assert_eq!(format_plugin_number(-1.0), "-1");
        assert_eq!(format_plugin_number(f64::NAN), "U");
        assert_eq!(format_plugin_number(f64::INFINITY), "U");
    }
}
