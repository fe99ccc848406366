use std::fmt;

use crate::format::format_plugin_number;

/// One reportable measurement in the plugin performance-data section.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfDatum {
    pub label: String,
    pub unit: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub warn: Option<f64>,
    pub crit: Option<f64>,
}

impl PerfDatum {
    pub fn percent(label: &str, value: f64) -> Self {
        PerfDatum {
            label: label.to_string(),
            unit: "%".to_string(),
            value,
            min: 0.0,
            max: 100.0,
            warn: None,
            crit: None,
        }
    }

    pub fn with_thresholds(mut self, warn: f64, crit: f64) -> Self {
        self.warn = Some(warn);
        self.crit = Some(crit);
        self
    }
}

fn quoted_label(label: &str) -> String {
    if label.contains([' ', '=', '\'']) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(format_plugin_number).unwrap_or_default()
}

impl fmt::Display for PerfDatum {
    /// `label=value unit;warn;crit;min;max`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}{};{};{};{};{}",
            quoted_label(&self.label),
            format_plugin_number(self.value),
            self.unit,
            optional(self.warn),
            optional(self.crit),
            format_plugin_number(self.min),
            format_plugin_number(self.max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_without_thresholds() {
        let datum = PerfDatum::percent("MEM USED", 42.5);
        assert_eq!(datum.to_string(), "'MEM USED'=42.5%;;;0;100");
    }

    #[test]
    fn renders_with_thresholds() {
        let datum = PerfDatum::percent("TOT FREE", 50.0).with_thresholds(10.0, 5.0);
        assert_eq!(datum.to_string(), "'TOT FREE'=50%;10;5;0;100");
    }

    #[test]
    fn plain_label_is_not_quoted() {
        let datum = PerfDatum::percent("free", 1.25);
        assert_eq!(datum.to_string(), "free=1.25%;;;0;100");
    }

    #[test]
    fn embedded_quote_is_doubled() {
        let datum = PerfDatum::percent("it's", 0.0);
        assert_eq!(datum.to_string(), "'it''s'=0%;;;0;100");
    }

    #[test]
    fn undetermined_value_renders_u() {
        let datum = PerfDatum::percent("TOT FREE", f64::NAN).with_thresholds(10.0, 5.0);
        assert_eq!(datum.to_string(), "'TOT FREE'=U%;10;5;0;100");
    }
}
