use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusLevel {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl StatusLevel {
    /// Process exit code understood by the monitoring supervisor.
    pub fn exit_code(self) -> u8 {
        match self {
            StatusLevel::Ok => 0,
            StatusLevel::Warning => 1,
            StatusLevel::Critical => 2,
            StatusLevel::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusLevel::Ok => "OK",
            StatusLevel::Warning => "WARNING",
            StatusLevel::Critical => "CRITICAL",
            StatusLevel::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: Option<String>,
}

impl Status {
    pub fn new(level: StatusLevel) -> Self {
        Status {
            level,
            message: None,
        }
    }

    pub fn with_message(level: StatusLevel, message: impl Into<String>) -> Self {
        Status {
            level,
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_plugin_convention() {
        assert_eq!(StatusLevel::Ok.exit_code(), 0);
        assert_eq!(StatusLevel::Warning.exit_code(), 1);
        assert_eq!(StatusLevel::Critical.exit_code(), 2);
        assert_eq!(StatusLevel::Unknown.exit_code(), 3);
    }

    #[test]
    fn empty_message_reads_as_empty_string() {
        assert_eq!(Status::new(StatusLevel::Ok).message(), "");
        assert_eq!(
            Status::with_message(StatusLevel::Unknown, "Unknown state").message(),
            "Unknown state"
        );
    }
}
