use std::fmt::Write;

use crate::check::{Evaluation, PerfDatum, Status, StatusLevel};
use crate::error::{CollectionError, ConfigError};

/// Single plugin output line: `LEVEL[: message] | perfdata...`.
pub fn render(status: &Status, perf_data: &[PerfDatum]) -> String {
    let mut line = String::from(status.level.as_str());
    let message = status.message();
    if !message.is_empty() {
        let _ = write!(line, ": {message}");
    }
    if !perf_data.is_empty() {
        line.push_str(" |");
        for datum in perf_data {
            let _ = write!(line, " {datum}");
        }
    }
    line
}

pub fn render_evaluation(evaluation: &Evaluation) -> String {
    render(&evaluation.status, &evaluation.perf_data)
}

pub fn exit_code(evaluation: &Evaluation) -> u8 {
    evaluation.status.level.exit_code()
}

/// What the process prints on stdout and the code it exits with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub status_line: Option<String>,
    pub exit_code: u8,
}

/// A failed collection prints no status line; the error goes to stderr.
pub fn probe_outcome(result: &Result<Evaluation, CollectionError>) -> Outcome {
    match result {
        Ok(evaluation) => Outcome {
            status_line: Some(render_evaluation(evaluation)),
            exit_code: exit_code(evaluation),
        },
        Err(_) => Outcome {
            status_line: None,
            exit_code: StatusLevel::Unknown.exit_code(),
        },
    }
}

/// Unusable config is reported as UNKNOWN rather than run with defaults.
pub fn config_outcome(err: &ConfigError) -> Outcome {
    let status = Status::with_message(
        StatusLevel::Unknown,
        format!("invalid configuration in {}", err.path().display()),
    );
    Outcome {
        status_line: Some(render(&status, &[])),
        exit_code: status.level.exit_code(),
    }
}

pub fn panic_line(message: &str) -> String {
    let status = Status::with_message(
        StatusLevel::Unknown,
        format!("probe panicked: {}", message.lines().next().unwrap_or_default()),
    );
    render(&status, &[])
}
