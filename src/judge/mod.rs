//! External code-execution service integration.
//!
//! Submissions are graded by posting the source to a Piston-compatible
//! execution service, once per test case. The trait boundary exists so
//! grading logic can be exercised without a live service.

pub mod piston;

pub use piston::PistonClient;

use async_trait::async_trait;

use crate::error::AppResult;

/// One program execution against a single stdin payload.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub language: String,
    pub code: String,
    pub stdin: String,
}

/// What the execution service reported back.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i64>,
    /// Present when the program failed to compile; stdout/stderr then
    /// describe the compiler run, not the program.
    pub compile_error: Option<String>,
}

impl RunOutput {
    pub fn ran_cleanly(&self) -> bool {
        self.compile_error.is_none() && self.exit_code == Some(0)
    }
}

#[async_trait]
pub trait JudgeClient: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> AppResult<RunOutput>;
}

/// Grading comparison: line-wise, ignoring trailing whitespace on each
/// line and trailing blank lines. Leading whitespace is significant.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    normalize(actual) == normalize(expected)
}

fn normalize(s: &str) -> String {
    let mut lines: Vec<&str> = s.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_exact_on_visible_content() {
        assert!(outputs_match("42", "42"));
        assert!(!outputs_match("42", "43"));
        assert!(!outputs_match("4 2", "42"));
    }

    #[test]
    fn trailing_whitespace_per_line_is_ignored()  {
        assert!(outputs_match("1 2 \n3\t\n", "1 2\n3"));
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        assert!(outputs_match("hello\n\n\n", "hello"));
        assert!(outputs_match("hello", "hello\n"));
    }

    #[test]
    fn leading_whitespace_stays_significant() {
        assert!(!outputs_match("  indented", "indented"));
        assert!(!outputs_match("\nhello", "hello"));
    }

    #[test]
    fn run_output_success_requires_clean_exit_and_no_compile_error() {
        let ok = RunOutput {
            stdout: "42".into(),
            exit_code: Some(0),
            ..Default::default()
        };
        assert!(ok.ran_cleanly());

        let crashed = RunOutput {
            exit_code: Some(1),
            ..Default::default()
        };
        assert!(!crashed.ran_cleanly());

        let broken = RunOutput {
            exit_code: Some(0),
            compile_error: Some("syntax error".into()),
            ..Default::default()
        };
        assert!(!broken.ran_cleanly());
    }
}
