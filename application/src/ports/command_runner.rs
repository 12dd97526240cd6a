//! Command Runner port
//!
//! Defines the interface for the external command-execution collaborator.
//! The gateway hands over a fully assembled argv plus execution context and
//! gets back whatever the process produced; argument-string assembly and
//! process-launch mechanics are entirely the adapter's concern, and no
//! shell interpreter is ever involved.

use async_trait::async_trait;
use std::collections::HashMap;

/// One subprocess execution request
#[derive(Debug, Clone, PartialEq)]
pub struct ExecRequest {
    /// Full argument vector, program first
    pub argv: Vec<String>,
    /// Environment variables merged over the inherited environment
    pub env: HashMap<String, String>,
    /// Working directory, if any
    pub working_dir: Option<String>,
    /// Data written to the process stdin, if any
    pub stdin_data: Option<String>,
    /// Hard execution timeout in seconds
    pub timeout_secs: u64,
}

impl ExecRequest {
    pub fn new(argv: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            env: HashMap::new(),
            working_dir: None,
            stdin_data: None,
            timeout_secs: 30,
        }
    }
}

/// What a finished (or failed-to-start, or killed) process produced
///
/// Runners never raise: spawn failures and timeouts are reported as exit
/// code -1 with a descriptive stderr text, so every invocation yields a
/// formattable outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecOutcome {
    /// Process completion code; -1 for timeout or spawn failure
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ExecOutcome {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self { exit_code: 0, stdout: stdout.into(), stderr: String::new() }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self { exit_code, stdout: String::new(), stderr: stderr.into() }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Port for subprocess execution
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CommandRunnerPort: Send + Sync {
    /// Execute one request and report whatever happened.
    async fn run(&self, request: ExecRequest) -> ExecOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_outcome_success() {
        let outcome = ExecOutcome::success("hello\n");
        assert!(outcome.is_success());
        assert_eq!(outcome.stdout, "hello\n");
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_exec_outcome_failure() {
        let outcome = ExecOutcome::failure(1, "boom");
        assert!(!outcome.is_success());
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.stderr, "boom");
    }

    #[test]
    fn test_exec_request_defaults() {
        let request = ExecRequest::new(["echo", "hi"]);
        assert_eq!(request.argv, ["echo", "hi"]);
        assert!(request.env.is_empty());
        assert!(request.working_dir.is_none());
        assert_eq!(request.timeout_secs, 30);
    }
}
