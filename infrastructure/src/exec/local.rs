//! Local subprocess execution: the default command runner

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use toolgate_application::ports::command_runner::{CommandRunnerPort, ExecOutcome, ExecRequest};

/// Runs commands on the host via tokio's process support.
///
/// Failures never propagate as errors: a missing binary, a spawn problem,
/// or an expired timeout all become an [`ExecOutcome`] with exit code -1
/// and a descriptive stderr text, exactly like a failing command would.
///
/// An optional prefix (e.g. a `docker run` wrapper from
/// [`docker_prefix`](super::docker::docker_prefix)) is prepended to every
/// argv.
#[derive(Debug, Clone, Default)]
pub struct LocalCommandRunner {
    prefix: Vec<String>,
}

impl LocalCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: Vec<String>) -> Self {
        Self { prefix }
    }
}

#[async_trait]
impl CommandRunnerPort for LocalCommandRunner {
    async fn run(&self, request: ExecRequest) -> ExecOutcome {
        let argv: Vec<&str> = self
            .prefix
            .iter()
            .chain(request.argv.iter())
            .map(String::as_str)
            .collect();
        let Some((program, args)) = argv.split_first() else {
            return ExecOutcome::failure(-1, "Empty command");
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .envs(&request.env)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if request.stdin_data.is_some() { Stdio::piped() } else { Stdio::null() })
            // Dropping the wait future on timeout must take the process with it.
            .kill_on_drop(true);
        if let Some(dir) = &request.working_dir {
            command.current_dir(dir);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return ExecOutcome::failure(-1, format!("Command not found: {program}"));
            }
            Err(err) => {
                return ExecOutcome::failure(-1, format!("Failed to spawn {program}: {err}"));
            }
        };

        if let Some(data) = &request.stdin_data {
            if let Some(mut stdin) = child.stdin.take() {
                if let Err(err) = stdin.write_all(data.as_bytes()).await {
                    tracing::debug!(error = %err, "Failed to write stdin");
                }
            }
        }

        let wait = tokio::time::timeout(
            Duration::from_secs(request.timeout_secs),
            child.wait_with_output(),
        );
        match wait.await {
            Ok(Ok(output)) => ExecOutcome {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Ok(Err(err)) => ExecOutcome::failure(-1, format!("Failed to wait for {program}: {err}")),
            Err(_) => ExecOutcome::failure(
                -1,
                format!("Command timed out after {}s", request.timeout_secs),
            ),
        }
    }
}
