//! Child process execution with captured output and a time limit.

use crate::error::{DoctorError, Result};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled while waiting on a deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// First line of standard output, trimmed.
    pub fn first_stdout_line(&self) -> &str {
        self.stdout.lines().next().unwrap_or("").trim()
    }

    /// Last non-empty line of standard error, trimmed.
    pub fn last_stderr_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .next_back()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout (if false, discarded).
    pub capture_stdout: bool,

    /// Capture stderr (if false, discarded).
    pub capture_stderr: bool,

    /// Time limit (None = wait forever).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Capture both streams and kill the child after `timeout`.
    pub fn captured(timeout: Duration) -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            timeout: Some(timeout),
        }
    }
}

/// Render a program and its arguments for messages and logs.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        if arg.contains(char::is_whitespace) {
            rendered.push_str(&format!("{:?}", arg));
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

/// Execute a program directly (no shell) and collect its output.
///
/// The time limit covers the whole call: waiting for the child and draining
/// its output. A child that exits while a background process it started
/// still holds the pipes open therefore times out too. A limit too large to
/// represent as an instant means no limit.
///
/// A spawn error becomes [`DoctorError::SpawnFailed`] and an expired time
/// limit becomes [`DoctorError::Timeout`]. A non-zero exit is not an error;
/// inspect [`CommandResult::success`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);
    let deadline = options.timeout.and_then(|limit| start.checked_add(limit));

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::null()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    tracing::debug!("Spawning: {}", rendered);

    let mut child = cmd.spawn().map_err(|e| DoctorError::SpawnFailed {
        command: rendered.clone(),
        message: e.to_string(),
    })?;

    let stdout_rx = child.stdout.take().map(spawn_reader);
    let stderr_rx = child.stderr.take().map(spawn_reader);

    let status = match deadline {
        Some(deadline) => wait_until(&mut child, deadline)?,
        None => Some(child.wait()?),
    };

    let Some(status) = status else {
        let _ = child.kill();
        let _ = child.wait();
        return Err(timed_out(rendered, options));
    };

    // Readers still pending at the deadline are left detached.
    let (Some(stdout), Some(stderr)) = (
        collect_output(stdout_rx, deadline),
        collect_output(stderr_rx, deadline),
    ) else {
        return Err(timed_out(rendered, options));
    };
    let duration = start.elapsed();

    tracing::debug!(
        "Finished in {:?} with {:?}: {}",
        duration,
        status.code(),
        rendered
    );

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success(),
    })
}

fn timed_out(command: String, options: &CommandOptions) -> DoctorError {
    let limit = options.timeout.unwrap_or_default();
    tracing::warn!("Timed out after {:?}: {}", limit, command);
    DoctorError::Timeout { command, limit }
}

/// Drain `stream` on its own thread; the text arrives on the returned
/// channel once the stream closes.
fn spawn_reader<R: Read + Send + 'static>(mut stream: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Output of a reader, or `None` if it did not finish before `deadline`.
fn collect_output(rx: Option<Receiver<String>>, deadline: Option<Instant>) -> Option<String> {
    let Some(rx) = rx else {
        return Some(String::new());
    };
    let received = match deadline {
        Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
    };
    match received {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Timeout) => None,
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
    }
}

/// Wait for `child` to exit, giving up at `deadline`.
///
/// Returns `Ok(None)` when the deadline passed with the child still running.
fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CommandOptions {
        CommandOptions::captured(Duration::from_secs(10))
    }

    #[test]
    fn display_command_quotes_whitespace() {
        assert_eq!(display_command("git", &["--version"]), "git --version");
        assert_eq!(
            display_command("python3", &["-c", "import sys"]),
            "python3 -c \"import sys\""
        );
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let err = execute("flash-doctor-no-such-program", &["--version"], &options())
            .unwrap_err();
        assert!(matches!(err, DoctorError::SpawnFailed { .. }));
    }

    #[test]
    fn first_and_last_lines() {
        let result = CommandResult {
            exit_code: Some(0),
            stdout: "git version 2.43.0\nsecond\n".to_string(),
            stderr: "Traceback\n  File x\nValueError: boom\n\n".to_string(),
            duration: Duration::ZERO,
            success: true,
        };
        assert_eq!(result.first_stdout_line(), "git version 2.43.0");
        assert_eq!(result.last_stderr_line(), Some("ValueError: boom"));
    }

    #[test]
    fn empty_stderr_has_no_last_line() {
        let result = CommandResult {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "\n  \n".to_string(),
            duration: Duration::ZERO,
            success: false,
        };
        assert_eq!(result.last_stderr_line(), None);
        assert_eq!(result.first_stdout_line(), "");
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stdout() {
        let result = execute("sh", &["-c", "echo hello"], &options()).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.first_stdout_line(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_non_zero_exit() {
        let result = execute("sh", &["-c", "echo oops >&2; exit 3"], &options()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.last_stderr_line(), Some("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_kills_child_after_timeout() {
        let options = CommandOptions::captured(Duration::from_millis(200));
        let start = Instant::now();
        let err = execute("sleep", &["5"], &options).unwrap_err();
        assert!(matches!(err, DoctorError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn background_process_holding_pipes_times_out() {
        let options = CommandOptions::captured(Duration::from_millis(300));
        let start = Instant::now();
        let err = execute("sh", &["-c", "sleep 5 & echo tool 1.0"], &options).unwrap_err();
        assert!(matches!(err, DoctorError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn unrepresentable_limit_means_no_limit() {
        let options = CommandOptions::captured(Duration::MAX);
        let result = execute("sh", &["-c", "echo ok"], &options).unwrap();
        assert!(result.success);
        assert_eq!(result.first_stdout_line(), "ok");
    }

    #[cfg(unix)]
    #[test]
    fn uncaptured_streams_are_empty() {
        let options = CommandOptions {
            timeout: Some(Duration::from_secs(10)),
            ..Default::default()
        };
        let result = execute("sh", &["-c", "echo hidden"], &options).unwrap();
        assert!(result.success);
        assert!(result.stdout.is_empty());
    }
}
