// ump: semantic version bump and release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming and capture for child processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (lossy UTF-8 per line)
//!   mpsc channels buffer lines
//!   wait
//!   --> ProcessOutput { exit_code, stdout, stderr }
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::Result;

fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
    tx: mpsc::UnboundedSender<String>,
) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move {
            let mut reader = BufReader::new(stream);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = decode_line(&buf);
                        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                            trace!(process = %name, stream = %stream_name, line = %line, "output");
                        }
                        if flags.contains(StreamFlags::KEEP_IN_STRING) {
                            let _ = tx.send(line);
                        }
                    }
                    Err(e) => {
                        warn!(process = %name, stream = %stream_name, error = %e, "read failed");
                        break;
                    }
                }
            }
        })
    })
}

/// Strips the line terminator (`\n` or `\r\n`); invalid UTF-8 is replaced.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

fn collect_output(rx: &mut mpsc::UnboundedReceiver<String>, flags: StreamFlags) -> String {
    if !flags.contains(StreamFlags::KEEP_IN_STRING) {
        return String::new();
    }
    let mut output = String::new();
    while let Ok(line) = rx.try_recv() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&line);
    }
    output
}

impl ProcessBuilder {
    /// Runs the child process, streaming output until it exits.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let (stdout_tx, mut stdout_rx) = mpsc::unbounded_channel();
        let (stderr_tx, mut stderr_rx) = mpsc::unbounded_channel();

        let readers = [
            spawn_reader(
                child.stdout.take(),
                self.stdout_stream(),
                name,
                "stdout",
                stdout_tx,
            ),
            spawn_reader(
                child.stderr.take(),
                self.stderr_stream(),
                name,
                "stderr",
                stderr_tx,
            ),
        ];

        let status = child.wait().await?;

        for handle in readers.into_iter().flatten() {
            let _ = handle.await;
        }

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            collect_output(&mut stdout_rx, self.stdout_stream()),
            collect_output(&mut stderr_rx, self.stderr_stream()),
        ))
    }
}
