// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline execution: spawn every stage, wire the streams, drain without
//! deadlocking, fold the exit codes.

use std::ffi::OsString;
use std::fs::File;
use std::io::{PipeReader, Read, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use rigor_shell::{Pipeline, SimpleCommand};
use tempfile::TempPath;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::process::{Child, ChildStderr, ChildStdout};
use tracing::Instrument;

use crate::context::ExecContext;
use crate::error::ExecError;
use crate::host::NULL_DEVICE;
use crate::record::ExecutionRecord;
use crate::redirect::{self, OpenedFile, ResolvedRedirects, Stream, StreamSlot};

/// Run one pipeline and append one record per command, in command order.
///
/// Returns the pipeline's exit code after pipefail folding and negation.
pub async fn execute_pipeline(
    ctx: &ExecContext,
    pipeline: &Pipeline,
    records: &mut Vec<ExecutionRecord>,
) -> Result<i32, ExecError> {
    let span = tracing::info_span!(
        "rigor.pipeline",
        stages = pipeline.commands.len(),
        pipe_fail = pipeline.pipe_fail,
        negate = pipeline.negate,
    );
    run_pipeline(ctx, pipeline, records).instrument(span).await
}

/// Fold per-command exit codes into the pipeline's code.
///
/// With `pipe_fail`, any signal death (negative code) wins, the most negative
/// first; otherwise the largest code wins. Without it the last code is used.
pub fn fold_exit_codes(codes: &[i32], pipe_fail: bool) -> i32 {
    if !pipe_fail {
        return codes.last().copied().unwrap_or(0);
    }
    match codes.iter().copied().filter(|c| *c < 0).min() {
        Some(signaled) => signaled,
        None => codes.iter().copied().max().unwrap_or(0),
    }
}

/// `!` inverts success into 1 and any failure into 0; the magnitude is lost.
pub fn negate_exit_code(code: i32) -> i32 {
    i32::from(code == 0)
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

struct Stage<'p> {
    command: &'p SimpleCommand,
    program: PathBuf,
    redirects: ResolvedRedirects,
}

/// Output of a stage that feeds the next stage's stdin.
enum Upstream {
    Stdout(ChildStdout),
    /// `2>&1 > file`: stderr stands in for stdout.
    Stderr(ChildStderr),
    /// `2>&1` onto a pipe shared by both streams.
    Merged(PipeReader),
}

impl Upstream {
    fn into_stdio(self) -> Result<Stdio, ExecError> {
        let context = "connecting pipeline stages";
        match self {
            Upstream::Stdout(out) => out.try_into().map_err(ExecError::io(context)),
            Upstream::Stderr(err) => err.try_into().map_err(ExecError::io(context)),
            Upstream::Merged(reader) => Ok(Stdio::from(reader)),
        }
    }
}

struct Running<'p> {
    command: &'p SimpleCommand,
    child: Child,
    /// Shared stdout/stderr pipe of the last stage.
    merged: Option<PipeReader>,
    /// Temporary files standing in for pipes nobody reads until the end.
    stdout_spill: Option<File>,
    stderr_spill: Option<File>,
}

async fn run_pipeline(
    ctx: &ExecContext,
    pipeline: &Pipeline,
    records: &mut Vec<ExecutionRecord>,
) -> Result<i32, ExecError> {
    let stages = prepare(ctx, pipeline)?;
    let n = stages.len();
    if n == 0 {
        return Ok(0);
    }

    let mut opened: Vec<OpenedFile> = Vec::new();
    let mut null_args: Vec<TempPath> = Vec::new();
    let mut running: Vec<Running<'_>> = Vec::with_capacity(n);
    let mut upstream: Option<Upstream> = None;

    // Phase 2: spawn left to right.
    for (i, stage) in stages.iter().enumerate() {
        let last = i + 1 == n;
        let next_reads = !last && stages[i + 1].redirects.reads_pipeline_input();
        let files = redirect::open_targets(&stage.redirects.files, &ctx.cwd, &ctx.host)?;
        let args = substitute_null_args(ctx, stage.command, &mut null_args)?;

        let (stdin, stdin_is_parent) = match stage.redirects.stdin {
            StreamSlot::File(idx) => (Stdio::from(files[idx].try_clone()?), false),
            _ => match upstream.take() {
                Some(up) => (up.into_stdio()?, false),
                None => (Stdio::piped(), true),
            },
        };

        let wiring = wire_outputs(&stage.redirects, &files, last, next_reads)?;
        tracing::debug!(stage = i, program = %stage.program.display(), args = ?stage.command.args, "spawning");
        let mut child = spawn(ctx, &stage.program, &args, stdin, wiring.stdout, wiring.stderr)?;
        if stdin_is_parent {
            drop(child.stdin.take());
        }

        let mut merged = wiring.merged;
        if next_reads {
            upstream = match (merged.take(), wiring.stdout_pipe, wiring.stderr_pipe) {
                (Some(reader), ..) => Some(Upstream::Merged(reader)),
                (None, true, _) => child.stdout.take().map(Upstream::Stdout),
                (None, false, true) => child.stderr.take().map(Upstream::Stderr),
                _ => None,
            };
        }

        opened.extend(files);
        running.push(Running {
            command: stage.command,
            child,
            merged,
            stdout_spill: wiring.stdout_spill,
            stderr_spill: wiring.stderr_spill,
        });
    }
    drop(upstream);

    // Phase 3: drain the last stage first, then the rest in order.
    let mut outputs: Vec<Option<(Vec<u8>, Vec<u8>, i32)>> = (0..n).map(|_| None).collect();
    let mut order: Vec<usize> = vec![n - 1];
    order.extend(0..n - 1);

    let mut running: Vec<Option<Running<'_>>> = running.into_iter().map(Some).collect();
    for i in order {
        let Some(stage) = running[i].take() else {
            continue;
        };
        let command = stage.command;
        let (stdout, stderr, code) = drain(stage).await?;
        tracing::debug!(stage = i, exit_code = code, "drained");
        if is_sigint(code) {
            return Err(ExecError::Interrupted {
                command: command.program().unwrap_or_default().to_string(),
            });
        }
        outputs[i] = Some((stdout, stderr, code));
    }

    let mut codes = Vec::with_capacity(n);
    for (stage, output) in stages.iter().zip(outputs) {
        let (stdout, stderr, code) = output.unwrap_or_default();
        codes.push(code);
        records.push(ExecutionRecord::new(stage.command.clone(), stdout, stderr, code));
    }

    let mut exit_code = fold_exit_codes(&codes, pipeline.pipe_fail);
    if pipeline.negate {
        exit_code = negate_exit_code(exit_code);
    }

    // Phase 4: release files, then remove null-device stand-ins.
    let named: Vec<PathBuf> = opened.iter().filter_map(|f| f.path.clone()).collect();
    drop(opened);
    for path in &named {
        ctx.host.handle_release.wait_released(path).await?;
    }
    for temp in null_args {
        let path = temp.to_path_buf();
        ctx.host.handle_release.wait_released(&path).await?;
        if let Err(e) = temp.close() {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove null-device stand-in");
            }
        }
    }

    Ok(exit_code)
}

/// Phase 1: resolve every program, then every redirect list, before anything spawns.
fn prepare<'p>(ctx: &ExecContext, pipeline: &'p Pipeline) -> Result<Vec<Stage<'p>>, ExecError> {
    let mut programs = Vec::with_capacity(pipeline.commands.len());
    for command in &pipeline.commands {
        let name = command.program().unwrap_or_default();
        let program = ctx.resolver.resolve(name, &ctx.cwd, ctx.path_var()).ok_or_else(|| {
            ExecError::CommandNotFound {
                command: command.clone(),
                message: format!("'{name}': command not found"),
            }
        })?;
        programs.push(program);
    }

    pipeline
        .commands
        .iter()
        .zip(programs)
        .map(|(command, program)| {
            Ok(Stage { command, program, redirects: redirect::resolve(&command.redirects)? })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Stream wiring
// ---------------------------------------------------------------------------

struct OutputWiring {
    stdout: Stdio,
    stderr: Stdio,
    /// Child's stdout handle is a live pipe.
    stdout_pipe: bool,
    /// Child's stderr handle is a live pipe.
    stderr_pipe: bool,
    merged: Option<PipeReader>,
    stdout_spill: Option<File>,
    stderr_spill: Option<File>,
}

/// Choose stdout/stderr endpoints for one stage.
///
/// Only the last stage and outputs consumed by the next stage get live pipes;
/// every other default output spills into an anonymous temporary file.
fn wire_outputs(
    redirects: &ResolvedRedirects,
    files: &[OpenedFile],
    last: bool,
    next_reads: bool,
) -> Result<OutputWiring, ExecError> {
    let live = last || next_reads;
    let mut wiring = OutputWiring {
        stdout: Stdio::null(),
        stderr: Stdio::null(),
        stdout_pipe: false,
        stderr_pipe: false,
        merged: None,
        stdout_spill: None,
        stderr_spill: None,
    };

    match redirects.stdout {
        StreamSlot::File(idx) => wiring.stdout = Stdio::from(files[idx].try_clone()?),
        StreamSlot::Default(_) if redirects.stderr_follows_stdout() => {
            if live {
                let (reader, writer) = std::io::pipe().map_err(ExecError::io("creating pipe"))?;
                let writer_dup = writer.try_clone().map_err(ExecError::io("creating pipe"))?;
                wiring.stdout = Stdio::from(writer);
                wiring.stderr = Stdio::from(writer_dup);
                wiring.merged = Some(reader);
            } else {
                let spill = spill_file()?;
                wiring.stdout = Stdio::from(clone_file(&spill)?);
                wiring.stderr = Stdio::from(clone_file(&spill)?);
                wiring.stdout_spill = Some(spill);
            }
            return Ok(wiring);
        }
        StreamSlot::Default(_) if live => {
            wiring.stdout = Stdio::piped();
            wiring.stdout_pipe = true;
        }
        StreamSlot::Default(_) => {
            let spill = spill_file()?;
            wiring.stdout = Stdio::from(clone_file(&spill)?);
            wiring.stdout_spill = Some(spill);
        }
    }

    // Stderr aliasing stdout here means stdout went to a file afterwards; the
    // stderr pipe then plays stdout's role for the next stage.
    let stderr_stands_in = redirects.stderr == StreamSlot::Default(Stream::Stdout);
    match redirects.stderr {
        StreamSlot::File(idx) => wiring.stderr = Stdio::from(files[idx].try_clone()?),
        StreamSlot::Default(_) if last || (stderr_stands_in && next_reads) => {
            wiring.stderr = Stdio::piped();
            wiring.stderr_pipe = true;
        }
        StreamSlot::Default(_) => {
            let spill = spill_file()?;
            wiring.stderr = Stdio::from(clone_file(&spill)?);
            wiring.stderr_spill = Some(spill);
        }
    }
    Ok(wiring)
}

fn spill_file() -> Result<File, ExecError> {
    tempfile::tempfile().map_err(ExecError::io("creating capture file"))
}

fn clone_file(file: &File) -> Result<File, ExecError> {
    file.try_clone().map_err(ExecError::io("duplicating capture file"))
}

/// Arguments after the program, with null-device arguments swapped for
/// named temporary files when the host avoids the null device.
fn substitute_null_args(
    ctx: &ExecContext,
    command: &SimpleCommand,
    stand_ins: &mut Vec<TempPath>,
) -> Result<Vec<OsString>, ExecError> {
    let mut args = Vec::with_capacity(command.args.len().saturating_sub(1));
    for arg in command.args.iter().skip(1) {
        if ctx.host.avoid_dev_null && arg == NULL_DEVICE {
            let temp = tempfile::NamedTempFile::new()
                .map_err(ExecError::io("creating null-device stand-in"))?
                .into_temp_path();
            args.push(temp.as_os_str().to_os_string());
            stand_ins.push(temp);
        } else {
            args.push(OsString::from(arg));
        }
    }
    Ok(args)
}

/// Spawn one stage. The `Command` (and with it the parent's copies of the
/// stdio handles) is dropped before returning so pipes see EOF.
fn spawn(
    ctx: &ExecContext,
    program: &Path,
    args: &[OsString],
    stdin: Stdio,
    stdout: Stdio,
    stderr: Stdio,
) -> Result<Child, ExecError> {
    let mut process = tokio::process::Command::new(program);
    process
        .args(args)
        .current_dir(&ctx.cwd)
        .env_clear()
        .envs(&ctx.env)
        .stdin(stdin)
        .stdout(stdout)
        .stderr(stderr)
        .kill_on_drop(true);
    process
        .spawn()
        .map_err(|source| ExecError::Spawn { command: program.display().to_string(), source })
}

// ---------------------------------------------------------------------------
// Draining
// ---------------------------------------------------------------------------

/// Wait for one stage and collect its output: live pipes, the merged pipe,
/// and any spill files.
async fn drain(stage: Running<'_>) -> Result<(Vec<u8>, Vec<u8>, i32), ExecError> {
    let Running { child, merged, stdout_spill, stderr_spill, .. } = stage;

    let output = match merged {
        Some(reader) => {
            let read = tokio::task::spawn_blocking(move || read_all(reader));
            let (output, merged) = tokio::join!(child.wait_with_output(), read);
            let mut output = output.map_err(ExecError::io("waiting for child"))?;
            let merged = merged
                .map_err(|e| ExecError::Io {
                    context: "reading merged output".to_string(),
                    source: std::io::Error::other(e),
                })?
                .map_err(ExecError::io("reading merged output"))?;
            output.stdout.extend(merged);
            output
        }
        None => child.wait_with_output().await.map_err(ExecError::io("waiting for child"))?,
    };

    let mut stdout = output.stdout;
    let mut stderr = output.stderr;
    if let Some(spill) = stdout_spill {
        stdout.extend(read_spill(spill).await?);
    }
    if let Some(spill) = stderr_spill {
        stderr.extend(read_spill(spill).await?);
    }
    Ok((stdout, stderr, exit_code_of(output.status)))
}

fn read_all(mut reader: PipeReader) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

async fn read_spill(file: File) -> Result<Vec<u8>, ExecError> {
    let mut file = tokio::fs::File::from_std(file);
    file.seek(SeekFrom::Start(0)).await.map_err(ExecError::io("rewinding capture file"))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).await.map_err(ExecError::io("reading capture file"))?;
    Ok(buf)
}

/// Non-negative exit status, or the negated signal number.
pub(crate) fn exit_code_of(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    status.code().unwrap_or(-1)
}

/// Whether an exit code means the child was stopped by Ctrl-C.
pub(crate) fn is_sigint(code: i32) -> bool {
    #[cfg(unix)]
    {
        code == -(nix::sys::signal::Signal::SIGINT as i32)
    }
    #[cfg(not(unix))]
    {
        // STATUS_CONTROL_C_EXIT
        code == 0xC000_013Au32 as i32
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
