//! Scaffold orchestration
//!
//! Drives the whole run in a strict sequence: resolve configuration, ensure
//! the app directory, run the generator set, install dependencies, copy the
//! docs app, run the initial build, then optionally hand off to the dev
//! server. Every step runs exactly once; any failure aborts the run. An
//! interrupt flag is checked between steps so a signal translates into a
//! clean `Outcome::Interrupted` rather than an error.

use crate::config::{resolve, CreateArgs, Prompter};
use crate::error::ScaffoldError;
use crate::generate::{self, docs};
use crate::process::{npm_binary, CommandRunner};
use crate::product::FrameworkConfig;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared cancellation token, tripped by the signal handler
#[derive(Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trip(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_tripped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Per-run state: start time for elapsed reporting plus the interrupt flag
pub struct RunContext {
    started: Instant,
    interrupt: InterruptFlag,
}

impl RunContext {
    pub fn new(interrupt: InterruptFlag) -> Self {
        Self {
            started: Instant::now(),
            interrupt,
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn interrupted(&self) -> bool {
        self.interrupt.is_tripped()
    }
}

/// How a run ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

/// Print the total wall-clock time of the run
pub fn report_elapsed(ctx: &RunContext) {
    println!("Total time: {:.2}s", ctx.elapsed_seconds());
}

/// Run the full scaffold pipeline.
///
/// Install and build failures are fatal. The server start is the
/// long-running terminal step: its termination (typically via interrupt) is
/// a normal exit, so its status is not checked.
pub fn run<C, P, R>(
    framework: &C,
    args: &CreateArgs,
    prompter: &P,
    runner: &R,
    ctx: &RunContext,
) -> Result<Outcome, ScaffoldError>
where
    C: FrameworkConfig,
    P: Prompter,
    R: CommandRunner,
{
    if ctx.interrupted() {
        return Ok(Outcome::Interrupted);
    }
    let config = resolve(args, prompter)?;

    if ctx.interrupted() {
        return Ok(Outcome::Interrupted);
    }
    let app_path = config.app_path();
    fs::create_dir_all(&app_path).map_err(|source| ScaffoldError::DirectoryCreation {
        path: app_path.clone(),
        source,
    })?;

    if ctx.interrupted() {
        return Ok(Outcome::Interrupted);
    }
    generate::write_all(framework, &config)?;

    let workspace = Path::new(&config.workspace);

    if ctx.interrupted() {
        return Ok(Outcome::Interrupted);
    }
    run_step(runner, "install", npm_binary(), &["install"], workspace)?;

    if ctx.interrupted() {
        return Ok(Outcome::Interrupted);
    }
    docs::copy_docs_app(framework, workspace).map_err(|source| ScaffoldError::Generator {
        artifact: "docs app",
        source,
    })?;

    if ctx.interrupted() {
        return Ok(Outcome::Interrupted);
    }
    let mut build_args = vec![framework.build_script()];
    build_args.extend_from_slice(framework.build_args());
    run_step(runner, "build", "node", &build_args, workspace)?;

    if config.start {
        if ctx.interrupted() {
            return Ok(Outcome::Interrupted);
        }
        report_elapsed(ctx);
        let server_args = ["run", framework.server_script()];
        runner
            .run(npm_binary(), &server_args, workspace)
            .map_err(|source| ScaffoldError::ProcessSpawn {
                step: "server start",
                program: npm_binary().to_string(),
                source,
            })?;
    }

    Ok(Outcome::Completed)
}

fn run_step<R: CommandRunner>(
    runner: &R,
    step: &'static str,
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> Result<(), ScaffoldError> {
    let status = runner
        .run(program, args, cwd)
        .map_err(|source| ScaffoldError::ProcessSpawn {
            step,
            program: program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(ScaffoldError::ProcessExit { step, status });
    }
    Ok(())
}
