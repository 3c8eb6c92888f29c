//! Deterministic fakes for exercising the pipeline without a terminal or
//! real child processes.

use crate::config::{Answer, CreateArgs, Field, Prompter, Question, ScaffoldConfig, Theme};
use crate::process::{CommandRunner, ExitStatus};
use crate::product::FrameworkConfig;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub(crate) struct TestFramework;

impl FrameworkConfig for TestFramework {
    fn name(&self) -> &'static str {
        "testfw"
    }

    fn display_name(&self) -> &'static str {
        "TestFw"
    }

    fn npm_package(&self) -> &'static str {
        "testfw.mjs"
    }

    fn npm_package_version(&self) -> &'static str {
        "^0.0.1"
    }

    fn build_script(&self) -> &'static str {
        "./node_modules/testfw.mjs/buildScripts/buildAll.mjs"
    }

    fn build_args(&self) -> &'static [&'static str] {
        &["--no-questions"]
    }

    fn server_script(&self) -> &'static str {
        "server-start"
    }

    fn docs_url(&self) -> &'static str {
        "https://testfw.invalid/docs"
    }
}

/// Fully explicit arguments rooted in a temp directory, `start` off
pub(crate) fn test_args(root: &Path) -> CreateArgs {
    CreateArgs {
        app_name: Some("MyApp".into()),
        workspace: Some(root.join("workspace").to_string_lossy().into_owned()),
        themes: Some(Theme::All),
        main_thread_addons: Some(vec![]),
        start: false,
    }
}

/// A resolved record matching `test_args`
pub(crate) fn test_config(root: &Path) -> ScaffoldConfig {
    ScaffoldConfig {
        app_name: "MyApp".into(),
        workspace: root.join("workspace").to_string_lossy().into_owned(),
        themes: vec![Theme::All],
        main_thread_addons: vec![],
        start: false,
    }
}

/// Returns scripted answers in order and records which fields were asked
pub(crate) struct ScriptedPrompter {
    answers: RefCell<Vec<Answer>>,
    pub(crate) asked: RefCell<Vec<Field>>,
}

impl ScriptedPrompter {
    pub(crate) fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, questions: &[Question]) -> io::Result<Vec<Answer>> {
        self.asked
            .borrow_mut()
            .extend(questions.iter().map(|question| question.field));

        let mut answers = self.answers.borrow_mut();
        if answers.len() < questions.len() {
            return Err(io::Error::other("prompt script exhausted"));
        }
        Ok(answers.drain(..questions.len()).collect())
    }
}

/// Fails every ask, as a terminal-less environment would
pub(crate) struct FailingPrompter;

impl Prompter for FailingPrompter {
    fn ask(&self, _questions: &[Question]) -> io::Result<Vec<Answer>> {
        Err(io::Error::other("not an interactive terminal"))
    }
}

/// Panics when asked; for runs whose input must already be complete
pub(crate) struct NeverPrompter;

impl Prompter for NeverPrompter {
    fn ask(&self, questions: &[Question]) -> io::Result<Vec<Answer>> {
        panic!("unexpected prompt for {:?}", questions[0].field);
    }
}

/// Records every invocation and replays scripted exit statuses
pub(crate) struct RecordingRunner {
    pub(crate) calls: RefCell<Vec<(String, Vec<String>, PathBuf)>>,
    statuses: RefCell<Vec<ExitStatus>>,
}

impl RecordingRunner {
    /// Every command exits 0
    pub(crate) fn succeeding() -> Self {
        Self::with_statuses(Vec::new())
    }

    /// Commands consume the given statuses in order, then exit 0
    pub(crate) fn with_statuses(statuses: Vec<ExitStatus>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            statuses: RefCell::new(statuses),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<ExitStatus> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
            cwd.to_path_buf(),
        ));

        let mut statuses = self.statuses.borrow_mut();
        if statuses.is_empty() {
            Ok(ExitStatus::from_code(0))
        } else {
            Ok(statuses.remove(0))
        }
    }
}
