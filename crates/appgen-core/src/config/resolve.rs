//! Interactive resolution of missing configuration fields
//!
//! The resolver merges explicit command-line input with interactively
//! collected answers into one `ScaffoldConfig`. Fields present in the
//! explicit input are never re-asked. Prompting goes through the `Prompter`
//! capability so the pipeline can be exercised with a scripted fake.

use crate::config::{
    CreateArgs, MainThreadAddon, ScaffoldConfig, Theme, DEFAULT_APP_NAME, DEFAULT_WORKSPACE,
};
use crate::error::ScaffoldError;
use std::io;
use std::str::FromStr;

/// Selectable theme names, in prompt order
const THEME_CHOICES: &[&str] = &["theme-dark", "theme-light", "all", "none"];

/// Selectable addon names, in prompt order
const ADDON_CHOICES: &[&str] = &[
    "AmCharts",
    "GoogleAnalytics",
    "HighlightJS",
    "LocalStorage",
    "MapboxGL",
    "Markdown",
    "Siesta",
    "Stylesheet",
];

const ADDON_DEFAULTS: &[&str] = &["Stylesheet"];

/// A configuration field the resolver may have to ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Workspace,
    AppName,
    Themes,
    MainThreadAddons,
}

/// Input shape of a question
#[derive(Debug, Clone)]
pub enum Shape {
    /// Free text with a default value
    Input { default: &'static str },
    /// Single choice from a fixed list
    Select {
        choices: &'static [&'static str],
        default: &'static str,
    },
    /// Any number of choices from a fixed list
    MultiSelect {
        choices: &'static [&'static str],
        defaults: &'static [&'static str],
    },
}

/// Descriptor for one missing field
#[derive(Debug, Clone)]
pub struct Question {
    pub field: Field,
    pub message: &'static str,
    pub shape: Shape,
}

/// An answer to a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

/// Capability for collecting interactive answers
///
/// Implemented by `tui::CliclackPrompter` for real terminals and by a
/// scripted fake in tests. Answers must be returned in question order.
pub trait Prompter {
    fn ask(&self, questions: &[Question]) -> io::Result<Vec<Answer>>;
}

/// Build the question list for every field absent from the explicit input.
///
/// The order is fixed: workspace, app name, themes, main thread addons.
pub fn missing_questions(args: &CreateArgs) -> Vec<Question> {
    let mut questions = Vec::new();

    if args.workspace.is_none() {
        questions.push(Question {
            field: Field::Workspace,
            message: "Please choose a name for your workspace:",
            shape: Shape::Input {
                default: DEFAULT_WORKSPACE,
            },
        });
    }

    if args.app_name.is_none() {
        questions.push(Question {
            field: Field::AppName,
            message: "Please choose a name for your app:",
            shape: Shape::Input {
                default: DEFAULT_APP_NAME,
            },
        });
    }

    if args.themes.is_none() {
        questions.push(Question {
            field: Field::Themes,
            message: "Please choose a theme for your app:",
            shape: Shape::Select {
                choices: THEME_CHOICES,
                default: "all",
            },
        });
    }

    if args.main_thread_addons.is_none() {
        questions.push(Question {
            field: Field::MainThreadAddons,
            message: "Please choose your main thread addons:",
            shape: Shape::MultiSelect {
                choices: ADDON_CHOICES,
                defaults: ADDON_DEFAULTS,
            },
        });
    }

    questions
}

/// Resolve the full configuration record, asking for whatever the explicit
/// input left open.
///
/// A scalar themes answer is promoted to a one-element sequence, so the
/// resolved record always carries a non-empty theme list.
pub fn resolve<P: Prompter>(args: &CreateArgs, prompter: &P) -> Result<ScaffoldConfig, ScaffoldError> {
    let questions = missing_questions(args);

    let answers = if questions.is_empty() {
        Vec::new()
    } else {
        prompter.ask(&questions).map_err(|err| {
            ScaffoldError::ConfigurationUnresolved(format!("interactive input unavailable: {err}"))
        })?
    };

    if answers.len() != questions.len() {
        return Err(ScaffoldError::ConfigurationUnresolved(format!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    let mut workspace = args.workspace.clone();
    let mut app_name = args.app_name.clone();
    let mut themes: Option<Vec<Theme>> = args.themes.map(|theme| vec![theme]);
    let mut addons = args.main_thread_addons.clone();

    for (question, answer) in questions.iter().zip(answers) {
        match (question.field, answer) {
            (Field::Workspace, Answer::One(value)) => workspace = Some(value),
            (Field::AppName, Answer::One(value)) => app_name = Some(value),
            (Field::Themes, Answer::One(value)) => themes = Some(vec![parse::<Theme>(&value)?]),
            (Field::Themes, Answer::Many(values)) => {
                themes = Some(parse_all::<Theme>(&values)?);
            }
            (Field::MainThreadAddons, Answer::Many(values)) => {
                addons = Some(parse_all::<MainThreadAddon>(&values)?);
            }
            (Field::MainThreadAddons, Answer::One(value)) => {
                addons = Some(vec![parse::<MainThreadAddon>(&value)?]);
            }
            (field, answer) => {
                return Err(ScaffoldError::ConfigurationUnresolved(format!(
                    "answer shape mismatch for {field:?}: {answer:?}"
                )));
            }
        }
    }

    let workspace = require_text(workspace, "workspace")?;
    let app_name = require_text(app_name, "app name")?;
    let themes = themes.ok_or_else(|| unresolved("themes"))?;
    let main_thread_addons = addons.ok_or_else(|| unresolved("main thread addons"))?;

    if themes.is_empty() {
        return Err(ScaffoldError::ConfigurationUnresolved(
            "theme selection is empty".into(),
        ));
    }

    Ok(ScaffoldConfig {
        app_name,
        workspace,
        themes,
        main_thread_addons,
        start: args.start,
    })
}

fn parse<T>(value: &str) -> Result<T, ScaffoldError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|err: T::Err| ScaffoldError::ConfigurationUnresolved(err.to_string()))
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>, ScaffoldError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    values.iter().map(|value| parse(value)).collect()
}

fn require_text(value: Option<String>, field: &str) -> Result<String, ScaffoldError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(ScaffoldError::ConfigurationUnresolved(format!(
            "{field} must not be empty"
        ))),
        None => Err(unresolved(field)),
    }
}

fn unresolved(field: &str) -> ScaffoldError {
    ScaffoldError::ConfigurationUnresolved(format!("no value resolved for {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingPrompter, ScriptedPrompter};

    fn full_args() -> CreateArgs {
        CreateArgs {
            app_name: Some("MyApp".into()),
            workspace: Some("workspace".into()),
            themes: Some(Theme::All),
            main_thread_addons: Some(vec![]),
            start: false,
        }
    }

    #[test]
    fn test_full_input_never_prompts() {
        let prompter = ScriptedPrompter::new(vec![]);
        let config = resolve(&full_args(), &prompter).unwrap();
        assert!(prompter.asked.borrow().is_empty());
        assert_eq!(config.app_name, "MyApp");
        assert_eq!(config.themes, vec![Theme::All]);
        assert!(!config.start);
    }

    #[test]
    fn test_only_missing_fields_are_asked_in_order() {
        let args = CreateArgs {
            app_name: Some("MyApp".into()),
            workspace: None,
            themes: None,
            main_thread_addons: Some(vec![MainThreadAddon::Stylesheet]),
            start: true,
        };
        let prompter = ScriptedPrompter::new(vec![
            Answer::One("ws".into()),
            Answer::One("theme-light".into()),
        ]);
        let config = resolve(&args, &prompter).unwrap();
        assert_eq!(*prompter.asked.borrow(), vec![Field::Workspace, Field::Themes]);
        assert_eq!(config.workspace, "ws");
        assert_eq!(config.themes, vec![Theme::Light]);
    }

    #[test]
    fn test_scalar_theme_answer_is_promoted_to_a_sequence() {
        let args = CreateArgs {
            themes: None,
            ..full_args()
        };
        let prompter = ScriptedPrompter::new(vec![Answer::One("none".into())]);
        let config = resolve(&args, &prompter).unwrap();
        assert_eq!(config.themes, vec![Theme::None]);
    }

    #[test]
    fn test_scalar_theme_flag_is_promoted_to_a_sequence() {
        let args = CreateArgs {
            themes: Some(Theme::Dark),
            ..full_args()
        };
        let prompter = ScriptedPrompter::new(vec![]);
        let config = resolve(&args, &prompter).unwrap();
        assert_eq!(config.themes, vec![Theme::Dark]);
    }

    #[test]
    fn test_addons_come_from_their_own_answer() {
        let args = CreateArgs {
            main_thread_addons: None,
            ..full_args()
        };
        let prompter = ScriptedPrompter::new(vec![Answer::Many(vec![
            "Markdown".into(),
            "Stylesheet".into(),
        ])]);
        let config = resolve(&args, &prompter).unwrap();
        assert_eq!(
            config.main_thread_addons,
            vec![MainThreadAddon::Markdown, MainThreadAddon::Stylesheet]
        );
    }

    #[test]
    fn test_empty_addon_selection_is_allowed() {
        let args = CreateArgs {
            main_thread_addons: None,
            ..full_args()
        };
        let prompter = ScriptedPrompter::new(vec![Answer::Many(vec![])]);
        let config = resolve(&args, &prompter).unwrap();
        assert!(config.main_thread_addons.is_empty());
    }

    #[test]
    fn test_prompt_failure_is_configuration_unresolved() {
        let args = CreateArgs::default();
        let err = resolve(&args, &FailingPrompter).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigurationUnresolved(_)));
    }

    #[test]
    fn test_unknown_prompted_theme_is_rejected() {
        let args = CreateArgs {
            themes: None,
            ..full_args()
        };
        let prompter = ScriptedPrompter::new(vec![Answer::One("sepia".into())]);
        let err = resolve(&args, &prompter).unwrap_err();
        assert!(err.to_string().contains("unknown theme 'sepia'"));
    }

    #[test]
    fn test_blank_app_name_is_rejected() {
        let args = CreateArgs {
            app_name: None,
            ..full_args()
        };
        let prompter = ScriptedPrompter::new(vec![Answer::One("   ".into())]);
        let err = resolve(&args, &prompter).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigurationUnresolved(_)));
    }

    #[test]
    fn test_prompt_choice_lists_match_the_catalogs() {
        assert_eq!(
            THEME_CHOICES,
            Theme::CHOICES.iter().map(Theme::as_str).collect::<Vec<_>>()
        );
        assert_eq!(
            ADDON_CHOICES,
            MainThreadAddon::CATALOG
                .iter()
                .map(MainThreadAddon::as_str)
                .collect::<Vec<_>>()
        );
    }
}
