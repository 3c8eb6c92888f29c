//! cliclack implementation of the prompt capability

use crate::config::{Answer, Prompter, Question, Shape};
use crate::product::FrameworkConfig;
use std::io;

/// Collects answers through cliclack inline prompts
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn ask(&self, questions: &[Question]) -> io::Result<Vec<Answer>> {
        let mut answers = Vec::with_capacity(questions.len());

        for question in questions {
            let answer = match &question.shape {
                Shape::Input { default } => {
                    let value: String = cliclack::input(question.message)
                        .placeholder(default)
                        .default_input(default)
                        .interact()?;
                    Answer::One(value)
                }
                Shape::Select { choices, default } => {
                    let mut select = cliclack::select(question.message);
                    for choice in choices.iter() {
                        select = select.item(*choice, *choice, "");
                    }
                    let picked: &str = select.initial_value(*default).interact()?;
                    Answer::One(picked.to_string())
                }
                Shape::MultiSelect { choices, defaults } => {
                    let mut multi = cliclack::multiselect(question.message);
                    for choice in choices.iter() {
                        multi = multi.item(*choice, *choice, "");
                    }
                    let picked: Vec<&str> = multi
                        .initial_values(defaults.to_vec())
                        .required(false)
                        .interact()?;
                    Answer::Many(picked.into_iter().map(str::to_string).collect())
                }
            };
            answers.push(answer);
        }

        Ok(answers)
    }
}

/// Print the generator banner shown before any prompting
pub fn intro<C: FrameworkConfig>(framework: &C, generator: &str, version: &str) -> io::Result<()> {
    cliclack::intro(format!(
        "Welcome to the {} app generator!",
        framework.display_name()
    ))?;
    cliclack::log::info(format!("current version of {generator}: {version}"))?;
    Ok(())
}
