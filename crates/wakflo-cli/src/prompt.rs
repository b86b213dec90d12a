//! Interactive prompts.
//!
//! Commands ask through the [`Prompter`] trait so they can run against a
//! real terminal (`dialoguer`, behind the `interactive` feature) or fail
//! cleanly when there is nobody to ask.

use crate::error::{CliError, CliResult};

/// Questions a command may ask the user.
pub trait Prompter {
    /// Free text. `default` is offered for editing; `required` rejects
    /// empty answers.
    fn input(&self, label: &str, default: Option<&str>, required: bool) -> CliResult<String>;

    /// Pick one item; returns its index.
    fn select(&self, label: &str, items: &[String]) -> CliResult<usize>;

    /// Pick any number of items; `defaults` pre-checks entries.
    fn multi_select(&self, label: &str, items: &[String], defaults: &[bool])
    -> CliResult<Vec<usize>>;
}

/// The prompter for this process: dialoguer on a terminal, otherwise one
/// that refuses every question.
pub fn default_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            return Box::new(interactive::DialoguerPrompter::new());
        }
    }
    Box::new(NoPrompt)
}

/// Answers nothing. Every question becomes an error naming the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl NoPrompt {
    fn refuse<T>(label: &str) -> CliResult<T> {
        if cfg!(feature = "interactive") {
            Err(CliError::NotInteractive {
                prompt: label.to_string(),
            })
        } else {
            Err(CliError::FeatureNotAvailable {
                feature: "interactive",
            })
        }
    }
}

impl Prompter for NoPrompt {
    fn input(&self, label: &str, _default: Option<&str>, _required: bool) -> CliResult<String> {
        Self::refuse(label)
    }

    fn select(&self, label: &str, _items: &[String]) -> CliResult<usize> {
        Self::refuse(label)
    }

    fn multi_select(
        &self,
        label: &str,
        _items: &[String],
        _defaults: &[bool],
    ) -> CliResult<Vec<usize>> {
        Self::refuse(label)
    }
}

#[cfg(feature = "interactive")]
mod interactive {
    use std::io;

    use dialoguer::{FuzzySelect, Input, MultiSelect, theme::ColorfulTheme};

    use super::Prompter;
    use crate::error::{CliError, CliResult};

    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    /// Ctrl-C / escape surface as interrupted I/O.
    fn map_err(err: dialoguer::Error) -> CliError {
        let err = io::Error::from(err);
        if err.kind() == io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::from(err)
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&self, label: &str, default: Option<&str>, required: bool) -> CliResult<String> {
            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(label)
                .allow_empty(!required);
            if let Some(default) = default.filter(|d| !d.is_empty()) {
                input = input.with_initial_text(default);
            }
            if required {
                input = input.validate_with(|value: &String| -> Result<(), &'static str> {
                    if value.trim().is_empty() {
                        Err("a value is required")
                    } else {
                        Ok(())
                    }
                });
            }
            input.interact_text().map_err(map_err)
        }

        fn select(&self, label: &str, items: &[String]) -> CliResult<usize> {
            FuzzySelect::with_theme(&self.theme)
                .with_prompt(label)
                .items(items)
                .default(0)
                .interact_opt()
                .map_err(map_err)?
                .ok_or(CliError::Cancelled)
        }

        fn multi_select(
            &self,
            label: &str,
            items: &[String],
            defaults: &[bool],
        ) -> CliResult<Vec<usize>> {
            MultiSelect::with_theme(&self.theme)
                .with_prompt(label)
                .items(items)
                .defaults(defaults)
                .interact_opt()
                .map_err(map_err)?
                .ok_or(CliError::Cancelled)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned answers in order and records every label asked.
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        answers: RefCell<VecDeque<Answer>>,
        asked: RefCell<Vec<String>>,
    }

    pub(crate) enum Answer {
        Text(&'static str),
        /// Accept whatever default was offered.
        Default,
        Pick(usize),
        Picks(Vec<usize>),
        /// Keep the pre-checked items.
        Defaults,
        Cancel,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: RefCell::new(answers.into_iter().collect()),
                asked: RefCell::default(),
            }
        }

        pub(crate) fn asked(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }

        fn next(&self, label: &str) -> Answer {
            self.asked.borrow_mut().push(label.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected prompt: {label}"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&self, label: &str, default: Option<&str>, _required: bool) -> CliResult<String> {
            match self.next(label) {
                Answer::Text(text) => Ok(text.to_string()),
                Answer::Default => Ok(default.unwrap_or_default().to_string()),
                Answer::Cancel => Err(CliError::Cancelled),
                _ => panic!("expected a text answer for {label}"),
            }
        }

        fn select(&self, label: &str, _items: &[String]) -> CliResult<usize> {
            match self.next(label) {
                Answer::Pick(index) => Ok(index),
                Answer::Cancel => Err(CliError::Cancelled),
                _ => panic!("expected a pick for {label}"),
            }
        }

        fn multi_select(
            &self,
            label: &str,
            _items: &[String],
            defaults: &[bool],
        ) -> CliResult<Vec<usize>> {
            match self.next(label) {
                Answer::Picks(picks) => Ok(picks),
                Answer::Defaults => Ok(defaults
                    .iter()
                    .enumerate()
                    .filter(|(_, checked)| **checked)
                    .map(|(i, _)| i)
                    .collect()),
                Answer::Cancel => Err(CliError::Cancelled),
                _ => panic!("expected picks for {label}"),
            }
        }
    }

    #[test]
    fn no_prompt_names_the_question() {
        let err = NoPrompt.input("Enter Name", None, true).unwrap_err();
        if cfg!(feature = "interactive") {
            assert!(matches!(err, CliError::NotInteractive { ref prompt } if prompt == "Enter Name"));
        } else {
            assert!(matches!(err, CliError::FeatureNotAvailable { .. }));
        }
        assert!(NoPrompt.select("Pick", &["a".into()]).is_err());
        assert!(NoPrompt.multi_select("Pick", &["a".into()], &[true]).is_err());
    }

    #[test]
    fn scripted_prompter_replays_answers() {
        let prompter = ScriptedPrompter::new([
            Answer::Default,
            Answer::Defaults,
            Answer::Pick(1),
        ]);
        assert_eq!(prompter.input("Description", Some("generated"), false).unwrap(), "generated");
        assert_eq!(
            prompter
                .multi_select("Categories", &["ai".into(), "app".into()], &[false, true])
                .unwrap(),
            vec![1]
        );
        assert_eq!(prompter.select("Type", &["a".into(), "b".into()]).unwrap(), 1);
        assert_eq!(prompter.asked(), vec!["Description", "Categories", "Type"]);
    }
}
