//! Prompt Service - sequential questions for the operator
//!
//! A handler describes what it needs as an ordered batch of [`Question`]s and
//! gets back [`Answers`] keyed by question key. Two prompters exist:
//! - `TerminalPrompter`: interactive, backed by dialoguer
//! - `ScriptedPrompter`: canned answers, used to drive handlers without a tty.
//!   Built for tests and behind the `testing` feature for downstream crates.

#[cfg(any(test, feature = "testing"))]
pub mod scripted;
pub mod terminal;

#[cfg(any(test, feature = "testing"))]
pub use scripted::{ScriptedAnswer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use crate::{Error, Result};
use std::collections::HashMap;

/// One selectable entry: what the operator sees and the id it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// `None` is a legitimate value (e.g. "no manager")
    pub value: Option<i64>,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }

    /// A choice that maps to a null reference
    pub fn none(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }
}

/// Ordered list of choices offered for a single selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceList {
    choices: Vec<Choice>,
}

impl ChoiceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, choice: Choice) {
        self.choices.push(choice);
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.label.clone()).collect()
    }
}

impl FromIterator<Choice> for ChoiceList {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self {
            choices: iter.into_iter().collect(),
        }
    }
}

/// A question descriptor
#[derive(Debug, Clone)]
pub enum Question {
    /// Free text, returned verbatim
    Input { key: &'static str, label: String },
    /// Single choice; the answer is the chosen entry's value
    Select {
        key: &'static str,
        label: String,
        choices: ChoiceList,
        default: Option<usize>,
    },
}

impl Question {
    pub fn input(key: &'static str, label: impl Into<String>) -> Self {
        Question::Input {
            key,
            label: label.into(),
        }
    }

    pub fn select(key: &'static str, label: impl Into<String>, choices: ChoiceList) -> Self {
        Question::Select {
            key,
            label: label.into(),
            choices,
            default: None,
        }
    }

    /// Preselect the entry at `index` (ignored for free-text questions)
    pub fn with_default(mut self, index: usize) -> Self {
        if let Question::Select { default, .. } = &mut self {
            *default = Some(index);
        }
        self
    }

    pub fn label(&self) -> &str {
        match self {
            Question::Input { label, .. } | Question::Select { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(Option<i64>),
}

/// Answers to a prompt batch, keyed by question key
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: HashMap<&'static str, Answer>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, answer: Answer) {
        self.values.insert(key, answer);
    }

    /// Free-text answer for `key`
    pub fn text(&self, key: &str) -> Result<&str> {
        match self.values.get(key) {
            Some(Answer::Text(text)) => Ok(text),
            _ => Err(Error::MissingAnswer(key.to_string())),
        }
    }

    /// Chosen value for `key`; `Ok(None)` means a null choice was picked
    pub fn choice(&self, key: &str) -> Result<Option<i64>> {
        match self.values.get(key) {
            Some(Answer::Choice(value)) => Ok(*value),
            _ => Err(Error::MissingAnswer(key.to_string())),
        }
    }
}

/// Source of operator answers.
///
/// Implementors provide the two primitive interactions; `ask` runs a whole
/// batch in order and maps selections back to choice values.
pub trait Prompter {
    /// Ask for free text
    fn input(&mut self, label: &str) -> Result<String>;

    /// Ask for one of `items`, returning the selected index
    fn select(&mut self, label: &str, items: &[String], default: Option<usize>) -> Result<usize>;

    /// Ask every question in order and collect the answers
    fn ask(&mut self, questions: &[Question]) -> Result<Answers> {
        // Fail before the first question rather than halfway through a batch
        if let Some(empty) = questions.iter().find(|q| match q {
            Question::Select { choices, .. } => choices.is_empty(),
            Question::Input { .. } => false,
        }) {
            return Err(Error::EmptyChoices(empty.label().to_string()));
        }

        let mut answers = Answers::new();
        for question in questions {
            match question {
                Question::Input { key, label } => {
                    let text = self.input(label)?;
                    answers.insert(*key, Answer::Text(text));
                }
                Question::Select {
                    key,
                    label,
                    choices,
                    default,
                } => {
                    let index = self.select(label, &choices.labels(), *default)?;
                    let choice = choices.get(index).ok_or_else(|| {
                        Error::Prompt(format!("selection {} out of range for '{}'", index, label))
                    })?;
                    answers.insert(*key, Answer::Choice(choice.value));
                }
            }
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departments() -> ChoiceList {
        vec![Choice::new("Engineering", 1), Choice::new("Sales", 2)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_ask_maps_selection_to_value() {
        let mut prompter = ScriptedPrompter::new(vec![
            ScriptedAnswer::text("Engineer"),
            ScriptedAnswer::pick("Sales"),
        ]);
        let questions = vec![
            Question::input("title", "Enter the role title:"),
            Question::select("department_id", "Select the department:", departments()),
        ];

        let answers = prompter.ask(&questions).unwrap();
        assert_eq!(answers.text("title").unwrap(), "Engineer");
        assert_eq!(answers.choice("department_id").unwrap(), Some(2));
    }

    #[test]
    fn test_null_choice_is_an_answer() {
        let mut choices = departments();
        choices.push(Choice::none("None"));
        let mut prompter = ScriptedPrompter::new(vec![ScriptedAnswer::pick("None")]);

        let answers = prompter
            .ask(&[Question::select("manager_id", "Select the manager:", choices)])
            .unwrap();
        assert_eq!(answers.choice("manager_id").unwrap(), None);
    }

    #[test]
    fn test_empty_choice_list_fails_before_prompting() {
        let mut prompter = ScriptedPrompter::new(vec![ScriptedAnswer::text("Engineer")]);
        let questions = vec![
            Question::input("title", "Enter the role title:"),
            Question::select("department_id", "Select the department:", ChoiceList::new()),
        ];

        let err = prompter.ask(&questions).unwrap_err();
        assert!(matches!(err, Error::EmptyChoices(ref label) if label == "Select the department:"));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_missing_and_mistyped_answers() {
        let mut answers = Answers::new();
        answers.insert("name", Answer::Text("Sales".into()));

        assert!(matches!(answers.text("title"), Err(Error::MissingAnswer(_))));
        assert!(matches!(answers.choice("name"), Err(Error::MissingAnswer(_))));
    }

    #[test]
    fn test_with_default_only_applies_to_select() {
        let q = Question::select("role_id", "Select the role:", departments()).with_default(1);
        assert!(matches!(q, Question::Select { default: Some(1), .. }));

        let q = Question::input("name", "Enter the department name:").with_default(1);
        assert!(matches!(q, Question::Input { .. }));
    }
}
