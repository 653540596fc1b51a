//! Prompter fed from a fixed script of answers

use super::Prompter;
use crate::{Error, Result};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Reply to a free-text question
    Text(String),
    /// Pick the entry whose label matches exactly
    Pick(String),
}

impl ScriptedAnswer {
    pub fn text(value: impl Into<String>) -> Self {
        ScriptedAnswer::Text(value.into())
    }

    pub fn pick(label: impl Into<String>) -> Self {
        ScriptedAnswer::Pick(label.into())
    }
}

/// A question as it was presented: its label and, for selections, the items
/// shown and the preselected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asked {
    pub label: String,
    pub items: Option<Vec<String>>,
    pub default: Option<usize>,
}

/// Replays answers in order and records every question it was asked.
///
/// Running out of answers is an error, which is how tests stop the menu loop.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<ScriptedAnswer>,
    asked: Vec<Asked>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            script: script.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[Asked] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next(&mut self, label: &str) -> Result<ScriptedAnswer> {
        self.script
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("script exhausted at '{}'", label)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, label: &str) -> Result<String> {
        self.asked.push(Asked {
            label: label.to_string(),
            items: None,
            default: None,
        });
        match self.next(label)? {
            ScriptedAnswer::Text(text) => Ok(text),
            ScriptedAnswer::Pick(pick) => Err(Error::Prompt(format!(
                "expected text for '{}', script has pick '{}'",
                label, pick
            ))),
        }
    }

    fn select(&mut self, label: &str, items: &[String], default: Option<usize>) -> Result<usize> {
        self.asked.push(Asked {
            label: label.to_string(),
            items: Some(items.to_vec()),
            default,
        });
        match self.next(label)? {
            ScriptedAnswer::Pick(pick) => items
                .iter()
                .position(|item| *item == pick)
                .ok_or_else(|| Error::Prompt(format!("'{}' is not offered by '{}'", pick, label))),
            ScriptedAnswer::Text(text) => Err(Error::Prompt(format!(
                "expected a pick for '{}', script has text '{}'",
                label, text
            ))),
        }
    }
}
