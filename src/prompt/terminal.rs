//! Interactive prompts on the controlling terminal

use super::Prompter;
use crate::{Error, Result};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};

pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    /// Colorful prompts on a tty, plain ones otherwise
    pub fn detect() -> Self {
        let theme: Box<dyn Theme> = if crate::ui::theme().is_colored() {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::detect()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, label: &str) -> Result<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))
    }

    fn select(&mut self, label: &str, items: &[String], default: Option<usize>) -> Result<usize> {
        Select::with_theme(self.theme.as_ref())
            .with_prompt(label)
            .items(items)
            .default(default.unwrap_or(0))
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
