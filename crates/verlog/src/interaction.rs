use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

/// Interactive input seam. Commands prompt through this trait so that the
/// flows can be driven by scripted answers in tests.
pub(crate) trait Prompter {
    /// Free-text input. With no default, an empty answer is accepted as-is.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Numeric input; the terminal implementation re-prompts on bad input.
    fn input_number(&self, prompt: &str, default: u64) -> Result<u64>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

pub(crate) struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        input = match default {
            Some(value) => input.default(value.to_string()),
            None => input.allow_empty(true),
        };
        Ok(input.interact_text()?)
    }

    fn input_number(&self, prompt: &str, default: u64) -> Result<u64> {
        Ok(Input::<u64>::new()
            .with_prompt(prompt)
            .default(default)
            .interact_text()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }
}
