//! Select prompt descriptors.

use anyhow::{Result, anyhow};
use dialoguer::Select;
use serde::Serialize;

use super::paint::Paint;

/// One option of a select prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub title: String,
    pub description: String,
    pub value: bool,
}

impl Choice {
    fn new(label: &str, value: bool) -> Self {
        Self {
            title: label.to_string(),
            description: label.to_string(),
            value,
        }
    }
}

/// A single-choice prompt in the `{type, name, message, choices}` shape
/// understood by prompt runners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectPrompt {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub message: String,
    pub choices: Vec<Choice>,
}

impl SelectPrompt {
    /// Serialize to the JSON descriptor.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Ask the question on the terminal and return the chosen value.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be read, e.g. when stdin is not a TTY.
    pub fn interact(&self) -> Result<bool> {
        let titles: Vec<&str> = self.choices.iter().map(|c| c.title.as_str()).collect();

        let index = Select::new()
            .with_prompt(&self.message)
            .items(&titles)
            .default(0)
            .interact()?;

        self.choices
            .get(index)
            .map(|choice| choice.value)
            .ok_or_else(|| anyhow!("No choice at index {index} for `{}`", self.name))
    }
}

/// Build a No/Yes select prompt. "No" comes first.
#[must_use]
pub fn yes_no(name: &str, message: &str) -> SelectPrompt {
    SelectPrompt {
        kind: "select".to_string(),
        name: name.to_string(),
        message: Paint::new().bold().yellow().apply(message),
        choices: vec![Choice::new("No", false), Choice::new("Yes", true)],
    }
}
