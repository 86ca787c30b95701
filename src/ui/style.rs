//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, colored: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            colored(&text)
        }
    }

    /// Style for section headers and project IDs
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.bold()))
    }

    /// Style for labels (e.g., "Remote", "Local")
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for primary values (e.g., project names)
    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.cyan()))
    }

    /// Style for counts and paths
    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.yellow()))
    }

    /// Role marker shown next to a project in `list`
    pub fn role(admin: bool) -> String {
        if admin {
            Self::paint("(admin)", |t| format!("{}", t.green()))
        } else {
            Self::paint("(contr)", |t| format!("{}", t.red()))
        }
    }
}
