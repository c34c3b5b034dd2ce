//! User interface boundary
//!
//! Everything the controller needs from the surrounding UI: blocking
//! prompts and confirmations, user-visible notices, and the enabled state
//! of the controls that trigger each action.

use cloud::Owner;
use std::fmt;

/// A user-triggered persistence action, and the control that triggers it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NewDocument,
    SaveLocal,
    LoadLocal,
    ExportHtml,
    SaveCloud,
    LoadCloud,
    DeleteCloud,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::NewDocument,
        Action::SaveLocal,
        Action::LoadLocal,
        Action::ExportHtml,
        Action::SaveCloud,
        Action::LoadCloud,
        Action::DeleteCloud,
    ];

    /// Whether the action needs a signed-in session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Action::SaveCloud | Action::LoadCloud | Action::DeleteCloud)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::NewDocument => "new",
            Action::SaveLocal => "save-local",
            Action::LoadLocal => "load-local",
            Action::ExportHtml => "export-html",
            Action::SaveCloud => "save-cloud",
            Action::LoadCloud => "load-cloud",
            Action::DeleteCloud => "delete-cloud",
        };
        f.write_str(name)
    }
}

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Outcome of a prompt: a non-empty trimmed value, or cancelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    Value(String),
    Cancelled,
}

impl PromptResult {
    /// Interpret raw prompt input; blank input counts as cancelled
    pub fn from_input(input: Option<String>) -> Self {
        match input {
            Some(text) if !text.trim().is_empty() => PromptResult::Value(text.trim().to_string()),
            _ => PromptResult::Cancelled,
        }
    }

    pub fn value(self) -> Option<String> {
        match self {
            PromptResult::Value(value) => Some(value),
            PromptResult::Cancelled => None,
        }
    }
}

/// The UI hosting the editor
pub trait UserInterface: Send + Sync {
    /// Ask for a line of text; `None` when dismissed
    fn prompt(&self, message: &str, default: Option<&str>) -> Option<String>;

    /// Ask for an explicit yes/no confirmation
    fn confirm(&self, message: &str) -> bool;

    /// Show a message
    fn notify(&self, notice: Notice);

    /// Enable or disable the control for an action
    fn set_enabled(&self, action: Action, enabled: bool);

    /// Switch between the signed-in controls (with the owner's label) and the sign-in form
    fn show_session(&self, owner: Option<&Owner>);

    /// Make the editor editable or read-only
    fn set_editor_enabled(&self, enabled: bool);

    /// Clear the file picker so the same file can be picked again
    fn reset_file_input(&self);

    /// Update the window title
    fn set_title(&self, title: &str);
}
