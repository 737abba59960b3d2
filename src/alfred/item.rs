//! Serde types for the subset of the Script Filter JSON format we emit.

use crate::action::{ActionKind, Direction};
use serde::Serialize;

/// The whole document printed by a script filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

impl ScriptFilter {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// A document with a single non-actionable row describing a failure.
    pub fn error(title: &str, subtitle: impl Into<String>) -> Self {
        Self::new(vec![Item {
            title: title.to_string(),
            subtitle: subtitle.into(),
            valid: Some(false),
            ..Default::default()
        }])
    }
}

/// One row in Alfred's result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    /// `Some(false)` makes the row non-actionable; `None` leaves Alfred's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
}

/// Workflow variables attached to an item or modifier.
///
/// The field names are the environment variable names the dispatcher reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Variables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Variables {
    pub fn action(action: ActionKind) -> Self {
        Self {
            action: Some(action),
            ..Default::default()
        }
    }

    pub fn workspace(mut self, workspace: &str) -> Self {
        self.workspace = Some(workspace.to_string());
        self
    }

    pub fn window_id(mut self, window_id: &str) -> Self {
        self.window_id = Some(window_id.to_string());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// Alternative behaviour when a modifier key is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    pub subtitle: String,
    pub arg: String,
    pub variables: Variables,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<Modifier>,
}

/// An item icon taken from a file's Finder icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

impl Icon {
    pub fn file_icon(path: impl Into<String>) -> Self {
        Self {
            kind: "fileicon".into(),
            path: path.into(),
        }
    }
}

/// Text used for copy (⌘C) and Large Type (⌘L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub copy: String,
    pub largetype: String,
}
