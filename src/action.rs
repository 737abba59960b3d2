//! The action vocabulary shared by the dispatcher and the script filter.
//!
//! [`ActionKind`] names every action the workflow knows about; its kebab-case
//! spelling (`"focus-workspace"`, …) is what Alfred passes around in the
//! `action` variable.  An [`ActionRequest`] holds the raw, possibly empty
//! inputs of one invocation and [`ActionRequest::validate`] turns it into a
//! typed [`Action`] that can be rendered to an `aerospace` argument list.

use serde::Serialize;
use std::fmt;

/// Direction for in-layout moves and swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the arrange list presents them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse a direction string (case-insensitive, surrounding whitespace ignored).
    pub fn parse(s: &str) -> Option<Direction> {
        let normalized: String = s.trim().chars().flat_map(|c| c.to_lowercase()).collect();
        match normalized.as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Every action name the dispatcher recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    FocusWorkspace,
    MoveFocusedToWorkspace,
    MoveFocusedToWorkspaceFollow,
    MoveWindowToWorkspace,
    MoveWindowToWorkspaceFollow,
    MoveFocusedDirection,
    SwapFocusedDirection,
    FocusWindow,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::FocusWorkspace,
        ActionKind::MoveFocusedToWorkspace,
        ActionKind::MoveFocusedToWorkspaceFollow,
        ActionKind::MoveWindowToWorkspace,
        ActionKind::MoveWindowToWorkspaceFollow,
        ActionKind::MoveFocusedDirection,
        ActionKind::SwapFocusedDirection,
        ActionKind::FocusWindow,
    ];

    /// The wire name Alfred uses for this action.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::FocusWorkspace => "focus-workspace",
            ActionKind::MoveFocusedToWorkspace => "move-focused-to-workspace",
            ActionKind::MoveFocusedToWorkspaceFollow => "move-focused-to-workspace-follow",
            ActionKind::MoveWindowToWorkspace => "move-window-to-workspace",
            ActionKind::MoveWindowToWorkspaceFollow => "move-window-to-workspace-follow",
            ActionKind::MoveFocusedDirection => "move-focused-direction",
            ActionKind::SwapFocusedDirection => "swap-focused-direction",
            ActionKind::FocusWindow => "focus-window",
        }
    }

    /// Look up an action by its exact wire name.
    pub fn from_name(name: &str) -> Option<ActionKind> {
        ActionKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The parameter the positional argument fills for this action.
    pub fn primary_parameter(self) -> Parameter {
        match self {
            ActionKind::FocusWorkspace
            | ActionKind::MoveFocusedToWorkspace
            | ActionKind::MoveFocusedToWorkspaceFollow
            | ActionKind::MoveWindowToWorkspace
            | ActionKind::MoveWindowToWorkspaceFollow => Parameter::Workspace,
            ActionKind::MoveFocusedDirection | ActionKind::SwapFocusedDirection => {
                Parameter::Direction
            }
            ActionKind::FocusWindow => Parameter::WindowId,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An input an action may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Action,
    Workspace,
    WindowId,
    Direction,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Action => write!(f, "action"),
            Parameter::Workspace => write!(f, "workspace"),
            Parameter::WindowId => write!(f, "window id"),
            Parameter::Direction => write!(f, "direction"),
        }
    }
}

/// Reasons a request cannot be turned into an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// A required input was absent or blank.
    #[error("missing {0}")]
    MissingParameter(Parameter),
    /// The action name matched nothing in [`ActionKind::ALL`].
    #[error("unknown action: {0}")]
    UnknownAction(String),
    /// The direction was present but not one of left/right/up/down.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
}

/// Raw inputs of a single invocation.
///
/// Every field may be absent or empty; nothing is checked until
/// [`validate`](ActionRequest::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: Option<String>,
    /// The positional argument (Alfred's `{query}`).
    pub arg: Option<String>,
    pub workspace: Option<String>,
    pub window_id: Option<String>,
    pub direction: Option<String>,
}

/// A value counts as present when it is non-empty after trimming.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ActionRequest {
    /// Named value for `param`, ignoring the positional argument.
    fn named(&self, param: Parameter) -> Option<&str> {
        match param {
            Parameter::Action => present(&self.action),
            Parameter::Workspace => present(&self.workspace),
            Parameter::WindowId => present(&self.window_id),
            Parameter::Direction => present(&self.direction),
        }
    }

    /// Resolve `param` for `kind`: the positional argument fills the
    /// primary parameter, the named value is the fallback.
    fn require(&self, kind: ActionKind, param: Parameter) -> Result<String, ActionError> {
        let positional = if kind.primary_parameter() == param {
            present(&self.arg)
        } else {
            None
        };
        positional
            .or_else(|| self.named(param))
            .map(str::to_string)
            .ok_or(ActionError::MissingParameter(param))
    }

    fn require_direction(&self, kind: ActionKind) -> Result<Direction, ActionError> {
        let raw = self.require(kind, Parameter::Direction)?;
        Direction::parse(&raw).ok_or(ActionError::InvalidDirection(raw))
    }

    /// Check the action name and every parameter it needs.
    ///
    /// Nothing is executed; the result can be dispatched or inspected.
    pub fn validate(&self) -> Result<Action, ActionError> {
        let name = self
            .named(Parameter::Action)
            .ok_or(ActionError::MissingParameter(Parameter::Action))?;
        let kind =
            ActionKind::from_name(name).ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

        let action = match kind {
            ActionKind::FocusWorkspace => Action::FocusWorkspace {
                workspace: self.require(kind, Parameter::Workspace)?,
            },
            ActionKind::MoveFocusedToWorkspace | ActionKind::MoveFocusedToWorkspaceFollow => {
                Action::MoveFocusedToWorkspace {
                    workspace: self.require(kind, Parameter::Workspace)?,
                    follow: kind == ActionKind::MoveFocusedToWorkspaceFollow,
                }
            }
            ActionKind::MoveWindowToWorkspace | ActionKind::MoveWindowToWorkspaceFollow => {
                let window_id = self.require(kind, Parameter::WindowId)?;
                Action::MoveWindowToWorkspace {
                    window_id,
                    workspace: self.require(kind, Parameter::Workspace)?,
                    follow: kind == ActionKind::MoveWindowToWorkspaceFollow,
                }
            }
            ActionKind::MoveFocusedDirection => Action::MoveFocused(self.require_direction(kind)?),
            ActionKind::SwapFocusedDirection => Action::SwapFocused(self.require_direction(kind)?),
            ActionKind::FocusWindow => Action::FocusWindow {
                window_id: self.require(kind, Parameter::WindowId)?,
            },
        };
        Ok(action)
    }
}

/// A validated action with exactly the inputs it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch to `workspace`.
    FocusWorkspace { workspace: String },

    /// Move the focused window to `workspace`, optionally following it.
    MoveFocusedToWorkspace { workspace: String, follow: bool },

    /// Move the window `window_id` to `workspace`, optionally following it.
    MoveWindowToWorkspace {
        window_id: String,
        workspace: String,
        follow: bool,
    },

    /// Move the focused window within the layout.
    MoveFocused(Direction),

    /// Swap the focused window with its neighbour.
    SwapFocused(Direction),

    /// Focus the window `window_id`.
    FocusWindow { window_id: String },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::FocusWorkspace { .. } => ActionKind::FocusWorkspace,
            Action::MoveFocusedToWorkspace { follow: false, .. } => {
                ActionKind::MoveFocusedToWorkspace
            }
            Action::MoveFocusedToWorkspace { follow: true, .. } => {
                ActionKind::MoveFocusedToWorkspaceFollow
            }
            Action::MoveWindowToWorkspace { follow: false, .. } => {
                ActionKind::MoveWindowToWorkspace
            }
            Action::MoveWindowToWorkspace { follow: true, .. } => {
                ActionKind::MoveWindowToWorkspaceFollow
            }
            Action::MoveFocused(_) => ActionKind::MoveFocusedDirection,
            Action::SwapFocused(_) => ActionKind::SwapFocusedDirection,
            Action::FocusWindow { .. } => ActionKind::FocusWindow,
        }
    }

    /// The `aerospace` argument list (without the binary) for this action.
    pub fn argv(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();
        match self {
            Action::FocusWorkspace { workspace } => {
                args.push("workspace".into());
                args.push(workspace.clone());
            }
            Action::MoveFocusedToWorkspace { workspace, follow } => {
                args.push("move-node-to-workspace".into());
                if *follow {
                    args.push("--focus-follows-window".into());
                }
                args.push(workspace.clone());
            }
            Action::MoveWindowToWorkspace {
                window_id,
                workspace,
                follow,
            } => {
                args.push("move-node-to-workspace".into());
                if *follow {
                    args.push("--focus-follows-window".into());
                }
                args.push("--window-id".into());
                args.push(window_id.clone());
                args.push(workspace.clone());
            }
            Action::MoveFocused(dir) => {
                args.push("move".into());
                args.push(dir.to_string());
            }
            Action::SwapFocused(dir) => {
                args.push("swap".into());
                args.push(dir.to_string());
            }
            Action::FocusWindow { window_id } => {
                args.push("focus".into());
                args.push("--window-id".into());
                args.push(window_id.clone());
            }
        }
        args
    }
}
