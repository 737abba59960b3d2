//! Typed wrappers for the AeroSpace queries the script filter needs.

use crate::traits::WindowManager;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// `list-windows` format string; one tab-separated line per window.
pub const WINDOW_FORMAT: &str =
    "%{window-id}\t%{app-bundle-id}\t%{app-name}\t%{window-title}\t%{workspace}";

/// Errors from querying AeroSpace or decoding its answer.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The window manager could not be invoked or failed.
    #[error("{0}")]
    WindowManager(String),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One window as reported by `list-windows`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowEntry {
    /// AeroSpace window id; `None` when the field was empty or not numeric.
    pub window_id: Option<u32>,
    pub app_bundle_id: String,
    pub app_name: String,
    pub window_title: String,
    pub workspace: String,
}

/// Subset of the JSON object returned by `list-workspaces --json`.
#[derive(Deserialize)]
struct WorkspaceJson {
    #[serde(default)]
    workspace: Option<String>,
}

/// One hotkey of the main binding mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub hotkey: String,
    pub command: String,
}

fn capture<W: WindowManager>(wm: &W, args: &[&str]) -> Result<String, QueryError> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    wm.capture(&args)
        .map_err(|e| QueryError::WindowManager(e.to_string()))
}

/// Names of all workspaces, in AeroSpace's order.
pub fn list_workspaces<W: WindowManager>(wm: &W) -> Result<Vec<String>, QueryError> {
    let json = capture(wm, &["list-workspaces", "--all", "--json"])?;
    let workspaces = parse_workspaces(&json)?;
    debug!("{} workspace(s)", workspaces.len());
    Ok(workspaces)
}

/// Every window on every workspace.
pub fn list_windows<W: WindowManager>(wm: &W) -> Result<Vec<WindowEntry>, QueryError> {
    let raw = capture(wm, &["list-windows", "--all", "--format", WINDOW_FORMAT])?;
    let windows = parse_windows(&raw);
    debug!("{} window(s)", windows.len());
    Ok(windows)
}

/// The hotkeys of the `main` binding mode.
pub fn main_bindings<W: WindowManager>(wm: &W) -> Result<Vec<Binding>, QueryError> {
    let json = capture(wm, &["config", "--get", "mode.main.binding", "--json"])?;
    parse_bindings(&json)
}

/// Collect the `workspace` names, skipping entries without one.
pub fn parse_workspaces(json: &str) -> Result<Vec<String>, QueryError> {
    let entries: Vec<WorkspaceJson> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .filter_map(|e| e.workspace)
        .filter(|name| !name.is_empty())
        .collect())
}

/// Parse `list-windows` output formatted with [`WINDOW_FORMAT`].
///
/// Blank lines are skipped and short lines are padded with empty fields.
/// The title is the fourth of at most five fields, so tabs inside the last
/// field stay part of the workspace name.
pub fn parse_windows(raw: &str) -> Vec<WindowEntry> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.splitn(5, '\t');
            let mut next = || parts.next().unwrap_or("").to_string();
            let id = next();
            WindowEntry {
                window_id: id.trim().parse().ok(),
                app_bundle_id: next(),
                app_name: next(),
                window_title: next(),
                workspace: next(),
            }
        })
        .collect()
}

/// Parse the `mode.main.binding` object into hotkey/command pairs.
///
/// String commands are used verbatim, command lists are joined with `"; "`
/// and anything else is rendered as compact JSON.
pub fn parse_bindings(json: &str) -> Result<Vec<Binding>, QueryError> {
    let map: serde_json::Map<String, Value> = serde_json::from_str(json)?;
    Ok(map
        .into_iter()
        .map(|(hotkey, value)| Binding {
            hotkey,
            command: render_command(&value),
        })
        .collect())
}

fn render_command(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
