//! The Alfred Script Filter: routes a query to a list of items.
//!
//! | Query                         | Items                                              |
//! |-------------------------------|----------------------------------------------------|
//! | *(empty)* / `<text>`          | non-empty workspaces matching the text             |
//! | `<workspace> [text]`          | windows on that workspace                          |
//! | `move [text]`                 | workspaces to move the focused window to           |
//! | `move-window <id> [text]`     | workspaces to move window `<id>` to                |
//! | `action[s] [<workspace>]`     | workspace picker, then that workspace's actions    |
//! | `arrange`                     | move / swap the focused window in each direction   |
//! | `help`, `keys`, `hotkeys`, …  | the main-mode key bindings                         |

use crate::action::{ActionKind, Direction};
use crate::aerospace::query::{
    list_windows, list_workspaces, main_bindings, Binding, QueryError, WindowEntry,
};
use crate::alfred::item::{Icon, Item, Modifier, Mods, ScriptFilter, Text, Variables};
use crate::icons::{now_secs, IconCache};
use crate::traits::{AppLocator, WindowManager};
use log::debug;
use std::collections::HashMap;

const HOTKEY_KEYWORDS: [&str; 6] = ["command", "commands", "hotkey", "hotkeys", "keys", "help"];

/// Errors that end the script filter with an error item.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Listing workspaces or windows failed.
    #[error("{0}")]
    Workspaces(QueryError),
    /// Reading the key bindings failed.
    #[error("{0}")]
    Bindings(QueryError),
}

impl FilterError {
    /// Title of the error item shown in place of results.
    pub fn title(&self) -> &'static str {
        match self {
            FilterError::Workspaces(_) => "AeroSpace workspace query failed",
            FilterError::Bindings(_) => "Failed to load AeroSpace keybindings",
        }
    }

    /// The document to print instead of results.
    pub fn to_document(&self) -> ScriptFilter {
        ScriptFilter::error(self.title(), self.to_string())
    }
}

/// What selecting a workspace item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode<'a> {
    /// Focus the workspace (⌘ / ⌥ move the focused window there).
    Browse,
    /// Move the focused window there (⌥ also follows it).
    MoveFocused,
    /// Move the given window there (⌥ also follows it).
    MoveWindow(&'a str),
}

/// Window counts and window lists per workspace name.
#[derive(Debug, Default)]
struct Inventory<'a> {
    workspaces: Vec<String>,
    counts: HashMap<String, usize>,
    windows: HashMap<&'a str, Vec<&'a WindowEntry>>,
}

impl<'a> Inventory<'a> {
    fn new(workspaces: Vec<String>, windows: &'a [WindowEntry]) -> Self {
        let mut counts: HashMap<String, usize> =
            workspaces.iter().map(|name| (name.clone(), 0)).collect();
        let mut by_workspace: HashMap<&'a str, Vec<&'a WindowEntry>> = HashMap::new();
        for window in windows.iter().filter(|w| !w.workspace.is_empty()) {
            *counts.entry(window.workspace.clone()).or_insert(0) += 1;
            by_workspace
                .entry(window.workspace.as_str())
                .or_default()
                .push(window);
        }
        Self {
            workspaces,
            counts,
            windows: by_workspace,
        }
    }

    fn contains(&self, workspace: &str) -> bool {
        self.workspaces.iter().any(|w| w == workspace)
    }

    fn count(&self, workspace: &str) -> usize {
        self.counts.get(workspace).copied().unwrap_or(0)
    }
}

/// Split off the first whitespace-separated token.
fn split_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest.trim())),
        None => Some((text, "")),
    }
}

fn matches(haystack: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || haystack.to_lowercase().contains(query_lower)
}

/// Run the script filter for `query` against `wm`.
///
/// Icon lookups go through `cache` and `locator`; the cache is flushed to
/// disk when a window listing resolved anything new.
pub fn run<W: WindowManager, L: AppLocator>(
    wm: &W,
    cache: &mut IconCache,
    locator: &L,
    query: &str,
) -> Result<ScriptFilter, FilterError> {
    let query = query.trim();
    let workspaces = list_workspaces(wm).map_err(FilterError::Workspaces)?;
    let windows = list_windows(wm).map_err(FilterError::Workspaces)?;
    let inventory = Inventory::new(workspaces, &windows);

    if let Some((first, rest)) = split_token(query) {
        debug!("routing query on {:?}", first);

        if HOTKEY_KEYWORDS.contains(&first) {
            let bindings = main_bindings(wm).map_err(FilterError::Bindings)?;
            return Ok(ScriptFilter::new(hotkey_items(&bindings, rest)));
        }

        if first == "move" {
            return Ok(ScriptFilter::new(workspace_items(
                &inventory,
                rest,
                true,
                Mode::MoveFocused,
                false,
            )));
        }

        if first == "move-window" {
            if let Some((window_id, filter)) = split_token(rest) {
                return Ok(ScriptFilter::new(workspace_items(
                    &inventory,
                    filter,
                    true,
                    Mode::MoveWindow(window_id),
                    false,
                )));
            }
        }

        if first == "action" || first == "actions" {
            if let Some((workspace, _)) = split_token(rest) {
                if inventory.contains(workspace) {
                    return Ok(ScriptFilter::new(workspace_action_items(workspace)));
                }
            }
            let items = workspace_items(&inventory, rest, true, Mode::Browse, false)
                .into_iter()
                .map(|mut item| {
                    item.subtitle = "Actions for this workspace".into();
                    item.autocomplete = item.arg.as_ref().map(|name| format!("action {} ", name));
                    item.valid = Some(false);
                    item
                })
                .collect();
            return Ok(ScriptFilter::new(items));
        }

        if first == "arrange" {
            return Ok(ScriptFilter::new(arrange_items()));
        }

        if inventory.contains(first) {
            let on_workspace = inventory.windows.get(first).cloned().unwrap_or_default();
            let items = window_items(first, &on_workspace, rest, cache, locator);
            cache.flush();
            return Ok(ScriptFilter::new(items));
        }
    }

    Ok(ScriptFilter::new(workspace_items(
        &inventory,
        query,
        false,
        Mode::Browse,
        true,
    )))
}

fn workspace_subtitle(count: usize) -> String {
    match count {
        0 => "empty".to_string(),
        1 => "1 window".to_string(),
        n => format!("{} windows", n),
    }
}

fn move_focused_follow(name: &str) -> Modifier {
    Modifier {
        subtitle: format!("Move focused window to workspace {} and follow", name),
        arg: name.to_string(),
        variables: Variables::action(ActionKind::MoveFocusedToWorkspaceFollow).workspace(name),
    }
}

fn workspace_items(
    inventory: &Inventory<'_>,
    query: &str,
    include_empty: bool,
    mode: Mode<'_>,
    autocomplete: bool,
) -> Vec<Item> {
    let query_lower = query.to_lowercase();
    inventory
        .workspaces
        .iter()
        .filter(|name| matches(name, &query_lower))
        .filter_map(|name| {
            let count = inventory.count(name);
            if count == 0 && !include_empty {
                return None;
            }

            let (variables, mods) = match mode {
                Mode::Browse => (
                    Variables::action(ActionKind::FocusWorkspace).workspace(name),
                    Mods {
                        cmd: Some(Modifier {
                            subtitle: format!("Move focused window to workspace {}", name),
                            arg: name.clone(),
                            variables: Variables::action(ActionKind::MoveFocusedToWorkspace)
                                .workspace(name),
                        }),
                        alt: Some(move_focused_follow(name)),
                    },
                ),
                Mode::MoveFocused => (
                    Variables::action(ActionKind::MoveFocusedToWorkspace).workspace(name),
                    Mods {
                        cmd: None,
                        alt: Some(move_focused_follow(name)),
                    },
                ),
                Mode::MoveWindow(window_id) => (
                    Variables::action(ActionKind::MoveWindowToWorkspace)
                        .workspace(name)
                        .window_id(window_id),
                    Mods {
                        cmd: None,
                        alt: Some(Modifier {
                            subtitle: format!("Move window to workspace {} and follow", name),
                            arg: name.clone(),
                            variables: Variables::action(ActionKind::MoveWindowToWorkspaceFollow)
                                .workspace(name)
                                .window_id(window_id),
                        }),
                    },
                ),
            };

            Some(Item {
                title: format!("Workspace {}", name),
                subtitle: workspace_subtitle(count),
                arg: Some(name.clone()),
                uid: Some(format!("workspace-{}", name)),
                autocomplete: autocomplete.then(|| format!("{} ", name)),
                variables: Some(variables),
                mods: Some(mods),
                ..Default::default()
            })
        })
        .collect()
}

fn window_items<L: AppLocator>(
    workspace: &str,
    windows: &[&WindowEntry],
    query: &str,
    cache: &mut IconCache,
    locator: &L,
) -> Vec<Item> {
    let query_lower = query.to_lowercase();
    let now = now_secs();
    let mut items = Vec::new();
    for window in windows {
        let app_name = if window.app_name.is_empty() {
            "Unknown App"
        } else {
            window.app_name.as_str()
        };
        let title = window.window_title.as_str();
        if !matches(&format!("{} {}", app_name, title), &query_lower) {
            continue;
        }

        let id = window.window_id.map(|id| id.to_string());
        let mut subtitle = if title.is_empty() { "Window" } else { app_name }.to_string();
        if let Some(id) = &id {
            subtitle = format!("{} - ID {}", subtitle, id);
        }
        let id_str = id.clone().unwrap_or_default();

        items.push(Item {
            title: if title.is_empty() { app_name } else { title }.to_string(),
            subtitle,
            arg: Some(id_str.clone()),
            uid: id.as_ref().map(|id| format!("window-{}", id)),
            autocomplete: id.as_ref().map(|id| format!("move-window {} ", id)),
            icon: cache
                .resolve(&window.app_bundle_id, locator, now)
                .map(Icon::file_icon),
            variables: Some(
                Variables::action(ActionKind::FocusWindow)
                    .workspace(workspace)
                    .window_id(&id_str),
            ),
            ..Default::default()
        });
    }
    items
}

fn workspace_action_items(workspace: &str) -> Vec<Item> {
    let actionable = |title: String, subtitle: &str, kind: ActionKind| Item {
        title,
        subtitle: subtitle.to_string(),
        arg: Some(workspace.to_string()),
        variables: Some(Variables::action(kind).workspace(workspace)),
        ..Default::default()
    };
    vec![
        actionable(
            format!("Focus workspace {}", workspace),
            "Switch to this workspace",
            ActionKind::FocusWorkspace,
        ),
        actionable(
            format!("Move focused window to {}", workspace),
            "Move focused window only",
            ActionKind::MoveFocusedToWorkspace,
        ),
        actionable(
            format!("Move focused window to {} and follow", workspace),
            "Move window and switch to destination",
            ActionKind::MoveFocusedToWorkspaceFollow,
        ),
        Item {
            title: format!("List windows in workspace {}", workspace),
            subtitle: "Drill into workspace windows".into(),
            autocomplete: Some(format!("{} ", workspace)),
            valid: Some(false),
            ..Default::default()
        },
    ]
}

fn arrange_items() -> Vec<Item> {
    let item = |title: String, subtitle: &str, kind: ActionKind, dir: Direction| Item {
        title,
        subtitle: subtitle.to_string(),
        arg: Some(dir.to_string()),
        variables: Some(Variables::action(kind).direction(dir)),
        ..Default::default()
    };
    let moves = Direction::ALL.into_iter().map(|dir| {
        item(
            format!("Move focused window {}", dir),
            "Reorder window within layout",
            ActionKind::MoveFocusedDirection,
            dir,
        )
    });
    let swaps = Direction::ALL.into_iter().map(|dir| {
        item(
            format!("Swap focused window {}", dir),
            "Swap with adjacent window",
            ActionKind::SwapFocusedDirection,
            dir,
        )
    });
    moves.chain(swaps).collect()
}

fn hotkey_items(bindings: &[Binding], query: &str) -> Vec<Item> {
    let query_lower = query.to_lowercase();
    bindings
        .iter()
        .filter(|b| matches(&format!("{} {}", b.command, b.hotkey), &query_lower))
        .map(|b| Item {
            title: b.command.clone(),
            subtitle: b.hotkey.clone(),
            arg: Some(b.hotkey.clone()),
            text: Some(Text {
                copy: b.hotkey.clone(),
                largetype: b.hotkey.clone(),
            }),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::CACHE_FILE_NAME;
    use crate::traits::mock::{MockLocator, MockWm};
    use serde_json::json;
    use std::path::PathBuf;

    const WORKSPACES: &str =
        r#"[{"workspace":"1"},{"workspace":"2"},{"workspace":"web"},{"workspace":"chat"}]"#;
    const WINDOWS: &str = "10\tcom.apple.Terminal\tTerminal\tzsh\t1\n\
                           11\tcom.apple.Safari\tSafari\tDocs\tweb\n\
                           12\tcom.apple.Safari\tSafari\t\tweb\n\
                           \t\t\tOrphan\tscratch\n";

    fn wm() -> MockWm {
        MockWm::default()
            .with_output("list-workspaces", WORKSPACES)
            .with_output("list-windows", WINDOWS)
            .with_output(
                "config",
                r#"{"alt-1":"workspace 1","alt-shift-1":"move-node-to-workspace 1","alt-h":"focus left"}"#,
            )
    }

    fn locator() -> MockLocator {
        let mut locator = MockLocator::default();
        locator.apps.insert(
            "com.apple.Safari".into(),
            PathBuf::from("/Applications/Safari.app"),
        );
        locator
    }

    fn filter(query: &str) -> ScriptFilter {
        let mut cache = IconCache::in_memory(100);
        run(&wm(), &mut cache, &locator(), query).unwrap()
    }

    fn titles(doc: &ScriptFilter) -> Vec<&str> {
        doc.items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn split_token_handles_extra_spaces() {
        assert_eq!(split_token("move-window   7  fo o"), Some(("move-window", "7  fo o")));
        assert_eq!(split_token("   "), None);
        assert_eq!(split_token("web"), Some(("web", "")));
        assert_eq!(split_token("  web\tdocs  "), Some(("web", "docs")));
    }

    #[test]
    fn empty_query_lists_occupied_workspaces() {
        let doc = filter("");
        assert_eq!(titles(&doc), vec!["Workspace 1", "Workspace web"]);
        let web = &doc.items[1];
        assert_eq!(web.subtitle, "2 windows");
        assert_eq!(doc.items[0].subtitle, "1 window");
        assert_eq!(web.autocomplete.as_deref(), Some("web "));
        assert_eq!(web.uid.as_deref(), Some("workspace-web"));
        assert_eq!(
            serde_json::to_value(web).unwrap()["variables"],
            json!({"action": "focus-workspace", "workspace": "web"})
        );
        let mods = web.mods.as_ref().unwrap();
        assert_eq!(
            mods.cmd.as_ref().unwrap().variables.action,
            Some(ActionKind::MoveFocusedToWorkspace)
        );
        assert_eq!(
            mods.alt.as_ref().unwrap().subtitle,
            "Move focused window to workspace web and follow"
        );
    }

    #[test]
    fn text_query_filters_workspaces_case_insensitively() {
        let doc = filter("WE");
        assert_eq!(titles(&doc), vec!["Workspace web"]);
        // Empty workspaces stay hidden in browse mode even when they match.
        assert!(filter("cha").items.is_empty());
    }

    #[test]
    fn workspace_name_lists_its_windows() {
        let doc = filter("web");
        assert_eq!(titles(&doc), vec!["Docs", "Safari"]);
        let docs = &doc.items[0];
        assert_eq!(docs.subtitle, "Safari - ID 11");
        assert_eq!(docs.arg.as_deref(), Some("11"));
        assert_eq!(docs.uid.as_deref(), Some("window-11"));
        assert_eq!(docs.autocomplete.as_deref(), Some("move-window 11 "));
        assert_eq!(
            docs.icon,
            Some(Icon::file_icon("/Applications/Safari.app"))
        );
        assert_eq!(
            serde_json::to_value(docs).unwrap()["variables"],
            json!({"action": "focus-window", "workspace": "web", "window_id": "11"})
        );
        assert_eq!(doc.items[1].subtitle, "Window - ID 12");
    }

    #[test]
    fn window_filter_matches_app_and_title() {
        assert_eq!(titles(&filter("web docs")), vec!["Docs"]);
        assert_eq!(titles(&filter("1 terminal zsh")), vec!["zsh"]);
        assert!(filter("1 safari").items.is_empty());
    }

    #[test]
    fn window_without_id_or_app() {
        let windows = vec![WindowEntry {
            window_title: "Orphan".into(),
            workspace: "scratch".into(),
            ..Default::default()
        }];
        let inventory = Inventory::new(vec!["scratch".into()], &windows);
        assert_eq!(inventory.count("scratch"), 1);
        let on_ws = inventory.windows.get("scratch").cloned().unwrap();
        let mut cache = IconCache::in_memory(100);
        let items = window_items("scratch", &on_ws, "", &mut cache, &MockLocator::default());
        assert_eq!(items[0].title, "Orphan");
        assert_eq!(items[0].subtitle, "Unknown App");
        assert_eq!(items[0].arg.as_deref(), Some(""));
        assert!(items[0].uid.is_none());
        assert!(items[0].icon.is_none());
    }

    #[test]
    fn unlisted_workspace_windows_are_counted_but_not_listed() {
        let windows = crate::aerospace::query::parse_windows(WINDOWS);
        let inventory = Inventory::new(vec!["1".into()], &windows);
        assert_eq!(inventory.count("scratch"), 1);
        assert!(!inventory.contains("scratch"));
    }

    #[test]
    fn move_lists_all_workspaces_for_focused_window() {
        let doc = filter("move");
        assert_eq!(
            titles(&doc),
            vec!["Workspace 1", "Workspace 2", "Workspace web", "Workspace chat"]
        );
        let chat = &doc.items[3];
        assert_eq!(chat.subtitle, "empty");
        assert!(chat.autocomplete.is_none());
        assert_eq!(
            chat.variables.as_ref().unwrap().action,
            Some(ActionKind::MoveFocusedToWorkspace)
        );
        let mods = chat.mods.as_ref().unwrap();
        assert!(mods.cmd.is_none());
        assert_eq!(
            mods.alt.as_ref().unwrap().variables.action,
            Some(ActionKind::MoveFocusedToWorkspaceFollow)
        );
        assert_eq!(titles(&filter("move ch")), vec!["Workspace chat"]);
    }

    #[test]
    fn move_window_carries_window_id() {
        let doc = filter("move-window 42 w");
        assert_eq!(titles(&doc), vec!["Workspace web"]);
        let item = serde_json::to_value(&doc.items[0]).unwrap();
        assert_eq!(
            item["variables"],
            json!({"action": "move-window-to-workspace", "workspace": "web", "window_id": "42"})
        );
        assert_eq!(
            item["mods"]["alt"]["variables"],
            json!({"action": "move-window-to-workspace-follow", "workspace": "web", "window_id": "42"})
        );
        assert_eq!(
            item["mods"]["alt"]["subtitle"],
            "Move window to workspace web and follow"
        );
    }

    #[test]
    fn move_window_without_id_falls_back_to_browse() {
        // "move-window" is neither a workspace nor a complete command, so it
        // is treated as a plain filter that matches nothing.
        assert!(filter("move-window").items.is_empty());
    }

    #[test]
    fn action_with_known_workspace_lists_actions() {
        let doc = filter("action 2");
        assert_eq!(
            titles(&doc),
            vec![
                "Focus workspace 2",
                "Move focused window to 2",
                "Move focused window to 2 and follow",
                "List windows in workspace 2",
            ]
        );
        assert_eq!(
            doc.items[2].variables.as_ref().unwrap().action,
            Some(ActionKind::MoveFocusedToWorkspaceFollow)
        );
        let list = &doc.items[3];
        assert_eq!(list.valid, Some(false));
        assert_eq!(list.autocomplete.as_deref(), Some("2 "));
        assert!(list.variables.is_none());
    }

    #[test]
    fn actions_without_workspace_offers_picker() {
        let doc = filter("actions");
        assert_eq!(doc.items.len(), 4);
        for item in &doc.items {
            assert_eq!(item.subtitle, "Actions for this workspace");
            assert_eq!(item.valid, Some(false));
            assert_eq!(
                item.autocomplete,
                Some(format!("action {} ", item.arg.as_deref().unwrap()))
            );
        }
        assert_eq!(titles(&filter("action c")), vec!["Workspace chat"]);
    }

    #[test]
    fn arrange_lists_moves_then_swaps() {
        let doc = filter("arrange");
        assert_eq!(doc.items.len(), 8);
        assert_eq!(doc.items[0].title, "Move focused window left");
        assert_eq!(doc.items[7].title, "Swap focused window down");
        assert_eq!(
            serde_json::to_value(&doc.items[4]).unwrap()["variables"],
            json!({"action": "swap-focused-direction", "direction": "left"})
        );
        assert_eq!(doc.items[4].arg.as_deref(), Some("left"));
    }

    #[test]
    fn hotkeys_are_listed_and_filtered() {
        let doc = filter("help");
        assert_eq!(doc.items.len(), 3);
        assert_eq!(doc.items[0].title, "workspace 1");
        assert_eq!(doc.items[0].subtitle, "alt-1");
        assert_eq!(
            doc.items[0].text,
            Some(Text {
                copy: "alt-1".into(),
                largetype: "alt-1".into(),
            })
        );
        assert_eq!(titles(&filter("keys shift")), vec!["move-node-to-workspace 1"]);
        assert_eq!(titles(&filter("hotkeys FOCUS")), vec!["focus left"]);
    }

    #[test]
    fn workspace_query_failure_is_an_error() {
        let wm = MockWm::default().with_output("list-windows", "");
        let mut cache = IconCache::in_memory(100);
        let err = run(&wm, &mut cache, &locator(), "").unwrap_err();
        assert_eq!(err.title(), "AeroSpace workspace query failed");
        let doc = serde_json::to_value(err.to_document()).unwrap();
        assert_eq!(doc["items"][0]["valid"], false);
    }

    #[test]
    fn binding_query_failure_is_an_error() {
        let wm = MockWm::default()
            .with_output("list-workspaces", WORKSPACES)
            .with_output("list-windows", WINDOWS);
        let mut cache = IconCache::in_memory(100);
        let err = run(&wm, &mut cache, &locator(), "commands").unwrap_err();
        assert_eq!(err.title(), "Failed to load AeroSpace keybindings");
    }

    #[test]
    fn window_listing_persists_new_icons_once() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CACHE_FILE_NAME);
        let locator = locator();

        let mut cache = IconCache::load(dir.path(), 100);
        run(&wm(), &mut cache, &locator, "web").unwrap();
        assert!(file.exists());

        // Same cache again: nothing new, so no rewrite.
        std::fs::remove_file(&file).unwrap();
        run(&wm(), &mut cache, &locator, "web").unwrap();
        assert!(!file.exists());
        assert_eq!(*locator.lookups.borrow(), vec!["com.apple.Safari".to_string()]);
    }

    #[test]
    fn fresh_entries_from_disk_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CACHE_FILE_NAME);
        let mut cache = IconCache::load(dir.path(), 100);
        run(&wm(), &mut cache, &locator(), "web").unwrap();

        let mut reloaded = IconCache::load(dir.path(), 100);
        std::fs::remove_file(&file).unwrap();
        let locator = locator();
        run(&wm(), &mut reloaded, &locator, "web").unwrap();
        assert!(!file.exists());
        assert!(locator.lookups.borrow().is_empty());
    }

    #[test]
    fn browsing_does_not_write_the_icon_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = IconCache::load(dir.path(), 100);
        run(&wm(), &mut cache, &locator(), "").unwrap();
        assert!(!dir.path().join(CACHE_FILE_NAME).exists());
    }

    #[test]
    fn disabled_icons_skip_lookups() {
        let locator = locator();
        let mut cache = IconCache::disabled();
        let doc = run(&wm(), &mut cache, &locator, "web").unwrap();
        assert!(doc.items.iter().all(|i| i.icon.is_none()));
        assert!(locator.lookups.borrow().is_empty());
    }
}
