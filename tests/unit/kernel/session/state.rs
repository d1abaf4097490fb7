use super::*;
use crate::models::FileId;
use chrono::Utc;

fn record(path: &str, is_folder: bool, content: &str) -> FileRecord {
    let (parent, name) = match path.rsplit_once('/') {
        Some((parent, name)) => (Some(parent.to_string()), name),
        None => (None, path),
    };
    FileRecord {
        id: FileId::new(format!("id-{path}")),
        project_id: ProjectId::new("p1"),
        name: name.to_string(),
        path: path.to_string(),
        content: content.to_string(),
        is_folder,
        parent_path: parent,
        updated_at: Utc::now(),
    }
}

fn session() -> SessionState {
    let mut state = SessionState::new(ProjectId::new("p1"));
    state.replace_files(vec![
        record("src", true, ""),
        record("src/app.js", false, "let a = 1;"),
        record("index.html", false, "<p>hi</p>"),
        record("styles.css", false, "p{}"),
    ]);
    state
}

fn paths(state: &SessionState) -> Vec<&str> {
    state.tabs().iter().map(|t| t.path.as_str()).collect()
}

#[test]
fn test_open_same_path_twice_yields_one_tab() {
    let mut state = session();
    assert!(state.open_file("index.html"));
    assert!(state.open_file("styles.css"));
    assert!(state.open_file("index.html"));
    assert!(!state.open_file("index.html"));

    assert_eq!(paths(&state), ["index.html", "styles.css"]);
    assert_eq!(state.active_path(), Some("index.html"));
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_open_folder_or_unknown_is_noop() {
    let mut state = session();
    assert!(!state.open_file("src"));
    assert!(!state.open_file("missing.txt"));
    assert!(state.tabs().is_empty());
    assert_eq!(state.active_path(), None);
}

#[test]
fn test_tab_carries_name_and_language() {
    let mut state = session();
    state.open_file("src/app.js");
    let tab = state.active_tab().unwrap();
    assert_eq!(tab.name, "app.js");
    assert_eq!(tab.language(), "javascript");
    assert!(!tab.is_modified);
}

#[test]
fn test_edit_then_resolve_returns_pending() {
    let mut state = session();
    state.open_file("index.html");
    assert!(state.edit("index.html", "<p>bye</p>".to_string()));

    assert_eq!(state.resolve_content("index.html"), Some("<p>bye</p>"));
    assert!(state.tab("index.html").unwrap().is_modified);
    assert!(state.can_save("index.html"));
    // untouched files fall back to persisted content
    assert_eq!(state.resolve_content("styles.css"), Some("p{}"));
    assert_eq!(state.resolve_content("nope"), None);
}

#[test]
fn test_edit_requires_active_tab() {
    let mut state = session();
    assert!(!state.edit("index.html", "x".to_string()));

    state.open_file("index.html");
    state.open_file("styles.css");
    assert!(!state.edit("index.html", "x".to_string()));
    assert_eq!(state.unsaved_count(), 0);
}

#[test]
fn test_latest_edit_wins_and_reverting_clears_modified() {
    let mut state = session();
    state.open_file("styles.css");
    state.edit("styles.css", "a{}".to_string());
    state.edit("styles.css", "b{}".to_string());
    assert_eq!(state.unsaved("styles.css"), Some("b{}"));

    assert!(state.edit("styles.css", "p{}".to_string()));
    assert_eq!(state.unsaved("styles.css"), None);
    assert!(!state.tab("styles.css").unwrap().is_modified);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_close_discards_edit_and_activates_last() {
    let mut state = session();
    state.open_file("index.html");
    state.open_file("styles.css");
    state.open_file("src/app.js");
    state.set_active("index.html");
    state.edit("index.html", "changed".to_string());

    assert!(state.close_tab("index.html"));
    assert_eq!(paths(&state), ["styles.css", "src/app.js"]);
    assert_eq!(state.active_path(), Some("src/app.js"));
    assert_eq!(state.unsaved("index.html"), None);
    assert_eq!(state.resolve_content("index.html"), Some("<p>hi</p>"));
    assert!(!state.close_tab("index.html"));
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut state = session();
    state.open_file("index.html");
    state.open_file("styles.css");
    state.open_file("src/app.js");
    state.set_active("styles.css");

    state.close_tab("index.html");
    assert_eq!(state.active_path(), Some("styles.css"));

    state.close_tab("styles.css");
    state.close_tab("src/app.js");
    assert_eq!(state.active_path(), None);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_next_and_prev_wrap() {
    let mut state = session();
    assert!(!state.next_tab());
    state.open_file("index.html");
    assert!(!state.next_tab());
    state.open_file("styles.css");

    assert!(state.next_tab());
    assert_eq!(state.active_path(), Some("index.html"));
    assert!(state.prev_tab());
    assert_eq!(state.active_path(), Some("styles.css"));
}

#[test]
fn test_close_tabs_under_folder() {
    let mut state = session();
    state.open_file("src/app.js");
    state.open_file("index.html");
    assert!(state.close_tabs_under("src"));
    assert_eq!(paths(&state), ["index.html"]);
    assert!(!state.close_tabs_under("src"));
}

#[test]
fn test_reload_updates_names_and_settles_edits() {
    let mut state = session();
    state.open_file("index.html");
    state.edit("index.html", "<p>new</p>".to_string());
    state.open_file("styles.css");
    state.edit("styles.css", "q{}".to_string());
    let before = state.files_version();

    let mut renamed = record("index.html", false, "<p>new</p>");
    renamed.name = "Index.html".to_string();
    state.replace_files(vec![renamed, record("styles.css", false, "p{}")]);

    assert!(state.files_version() > before);
    assert_eq!(state.tab("index.html").unwrap().name, "Index.html");
    assert!(!state.is_modified("index.html"));
    assert_eq!(state.unsaved("styles.css"), Some("q{}"));
    assert!(state.check_invariants().is_ok());
}

#[test]
fn test_apply_saved_keeps_newer_edit() {
    let mut state = session();
    state.open_file("styles.css");
    state.edit("styles.css", "a{}".to_string());
    state.begin_save("styles.css");
    assert!(state.is_saving("styles.css"));
    state.edit("styles.css", "b{}".to_string());

    state.finish_save("styles.css");
    state.apply_saved("styles.css", "a{}", record("styles.css", false, "a{}"));
    assert!(!state.is_saving("styles.css"));
    assert_eq!(state.unsaved("styles.css"), Some("b{}"));
    assert_eq!(state.files().content("styles.css"), Some("a{}"));
}
