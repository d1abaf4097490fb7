//! Entry-file selection: which project files feed the preview.

use crate::models::ProjectFiles;

use super::compose::PreviewInputs;

pub const MARKUP_ENTRY: &str = "index.html";
pub const STYLESHEET_ENTRIES: [&str; 2] = ["styles.css", "style.css"];
pub const SCRIPT_ENTRIES: [&str; 3] = ["script.js", "main.js", "app.js"];

/// Paths of the chosen entry files, first match wins per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFiles {
    pub markup: Option<String>,
    pub stylesheet: Option<String>,
    pub script: Option<String>,
}

impl EntryFiles {
    pub fn select(files: &ProjectFiles) -> Self {
        Self {
            markup: first_existing(files, &[MARKUP_ENTRY]),
            stylesheet: first_existing(files, &STYLESHEET_ENTRIES),
            script: first_existing(files, &SCRIPT_ENTRIES),
        }
    }

    /// Reads each entry through `content`, which must yield the current
    /// (unsaved-over-persisted) text of a path. Missing entries read as "".
    pub fn resolve<'a, F>(&self, content: F) -> PreviewInputs
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let read = |path: &Option<String>| {
            path.as_deref()
                .and_then(&content)
                .unwrap_or_default()
                .to_string()
        };
        PreviewInputs {
            markup: read(&self.markup),
            stylesheet: read(&self.stylesheet),
            script: read(&self.script),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        [&self.markup, &self.stylesheet, &self.script]
            .iter()
            .any(|p| p.as_deref() == Some(path))
    }
}

fn first_existing(files: &ProjectFiles, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| files.files_named(name).first().map(|r| r.path.clone()))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/preview/entry.rs"]
mod tests;
