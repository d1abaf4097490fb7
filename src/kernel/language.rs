use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageId {
    Html,
    Css,
    Scss,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Vue,
    Python,
    Go,
    Rust,
    PlainText,
}

impl LanguageId {
    /// Picks the language from a file name's extension; unknown names are plain text.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::PlainText;
        };
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "scss" => Self::Scss,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            "json" => Self::Json,
            "md" | "markdown" => Self::Markdown,
            "vue" => Self::Vue,
            "py" => Self::Python,
            "go" => Self::Go,
            "rs" => Self::Rust,
            _ => Self::PlainText,
        }
    }

    /// Mode name understood by the editing surface. Vue single-file
    /// components are edited in html mode.
    pub fn editor_mode(self) -> &'static str {
        match self {
            Self::Html | Self::Vue => "html",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Scss => "SCSS",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Vue => "Vue",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::PlainText => "Plain Text",
        }
    }
}

pub fn language_for_name(name: &str) -> &'static str {
    LanguageId::from_name(name).editor_mode()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
