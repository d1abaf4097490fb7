//! Preview composition: entry-file contents in, one renderable document out.
//!
//! Composition is a pure function of [`PreviewInputs`]. A markup entry that is
//! already a document (doctype or `<html>`) gets the stylesheet and script
//! injected in place; anything else is treated as a body fragment and wrapped
//! in a synthesized shell.

use memchr::memmem;
use regex::Regex;
use std::sync::OnceLock;

/// `sandbox` attribute for the frame that renders a composed document.
pub const SANDBOX_POLICY: &str = "allow-scripts";

const GUARD_LABEL: &str = "Preview Error:";

const RESET_CSS: &str = "    * { margin: 0; padding: 0; box-sizing: border-box; }\n    body { font-family: system-ui, -apple-system, sans-serif; }\n";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewInputs {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

impl PreviewInputs {
    pub fn new(
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            stylesheet: stylesheet.into(),
            script: script.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    FullDocument,
    Fragment,
}

pub fn composition_mode(markup: &str) -> CompositionMode {
    let lower = markup.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    if memmem::find(bytes, b"<!doctype").is_some() {
        return CompositionMode::FullDocument;
    }
    if find_tag(bytes, b"<html").is_some() {
        CompositionMode::FullDocument
    } else {
        CompositionMode::Fragment
    }
}

/// First offset of `tag` that ends at a tag-name boundary, so `</head` does
/// not match `</header>` and `<body` does not match `<bodyguard>`.
fn find_tag(haystack: &[u8], tag: &[u8]) -> Option<usize> {
    memmem::find_iter(haystack, tag).find(|&at| {
        matches!(
            haystack.get(at + tag.len()),
            None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
        )
    })
}

pub fn compose_document(inputs: &PreviewInputs) -> String {
    match composition_mode(&inputs.markup) {
        CompositionMode::FullDocument => compose_full_document(inputs),
        CompositionMode::Fragment => compose_fragment(inputs),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Block {
    // applied first at a shared offset, so it ends up after the style block
    Script,
    Style,
}

fn compose_full_document(inputs: &PreviewInputs) -> String {
    let mut document = strip_linked_entries(&inputs.markup);
    let lower = document.to_ascii_lowercase();
    let find = |tag: &str| find_tag(lower.as_bytes(), tag.as_bytes());

    let mut insertions: Vec<(usize, Block, String)> = Vec::with_capacity(2);
    if !inputs.stylesheet.is_empty() {
        let at = find("</head")
            .or_else(|| find("<body"))
            .unwrap_or(document.len());
        insertions.push((at, Block::Style, style_block(&inputs.stylesheet)));
    }
    if !inputs.script.is_empty() {
        let at = find("</body").unwrap_or(document.len());
        insertions.push((at, Block::Script, guarded_script(&inputs.script)));
    }

    // back to front so earlier offsets stay valid
    insertions.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (at, _, block) in insertions {
        document.insert_str(at, &block);
    }
    document
}

fn compose_fragment(inputs: &PreviewInputs) -> String {
    let mut out = String::with_capacity(
        inputs.markup.len() + inputs.stylesheet.len() + inputs.script.len() + 512,
    );
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str("  <style>\n");
    out.push_str(RESET_CSS);
    out.push_str(&escape_closing_tag(&inputs.stylesheet, style_close()));
    out.push_str("\n  </style>\n</head>\n<body>\n");
    out.push_str(&inputs.markup);
    out.push('\n');
    out.push_str(&guarded_script(&inputs.script));
    out.push_str("\n</body>\n</html>\n");
    out
}

fn style_block(css: &str) -> String {
    format!("<style>{}</style>", escape_closing_tag(css, style_close()))
}

/// Wraps user script so a thrown error is logged inside the frame instead of
/// aborting the rest of the document.
pub fn guarded_script(js: &str) -> String {
    format!(
        "<script>\ntry {{\n{}\n}} catch (e) {{\n  console.error('{GUARD_LABEL}', e);\n}}\n</script>",
        escape_closing_tag(js, script_close())
    )
}

/// Removes `<link>`/`<script src>` tags that reference the stylesheet or
/// script entries, which are inlined instead.
pub fn strip_linked_entries(markup: &str) -> String {
    let without_links = linked_stylesheet().replace_all(markup, "");
    linked_script().replace_all(&without_links, "").into_owned()
}

fn escape_closing_tag(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, "<\\/$1").into_owned()
}

// The patterns below are fixed literals covered by unit tests, so the
// `expect` on first compile cannot fire on user input.
fn linked_stylesheet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<link\b[^>]*\bhref\s*=\s*["'](?:\./)?(?:styles|style)\.css["'][^>]*>"#)
            .expect("valid stylesheet link pattern")
    })
}

fn linked_script() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)<script\b[^>]*\bsrc\s*=\s*["'](?:\./)?(?:script|main|app)\.js["'][^>]*>\s*</script\s*>"#,
        )
        .expect("valid script src pattern")
    })
}

fn style_close() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</(style)").expect("valid style close pattern"))
}

fn script_close() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</(script)").expect("valid script close pattern"))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/preview/compose.rs"]
mod tests;
