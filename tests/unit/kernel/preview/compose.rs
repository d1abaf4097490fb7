use super::*;

const DOC: &str = "<!DOCTYPE html><html><head></head><body></body></html>";

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_mode_detection() {
    assert_eq!(composition_mode(DOC), CompositionMode::FullDocument);
    assert_eq!(
        composition_mode("<!doctype html><p>x</p>"),
        CompositionMode::FullDocument
    );
    assert_eq!(
        composition_mode("<HTML lang=\"en\"><body></body></HTML>"),
        CompositionMode::FullDocument
    );
    assert_eq!(composition_mode("<p>hi</p>"), CompositionMode::Fragment);
    assert_eq!(composition_mode(""), CompositionMode::Fragment);
    // a custom element whose name starts with "html" is not a document
    assert_eq!(
        composition_mode("<html-viewer></html-viewer>"),
        CompositionMode::Fragment
    );
}

#[test]
fn test_full_document_injects_style_and_script() {
    let out = compose_document(&PreviewInputs::new(DOC, "body{color:red}", "console.log(1)"));

    assert!(out.contains("<style>body{color:red}</style></head>"));
    let guarded = guarded_script("console.log(1)");
    assert!(out.contains(&format!("{guarded}</body>")));
    assert!(guarded.contains("try {"));
    assert!(guarded.contains("console.error('Preview Error:', e);"));
    assert!(out.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_full_document_style_falls_back_to_body_tag() {
    let markup = "<html><body class=\"x\"><p>a</p></body></html>";
    let out = compose_document(&PreviewInputs::new(markup, "p{}", ""));
    assert_eq!(
        out,
        "<html><style>p{}</style><body class=\"x\"><p>a</p></body></html>"
    );
}

#[test]
fn test_header_element_is_not_a_head_anchor() {
    let markup = "<!DOCTYPE html><html><body><header>Top</header><p>x</p></body></html>";
    let out = compose_document(&PreviewInputs::new(markup, "h1{color:red}", ""));
    assert_eq!(
        out,
        "<!DOCTYPE html><html><style>h1{color:red}</style><body><header>Top</header><p>x</p></body></html>"
    );
}

#[test]
fn test_body_anchor_needs_tag_boundary() {
    let markup = "<html><bodyguard></bodyguard><body>x</body></html>";
    let out = compose_document(&PreviewInputs::new(markup, "a{}", ""));
    let style_at = out.find("<style>").unwrap();
    assert!(out[style_at..].starts_with("<style>a{}</style><body>"));
    assert!(out.find("<bodyguard>").unwrap() < style_at);
}

#[test]
fn test_closing_head_with_whitespace_is_an_anchor() {
    let markup = "<!DOCTYPE html><head><title>t</title></head ><body></body>";
    let out = compose_document(&PreviewInputs::new(markup, "a{}", ""));
    assert!(out.contains("</title><style>a{}</style></head >"));
}

#[test]
fn test_fixed_patterns_compile() {
    assert!(linked_stylesheet().is_match("<link href=\"style.css\">"));
    assert!(linked_script().is_match("<script src=\"app.js\"></script>"));
    assert!(style_close().is_match("</STYLE>"));
    assert!(script_close().is_match("</script>"));
}

#[test]
fn test_full_document_without_anchors_appends() {
    let markup = "<!DOCTYPE html><p>a</p>";
    let out = compose_document(&PreviewInputs::new(markup, "p{}", "go()"));
    let style_at = out.find("<style>p{}</style>").unwrap();
    let script_at = out.find("<script>").unwrap();
    assert!(out[..style_at].ends_with("<p>a</p>"));
    assert!(style_at < script_at);
    assert!(out.ends_with("</script>"));
}

#[test]
fn test_full_document_anchor_search_ignores_case() {
    let markup = "<!DOCTYPE html><HTML><HEAD></HEAD><BODY></BODY></HTML>";
    let out = compose_document(&PreviewInputs::new(markup, "a{}", "b()"));
    assert!(out.contains("<style>a{}</style></HEAD>"));
    assert!(out.contains("</script></BODY>"));
}

#[test]
fn test_full_document_skips_empty_inputs() {
    let out = compose_document(&PreviewInputs::new(DOC, "", ""));
    assert_eq!(out, DOC);
}

#[test]
fn test_fragment_shell() {
    let out = compose_document(&PreviewInputs::new("<p>hi</p>", "body{color:red}", "console.log(1)"));

    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("<meta charset=\"UTF-8\">"));
    assert!(out.contains("<meta name=\"viewport\""));
    assert!(out.contains("box-sizing: border-box;"));

    let style_open = out.find("<style>").unwrap();
    let style_close = out.find("</style>").unwrap();
    let css_at = out.find("body{color:red}").unwrap();
    assert!(style_open < css_at && css_at < style_close);

    let body_at = out.find("<body>").unwrap();
    let markup_at = out.find("<p>hi</p>").unwrap();
    let script_at = out.find(&guarded_script("console.log(1)")).unwrap();
    assert!(body_at < markup_at && markup_at < script_at);
    assert!(script_at < out.find("</body>").unwrap());
}

#[test]
fn test_fragment_always_has_script_block() {
    let out = compose_document(&PreviewInputs::new("<p>x</p>", "", ""));
    assert_eq!(count(&out, "<script>"), 1);
}

#[test]
fn test_linked_stylesheet_is_replaced_by_inline() {
    let markup = "<!DOCTYPE html><html><head><link rel=\"stylesheet\" href=\"styles.css\"></head><body></body></html>";
    let out = compose_document(&PreviewInputs::new(markup, "h1{}", ""));

    assert!(!out.contains("<link"));
    assert_eq!(count(&out, "<style>"), 1);
    assert!(out.contains("<style>h1{}</style></head>"));
}

#[test]
fn test_strip_handles_variants() {
    let markup = concat!(
        "<LINK href='./style.css' rel=stylesheet>",
        "<link href=\"theme.css\" rel=\"stylesheet\">",
        "<script src=\"main.js\"></script>",
        "<script type=\"module\" src='./app.js'>\n</script>",
        "<script src=\"vendor.js\"></script>",
    );
    let out = strip_linked_entries(markup);
    assert_eq!(
        out,
        "<link href=\"theme.css\" rel=\"stylesheet\"><script src=\"vendor.js\"></script>"
    );
}

#[test]
fn test_linked_script_not_double_included() {
    let markup = "<html><body><script src=\"script.js\"></script></body></html>";
    let out = compose_document(&PreviewInputs::new(markup, "", "run()"));
    assert_eq!(count(&out, "<script"), 1);
    assert!(out.contains("run()"));
}

#[test]
fn test_user_code_cannot_close_blocks_early() {
    let out = compose_document(&PreviewInputs::new(
        "<p>x</p>",
        "a::after{content:'</style>'}",
        "let s = '</SCRIPT>';",
    ));
    assert_eq!(count(&out, "</style>"), 1);
    assert_eq!(count(&out.to_ascii_lowercase(), "</script>"), 1);
    assert!(out.contains("<\\/style>"));
    assert!(out.contains("<\\/SCRIPT>"));
}
