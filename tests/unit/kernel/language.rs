use super::*;

#[test]
fn from_name_maps_editor_extensions() {
    let cases = [
        ("index.html", LanguageId::Html),
        ("styles.css", LanguageId::Css),
        ("theme.scss", LanguageId::Scss),
        ("app.js", LanguageId::JavaScript),
        ("App.jsx", LanguageId::JavaScript),
        ("main.ts", LanguageId::TypeScript),
        ("page.tsx", LanguageId::TypeScript),
        ("package.json", LanguageId::Json),
        ("README.md", LanguageId::Markdown),
        ("App.vue", LanguageId::Vue),
        ("main.py", LanguageId::Python),
        ("main.go", LanguageId::Go),
        ("lib.rs", LanguageId::Rust),
        ("INDEX.HTML", LanguageId::Html),
    ];
    for (name, expected) in cases {
        assert_eq!(LanguageId::from_name(name), expected, "{name}");
    }
}

#[test]
fn unknown_or_missing_extension_is_plain_text() {
    assert_eq!(LanguageId::from_name("Makefile"), LanguageId::PlainText);
    assert_eq!(LanguageId::from_name("notes.txt"), LanguageId::PlainText);
    assert_eq!(language_for_name(".gitignore"), "plaintext");
}

#[test]
fn vue_is_edited_as_html() {
    assert_eq!(language_for_name("App.vue"), "html");
    assert_eq!(LanguageId::Vue.display_name(), "Vue");
}
