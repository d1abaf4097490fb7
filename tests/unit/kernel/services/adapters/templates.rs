use super::*;
use crate::kernel::preview::{compose_document, EntryFiles};
use crate::models::{build_file_tree, FileId, FileRecord, ProjectFiles};
use chrono::Utc;

fn materialize(records: Vec<NewFileRecord>) -> Vec<FileRecord> {
    records
        .into_iter()
        .map(|r| FileRecord {
            id: FileId::new(r.path.clone()),
            project_id: r.project_id,
            name: r.name,
            path: r.path,
            content: r.content,
            is_folder: r.is_folder,
            parent_path: r.parent_path,
            updated_at: Utc::now(),
        })
        .collect()
}

#[test]
fn parse_known_and_unknown_names() {
    assert_eq!(TemplateKind::parse("nextjs"), TemplateKind::NextJs);
    assert_eq!(TemplateKind::parse("Vite-Vue"), TemplateKind::ViteVue);
    assert_eq!(TemplateKind::parse("static"), TemplateKind::Static);
    assert_eq!(TemplateKind::parse("svelte"), TemplateKind::Static);
    for kind in TemplateKind::ALL {
        assert_eq!(TemplateKind::parse(kind.name()), kind);
    }
}

#[test]
fn every_template_is_valid_and_folders_come_first() {
    let project = ProjectId::new("p1");
    for kind in TemplateKind::ALL {
        let records = template_files(kind, &project);
        assert!(!records.is_empty());
        for (i, record) in records.iter().enumerate() {
            assert!(record.validate().is_ok(), "{kind:?}: {}", record.path);
            if let Some(parent) = record.parent_path.as_deref() {
                assert!(
                    records[..i].iter().any(|r| r.is_folder && r.path == parent),
                    "{kind:?}: {} precedes its folder",
                    record.path
                );
            }
        }
    }
}

#[test]
fn template_file_sets() {
    let project = ProjectId::new("p1");
    let paths = |kind: TemplateKind| -> Vec<String> {
        template_files(kind, &project)
            .into_iter()
            .map(|r| r.path)
            .collect()
    };
    assert_eq!(
        paths(TemplateKind::NextJs),
        ["pages", "pages/index.js", "styles", "styles/globals.css", "package.json"]
    );
    assert_eq!(
        paths(TemplateKind::ViteVue),
        ["src", "src/App.vue", "src/main.js", "index.html", "package.json", "vite.config.js"]
    );
    assert_eq!(
        paths(TemplateKind::Static),
        ["index.html", "styles.css", "script.js"]
    );
}

#[test]
fn static_template_previews_with_inlined_assets() {
    let records = materialize(template_files(TemplateKind::Static, &ProjectId::new("p1")));
    assert_eq!(build_file_tree(&records).len(), 3);

    let files = ProjectFiles::new(records);
    let inputs = EntryFiles::select(&files).resolve(|p| files.content(p));
    let document = compose_document(&inputs);
    assert!(!document.contains("href=\"styles.css\""));
    assert!(!document.contains("src=\"script.js\""));
    assert!(document.contains("<style>"));
    assert!(document.contains("cta-button"));
}
