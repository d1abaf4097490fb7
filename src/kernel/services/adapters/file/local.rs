//! Local directories as projects: import a directory tree as file records and
//! write records back out to disk.

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::models::{FileId, FileRecord, NewFileRecord, ProjectId};

/// Walks `root` (skipping hidden and git-ignored entries) and returns one record
/// per file or folder, parents before children. Files that are not valid UTF-8
/// are imported with empty content.
pub fn import_directory(root: &Path, project: &ProjectId) -> io::Result<Vec<FileRecord>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        ));
    }

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        if entry.depth() == 0 {
            continue;
        }
        let Some(rel) = relative_key(root, entry.path()) else {
            continue;
        };
        let is_folder = entry.file_type().is_some_and(|t| t.is_dir());
        let metadata = entry.metadata().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let content = if is_folder {
            String::new()
        } else {
            match fs::read(entry.path()) {
                Ok(bytes) => String::from_utf8(bytes).unwrap_or_else(|_| {
                    tracing::debug!(path = %rel, "binary file imported without content");
                    String::new()
                }),
                Err(e) => {
                    tracing::warn!(path = %rel, error = %e, "skipping unreadable file");
                    continue;
                }
            }
        };
        let (parent_path, name) = match rel.rsplit_once('/') {
            Some((parent, name)) => (Some(parent.to_string()), name.to_string()),
            None => (None, rel.clone()),
        };
        let updated_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        records.push(FileRecord {
            id: FileId::new(rel.clone()),
            project_id: project.clone(),
            name,
            path: rel,
            content,
            is_folder,
            parent_path,
            updated_at,
        });
    }

    tracing::info!(root = %root.display(), count = records.len(), "directory imported");
    Ok(records)
}

/// Writes folders and files under `root`. Returns the number of files written.
pub fn write_records(root: &Path, records: &[NewFileRecord]) -> io::Result<usize> {
    fs::create_dir_all(root)?;
    let mut written = 0;
    for record in records {
        let target = safe_join(root, &record.path)?;
        if record.is_folder {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &record.content)?;
        written += 1;
    }
    Ok(written)
}

fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<_>>()?;
    (!parts.is_empty()).then(|| parts.join("/"))
}

fn safe_join(root: &Path, rel: &str) -> io::Result<PathBuf> {
    let mut out = root.to_path_buf();
    for part in rel.split('/').filter(|p| !p.is_empty()) {
        if part == "." || part == ".." || Path::new(part).is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to write outside the project: {rel}"),
            ));
        }
        out.push(part);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
