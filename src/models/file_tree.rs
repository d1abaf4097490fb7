//! File tree built from a project's flat record list.
//!
//! The tree is rebuilt from scratch whenever the record list changes; nodes are
//! never patched in place. Siblings are ordered folders first, then by name
//! (byte-wise, so the order is stable across locales), ties keep record order.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use slotmap::{new_key_type, SlotMap};
use std::cmp::Ordering;

use super::file_record::{FileId, FileRecord};

new_key_type! { struct NodeId; }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTreeNode {
    pub id: FileId,
    pub name: String,
    pub path: String,
    pub is_folder: bool,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileTreeNode>>,
}

impl FileTreeNode {
    pub fn kind(&self) -> NodeKind {
        if self.is_folder {
            NodeKind::Folder
        } else {
            NodeKind::File
        }
    }

    pub fn children(&self) -> &[FileTreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug)]
struct Slot {
    id: FileId,
    name: String,
    path: String,
    is_folder: bool,
    content: String,
    children: Vec<NodeId>,
}

impl Slot {
    fn from_record(record: &FileRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            path: record.path.clone(),
            is_folder: record.is_folder,
            content: record.content.clone(),
            children: Vec::new(),
        }
    }
}

pub fn compare_entries(a_folder: bool, a_name: &str, b_folder: bool, b_name: &str) -> Ordering {
    b_folder.cmp(&a_folder).then_with(|| a_name.cmp(b_name))
}

/// Builds the explorer tree. Never fails: a record whose parent is missing,
/// is not a folder, or would close a cycle is placed at the root.
pub fn build_file_tree(records: &[FileRecord]) -> Vec<FileTreeNode> {
    let mut order: Vec<&FileRecord> = records.iter().collect();
    order.sort_by(|a, b| compare_entries(a.is_folder, &a.name, b.is_folder, &b.name));

    // Both maps keep the first folder per path in sorted order, so cycle
    // checks walk the same edges that nodes are attached along.
    let mut folder_parent: FxHashMap<&str, Option<&str>> = FxHashMap::default();
    for record in order.iter().filter(|r| r.is_folder) {
        folder_parent
            .entry(record.path.as_str())
            .or_insert_with(|| record.parent());
    }

    let mut arena: SlotMap<NodeId, Slot> = SlotMap::with_key();
    let mut folder_ids: FxHashMap<&str, NodeId> = FxHashMap::default();
    let mut placed: Vec<(NodeId, Option<&str>)> = Vec::with_capacity(order.len());

    for record in &order {
        let id = arena.insert(Slot::from_record(record));
        if record.is_folder {
            folder_ids.entry(record.path.as_str()).or_insert(id);
        }
        let parent = record
            .parent()
            .filter(|parent| folder_parent.contains_key(parent))
            .filter(|parent| !closes_cycle(&folder_parent, &record.path, parent));
        placed.push((id, parent));
    }

    let ids: Vec<NodeId> = placed.iter().map(|(id, _)| *id).collect();
    let mut roots = Vec::new();
    for (id, parent) in placed {
        match parent.and_then(|p| folder_ids.get(p).copied()) {
            Some(parent_id) if parent_id != id => arena[parent_id].children.push(id),
            _ => roots.push(id),
        }
    }

    let mut tree: Vec<FileTreeNode> = roots
        .into_iter()
        .filter_map(|id| materialize(&mut arena, id))
        .collect();

    // anything not reachable from a root still gets a node
    if !arena.is_empty() {
        for id in ids {
            if let Some(node) = materialize(&mut arena, id) {
                tracing::debug!(path = %node.path, "unreachable record placed at root");
                tree.push(node);
            }
        }
        tree.sort_by(|a, b| compare_entries(a.is_folder, &a.name, b.is_folder, &b.name));
    }
    tree
}

fn closes_cycle(folder_parent: &FxHashMap<&str, Option<&str>>, path: &str, parent: &str) -> bool {
    let mut current = Some(parent);
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    while let Some(p) = current {
        if p == path || !seen.insert(p) {
            return true;
        }
        current = folder_parent.get(p).copied().flatten();
    }
    false
}

fn materialize(arena: &mut SlotMap<NodeId, Slot>, id: NodeId) -> Option<FileTreeNode> {
    let slot = arena.remove(id)?;
    let children = if slot.is_folder {
        Some(
            slot.children
                .into_iter()
                .filter_map(|child| materialize(arena, child))
                .collect(),
        )
    } else {
        None
    };
    Some(FileTreeNode {
        id: slot.id,
        name: slot.name,
        path: slot.path,
        is_folder: slot.is_folder,
        content: slot.content,
        children,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub path: String,
    pub name: String,
    pub depth: u16,
    pub is_folder: bool,
    pub is_expanded: bool,
}

/// Explorer view state that survives tree rebuilds: which folders are open.
#[derive(Debug, Clone, Default)]
pub struct ExplorerTree {
    nodes: Vec<FileTreeNode>,
    expanded: FxHashSet<String>,
}

impl ExplorerTree {
    pub fn new(nodes: Vec<FileTreeNode>) -> Self {
        Self {
            nodes,
            expanded: FxHashSet::default(),
        }
    }

    pub fn nodes(&self) -> &[FileTreeNode] {
        &self.nodes
    }

    /// Swaps in a freshly built tree, forgetting folders that no longer exist.
    pub fn replace(&mut self, nodes: Vec<FileTreeNode>) {
        let mut folders = FxHashSet::default();
        collect_folders(&nodes, &mut folders);
        self.expanded.retain(|path| folders.contains(path));
        self.nodes = nodes;
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle_expand(&mut self, path: &str) -> bool {
        if !self.is_folder(path) {
            return false;
        }
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
        true
    }

    pub fn expand(&mut self, path: &str) -> bool {
        self.is_folder(path) && self.expanded.insert(path.to_string())
    }

    pub fn collapse(&mut self, path: &str) -> bool {
        self.expanded.remove(path)
    }

    /// Opens every folder on the way to `path`.
    pub fn reveal(&mut self, path: &str) -> bool {
        let mut changed = false;
        let mut end = 0;
        while let Some(offset) = path[end..].find('/') {
            end += offset;
            changed |= self.expand(&path[..end]);
            end += 1;
        }
        changed
    }

    pub fn find(&self, path: &str) -> Option<&FileTreeNode> {
        let mut stack: Vec<&FileTreeNode> = self.nodes.iter().collect();
        while let Some(node) = stack.pop() {
            if node.path == path {
                return Some(node);
            }
            stack.extend(node.children());
        }
        None
    }

    fn is_folder(&self, path: &str) -> bool {
        self.find(path).is_some_and(|n| n.is_folder)
    }

    pub fn flatten_for_view(&self) -> Vec<FileTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(&FileTreeNode, u16)> =
            self.nodes.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            let is_expanded = node.is_folder && self.expanded.contains(&node.path);
            result.push(FileTreeRow {
                path: node.path.clone(),
                name: node.name.clone(),
                depth,
                is_folder: node.is_folder,
                is_expanded,
            });
            if is_expanded {
                for child in node.children().iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }

        result
    }
}

fn collect_folders(nodes: &[FileTreeNode], out: &mut FxHashSet<String>) {
    for node in nodes.iter().filter(|n| n.is_folder) {
        out.insert(node.path.clone());
        collect_folders(node.children(), out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
