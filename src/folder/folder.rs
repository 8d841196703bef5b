use std::fmt;

use crate::folder::RenderLines;

/// A single node of the tree: a name, its file labels and its child folders.
///
/// Both collections keep insertion order. Children are owned exclusively by
/// their parent, so the structure is always a strict tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    files: Vec<String>,
    subfolders: Vec<Folder>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Folder {
            name: name.into(),
            files: Vec::new(),
            subfolders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn subfolders(&self) -> &[Folder] {
        &self.subfolders
    }

    /// Appends a file label. Duplicates are kept.
    pub fn add_file(&mut self, label: impl Into<String>) {
        self.files.push(label.into());
    }

    /// Appends `child` as the last subfolder.
    ///
    /// No uniqueness or depth checks happen here, use
    /// [`FolderTree::add_subfolder_checked`](crate::folder::FolderTree::add_subfolder_checked)
    /// when the tree rules must hold.
    pub fn add_subfolder(&mut self, child: Folder) -> &mut Folder {
        self.subfolders.push(child);
        let last = self.subfolders.len() - 1;
        &mut self.subfolders[last]
    }

    /// Depth-first pre-order search starting with `self`.
    pub fn find(&self, name: &str) -> Option<&Folder> {
        if self.name == name {
            return Some(self);
        }
        self.subfolders.iter().find_map(|sf| sf.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Folder> {
        if self.name == name {
            return Some(self);
        }
        self.subfolders.iter_mut().find_map(|sf| sf.find_mut(name))
    }

    /// Number of files in this folder and every folder below it.
    pub fn count_files(&self) -> usize {
        self.files.len() + self.subfolders.iter().map(Folder::count_files).sum::<usize>()
    }

    /// Lazily renders this folder and its subtree, one line per item.
    ///
    /// Lines come out in pre-order: the folder itself, then its files, then
    /// each subfolder one indent level deeper.
    pub fn render(&self, indent: usize) -> RenderLines<'_> {
        RenderLines::new(self, indent)
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render(0) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
