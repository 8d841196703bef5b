use snafu::prelude::*;
use tracing::{debug, info};

use crate::folder::Folder;
use crate::folder::error::{DepthExceededSnafu, NameTakenSnafu, NotFoundSnafu, TreeError};

/// Deepest level a folder may sit at. The root is level 0.
pub const MAX_DEPTH: usize = 3;

pub const DEFAULT_ROOT_NAME: &str = "root";

/// A rooted folder tree enforcing the rules no single node can check alone:
/// folder names are unique across the whole tree and no folder is deeper
/// than [`MAX_DEPTH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTree {
    root: Folder,
}

impl Default for FolderTree {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_NAME)
    }
}

impl FolderTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Folder::new(root_name);
        debug!("Created tree with root '{}'", root.name());
        FolderTree { root }
    }

    pub fn root(&self) -> &Folder {
        &self.root
    }

    pub fn exists(&self, name: &str) -> bool {
        self.root.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Result<&Folder, TreeError> {
        self.root.find(name).context(NotFoundSnafu { name })
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Folder, TreeError> {
        self.root.find_mut(name).context(NotFoundSnafu { name })
    }

    /// Number of edges between the root and the folder called `name`.
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        let mut path = Vec::new();
        if Self::track_path(&self.root, name, &mut path) {
            Some(path.len() - 1)
        } else {
            None
        }
    }

    /// Pushes each visited folder onto `path` and pops it again when the
    /// search backtracks, so on success `path` holds exactly root..=target.
    fn track_path<'a>(node: &'a Folder, name: &str, path: &mut Vec<&'a str>) -> bool {
        path.push(node.name());
        if node.name() == name {
            return true;
        }
        for child in node.subfolders() {
            if Self::track_path(child, name, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    pub fn add_file(&mut self, folder: &str, label: impl Into<String>) -> Result<(), TreeError> {
        let label = label.into();
        let target = self.find_mut(folder)?;
        info!("Added file '{}' to folder '{}'", label, target.name());
        target.add_file(label);
        Ok(())
    }

    /// Creates a new empty folder `name` under `parent`.
    ///
    /// Rejected with [`TreeError::NameTaken`] if `name` is used anywhere in
    /// the tree, [`TreeError::NotFound`] if `parent` does not exist and
    /// [`TreeError::DepthExceeded`] if the new folder would sit below
    /// [`MAX_DEPTH`]. A rejected call leaves the tree untouched.
    pub fn add_subfolder_checked(
        &mut self,
        parent: &str,
        name: &str,
    ) -> Result<&Folder, TreeError> {
        ensure!(!self.exists(name), NameTakenSnafu { name });

        let depth = self.depth_of(parent).context(NotFoundSnafu { name: parent })? + 1;
        ensure!(
            depth <= MAX_DEPTH,
            DepthExceededSnafu {
                parent,
                depth,
                max: MAX_DEPTH,
            }
        );

        let parent_folder = self.find_mut(parent)?;
        info!("Added subfolder '{}' under '{}'", name, parent_folder.name());
        Ok(parent_folder.add_subfolder(Folder::new(name)))
    }
}
