use crate::folder::{Folder, FolderTree, TreeError};

/// Name of the folder the user is working in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    name: String,
}

impl Cursor {
    pub fn at_root(tree: &FolderTree) -> Self {
        Cursor {
            name: tree.root().name().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve<'t>(&self, tree: &'t FolderTree) -> Result<&'t Folder, TreeError> {
        tree.find(&self.name)
    }

    /// Moves the cursor to `name`. The cursor stays put if no such folder exists.
    pub fn select<'t>(
        &mut self,
        tree: &'t FolderTree,
        name: &str,
    ) -> Result<&'t Folder, TreeError> {
        let folder = tree.find(name)?;
        self.name = folder.name().to_string();
        Ok(folder)
    }
}
