//! In-memory folder tree.
//!
//! A tree is a single root [`Folder`] owning its files and nested subfolders.
//! Structural mutation lives on the node itself, while the rules that span the
//! whole tree (unique names, maximum depth) are enforced by [`FolderTree`].

mod error;
mod folder;
mod render;
mod tree;

pub use error::TreeError;
pub use folder::Folder;
pub use render::RenderLines;
pub use tree::{DEFAULT_ROOT_NAME, FolderTree, MAX_DEPTH};
