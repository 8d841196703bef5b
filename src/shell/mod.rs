//! Interactive menu shell driving a [`FolderTree`](crate::folder::FolderTree).
//!
//! The shell owns the tree and the "current folder" cursor. The cursor is a
//! folder name that is looked up again every time it is used.

mod cursor;
mod error;
mod menu;
mod shell;

pub use cursor::Cursor;
pub use error::{LabelKind, ShellError};
pub use menu::MenuChoice;
pub use shell::{Shell, prompt_root_name};
