use derive_more::Display;
use snafu::Snafu;

use crate::folder::TreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LabelKind {
    #[display("file")]
    File,
    #[display("folder")]
    Folder,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ShellError {
    #[snafu(display("Cancelled: empty {} name.", kind))]
    EmptyLabel { kind: LabelKind },
    #[snafu(display("{}", source))]
    TreeError { source: TreeError },
    #[snafu(display("Failed to talk to the terminal"))]
    IoError { source: std::io::Error },
}

impl ShellError {
    /// Rejections are reported and the menu continues; only I/O failures end the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::IoError { .. })
    }
}
