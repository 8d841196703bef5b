use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    #[snafu(display("A folder named '{}' already exists in the tree", name))]
    NameTaken { name: String },
    #[snafu(display(
        "Cannot add subfolder under '{}': depth {} would exceed max depth {}",
        parent,
        depth,
        max
    ))]
    DepthExceeded {
        parent: String,
        depth: usize,
        max: usize,
    },
    #[snafu(display("Folder '{}' not found", name))]
    NotFound { name: String },
}
