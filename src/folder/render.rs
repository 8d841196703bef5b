use std::slice;

use crate::folder::Folder;

const INDENT: &str = "    ";
const FOLDER_ICON: &str = "📁";

/// Pre-order line iterator over a folder subtree.
///
/// Produced by [`Folder::render`]. Nothing is buffered beyond one stack frame
/// per open folder, and cloning the iterator restarts from the same position.
#[derive(Debug, Clone)]
pub struct RenderLines<'a> {
    stack: Vec<Frame<'a>>,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    folder: &'a Folder,
    indent: usize,
    header_emitted: bool,
    files: slice::Iter<'a, String>,
    subfolders: slice::Iter<'a, Folder>,
}

impl<'a> Frame<'a> {
    fn new(folder: &'a Folder, indent: usize) -> Self {
        Frame {
            folder,
            indent,
            header_emitted: false,
            files: folder.files().iter(),
            subfolders: folder.subfolders().iter(),
        }
    }
}

impl<'a> RenderLines<'a> {
    pub(crate) fn new(folder: &'a Folder, indent: usize) -> Self {
        RenderLines {
            stack: vec![Frame::new(folder, indent)],
        }
    }
}

impl Iterator for RenderLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let pad = INDENT.repeat(frame.indent);

            if !frame.header_emitted {
                frame.header_emitted = true;
                return Some(format!("{pad}{FOLDER_ICON} {}", frame.folder.name()));
            }
            if let Some(file) = frame.files.next() {
                return Some(format!("{pad}{INDENT}- {file}"));
            }
            if let Some(child) = frame.subfolders.next() {
                let indent = frame.indent + 1;
                self.stack.push(Frame::new(child, indent));
                continue;
            }
            self.stack.pop();
        }
    }
}
