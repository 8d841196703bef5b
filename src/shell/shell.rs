use std::io::{BufRead, Write};

use colored::Colorize;
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::{
    ext::LabelExt,
    folder::{DEFAULT_ROOT_NAME, FolderTree},
    shell::{
        Cursor, LabelKind, MenuChoice, ShellError,
        error::{EmptyLabelSnafu, IoSnafu, TreeSnafu},
    },
};

/// Writes `prompt` and reads one line. `None` means the input is exhausted.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, ShellError> {
    write!(output, "{prompt}").context(IoSnafu)?;
    output.flush().context(IoSnafu)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context(IoSnafu)?;
    Ok((read > 0).then_some(line))
}

/// Asks for the root folder name, falling back to [`DEFAULT_ROOT_NAME`].
pub fn prompt_root_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, ShellError> {
    let prompt = format!("Enter root folder name (default '{DEFAULT_ROOT_NAME}'): ");
    let line = read_line(input, output, &prompt)?;
    Ok(line
        .as_deref()
        .and_then(str::as_label)
        .unwrap_or(DEFAULT_ROOT_NAME)
        .to_string())
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    tree: FolderTree,
    cursor: Cursor,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(tree: FolderTree, input: R, output: W) -> Self {
        let cursor = Cursor::at_root(&tree);
        Shell {
            input,
            output,
            tree,
            cursor,
        }
    }

    pub fn into_tree(self) -> FolderTree {
        self.tree
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;
            let Some(line) = read_line(&mut self.input, &mut self.output, "Choose: ")? else {
                debug!("Input exhausted, leaving menu");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "{}", "Invalid choice.".yellow()).context(IoSnafu)?;
                continue;
            };
            debug!("Menu choice: {choice}");
            if choice == MenuChoice::Exit {
                break;
            }

            if let Err(err) = self.dispatch(choice) {
                if err.is_fatal() {
                    return Err(err);
                }
                warn!("Operation '{}' rejected: {}", choice, err);
                writeln!(self.output, "{}", err.to_string().as_str().red()).context(IoSnafu)?;
            }
        }

        writeln!(self.output, "Goodbye.").context(IoSnafu)
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\n{}", "--- MENU ---".bold()).context(IoSnafu)?;
        writeln!(self.output, "Current folder: {}", self.cursor.name().cyan()).context(IoSnafu)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}) {}", choice.key(), choice).context(IoSnafu)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ShellError> {
        match choice {
            MenuChoice::AddFile => self.add_file(),
            MenuChoice::AddSubfolder => self.add_subfolder(),
            MenuChoice::SelectFolder => self.select_folder(),
            MenuChoice::PrintCurrent => self.print_current(),
            MenuChoice::PrintTree => self.print_tree(),
            MenuChoice::CountFiles => self.count_files(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn read_label(&mut self, prompt: &str, kind: LabelKind) -> Result<String, ShellError> {
        let line = read_line(&mut self.input, &mut self.output, prompt)?;
        line.as_deref()
            .and_then(str::as_label)
            .map(str::to_string)
            .context(EmptyLabelSnafu { kind })
    }

    fn add_file(&mut self) -> Result<(), ShellError> {
        let label = self.read_label("File name: ", LabelKind::File)?;
        self.tree
            .add_file(self.cursor.name(), label.as_str())
            .context(TreeSnafu)?;
        writeln!(
            self.output,
            "{}",
            format!("Added file '{}' to folder '{}'.", label, self.cursor.name())
                .as_str()
                .green()
        )
        .context(IoSnafu)
    }

    fn add_subfolder(&mut self) -> Result<(), ShellError> {
        let name = self.read_label("Subfolder name: ", LabelKind::Folder)?;
        let added = self
            .tree
            .add_subfolder_checked(self.cursor.name(), &name)
            .context(TreeSnafu)?;
        let message = format!("Added subfolder '{}' under '{}'.", added.name(), self.cursor.name());
        writeln!(self.output, "{}", message.as_str().green()).context(IoSnafu)
    }

    fn select_folder(&mut self) -> Result<(), ShellError> {
        let name = self.read_label("Folder name to select: ", LabelKind::Folder)?;
        let selected = self.cursor.select(&self.tree, &name).context(TreeSnafu)?;
        writeln!(
            self.output,
            "Current folder is now '{}'.",
            selected.name().cyan()
        )
        .context(IoSnafu)
    }

    fn print_current(&mut self) -> Result<(), ShellError> {
        let current = self.cursor.resolve(&self.tree).context(TreeSnafu)?;
        writeln!(self.output, "\nCurrent folder structure:").context(IoSnafu)?;
        writeln!(self.output, "{current}").context(IoSnafu)
    }

    fn print_tree(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nEntire tree from root:").context(IoSnafu)?;
        writeln!(self.output, "{}", self.tree.root()).context(IoSnafu)
    }

    fn count_files(&mut self) -> Result<(), ShellError> {
        let current = self.cursor.resolve(&self.tree).context(TreeSnafu)?;
        writeln!(
            self.output,
            "Total files in '{}': {}",
            current.name(),
            current.count_files()
        )
        .context(IoSnafu)
    }
}
