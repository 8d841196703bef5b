use derive_more::Display;

/// One entry of the main menu, keyed by the digit the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MenuChoice {
    #[display("Add file")]
    AddFile,
    #[display("Add subfolder")]
    AddSubfolder,
    #[display("Select folder")]
    SelectFolder,
    #[display("Print current folder structure")]
    PrintCurrent,
    #[display("Print entire tree from root")]
    PrintTree,
    #[display("Count total files in current folder")]
    CountFiles,
    #[display("Exit")]
    Exit,
}

impl MenuChoice {
    /// Menu order as printed, `Exit` last.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddFile,
        MenuChoice::AddSubfolder,
        MenuChoice::SelectFolder,
        MenuChoice::PrintCurrent,
        MenuChoice::PrintTree,
        MenuChoice::CountFiles,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            MenuChoice::AddFile => '1',
            MenuChoice::AddSubfolder => '2',
            MenuChoice::SelectFolder => '3',
            MenuChoice::PrintCurrent => '4',
            MenuChoice::PrintTree => '5',
            MenuChoice::CountFiles => '6',
            MenuChoice::Exit => '0',
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}
