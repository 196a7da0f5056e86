//! Numbered menu of the interactive shell.

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Complete,
    Delete,
    Export,
    Import,
    Exit,
}

impl MenuChoice {
    /// Display order; `Exit` is listed last but keyed `0`
    pub const ALL: [Self; 7] = [
        Self::View,
        Self::Add,
        Self::Complete,
        Self::Delete,
        Self::Export,
        Self::Import,
        Self::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            Self::View => '1',
            Self::Add => '2',
            Self::Complete => '3',
            Self::Delete => '4',
            Self::Export => '5',
            Self::Import => '6',
            Self::Exit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View Tasks",
            Self::Add => "Add Task",
            Self::Complete => "Complete Task",
            Self::Delete => "Delete Task",
            Self::Export => "Export Tasks",
            Self::Import => "Import Tasks",
            Self::Exit => "Exit",
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
