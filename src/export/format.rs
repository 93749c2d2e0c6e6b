use std::fmt;

/// Target serialization format for an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Xml,
}

impl ExportFormat {
    /// Fixed default output filename for the format.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Text => "email_patterns.txt",
            Self::Json => "email_patterns.json",
            Self::Xml => "email_patterns.xml",
        }
    }

    /// Maps the interactive menu choice (`1`/`2`/`3`).
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Text),
            "2" => Some(Self::Json),
            "3" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Maps a `--format` flag value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Xml => "xml",
        })
    }
}
