use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Title used when no usable name can be derived from an upload
pub const DEFAULT_PROJECT_TITLE: &str = "New Project";

/// An uploaded file, referenced by path only. Contents are never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Final path component, or an empty string when the path has none
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub files: Vec<FileHandle>,
    pub created_at: DateTime<Local>,
}

impl Project {
    /// The project every session starts with
    pub fn seed(created_at: DateTime<Local>) -> Self {
        Self {
            id: "seed-1".to_string(),
            title: "Lot 243 – East Van".to_string(),
            files: Vec::new(),
            created_at,
        }
    }

    /// Build a project from an upload. Returns `None` for an empty file list.
    pub fn from_upload(files: Vec<FileHandle>, created_at: DateTime<Local>) -> Option<Self> {
        let first = files.first()?;
        let title = derive_title(&first.name());

        Some(Self {
            id: format!("p-{}", created_at.timestamp_millis()),
            title,
            files,
            created_at,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Strip a trailing extension (a final `.` followed by at least one other
/// character) from a file name. Only a nameless file gets
/// [`DEFAULT_PROJECT_TITLE`]; a name that is all extension (`.env`) leaves an
/// empty title.
pub fn derive_title(file_name: &str) -> String {
    if file_name.is_empty() {
        return DEFAULT_PROJECT_TITLE.to_string();
    }

    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => file_name[..idx].to_string(),
        _ => file_name.to_string(),
    }
}
