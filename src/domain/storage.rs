//! File-manager entities: a hierarchical tree of folders and files owned by
//! the external storage collaborator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{FileId, FolderId};

/// An entry in a folder listing. Folders and files are the only two kinds;
/// consumers match exhaustively instead of comparing type strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageEntry {
    Folder(FolderSummary),
    File(StoredFile),
}

impl StorageEntry {
    pub fn name(&self) -> &str {
        match self {
            StorageEntry::Folder(folder) => &folder.name,
            StorageEntry::File(file) => &file.name,
        }
    }

    pub fn parent(&self) -> Option<&FolderId> {
        match self {
            StorageEntry::Folder(folder) => folder.parent.as_ref(),
            StorageEntry::File(file) => file.parent.as_ref(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, StorageEntry::Folder(_))
    }
}

/// A folder node. `parent == None` means the folder sits at the root.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FolderSummary {
    pub id: FolderId,
    pub name: String,
    pub parent: Option<FolderId>,
}

/// A stored file with its download location.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredFile {
    pub id: FileId,
    pub name: String,
    pub parent: Option<FolderId>,
    pub url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// One segment of the folder navigation trail. The root crumb carries no
/// identifier.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Breadcrumb {
    pub id: Option<FolderId>,
    pub name: String,
}

impl Breadcrumb {
    /// The root of the file manager, shown as "Home".
    pub fn home() -> Self {
        Self {
            id: None,
            name: "Home".to_string(),
        }
    }
}

impl From<FolderSummary> for Breadcrumb {
    fn from(folder: FolderSummary) -> Self {
        Self {
            id: Some(folder.id),
            name: folder.name,
        }
    }
}
