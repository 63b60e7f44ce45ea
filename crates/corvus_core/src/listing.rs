use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listing entry is a plain file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One entry of the content listing.
///
/// `path` is relative to the content root and slash-separated on every
/// platform. Directories always report a size of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl ContentNode {
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// The materialized listing of the content root, in the shape the listing
/// endpoint returns verbatim: `{"success":true,"content":[..],"totalFiles":n}`.
///
/// `total_files` counts file entries only; directories never contribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub success: bool,
    pub content: Vec<ContentNode>,
    pub total_files: usize,
}

impl ContentSnapshot {
    pub fn new(content: Vec<ContentNode>, total_files: usize) -> Self {
        Self {
            success: true,
            content,
            total_files,
        }
    }
}
