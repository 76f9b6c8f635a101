// UI selectors and per-tab form state
use std::path::Path;

use crate::client::utils::file_info::{format_file_size, AcceptedFileType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Upload,
    Text,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Upload => "Upload de Arquivo",
            InputMode::Text => "Digitar Texto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Pending,
    Resolved,
    Rejected,
}

/// File picked in the upload tab, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub file_type: AcceptedFileType,
    pub content: Vec<u8>,
}

impl SelectedFile {
    /// Builds a selection from a path on disk; `None` for unsupported types.
    pub fn from_parts(path: &Path, content: Vec<u8>) -> Option<Self> {
        let file_type = AcceptedFileType::from_path(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("email.{}", file_type.extension()));
        Some(Self { name, file_type, content })
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn formatted_size(&self) -> String {
        format_file_size(self.size())
    }

    /// Soft hint only: the form shows a warning but still allows submitting.
    pub fn exceeds_size_hint(&self, max_mb: u64) -> bool {
        self.size() > max_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file: Option<SelectedFile>,
    pub dragging: bool,
}

impl UploadForm {
    /// Drops of anything other than plain text or PDF are ignored.
    pub fn accept_drop(&mut self, path: &Path, content: Vec<u8>) -> bool {
        self.dragging = false;
        match SelectedFile::from_parts(path, content) {
            Some(file) => {
                self.file = Some(file);
                true
            }
            None => false,
        }
    }

    pub fn remove_file(&mut self) {
        self.file = None;
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextForm {
    pub text: String,
}

impl TextForm {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
