use std::path::PathBuf;

use iced::widget::text_editor;
use uuid::Uuid;

use crate::client::models::ui_state::InputMode;
use crate::client::services::submission::SubmissionResult;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    TabSelected(InputMode),
    // Upload tab
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    BrowseFile,
    FileLoaded { path: PathBuf, content: Result<Vec<u8>, String> },
    RemoveFile,
    SubmitFile,
    // Text tab
    EditorAction(text_editor::Action),
    ClearText,
    SubmitText,
    // Submission outcomes
    FileSubmitted(SubmissionResult),
    TextSubmitted(SubmissionResult),
    // Result panel and toasts
    ClearResponse,
    ExpireToasts,
    DismissToast(Uuid),
}
