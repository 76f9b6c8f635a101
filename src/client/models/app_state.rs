use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use iced::Command;

use crate::client::config::ClientConfig;
use crate::client::models::analysis::AnalysisResult;
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{InputMode, TextForm, UploadForm};
use crate::client::services::analysis_api::AnalysisApi;
use crate::client::services::notification::{Notifier, ToastQueue};
use crate::client::services::query_cache::{QueryClient, ANALYSIS_QUERY_TAG};
use crate::client::services::submission::{FilePayload, FileSubmitter, SubmissionResult, TextSubmitter};
use crate::client::utils::file_info::{pick_email_file, AcceptedFileType};

/// Everything the home screen shows, plus the two submission lanes.
pub struct ClassifierAppState {
    pub active_tab: InputMode,
    pub upload_form: UploadForm,
    pub text_form: TextForm,
    /// Latest analysis; replaced on every success, never touched by failures.
    pub response: Option<AnalysisResult>,
    pub analyses_completed: u64,
    pub max_upload_mb: u64,
    pub toast_duration: Duration,
    pub toasts: Arc<ToastQueue>,
    pub queries: Arc<QueryClient>,
    pub file_submitter: FileSubmitter,
    pub text_submitter: TextSubmitter,
}

impl ClassifierAppState {
    pub fn new(api: Arc<dyn AnalysisApi>, config: &ClientConfig) -> Self {
        let toasts = Arc::new(ToastQueue::new());
        let queries = Arc::new(QueryClient::new());
        Self {
            active_tab: InputMode::default(),
            upload_form: UploadForm::default(),
            text_form: TextForm::default(),
            response: None,
            analyses_completed: 0,
            max_upload_mb: config.max_upload_mb,
            toast_duration: config.toast_duration(),
            file_submitter: FileSubmitter::new(api.clone(), toasts.clone(), queries.clone()),
            text_submitter: TextSubmitter::new(api, toasts.clone(), queries.clone()),
            toasts,
            queries,
        }
    }

    pub fn file_pulsing(&self) -> bool {
        self.file_submitter.pulse().is_pulsing()
    }

    pub fn text_pulsing(&self) -> bool {
        self.text_submitter.pulse().is_pulsing()
    }

    /// True while either lane has a request in flight.
    pub fn is_loading(&self) -> bool {
        self.file_pulsing() || self.text_pulsing()
    }

    pub fn can_submit_file(&self) -> bool {
        !self.is_loading() && self.upload_form.can_submit()
    }

    pub fn can_submit_text(&self) -> bool {
        !self.is_loading() && self.text_form.can_submit()
    }

    /// Starts the upload lane with the selected file. Refused while any
    /// lane is pending so only one result can race for the panel.
    pub fn submit_file(&mut self) -> Option<BoxFuture<'static, SubmissionResult>> {
        if !self.can_submit_file() {
            return None;
        }
        let file = self.upload_form.file.clone()?;
        Some(self.file_submitter.submit(FilePayload::from(file)))
    }

    pub fn submit_text(&mut self) -> Option<BoxFuture<'static, SubmissionResult>> {
        if !self.can_submit_text() {
            return None;
        }
        Some(self.text_submitter.submit(self.text_form.text.clone()))
    }

    pub fn apply_outcome(&mut self, mode: InputMode, outcome: SubmissionResult) {
        match mode {
            InputMode::Upload => self.file_submitter.acknowledge(),
            InputMode::Text => self.text_submitter.acknowledge(),
        }
        if let Ok(result) = outcome {
            self.response = Some(result);
        }
        self.refresh_queries();
    }

    pub fn clear_response(&mut self) {
        self.response = None;
    }

    /// Refetches what depends on the analysis query group once it goes stale.
    fn refresh_queries(&mut self) {
        if self.queries.is_stale(ANALYSIS_QUERY_TAG) {
            self.analyses_completed = self.queries.generation(ANALYSIS_QUERY_TAG);
            self.queries.mark_fresh(ANALYSIS_QUERY_TAG);
        }
    }

    fn schedule_toast_expiry(&self) -> Command<Message> {
        let ttl = self.toast_duration;
        Command::perform(async move { tokio::time::sleep(ttl).await }, |_| Message::ExpireToasts)
    }

    fn load_file(&mut self, path: std::path::PathBuf, content: Vec<u8>) -> Command<Message> {
        if !self.upload_form.accept_drop(&path, content) {
            log::info!("[UPLOAD] ignoring unsupported file {}", path.display());
            self.toasts.show_warning("Formato não suportado: envie um arquivo .txt ou .pdf");
            return self.schedule_toast_expiry();
        }
        let oversized = self
            .upload_form
            .file
            .as_ref()
            .is_some_and(|f| f.exceeds_size_hint(self.max_upload_mb));
        if oversized {
            self.toasts.show_warning(&format!(
                "O arquivo tem mais de {}MB e pode ser recusado pelo servidor",
                self.max_upload_mb
            ));
            return self.schedule_toast_expiry();
        }
        Command::none()
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::NoOp => {}
            Message::TabSelected(mode) => {
                self.active_tab = mode;
            }
            Message::FileHovered => {
                if self.active_tab == InputMode::Upload {
                    self.upload_form.dragging = true;
                }
            }
            Message::FileHoverLeft => {
                self.upload_form.dragging = false;
            }
            Message::FileDropped(path) => {
                self.upload_form.dragging = false;
                if self.active_tab != InputMode::Upload || self.is_loading() {
                    return Command::none();
                }
                // Drops are filtered silently, before touching the disk
                if AcceptedFileType::from_path(&path).is_none() {
                    log::info!("[UPLOAD] dropped file {} is not .txt/.pdf", path.display());
                    return Command::none();
                }
                return Command::perform(
                    async move {
                        let content = tokio::fs::read(&path).await.map_err(|e| e.to_string());
                        (path, content)
                    },
                    |(path, content)| Message::FileLoaded { path, content },
                );
            }
            Message::BrowseFile => {
                return Command::perform(pick_email_file(), |picked| match picked {
                    Some((path, content)) => Message::FileLoaded { path, content: Ok(content) },
                    None => Message::NoOp,
                });
            }
            Message::FileLoaded { path, content } => match content {
                Ok(bytes) => return self.load_file(path, bytes),
                Err(e) => {
                    log::warn!("[UPLOAD] failed to read {}: {}", path.display(), e);
                    self.toasts.show_error(&format!("Não foi possível ler o arquivo: {}", e));
                    return self.schedule_toast_expiry();
                }
            },
            Message::RemoveFile => {
                self.upload_form.remove_file();
            }
            Message::SubmitFile => {
                if let Some(fut) = self.submit_file() {
                    return Command::perform(fut, Message::FileSubmitted);
                }
            }
            Message::SubmitText => {
                if let Some(fut) = self.submit_text() {
                    return Command::perform(fut, Message::TextSubmitted);
                }
            }
            Message::FileSubmitted(outcome) => {
                self.apply_outcome(InputMode::Upload, outcome);
                return self.schedule_toast_expiry();
            }
            Message::TextSubmitted(outcome) => {
                self.apply_outcome(InputMode::Text, outcome);
                return self.schedule_toast_expiry();
            }
            Message::ClearResponse => {
                self.clear_response();
            }
            Message::ExpireToasts => {
                self.toasts.expire(chrono::Local::now(), self.toast_duration);
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
            // Editor messages need the widget content, the app handles them
            Message::EditorAction(_) | Message::ClearText => {}
        }
        Command::none()
    }
}
