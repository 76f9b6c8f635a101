//! Submission coordinators: one per input mode.
//!
//! A submit call moves the lane to `Pending` and raises its pulse before
//! returning a future. When that future settles the pulse is cleared, a
//! toast is shown and, on success, the analysis query group is invalidated.
//! Dropping the future early resets the lane to `Idle`.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use futures_util::future::{BoxFuture, FutureExt};

use crate::client::error::TransportError;
use crate::client::models::analysis::AnalysisResult;
use crate::client::models::ui_state::{InputMode, SelectedFile, SubmissionPhase};
use crate::client::services::analysis_api::AnalysisApi;
use crate::client::services::notification::Notifier;
use crate::client::services::pulse::{Pulse, PulseGuard};
use crate::client::services::query_cache::{QueryCache, ANALYSIS_QUERY_TAG};

pub type SubmissionResult = Result<AnalysisResult, TransportError>;

/// Binds an input type to the transport operation that sends it.
pub trait SubmissionLane: Send + Sync + 'static {
    type Input: Send + 'static;
    const MODE: InputMode;
    const SUCCESS_MESSAGE: &'static str;
    const ERROR_PREFIX: &'static str;

    fn dispatch(api: Arc<dyn AnalysisApi>, input: Self::Input) -> BoxFuture<'static, SubmissionResult>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl From<SelectedFile> for FilePayload {
    fn from(file: SelectedFile) -> Self {
        Self { filename: file.name, content: file.content }
    }
}

pub struct FileLane;

impl SubmissionLane for FileLane {
    type Input = FilePayload;
    const MODE: InputMode = InputMode::Upload;
    const SUCCESS_MESSAGE: &'static str = "Arquivo enviado com sucesso!";
    const ERROR_PREFIX: &'static str = "Erro ao enviar arquivo";

    fn dispatch(api: Arc<dyn AnalysisApi>, input: FilePayload) -> BoxFuture<'static, SubmissionResult> {
        async move { api.submit_file(input.content, &input.filename).await }.boxed()
    }
}

pub struct TextLane;

impl SubmissionLane for TextLane {
    type Input = String;
    const MODE: InputMode = InputMode::Text;
    const SUCCESS_MESSAGE: &'static str = "Texto enviado com sucesso!";
    const ERROR_PREFIX: &'static str = "Erro ao enviar texto";

    fn dispatch(api: Arc<dyn AnalysisApi>, input: String) -> BoxFuture<'static, SubmissionResult> {
        async move { api.submit_text(&input).await }.boxed()
    }
}

/// Holds the lane in `Pending` until settled; dropping it unsettled means the
/// request was abandoned. The phase only leaves `Pending` when the last
/// in-flight submission of the lane is done.
struct PendingSubmission {
    phase: Arc<Mutex<SubmissionPhase>>,
    guard: Option<PulseGuard>,
}

impl PendingSubmission {
    fn settle(mut self, outcome: SubmissionPhase) {
        self.finish(outcome);
    }

    fn finish(&mut self, outcome: SubmissionPhase) {
        let Some(guard) = self.guard.take() else { return };
        // The phase lock serializes the pulse count with `submit`
        let mut phase = self.phase.lock().ok();
        if guard.stop() {
            if let Some(phase) = phase.as_deref_mut() {
                *phase = outcome;
            }
        }
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.finish(SubmissionPhase::Idle);
    }
}

pub struct SubmissionCoordinator<L: SubmissionLane> {
    api: Arc<dyn AnalysisApi>,
    notifier: Arc<dyn Notifier>,
    cache: Arc<dyn QueryCache>,
    pulse: Pulse,
    phase: Arc<Mutex<SubmissionPhase>>,
    _lane: PhantomData<fn() -> L>,
}

pub type FileSubmitter = SubmissionCoordinator<FileLane>;
pub type TextSubmitter = SubmissionCoordinator<TextLane>;

impl<L: SubmissionLane> SubmissionCoordinator<L> {
    pub fn new(api: Arc<dyn AnalysisApi>, notifier: Arc<dyn Notifier>, cache: Arc<dyn QueryCache>) -> Self {
        Self {
            api,
            notifier,
            cache,
            pulse: Pulse::new(),
            phase: Arc::new(Mutex::new(SubmissionPhase::Idle)),
            _lane: PhantomData,
        }
    }

    pub fn mode(&self) -> InputMode {
        L::MODE
    }

    pub fn pulse(&self) -> Pulse {
        self.pulse.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == SubmissionPhase::Pending
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.lock().map(|p| *p).unwrap_or(SubmissionPhase::Idle)
    }

    /// Resolved/Rejected -> Idle once the caller has consumed the outcome.
    pub fn acknowledge(&self) {
        if let Ok(mut phase) = self.phase.lock() {
            if matches!(*phase, SubmissionPhase::Resolved | SubmissionPhase::Rejected) {
                *phase = SubmissionPhase::Idle;
            }
        }
    }

    /// Overlapping submits on one lane share the pulse and the `Pending`
    /// phase until the last of them settles.
    pub fn submit(&self, input: L::Input) -> BoxFuture<'static, SubmissionResult> {
        let guard = {
            let mut phase = self.phase.lock().ok();
            if let Some(phase) = phase.as_deref_mut() {
                *phase = SubmissionPhase::Pending;
            }
            self.pulse.start()
        };
        let pending = PendingSubmission { phase: self.phase.clone(), guard: Some(guard) };
        log::info!("[SUBMIT] {:?} submission started", L::MODE);

        let api = self.api.clone();
        let notifier = self.notifier.clone();
        let cache = self.cache.clone();

        async move {
            let outcome = L::dispatch(api, input).await;
            match &outcome {
                Ok(result) => {
                    pending.settle(SubmissionPhase::Resolved);
                    log::info!("[SUBMIT] {:?} resolved as '{}'", L::MODE, result.category);
                    notifier.show_success(L::SUCCESS_MESSAGE);
                    cache.invalidate(ANALYSIS_QUERY_TAG);
                }
                Err(err) => {
                    pending.settle(SubmissionPhase::Rejected);
                    log::warn!("[SUBMIT] {:?} rejected: {}", L::MODE, err);
                    notifier.show_error(&format!("{}: {}", L::ERROR_PREFIX, err.user_detail()));
                }
            }
            outcome
        }
        .boxed()
    }
}
