use std::sync::Arc;

use crate::core::interfaces::adapters::VisionAnalyzer;
use crate::core::interfaces::ports::PointerPositionProvider;
use crate::core::models::{AnalysisMode, CaptureRegion, CaptureResult, ScreenPoint};
use crate::core::orchestrators::CapturePipeline;
use crate::global_constants::{
    LOG_TAG_APP, USER_MESSAGE_CAPTURING, USER_MESSAGE_FIRST_CORNER,
    USER_MESSAGE_SELECTION_CANCELED,
};
use crate::ports::GlobalKeyboardEvent;
use crate::presentation::AnswerSession;

/// Where the two-corner selection gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionState {
    Idle,
    AwaitingSecondCorner { first_corner: ScreenPoint },
}

/// Receives global keyboard events and drives the gesture:
/// first hotkey press marks a corner, the second completes the selection and
/// starts one capture attempt, Escape cancels. Completed captures are handed
/// to the vision analyzer and presented in an answer session.
pub struct AppOrchestrator {
    pipeline: Arc<CapturePipeline>,
    pointer_provider: Arc<dyn PointerPositionProvider>,
    vision_analyzer: Arc<dyn VisionAnalyzer>,
    analysis_mode: AnalysisMode,
    copy_answer_to_clipboard: bool,
    selection_state: SelectionState,
    session_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppOrchestrator {
    pub fn build(
        pipeline: Arc<CapturePipeline>,
        pointer_provider: Arc<dyn PointerPositionProvider>,
        vision_analyzer: Arc<dyn VisionAnalyzer>,
        analysis_mode: AnalysisMode,
        copy_answer_to_clipboard: bool,
    ) -> Self {
        Self {
            pipeline,
            pointer_provider,
            vision_analyzer,
            analysis_mode,
            copy_answer_to_clipboard,
            selection_state: SelectionState::Idle,
            session_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn handle_keyboard_event(&mut self, event: GlobalKeyboardEvent) {
        log::debug!("{} received keyboard event: {:?}", LOG_TAG_APP, event);

        match event {
            GlobalKeyboardEvent::CaptureHotkeyPressed => self.handle_hotkey_pressed(),
            GlobalKeyboardEvent::EscapePressed => self.handle_escape_pressed(),
        }
    }

    pub fn is_selection_armed(&self) -> bool {
        matches!(
            self.selection_state,
            SelectionState::AwaitingSecondCorner { .. }
        )
    }

    fn handle_hotkey_pressed(&mut self) {
        let corner = match self.pointer_provider.get_current_pointer_position() {
            Ok(position) => position,
            Err(error) => {
                log::error!(
                    "{} cannot mark corner, pointer position unavailable: {}",
                    LOG_TAG_APP,
                    error
                );
                return;
            }
        };

        if let Some(selection) = self.mark_corner(corner) {
            println!("{}", USER_MESSAGE_CAPTURING);
            self.spawn_capture_attempt(selection);
        } else {
            println!("{}", USER_MESSAGE_FIRST_CORNER);
        }
    }

    fn handle_escape_pressed(&mut self) {
        if self.is_selection_armed() {
            log::info!("{} selection canceled by user", LOG_TAG_APP);
            self.selection_state = SelectionState::Idle;
            println!("{}", USER_MESSAGE_SELECTION_CANCELED);
        }
    }

    /// Advances the gesture by one corner. Returns the normalized selection
    /// once both corners are known.
    fn mark_corner(&mut self, corner: ScreenPoint) -> Option<CaptureRegion> {
        match self.selection_state {
            SelectionState::Idle => {
                log::info!(
                    "{} first corner marked at ({}, {})",
                    LOG_TAG_APP,
                    corner.x_position,
                    corner.y_position
                );
                self.selection_state = SelectionState::AwaitingSecondCorner {
                    first_corner: corner,
                };
                None
            }
            SelectionState::AwaitingSecondCorner { first_corner } => {
                log::info!(
                    "{} second corner marked at ({}, {})",
                    LOG_TAG_APP,
                    corner.x_position,
                    corner.y_position
                );
                self.selection_state = SelectionState::Idle;
                Some(CaptureRegion::from_corner_points(first_corner, corner))
            }
        }
    }

    /// One fire-and-forget capture attempt. The pipeline's guard rejects
    /// overlap, so the orchestrator never tracks in-flight attempts itself.
    fn spawn_capture_attempt(&self, selection: CaptureRegion) -> tokio::task::JoinHandle<()> {
        let pipeline = Arc::clone(&self.pipeline);
        let vision_analyzer = Arc::clone(&self.vision_analyzer);
        let session_lock = Arc::clone(&self.session_lock);
        let analysis_mode = self.analysis_mode;
        let copy_answer_to_clipboard = self.copy_answer_to_clipboard;

        tokio::spawn(async move {
            let capture = pipeline.run_capture(selection).await;

            let base64_image = match capture {
                CaptureResult::Success { base64_image } => base64_image,
                CaptureResult::Failure { error } => {
                    log::error!("{} capture attempt failed: {}", LOG_TAG_APP, error);
                    eprintln!("[ERROR] {}", error);
                    return;
                }
            };

            // One answer session at a time - a second capture may start
            // while an answer is open, but its session waits its turn.
            let _session_permit = session_lock.lock().await;

            match vision_analyzer
                .analyze_image(&base64_image, analysis_mode)
                .await
            {
                Ok(answer) => {
                    let session = AnswerSession::build(
                        Arc::clone(&vision_analyzer),
                        copy_answer_to_clipboard,
                    );
                    session.run(answer).await;
                }
                Err(error) => {
                    log::error!("{} vision analysis failed: {}", LOG_TAG_APP, error);
                    eprintln!("[ERROR] Analysis failed: {}", error);
                }
            }
        })
    }
}
