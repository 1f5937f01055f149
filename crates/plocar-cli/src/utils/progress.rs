use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use plocar::engine::progress::{Progress, ProgressCallback};
use plocar::engine::state::DecodeStage;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new(enabled: bool) -> Self {
        let pb = if enabled {
            let pb = ProgressBar::new(0).with_style(Self::spinner_style());
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb
        } else {
            ProgressBar::hidden()
        };

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::StageEntered(DecodeStage::HeaderParsed) => {
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message("Allocating arrays...");
                }
                Progress::StageEntered(DecodeStage::Done) => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_and_clear();
                }
                Progress::StageEntered(DecodeStage::Failed) => {
                    pb_guard.disable_steady_tick();
                    pb_guard.abandon_with_message("✗ Decoding failed");
                }
                Progress::StageEntered(_) => {}
                Progress::RecordsStart { total_ions } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.set_length(total_ions);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_message("Decoding ions");
                }
                Progress::IonDecoded { .. } => {
                    pb_guard.inc(1);
                }
                Progress::RecordsFinish => {
                    if let Some(len) = pb_guard.length() {
                        pb_guard.set_position(len);
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} {msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_handler_accepts_a_full_event_sequence() {
        let handler = CliProgressHandler::new(false);
        let callback = handler.get_callback();
        callback(Progress::StageEntered(DecodeStage::HeaderParsed));
        callback(Progress::StageEntered(DecodeStage::ArraysAllocated));
        callback(Progress::RecordsStart { total_ions: 3 });
        for ion in 0..3 {
            callback(Progress::IonDecoded { ion, nlm: 4 });
        }
        callback(Progress::RecordsFinish);

        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.position(), 3);
        assert_eq!(pb.length(), Some(3));
        drop(pb);

        callback(Progress::StageEntered(DecodeStage::Done));
        assert!(handler.pb.lock().unwrap().is_finished());
    }

    #[test]
    fn failure_abandons_the_bar() {
        let handler = CliProgressHandler::new(false);
        let callback = handler.get_callback();
        callback(Progress::RecordsStart { total_ions: 5 });
        callback(Progress::IonDecoded { ion: 0, nlm: 1 });
        callback(Progress::StageEntered(DecodeStage::Failed));

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 1);
    }
}
