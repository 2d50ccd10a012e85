use std::io::{self, Write};

use autosure_core::{AnalysisResult, Effect, Msg, SubmissionId};
use autosure_engine::{
    AnalysisPayload, EngineEvent, EngineHandle, FailureKind, UploadRequest, UploadSettings,
};
use autosure_logging::{autosure_info, autosure_warn};
use bytes::Bytes;

use super::ui::render;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: UploadSettings) -> Self {
        autosure_info!("Analysis endpoint {}", settings.endpoint);
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>, out: &mut dyn Write) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::SelectionAccepted {
                    affordance, name, ..
                } => {
                    autosure_info!("Selected {:?} file {}", affordance, name);
                    writeln!(out, "{}", render::selected_file(&name))?;
                }
                Effect::Upload {
                    submission_id,
                    artifact,
                } => {
                    self.engine.submit(UploadRequest {
                        submission_id,
                        file_name: artifact.name,
                        media_type: artifact.media_type,
                        bytes: Bytes::from(artifact.bytes),
                    });
                }
            }
        }
        Ok(())
    }

    /// Blocks for the next completion. If the engine has stopped, the
    /// in-flight submission is failed so the controller never stays stuck.
    pub fn next_message(&self, in_flight: SubmissionId) -> Msg {
        match self.engine.recv() {
            Some(EngineEvent::UploadCompleted {
                submission_id,
                result,
            }) => Msg::UploadFinished {
                submission_id,
                outcome: result.map(map_payload).map_err(|err| err.to_string()),
            },
            None => {
                autosure_warn!("Engine stopped with submission {} in flight", in_flight);
                Msg::UploadFinished {
                    submission_id: in_flight,
                    outcome: Err(FailureKind::EngineUnavailable.to_string()),
                }
            }
        }
    }
}

fn map_payload(payload: AnalysisPayload) -> AnalysisResult {
    AnalysisResult {
        status: payload.status,
        risk: payload.risk,
        compliance: payload.compliance,
        confidence: payload.confidence,
        summary: payload.summary,
    }
}
