//! Payload generators: the mock analysis, quote and ERP stages.
//!
//! Each generator is a pure function of a minimal context to a fixed
//! structured payload. They model the shape of a realistic inter-role
//! handoff; keeping them behind [`Generator`] lets real analysis or pricing
//! services replace them without touching the workflow service.

mod analysis;
mod erp;
mod quote;

pub use analysis::CannedAnalysis;
pub use erp::CannedErp;
pub use quote::{default_quote, CannedQuote};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::ANALYSIS_PROGRESS_CHECKPOINTS;
use crate::domain::AiAnalysis;
use crate::errors::{AppError, AppResult};

/// Minimal input context shared by all pipeline stages.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    pub project_name: String,
}

impl GeneratorContext {
    pub fn for_project(name: impl Into<String>) -> Self {
        Self {
            project_name: name.into(),
        }
    }
}

/// A pluggable pipeline stage producing one payload type.
#[async_trait]
pub trait Generator<P>: Send + Sync {
    async fn produce(&self, ctx: GeneratorContext) -> AppResult<P>;
}

/// Handle to a running analysis job.
///
/// The job reports scripted fractional progress over fixed checkpoints with
/// a fixed delay between each, then resolves to the final payload. It is
/// cancellable even though the modeled flow never cancels it; aborting
/// surfaces as an internal error from [`AnalysisTask::join`].
pub struct AnalysisTask {
    progress: watch::Receiver<u8>,
    handle: JoinHandle<AppResult<AiAnalysis>>,
}

impl AnalysisTask {
    /// Spawn the scripted analysis job. The delay between checkpoints models
    /// an asynchronous long-running stage; the payload itself comes from the
    /// generator once the last checkpoint is reached.
    pub fn spawn(
        generator: Arc<dyn Generator<AiAnalysis>>,
        ctx: GeneratorContext,
        step_delay: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(0u8);
        let handle = tokio::spawn(async move {
            for pct in ANALYSIS_PROGRESS_CHECKPOINTS {
                tokio::time::sleep(step_delay).await;
                // Receiver may be gone; progress is best-effort
                let _ = tx.send(*pct);
            }
            generator.produce(ctx).await
        });
        Self {
            progress: rx,
            handle,
        }
    }

    /// Observe progress percent updates (0 until the first checkpoint)
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }

    /// Abort the job; a subsequent `join` reports an internal error
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the job and take its payload
    pub async fn join(self) -> AppResult<AiAnalysis> {
        self.handle
            .await
            .map_err(|e| AppError::internal(format!("analysis job did not complete: {e}")))?
    }
}
