use chrono::Utc;
use futures::future::{BoxFuture, FutureExt};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;
use tracing::{info, instrument};

use super::confidence_policy::{AmbiguityPolicy, RandomBoost};
use super::lighting_classifier::LightingClassifier;
use crate::common::Frame;
use crate::error::AppError;
use crate::pipeline::types::ClassificationReport;

/// Runs classification on the blocking pool so callers' tasks never stall on pixel work.
/// Clones share one classifier; concurrent frames only meet at the ambiguity draw.
pub struct LightingService<P = RandomBoost> {
    classifier: Arc<LightingClassifier<P>>,
}

impl<P> Clone for LightingService<P> {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
        }
    }
}

impl<P: AmbiguityPolicy + 'static> LightingService<P> {
    pub fn new(classifier: LightingClassifier<P>) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

#[instrument(
    skip_all,
    fields(
        frame_id = %frame.frame_id(),
        source = %frame.source(),
        dimensions = ?frame.dimensions()
    )
)]
async fn classify_frame<P: AmbiguityPolicy + 'static>(
    classifier: Arc<LightingClassifier<P>>,
    frame: Frame,
) -> Result<ClassificationReport, AppError> {
    let worker_frame = frame.clone();
    let result = tokio::task::spawn_blocking(move || {
        worker_frame.with_pixels(|pixels| classifier.classify(pixels))
    })
    .await??;

    let report = ClassificationReport {
        frame_id: frame.frame_id(),
        source: frame.source().to_string(),
        received_at: frame.received_at(),
        completed_at: Utc::now(),
        result,
    };

    info!(
        "Classified as {} ({}% confidence, brightness {}, warmth {}) in {}ms",
        result.label,
        result.confidence,
        result.details.brightness,
        result.details.warmth,
        report.elapsed_ms()
    );

    Ok(report)
}

impl<P: AmbiguityPolicy + 'static> Service<Frame> for LightingService<P> {
    type Response = ClassificationReport;
    type Error = AppError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), AppError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, frame: Frame) -> Self::Future {
        classify_frame(self.classifier.clone(), frame).boxed()
    }
}
