// ABOUTME: Extracts and deserializes the JSON report from raw model output
// ABOUTME: Tolerates Markdown code fences and surrounding prose around the object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use super::report::PredictionReport;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Parse a narrator reply into a [`PredictionReport`]
///
/// Everything outside the outermost `{ ... }` is ignored.
///
/// # Errors
///
/// Returns `SerializationError` when no object is present or it does not
/// match the report schema.
pub fn parse_prediction_response(text: &str) -> AppResult<PredictionReport> {
    let json = extract_json_object(text).ok_or_else(|| {
        AppError::new(
            ErrorCode::SerializationError,
            "model response contains no JSON object",
        )
    })?;

    let report: PredictionReport = serde_json::from_str(json).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("model response does not match the report schema: {e}"),
        )
        .with_source(e)
    })?;

    let missing = report.missing_categories();
    if !missing.is_empty() {
        debug!(
            missing = ?missing.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
            "Report lacks some risk card categories"
        );
    }

    Ok(report)
}

/// The slice from the first `{` to the last `}`
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
