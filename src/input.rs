// ABOUTME: Reads a user profile from a file or stdin and validates it at the boundary
// ABOUTME: The only place where raw input becomes a UserProfile the engine can trust
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use tokio::fs;
use tokio::io::{self, AsyncReadExt};
use tracing::debug;
use vitalcast_core::models::UserProfile;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Source name meaning "read standard input"
pub const STDIN_SOURCE: &str = "-";

/// Load and validate a profile from `source`, a path or `-` for stdin
///
/// # Errors
///
/// Returns `StorageError` if the source cannot be read, `InvalidInput` if it is
/// empty, `InvalidFormat` if it is not a profile document, and
/// `ValueOutOfRange` if validation fails.
pub async fn load_profile(source: &str) -> AppResult<UserProfile> {
    let raw = read_source(source).await?;
    if raw.trim().is_empty() {
        return Err(AppError::invalid_input(format!(
            "profile source {source} is empty"
        )));
    }

    let profile = UserProfile::from_json(&raw)?;
    profile.validate()?;

    debug!(source, age = profile.age, "Loaded profile");
    Ok(profile)
}

async fn read_source(source: &str) -> AppResult<String> {
    if source == STDIN_SOURCE {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|e| {
                AppError::new(ErrorCode::StorageError, format!("cannot read stdin: {e}"))
                    .with_source(e)
            })?;
        return Ok(buffer);
    }

    let path = Path::new(source);
    fs::read_to_string(path).await.map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("cannot read profile {}: {e}", path.display()),
        )
        .with_source(e)
    })
}
