// ABOUTME: Shared test utilities and profile builders for integration tests
// ABOUTME: Provides a baseline profile, a fluent builder, quiet logging, and a scripted mock provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vitalcast`

use std::collections::VecDeque;
use std::env;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::Level;
use vitalcast::errors::AppError;
use vitalcast::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use vitalcast::models::{
    ActivityLevel, BloodPressureReading, ConditionSet, DietQuality, FastFoodFrequency, Gender,
    GlucoseReading, HealthCondition, LipidPanel, UserProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A healthy 40-year-old with no clinical readings
pub fn baseline_profile() -> UserProfile {
    UserProfile {
        age: 40,
        gender: Gender::Female,
        height_cm: 170.0,
        weight_kg: 65.0,
        waist_cm: 75.0,
        hip_cm: 95.0,
        daily_steps: 9_000,
        sitting_hours: 5.0,
        activity_level: ActivityLevel::Moderate,
        sleep_hours: 7.5,
        smoker: false,
        cigarettes_per_day: None,
        years_smoked: None,
        years_since_quit: None,
        alcohol_drinks_per_week: 0.0,
        max_drinks_per_occasion: None,
        diet_quality: DietQuality::Good,
        fast_food_frequency: FastFoodFrequency::Rarely,
        existing_conditions: ConditionSet::default(),
        bp: None,
        lipids: None,
        glucose: None,
    }
}

/// Fluent builder over [`baseline_profile`]
pub struct ProfileBuilder {
    profile: UserProfile,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self {
            profile: baseline_profile(),
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.profile.age = age;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.profile.gender = gender;
        self
    }

    /// Set weight so that BMI at 170 cm equals `bmi`
    pub fn bmi(mut self, bmi: f64) -> Self {
        self.profile.height_cm = 170.0;
        self.profile.weight_kg = bmi * 1.7 * 1.7;
        self
    }

    pub fn waist(mut self, waist_cm: f64) -> Self {
        self.profile.waist_cm = waist_cm;
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.profile.daily_steps = steps;
        self
    }

    pub fn sitting(mut self, hours: f64) -> Self {
        self.profile.sitting_hours = hours;
        self
    }

    pub fn sleep(mut self, hours: f64) -> Self {
        self.profile.sleep_hours = hours;
        self
    }

    pub fn activity(mut self, level: ActivityLevel) -> Self {
        self.profile.activity_level = level;
        self
    }

    pub fn diet(mut self, quality: DietQuality, fast_food: FastFoodFrequency) -> Self {
        self.profile.diet_quality = quality;
        self.profile.fast_food_frequency = fast_food;
        self
    }

    pub fn current_smoker(mut self, cigarettes_per_day: f64, years: f64) -> Self {
        self.profile.smoker = true;
        self.profile.cigarettes_per_day = Some(cigarettes_per_day);
        self.profile.years_smoked = Some(years);
        self.profile.years_since_quit = None;
        self
    }

    pub fn former_smoker(
        mut self,
        cigarettes_per_day: f64,
        years: f64,
        years_since_quit: f64,
    ) -> Self {
        self.profile.smoker = false;
        self.profile.cigarettes_per_day = Some(cigarettes_per_day);
        self.profile.years_smoked = Some(years);
        self.profile.years_since_quit = Some(years_since_quit);
        self
    }

    pub fn alcohol(mut self, per_week: f64, max_per_occasion: Option<f64>) -> Self {
        self.profile.alcohol_drinks_per_week = per_week;
        self.profile.max_drinks_per_occasion = max_per_occasion;
        self
    }

    pub fn condition(mut self, condition: HealthCondition) -> Self {
        self.profile.existing_conditions.insert(condition);
        self
    }

    pub fn bp(mut self, systolic: f64, diastolic: f64, on_meds: bool, months: f64) -> Self {
        self.profile.bp = Some(BloodPressureReading {
            systolic,
            diastolic,
            on_meds,
            measured_within_months: months,
        });
        self
    }

    pub fn lipids(mut self, panel: LipidPanel) -> Self {
        self.profile.lipids = Some(panel);
        self
    }

    pub fn glucose(mut self, reading: GlucoseReading) -> Self {
        self.profile.glucose = Some(reading);
        self
    }

    pub fn build(self) -> UserProfile {
        self.profile
    }
}

/// The baseline profile as camelCase JSON
pub fn baseline_profile_json() -> String {
    serde_json::to_string_pretty(&baseline_profile()).unwrap()
}

/// One scripted reply of the mock provider
pub enum MockReply {
    /// Return this text as the completion
    Text(String),
    /// Fail with this error
    Fail(AppError),
    /// Sleep before answering with this text
    Delayed(Duration, String),
}

/// Provider that replays scripted replies in order and counts calls
pub struct MockProvider {
    replies: Mutex<VecDeque<MockReply>>,
    calls: AtomicU32,
    capabilities: LlmCapabilities,
    last_request: Mutex<Option<ChatRequest>>,
}

impl MockProvider {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicU32::new(0),
            capabilities: LlmCapabilities::full_featured(),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["mock-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Fail(AppError::internal("mock exhausted")));

        let content = match reply {
            MockReply::Text(text) => text,
            MockReply::Fail(error) => return Err(error),
            MockReply::Delayed(delay, text) => {
                sleep(delay).await;
                text
            }
        };

        Ok(ChatResponse {
            content,
            model: "mock-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// A well-formed narrator reply covering every required category
pub fn valid_report_json() -> String {
    serde_json::json!({
        "riskCards": [
            {"category": "diabetes", "title": "Diabetes", "level": "low", "summary": "Low risk."},
            {"category": "physical_activity", "title": "Activity", "level": "low", "summary": "Good."},
            {"category": "sedentary_behavior", "title": "Sitting", "level": "low", "summary": "Fine."},
            {"category": "alcohol_use", "title": "Alcohol", "level": "low", "summary": "None."},
            {"category": "tobacco_exposure", "title": "Tobacco", "level": "low", "summary": "Never."},
            {"category": "diet_quality", "title": "Diet", "level": "low", "summary": "Good."}
        ],
        "suggestedAction": "Keep walking",
        "healthScoreCurrent": 12,
        "healthScoreFuture": 95,
        "lifeExpectancy": {"current": 82.5, "potential": 84.0},
        "trajectory": {
            "current": [{"age": 40, "score": 88}, {"age": 45, "score": 86}],
            "improved": [{"age": 40, "score": 88}, {"age": 45, "score": 89}]
        }
    })
    .to_string()
}
