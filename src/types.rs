//! Core types for the devwisdom advisory engine
//!
//! Everything here is plain data: quotes, advisor descriptions, the audit
//! records written for each consultation, and the result payloads returned
//! over the tool-call protocol.

use crate::aeon::{AeonLevel, ConsultationMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag on a wisdom source
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Default,
    Hebrew,
}

/// A single quotation, stamped with the source it came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub attribution: String,
    pub encouragement: String,
    pub source_name: String,
    pub source_icon: String,
}

impl Quote {
    /// Returned when a source has no quotes at all
    pub fn silence() -> Self {
        Self {
            text: "Silence is also wisdom.".to_string(),
            attribution: "Unknown".to_string(),
            encouragement: "Sometimes reflection is the answer.".to_string(),
            source_name: String::new(),
            source_icon: String::new(),
        }
    }

    /// Quote, attribution, and encouragement as one line
    pub fn narration(&self) -> String {
        format!("{} — {}. {}", self.text, self.attribution, self.encouragement)
    }
}

/// Why a persona fits a context. `advisor_id` names a catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisorInfo {
    pub advisor_id: String,
    pub icon: Option<String>,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helps_with: Option<String>,
}

/// Which lookup table produced the advisor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    Metric,
    Tool,
    Stage,
    None,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::Metric => "metric",
            ContextKind::Tool => "tool",
            ContextKind::Stage => "stage",
            ContextKind::None => "none",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable audit record of one resolved consultation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    /// 1-based insertion position in the log
    pub sequence: u64,
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub context_kind: ContextKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_value: Option<String>,
    pub advisor: String,
    pub advisor_icon: String,
    pub rationale: String,
    pub score_at_time: f64,
    pub aeon_level: AeonLevel,
    pub consultation_mode: ConsultationMode,
    pub quote: Quote,
    /// Free text the caller supplied about what they were working on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A consultation rendered for narration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub narration: String,
    pub rationale: String,
    pub advisor: String,
}

impl Episode {
    pub fn from_consultation(consultation: &Consultation) -> Self {
        Self {
            sequence: consultation.sequence,
            timestamp: consultation.timestamp,
            title: format!(
                "{} {}",
                consultation.advisor,
                consultation.timestamp.format("%Y-%m-%d")
            ),
            narration: consultation.quote.narration(),
            rationale: consultation.rationale.clone(),
            advisor: consultation.advisor.clone(),
        }
    }
}

/// Source identity echoed back with quotes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceRef {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Result of `consult_advisor` and the body of a daily briefing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsultResponse {
    pub consultation_id: String,
    pub quote: Quote,
    pub source: SourceRef,
    pub advisor: String,
    pub advisor_icon: String,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helps_with: Option<String>,
    pub aeon_level: AeonLevel,
    pub consultation_mode: ConsultationMode,
    pub mode_icon: String,
    pub mode_frequency: String,
    pub mode_description: String,
}

/// Unlogged advice for one weak metric in the daily briefing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricAdvice {
    pub metric: String,
    pub score: f64,
    pub aeon_level: AeonLevel,
    pub advisor: String,
    pub advisor_icon: String,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helps_with: Option<String>,
    pub quote: Quote,
    pub source: SourceRef,
}

/// Result of `get_daily_briefing`: the logged check-in plus advice for the
/// lowest-scoring metrics, weakest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBriefing {
    #[serde(flatten)]
    pub checkin: ConsultResponse,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus: Vec<MetricAdvice>,
}

/// Result of `get_wisdom`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WisdomResponse {
    pub quote: Quote,
    pub source: SourceRef,
    pub aeon_level: AeonLevel,
}

/// Engine output for operations that short-circuit when wisdom is disabled
#[derive(Debug, Clone, PartialEq)]
pub enum Advice<T> {
    Given(T),
    Disabled,
}

impl<T> Advice<T> {
    pub fn given(self) -> Option<T> {
        match self {
            Advice::Given(value) => Some(value),
            Advice::Disabled => None,
        }
    }
}

/// Catalog entry listed by `list_sources`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub language: Language,
    pub quote_count: usize,
    pub eligible: bool,
}

/// Result of `list_sources`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceListing {
    pub default_source: String,
    pub sources: Vec<SourceSummary>,
}
