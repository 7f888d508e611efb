//! Wisdom Engine
//!
//! Owns the catalog, the advisor tables, and the consultation log for one
//! server run. Construct one per process (or per test) and hand it to the
//! dispatcher; there is no global instance.
//!
//! A single `RwLock` guards everything. Initialization and log appends take
//! the write lock; resolution, selection, and log reads take the read lock.

use crate::advisors::{AdvisorQuery, AdvisorResolver, Resolution, DAILY_CHECKIN};
use crate::aeon::{classify, AeonLevel};
use crate::catalog::WisdomCatalog;
use crate::config::Config;
use crate::error::{Result, WisdomError};
use crate::log::{ConsultationDraft, ConsultationLog, LogFilter};
use crate::selector;
use crate::types::*;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Score used by the daily briefing when the caller gives none
pub const DEFAULT_BRIEFING_SCORE: f64 = 50.0;

/// How many of the weakest metrics the daily briefing advises on
pub const BRIEFING_FOCUS_METRICS: usize = 3;

/// Source of "now" for timestamps and the quote-of-the-day date
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reject rather than clamp: the score is stored verbatim in the audit log.
pub fn validate_score(score: f64) -> Result<f64> {
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        Ok(score)
    } else {
        Err(WisdomError::InvalidScore(score))
    }
}

struct EngineState {
    catalog: WisdomCatalog,
    resolver: AdvisorResolver,
    log: ConsultationLog,
    default_source: String,
}

/// Resolution and selection for one context, before anything is logged
struct Prepared {
    resolution: Resolution,
    level: AeonLevel,
    quote: Quote,
    source: SourceRef,
    advisor_icon: String,
}

impl EngineState {
    fn prepare(&self, query: AdvisorQuery<'_>, score: f64, today: NaiveDate) -> Result<Prepared> {
        let level = classify(score);
        let default_source = self.catalog.get_source(&self.default_source)?;
        let resolution = self.resolver.resolve(query, default_source)?;
        let source = self.catalog.get_source(&resolution.advisor.advisor_id)?;

        tracing::debug!(
            kind = %resolution.kind,
            advisor = %resolution.advisor.advisor_id,
            level = %level,
            "Advisor resolved"
        );

        Ok(Prepared {
            level,
            quote: selector::select(source, level, today),
            source: source.reference(),
            advisor_icon: resolution
                .advisor
                .icon
                .clone()
                .unwrap_or_else(|| source.icon.clone()),
            resolution,
        })
    }
}

pub struct WisdomEngine {
    config: Config,
    clock: Arc<dyn Clock>,
    state: RwLock<Option<EngineState>>,
}

impl WisdomEngine {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            state: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the built-in catalog and advisor tables. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        self.initialize_with(WisdomCatalog::built_in)
    }

    /// Initialize from a caller-supplied catalog, built only if needed
    pub fn initialize_with(&self, build: impl FnOnce() -> WisdomCatalog) -> Result<()> {
        let mut guard = self.write()?;
        if guard.is_some() {
            return Ok(());
        }

        let catalog = build();
        let default_source = catalog.default_source(&self.config)?.id.clone();
        tracing::info!(
            sources = catalog.len(),
            default_source = %default_source,
            disabled = self.config.disabled,
            "Wisdom engine initialized"
        );

        *guard = Some(EngineState {
            catalog,
            resolver: AdvisorResolver::built_in(),
            log: ConsultationLog::new(),
            default_source,
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().map(|s| s.is_some()).unwrap_or(false)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Option<EngineState>>> {
        self.state.read().map_err(|_| WisdomError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Option<EngineState>>> {
        self.state.write().map_err(|_| WisdomError::LockPoisoned)
    }

    /// Resolve an advisor, pick today's quote, and log the consultation
    pub fn consult_advisor(
        &self,
        query: AdvisorQuery<'_>,
        score: f64,
        context: Option<&str>,
    ) -> Result<Advice<ConsultResponse>> {
        self.consult_at(query, score, context, self.clock.now())
    }

    /// `now` is both the selection date and the log timestamp
    fn consult_at(
        &self,
        query: AdvisorQuery<'_>,
        score: f64,
        context: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Advice<ConsultResponse>> {
        let prepared = {
            let guard = self.read()?;
            let state = guard.as_ref().ok_or(WisdomError::EngineNotInitialized)?;
            validate_score(score)?;
            if self.config.disabled {
                return Ok(Advice::Disabled);
            }
            state.prepare(query, score, now.date_naive())?
        };

        let Prepared {
            resolution,
            level,
            quote,
            source,
            advisor_icon,
        } = prepared;
        let draft = ConsultationDraft {
            context_kind: resolution.kind,
            context_value: resolution.value,
            advisor: resolution.advisor.advisor_id,
            advisor_icon,
            rationale: resolution.advisor.rationale,
            score,
            aeon_level: level,
            quote,
            context: context.map(String::from),
        };

        let consultation = {
            let mut guard = self.write()?;
            let state = guard.as_mut().ok_or(WisdomError::EngineNotInitialized)?;
            state.log.append(draft, now)
        };

        let mode = consultation.consultation_mode;
        Ok(Advice::Given(ConsultResponse {
            consultation_id: consultation.id,
            quote: consultation.quote,
            source,
            advisor: consultation.advisor,
            advisor_icon: consultation.advisor_icon,
            rationale: consultation.rationale,
            helps_with: resolution.advisor.helps_with,
            aeon_level: consultation.aeon_level,
            consultation_mode: mode,
            mode_icon: mode.icon().to_string(),
            mode_frequency: mode.frequency().to_string(),
            mode_description: mode.description().to_string(),
        }))
    }

    /// Quote of the day from an explicit source. Never logs.
    pub fn get_wisdom(&self, score: f64, source: &str) -> Result<Advice<WisdomResponse>> {
        let guard = self.read()?;
        let state = guard.as_ref().ok_or(WisdomError::EngineNotInitialized)?;
        let score = validate_score(score)?;
        let source = state.catalog.get_source(source)?;
        if self.config.disabled {
            return Ok(Advice::Disabled);
        }

        let level = classify(score);
        Ok(Advice::Given(WisdomResponse {
            quote: selector::select(source, level, self.clock.now().date_naive()),
            source: source.reference(),
            aeon_level: level,
        }))
    }

    /// A logged consultation for the `daily_checkin` stage, plus unlogged
    /// advice for the weakest known metrics in `metric_scores`.
    ///
    /// Every score is validated before anything is logged. Metrics without
    /// an advisor are skipped.
    pub fn get_daily_briefing(
        &self,
        score: Option<f64>,
        metric_scores: &BTreeMap<String, f64>,
    ) -> Result<Advice<DailyBriefing>> {
        for metric_score in metric_scores.values() {
            validate_score(*metric_score)?;
        }

        let now = self.clock.now();
        let query = AdvisorQuery {
            stage: Some(DAILY_CHECKIN),
            ..Default::default()
        };
        let checkin = match self.consult_at(query, score.unwrap_or(DEFAULT_BRIEFING_SCORE), None, now)? {
            Advice::Given(checkin) => checkin,
            Advice::Disabled => return Ok(Advice::Disabled),
        };

        let focus = self.metric_focus(metric_scores, now.date_naive())?;
        Ok(Advice::Given(DailyBriefing { checkin, focus }))
    }

    fn metric_focus(
        &self,
        metric_scores: &BTreeMap<String, f64>,
        today: NaiveDate,
    ) -> Result<Vec<MetricAdvice>> {
        let guard = self.read()?;
        let state = guard.as_ref().ok_or(WisdomError::EngineNotInitialized)?;

        // stable sort: equal scores keep metric-name order
        let mut weakest: Vec<(&str, f64)> = metric_scores
            .iter()
            .filter(|(metric, _)| state.resolver.advisor_for_metric(metric).is_some())
            .map(|(metric, score)| (metric.as_str(), *score))
            .collect();
        weakest.sort_by(|a, b| a.1.total_cmp(&b.1));

        weakest
            .into_iter()
            .take(BRIEFING_FOCUS_METRICS)
            .map(|(metric, score)| {
                let query = AdvisorQuery {
                    metric: Some(metric),
                    ..Default::default()
                };
                let p = state.prepare(query, score, today)?;
                Ok(MetricAdvice {
                    metric: metric.to_string(),
                    score,
                    aeon_level: p.level,
                    advisor: p.resolution.advisor.advisor_id,
                    advisor_icon: p.advisor_icon,
                    rationale: p.resolution.advisor.rationale,
                    helps_with: p.resolution.advisor.helps_with,
                    quote: p.quote,
                    source: p.source,
                })
            })
            .collect()
    }

    pub fn consultation_log(&self, limit: Option<i64>, filter: LogFilter<'_>) -> Result<Vec<Consultation>> {
        let guard = self.read()?;
        let state = guard.as_ref().ok_or(WisdomError::EngineNotInitialized)?;
        Ok(state.log.recent_matching(limit, &filter, self.clock.now()))
    }

    pub fn export_for_podcast(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<Episode>> {
        let guard = self.read()?;
        let state = guard.as_ref().ok_or(WisdomError::EngineNotInitialized)?;
        Ok(state.log.export_episodes(from, to))
    }

    pub fn list_sources(&self) -> Result<SourceListing> {
        let guard = self.read()?;
        let state = guard.as_ref().ok_or(WisdomError::EngineNotInitialized)?;
        Ok(SourceListing {
            default_source: state.default_source.clone(),
            sources: state.catalog.summaries(&self.config),
        })
    }
}
