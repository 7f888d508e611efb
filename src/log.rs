//! Consultation log
//!
//! Append-only, in insertion order, for the lifetime of one server run.
//! Nothing is evicted or rewritten.

use crate::aeon::{AeonLevel, ConsultationMode};
use crate::types::{ContextKind, Consultation, Episode, Quote};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Everything about a consultation except what the log assigns
#[derive(Debug, Clone)]
pub struct ConsultationDraft {
    pub context_kind: ContextKind,
    pub context_value: Option<String>,
    pub advisor: String,
    pub advisor_icon: String,
    pub rationale: String,
    pub score: f64,
    pub aeon_level: AeonLevel,
    pub quote: Quote,
    pub context: Option<String>,
}

/// Narrows `recent_matching`. Empty fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter<'a> {
    pub advisor: Option<&'a str>,
    /// Only consultations resolved from this metric
    pub metric: Option<&'a str>,
    /// Only consultations resolved from this stage
    pub stage: Option<&'a str>,
    /// Only consultations from the last `days` days before `now`
    pub days: Option<u32>,
}

impl LogFilter<'_> {
    fn context_matches(c: &Consultation, kind: ContextKind, wanted: Option<&str>) -> bool {
        wanted.map_or(true, |w| c.context_kind == kind && c.context_value.as_deref() == Some(w))
    }

    pub fn matches(&self, c: &Consultation, now: DateTime<Utc>) -> bool {
        // a lookback reaching before the representable range means no cutoff
        let cutoff = self
            .days
            .and_then(|d| now.checked_sub_signed(Duration::days(i64::from(d))));
        self.advisor.map_or(true, |a| c.advisor == a)
            && Self::context_matches(c, ContextKind::Metric, self.metric)
            && Self::context_matches(c, ContextKind::Stage, self.stage)
            && cutoff.map_or(true, |t| c.timestamp >= t)
    }
}

#[derive(Debug, Default)]
pub struct ConsultationLog {
    entries: Vec<Consultation>,
}

impl ConsultationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a consultation at `now`. Sequence numbers start at 1.
    pub fn append(&mut self, draft: ConsultationDraft, now: DateTime<Utc>) -> Consultation {
        let consultation = Consultation {
            sequence: self.entries.len() as u64 + 1,
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            context_kind: draft.context_kind,
            context_value: draft.context_value,
            advisor: draft.advisor,
            advisor_icon: draft.advisor_icon,
            rationale: draft.rationale,
            score_at_time: draft.score,
            aeon_level: draft.aeon_level,
            consultation_mode: ConsultationMode::for_score(draft.score),
            quote: draft.quote,
            context: draft.context,
        };
        self.entries.push(consultation.clone());
        consultation
    }

    /// `limit > 0`: up to `limit` newest entries, newest first.
    /// Otherwise the whole log, oldest first.
    pub fn recent(&self, limit: Option<i64>) -> Vec<Consultation> {
        Self::take_recent(self.entries.iter(), limit)
    }

    /// Like [`recent`](Self::recent), applying `filter` before the limit
    pub fn recent_matching(
        &self,
        limit: Option<i64>,
        filter: &LogFilter<'_>,
        now: DateTime<Utc>,
    ) -> Vec<Consultation> {
        Self::take_recent(self.entries.iter().filter(|c| filter.matches(c, now)), limit)
    }

    fn take_recent<'a>(
        matching: impl DoubleEndedIterator<Item = &'a Consultation>,
        limit: Option<i64>,
    ) -> Vec<Consultation> {
        match limit {
            Some(n) if n > 0 => matching.rev().take(n as usize).cloned().collect(),
            _ => matching.cloned().collect(),
        }
    }

    /// One episode per consultation with `from <= timestamp <= to`, oldest first
    pub fn export_episodes(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Vec<Episode> {
        self.entries
            .iter()
            .filter(|c| from.map_or(true, |f| c.timestamp >= f))
            .filter(|c| to.map_or(true, |t| c.timestamp <= t))
            .map(Episode::from_consultation)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    fn draft(advisor: &str, text: &str) -> ConsultationDraft {
        ConsultationDraft {
            context_kind: ContextKind::Stage,
            context_value: Some("review".to_string()),
            advisor: advisor.to_string(),
            advisor_icon: "🏛️".to_string(),
            rationale: format!("{advisor} rationale"),
            score: 72.0,
            aeon_level: AeonLevel::UpperAeons,
            quote: Quote {
                text: text.to_string(),
                attribution: "Somebody".to_string(),
                encouragement: "Carry on.".to_string(),
                source_name: advisor.to_string(),
                source_icon: String::new(),
            },
            context: None,
        }
    }

    fn log_of(n: usize) -> ConsultationLog {
        let mut log = ConsultationLog::new();
        for i in 0..n {
            log.append(draft("stoic", &format!("quote {i}")), t0() + Duration::minutes(i as i64));
        }
        log
    }

    #[test]
    fn test_append_assigns_sequence_and_timestamp() {
        let mut log = ConsultationLog::new();
        let first = log.append(draft("stoic", "a"), t0());
        let second = log.append(draft("bofh", "b"), t0() + Duration::seconds(5));
        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        assert_eq!(second.timestamp, t0() + Duration::seconds(5));
        assert_ne!(first.id, second.id);
        assert_eq!(first.consultation_mode, ConsultationMode::Maturing);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_recent_with_limit_is_newest_first() {
        let log = log_of(5);
        let recent = log.recent(Some(2));
        let seqs: Vec<u64> = recent.iter().map(|c| c.sequence).collect();
        assert_eq!(seqs, vec![5, 4]);
    }

    #[test]
    fn test_recent_limit_larger_than_log() {
        let log = log_of(3);
        assert_eq!(log.recent(Some(10)).len(), 3);
    }

    #[test]
    fn test_recent_without_limit_is_oldest_first() {
        let log = log_of(4);
        for limit in [None, Some(0), Some(-3)] {
            let seqs: Vec<u64> = log.recent(limit).iter().map(|c| c.sequence).collect();
            assert_eq!(seqs, vec![1, 2, 3, 4]);
        }
    }

    fn seqs(entries: &[Consultation]) -> Vec<u64> {
        entries.iter().map(|c| c.sequence).collect()
    }

    fn metric_draft(advisor: &str, metric: &str) -> ConsultationDraft {
        ConsultationDraft {
            context_kind: ContextKind::Metric,
            context_value: Some(metric.to_string()),
            ..draft(advisor, metric)
        }
    }

    #[test]
    fn test_recent_matching_advisor() {
        let mut log = log_of(2);
        log.append(draft("bofh", "x"), t0() + Duration::hours(1));
        let filter = LogFilter {
            advisor: Some("bofh"),
            ..Default::default()
        };
        let only_bofh = log.recent_matching(None, &filter, t0());
        assert_eq!(seqs(&only_bofh), vec![3]);
    }

    #[test]
    fn test_recent_matching_metric_with_limit() {
        let mut log = ConsultationLog::new();
        log.append(metric_draft("bofh", "security"), t0());
        log.append(metric_draft("stoic", "testing"), t0() + Duration::minutes(1));
        log.append(metric_draft("bofh", "security"), t0() + Duration::minutes(2));
        log.append(draft("stoic", "staged"), t0() + Duration::minutes(3));
        log.append(metric_draft("bofh", "security"), t0() + Duration::minutes(4));

        let filter = LogFilter {
            metric: Some("security"),
            ..Default::default()
        };
        let now = t0() + Duration::hours(1);
        assert_eq!(seqs(&log.recent_matching(None, &filter, now)), vec![1, 3, 5]);
        assert_eq!(seqs(&log.recent_matching(Some(2), &filter, now)), vec![5, 3]);
    }

    #[test]
    fn test_recent_matching_stage_with_limit() {
        let mut log = log_of(3);
        log.append(metric_draft("stoic", "review"), t0() + Duration::minutes(10));
        let filter = LogFilter {
            stage: Some("review"),
            ..Default::default()
        };
        // a metric named like the stage must not match a stage filter
        let now = t0() + Duration::hours(1);
        assert_eq!(seqs(&log.recent_matching(None, &filter, now)), vec![1, 2, 3]);
        assert_eq!(seqs(&log.recent_matching(Some(1), &filter, now)), vec![3]);
    }

    #[test]
    fn test_recent_matching_days_with_limit() {
        let mut log = ConsultationLog::new();
        for day in 0..5 {
            log.append(draft("tao", "q"), t0() + Duration::days(day));
        }
        let now = t0() + Duration::days(4);
        let filter = LogFilter {
            days: Some(2),
            ..Default::default()
        };
        assert_eq!(seqs(&log.recent_matching(None, &filter, now)), vec![3, 4, 5]);
        assert_eq!(seqs(&log.recent_matching(Some(2), &filter, now)), vec![5, 4]);

        let forever = LogFilter {
            days: Some(u32::MAX),
            ..Default::default()
        };
        assert_eq!(log.recent_matching(None, &forever, now).len(), 5);
    }

    #[test]
    fn test_recent_matching_combined() {
        let mut log = ConsultationLog::new();
        log.append(metric_draft("bofh", "security"), t0());
        log.append(metric_draft("bofh", "security"), t0() + Duration::days(3));
        log.append(metric_draft("stoic", "security"), t0() + Duration::days(3));
        let filter = LogFilter {
            advisor: Some("bofh"),
            metric: Some("security"),
            days: Some(1),
            ..Default::default()
        };
        let found = log.recent_matching(Some(10), &filter, t0() + Duration::days(3));
        assert_eq!(seqs(&found), vec![2]);
    }

    #[test]
    fn test_export_all_in_order() {
        let log = log_of(3);
        let episodes = log.export_episodes(None, None);
        assert_eq!(episodes.len(), 3);
        let texts: Vec<&str> = episodes.iter().map(|e| e.narration.as_str()).collect();
        assert!(texts[0].starts_with("quote 0 — "));
        assert!(texts[2].starts_with("quote 2 — "));
        assert!(episodes[0].timestamp < episodes[1].timestamp);
        assert_eq!(episodes[1].rationale, "stoic rationale");
    }

    #[test]
    fn test_export_bounds_inclusive() {
        let log = log_of(5);
        let from = t0() + Duration::minutes(1);
        let to = t0() + Duration::minutes(3);
        let seqs: Vec<u64> = log
            .export_episodes(Some(from), Some(to))
            .iter()
            .map(|e| e.sequence)
            .collect();
        assert_eq!(seqs, vec![2, 3, 4]);

        let open_end: Vec<u64> = log
            .export_episodes(Some(to), None)
            .iter()
            .map(|e| e.sequence)
            .collect();
        assert_eq!(open_end, vec![4, 5]);
    }
}
