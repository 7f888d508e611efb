//! Trusted advisors: which wisdom source speaks for which context
//!
//! Three independent tables map a metric, a tool, or a workflow stage to an
//! advisor. When several contexts are supplied the metric wins, then the
//! tool, then the stage; with none, the default source speaks.

use crate::catalog::Source;
use crate::error::{Result, WisdomError};
use crate::types::{AdvisorInfo, ContextKind};
use std::collections::HashMap;

/// Stage used by the daily briefing
pub const DAILY_CHECKIN: &str = "daily_checkin";

type Entry = (&'static str, &'static str, Option<&'static str>, &'static str, Option<&'static str>);

// (key, advisor, icon, rationale, helps_with)
const METRIC_ADVISORS: &[Entry] = &[
    ("security", "bofh", Some("😈"), "BOFH is paranoid about security, expects users to break everything", Some("Finding vulnerabilities, defensive thinking, access control")),
    ("testing", "stoic", Some("🏛️"), "Stoics teach discipline through adversity - tests reveal truth", Some("Persistence through failures, accepting harsh feedback")),
    ("documentation", "confucius", Some("🎓"), "Confucius emphasized teaching and transmitting wisdom", Some("Clear explanations, teaching future maintainers")),
    ("completion", "art_of_war", Some("⚔️"), "Sun Tzu teaches strategy and decisive execution", Some("Prioritization, knowing when to attack vs wait")),
    ("alignment", "tao", Some("☯️"), "Tao emphasizes balance, flow, and purpose", Some("Ensuring work serves project goals, finding harmony")),
    ("clarity", "gracian", Some("🎭"), "Gracián's maxims are models of clarity and pragmatism", Some("Simplifying complexity, clear communication")),
    ("ci_cd", "kybalion", Some("⚗️"), "Kybalion teaches cause and effect - CI/CD is pure causation", Some("Understanding pipelines, automation philosophy")),
    ("dogfooding", "murphy", Some("🔧"), "Murphy's Law: if it can break, it will - use your own tools!", Some("Finding edge cases, eating your own cooking")),
    ("uniqueness", "shakespeare", Some("🎭"), "Shakespeare created unique works that transcended his time", Some("Creative differentiation, memorable design")),
    ("codebase", "enochian", Some("🔮"), "Enochian mysticism reveals hidden structure and patterns", Some("Architecture, finding hidden connections")),
    ("parallelizable", "tao_of_programming", Some("💻"), "The Tao of Programming teaches elegant parallel design", Some("Decomposition, independent task design")),
];

const TOOL_ADVISORS: &[Entry] = &[
    ("project_scorecard", "pistis_sophia", None, "Journey through aeons mirrors project health stages", None),
    ("project_overview", "kybalion", None, "Hermetic principles for holistic understanding", None),
    ("sprint_automation", "art_of_war", None, "Sprint is a campaign requiring strategy", None),
    ("check_documentation_health", "confucius", None, "Teaching requires good documentation", None),
    ("analyze_todo2_alignment", "tao", None, "Alignment is balance and flow", None),
    ("detect_duplicate_tasks", "bofh", None, "Duplicates are user error manifested", None),
    ("scan_dependency_security", "bofh", None, "Security paranoia is a feature", None),
    ("run_tests", "stoic", None, "Tests teach through failure", None),
    ("validate_ci_cd_workflow", "kybalion", None, "CI/CD is cause and effect", None),
    ("dev_reload", "murphy", None, "Hot reload because Murphy says restarts will fail at the worst time", None),
];

const STAGE_ADVISORS: &[Entry] = &[
    (DAILY_CHECKIN, "pistis_sophia", Some("📜"), "Start each day with enlightenment journey wisdom", None),
    ("planning", "art_of_war", Some("⚔️"), "Planning is strategy - Sun Tzu is the master", None),
    ("implementation", "tao_of_programming", Some("💻"), "During coding, let the code flow naturally", None),
    ("debugging", "bofh", Some("😈"), "BOFH knows all the ways things break", None),
    ("review", "stoic", Some("🏛️"), "Review requires accepting harsh truths with equanimity", None),
    ("retrospective", "confucius", Some("🎓"), "Retrospectives are about learning and teaching", None),
    ("celebration", "shakespeare", Some("🎭"), "Celebrate with drama and poetry!", None),
];

fn build_table(entries: &[Entry]) -> HashMap<String, AdvisorInfo> {
    entries
        .iter()
        .map(|(key, advisor, icon, rationale, helps_with)| {
            (
                key.to_string(),
                AdvisorInfo {
                    advisor_id: advisor.to_string(),
                    icon: icon.map(String::from),
                    rationale: rationale.to_string(),
                    helps_with: helps_with.map(String::from),
                },
            )
        })
        .collect()
}

/// The context fields a caller may supply
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisorQuery<'a> {
    pub metric: Option<&'a str>,
    pub tool: Option<&'a str>,
    pub stage: Option<&'a str>,
}

/// Outcome of resolving an advisor
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub kind: ContextKind,
    pub value: Option<String>,
    pub advisor: AdvisorInfo,
}

/// Context → advisor lookup tables, immutable after construction
#[derive(Debug, Clone)]
pub struct AdvisorResolver {
    metric_advisors: HashMap<String, AdvisorInfo>,
    tool_advisors: HashMap<String, AdvisorInfo>,
    stage_advisors: HashMap<String, AdvisorInfo>,
}

impl Default for AdvisorResolver {
    fn default() -> Self {
        Self::built_in()
    }
}

impl AdvisorResolver {
    pub fn built_in() -> Self {
        Self {
            metric_advisors: build_table(METRIC_ADVISORS),
            tool_advisors: build_table(TOOL_ADVISORS),
            stage_advisors: build_table(STAGE_ADVISORS),
        }
    }

    pub fn advisor_for_metric(&self, metric: &str) -> Option<&AdvisorInfo> {
        self.metric_advisors.get(metric)
    }

    pub fn advisor_for_tool(&self, tool: &str) -> Option<&AdvisorInfo> {
        self.tool_advisors.get(tool)
    }

    pub fn advisor_for_stage(&self, stage: &str) -> Option<&AdvisorInfo> {
        self.stage_advisors.get(stage)
    }

    /// Every advisor id referenced by any table, sorted and deduplicated
    pub fn referenced_sources(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .metric_advisors
            .values()
            .chain(self.tool_advisors.values())
            .chain(self.stage_advisors.values())
            .map(|a| a.advisor_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Resolve with precedence metric > tool > stage > default.
    ///
    /// Only the highest-precedence supplied field is looked up; a value missing
    /// from its table is `UnknownContext`. Absent fields are skipped.
    pub fn resolve(&self, query: AdvisorQuery<'_>, default_source: &Source) -> Result<Resolution> {
        let candidates = [
            (ContextKind::Metric, query.metric, &self.metric_advisors),
            (ContextKind::Tool, query.tool, &self.tool_advisors),
            (ContextKind::Stage, query.stage, &self.stage_advisors),
        ];

        for (kind, value, table) in candidates {
            let Some(value) = value else { continue };
            let advisor = table.get(value).ok_or_else(|| WisdomError::UnknownContext {
                kind: kind.to_string(),
                value: value.to_string(),
            })?;
            return Ok(Resolution {
                kind,
                value: Some(value.to_string()),
                advisor: advisor.clone(),
            });
        }

        Ok(Resolution {
            kind: ContextKind::None,
            value: None,
            advisor: Self::default_advisor(default_source),
        })
    }

    /// Persona for the default source
    pub fn default_advisor(source: &Source) -> AdvisorInfo {
        AdvisorInfo {
            advisor_id: source.id.clone(),
            icon: Some(source.icon.clone()),
            rationale: format!("{} is the project's default source of wisdom", source.name),
            helps_with: Some("General reflection on project health".to_string()),
        }
    }
}
