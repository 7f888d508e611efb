//! Tool surface for the wisdom server
//!
//! Tool definitions (for `--tools` and client discovery) plus the typed
//! `ToolCall` every request is parsed into before it reaches the engine.

use crate::advisors::AdvisorQuery;
use crate::engine::WisdomEngine;
use crate::error::{Result, WisdomError};
use crate::log::LogFilter;
use crate::types::Advice;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

// ============================================================================
// TOOL DEFINITIONS
// ============================================================================

/// Tool definitions with JSON schemas for their params
pub fn get_tools() -> Vec<Value> {
    vec![
        json!({
            "name": "consult_advisor",
            "description": "Consult a trusted advisor. The advisor is chosen by metric, then tool, then workflow stage (highest precedence supplied wins); with none, the default source speaks. Returns a quote of the day for the score's aeon level, the advisor's rationale, and the consultation mode. Every consultation is logged.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "metric": {
                        "type": "string",
                        "description": "Scorecard metric (security, testing, documentation, completion, alignment, clarity, ci_cd, dogfooding, uniqueness, codebase, parallelizable)"
                    },
                    "tool": {
                        "type": "string",
                        "description": "Tool being run (e.g. run_tests, scan_dependency_security)"
                    },
                    "stage": {
                        "type": "string",
                        "description": "Workflow stage (daily_checkin, planning, implementation, debugging, review, retrospective, celebration)"
                    },
                    "score": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Project health score"
                    },
                    "context": {
                        "type": "string",
                        "description": "Optional free-text note stored with the consultation"
                    }
                },
                "required": ["score"]
            }
        }),
        json!({
            "name": "get_wisdom",
            "description": "Quote of the day from a specific wisdom source at the score's aeon level. Read-only: nothing is logged.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "score": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Project health score"
                    },
                    "source": {
                        "type": "string",
                        "description": "Source id (see list_sources)"
                    }
                },
                "required": ["score", "source"]
            }
        }),
        json!({
            "name": "get_daily_briefing",
            "description": "Daily check-in consultation, logged like consult_advisor with stage daily_checkin. Given per-metric scores, also advises on the three weakest known metrics, lowest score first; that advice is not logged.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "score": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Project health score (default 50)"
                    },
                    "metric_scores": {
                        "type": "object",
                        "additionalProperties": {
                            "type": "number",
                            "minimum": 0,
                            "maximum": 100
                        },
                        "description": "Scorecard metric name to its score, e.g. {\"security\": 35}"
                    }
                }
            }
        }),
        json!({
            "name": "get_consultation_log",
            "description": "Consultations recorded this session. Filters apply before the limit. With a positive limit, the newest first; otherwise all of them, oldest first.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Maximum entries to return"
                    },
                    "advisor": {
                        "type": "string",
                        "description": "Only consultations with this advisor"
                    },
                    "metric": {
                        "type": "string",
                        "description": "Only consultations resolved by this metric"
                    },
                    "stage": {
                        "type": "string",
                        "description": "Only consultations resolved by this workflow stage"
                    },
                    "days": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Only consultations from the last N days"
                    }
                }
            }
        }),
        json!({
            "name": "export_for_podcast",
            "description": "Export consultations as podcast episodes, oldest first. Bounds are inclusive RFC 3339 timestamps or YYYY-MM-DD dates.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "from": {
                        "type": "string",
                        "description": "Earliest timestamp or date"
                    },
                    "to": {
                        "type": "string",
                        "description": "Latest timestamp or date (a date covers the whole day)"
                    }
                }
            }
        }),
        json!({
            "name": "list_sources",
            "description": "Every wisdom source with its language, quote count, and whether it may serve as the default source.",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        }),
    ]
}

// ============================================================================
// TOOL CALLS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsultParams {
    pub metric: Option<String>,
    pub tool: Option<String>,
    pub stage: Option<String>,
    pub score: f64,
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WisdomParams {
    pub score: f64,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BriefingParams {
    pub score: Option<f64>,
    #[serde(default)]
    pub metric_scores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LogParams {
    pub limit: Option<i64>,
    pub advisor: Option<String>,
    pub metric: Option<String>,
    pub stage: Option<String>,
    pub days: Option<u32>,
}

impl LogParams {
    pub fn filter(&self) -> LogFilter<'_> {
        LogFilter {
            advisor: self.advisor.as_deref(),
            metric: self.metric.as_deref(),
            stage: self.stage.as_deref(),
            days: self.days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExportParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// A request's tool and params, checked for shape
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    ConsultAdvisor(ConsultParams),
    GetWisdom(WisdomParams),
    GetDailyBriefing(BriefingParams),
    GetConsultationLog(LogParams),
    ExportForPodcast(ExportParams),
    ListSources,
}

fn params_for<P: DeserializeOwned>(tool: &str, params: Value) -> Result<P> {
    serde_json::from_value(params).map_err(|e| WisdomError::InvalidParams {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

fn encode<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| WisdomError::Encode(e.to_string()))
}

fn encode_advice<T: Serialize>(advice: Advice<T>, wrap: Option<&str>) -> Result<Value> {
    match advice {
        Advice::Disabled => Ok(json!({ "disabled": true })),
        Advice::Given(value) => {
            let value = encode(&value)?;
            Ok(match wrap {
                Some(key) => {
                    let mut wrapped = Map::new();
                    wrapped.insert(key.to_string(), value);
                    Value::Object(wrapped)
                }
                None => value,
            })
        }
    }
}

/// Which end of the day a bare date stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Parse an export bound: RFC 3339, or `YYYY-MM-DD` covering the whole day
pub fn parse_bound(value: &str, bound: Bound) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    let invalid = || WisdomError::InvalidTimestamp {
        value: value.to_string(),
    };
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;
    let naive = match bound {
        Bound::Start => date.and_hms_opt(0, 0, 0),
        Bound::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
    }
    .ok_or_else(invalid)?;
    Ok(naive.and_utc())
}

impl ToolCall {
    /// Check `params` against the shape `tool` expects. Null params count as `{}`.
    pub fn parse(tool: &str, params: Value) -> Result<Self> {
        let params = if params.is_null() { json!({}) } else { params };
        match tool {
            "consult_advisor" => Ok(ToolCall::ConsultAdvisor(params_for(tool, params)?)),
            "get_wisdom" => Ok(ToolCall::GetWisdom(params_for(tool, params)?)),
            "get_daily_briefing" => Ok(ToolCall::GetDailyBriefing(params_for(tool, params)?)),
            "get_consultation_log" => Ok(ToolCall::GetConsultationLog(params_for(tool, params)?)),
            "export_for_podcast" => Ok(ToolCall::ExportForPodcast(params_for(tool, params)?)),
            "list_sources" => Ok(ToolCall::ListSources),
            other => Err(WisdomError::UnknownTool(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::ConsultAdvisor(_) => "consult_advisor",
            ToolCall::GetWisdom(_) => "get_wisdom",
            ToolCall::GetDailyBriefing(_) => "get_daily_briefing",
            ToolCall::GetConsultationLog(_) => "get_consultation_log",
            ToolCall::ExportForPodcast(_) => "export_for_podcast",
            ToolCall::ListSources => "list_sources",
        }
    }

    /// Run against the engine, producing the response's `result` value
    pub fn execute(&self, engine: &WisdomEngine) -> Result<Value> {
        match self {
            ToolCall::ConsultAdvisor(p) => {
                let query = AdvisorQuery {
                    metric: p.metric.as_deref(),
                    tool: p.tool.as_deref(),
                    stage: p.stage.as_deref(),
                };
                encode_advice(engine.consult_advisor(query, p.score, p.context.as_deref())?, None)
            }
            ToolCall::GetWisdom(p) => encode_advice(engine.get_wisdom(p.score, &p.source)?, None),
            ToolCall::GetDailyBriefing(p) => {
                encode_advice(
                    engine.get_daily_briefing(p.score, &p.metric_scores)?,
                    Some("briefing"),
                )
            }
            ToolCall::GetConsultationLog(p) => {
                encode(&engine.consultation_log(p.limit, p.filter())?)
            }
            ToolCall::ExportForPodcast(p) => {
                let from = p.from.as_deref().map(|v| parse_bound(v, Bound::Start)).transpose()?;
                let to = p.to.as_deref().map(|v| parse_bound(v, Bound::End)).transpose()?;
                encode(&engine.export_for_podcast(from, to)?)
            }
            ToolCall::ListSources => encode(&engine.list_sources()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::FixedClock;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 14, 0, 0).unwrap()
    }

    fn engine() -> WisdomEngine {
        let engine = WisdomEngine::with_clock(Config::default(), Arc::new(FixedClock(at())));
        engine.initialize().unwrap();
        engine
    }

    #[test]
    fn test_tool_definitions_match_parser() {
        let tools = get_tools();
        assert_eq!(tools.len(), 6);
        for tool in &tools {
            let name = tool["name"].as_str().unwrap();
            assert!(tool["description"].as_str().is_some_and(|d| !d.is_empty()));
            assert_eq!(tool["inputSchema"]["type"], "object");
            // every advertised tool must be recognized (params may still be invalid)
            let parsed = ToolCall::parse(name, json!({}));
            assert!(
                !matches!(parsed, Err(WisdomError::UnknownTool(_))),
                "{name} is advertised but not parsed"
            );
        }
    }

    #[test]
    fn test_parse_consult() {
        let call = ToolCall::parse(
            "consult_advisor",
            json!({"metric": "security", "score": 42.5, "context": "audit"}),
        )
        .unwrap();
        assert_eq!(call.name(), "consult_advisor");
        let ToolCall::ConsultAdvisor(p) = call else {
            panic!("expected consult_advisor");
        };
        assert_eq!(p.metric.as_deref(), Some("security"));
        assert_eq!(p.score, 42.5);
        assert_eq!(p.tool, None);
    }

    #[test]
    fn test_parse_unknown_tool() {
        assert_eq!(
            ToolCall::parse("bogus", json!({})),
            Err(WisdomError::UnknownTool("bogus".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_or_mistyped_params() {
        let missing = ToolCall::parse("get_wisdom", json!({"source": "tao"})).unwrap_err();
        assert_eq!(missing.code(), "InvalidParams");
        let mistyped = ToolCall::parse("consult_advisor", json!({"score": "high"})).unwrap_err();
        assert_eq!(mistyped.code(), "InvalidParams");
        let not_object = ToolCall::parse("get_consultation_log", json!([1, 2])).unwrap_err();
        assert_eq!(not_object.code(), "InvalidParams");
    }

    #[test]
    fn test_null_params_are_empty() {
        assert_eq!(
            ToolCall::parse("get_daily_briefing", Value::Null).unwrap(),
            ToolCall::GetDailyBriefing(BriefingParams::default())
        );
        assert_eq!(ToolCall::parse("list_sources", Value::Null).unwrap(), ToolCall::ListSources);
    }

    #[test]
    fn test_parse_bound_rfc3339_and_dates() {
        assert_eq!(
            parse_bound("2026-10-19T10:30:00+02:00", Bound::Start).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
        );
        assert_eq!(
            parse_bound("2026-10-19", Bound::Start).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
        );
        let end = parse_bound("2026-10-19", Bound::End).unwrap();
        assert!(end > Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 59).unwrap());
        assert!(end < Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_bound_rejects_garbage() {
        let err = parse_bound("yesterday", Bound::Start).unwrap_err();
        assert_eq!(
            err,
            WisdomError::InvalidTimestamp {
                value: "yesterday".to_string()
            }
        );
        assert_eq!(err.code(), "InvalidParams");
    }

    #[test]
    fn test_execute_briefing_is_wrapped() {
        let engine = engine();
        let result = ToolCall::GetDailyBriefing(BriefingParams {
            score: Some(90.0),
            ..Default::default()
        })
        .execute(&engine)
        .unwrap();
        assert_eq!(result["briefing"]["aeon_level"], "treasury");
        assert_eq!(result["briefing"]["advisor"], "pistis_sophia");
        assert!(result["briefing"]["mode_description"].as_str().is_some());
        assert!(result["briefing"].get("focus").is_none());
    }

    #[test]
    fn test_execute_briefing_with_metric_scores() {
        let engine = engine();
        let call = ToolCall::parse(
            "get_daily_briefing",
            json!({"score": 70, "metric_scores": {"testing": 55, "security": 20, "ci_cd": 90, "codebase": 30}}),
        )
        .unwrap();
        let result = call.execute(&engine).unwrap();

        let focus: Vec<&str> = result["briefing"]["focus"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["metric"].as_str().unwrap())
            .collect();
        assert_eq!(focus, vec!["security", "codebase", "testing"]);
        assert_eq!(result["briefing"]["focus"][0]["advisor"], "bofh");
        // check-in fields stay at the top level
        assert_eq!(result["briefing"]["advisor"], "pistis_sophia");

        let log = ToolCall::parse("get_consultation_log", json!({}))
            .unwrap()
            .execute(&engine)
            .unwrap();
        assert_eq!(log.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_parse_log_filters() {
        let call = ToolCall::parse(
            "get_consultation_log",
            json!({"limit": 5, "metric": "security", "stage": "review", "days": 7}),
        )
        .unwrap();
        let ToolCall::GetConsultationLog(p) = call else {
            panic!("expected get_consultation_log");
        };
        assert_eq!(
            p.filter(),
            LogFilter {
                advisor: None,
                metric: Some("security"),
                stage: Some("review"),
                days: Some(7),
            }
        );

        let negative = ToolCall::parse("get_consultation_log", json!({"days": -1})).unwrap_err();
        assert_eq!(negative.code(), "InvalidParams");
    }

    #[test]
    fn test_execute_log_with_metric_filter() {
        let engine = engine();
        for params in [
            json!({"metric": "security", "score": 10}),
            json!({"metric": "testing", "score": 50}),
            json!({"stage": "debugging", "score": 30}),
        ] {
            ToolCall::parse("consult_advisor", params)
                .unwrap()
                .execute(&engine)
                .unwrap();
        }
        // debugging also resolves to bofh, but not through a metric
        let log = ToolCall::parse("get_consultation_log", json!({"metric": "security", "days": 1}))
            .unwrap()
            .execute(&engine)
            .unwrap();
        assert_eq!(log.as_array().map(Vec::len), Some(1));
        assert_eq!(log[0]["advisor"], "bofh");
    }

    #[test]
    fn test_execute_disabled_result() {
        let engine = WisdomEngine::new(Config {
            disabled: true,
            ..Default::default()
        });
        engine.initialize().unwrap();
        let call = ToolCall::parse("get_wisdom", json!({"score": 10, "source": "tao"})).unwrap();
        assert_eq!(call.execute(&engine).unwrap(), json!({"disabled": true}));
    }

    #[test]
    fn test_execute_export_with_date_bounds() {
        let engine = engine();
        ToolCall::parse("consult_advisor", json!({"stage": "review", "score": 61}))
            .unwrap()
            .execute(&engine)
            .unwrap();

        let call = ToolCall::ExportForPodcast(ExportParams {
            from: Some("2026-10-19".to_string()),
            to: Some("2026-10-19".to_string()),
        });
        let episodes = call.execute(&engine).unwrap();
        assert_eq!(episodes.as_array().map(Vec::len), Some(1));
        assert_eq!(episodes[0]["advisor"], "stoic");

        let before = ToolCall::ExportForPodcast(ExportParams {
            from: None,
            to: Some("2026-10-18".to_string()),
        });
        assert_eq!(before.execute(&engine).unwrap().as_array().map(Vec::len), Some(0));

        let bad = ToolCall::ExportForPodcast(ExportParams {
            from: Some("soon".to_string()),
            to: None,
        });
        assert_eq!(bad.execute(&engine).unwrap_err().code(), "InvalidParams");
    }

    #[test]
    fn test_execute_list_sources() {
        let result = ToolCall::ListSources.execute(&engine()).unwrap();
        assert_eq!(result["default_source"], "pistis_sophia");
        assert_eq!(result["sources"].as_array().map(Vec::len), Some(17));
    }
}
