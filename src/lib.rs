//! devwisdom - Trusted Advisors for Development Workflows
//!
//! A tool-call server that answers a project-health score with a quote of the
//! day from a curated wisdom source, chosen by the advisor who best fits what
//! the developer is doing, and remembers every consultation.
//!
//! # Philosophy
//!
//! - **Determinism**: the same source, level, and day always give the same quote
//! - **Transparency**: every consultation explains why its advisor was chosen
//! - **Memory**: the session log can be replayed as podcast episodes
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use devwisdom::{AdvisorQuery, Config, WisdomEngine};
//!
//! let engine = WisdomEngine::new(Config::load()?);
//! engine.initialize()?;
//!
//! let query = AdvisorQuery { metric: Some("security"), ..Default::default() };
//! if let Some(advice) = engine.consult_advisor(query, 42.0, None)?.given() {
//!     println!("{} says: {}", advice.advisor, advice.quote.text);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                AI Agent / MCP client                 │
//! └─────────────────────┬───────────────────────────────┘
//!                       │ JSON records over stdio
//!                       ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  server   → decode, dispatch, respond               │
//! │  mcp      → tool definitions, typed ToolCall         │
//! │  engine   → advisors + catalog + selector + log      │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod advisors;
pub mod aeon;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod mcp;
pub mod selector;
pub mod server;
pub mod sources;
pub mod types;

// Core types
pub use aeon::{classify, AeonLevel, ConsultationMode};
pub use error::{Result, WisdomError};
pub use types::*;

// Engine
pub use advisors::{AdvisorQuery, AdvisorResolver};
pub use catalog::{Source, WisdomCatalog};
pub use log::LogFilter;
pub use config::Config;
pub use engine::{Clock, FixedClock, SystemClock, WisdomEngine};

// Protocol
pub use mcp::{get_tools, ToolCall};
pub use server::WisdomServer;
