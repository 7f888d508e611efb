//! Wisdom catalog: the registry of named sources
//!
//! Built once from the static tables in [`crate::sources`] and never mutated
//! afterwards. Sources are keyed by id in a `BTreeMap` so every listing and
//! every "first eligible" choice is made in a stable order.

use crate::aeon::AeonLevel;
use crate::config::{Config, DEFAULT_SOURCE};
use crate::error::{Result, WisdomError};
use crate::sources::{built_in_sources, SourceDef};
use crate::types::{Language, Quote, SourceRef, SourceSummary};
use std::collections::BTreeMap;

/// A named wisdom corpus with quotes bucketed by aeon level
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub language: Language,
    buckets: [Vec<Quote>; 5],
}

impl Source {
    pub fn new(id: &str, name: &str, icon: &str, language: Language) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            language,
            buckets: Default::default(),
        }
    }

    /// Add a quote to the bucket for `level`, stamping it with this source
    pub fn push_quote(&mut self, level: AeonLevel, text: &str, attribution: &str, encouragement: &str) {
        let quote = Quote {
            text: text.to_string(),
            attribution: attribution.to_string(),
            encouragement: encouragement.to_string(),
            source_name: self.name.clone(),
            source_icon: self.icon.clone(),
        };
        self.buckets[level.index()].push(quote);
    }

    fn from_def(def: &SourceDef) -> Self {
        let mut source = Source::new(def.id, def.name, def.icon, def.language);
        for level in AeonLevel::ALL {
            for (text, attribution, encouragement) in def.quotes[level.index()] {
                source.push_quote(level, text, attribution, encouragement);
            }
        }
        source
    }

    /// The exact bucket for `level`, possibly empty
    pub fn quotes_at(&self, level: AeonLevel) -> &[Quote] {
        &self.buckets[level.index()]
    }

    /// The bucket to draw from at `level`: the level's own bucket, or the
    /// first non-empty bucket in `AeonLevel::ALL` order. Empty only when the
    /// source has no quotes at all.
    pub fn bucket_for(&self, level: AeonLevel) -> &[Quote] {
        let own = self.quotes_at(level);
        if !own.is_empty() {
            return own;
        }
        AeonLevel::ALL
            .iter()
            .map(|l| self.quotes_at(*l))
            .find(|bucket| !bucket.is_empty())
            .unwrap_or(&[])
    }

    /// First quote of the fallback-resolved bucket, or the silence sentinel
    pub fn quote_for(&self, level: AeonLevel) -> Quote {
        self.bucket_for(level)
            .first()
            .cloned()
            .unwrap_or_else(Quote::silence)
    }

    pub fn quote_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn reference(&self) -> SourceRef {
        SourceRef {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// Immutable registry of all wisdom sources
#[derive(Debug, Clone, Default)]
pub struct WisdomCatalog {
    sources: BTreeMap<String, Source>,
}

impl WisdomCatalog {
    /// Load every built-in source
    pub fn built_in() -> Self {
        Self::from_sources(built_in_sources().iter().map(Source::from_def))
    }

    pub fn from_sources(sources: impl IntoIterator<Item = Source>) -> Self {
        Self {
            sources: sources.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get_source(&self, id: &str) -> Result<&Source> {
        self.sources
            .get(id)
            .ok_or_else(|| WisdomError::UnknownSource(id.to_string()))
    }

    fn is_eligible(source: &Source, config: &Config) -> bool {
        if config.hebrew_only {
            source.language == Language::Hebrew
        } else if config.hebrew_enabled {
            true
        } else {
            source.language == Language::Default
        }
    }

    fn eligible_source(&self, id: &str, config: &Config) -> Option<&Source> {
        self.sources
            .get(id)
            .filter(|source| Self::is_eligible(source, config))
    }

    /// Sources that may serve as the default source under `config`, by id
    pub fn eligible_sources(&self, config: &Config) -> Vec<&str> {
        self.sources
            .values()
            .filter(|s| Self::is_eligible(s, config))
            .map(|s| s.id.as_str())
            .collect()
    }

    /// The configured source if it exists and is eligible, else
    /// [`DEFAULT_SOURCE`] if eligible, else the first eligible source by id.
    pub fn default_source(&self, config: &Config) -> Result<&Source> {
        if let Some(source) = self.eligible_source(&config.source, config) {
            return Ok(source);
        }

        let fallback = self
            .eligible_source(DEFAULT_SOURCE, config)
            .or_else(|| self.sources.values().find(|s| Self::is_eligible(s, config)))
            .ok_or_else(|| WisdomError::UnknownSource(config.source.clone()))?;

        tracing::warn!(
            configured = %config.source,
            using = %fallback.id,
            "Configured wisdom source unavailable or not eligible, falling back"
        );
        Ok(fallback)
    }

    pub fn summaries(&self, config: &Config) -> Vec<SourceSummary> {
        self.sources
            .values()
            .map(|s| SourceSummary {
                id: s.id.clone(),
                name: s.name.clone(),
                icon: s.icon.clone(),
                language: s.language,
                quote_count: s.quote_count(),
                eligible: Self::is_eligible(s, config),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    fn sparse_source() -> Source {
        let mut source = Source::new("sparse", "Sparse", "🕳️", Language::Default);
        source.push_quote(AeonLevel::Treasury, "Only at the top.", "Sparse 1", "Climb.");
        source.push_quote(AeonLevel::MiddleAeons, "Halfway there.", "Sparse 2", "Keep going.");
        source
    }

    #[test]
    fn test_built_in_catalog_loads_everything() {
        let catalog = WisdomCatalog::built_in();
        assert_eq!(catalog.len(), 17);
        assert!(catalog.get_source("pistis_sophia").is_ok());
        assert!(catalog.get_source("bofh").is_ok());
    }

    #[test]
    fn test_get_source_unknown() {
        let catalog = WisdomCatalog::built_in();
        assert_eq!(
            catalog.get_source("necronomicon"),
            Err(WisdomError::UnknownSource("necronomicon".to_string()))
        );
    }

    #[test]
    fn test_fallback_uses_fixed_level_order() {
        let source = sparse_source();
        // chaos is empty; middle_aeons comes before treasury in the enumeration
        let quote = source.quote_for(AeonLevel::Chaos);
        assert_eq!(quote.text, "Halfway there.");
        assert_eq!(source.quote_for(AeonLevel::Treasury).text, "Only at the top.");
    }

    #[test]
    fn test_fallback_to_treasury_when_only_bucket() {
        let mut source = Source::new("top", "Top", "⛰️", Language::Default);
        source.push_quote(AeonLevel::Treasury, "Summit.", "Top", "Enjoy the view.");
        let quote = source.quote_for(AeonLevel::Chaos);
        assert_eq!(quote.text, "Summit.");
        assert_ne!(quote, Quote::silence());
    }

    #[test]
    fn test_empty_source_returns_silence() {
        let source = Source::new("void", "Void", "", Language::Default);
        assert!(source.bucket_for(AeonLevel::UpperAeons).is_empty());
        assert_eq!(source.quote_for(AeonLevel::UpperAeons), Quote::silence());
    }

    #[test]
    fn test_quotes_stamped_with_source() {
        let catalog = WisdomCatalog::built_in();
        let bofh = catalog.get_source("bofh").unwrap();
        let quote = bofh.quote_for(AeonLevel::Chaos);
        assert_eq!(quote.source_name, "BOFH (Bastard Operator From Hell)");
        assert_eq!(quote.source_icon, "😈");
    }

    #[test]
    fn test_eligibility_default_excludes_hebrew() {
        let catalog = WisdomCatalog::built_in();
        let eligible = catalog.eligible_sources(&config());
        assert!(eligible.contains(&"tao"));
        assert!(!eligible.contains(&"pirkei_avot"));
    }

    #[test]
    fn test_eligibility_hebrew_enabled_includes_all() {
        let catalog = WisdomCatalog::built_in();
        let cfg = Config {
            hebrew_enabled: true,
            ..config()
        };
        assert_eq!(catalog.eligible_sources(&cfg).len(), catalog.len());
    }

    #[test]
    fn test_eligibility_hebrew_only() {
        let catalog = WisdomCatalog::built_in();
        let cfg = Config {
            hebrew_only: true,
            ..config()
        };
        assert_eq!(
            catalog.eligible_sources(&cfg),
            vec!["ecclesiastes", "pirkei_avot", "proverbs", "psalms"]
        );
    }

    #[test]
    fn test_default_source_respects_config() {
        let catalog = WisdomCatalog::built_in();
        let cfg = Config {
            source: "stoic".to_string(),
            ..config()
        };
        assert_eq!(catalog.default_source(&cfg).unwrap().id, "stoic");
        assert_eq!(catalog.default_source(&config()).unwrap().id, "pistis_sophia");
    }

    #[test]
    fn test_default_source_hebrew_only_falls_back() {
        let catalog = WisdomCatalog::built_in();
        let cfg = Config {
            hebrew_only: true,
            ..config()
        };
        assert_eq!(catalog.default_source(&cfg).unwrap().id, "ecclesiastes");
    }

    #[test]
    fn test_default_source_mistyped_uses_named_default() {
        let catalog = WisdomCatalog::built_in();
        let cfg = Config {
            source: "pistis_sophiaa".to_string(),
            ..config()
        };
        assert_eq!(catalog.default_source(&cfg).unwrap().id, DEFAULT_SOURCE);
    }

    #[test]
    fn test_default_source_ineligible_uses_named_default() {
        let catalog = WisdomCatalog::built_in();
        let cfg = Config {
            source: "psalms".to_string(),
            ..config()
        };
        assert_eq!(catalog.default_source(&cfg).unwrap().id, DEFAULT_SOURCE);

        let hebrew = Config {
            hebrew_enabled: true,
            ..cfg
        };
        assert_eq!(catalog.default_source(&hebrew).unwrap().id, "psalms");
    }

    #[test]
    fn test_default_source_no_eligible() {
        let catalog = WisdomCatalog::from_sources([sparse_source()]);
        let cfg = Config {
            hebrew_only: true,
            ..config()
        };
        assert!(matches!(
            catalog.default_source(&cfg),
            Err(WisdomError::UnknownSource(_))
        ));
    }

    #[test]
    fn test_summaries_sorted_with_eligibility() {
        let catalog = WisdomCatalog::built_in();
        let summaries = catalog.summaries(&config());
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

        let psalms = summaries.iter().find(|s| s.id == "psalms").unwrap();
        assert!(!psalms.eligible);
        assert_eq!(psalms.language, Language::Hebrew);
        assert!(psalms.quote_count > 0);
    }
}
