//! The fallback translation engine front door
//!
//! `FallbackEngine` bundles the template and pairwise registries built once
//! at startup and exposes the single synchronous operation the orchestrator
//! calls when its primary AI-backed translator is unavailable. The engine
//! is a pure function of its inputs and the static tables: no I/O, no
//! shared mutable state, no failure mode. Every input, including fully
//! unsupported pairs and malformed source, yields a displayable result;
//! quality degradation is reported only through the confidence score.

use crate::generic::generic_translation;
use crate::language::Language;
use crate::pairs::PairwiseRegistry;
use crate::strategy::{TEMPLATE_CONFIDENCE, generic_confidence, select_strategy};
use crate::template::{TemplateRegistry, translate_with_templates};
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, info};

/// The result of a fallback translation
///
/// `confidence` is an advisory quality score in [0, 100], never a
/// success/failure flag. `is_fallback` is always true; the field exists so
/// callers can distinguish this engine's output from the primary
/// translator's in a mixed response stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackTranslation {
    #[serde(rename = "translatedCode")]
    pub translated_code: String,
    pub confidence: u8,
    #[serde(rename = "isFallback")]
    pub is_fallback: bool,
}

impl FallbackTranslation {
    fn new(translated_code: String, confidence: u8) -> Self {
        FallbackTranslation {
            translated_code,
            confidence,
            is_fallback: true,
        }
    }
}

/// Rule-based fallback translator over immutable registries
///
/// Construction compiles nothing eagerly; rule tables live in per-chain
/// statics compiled on first use. The engine is `Send + Sync` and can be
/// shared freely across threads without locking.
#[derive(Clone, Default)]
pub struct FallbackEngine {
    templates: TemplateRegistry,
    pairs: PairwiseRegistry,
}

static ENGINE: LazyLock<FallbackEngine> = LazyLock::new(FallbackEngine::new);

impl FallbackEngine {
    pub fn new() -> Self {
        FallbackEngine {
            templates: TemplateRegistry::builtin(),
            pairs: PairwiseRegistry::builtin(),
        }
    }

    /// Translate source code between two languages
    ///
    /// Strategy priority: template, then pairwise, then generic (spelled
    /// out in `strategy`). Always returns a result; never raises.
    pub fn translate(
        &self,
        source_code: &str,
        source_language: &Language,
        target_language: &Language,
    ) -> FallbackTranslation {
        let source_id = source_language.id.to_lowercase();
        let target_id = target_language.id.to_lowercase();

        let strategy = select_strategy(&source_id, &target_id, &self.templates, &self.pairs);
        debug!(
            source = %source_id,
            target = %target_id,
            ?strategy,
            "selected fallback strategy"
        );

        // Dispatch by direct lookup so the no-failure contract needs no
        // unreachable arms; the lookups agree with select_strategy by
        // construction.
        let result = if let (Some(source), Some(target)) = (
            self.templates.get(&source_id),
            self.templates.get(&target_id),
        ) {
            FallbackTranslation::new(
                translate_with_templates(source_code, source, target),
                TEMPLATE_CONFIDENCE,
            )
        } else if let Some(chain) = self.pairs.get(&source_id, &target_id) {
            FallbackTranslation::new((chain.transform)(source_code), chain.confidence)
        } else {
            FallbackTranslation::new(
                generic_translation(source_code, source_language, target_language),
                generic_confidence(&source_id),
            )
        };

        info!(
            source = %source_id,
            target = %target_id,
            confidence = result.confidence,
            "fallback translation complete"
        );
        result
    }
}

/// Translate using the process-wide engine built on first use
///
/// Convenience entry point for callers that do not hold their own
/// `FallbackEngine`.
pub fn fallback_translate(
    source_code: &str,
    source_language: &Language,
    target_language: &Language,
) -> FallbackTranslation {
    ENGINE.translate(source_code, source_language, target_language)
}
