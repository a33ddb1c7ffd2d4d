//! Translation strategy selection and confidence scoring
//!
//! The chosen path depends only on the (source, target) id pair, never on
//! the code being translated, so selection is deterministic and cheap.
//! Confidence is advisory metadata: a fixed, non-measured integer per
//! strategy (and per pair, for pairwise chains) that never alters or gates
//! the translation itself.

use crate::pairs::PairwiseRegistry;
use crate::template::TemplateRegistry;

/// The translation path chosen for a language pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Both languages carry a template; one shared engine handles the pair
    Template,
    /// A hand-authored rule chain exists for this exact ordered pair
    Pairwise,
    /// Last resort: commented echo of the source plus guidance
    Generic,
}

/// Confidence for the template path
pub const TEMPLATE_CONFIDENCE: u8 = 60;
/// Confidence for the generic path
pub const GENERIC_CONFIDENCE: u8 = 25;
/// Generic confidence for python sources, which get a slightly higher floor
pub const GENERIC_PYTHON_CONFIDENCE: u8 = 30;

/// Select the translation strategy for an ordered language pair
///
/// Priority: template, then pairwise, then generic. A template covering
/// both languages wins even when a pairwise chain exists for the same pair;
/// the generalized, extensible path is deliberately favored over hand-tuned
/// fidelity.
pub fn select_strategy(
    source_id: &str,
    target_id: &str,
    templates: &TemplateRegistry,
    pairs: &PairwiseRegistry,
) -> Strategy {
    if templates.covers_pair(source_id, target_id) {
        Strategy::Template
    } else if pairs.covers_pair(source_id, target_id) {
        Strategy::Pairwise
    } else {
        Strategy::Generic
    }
}

/// Confidence for the generic path, by source language
pub fn generic_confidence(source_id: &str) -> u8 {
    if source_id == "python" {
        GENERIC_PYTHON_CONFIDENCE
    } else {
        GENERIC_CONFIDENCE
    }
}
