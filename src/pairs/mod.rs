//! Pairwise-specific translation chains
//!
//! One hand-authored, ordered rewrite rule sequence per explicitly
//! supported language pair. The relative order inside a chain is a hard
//! compatibility contract: rules overlap in what they match (a boolean
//! literal rule and a declaration rule can touch the same token), so
//! reordering silently changes output. Each rule is total over
//! line-oriented text; no match is a no-op, never an error.
//!
//! Chains are registered in a `PairwiseRegistry` keyed by the ordered
//! (source, target) id pair and built once at process start. Every chain
//! also hard-codes its own boilerplate wrapper. That duplication is
//! intentional: each pairwise path can be tuned and tested independently
//! without perturbing the others.

pub mod java;
pub mod javascript;
pub mod python;

use regex::Regex;
use std::collections::HashMap;

/// An ordered, pre-compiled table of (pattern, replacement) rewrite rules
pub(crate) type RuleSet = Vec<(Regex, &'static str)>;

/// Compile a rule table, preserving source order
pub(crate) fn compile_rules(table: &[(&str, &'static str)]) -> RuleSet {
    table
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("hard-coded rule pattern"),
                *replacement,
            )
        })
        .collect()
}

/// Apply every rule in order over the full text
pub(crate) fn apply_rules(code: &str, rules: &RuleSet) -> String {
    rules.iter().fold(code.to_string(), |acc, (re, replacement)| {
        re.replace_all(&acc, *replacement).into_owned()
    })
}

/// A registered pairwise chain: one transform plus its fixed confidence
#[derive(Clone)]
pub struct PairwiseChain {
    pub transform: fn(&str) -> String,
    pub confidence: u8,
}

/// Registry mapping an ordered (source_id, target_id) pair to its chain
#[derive(Clone, Default)]
pub struct PairwiseRegistry {
    chains: HashMap<(String, String), PairwiseChain>,
}

impl PairwiseRegistry {
    pub fn new() -> Self {
        PairwiseRegistry {
            chains: HashMap::new(),
        }
    }

    /// The full enumerated pair set with its fixed per-pair confidences.
    ///
    /// Lower confidence where the conversion has to guess static types from
    /// literal shape (python→c, python→swift) or bridge a wide semantic gap
    /// (java→csharp).
    pub fn builtin() -> Self {
        let mut registry = PairwiseRegistry::new();
        registry
            .with_chain("python", "javascript", python::python_to_javascript, 70)
            .with_chain("python", "java", python::python_to_java, 65)
            .with_chain("python", "cpp", python::python_to_cpp, 60)
            .with_chain("python", "c", python::python_to_c, 55)
            .with_chain("python", "typescript", python::python_to_typescript, 70)
            .with_chain("python", "go", python::python_to_go, 60)
            .with_chain("python", "ruby", python::python_to_ruby, 65)
            .with_chain("python", "php", python::python_to_php, 60)
            .with_chain("python", "swift", python::python_to_swift, 55)
            .with_chain("python", "csharp", python::python_to_csharp, 60)
            .with_chain("javascript", "python", javascript::javascript_to_python, 50)
            .with_chain("java", "csharp", java::java_to_csharp, 40);
        registry
    }

    pub fn with_chain(
        &mut self,
        source_id: &str,
        target_id: &str,
        transform: fn(&str) -> String,
        confidence: u8,
    ) -> &mut Self {
        self.chains.insert(
            (source_id.to_string(), target_id.to_string()),
            PairwiseChain {
                transform,
                confidence,
            },
        );
        self
    }

    pub fn get(&self, source_id: &str, target_id: &str) -> Option<&PairwiseChain> {
        self.chains
            .get(&(source_id.to_string(), target_id.to_string()))
    }

    pub fn covers_pair(&self, source_id: &str, target_id: &str) -> bool {
        self.get(source_id, target_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
