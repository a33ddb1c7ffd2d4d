//! Rule-based fallback code translation
//!
//! This crate provides a deterministic, always-available translation path for
//! source code when a primary AI-backed translator cannot be reached. It never
//! fails: every language pair produces output, with an advisory confidence
//! score describing how much trust the result deserves.
//!
//! # Example
//!
//! ```ignore
//! use rosetta_fallback::{FallbackEngine, LanguageRegistry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let languages = LanguageRegistry::builtin();
//!     let python = languages.resolve("python")?;
//!     let javascript = languages.resolve("javascript")?;
//!
//!     let engine = FallbackEngine::new();
//!     let result = engine.translate("print(\"hi\")", python, javascript);
//!
//!     println!("{} (confidence {})", result.translated_code, result.confidence);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod generic;
pub mod indent;
pub mod language;
pub mod pairs;
pub mod strategy;
pub mod template;


// Re-export main types for convenient access
pub use engine::{FallbackEngine, FallbackTranslation, fallback_translate};
pub use error::{FallbackError, FallbackResult};
pub use language::{Language, LanguageRegistry};
pub use pairs::{PairwiseChain, PairwiseRegistry};
pub use strategy::{Strategy, select_strategy};
pub use template::{LanguageTemplate, TemplateRegistry, translate_with_templates};
