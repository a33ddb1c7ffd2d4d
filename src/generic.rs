//! Generic translation for unsupported language pairs
//!
//! The last-resort strategy: no template, no pairwise chain. The original
//! source is echoed in full with every line commented out, wrapped in a
//! guidance banner naming both languages, so the caller always gets a
//! displayable result.

use crate::language::Language;

/// Produce the commented-echo translation with a guidance banner
pub fn generic_translation(code: &str, source: &Language, target: &Language) -> String {
    let commented = code
        .split('\n')
        .map(|line| format!("// {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// Rule-based translation from {src} to {tgt}\n\
         // Manual conversion required for complex syntax\n\
         // Original {src} code:\n\
         \n\
         {commented}\n\
         \n\
         // TODO: Convert the above {src} code to {tgt}\n\
         // This is a basic fallback - for better translation:\n\
         // 1. Use the language-specific converters for Python\n\
         // 2. Check the language templates for boilerplate code",
        src = source.display_name,
        tgt = target.display_name,
        commented = commented,
    )
}
