//! Hand-authored translation chain for java → csharp
//!
//! The narrowest chain: the two languages are close enough that output
//! statements, the entry-point signature, and a couple of type keywords
//! cover most of the distance. The lowest pairwise confidence in the
//! registry, reflecting how much is left untouched.

use super::{RuleSet, apply_rules, compile_rules};
use std::sync::LazyLock;

static JAVA_TO_CSHARP: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (
            r"System\.out\.println\s*\(\s*([^)]+)\s*\)\s*;?",
            "Console.WriteLine(${1});",
        ),
        (
            r"public\s+static\s+void\s+main\s*\(\s*String\[\]\s+\w+\s*\)",
            "static void Main(string[] args)",
        ),
        (r"\bString\b", "string"),
        (r"\bboolean\b", "bool"),
    ])
});

pub fn java_to_csharp(code: &str) -> String {
    format!("using System;\n\n{}", apply_rules(code, &JAVA_TO_CSHARP))
}
