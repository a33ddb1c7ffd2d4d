//! Hand-authored translation chain for javascript → python
//!
//! The reverse direction of the flagship pair: braces and semicolons are
//! stripped after the header rules have produced colon-terminated python
//! headers, so nothing re-inserts block structure afterwards.

use super::{RuleSet, apply_rules, compile_rules};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static JS_TO_PY_HEAD: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        // Output statements
        (r"console\.log\s*\(\s*([^)]+)\s*\)\s*;?", "print(${1})"),
        // Declarations lose their keyword
        (r"(?:let|const|var)\s+(\w+)\s*=\s*([^;]+);?", "${1} = ${2}"),
        // Definitions
        (r"function\s+(\w+)\s*\(([^)]*)\)\s*\{", "def ${1}(${2}):"),
        // Conditionals
        (r"if\s*\(\s*([^)]+)\s*\)\s*\{", "if ${1}:"),
        (r"\}\s*else\s*if\s*\(\s*([^)]+)\s*\)\s*\{", "elif ${1}:"),
        (r"\}\s*else\s*\{", "else:"),
    ])
});

// Counted loop: the induction variable appears three times and all
// occurrences must agree before the loop can become a range(). The header
// may already have lost its `let` and first semicolon to the declaration
// rule above, so both are optional here.
static JS_COUNTED_FOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"for\s*\(\s*(?:let\s+)?(\w+)\s*=\s*0\s*;?\s*(\w+)\s*<\s*(\d+)\s*;\s*(\w+)\+\+\s*\)\s*\{",
    )
    .unwrap()
});

static JS_TO_PY_TAIL: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r"while\s*\(\s*([^)]+)\s*\)\s*\{", "while ${1}:"),
        // Python needs neither braces nor semicolons
        (r"\}", ""),
        (r"(?m);$", ""),
    ])
});

pub fn javascript_to_python(code: &str) -> String {
    let code = apply_rules(code, &JS_TO_PY_HEAD);

    let code = JS_COUNTED_FOR
        .replace_all(&code, |caps: &Captures| {
            if caps[1] == caps[2] && caps[1] == caps[4] {
                format!("for {} in range({}):", &caps[1], &caps[3])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    apply_rules(&code, &JS_TO_PY_TAIL)
}
