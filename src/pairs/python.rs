//! Hand-authored translation chains for python sources
//!
//! Ten ordered rule sequences, one per supported target. Every chain runs
//! the same rule families in the same relative order: output statements,
//! literal-typed assignments (the literal's shape picks the declared type),
//! definition headers, returns, conditionals, loops, built-in mappings,
//! boolean keywords, comments. Block-header rules always run before the
//! indentation closer, which scans for the opening tokens they insert.
//!
//! Statically typed targets guess declarations from literal shape only; an
//! assignment whose right-hand side matches no literal rule falls through
//! unchanged rather than failing.

use super::{RuleSet, apply_rules, compile_rules};
use crate::indent::{close_braces, close_with_keyword};
use std::sync::LazyLock;

fn indent(body: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    body.split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

static PY_TO_JS: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        // Output statements
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"console.log("${1}");"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", "console.log('${1}');"),
        (r"print\s*\(\s*([^)]+)\s*\)", "console.log(${1});"),
        // Assignments, typed by literal shape
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}let ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", "${1}let ${2} = '${3}';"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.?\d*)$", "${1}let ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}let ${2} = true;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}let ${2} = false;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*None$", "${1}let ${2} = null;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*\[(.*?)\]$", "${1}let ${2} = [${3}];"),
        (r"(?m)^(\s*)(\w+)\s*=\s*\{(.*?)\}$", "${1}let ${2} = {${3}};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*([^=\n]+)$", "${1}let ${2} = ${3};"),
        // Definitions and returns
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "function ${1}(${2}) {"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2};"),
        // Conditionals
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} else if (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        // Counted loops, then for-each
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for (let ${1} = 0; ${1} < ${2}; ${1}++) {",
        ),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+),\s*(\d+)\s*\)\s*:",
            "for (let ${1} = ${2}; ${1} < ${3}; ${1}++) {",
        ),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+),\s*(\d+),\s*(\d+)\s*\)\s*:",
            "for (let ${1} = ${2}; ${1} < ${3}; ${1} += ${4}) {",
        ),
        (r"for\s+(\w+)\s+in\s+(.+?):", "for (let ${1} of ${2}) {"),
        // Sequence methods
        (r"\.append\(", ".push("),
        (r"\.extend\(", ".push(..."),
        (r"len\(([^)]+)\)", "${1}.length"),
        // String methods
        (r"\.strip\(\)", ".trim()"),
        (r"\.upper\(\)", ".toUpperCase()"),
        (r"\.lower\(\)", ".toLowerCase()"),
        // Boolean keywords and operators
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "null"),
        // Input
        (r#"input\s*\(\s*"([^"]+)"\s*\)"#, r#"prompt("${1}")"#),
        (r"input\s*\(\s*'([^']+)'\s*\)", "prompt('${1}')"),
        (r"input\s*\(\s*([^)]*)\s*\)", "prompt(${1})"),
        // Comments
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
        // Exception handling
        (r"try\s*:", "try {"),
        (r"except\s+(\w+)\s*:", "} catch (${1}) {"),
        (r"except\s*:", "} catch (error) {"),
        (r"finally\s*:", "} finally {"),
        // Class definitions
        (r"class\s+(\w+)\s*:", "class ${1} {"),
        (r"class\s+(\w+)\s*\(\s*(\w+)\s*\)\s*:", "class ${1} extends ${2} {"),
    ])
});

pub fn python_to_javascript(code: &str) -> String {
    close_braces(&apply_rules(code, &PY_TO_JS))
}

static PY_TO_JAVA: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"System.out.println("${1}");"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", r#"System.out.println("${1}");"#),
        (r"print\s*\(\s*([^)]+)\s*\)", "System.out.println(${1});"),
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}String ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", r#"${1}String ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}int ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}double ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}boolean ${2} = true;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}boolean ${2} = false;"),
        (
            r"(?m)^(\s*)(\w+)\s*=\s*\[(.*?)\]$",
            "${1}ArrayList<Object> ${2} = new ArrayList<>(Arrays.asList(${3}));",
        ),
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "public static void ${1}(${2}) {"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2};"),
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} else if (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for (int ${1} = 0; ${1} < ${2}; ${1}++) {",
        ),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+),\s*(\d+)\s*\)\s*:",
            "for (int ${1} = ${2}; ${1} < ${3}; ${1}++) {",
        ),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "null"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_java(code: &str) -> String {
    let body = close_braces(&apply_rules(code, &PY_TO_JAVA));
    format!(
        "import java.util.*;\n\npublic class PythonTranslation {{\n    public static void main(String[] args) {{\n{}\n    }}\n}}",
        indent(&body, 8)
    )
}

static PY_TO_CPP: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (
            r#"print\s*\(\s*"([^"]+)"\s*\)"#,
            r#"std::cout << "${1}" << std::endl;"#,
        ),
        (
            r"print\s*\(\s*'([^']+)'\s*\)",
            r#"std::cout << "${1}" << std::endl;"#,
        ),
        (r"print\s*\(\s*([^)]+)\s*\)", "std::cout << ${1} << std::endl;"),
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}std::string ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", r#"${1}std::string ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}int ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}double ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}bool ${2} = true;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}bool ${2} = false;"),
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} else if (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for (int ${1} = 0; ${1} < ${2}; ${1}++) {",
        ),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+),\s*(\d+)\s*\)\s*:",
            "for (int ${1} = ${2}; ${1} < ${3}; ${1}++) {",
        ),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_cpp(code: &str) -> String {
    let body = close_braces(&apply_rules(code, &PY_TO_CPP));
    format!(
        "#include <iostream>\n#include <string>\n#include <vector>\n\nint main() {{\n{}\n    return 0;\n}}",
        indent(&body, 4)
    )
}

static PY_TO_C: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, "printf(\"${1}\\n\");"),
        (r"print\s*\(\s*'([^']+)'\s*\)", "printf(\"${1}\\n\");"),
        // No type information for bare expressions; integers are the guess
        (r"print\s*\(\s*([^)]+)\s*\)", "printf(\"%d\\n\", ${1});"),
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}char ${2}[] = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", r#"${1}char ${2}[] = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}int ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}double ${2} = ${3};"),
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} else if (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for (int ${1} = 0; ${1} < ${2}; ${1}++) {",
        ),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        // C89 has no boolean literals
        (r"\bTrue\b", "1"),
        (r"\bFalse\b", "0"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_c(code: &str) -> String {
    let body = close_braces(&apply_rules(code, &PY_TO_C));
    format!(
        "#include <stdio.h>\n\nint main() {{\n{}\n    return 0;\n}}",
        indent(&body, 4)
    )
}

static PY_TO_TS: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"console.log("${1}");"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", "console.log('${1}');"),
        (r"print\s*\(\s*([^)]+)\s*\)", "console.log(${1});"),
        (
            r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#,
            r#"${1}let ${2}: string = "${3}";"#,
        ),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", "${1}let ${2}: string = '${3}';"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}let ${2}: number = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}let ${2}: number = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}let ${2}: boolean = true;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}let ${2}: boolean = false;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*None$", "${1}let ${2}: any = null;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*\[(.*?)\]$", "${1}let ${2}: any[] = [${3}];"),
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "function ${1}(${2}): void {"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2};"),
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} else if (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for (let ${1}: number = 0; ${1} < ${2}; ${1}++) {",
        ),
        (r"for\s+(\w+)\s+in\s+(.+?):", "for (let ${1} of ${2}) {"),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "null"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_typescript(code: &str) -> String {
    close_braces(&apply_rules(code, &PY_TO_TS))
}

static PY_TO_GO: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"fmt.Println("${1}")"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", r#"fmt.Println("${1}")"#),
        (r"print\s*\(\s*([^)]+)\s*\)", "fmt.Println(${1})"),
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}${2} := "${3}""#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", r#"${1}${2} := "${3}""#),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}${2} := ${3}"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}${2} := ${3}"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}${2} := true"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}${2} := false"),
        (r"if\s+([^:]+?):", "if ${1} {"),
        (r"elif\s+([^:]+?):", "} else if ${1} {"),
        (r"else\s*:", "} else {"),
        // Go spells while as for
        (r"while\s+([^:]+?):", "for ${1} {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for ${1} := 0; ${1} < ${2}; ${1}++ {",
        ),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_go(code: &str) -> String {
    let body = close_braces(&apply_rules(code, &PY_TO_GO));
    format!(
        "package main\n\nimport \"fmt\"\n\nfunc main() {{\n{}\n}}",
        indent(&body, 4)
    )
}

/// Block headers eligible for an `end` closer in Ruby output
const RUBY_BLOCK_HEADERS: &[&str] = &["if ", "def ", "while ", "times do", "each do"];

static PY_TO_RUBY: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"puts "${1}""#),
        (r"print\s*\(\s*'([^']+)'\s*\)", "puts '${1}'"),
        (r"print\s*\(\s*([^)]+)\s*\)", "puts ${1}"),
        // Ruby needs no declaration keyword
        (r"(?m)^(\s*)(\w+)\s*=\s*([^=\n]+)$", "${1}${2} = ${3}"),
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "def ${1}(${2})"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2}"),
        (r"if\s+([^:]+?):", "if ${1}"),
        (r"elif\s+([^:]+?):", "elsif ${1}"),
        (r"else\s*:", "else"),
        (r"while\s+([^:]+?):", "while ${1}"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "${2}.times do |${1}|",
        ),
        (r"for\s+(\w+)\s+in\s+(.+?):", "${2}.each do |${1}|"),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "nil"),
        (r"(?m)^\s*#\s*(.*?)$", "# ${1}"),
    ])
});

pub fn python_to_ruby(code: &str) -> String {
    close_with_keyword(&apply_rules(code, &PY_TO_RUBY), "end", RUBY_BLOCK_HEADERS)
}

static PY_TO_PHP: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"echo "${1}";"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", "echo '${1}';"),
        (r"print\s*\(\s*([^)]+)\s*\)", "echo ${1};"),
        // Variables gain the $ sigil
        (r"(?m)^(\s*)(\w+)\s*=\s*([^=\n]+)$", "${1}$$${2} = ${3};"),
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "function ${1}(${2}) {"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2};"),
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} elseif (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for ($$${1} = 0; $$${1} < ${2}; $$${1}++) {",
        ),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "null"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_php(code: &str) -> String {
    let body = close_braces(&apply_rules(code, &PY_TO_PHP));
    format!("<?php\n{}\n?>", body)
}

static PY_TO_SWIFT: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"print("${1}")"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", r#"print("${1}")"#),
        (r"print\s*\(\s*([^)]+)\s*\)", "print(${1})"),
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}var ${2} = "${3}""#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", r#"${1}var ${2} = "${3}""#),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}var ${2} = ${3}"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}var ${2} = ${3}"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}var ${2} = true"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}var ${2} = false"),
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "func ${1}(${2}) {"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2}"),
        (r"if\s+([^:]+?):", "if ${1} {"),
        (r"elif\s+([^:]+?):", "} else if ${1} {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while ${1} {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for ${1} in 0..<${2} {",
        ),
        (r"for\s+(\w+)\s+in\s+(.+?):", "for ${1} in ${2} {"),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "nil"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_swift(code: &str) -> String {
    close_braces(&apply_rules(code, &PY_TO_SWIFT))
}

static PY_TO_CSHARP: LazyLock<RuleSet> = LazyLock::new(|| {
    compile_rules(&[
        (r#"print\s*\(\s*"([^"]+)"\s*\)"#, r#"Console.WriteLine("${1}");"#),
        (r"print\s*\(\s*'([^']+)'\s*\)", r#"Console.WriteLine("${1}");"#),
        (r"print\s*\(\s*([^)]+)\s*\)", "Console.WriteLine(${1});"),
        (r#"(?m)^(\s*)(\w+)\s*=\s*"([^"]*)"$"#, r#"${1}string ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*'([^']*)'$", r#"${1}string ${2} = "${3}";"#),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+)$", "${1}int ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*(\d+\.\d+)$", "${1}double ${2} = ${3};"),
        (r"(?m)^(\s*)(\w+)\s*=\s*True$", "${1}bool ${2} = true;"),
        (r"(?m)^(\s*)(\w+)\s*=\s*False$", "${1}bool ${2} = false;"),
        (r"def\s+(\w+)\s*\(([^)]*)\)\s*:", "public static void ${1}(${2}) {"),
        (r"(?m)^(\s*)return\s+(.+)$", "${1}return ${2};"),
        (r"if\s+([^:]+?):", "if (${1}) {"),
        (r"elif\s+([^:]+?):", "} else if (${1}) {"),
        (r"else\s*:", "} else {"),
        (r"while\s+([^:]+?):", "while (${1}) {"),
        (
            r"for\s+(\w+)\s+in\s+range\s*\(\s*(\d+)\s*\)\s*:",
            "for (int ${1} = 0; ${1} < ${2}; ${1}++) {",
        ),
        (r"\band\b", "&&"),
        (r"\bor\b", "||"),
        (r"\bnot\b", "!"),
        (r"\bTrue\b", "true"),
        (r"\bFalse\b", "false"),
        (r"\bNone\b", "null"),
        (r"(?m)^\s*#\s*(.*?)$", "// ${1}"),
    ])
});

pub fn python_to_csharp(code: &str) -> String {
    let body = close_braces(&apply_rules(code, &PY_TO_CSHARP));
    format!(
        "using System;\n\nclass Program {{\n    static void Main() {{\n{}\n    }}\n}}",
        indent(&body, 8)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== python → javascript ==========

    #[test]
    fn test_js_print_string() {
        let out = python_to_javascript("print(\"hello\")");
        assert!(out.contains("console.log(\"hello\");"));
    }

    #[test]
    fn test_js_integer_assignment() {
        let out = python_to_javascript("x = 5");
        assert!(out.contains("let x = 5;"));
    }

    #[test]
    fn test_js_literal_shapes() {
        assert!(python_to_javascript("s = \"hi\"").contains("let s = \"hi\";"));
        assert!(python_to_javascript("f = 3.14").contains("let f = 3.14;"));
        assert!(python_to_javascript("b = True").contains("let b = true;"));
        assert!(python_to_javascript("n = None").contains("let n = null;"));
        assert!(python_to_javascript("l = [1, 2]").contains("let l = [1, 2];"));
    }

    #[test]
    fn test_js_function_definition() {
        let out = python_to_javascript("def add(a, b):\n    return a + b");
        assert!(out.contains("function add(a, b) {"));
        assert!(out.contains("return a + b;"));
        assert!(out.ends_with("}"));
    }

    #[test]
    fn test_js_counted_loop_with_body_close() {
        let out = python_to_javascript("for i in range(3):\n    print(i)");
        assert!(out.contains("for (let i = 0; i < 3; i++) {"));
        assert!(out.contains("console.log(i);"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
    }

    #[test]
    fn test_js_range_two_and_three_args() {
        let out = python_to_javascript("for i in range(2, 8):\n    pass");
        assert!(out.contains("for (let i = 2; i < 8; i++) {"));
        let out = python_to_javascript("for i in range(0, 10, 2):\n    pass");
        assert!(out.contains("for (let i = 0; i < 10; i += 2) {"));
    }

    #[test]
    fn test_js_for_each() {
        let out = python_to_javascript("for item in items:\n    print(item)");
        assert!(out.contains("for (let item of items) {"));
    }

    #[test]
    fn test_js_builtin_methods() {
        let out = python_to_javascript("xs.append(1)\nname.strip()\nname.upper()");
        assert!(out.contains("xs.push(1)"));
        assert!(out.contains("name.trim()"));
        assert!(out.contains("name.toUpperCase()"));
    }

    #[test]
    fn test_js_len_call() {
        assert!(python_to_javascript("n = len(xs)").contains("xs.length"));
    }

    #[test]
    fn test_js_boolean_operators() {
        let out = python_to_javascript("if a and not b or c:\n    pass");
        assert!(out.contains("a && ! b || c"));
    }

    #[test]
    fn test_js_input_becomes_prompt() {
        let out = python_to_javascript("name = input(\"Name: \")");
        assert!(out.contains("prompt(\"Name: \")"));
    }

    #[test]
    fn test_js_try_except() {
        let out = python_to_javascript("try:\n    risky()\nexcept:\n    pass");
        assert!(out.contains("try {"));
        assert!(out.contains("} catch (error) {"));
    }

    #[test]
    fn test_js_comment() {
        let out = python_to_javascript("# a note\nx = 1");
        assert!(out.contains("// a note"));
    }

    #[test]
    fn test_js_unknown_line_is_left_alone() {
        let out = python_to_javascript("???mystery???");
        assert!(out.contains("???mystery???"));
    }

    // ========== python → java ==========

    #[test]
    fn test_java_wrapped_in_class_and_main() {
        let out = python_to_java("for i in range(3):\n    print(i)");
        assert!(out.starts_with("import java.util.*;"));
        assert!(out.contains("public class PythonTranslation {"));
        assert!(out.contains("public static void main(String[] args) {"));
        assert!(out.contains("System.out.println(i);"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
    }

    #[test]
    fn test_java_typed_declarations() {
        let out = python_to_java("s = \"hi\"\nn = 5\nf = 2.5\nb = True");
        assert!(out.contains("String s = \"hi\";"));
        assert!(out.contains("int n = 5;"));
        assert!(out.contains("double f = 2.5;"));
        assert!(out.contains("boolean b = true;"));
    }

    #[test]
    fn test_java_list_literal() {
        let out = python_to_java("xs = [1, 2, 3]");
        assert!(out.contains("ArrayList<Object> xs = new ArrayList<>(Arrays.asList(1, 2, 3));"));
    }

    // ========== python → cpp ==========

    #[test]
    fn test_cpp_stream_output_and_includes() {
        let out = python_to_cpp("print(\"hi\")");
        assert!(out.starts_with("#include <iostream>"));
        assert!(out.contains("std::cout << \"hi\" << std::endl;"));
        assert!(out.contains("int main() {"));
        assert!(out.contains("return 0;"));
    }

    #[test]
    fn test_cpp_typed_declarations() {
        let out = python_to_cpp("s = \"hi\"\nn = 1\nb = False");
        assert!(out.contains("std::string s = \"hi\";"));
        assert!(out.contains("int n = 1;"));
        assert!(out.contains("bool b = false;"));
    }

    // ========== python → c ==========

    #[test]
    fn test_c_printf_forms() {
        let out = python_to_c("print(\"hi\")\nprint(n)");
        assert!(out.contains("printf(\"hi\\n\");"));
        assert!(out.contains("printf(\"%d\\n\", n);"));
    }

    #[test]
    fn test_c_booleans_become_integers() {
        let out = python_to_c("if True and False:\n    pass");
        assert!(out.contains("1 && 0"));
    }

    #[test]
    fn test_c_string_is_char_array() {
        let out = python_to_c("s = \"hi\"");
        assert!(out.contains("char s[] = \"hi\";"));
    }

    // ========== python → typescript ==========

    #[test]
    fn test_ts_typed_declarations() {
        let out = python_to_typescript("s = \"hi\"\nn = 5\nb = True\nz = None\nxs = [1]");
        assert!(out.contains("let s: string = \"hi\";"));
        assert!(out.contains("let n: number = 5;"));
        assert!(out.contains("let b: boolean = true;"));
        assert!(out.contains("let z: any = null;"));
        assert!(out.contains("let xs: any[] = [1];"));
    }

    #[test]
    fn test_ts_function_returns_void() {
        let out = python_to_typescript("def go():\n    print(1)");
        assert!(out.contains("function go(): void {"));
    }

    // ========== python → go ==========

    #[test]
    fn test_go_short_declarations_and_wrapper() {
        let out = python_to_go("x = 5\nprint(x)");
        assert!(out.starts_with("package main"));
        assert!(out.contains("import \"fmt\""));
        assert!(out.contains("x := 5"));
        assert!(out.contains("fmt.Println(x)"));
        assert!(out.contains("func main() {"));
    }

    #[test]
    fn test_go_while_becomes_for() {
        let out = python_to_go("while x:\n    print(x)");
        assert!(out.contains("for x {"));
    }

    // ========== python → ruby ==========

    #[test]
    fn test_ruby_def_and_puts() {
        let out = python_to_ruby("def go():\n    print(\"hi\")");
        assert!(out.contains("def go()"));
        assert!(out.contains("puts \"hi\""));
    }

    #[test]
    fn test_ruby_counted_loop() {
        let out = python_to_ruby("for i in range(3):\n    print(i)");
        assert!(out.contains("3.times do |i|"));
        assert!(out.contains("puts i"));
    }

    #[test]
    fn test_ruby_end_only_after_header_dedent() {
        // `end` is restricted to dedenting lines that are themselves headers
        let out = python_to_ruby("while a:\n    while b:");
        assert!(out.ends_with("\nend"));

        let out = python_to_ruby("x = 1\n    y = 2\nz = 3");
        assert!(!out.contains("end"));
    }

    #[test]
    fn test_ruby_none_is_nil() {
        assert!(python_to_ruby("x = None").contains("x = nil"));
    }

    // ========== python → php ==========

    #[test]
    fn test_php_sigils_and_tags() {
        let out = python_to_php("x = 5\nprint(x)");
        assert!(out.starts_with("<?php"));
        assert!(out.ends_with("?>"));
        assert!(out.contains("$x = 5;"));
        assert!(out.contains("echo x;"));
    }

    #[test]
    fn test_php_counted_loop() {
        let out = python_to_php("for i in range(4):\n    print(i)");
        assert!(out.contains("for ($i = 0; $i < 4; $i++) {"));
    }

    // ========== python → swift ==========

    #[test]
    fn test_swift_declarations_and_range() {
        let out = python_to_swift("x = 5\nfor i in range(3):\n    print(i)");
        assert!(out.contains("var x = 5"));
        assert!(out.contains("for i in 0..<3 {"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
    }

    #[test]
    fn test_swift_func_definition() {
        let out = python_to_swift("def go(x):\n    return x");
        assert!(out.contains("func go(x) {"));
        assert!(out.contains("return x"));
    }

    // ========== python → csharp ==========

    #[test]
    fn test_csharp_wrapper_and_output() {
        let out = python_to_csharp("print(\"hi\")");
        assert!(out.starts_with("using System;"));
        assert!(out.contains("class Program {"));
        assert!(out.contains("static void Main() {"));
        assert!(out.contains("Console.WriteLine(\"hi\");"));
    }

    #[test]
    fn test_csharp_typed_declarations() {
        let out = python_to_csharp("s = \"hi\"\nn = 5\nb = True");
        assert!(out.contains("string s = \"hi\";"));
        assert!(out.contains("int n = 5;"));
        assert!(out.contains("bool b = true;"));
    }
}
