//! Per-language code templates and the shared template-based rule engine
//!
//! A template is a small set of code-generation capabilities (print
//! statement, variable declaration, import preamble, optional main-function
//! wrapper) that lets one shared engine target many languages without
//! per-pair code. When both request languages carry a template, the template
//! strategy is chosen over any hand-authored pairwise chain; the
//! generalized path is deliberately favored over hand-tuned fidelity.
//!
//! The output rewriting uses a single non-greedy capture of the
//! parenthesized (or streamed) argument. Nested parentheses and chained
//! stream operators are not unwrapped; that is a documented limitation of
//! this path, never a crash.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Code-generation capabilities for one target language
///
/// All capabilities are plain function pointers so the registry stays a
/// process-wide immutable table with no per-call state.
#[derive(Clone)]
pub struct LanguageTemplate {
    /// Lowercase language id this template belongs to
    pub id: &'static str,
    /// Preamble lines prepended (blank-line separated) before the body
    pub imports: &'static [&'static str],
    /// Render a print/output statement for the given expression
    pub print_statement: fn(&str) -> String,
    /// Render a variable declaration for the given name and expression
    pub variable_declaration: fn(&str, &str) -> String,
    /// Wrap the translated body in an entry point, when the target needs one
    pub main_function: Option<fn(&str) -> String>,
}

impl std::fmt::Debug for LanguageTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageTemplate")
            .field("id", &self.id)
            .field("imports", &self.imports)
            .field("has_main_function", &self.main_function.is_some())
            .finish()
    }
}

/// Immutable registry of language templates, keyed by lowercase id
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<&'static str, LanguageTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        TemplateRegistry {
            templates: HashMap::new(),
        }
    }

    /// The built-in template set: javascript, java, cpp, c, csharp.
    ///
    /// python is intentionally absent. Python sources are recognized by the
    /// engine's print-idiom rules, but registering a python template would
    /// route every python pair through this engine and starve the
    /// hand-authored python chains that produce far better output.
    pub fn builtin() -> Self {
        let mut registry = TemplateRegistry::new();
        registry
            .with_template(javascript_template())
            .with_template(java_template())
            .with_template(cpp_template())
            .with_template(c_template())
            .with_template(csharp_template());
        registry
    }

    pub fn with_template(&mut self, template: LanguageTemplate) -> &mut Self {
        self.templates.insert(template.id, template);
        self
    }

    pub fn get(&self, id: &str) -> Option<&LanguageTemplate> {
        self.templates.get(id)
    }

    /// Template strategy gate: both languages must be templated
    pub fn covers_pair(&self, source_id: &str, target_id: &str) -> bool {
        self.templates.contains_key(source_id) && self.templates.contains_key(target_id)
    }
}

fn javascript_template() -> LanguageTemplate {
    LanguageTemplate {
        id: "javascript",
        imports: &[],
        print_statement: |expr| format!("console.log({});", expr),
        variable_declaration: |name, expr| format!("let {} = {};", name, expr),
        main_function: None,
    }
}

fn java_template() -> LanguageTemplate {
    LanguageTemplate {
        id: "java",
        imports: &["import java.util.*;"],
        print_statement: |expr| format!("System.out.println({});", expr),
        variable_declaration: |name, expr| format!("var {} = {};", name, expr),
        main_function: Some(|body| {
            format!(
                "import java.util.*;\n\npublic class Main {{\n    public static void main(String[] args) {{\n{}\n    }}\n}}",
                indent_body(body, 8)
            )
        }),
    }
}

fn cpp_template() -> LanguageTemplate {
    LanguageTemplate {
        id: "cpp",
        imports: &["#include <iostream>", "#include <string>"],
        print_statement: |expr| format!("std::cout << {} << std::endl;", expr),
        variable_declaration: |name, expr| format!("auto {} = {};", name, expr),
        main_function: Some(|body| {
            format!(
                "#include <iostream>\n#include <string>\n\nint main() {{\n{}\n    return 0;\n}}",
                indent_body(body, 4)
            )
        }),
    }
}

fn c_template() -> LanguageTemplate {
    LanguageTemplate {
        id: "c",
        imports: &["#include <stdio.h>"],
        print_statement: |expr| format!("printf(\"%s\\n\", {});", expr),
        variable_declaration: |name, expr| format!("int {} = {};", name, expr),
        main_function: Some(|body| {
            format!(
                "#include <stdio.h>\n\nint main() {{\n{}\n    return 0;\n}}",
                indent_body(body, 4)
            )
        }),
    }
}

fn csharp_template() -> LanguageTemplate {
    LanguageTemplate {
        id: "csharp",
        imports: &["using System;"],
        print_statement: |expr| format!("Console.WriteLine({});", expr),
        variable_declaration: |name, expr| format!("var {} = {};", name, expr),
        main_function: Some(|body| {
            format!(
                "using System;\n\nclass Program {{\n    static void Main() {{\n{}\n    }}\n}}",
                indent_body(body, 8)
            )
        }),
    }
}

fn indent_body(body: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    body.split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

// Output-idiom recognizers, one per source language the engine understands.
// Single non-greedy capture by contract.
static PYTHON_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"print\((.*?)\)").unwrap());
static JAVASCRIPT_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"console\.log\((.*?)\)").unwrap());
static JAVA_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"System\.out\.println\((.*?)\)").unwrap());
static CPP_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"std::cout\s*<<\s*(.*?)\s*<<\s*std::endl;?").unwrap());
static C_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"printf\((.*?)\);?").unwrap());
static CSHARP_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Console\.WriteLine\((.*?)\)").unwrap());

static C_FORMAT_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["'](.*)["']"#).unwrap());

static JS_LET_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"let\s+(\w+)\s*=\s*(.*?);").unwrap());
static JS_CONST_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const\s+(\w+)\s*=\s*(.*?);").unwrap());

static RESIDUAL_PREAMBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^.*?(?:import|#include|using|package).*?\n*").unwrap());

/// Translate between two templated languages
///
/// 1. Output statements recognized from the source language's idiom are
///    rewritten through `target.print_statement`.
/// 2. Loosely-typed declarations (javascript `let`/`const`) are rewritten
///    through `target.variable_declaration`.
/// 3. The target's import lines are prepended when it declares any.
/// 4. If the target requires a wrapping entry point and the body carries no
///    entry-point or type-definition marker, residual preamble lines are
///    stripped and the remainder is passed to `target.main_function`.
pub fn translate_with_templates(
    code: &str,
    source: &LanguageTemplate,
    target: &LanguageTemplate,
) -> String {
    let mut translated = code.to_string();

    // Output statements from the source language's idiom
    translated = match source.id {
        "python" if code.contains("print(") => PYTHON_PRINT
            .replace_all(&translated, |caps: &Captures| {
                (target.print_statement)(&caps[1])
            })
            .into_owned(),
        "javascript" if code.contains("console.log(") => JAVASCRIPT_PRINT
            .replace_all(&translated, |caps: &Captures| {
                (target.print_statement)(&caps[1])
            })
            .into_owned(),
        "java" if code.contains("System.out.println(") => JAVA_PRINT
            .replace_all(&translated, |caps: &Captures| {
                (target.print_statement)(&caps[1])
            })
            .into_owned(),
        "cpp" if code.contains("std::cout") => CPP_PRINT
            .replace_all(&translated, |caps: &Captures| {
                (target.print_statement)(&caps[1])
            })
            .into_owned(),
        "c" if code.contains("printf(") => C_PRINT
            .replace_all(&translated, |caps: &Captures| {
                // printf format strings: normalize quotes, drop literal \n
                let cleaned = C_FORMAT_QUOTES
                    .replace(&caps[1], "\"${1}\"")
                    .replace("\\n", "");
                (target.print_statement)(&cleaned)
            })
            .into_owned(),
        "csharp" if code.contains("Console.WriteLine(") => CSHARP_PRINT
            .replace_all(&translated, |caps: &Captures| {
                (target.print_statement)(&caps[1])
            })
            .into_owned(),
        _ => translated,
    };

    // Loosely-typed declarations: javascript's let/const keyword family
    if source.id == "javascript" && target.id != "javascript" {
        for decl in [&JS_LET_DECL, &JS_CONST_DECL] {
            translated = decl
                .replace_all(&translated, |caps: &Captures| {
                    (target.variable_declaration)(&caps[1], &caps[2])
                })
                .into_owned();
        }
    }

    // Target preamble
    if !target.imports.is_empty() {
        translated = format!("{}\n\n{}", target.imports.join("\n"), translated);
    }

    // Entry-point wrapping, unless the body already defines one
    if let Some(main_function) = target.main_function
        && !translated.contains("main")
        && !translated.contains("class")
    {
        let core = RESIDUAL_PREAMBLE.replace_all(&translated, "");
        translated = main_function(core.trim());
    }

    translated
}
