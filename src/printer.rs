//! Renders WOQL query trees back into fluent builder source.
//!
//! This is the inverse of the query builders: given the JSON-LD tree a
//! builder produced, emit the `WOQL.triple(...).opt(...)` (or, in the Python
//! dialect, `WOQLQuery().triple(...)`) source text that would rebuild it.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use serde_json::json;
//! use woql_unparse::{Dialect, WoqlPrinter};
//!
//! let printer = WoqlPrinter::new(HashMap::new(), Dialect::JavaScript);
//! let tree = json!({
//!     "@type": "woql:Variable",
//!     "woql:variable_name": {"@value": "x"}
//! });
//! assert_eq!(printer.print_json(&tree).unwrap(), "\"v:x\"");
//! ```
//!
//! Rendering is a pure function of the tree and the printer's configuration:
//! no instance state is written during a render, so one configured printer
//! can serve concurrent renders over independent trees.

use std::collections::HashMap;

use crate::node::{Arg, Literal, Node, NodeError};
use crate::operator::Operator;

/// A short-alias → full-identifier vocabulary, consulted in reverse while
/// cleaning string arguments.
pub type Vocab = HashMap<String, String>;

/// The target builder surface syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// WOQL.js: `WOQL.and(...)`, lowercase `true`/`false`.
    #[default]
    JavaScript,
    /// WOQLpy: `WOQLQuery().woql_and(...)`, reserved-word method renames,
    /// capitalized `True`/`False`.
    Python,
}

impl Dialect {
    /// Recognizes `"python"`/`"py"`; anything else selects the default
    /// JavaScript rules.
    pub fn from_selector(selector: &str) -> Dialect {
        match selector {
            "python" | "py" => Dialect::Python,
            _ => Dialect::JavaScript,
        }
    }
}

/// Rendering state threaded through the recursion.
#[derive(Debug, Clone, Copy, Default)]
struct Ctx {
    /// Nesting depth; indentation is purely a function of this.
    level: usize,
    /// When set, the call being rendered chains onto its parent with a
    /// leading `.` and the parent's closing `)` is suppressed.
    fluent: bool,
    /// When set, the enclosing operator formats arguments one per line.
    newline: bool,
}

/// The unparser. Construction captures the vocabulary, dialect, and
/// prefix-cleaning configuration; renders never mutate it.
pub struct WoqlPrinter {
    vocab: Vocab,
    dialect: Dialect,
    indent_spaces: usize,
    subject_cleaned: Vec<String>,
    schema_cleaned: Vec<String>,
}

impl WoqlPrinter {
    pub fn new(vocab: Vocab, dialect: Dialect) -> Self {
        WoqlPrinter {
            vocab,
            dialect,
            indent_spaces: 4,
            subject_cleaned: vec!["woql:subject".to_string(), "woql:element".to_string()],
            schema_cleaned: vec![
                "woql:predicate".to_string(),
                "woql:parent".to_string(),
                "woql:child".to_string(),
                "woql:uri".to_string(),
                "woql:of_type".to_string(),
            ],
        }
    }

    /// Replaces the predicates whose string arguments get the `doc:` prefix
    /// stripped.
    pub fn with_subject_cleaned(mut self, predicates: Vec<String>) -> Self {
        self.subject_cleaned = predicates;
        self
    }

    /// Replaces the predicates whose string arguments get the `scm:` prefix
    /// stripped.
    pub fn with_schema_cleaned(mut self, predicates: Vec<String>) -> Self {
        self.schema_cleaned = predicates;
        self
    }

    /// Renders a validated node to builder source.
    pub fn print(&self, node: &Node) -> String {
        self.print_node(node, Ctx::default())
    }

    /// Validates a raw JSON tree and renders it in one step.
    pub fn print_json(&self, json: &serde_json::Value) -> Result<String, NodeError> {
        let node = Node::from_json(json)?;
        Ok(self.print(&node))
    }

    fn print_node(&self, node: &Node, ctx: Ctx) -> String {
        match node {
            Node::Variable { name } => self.print_variable(name),
            Node::Literal(lit) => self.print_literal(lit),
            Node::Operator { op, args } => self.print_operator(op, args, ctx),
        }
    }

    /// Variables render as `"v:name"`; a name already carrying a namespace
    /// separator is taken as fully qualified.
    fn print_variable(&self, name: &str) -> String {
        if name.contains(':') {
            format!("\"{}\"", name)
        } else {
            format!("\"v:{}\"", name)
        }
    }

    fn print_literal(&self, lit: &Literal) -> String {
        match lit {
            // Multi-line strings use backtick delimiters so the output stays
            // a single source token.
            Literal::Text(s) if s.contains('\n') => format!("`{}`", s),
            Literal::Text(s) => format!("\"{}\"", s),
            Literal::Token(token) => token.clone(),
            Literal::Opaque(raw) => raw.to_string(),
        }
    }

    fn print_operator(&self, op: &Operator, args: &[(String, Arg)], ctx: Ctx) -> String {
        // Boxed wrappers are elided: only their single designated argument
        // renders.
        if let Some(boxed) = op.boxed_predicate(|key| args.iter().any(|(k, _)| k == key)) {
            if let Some((key, arg)) = args.iter().find(|(k, _)| k == boxed) {
                return self.print_argument(op, key, arg, ctx.level, ctx.fluent);
            }
        }

        let mut out = String::new();
        if op.is_list() {
            out.push('[');
        } else {
            let call = op.function_name();
            let inline = if ctx.newline {
                ctx.level * self.indent_spaces
            } else {
                0
            };
            out.push_str(&self.prelude(&call, ctx.fluent, inline));
            out.push('(');
        }

        // The comma separator is dropped before a trailing continuation
        // query, which instead opens with the chain operator.
        let has_query = args.iter().any(|(key, _)| key == "woql:query");
        let last_divided = if has_query {
            args.len().saturating_sub(2)
        } else {
            args.len().saturating_sub(1)
        };
        for (i, (key, arg)) in args.iter().enumerate() {
            let chains = (key == "woql:query" && *op != Operator::When) || key == "woql:consequent";
            out.push_str(&self.print_argument(op, key, arg, ctx.level, chains));
            if i < last_divided {
                out.push_str(", ");
            }
        }

        if op.is_list() {
            out.push(']');
        } else {
            if op.takes_newline() {
                out.push('\n');
                out.push_str(&self.indent(ctx.level));
            }
            if !ctx.fluent {
                out.push(')');
            }
        }
        out
    }

    fn print_argument(
        &self,
        op: &Operator,
        predicate: &str,
        arg: &Arg,
        level: usize,
        fluent: bool,
    ) -> String {
        // Opaque document payloads bypass every other rule, including the
        // fluent close-paren.
        if predicate == "woql:document" {
            if let Arg::Opaque(doc) = arg {
                return doc.to_string();
            }
        }

        let mut out = String::new();
        if fluent {
            // Close off the call the parent left open.
            out.push(')');
        }
        let newline = op.takes_newline();
        if newline {
            out.push('\n');
            out.push_str(&self.indent(level + 1));
        }
        match arg {
            Arg::Seq(items) => {
                let nested_level = if newline { level + 1 } else { level };
                let rendered: Vec<String> = items
                    .iter()
                    .map(|item| {
                        self.print_node(
                            item,
                            Ctx {
                                level: nested_level,
                                fluent,
                                newline,
                            },
                        )
                    })
                    .collect();
                let separator = if newline {
                    format!(",\n{}", self.indent(level + 1))
                } else {
                    ",".to_string()
                };
                out.push_str(&rendered.join(&separator));
            }
            Arg::Node(node) => {
                out.push_str(&self.print_node(
                    node,
                    Ctx {
                        level,
                        fluent,
                        newline: false,
                    },
                ));
            }
            Arg::Text(s) => out.push_str(&self.unclean_argument(s, predicate)),
            Arg::Opaque(raw) => out.push_str(&raw.to_string()),
        }
        out
    }

    /// The opening text of a call: bare keyword for the boolean constants,
    /// chain operator in fluent mode, otherwise the dialect's constructor
    /// prefix, newline-indented when `inline` is nonzero.
    fn prelude(&self, call: &str, fluent: bool, inline: usize) -> String {
        if call == "true" || call == "false" {
            return match self.dialect {
                Dialect::Python => {
                    let mut chars = call.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect(),
                        None => String::new(),
                    }
                }
                Dialect::JavaScript => call.to_string(),
            };
        }
        let (call, constructor) = match self.dialect {
            Dialect::Python => (pythonic(call), "WOQLQuery()."),
            Dialect::JavaScript => (call, "WOQL."),
        };
        if fluent {
            return format!(".{}", call);
        }
        if inline > 0 {
            format!("\n{}{}{}", " ".repeat(inline), constructor, call)
        } else {
            format!("{}{}", constructor, call)
        }
    }

    /// Recovers the shortest display form of a string argument: exact
    /// vocabulary matches render as their alias, and the configured
    /// subject/schema predicates get their well-known prefixes stripped.
    fn unclean_argument(&self, arg: &str, predicate: &str) -> String {
        if arg.contains(':') {
            for (short, full) in &self.vocab {
                if full == arg {
                    return format!("\"{}\"", short);
                }
            }
            let mut arg = arg;
            if self.subject_cleaned.iter().any(|p| p == predicate) {
                arg = arg.strip_prefix("doc:").unwrap_or(arg);
            }
            if self.schema_cleaned.iter().any(|p| p == predicate) {
                arg = arg.strip_prefix("scm:").unwrap_or(arg);
            }
            return format!("\"{}\"", arg);
        }
        format!("\"{}\"", arg)
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.indent_spaces)
    }
}

/// Method renames for Python reserved-word collisions. Applies in fluent
/// chains as well as at call heads.
fn pythonic(name: &str) -> &str {
    match name {
        "and" => "woql_and",
        "or" => "woql_or",
        "as" => "woql_as",
        "with" => "woql_with",
        "from" => "woql_from",
        "not" => "woql_not",
        other => other,
    }
}
