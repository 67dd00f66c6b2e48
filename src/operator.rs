//! Operator classification and display-name resolution.
//!
//! The operator drives every rendering decision: whether a node prints as a
//! bracketed list or a builder call, whether its arguments get their own
//! indented lines, whether the node is a transparent box around a single
//! argument, and what the builder method is called in the output. Tags the
//! printer has no special case for land in [`Operator::Other`] and take the
//! derived-name path, so unknown operators degrade gracefully instead of
//! failing.

use std::sync::LazyLock;

use regex::Regex;

/// A WOQL operator, extracted from a node's `@type` tag suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    // Logical combinators; their argument lists are newline-formatted.
    And,
    Or,

    /// Conditional. Its consequent chains fluently, its `woql:query`
    /// antecedent does not.
    When,

    /// Transparent wrapper around a `woql:query` element inside And/Or lists.
    QueryListElement,

    // Literal list constructors; render as `[...]`, never as calls.
    ValueList,
    Array,
    AsVar,
    NamedAsVar,
    IndexedAsVar,

    // "as" variable binders; all display as `as`.
    AsVars,
    NamedAsVars,
    IndexedAsVars,

    // Operators with irregular display names.
    IdGenerator,
    IsA,
    PostResource,
    FileResource,
    RemoteResource,

    // Boolean constants; render as bare keywords.
    True,
    False,

    /// Any tag without a special case. Its display name is derived from the
    /// camel-cased tag.
    Other(String),
}

/// Boxed predicates, in lookup priority order: the first of these present on
/// a node makes the node a transparent wrapper around that argument.
const BOXED_PREDICATES: [&str; 4] = [
    "woql:value",
    "woql:variable",
    "woql:node",
    "woql:arithmetic_value",
];

impl Operator {
    pub fn from_tag(tag: &str) -> Operator {
        match tag {
            "And" => Operator::And,
            "Or" => Operator::Or,
            "When" => Operator::When,
            "QueryListElement" => Operator::QueryListElement,
            "ValueList" => Operator::ValueList,
            "Array" => Operator::Array,
            "AsVar" => Operator::AsVar,
            "NamedAsVar" => Operator::NamedAsVar,
            "IndexedAsVar" => Operator::IndexedAsVar,
            "AsVars" => Operator::AsVars,
            "NamedAsVars" => Operator::NamedAsVars,
            "IndexedAsVars" => Operator::IndexedAsVars,
            "IDGenerator" => Operator::IdGenerator,
            "IsA" => Operator::IsA,
            "PostResource" => Operator::PostResource,
            "FileResource" => Operator::FileResource,
            "RemoteResource" => Operator::RemoteResource,
            "True" => Operator::True,
            "False" => Operator::False,
            other => Operator::Other(other.to_string()),
        }
    }

    /// The canonical camel-case tag this operator was parsed from.
    pub fn tag(&self) -> &str {
        match self {
            Operator::And => "And",
            Operator::Or => "Or",
            Operator::When => "When",
            Operator::QueryListElement => "QueryListElement",
            Operator::ValueList => "ValueList",
            Operator::Array => "Array",
            Operator::AsVar => "AsVar",
            Operator::NamedAsVar => "NamedAsVar",
            Operator::IndexedAsVar => "IndexedAsVar",
            Operator::AsVars => "AsVars",
            Operator::NamedAsVars => "NamedAsVars",
            Operator::IndexedAsVars => "IndexedAsVars",
            Operator::IdGenerator => "IDGenerator",
            Operator::IsA => "IsA",
            Operator::PostResource => "PostResource",
            Operator::FileResource => "FileResource",
            Operator::RemoteResource => "RemoteResource",
            Operator::True => "True",
            Operator::False => "False",
            Operator::Other(tag) => tag,
        }
    }

    /// Resolves the builder method name shown in the output: the override
    /// table first, then camel→snake derivation with shortcut aliases.
    pub fn function_name(&self) -> String {
        let overridden = match self {
            Operator::IdGenerator => Some("idgen"),
            Operator::IsA => Some("isa"),
            Operator::PostResource => Some("post"),
            Operator::FileResource => Some("file"),
            Operator::RemoteResource => Some("remote"),
            Operator::AsVars | Operator::NamedAsVars | Operator::IndexedAsVars => Some("as"),
            _ => None,
        };
        if let Some(name) = overridden {
            return name.to_string();
        }
        let derived = camel_to_snake(self.tag());
        match shortcut(&derived) {
            Some(short) => short.to_string(),
            None => derived,
        }
    }

    /// Literal list constructors render as bracketed sequences.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Operator::ValueList
                | Operator::Array
                | Operator::NamedAsVar
                | Operator::IndexedAsVar
                | Operator::AsVar
        )
    }

    /// Query-list operators get one argument per indented line.
    pub fn takes_newline(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// If this node is a transparent box, the predicate key holding its sole
    /// rendered argument. `has_key` reports which predicate keys the node
    /// actually carries.
    pub fn boxed_predicate(&self, has_key: impl Fn(&str) -> bool) -> Option<&'static str> {
        for predicate in BOXED_PREDICATES {
            if has_key(predicate) {
                return Some(predicate);
            }
        }
        if *self == Operator::QueryListElement {
            return Some("woql:query");
        }
        None
    }
}

/// Short conventional aliases for derived names.
fn shortcut(name: &str) -> Option<&'static str> {
    Some(match name {
        "optional" => "opt",
        "substring" => "substr",
        "regexp" => "re",
        "subsumption" => "sub",
        "equals" => "eq",
        "concatenate" => "concat",
        _ => return None,
    })
}

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)([A-Z])").expect("camel boundary pattern"));

/// `IsA` → `is_a`, `QueryListElement` → `query_list_element`.
pub(crate) fn camel_to_snake(tag: &str) -> String {
    CAMEL_BOUNDARY.replace_all(tag, "${1}_${2}").to_lowercase()
}
