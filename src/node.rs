//! Typed model of a JSON-LD WOQL query tree.
//!
//! Incoming queries are plain `serde_json::Value` trees in which every node
//! carries an `@type` tag (`"woql:And"`, `"woql:Variable"`, ...) and literals
//! carry an `@value`. [`Node::from_json`] validates that shape once, at the
//! input boundary, and produces a closed union the printer can walk without
//! re-checking field presence at every level.
//!
//! Malformed trees surface as [`NodeError`] values rather than panics: a node
//! with no `@type`, or a variable with no name, is diagnosable input, not a
//! programming error.

use serde_json::Value;

use crate::operator::Operator;

/// One element of a WOQL query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A `woql:Variable` reference. Variables never nest further.
    Variable { name: String },

    /// A datatyped literal (a node carrying `@value`).
    Literal(Literal),

    /// Any other operator node: the tag suffix plus its predicate-keyed
    /// arguments in source key order (`@type` excluded).
    Operator {
        op: Operator,
        args: Vec<(String, Arg)>,
    },
}

/// A literal node, split by how it renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String-like value: `xsd:string`, `xsd:anyURI`, or any node with an
    /// `@language` tag. Quoted on output.
    Text(String),

    /// Numeric or boolean value (`xsd:decimal`, `xsd:boolean`, `xsd:integer`,
    /// `xsd:nonNegativeInteger`). Emitted as a bare token, never quoted.
    Token(String),

    /// A literal whose datatype the printer has no rule for. The whole node
    /// is kept and dumped as compact JSON.
    Opaque(Value),
}

/// One argument value on an operator node.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A nested query node.
    Node(Node),

    /// An ordered sequence of nested nodes.
    Seq(Vec<Node>),

    /// A plain string, subject to vocabulary and prefix cleaning.
    Text(String),

    /// Verbatim payload: `woql:document` contents and bare scalars are kept
    /// as raw JSON and serialized as-is.
    Opaque(Value),
}

/// Errors produced while adapting a JSON tree into [`Node`]s.
#[derive(Debug, Clone)]
pub enum NodeError {
    /// A node (or a value in node position) has no `@type` tag.
    MissingType(Value),

    /// A kind-specific required field is absent, e.g. a variable without a
    /// `woql:variable_name`.
    MissingField { field: String, node: Value },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::MissingType(node) => {
                write!(f, "node has no @type tag: {}", node)
            }
            NodeError::MissingField { field, node } => {
                write!(f, "node is missing required field {}: {}", field, node)
            }
        }
    }
}

impl std::error::Error for NodeError {}

const STRING_DATATYPES: [&str; 2] = ["xsd:string", "xsd:anyURI"];
const TOKEN_DATATYPES: [&str; 4] = [
    "xsd:decimal",
    "xsd:boolean",
    "xsd:integer",
    "xsd:nonNegativeInteger",
];

impl Node {
    /// Validates and converts one JSON node (and, recursively, everything
    /// under it). The first malformed subtree aborts the conversion.
    pub fn from_json(json: &Value) -> Result<Node, NodeError> {
        let obj = match json.as_object() {
            Some(obj) => obj,
            None => return Err(NodeError::MissingType(json.clone())),
        };
        let tag = obj
            .get("@type")
            .and_then(Value::as_str)
            .ok_or_else(|| NodeError::MissingType(json.clone()))?;

        if tag == "woql:Variable" {
            return Self::variable_from_json(json);
        }
        if obj.contains_key("@value") {
            return Ok(Node::Literal(Self::literal_from_json(tag, obj, json)));
        }

        // An un-namespaced tag is degraded to a whole-tag operator name
        // rather than rejected.
        let suffix = tag.split_once(':').map(|(_, s)| s).unwrap_or(tag);
        let op = Operator::from_tag(suffix);

        let mut args = Vec::with_capacity(obj.len().saturating_sub(1));
        for (key, value) in obj {
            if key == "@type" {
                continue;
            }
            args.push((key.clone(), Self::arg_from_json(key, value)?));
        }
        Ok(Node::Operator { op, args })
    }

    fn variable_from_json(json: &Value) -> Result<Node, NodeError> {
        let name = json
            .get("woql:variable_name")
            .and_then(|n| n.get("@value"))
            .and_then(Value::as_str)
            .ok_or_else(|| NodeError::MissingField {
                field: "woql:variable_name".to_string(),
                node: json.clone(),
            })?;
        Ok(Node::Variable {
            name: name.to_string(),
        })
    }

    fn literal_from_json(tag: &str, obj: &serde_json::Map<String, Value>, json: &Value) -> Literal {
        let value = &obj["@value"];
        if STRING_DATATYPES.contains(&tag) || obj.contains_key("@language") {
            if let Some(s) = value.as_str() {
                return Literal::Text(s.to_string());
            }
            return Literal::Opaque(json.clone());
        }
        if TOKEN_DATATYPES.contains(&tag) {
            let token = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Literal::Token(token);
        }
        Literal::Opaque(json.clone())
    }

    fn arg_from_json(key: &str, value: &Value) -> Result<Arg, NodeError> {
        // Document payloads are arbitrary embedded data, passed through
        // verbatim without node validation.
        if key == "woql:document" {
            return Ok(Arg::Opaque(value.clone()));
        }
        match value {
            Value::Array(items) => {
                let nodes = items
                    .iter()
                    .map(Node::from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Arg::Seq(nodes))
            }
            Value::Object(_) => Ok(Arg::Node(Node::from_json(value)?)),
            Value::String(s) => Ok(Arg::Text(s.clone())),
            other => Ok(Arg::Opaque(other.clone())),
        }
    }
}
