//! Coercion of loosely typed tool arguments.
//!
//! MCP hosts are inconsistent about argument types: numeric fields arrive as
//! JSON numbers or as strings, and booleans sometimes as strings. The wire
//! types here accept every encoding and resolve to a concrete value in one
//! place.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Integer argument sent either as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum IntArg {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IntArg {
    /// Fractions truncate toward zero; unparsable text yields `None` so the
    /// caller keeps its default.
    pub fn resolve(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<i64> for IntArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for IntArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Boolean argument sent either as a JSON boolean or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum BoolArg {
    Bool(bool),
    Text(String),
}

impl BoolArg {
    pub fn resolve(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(text) => parse_bool(text),
        }
    }
}

impl From<bool> for BoolArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for BoolArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Resolves an optional integer argument, clamping it when `range` is given.
pub fn int_or(arg: Option<&IntArg>, default: i64, range: Option<(i64, i64)>) -> i64 {
    let value = arg.and_then(IntArg::resolve).unwrap_or(default);

    match range {
        Some((min, max)) => value.clamp(min, max),
        None => value,
    }
}

/// Returns the argument only if it carries a non-empty string.
pub fn non_empty(arg: Option<String>) -> Option<String> {
    arg.filter(|value| !value.is_empty())
}
