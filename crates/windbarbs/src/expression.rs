//! Symbol expressions evaluated against features.
//!
//! A symbol is usually written once in a style and filled in per feature:
//! `windbarbs://default(${speed})[${unit}]?hemisphere=${hemi}`. Placeholders
//! are replaced by the feature's attribute values before parsing.

use crate::error::{BarbError, BarbResult};
use std::collections::HashMap;

/// Attribute values of the feature being symbolized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    attributes: HashMap<String, String>,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Store an attribute as text.
    ///
    /// Non-finite floats are written `Infinity`/`-Infinity` rather than
    /// Rust's `inf`, so they read back as speed literals.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        let text = value.to_string();
        let text = match text.as_str() {
            "inf" => "Infinity".to_string(),
            "-inf" => "-Infinity".to_string(),
            _ => text,
        };
        self.attributes.insert(name.into(), text);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Feature {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut feature = Self::new();
        for (name, value) in iter {
            feature.set(name, value);
        }
        feature
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Attribute(String),
}

/// A locator template with `${attribute}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolExpression {
    source: String,
    segments: Vec<Segment>,
}

impl SymbolExpression {
    /// A fixed locator with no placeholders.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            segments: vec![Segment::Literal(text.clone())],
            source: text,
        }
    }

    /// Split a template into literal text and placeholders.
    pub fn parse(template: &str) -> BarbResult<Self> {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after
                .find('}')
                .ok_or_else(|| BarbError::UnresolvedAttribute(after.to_string()))?;
            let name = after[..end].trim();
            if name.is_empty() {
                return Err(BarbError::UnresolvedAttribute(String::new()));
            }
            segments.push(Segment::Attribute(name.to_string()));
            rest = &after[end + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Substitute every placeholder from `feature`.
    pub fn evaluate(&self, feature: &Feature) -> BarbResult<String> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Attribute(name) => out.push_str(
                    feature
                        .get(name)
                        .ok_or_else(|| BarbError::UnresolvedAttribute(name.clone()))?,
                ),
            }
        }
        Ok(out)
    }
}
