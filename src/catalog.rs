//! Typed records for message catalogs before and after baking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A catalog maps message keys to messages. Keys keep their source order.
pub type Catalog<T> = IndexMap<String, T>;

/// One substitution unit within a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtcPlaceholder {
    /// Literal text inserted in place of the token, usually an ICU expression
    pub content: String,
    /// Illustrative value for translators, never read while baking
    #[serde(default)]
    pub example: Option<String>,
}

impl CtcPlaceholder {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            example: None,
        }
    }
}

/// A source message awaiting baking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtcMessage {
    pub message: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub placeholders: Option<IndexMap<String, CtcPlaceholder>>,
}

impl CtcMessage {
    /// Creates a message without metadata or placeholders.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            description: None,
            meaning: None,
            placeholders: None,
        }
    }

    /// Declares a placeholder, creating the map on first use.
    pub fn with_placeholder<N, C>(mut self, name: N, content: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        self.placeholders
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), CtcPlaceholder::new(content));
        self
    }
}

/// The runtime-ready form of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BakedMessage {
    pub message: String,
}
