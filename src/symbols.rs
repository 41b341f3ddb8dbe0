// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Symbol sequences whose type is only known at run time.
//!
//! The generic engines reject a mismatched symbol type at compile time. JSON
//! input has no such guarantee, so this module decides the kind of every
//! sequence once, at parse time, and rejects anything that cannot be
//! ordered or compared with [`SuffixArrayError::InvalidInput`].
//!
//! | JSON value               | Sequence               |
//! |--------------------------|------------------------|
//! | `"banana"`               | `Chars` (one per char) |
//! | `[3, -1, 4]`             | `Integers`             |
//! | `["the", "cat"]`         | `Tokens`               |
//! | `[]`                     | empty, any kind        |
//! | anything else            | `InvalidInput`         |

use crate::error::SuffixArrayError;
use crate::index::{build_index, SuffixIndex};
use crate::matches::Matches;
use crate::types::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const PREVIEW_LEN: usize = 40;

/// Which symbol type a sequence holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Chars,
    Integers,
    Tokens,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolKind::Chars => "chars",
            SymbolKind::Integers => "integers",
            SymbolKind::Tokens => "tokens",
        })
    }
}

/// A sequence of one symbol type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbols {
    Chars(Vec<char>),
    Integers(Vec<i64>),
    Tokens(Vec<String>),
}

impl Symbols {
    /// Characters of `text` (offsets are char offsets, not byte offsets).
    pub fn from_text(text: &str) -> Self {
        Symbols::Chars(text.chars().collect())
    }

    /// Parse a JSON string or homogeneous array.
    pub fn from_json(value: &Value) -> Result<Self, SuffixArrayError> {
        match value {
            Value::String(text) => Ok(Symbols::from_text(text)),
            Value::Array(items) => match items.first() {
                None => Ok(Symbols::Integers(Vec::new())),
                Some(Value::String(_)) => {
                    let mut tokens = Vec::with_capacity(items.len());
                    for (i, item) in items.iter().enumerate() {
                        match item {
                            Value::String(token) => tokens.push(token.clone()),
                            other => return Err(element_error("string", i, other)),
                        }
                    }
                    Ok(Symbols::Tokens(tokens))
                }
                Some(Value::Number(_)) => {
                    let mut integers = Vec::with_capacity(items.len());
                    for (i, item) in items.iter().enumerate() {
                        match item.as_i64() {
                            Some(int) => integers.push(int),
                            None => return Err(element_error("integer", i, item)),
                        }
                    }
                    Ok(Symbols::Integers(integers))
                }
                Some(other) => Err(element_error("integer or string", 0, other)),
            },
            other => Err(SuffixArrayError::invalid_input(
                "string or array of symbols",
                json_type_name(other),
                preview(other),
            )),
        }
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbols::Chars(_) => SymbolKind::Chars,
            Symbols::Integers(_) => SymbolKind::Integers,
            Symbols::Tokens(_) => SymbolKind::Tokens,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Symbols::Chars(s) => s.len(),
            Symbols::Integers(s) => s.len(),
            Symbols::Tokens(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short human-readable rendering, for error messages and reports.
    pub fn preview(&self) -> String {
        let full = match self {
            Symbols::Chars(s) => format!("{:?}", s.iter().collect::<String>()),
            Symbols::Integers(s) => format!("{:?}", s),
            Symbols::Tokens(s) => format!("{:?}", s),
        };
        truncate(full)
    }
}

fn element_error(expected: &str, index: usize, value: &Value) -> SuffixArrayError {
    SuffixArrayError::invalid_input(
        format!("{} array element", expected),
        json_type_name(value),
        format!("element {}: {}", index, preview(value)),
    )
}

/// JSON type of `value` as it appears in error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "integer out of range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn preview(value: &Value) -> String {
    truncate(value.to_string())
}

fn truncate(mut text: String) -> String {
    if let Some((cut, _)) = text.char_indices().nth(PREVIEW_LEN) {
        text.truncate(cut);
        text.push('…');
    }
    text
}

enum Inner<'a> {
    Chars(Box<dyn SuffixIndex<char> + 'a>),
    Integers(Box<dyn SuffixIndex<i64> + 'a>),
    Tokens(Box<dyn SuffixIndex<String> + 'a>),
}

/// A suffix array over a [`Symbols`] sequence of any kind.
pub struct SymbolIndex<'a> {
    inner: Inner<'a>,
}

impl<'a> SymbolIndex<'a> {
    pub fn build(engine: Engine, symbols: &'a Symbols) -> Self {
        let inner = match symbols {
            Symbols::Chars(s) => Inner::Chars(build_index(engine, s)),
            Symbols::Integers(s) => Inner::Integers(build_index(engine, s)),
            Symbols::Tokens(s) => Inner::Tokens(build_index(engine, s)),
        };
        SymbolIndex { inner }
    }

    pub fn kind(&self) -> SymbolKind {
        match &self.inner {
            Inner::Chars(_) => SymbolKind::Chars,
            Inner::Integers(_) => SymbolKind::Integers,
            Inner::Tokens(_) => SymbolKind::Tokens,
        }
    }

    pub fn engine(&self) -> Engine {
        match &self.inner {
            Inner::Chars(index) => index.engine(),
            Inner::Integers(index) => index.engine(),
            Inner::Tokens(index) => index.engine(),
        }
    }

    pub fn array(&self) -> &[usize] {
        match &self.inner {
            Inner::Chars(index) => index.array(),
            Inner::Integers(index) => index.array(),
            Inner::Tokens(index) => index.array(),
        }
    }

    pub fn len(&self) -> usize {
        self.array().len()
    }

    pub fn is_empty(&self) -> bool {
        self.array().is_empty()
    }

    /// Occurrences of `pattern` in suffix-array order.
    ///
    /// An empty pattern is compatible with every kind, and so is the text
    /// parsed from `[]` (an empty `Integers` sequence carries no symbol to
    /// disagree with). Any other pattern of a different kind than the text
    /// is `InvalidInput`, even when the text is an empty string.
    pub fn find_all(&self, pattern: &Symbols) -> Result<Matches<'_>, SuffixArrayError> {
        match (&self.inner, pattern) {
            (Inner::Chars(index), Symbols::Chars(p)) => Ok(index.find_all(p)),
            (Inner::Integers(index), Symbols::Integers(p)) => Ok(index.find_all(p)),
            (Inner::Tokens(index), Symbols::Tokens(p)) => Ok(index.find_all(p)),
            _ if pattern.is_empty() => Ok(self.find_empty()),
            (Inner::Integers(index), _) if index.is_empty() => Ok(Matches::none()),
            _ => Err(SuffixArrayError::invalid_input(
                format!("{} pattern", self.kind()),
                pattern.kind().to_string(),
                pattern.preview(),
            )),
        }
    }

    fn find_empty(&self) -> Matches<'_> {
        match &self.inner {
            Inner::Chars(index) => index.find_all(&[]),
            Inner::Integers(index) => index.find_all(&[]),
            Inner::Tokens(index) => index.find_all(&[]),
        }
    }
}

impl fmt::Debug for SymbolIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolIndex")
            .field("kind", &self.kind())
            .field("engine", &self.engine())
            .field("len", &self.len())
            .finish()
    }
}
