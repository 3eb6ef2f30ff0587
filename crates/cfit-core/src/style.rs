//! Computed-style values → tagged dimensions.
//!
//! Built on `winnow` 0.7. A computed `width` / `height` is either the
//! `inherit` keyword or a non-negative pixel length (`300px`, `150.5px`,
//! `1e3px`, or a bare `42`). Everything else (`auto`, percentages, other units,
//! negative lengths) is rejected with the offending text.

use thiserror::Error;
use winnow::ascii::{Caseless, digit0, digit1, multispace0};
use winnow::combinator::{alt, delimited, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::one_of;

/// One axis of an element's computed box size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Take the size from the parent container's content box.
    Inherit,
    /// An explicit length in CSS pixels.
    Pixels(f64),
}

/// Raw computed `width` / `height` strings as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedSize {
    pub width: String,
    pub height: String,
}

impl ComputedSize {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// A computed-style string that is neither `inherit` nor a pixel length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unsupported computed size {0:?}")]
    Unparseable(String),
    #[error("expected a pixel length, got {0:?}")]
    NotALength(String),
}

/// Parse a computed `width` / `height` value.
pub fn parse_dimension(value: &str) -> Result<Dimension, StyleError> {
    delimited(multispace0, alt((parse_inherit, parse_pixels)), multispace0)
        .parse(value)
        .map_err(|_| StyleError::Unparseable(value.to_string()))
}

/// Parse a pixel length only (padding, border widths). `inherit` is an error.
pub fn parse_length(value: &str) -> Result<f64, StyleError> {
    match parse_dimension(value) {
        Ok(Dimension::Pixels(px)) => Ok(px),
        _ => Err(StyleError::NotALength(value.to_string())),
    }
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn parse_inherit(input: &mut &str) -> ModalResult<Dimension> {
    Caseless("inherit")
        .value(Dimension::Inherit)
        .parse_next(input)
}

fn parse_pixels(input: &mut &str) -> ModalResult<Dimension> {
    let number: &str = (
        digit1,
        opt(('.', digit0)),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)?;
    let _ = opt(Caseless("px")).parse_next(input)?;
    number
        .parse::<f64>()
        .map(Dimension::Pixels)
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}
