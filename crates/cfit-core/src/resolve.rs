//! Canvas buffer size resolution.
//!
//! Looks an element up in the host tree, reads its computed box size and
//! copies it into the element's backing pixel buffer. An axis whose computed
//! value is `inherit` takes the parent container's content size instead.

use crate::style::{Dimension, StyleError, parse_dimension};
use crate::tree::{BufferSize, ContentBox, UiTree};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ─── Options ─────────────────────────────────────────────────────────────

/// What to do with a computed size that is neither `inherit` nor a pixel length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvalidPolicy {
    /// Fail the whole resolution; nothing is written.
    #[default]
    Reject,
    /// Size the axis to 0.
    ClampToZero,
    /// Treat the axis as `inherit`.
    Inherit,
}

/// Resolver configuration. Deserializable from `{"invalid":"clampToZero","scale":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolveOptions {
    pub invalid: InvalidPolicy,
    /// Buffer pixels per CSS pixel (device pixel ratio), applied before truncation.
    pub scale: f64,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            invalid: InvalidPolicy::Reject,
            scale: 1.0,
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    fn of(self, content: ContentBox) -> f64 {
        match self {
            Axis::Width => content.width,
            Axis::Height => content.height,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Width => "width",
            Axis::Height => "height",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("#{id}: {axis}: {source}")]
    InvalidDimension {
        id: String,
        axis: Axis,
        source: StyleError,
    },
    #[error("#{id} inherits its {axis} but has no parent container")]
    Detached { id: String, axis: Axis },
    #[error("pixel scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}

// ─── Resolver ────────────────────────────────────────────────────────────

/// Synchronizes canvas pixel buffers with their rendered box size.
#[derive(Debug, Clone, Default)]
pub struct CanvasSizeResolver {
    options: ResolveOptions,
}

impl CanvasSizeResolver {
    /// # Errors
    /// `InvalidScale` when `options.scale` is not a finite positive number.
    pub fn new(options: ResolveOptions) -> Result<Self, ResolveError> {
        if !options.scale.is_finite() || options.scale <= 0.0 {
            return Err(ResolveError::InvalidScale(options.scale));
        }
        Ok(Self { options })
    }

    /// Find `id` in `tree` and size its pixel buffer to its box size.
    ///
    /// Returns `Ok(None)` without touching the tree when no element matches.
    /// On error nothing is written.
    pub fn resolve<T: UiTree>(
        &self,
        tree: &mut T,
        id: &str,
    ) -> Result<Option<T::Element>, ResolveError> {
        let Some(element) = tree.element_by_id(id) else {
            return Ok(None);
        };
        let size = self.measure(tree, &element, id)?;
        log::debug!("resize #{id} buffer to {}x{}", size.width, size.height);
        tree.set_buffer_size(&element, size);
        Ok(Some(element))
    }

    /// Compute the buffer size for an already-located element without writing it.
    pub fn measure<T: UiTree>(
        &self,
        tree: &T,
        element: &T::Element,
        id: &str,
    ) -> Result<BufferSize, ResolveError> {
        let computed = tree.computed_size(element);
        let width = self.dimension(id, Axis::Width, &computed.width)?;
        let height = self.dimension(id, Axis::Height, &computed.height)?;

        let parent = if width == Dimension::Inherit || height == Dimension::Inherit {
            tree.parent_content_box(element)
        } else {
            None
        };

        Ok(BufferSize {
            width: self.buffer_px(id, Axis::Width, width, parent)?,
            height: self.buffer_px(id, Axis::Height, height, parent)?,
        })
    }

    fn dimension(&self, id: &str, axis: Axis, value: &str) -> Result<Dimension, ResolveError> {
        match parse_dimension(value) {
            Ok(dim) => Ok(dim),
            Err(source) => match self.options.invalid {
                InvalidPolicy::Reject => Err(ResolveError::InvalidDimension {
                    id: id.to_string(),
                    axis,
                    source,
                }),
                InvalidPolicy::ClampToZero => {
                    log::warn!("#{id}: {axis} {value:?} is not a length, using 0");
                    Ok(Dimension::Pixels(0.0))
                }
                InvalidPolicy::Inherit => {
                    log::warn!("#{id}: {axis} {value:?} is not a length, inheriting");
                    Ok(Dimension::Inherit)
                }
            },
        }
    }

    fn buffer_px(
        &self,
        id: &str,
        axis: Axis,
        dim: Dimension,
        parent: Option<ContentBox>,
    ) -> Result<u32, ResolveError> {
        let css_px = match dim {
            Dimension::Pixels(px) => px,
            Dimension::Inherit => {
                let parent = parent.ok_or_else(|| ResolveError::Detached {
                    id: id.to_string(),
                    axis,
                })?;
                log::trace!("#{id}: {axis} inherits {} from parent", axis.of(parent));
                axis.of(parent)
            }
        };
        // `as` saturates: negatives and NaN become 0, overflow becomes u32::MAX.
        Ok((css_px * self.options.scale).trunc() as u32)
    }
}

/// Resolve with default options. See [`CanvasSizeResolver::resolve`].
pub fn resolve<T: UiTree>(tree: &mut T, id: &str) -> Result<Option<T::Element>, ResolveError> {
    CanvasSizeResolver::default().resolve(tree, id)
}
