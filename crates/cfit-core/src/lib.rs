pub mod id;
pub mod memory;
pub mod resolve;
pub mod style;
pub mod tree;

pub use id::ElementId;
pub use memory::{ElementHandle, MemoryTree};
pub use resolve::{Axis, CanvasSizeResolver, InvalidPolicy, ResolveError, ResolveOptions, resolve};
pub use style::{ComputedSize, Dimension, StyleError, parse_dimension, parse_length};
pub use tree::{BufferSize, ContentBox, UiTree};
