//! Integration tests: host tree → resolver → verify pixel buffers.
//!
//! Exercises the full `cfit-core` pipeline through `MemoryTree`.

use cfit_core::{
    BufferSize, CanvasSizeResolver, ComputedSize, ContentBox, ElementHandle, InvalidPolicy,
    MemoryTree, ResolveError, ResolveOptions, resolve,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A container with the given content box holding one canvas `#view`.
fn page(parent: ContentBox, width: &str, height: &str) -> (MemoryTree, ElementHandle) {
    init_logging();
    let mut tree = MemoryTree::new();
    let container = tree.insert_root("container", ComputedSize::new("1280px", "720px"));
    tree.set_content_box(container, parent);
    let view = tree.insert_child(container, "view", ComputedSize::new(width, height));
    (tree, view)
}

// ─── Core behavior ──────────────────────────────────────────────────────

#[test]
fn inherit_on_both_axes_takes_parent_content_box() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "inherit", "inherit");
    let resolved = resolve(&mut tree, "view").unwrap();
    assert_eq!(resolved, Some(view));
    assert_eq!(tree.buffer_size(view), BufferSize::new(800, 600));
}

#[test]
fn explicit_px_sizes_are_copied() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "300px", "150px");
    resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(300, 150));
}

#[test]
fn missing_id_is_absent_and_mutates_nothing() {
    let (mut tree, _) = page(ContentBox::new(800.0, 600.0), "300px", "150px");
    let before = tree.buffers();
    let resolved = resolve(&mut tree, "no_such_canvas").unwrap();
    assert_eq!(resolved, None);
    assert_eq!(tree.buffers(), before);
}

#[test]
fn resolving_twice_is_idempotent() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "inherit", "240px");
    resolve(&mut tree, "view").unwrap();
    let first = tree.buffer_size(view);
    resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), first);
    assert_eq!(first, BufferSize::new(800, 240));
}

#[test]
fn mixed_axes_resolve_independently() {
    let (mut tree, view) = page(ContentBox::new(1024.0, 768.0), "inherit", "200px");
    resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(1024, 200));
}

#[test]
fn fractional_values_truncate() {
    let (mut tree, view) = page(ContentBox::new(640.9, 480.2), "inherit", "99.99px");
    resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(640, 99));
}

#[test]
fn resolve_overwrites_previous_buffer() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "300px", "150px");
    resolve(&mut tree, "view").unwrap();
    tree.set_computed(view, ComputedSize::new("inherit", "inherit"));
    resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(800, 600));
}

// ─── Invalid values ─────────────────────────────────────────────────────

#[test]
fn reject_policy_leaves_buffer_untouched() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "300px", "auto");
    let err = resolve(&mut tree, "view").unwrap_err();
    assert!(matches!(err, ResolveError::InvalidDimension { .. }));
    assert_eq!(tree.buffer_size(view), BufferSize::default());
}

#[test]
fn clamp_policy_zeroes_invalid_axis() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "50%", "150px");
    let resolver = CanvasSizeResolver::new(ResolveOptions {
        invalid: InvalidPolicy::ClampToZero,
        ..ResolveOptions::default()
    })
    .unwrap();
    resolver.resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(0, 150));
}

#[test]
fn inherit_policy_falls_back_to_parent() {
    let (mut tree, view) = page(ContentBox::new(800.0, 600.0), "300px", "");
    let resolver = CanvasSizeResolver::new(ResolveOptions {
        invalid: InvalidPolicy::Inherit,
        ..ResolveOptions::default()
    })
    .unwrap();
    resolver.resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(300, 600));
}

#[test]
fn inherit_without_parent_is_detached() {
    init_logging();
    let mut tree = MemoryTree::new();
    let lone = tree.insert_root("lone", ComputedSize::new("inherit", "10px"));
    let err = resolve(&mut tree, "lone").unwrap_err();
    assert_eq!(err.to_string(), "#lone inherits its width but has no parent container");
    assert_eq!(tree.buffer_size(lone), BufferSize::default());
}

// ─── Scale ──────────────────────────────────────────────────────────────

#[test]
fn scale_multiplies_before_truncation() {
    let (mut tree, view) = page(ContentBox::new(400.5, 300.0), "inherit", "150.4px");
    let resolver = CanvasSizeResolver::new(ResolveOptions {
        scale: 2.0,
        ..ResolveOptions::default()
    })
    .unwrap();
    resolver.resolve(&mut tree, "view").unwrap();
    assert_eq!(tree.buffer_size(view), BufferSize::new(801, 300));
}
