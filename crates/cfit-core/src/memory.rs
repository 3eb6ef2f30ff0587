//! In-memory host tree.
//!
//! A `petgraph` tree of elements carrying computed style strings, content
//! boxes and pixel buffers. Stands in for a browser document in tests and
//! headless hosts.

use crate::id::ElementId;
use crate::style::ComputedSize;
use crate::tree::{BufferSize, ContentBox, UiTree};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::HashMap;

/// Handle to an element in a `MemoryTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(NodeIndex);

/// A single element in the tree.
#[derive(Debug, Clone)]
pub struct ElementNode {
    pub id: ElementId,
    pub computed: ComputedSize,
    /// Content box offered to children that inherit their size.
    pub content: ContentBox,
    /// Backing pixel buffer; only meaningful for canvas elements.
    pub buffer: BufferSize,
}

impl ElementNode {
    pub fn new(id: ElementId, computed: ComputedSize) -> Self {
        Self {
            id,
            computed,
            content: ContentBox::default(),
            buffer: BufferSize::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    graph: StableDiGraph<ElementNode, ()>,
    id_index: HashMap<ElementId, NodeIndex>,
}

impl MemoryTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parentless element. Later elements with the same id shadow earlier ones.
    pub fn insert_root(&mut self, id: &str, computed: ComputedSize) -> ElementHandle {
        let id = ElementId::intern(id);
        let idx = self.graph.add_node(ElementNode::new(id, computed));
        self.id_index.insert(id, idx);
        ElementHandle(idx)
    }

    /// Add an element as the last child of `parent`.
    pub fn insert_child(
        &mut self,
        parent: ElementHandle,
        id: &str,
        computed: ComputedSize,
    ) -> ElementHandle {
        let child = self.insert_root(id, computed);
        self.graph.add_edge(parent.0, child.0, ());
        child
    }

    pub fn get(&self, element: ElementHandle) -> Option<&ElementNode> {
        self.graph.node_weight(element.0)
    }

    pub fn set_computed(&mut self, element: ElementHandle, computed: ComputedSize) {
        if let Some(node) = self.graph.node_weight_mut(element.0) {
            node.computed = computed;
        }
    }

    pub fn set_content_box(&mut self, element: ElementHandle, content: ContentBox) {
        if let Some(node) = self.graph.node_weight_mut(element.0) {
            node.content = content;
        }
    }

    /// Current pixel-buffer size, zero for unknown handles.
    pub fn buffer_size(&self, element: ElementHandle) -> BufferSize {
        self.get(element).map(|n| n.buffer).unwrap_or_default()
    }

    pub fn parent(&self, element: ElementHandle) -> Option<ElementHandle> {
        self.graph
            .neighbors_directed(element.0, Direction::Incoming)
            .next()
            .map(ElementHandle)
    }

    /// Buffer sizes of every element, keyed by id. Handy for "nothing changed" checks.
    pub fn buffers(&self) -> HashMap<ElementId, BufferSize> {
        self.graph
            .node_weights()
            .map(|node| (node.id, node.buffer))
            .collect()
    }
}

impl UiTree for MemoryTree {
    type Element = ElementHandle;

    fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        let id = ElementId::get(id)?;
        self.id_index.get(&id).copied().map(ElementHandle)
    }

    fn computed_size(&self, element: &ElementHandle) -> ComputedSize {
        self.get(*element)
            .map(|n| n.computed.clone())
            .unwrap_or_default()
    }

    fn parent_content_box(&self, element: &ElementHandle) -> Option<ContentBox> {
        let parent = self.parent(*element)?;
        self.get(parent).map(|n| n.content)
    }

    fn set_buffer_size(&mut self, element: &ElementHandle, size: BufferSize) {
        if let Some(node) = self.graph.node_weight_mut(element.0) {
            node.buffer = size;
        }
    }
}
