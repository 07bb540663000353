use crate::{search, HasEnvelope, Node, Rectangle};

/// Read-only view of a spatial index.
pub trait RTree<T> {
    fn is_empty(&self) -> bool;
    fn height(&self) -> usize;
    /// The most entries any node holds: the configured cap for an owned
    /// tree, the widest node actually present for a bare subtree.
    fn degree(&self) -> usize;
    fn envelope(&self) -> Rectangle;
    fn query_rect(&self, rect: &Rectangle) -> Vec<&T>;
}

/// A bare subtree answers queries too.
impl<T: HasEnvelope> RTree<T> for Node<T> {
    fn is_empty(&self) -> bool {
        Node::is_empty(self)
    }

    fn height(&self) -> usize {
        Node::height(self)
    }

    fn degree(&self) -> usize {
        self.children()
            .map(|child| RTree::degree(child))
            .fold(self.len(), usize::max)
    }

    fn envelope(&self) -> Rectangle {
        Node::envelope(self)
    }

    fn query_rect(&self, rect: &Rectangle) -> Vec<&T> {
        search(self, rect)
    }
}
