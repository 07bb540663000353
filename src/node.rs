use crate::{HasEnvelope, Rectangle};

/// One slot of a node: a stored item in a leaf, a child node otherwise.
///
/// A node's height decides which variant all of its entries hold.
#[derive(Debug, Clone)]
pub enum Entry<T> {
    Item(T),
    Node(Node<T>),
}

impl<T: HasEnvelope> HasEnvelope for Entry<T> {
    fn envelope(&self) -> Rectangle {
        match self {
            Entry::Item(item) => item.envelope(),
            Entry::Node(node) => node.envelope(),
        }
    }
}

/// A node of the tree.
///
/// Leaves have height 1 and hold items; a node of height `h > 1` holds only
/// children of height `h - 1`. The cached envelope is the union of the
/// entries' envelopes whenever the tree is not in the middle of a mutation.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) entries: Vec<Entry<T>>,
    height: usize,
    envelope: Rectangle,
}

impl<T: HasEnvelope> HasEnvelope for Node<T> {
    fn envelope(&self) -> Rectangle {
        self.envelope
    }
}

impl<T> Node<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_leaf(&self) -> bool {
        self.height == 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// The cached envelope of the subtree.
    pub fn envelope(&self) -> Rectangle {
        self.envelope
    }

    /// Child nodes, in entry order. Empty for a leaf.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Node(node) => Some(node),
            Entry::Item(_) => None,
        })
    }

    /// Items held directly by this node. Empty for an internal node.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Item(item) => Some(item),
            Entry::Node(_) => None,
        })
    }

    pub(crate) fn child(&self, index: usize) -> Option<&Node<T>> {
        match self.entries.get(index) {
            Some(Entry::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        match self.entries.get_mut(index) {
            Some(Entry::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn item(&self, index: usize) -> Option<&T> {
        match self.entries.get(index) {
            Some(Entry::Item(item)) => Some(item),
            _ => None,
        }
    }

    /// Consume the subtree, returning all of its items depth-first.
    pub fn into_items(self) -> Vec<T> {
        let mut items = Vec::new();
        self.drain_into(&mut items);
        items
    }

    fn drain_into(self, items: &mut Vec<T>) {
        for entry in self.entries {
            match entry {
                Entry::Item(item) => items.push(item),
                Entry::Node(node) => node.drain_into(items),
            }
        }
    }
}

impl<T: HasEnvelope> Node<T> {
    pub(crate) fn new(entries: Vec<Entry<T>>, height: usize) -> Self {
        let mut node = Node {
            entries,
            height,
            envelope: Rectangle::new_empty(),
        };
        node.refresh_envelope();
        node
    }

    pub fn new_empty() -> Self {
        Node::new_leaf(Vec::new())
    }

    pub fn new_leaf(items: Vec<T>) -> Self {
        Node::new(items.into_iter().map(Entry::Item).collect(), 1)
    }

    /// Wrap child nodes, all of height `height - 1`, into a node of `height`.
    pub(crate) fn new_parent(children: Vec<Node<T>>, height: usize) -> Self {
        debug_assert!(children.iter().all(|c| c.height + 1 == height));
        Node::new(children.into_iter().map(Entry::Node).collect(), height)
    }

    /// Append an entry. The cached envelope is stale until the next
    /// `refresh_envelope`.
    pub(crate) fn push(&mut self, entry: Entry<T>) {
        if let Entry::Node(child) = &entry {
            assert_eq!(
                child.height + 1,
                self.height,
                "subtree of height {} pushed into node of height {}",
                child.height,
                self.height
            );
        } else {
            assert!(self.is_leaf(), "item pushed into an internal node");
        }
        self.entries.push(entry);
    }

    pub(crate) fn refresh_envelope(&mut self) {
        self.envelope = Rectangle::of(&self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rectangle {
        Rectangle::new((x_min, y_min).into(), (x_max, y_max).into())
    }

    #[test]
    fn test_leaf_envelope_is_union() {
        let leaf = Node::new_leaf(vec![rect(0., 0., 1., 1.), rect(5., -2., 6., 0.)]);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.len(), 2);
        assert_eq!(leaf.envelope(), rect(0., -2., 6., 1.));
        assert_eq!(leaf.children().count(), 0);
        assert_eq!(leaf.items().count(), 2);
    }

    #[test]
    fn test_empty_leaf() {
        let leaf: Node<Rectangle> = Node::new_empty();
        assert!(leaf.is_empty());
        assert!(leaf.envelope().is_empty());
        assert_eq!(leaf.height(), 1);
    }

    #[test]
    fn test_push_leaves_envelope_stale() {
        let mut leaf = Node::new_leaf(vec![rect(0., 0., 1., 1.)]);
        leaf.push(Entry::Item(rect(3., 3., 4., 4.)));
        assert_eq!(leaf.envelope(), rect(0., 0., 1., 1.));
        leaf.refresh_envelope();
        assert_eq!(leaf.envelope(), rect(0., 0., 4., 4.));
    }

    #[test]
    fn test_into_items_is_depth_first() {
        let a = Node::new_leaf(vec![rect(0., 0., 1., 1.), rect(1., 1., 2., 2.)]);
        let b = Node::new_leaf(vec![rect(5., 5., 6., 6.)]);
        let parent = Node::new_parent(vec![a, b], 2);
        assert_eq!(parent.envelope(), rect(0., 0., 6., 6.));
        assert_eq!(parent.children().count(), 2);
        assert_eq!(
            parent.into_items(),
            vec![
                rect(0., 0., 1., 1.),
                rect(1., 1., 2., 2.),
                rect(5., 5., 6., 6.)
            ]
        );
    }

    #[test]
    #[should_panic]
    fn test_push_wrong_height_panics() {
        let mut parent = Node::new_parent(vec![Node::new_leaf(vec![rect(0., 0., 1., 1.)])], 2);
        parent.push(Entry::Node(Node::new_parent(
            vec![Node::new_leaf(vec![rect(0., 0., 1., 1.)])],
            2,
        )));
    }
}
