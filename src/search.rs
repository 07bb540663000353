use std::collections::VecDeque;

use crate::{Entry, HasEnvelope, Node, Rectangle};

/// Find all items whose envelope intersects `query`.
///
/// The traversal is breadth-first and never descends into a node whose
/// envelope misses the query. Result order is unspecified.
pub fn search<'a, T: HasEnvelope>(root: &'a Node<T>, query: &Rectangle) -> Vec<&'a T> {
    let mut results = Vec::new();
    if !query.intersects(root.envelope()) {
        return results;
    }

    let mut queue = VecDeque::new();
    queue.push_back(root);

    // Everything in the queue intersects the query.
    while let Some(node) = queue.pop_front() {
        if node.is_leaf() {
            results.extend(node.items().filter(|item| query.intersects(item.envelope())));
        } else {
            queue.extend(node.children().filter(|child| query.intersects(child.envelope())));
        }
    }

    results
}

/// One match of [`path_search`]: the nodes from the root down to the leaf
/// holding the item, and the item itself.
///
/// Each path borrows the tree and is independent of every other path, so the
/// tree cannot change while a path is held.
#[derive(Debug)]
pub struct SearchPath<'a, T> {
    nodes: Vec<&'a Node<T>>,
    item: &'a T,
}

impl<'a, T> Clone for SearchPath<'a, T> {
    fn clone(&self) -> Self {
        SearchPath {
            nodes: self.nodes.clone(),
            item: self.item,
        }
    }
}

impl<'a, T> SearchPath<'a, T> {
    /// The nodes from the root down to, and including, the leaf.
    pub fn nodes(&self) -> &[&'a Node<T>] {
        &self.nodes
    }

    pub fn root(&self) -> &'a Node<T> {
        self.nodes[0]
    }

    pub fn leaf(&self) -> &'a Node<T> {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn item(&self) -> &'a T {
        self.item
    }
}

/// Like [`search`], but return the path to each matching item, for callers
/// that need the leaf holding it.
pub fn path_search<'a, T: HasEnvelope>(
    root: &'a Node<T>,
    query: &Rectangle,
) -> Vec<SearchPath<'a, T>> {
    let mut results = Vec::new();
    if !query.intersects(root.envelope()) {
        return results;
    }

    let mut queue = VecDeque::new();
    queue.push_back(vec![root]);

    while let Some(nodes) = queue.pop_front() {
        let node = nodes[nodes.len() - 1];
        for entry in node.entries() {
            if !query.intersects(entry.envelope()) {
                continue;
            }
            match entry {
                Entry::Item(item) => results.push(SearchPath {
                    nodes: nodes.clone(),
                    item,
                }),
                Entry::Node(child) => {
                    let mut child_nodes = nodes.clone();
                    child_nodes.push(child);
                    queue.push_back(child_nodes);
                }
            }
        }
    }

    results
}

/// Where one stored item sits: the child index taken at each level from the
/// root, then the item's index within its leaf. Only meaningful until the
/// tree is next mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EntryPath {
    children: Vec<usize>,
    item: usize,
}

impl EntryPath {
    pub(crate) fn child_indices(&self) -> &[usize] {
        &self.children
    }

    pub(crate) fn item_index(&self) -> usize {
        self.item
    }

    pub(crate) fn item<'a, T>(&self, root: &'a Node<T>) -> Option<&'a T> {
        let mut node = root;
        for &index in &self.children {
            node = node.child(index)?;
        }
        node.item(self.item)
    }
}

/// Index form of [`path_search`], used to locate an item for removal.
pub(crate) fn entry_paths<T: HasEnvelope>(root: &Node<T>, query: &Rectangle) -> Vec<EntryPath> {
    let mut results = Vec::new();
    if !query.intersects(root.envelope()) {
        return results;
    }

    let mut queue = VecDeque::new();
    queue.push_back((root, Vec::new()));

    while let Some((node, children)) = queue.pop_front() {
        for (index, entry) in node.entries().iter().enumerate() {
            if !query.intersects(entry.envelope()) {
                continue;
            }
            match entry {
                Entry::Item(_) => results.push(EntryPath {
                    children: children.clone(),
                    item: index,
                }),
                Entry::Node(child) => {
                    let mut child_path = children.clone();
                    child_path.push(index);
                    queue.push_back((child, child_path));
                }
            }
        }
    }

    results
}

/// All items below `node`, depth-first in entry order.
pub fn flatten<T>(node: &Node<T>) -> Vec<&T> {
    let mut items = Vec::new();
    collect_items(node, &mut items);
    items
}

fn collect_items<'a, T>(node: &'a Node<T>, items: &mut Vec<&'a T>) {
    if node.is_leaf() {
        items.extend(node.items());
    } else {
        for child in node.children() {
            collect_items(child, items);
        }
    }
}
