use crate::search::entry_paths;
use crate::{
    build_tree, flatten, insert, path_search, search, Entry, HasEnvelope, Node, RTree,
    RTreeConfig, Rectangle, SearchPath,
};

/// A dynamic R-tree: STR bulk loading, incremental insertion and removal.
#[derive(Debug, Clone)]
pub struct PackedRTree<T> {
    root: Node<T>,
    config: RTreeConfig,
    size: usize,
}

impl<T: HasEnvelope> RTree<T> for PackedRTree<T> {
    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn height(&self) -> usize {
        self.root.height()
    }

    fn degree(&self) -> usize {
        self.config.max_entries()
    }

    fn envelope(&self) -> Rectangle {
        self.root.envelope()
    }

    fn query_rect(&self, query: &Rectangle) -> Vec<&T> {
        search(&self.root, query)
    }
}

impl<T: HasEnvelope> Default for PackedRTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HasEnvelope> PackedRTree<T> {
    pub fn new() -> Self {
        Self::with_config(RTreeConfig::default())
    }

    pub fn with_config(config: RTreeConfig) -> Self {
        PackedRTree {
            root: Node::new_empty(),
            config,
            size: 0,
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self::from_items_with_config(items, RTreeConfig::default())
    }

    pub fn from_items_with_config(items: Vec<T>, config: RTreeConfig) -> Self {
        let size = items.len();
        PackedRTree {
            root: build_tree(items, &config),
            config,
            size,
        }
    }

    pub fn config(&self) -> &RTreeConfig {
        &self.config
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn envelope(&self) -> Rectangle {
        self.root.envelope()
    }

    pub fn clear(&mut self) {
        self.root = Node::new_empty();
        self.size = 0;
    }

    pub fn insert(&mut self, item: T) {
        let depth = self.root.height();
        self.insert_entry(Entry::Item(item), depth);
        self.size += 1;
    }

    /// Insert a batch of items.
    ///
    /// Large batches are packed into their own tree first, which is then
    /// merged with the existing one at the matching level.
    pub fn load(&mut self, items: Vec<T>) {
        if items.is_empty() {
            return;
        }

        let fits_in_root = self.root.is_leaf()
            && self.root.len() + items.len() < self.config.max_entries();
        if fits_in_root || items.len() < self.config.min_entries() {
            for item in items {
                self.insert(item);
            }
            return;
        }

        self.size += items.len();
        let loaded = build_tree(items, &self.config);
        if self.root.is_empty() {
            self.root = loaded;
            return;
        }

        let old_root = std::mem::replace(&mut self.root, Node::new_empty());
        let (mut taller, shorter) = if old_root.height() >= loaded.height() {
            (old_root, loaded)
        } else {
            (loaded, old_root)
        };

        if taller.height() == shorter.height() {
            if taller.len() + shorter.len() <= self.config.max_entries() {
                taller.entries.extend(shorter.entries);
                taller.refresh_envelope();
                self.root = taller;
            } else {
                let height = taller.height() + 1;
                log::debug!("merged equal-height trees, tree height now {}", height);
                self.root = Node::new_parent(vec![taller, shorter], height);
            }
        } else {
            let depth = taller.height() - shorter.height();
            self.root = insert(taller, Entry::Node(shorter), depth, &self.config);
        }
    }

    pub fn search(&self, query: &Rectangle) -> Vec<&T> {
        search(&self.root, query)
    }

    /// Paths to every item intersecting `query`.
    pub fn path_search(&self, query: &Rectangle) -> Vec<SearchPath<'_, T>> {
        path_search(&self.root, query)
    }

    /// Every stored item, depth-first.
    pub fn all(&self) -> Vec<&T> {
        flatten(&self.root)
    }

    fn insert_entry(&mut self, entry: Entry<T>, depth: usize) {
        let root = std::mem::replace(&mut self.root, Node::new_empty());
        self.root = insert(root, entry, depth, &self.config);
    }
}

impl<T: HasEnvelope + PartialEq> PackedRTree<T> {
    /// Remove one stored item equal to `item`, returning it.
    ///
    /// Nodes left under the fill floor are dissolved and their items
    /// reinserted. Returns `None` if no equal item is stored.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let path = entry_paths(&self.root, &item.envelope())
            .into_iter()
            .find(|path| path.item(&self.root) == Some(item))?;

        let mut orphans = Vec::new();
        let removed = remove_along(
            &mut self.root,
            path.child_indices(),
            path.item_index(),
            self.config.min_entries(),
            &mut orphans,
        )?;
        self.size -= 1;

        self.shrink_root();
        if !orphans.is_empty() {
            log::debug!("condensed tree, reinserting {} items", orphans.len());
        }
        for orphan in orphans {
            let depth = self.root.height();
            self.insert_entry(Entry::Item(orphan), depth);
        }

        Some(removed)
    }

    fn shrink_root(&mut self) {
        while !self.root.is_leaf() && self.root.len() <= 1 {
            let root = std::mem::replace(&mut self.root, Node::new_empty());
            if let Some(Entry::Node(child)) = root.entries.into_iter().next() {
                log::debug!("root collapsed, tree height now {}", child.height());
                self.root = child;
            }
        }
    }
}

/// Remove the item at the end of `path` below `node`, detaching every node
/// on the way that drops under `min_entries` and collecting its items into
/// `orphans`. Envelopes along the path are refreshed.
fn remove_along<T: HasEnvelope>(
    node: &mut Node<T>,
    path: &[usize],
    item: usize,
    min_entries: usize,
    orphans: &mut Vec<T>,
) -> Option<T> {
    let removed = match path.split_first() {
        None => {
            node.item(item)?;
            match node.entries.remove(item) {
                Entry::Item(removed) => removed,
                Entry::Node(_) => return None,
            }
        }
        Some((&index, rest)) => {
            let child = node.child_mut(index)?;
            let removed = remove_along(child, rest, item, min_entries, orphans)?;
            if child.len() < min_entries {
                if let Entry::Node(child) = node.entries.remove(index) {
                    orphans.extend(child.into_items());
                }
            }
            removed
        }
    };
    node.refresh_envelope();
    Some(removed)
}
