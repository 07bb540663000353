use crate::utils::{cmp_x_min, cmp_y_min};
use crate::{Entry, HasEnvelope, Node, RTreeConfig, Rectangle};

/// Choose the descent path for an entry with the given envelope.
///
/// Returns the child index taken at each level, so the path visits
/// `indices.len() + 1` nodes. Descent stops at a leaf or once `depth` nodes
/// have been visited.
pub fn find_covering_path<T: HasEnvelope>(
    root: &Node<T>,
    envelope: &Rectangle,
    depth: usize,
) -> Vec<usize> {
    let mut path = Vec::new();
    let mut node = root;

    while !node.is_leaf() && path.len() + 1 < depth {
        let index = match choose_subtree(node, envelope) {
            Some(index) => index,
            None => break,
        };
        path.push(index);
        node = match node.child(index) {
            Some(child) => child,
            None => break,
        };
    }
    path
}

/// The child needing the least enlarged area to cover `envelope`, ties going
/// to the smaller child.
fn choose_subtree<T: HasEnvelope>(node: &Node<T>, envelope: &Rectangle) -> Option<usize> {
    let mut best: Option<(usize, f64, f64)> = None;
    for (index, child) in node.children().enumerate() {
        let child_envelope = child.envelope();
        let enlarged_area = child_envelope.merge(envelope).area();
        let area = child_envelope.area();
        let better = match best {
            None => true,
            Some((_, best_enlarged, best_area)) => {
                enlarged_area < best_enlarged
                    || (enlarged_area == best_enlarged && area < best_area)
            }
        };
        if better {
            best = Some((index, enlarged_area, area));
        }
    }
    best.map(|(index, _, _)| index)
}

/// Insert an entry `depth` levels down (counting the root as level 1) and
/// return the root, which is a new, taller node if the old root split.
///
/// Items must be inserted at full depth (the root's height). A subtree of
/// height `h` must be inserted at depth `root.height() - h`.
pub fn insert<T: HasEnvelope>(
    mut root: Node<T>,
    entry: Entry<T>,
    depth: usize,
    config: &RTreeConfig,
) -> Node<T> {
    assert!(depth >= 1, "insertion depth must be at least 1");
    let envelope = entry.envelope();
    let path = find_covering_path(&root, &envelope, depth);

    match insert_along(&mut root, &path, entry, config) {
        None => root,
        Some(sibling) => {
            let height = root.height() + 1;
            log::debug!("root split, tree height now {}", height);
            Node::new_parent(vec![root, sibling], height)
        }
    }
}

/// Push `entry` into the node at the end of `path` and repair on the way
/// back up. Returns the new sibling if `node` itself had to split.
fn insert_along<T: HasEnvelope>(
    node: &mut Node<T>,
    path: &[usize],
    entry: Entry<T>,
    config: &RTreeConfig,
) -> Option<Node<T>> {
    match path.split_first() {
        None => node.push(entry),
        Some((&index, rest)) => {
            let split = match node.child_mut(index) {
                Some(child) => insert_along(child, rest, entry, config),
                None => unreachable!("covering path leads through child nodes"),
            };
            if let Some(sibling) = split {
                node.push(Entry::Node(sibling));
            }
        }
    }

    if node.len() > config.max_entries() {
        Some(split_node(node, config.min_entries()))
    } else {
        node.refresh_envelope();
        None
    }
}

/// Split an overfull node in two, returning the new sibling.
///
/// The entries are ordered along the axis whose candidate splits have the
/// least total margin, then cut where the two halves overlap least. Both
/// halves keep at least `min_entries` entries.
pub fn split_node<T: HasEnvelope>(node: &mut Node<T>, min_entries: usize) -> Node<T> {
    assert!(
        min_entries >= 1 && node.len() >= 2 * min_entries,
        "cannot split {} entries into halves of at least {}",
        node.len(),
        min_entries
    );
    sort_entries(&mut node.entries, min_entries);

    let split_index = best_split_index(&node.entries, min_entries);
    let sibling_entries = node.entries.split_off(split_index);
    node.refresh_envelope();
    log::trace!(
        "split node of height {} into {} + {} entries",
        node.height(),
        node.len(),
        sibling_entries.len()
    );
    Node::new(sibling_entries, node.height())
}

fn sort_entries<T: HasEnvelope>(entries: &mut [Entry<T>], min_entries: usize) {
    entries.sort_by(cmp_y_min);
    let margins_y = split_margins(entries, min_entries);
    entries.sort_by(cmp_x_min);
    let margins_x = split_margins(entries, min_entries);

    if margins_y < margins_x {
        entries.sort_by(cmp_y_min);
    }
}

/// Total margin of the candidate groups, grown from both ends.
fn split_margins<E: HasEnvelope>(entries: &[E], min_entries: usize) -> f64 {
    enclosing_margins(entries.iter(), entries.len(), min_entries)
        + enclosing_margins(entries.iter().rev(), entries.len(), min_entries)
}

fn enclosing_margins<'a, E: HasEnvelope + 'a>(
    entries: impl Iterator<Item = &'a E>,
    count: usize,
    min_entries: usize,
) -> f64 {
    let mut envelope = Rectangle::new_empty();
    let mut total_margin = 0.;
    for (i, entry) in entries.take(count - min_entries).enumerate() {
        envelope.expand(entry.envelope());
        if i + 1 >= min_entries {
            total_margin += envelope.margin();
        }
    }
    total_margin
}

/// The split index with the least overlap between the two groups, ties going
/// to the least total area.
fn best_split_index<E: HasEnvelope>(entries: &[E], min_entries: usize) -> usize {
    let count = entries.len();

    let mut prefixes = Vec::with_capacity(count + 1);
    let mut envelope = Rectangle::new_empty();
    prefixes.push(envelope);
    for entry in entries {
        envelope.expand(entry.envelope());
        prefixes.push(envelope);
    }

    let mut suffixes = vec![Rectangle::new_empty(); count + 1];
    for i in (0..count).rev() {
        suffixes[i] = suffixes[i + 1].merge(entries[i].envelope());
    }

    let mut best_index = min_entries;
    let mut best_overlap = f64::INFINITY;
    let mut best_area = f64::INFINITY;
    for i in min_entries..(count - min_entries).max(min_entries + 1) {
        let (left, right) = (prefixes[i], suffixes[i]);
        let overlap = left.intersection(right).area();
        let total_area = left.area() + right.area();
        if overlap < best_overlap || (overlap == best_overlap && total_area < best_area) {
            best_index = i;
            best_overlap = overlap;
            best_area = total_area;
        }
    }
    best_index
}
