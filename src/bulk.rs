/**
 * Sort-tile-recursive bulk loading.
 *
 * Items are sorted by their low x bound into vertical slabs, each slab is
 * sorted by low y bound and cut into tiles, and each tile is packed
 * recursively one level down.
 */
use crate::utils::{cmp_x_min, cmp_y_min, divup};
use crate::{HasEnvelope, Node, RTreeConfig};

/// Build a balanced tree holding all of `items`.
///
/// No items gives an empty leaf, a single item a leaf of height 1.
pub fn build_tree<T: HasEnvelope>(items: Vec<T>, config: &RTreeConfig) -> Node<T> {
    let num_items = items.len();
    let max_entries = config.max_entries();
    if num_items <= 1 {
        return Node::new_leaf(items);
    }

    let height = target_height(num_items, max_entries);
    let root_entries = divup(num_items, max_entries.pow(height as u32 - 1));
    log::debug!(
        "bulk loading {} items: height {}, root fanout {}",
        num_items,
        height,
        root_entries
    );
    build_level(items, height, root_entries, max_entries)
}

/// Smallest height `h >= 1` with `max_entries^h >= num_items`.
pub(crate) fn target_height(num_items: usize, max_entries: usize) -> usize {
    let mut height = 1;
    let mut capacity = max_entries;
    while capacity < num_items {
        capacity = capacity.saturating_mul(max_entries);
        height += 1;
    }
    height
}

fn build_level<T: HasEnvelope>(
    mut items: Vec<T>,
    height: usize,
    level_max_entries: usize,
    max_entries: usize,
) -> Node<T> {
    if items.len() <= level_max_entries {
        if height == 1 {
            return Node::new_leaf(items);
        }
        // Too few items for this height: a single child chain down to a leaf.
        let child = build_level(items, height - 1, max_entries, max_entries);
        return Node::new_parent(vec![child], height);
    }

    items.sort_by(cmp_x_min);

    let node_size = divup(items.len(), level_max_entries);
    let slab_size = node_size * (level_max_entries as f64).sqrt().ceil() as usize;

    let mut children = Vec::with_capacity(level_max_entries);
    let mut remaining = items.into_iter();
    loop {
        let mut slab: Vec<T> = remaining.by_ref().take(slab_size).collect();
        if slab.is_empty() {
            break;
        }
        slab.sort_by(cmp_y_min);

        let mut tiles = slab.into_iter();
        loop {
            let tile: Vec<T> = tiles.by_ref().take(node_size).collect();
            if tile.is_empty() {
                break;
            }
            children.push(build_level(tile, height - 1, max_entries, max_entries));
        }
    }

    Node::new_parent(children, height)
}
