//! A packed, height-balanced R-tree over axis-aligned rectangles.
//!
//! Trees are built in one pass with sort-tile-recursive packing and stay
//! balanced under incremental insertion (margin-guided node splits) and
//! removal (condensation with reinsertion).
mod bulk;
mod config;
mod coordinate;
mod error;
pub mod from_wkt;
mod insert;
mod node;
mod packed_rtree;
mod rectangle;
mod rtree;
mod search;
pub mod utils;

pub use bulk::build_tree;
pub use config::{RTreeConfig, DEFAULT_MAX_ENTRIES};
pub use coordinate::Coordinate;
pub use error::{RTreeError, RTreeResult};
pub use insert::{find_covering_path, insert, split_node};
pub use node::{Entry, Node};
pub use packed_rtree::PackedRTree;
pub use rectangle::{HasEnvelope, Rectangle};
pub use rtree::RTree;
pub use search::{flatten, path_search, search, SearchPath};
