pub mod bst;
pub mod digraph;
pub mod intrusive_list;
pub mod slot_arena;

pub use bst::BinarySearchTree;
pub use digraph::{DEFAULT_EDGE_WEIGHT, DirectedGraph, Edge};
pub use intrusive_list::IntrusiveList;
pub use slot_arena::{SlotArena, SlotId};
