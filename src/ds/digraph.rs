//! Directed graph stored as an ordered adjacency list.
//!
//! Vertices remember insertion order and each vertex keeps its outgoing edges
//! in the order they were added, so every traversal is deterministic.
//! Parallel edges and self loops are allowed.
//!
//! ## Architecture
//!
//! ```text
//!   order:     [ A, B, C, D ]            (insertion order of vertices)
//!
//!   adjacency: A ─► [ (B, 1), (C, 4) ]
//!              B ─► [ (D, 1) ]
//!              C ─► [ (D, 2) ]
//!              D ─► [ ]
//! ```
//!
//! ## Algorithms
//!
//! | Method              | Complexity | Notes                                   |
//! |---------------------|------------|-----------------------------------------|
//! | `dfs` / `bfs`       | O(V + E)   | explicit stack/queue, no recursion      |
//! | `has_path`          | O(V + E)   | BFS reachability                        |
//! | `has_cycle`         | O(V + E)   | three-color DFS over every root         |
//! | `topological_sort`  | O(V + E)   | reversed DFS finish order, `None` if cyclic |
//! | `shortest_path`     | O(V + E)   | fewest edges; weights are ignored       |
//! | `remove_vertex`     | O(V + E)   | also drops every edge into the vertex   |
//! | `in_degree`         | O(V + E)   |                                         |
//!
//! ## Example
//!
//! ```
//! use structkit::ds::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge("shirt", "tie").add_edge("tie", "jacket").add_edge("pants", "shoes");
//!
//! assert!(!graph.has_cycle());
//! assert!(graph.has_path(&"shirt", &"jacket"));
//! assert_eq!(
//!     graph.shortest_path(&"shirt", &"jacket"),
//!     Some(vec![&"shirt", &"tie", &"jacket"])
//! );
//!
//! graph.add_edge("jacket", "shirt");
//! assert_eq!(graph.topological_sort(), None);
//! ```

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Weight given to edges added through [`DirectedGraph::add_edge`].
pub const DEFAULT_EDGE_WEIGHT: i64 = 1;

/// Outgoing edge of a vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V> {
    /// Destination vertex.
    pub to: V,
    /// Caller-defined weight; traversals ignore it.
    pub weight: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Active,
    Done,
}

/// Directed graph over hashable vertex values.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    order: Vec<V>,
    adjacency: FxHashMap<V, Vec<Edge<V>>>,
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }

    /// Adds `vertex` if it is not already present.
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
            self.adjacency.insert(vertex, Vec::new());
        }
        self
    }

    /// Adds an edge `from -> to` with [`DEFAULT_EDGE_WEIGHT`], creating missing vertices.
    pub fn add_edge(&mut self, from: V, to: V) -> &mut Self {
        self.add_weighted_edge(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Adds an edge `from -> to` with an explicit weight, creating missing vertices.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: i64) -> &mut Self {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge { to, weight });
        }
        self
    }

    /// Removes `vertex` and every edge that points at it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        self.order.retain(|v| v != vertex);
        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.to != *vertex);
        }
        true
    }

    /// Removes every edge `from -> to`; returns `true` if at least one existed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };
        let before = edges.len();
        edges.retain(|edge| edge.to != *to);
        edges.len() < before
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Outgoing edges of `vertex`; empty for an unknown vertex.
    pub fn edges(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Depth-first visitation order from `start`; empty if `start` is unknown.
    pub fn dfs(&self, start: &V) -> Vec<&V> {
        let Some((start, _)) = self.adjacency.get_key_value(start) else {
            return Vec::new();
        };
        let mut visited: FxHashSet<&V> = FxHashSet::default();
        let mut out = vec![start];
        visited.insert(start);

        let mut stack = vec![(start, 0usize)];
        while let Some(&(vertex, idx)) = stack.last() {
            match self.edges(vertex).get(idx) {
                Some(edge) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    if visited.insert(&edge.to) {
                        out.push(&edge.to);
                        stack.push((&edge.to, 0));
                    }
                },
                None => {
                    stack.pop();
                },
            }
        }
        out
    }

    /// Breadth-first visitation order from `start`; empty if `start` is unknown.
    pub fn bfs(&self, start: &V) -> Vec<&V> {
        let Some((start, _)) = self.adjacency.get_key_value(start) else {
            return Vec::new();
        };
        let mut visited: FxHashSet<&V> = FxHashSet::default();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);
        let mut out = Vec::new();

        while let Some(vertex) = queue.pop_front() {
            out.push(vertex);
            for edge in self.edges(vertex) {
                if visited.insert(&edge.to) {
                    queue.push_back(&edge.to);
                }
            }
        }
        out
    }

    /// `true` if `to` is reachable from `from`. Every known vertex reaches itself.
    pub fn has_path(&self, from: &V, to: &V) -> bool {
        self.shortest_path(from, to).is_some()
    }

    /// `true` if any directed cycle exists, including self loops.
    pub fn has_cycle(&self) -> bool {
        self.finish_order().is_none()
    }

    /// Orders vertices so that every edge points forward; `None` if the graph is cyclic.
    pub fn topological_sort(&self) -> Option<Vec<&V>> {
        let mut order = self.finish_order()?;
        order.reverse();
        Some(order)
    }

    /// Path with the fewest edges from `from` to `to`, both endpoints included.
    pub fn shortest_path(&self, from: &V, to: &V) -> Option<Vec<&V>> {
        let (from, _) = self.adjacency.get_key_value(from)?;
        if !self.adjacency.contains_key(to) {
            return None;
        }

        let mut parent: FxHashMap<&V, &V> = FxHashMap::default();
        let mut visited: FxHashSet<&V> = FxHashSet::default();
        visited.insert(from);
        let mut queue = VecDeque::from([from]);

        while let Some(vertex) = queue.pop_front() {
            if vertex == to {
                let mut path = vec![vertex];
                let mut cur = vertex;
                while let Some(&prev) = parent.get(cur) {
                    path.push(prev);
                    cur = prev;
                }
                path.reverse();
                return Some(path);
            }
            for edge in self.edges(vertex) {
                if visited.insert(&edge.to) {
                    parent.insert(&edge.to, vertex);
                    queue.push_back(&edge.to);
                }
            }
        }
        None
    }

    /// Number of edges pointing at `vertex`, parallel edges counted.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.adjacency
            .values()
            .flatten()
            .filter(|edge| edge.to == *vertex)
            .count()
    }

    /// Number of edges leaving `vertex`; 0 for an unknown vertex.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.edges(vertex).len()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.adjacency.clear();
    }

    // DFS finish order over every root in insertion order. Returns `None` as
    // soon as an edge reaches a vertex that is still on the stack.
    fn finish_order(&self) -> Option<Vec<&V>> {
        let mut marks: FxHashMap<&V, Mark> = FxHashMap::default();
        let mut finished = Vec::with_capacity(self.len());

        for root in &self.order {
            if marks.contains_key(root) {
                continue;
            }
            marks.insert(root, Mark::Active);
            let mut stack = vec![(root, 0usize)];

            while let Some(&(vertex, idx)) = stack.last() {
                match self.edges(vertex).get(idx) {
                    Some(edge) => {
                        if let Some(top) = stack.last_mut() {
                            top.1 += 1;
                        }
                        match marks.get(&edge.to) {
                            Some(Mark::Active) => return None,
                            Some(Mark::Done) => {},
                            None => {
                                marks.insert(&edge.to, Mark::Active);
                                stack.push((&edge.to, 0));
                            },
                        }
                    },
                    None => {
                        stack.pop();
                        marks.insert(vertex, Mark::Done);
                        finished.push(vertex);
                    },
                }
            }
        }
        Some(finished)
    }
}

impl<V> Default for DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
