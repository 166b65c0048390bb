use crate::error::ValidationError;
use num_traits::NumAssign;
use std::collections::HashMap;

#[derive(PartialEq, Eq, Debug, Clone)]
pub(crate) struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
    pub cost: Flow,
}

/// Read-only view of a declared edge.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct EdgeRef<'a, Flow> {
    pub from: &'a str,
    pub to: &'a str,
    pub capacity: Flow,
    pub cost: Flow,
}

/// Directed network with string-keyed nodes.
///
/// Nodes live in an index-addressed arena; edges refer to them by index.
/// Iteration over nodes and edges follows insertion order, which is what the
/// solvers use to break ties. A graph is never mutated behind a solver's back:
/// scenario variants are made with [`Clone`] followed by [`Graph::remove_edge`].
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Graph<Flow> {
    names: Vec<String>,
    index: HashMap<String, usize>,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new() -> Self {
        Self { names: Vec::new(), index: HashMap::new(), edges: Vec::new() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // return node index
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&u) = self.index.get(name) {
            return u;
        }
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), self.names.len() - 1);
        self.names.len() - 1
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn add_edge(&mut self, from: &str, to: &str, capacity: Flow, cost: Flow) -> Result<(), ValidationError> {
        let (f, t) = (from.to_string(), to.to_string());
        if capacity < Flow::zero() {
            return Err(ValidationError::NegativeCapacity { from: f, to: t });
        }
        if cost < Flow::zero() {
            return Err(ValidationError::NegativeCost { from: f, to: t });
        }
        if self.has_edge(from, to) {
            return Err(ValidationError::DuplicateEdge { from: f, to: t });
        }

        let (u, v) = (self.add_node(from), self.add_node(to));
        self.edges.push(Edge { from: u, to: v, upper: capacity, cost });
        Ok(())
    }

    /// Removes the edge `from -> to`. Returns whether an edge was removed;
    /// an absent edge is not an error.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        match self.position(from, to) {
            Some(edge_id) => {
                // Vec::remove keeps the remaining edges in insertion order
                self.edges.remove(edge_id);
                true
            }
            None => false,
        }
    }

    /// Copy of this graph with every listed edge removed.
    pub fn without_edges<S: AsRef<str>>(&self, closed: &[(S, S)]) -> Self {
        let mut graph = self.clone();
        for (from, to) in closed {
            graph.remove_edge(from.as_ref(), to.as_ref());
        }
        graph
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.position(from, to).is_some()
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<EdgeRef<'_, Flow>> {
        self.position(from, to).map(|edge_id| self.edge_ref(&self.edges[edge_id]))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, Flow>> + '_ {
        self.edges.iter().map(|e| self.edge_ref(e))
    }

    #[inline]
    pub(crate) fn node_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[inline]
    pub(crate) fn node_name(&self, u: usize) -> &str {
        &self.names[u]
    }

    fn position(&self, from: &str, to: &str) -> Option<usize> {
        let (u, v) = (self.node_index(from)?, self.node_index(to)?);
        self.edges.iter().position(|e| e.from == u && e.to == v)
    }

    fn edge_ref<'a>(&'a self, e: &Edge<Flow>) -> EdgeRef<'a, Flow> {
        EdgeRef { from: &self.names[e.from], to: &self.names[e.to], capacity: e.upper, cost: e.cost }
    }
}
