//! Directed graphs with labelled nodes and weighted edges.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use searcher::StateSpace;
use thiserror::Error;

/// Edge weight. Costs are never negative.
pub type Cost = usize;

/// Error returned when a graph can not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge {from} -> {to} has negative cost {cost}")]
    NegativeCost { from: String, to: String, cost: i64 },

    #[error("Invalid edge cost on line {line}: {text}")]
    InvalidCost { line: usize, text: String },

    #[error("Malformed graph line {line}: {text:?}")]
    Malformed { line: usize, text: String },
}

/// A directed graph. Each node keeps its outgoing edges in the order
/// they were inserted, and that order is the order of its successors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    edges: HashMap<String, Vec<(Cost, String)>>,
    order: Vec<String>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a list of nodes and their outgoing
    /// `(cost, target)` edges. Targets which never appear as a source
    /// become nodes without successors.
    pub fn from_adjacency<I, E, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (S, E)>,
        E: IntoIterator<Item = (Cost, S)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (from, edges) in adjacency {
            let from = from.into();
            graph.add_node(from.clone());
            for (cost, to) in edges {
                graph.insert(from.clone(), to, cost);
            }
        }
        graph
    }

    /// Add a node without any edges. Adding a node twice is harmless.
    pub fn add_node<S: Into<String>>(&mut self, node: S) {
        let node = node.into();
        if !self.edges.contains_key(&node) {
            self.order.push(node.clone());
            self.edges.insert(node, Vec::new());
        }
    }

    /// Add an edge, creating either endpoint if needed. Parallel
    /// edges are kept.
    pub fn insert<F, T>(&mut self, from: F, to: T, cost: Cost)
    where
        F: Into<String>,
        T: Into<String>,
    {
        let (from, to) = (from.into(), to.into());
        self.add_node(from.clone());
        self.add_node(to.clone());
        if let Some(edges) = self.edges.get_mut(&from) {
            edges.push((cost, to));
        }
    }

    /// Add an edge with a signed cost, refusing negative costs.
    pub fn try_insert<F, T>(&mut self, from: F, to: T, cost: i64) -> Result<(), GraphError>
    where
        F: Into<String>,
        T: Into<String>,
    {
        let (from, to) = (from.into(), to.into());
        match Cost::try_from(cost) {
            Ok(cost) => {
                self.insert(from, to, cost);
                Ok(())
            }
            Err(_) => Err(GraphError::NegativeCost { from, to, cost }),
        }
    }

    /// Nodes, in the order they were first seen.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Outgoing edges of `node` as `(cost, target)` pairs.
    pub fn edges(&self, node: &str) -> &[(Cost, String)] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromStr for WeightedGraph {
    type Err = GraphError;

    /// Parse one edge per line as `FROM TO COST`. A line holding a
    /// single label declares a node, and `#` starts a comment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref EDGE: Regex =
                Regex::new(r"^(?P<from>\S+)\s+(?P<to>\S+)\s+(?P<cost>-?\d+)$").unwrap();
            static ref NODE: Regex = Regex::new(r"^(?P<node>\S+)$").unwrap();
        };

        let mut graph = Self::new();
        for (n, raw) in s.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some(cap) = EDGE.captures(line) {
                let cost = cap["cost"].parse().map_err(|_| GraphError::InvalidCost {
                    line: n + 1,
                    text: cap["cost"].to_string(),
                })?;
                graph.try_insert(&cap["from"], &cap["to"], cost)?;
            } else if let Some(cap) = NODE.captures(line) {
                graph.add_node(&cap["node"]);
            } else {
                return Err(GraphError::Malformed {
                    line: n + 1,
                    text: raw.to_string(),
                });
            }
        }
        Ok(graph)
    }
}

impl StateSpace for WeightedGraph {
    type State = String;
    type Cost = Cost;

    fn neighbors(&self, state: &String) -> Vec<(Cost, String)> {
        self.edges(state).to_vec()
    }

    fn contains(&self, state: &String) -> bool {
        self.contains_node(state)
    }
}
