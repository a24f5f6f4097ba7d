//! Paths returned from searches, and the bookkeeping needed to
//! rebuild them once a search reaches its goal.

use std::ops::Deref;

use itertools::Itertools;
use num::{CheckedAdd, Zero};

use crate::traits::StateSpace;

/// An ordered sequence of states from start to goal, inclusive.
///
/// A path always holds at least one state; a path of one state
/// means the search started on its goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<S> {
    states: Vec<S>,
}

/// Parent links recorded while searching, indexed by node handle.
pub(crate) trait ParentLinks {
    type State: Clone;

    fn state(&self, node: usize) -> &Self::State;

    fn parent(&self, node: usize) -> Option<usize>;
}

impl<S> Path<S> {
    /// Wrap a sequence of states as a path. Returns `None` for an
    /// empty sequence.
    pub fn new(states: Vec<S>) -> Option<Self> {
        if states.is_empty() {
            None
        } else {
            Some(Path { states })
        }
    }

    /// Build a path from the states visited on the way to
    /// `destination`, origin first.
    pub(crate) fn from_ancestors(mut ancestors: Vec<S>, destination: S) -> Self {
        ancestors.push(destination);
        Path { states: ancestors }
    }

    /// Walk parent links back from `leaf` to the root, then reverse.
    pub(crate) fn reconstruct<L>(links: &L, leaf: usize) -> Self
    where
        L: ParentLinks<State = S>,
        S: Clone,
    {
        let mut states = vec![links.state(leaf).clone()];
        let mut node = leaf;
        while let Some(parent) = links.parent(node) {
            states.push(links.state(parent).clone());
            node = parent;
        }
        states.reverse();
        Path { states }
    }

    /// Where this path started
    pub fn origin(&self) -> &S {
        &self.states[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &S {
        &self.states[self.states.len() - 1]
    }

    /// Number of edges traversed.
    pub fn distance(&self) -> usize {
        self.states.len() - 1
    }

    pub fn into_vec(self) -> Vec<S> {
        self.states
    }
}

impl<S> Path<S>
where
    S: Clone + Eq,
{
    /// Total cost of this path within `space`.
    ///
    /// Where a state has several edges to the same successor, the
    /// cheapest one is used. Returns `None` when two consecutive
    /// states are not connected, or when the total overflows.
    pub fn cost_in<G>(&self, space: &G) -> Option<G::Cost>
    where
        G: StateSpace<State = S>,
    {
        self.states
            .iter()
            .tuple_windows()
            .try_fold(G::Cost::zero(), |total, (from, to)| {
                space
                    .neighbors(from)
                    .into_iter()
                    .filter(|(_, n)| n == to)
                    .map(|(cost, _)| cost)
                    .min()
                    .and_then(|cost| total.checked_add(&cost))
            })
    }

    /// Is every step of this path an edge of `space`?
    pub fn is_valid_in<G>(&self, space: &G) -> bool
    where
        G: StateSpace<State = S>,
    {
        self.states.iter().all(|s| space.contains(s))
            && self
                .states
                .iter()
                .tuple_windows()
                .all(|(from, to)| space.neighbors(from).iter().any(|(_, n)| n == to))
    }
}

impl<S> Deref for Path<S> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl<S> From<Path<S>> for Vec<S> {
    fn from(path: Path<S>) -> Self {
        path.states
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::helpers::*;

    struct Chain(Vec<(char, Option<usize>)>);

    impl ParentLinks for Chain {
        type State = char;

        fn state(&self, node: usize) -> &char {
            &self.0[node].0
        }

        fn parent(&self, node: usize) -> Option<usize> {
            self.0[node].1
        }
    }

    #[test]
    fn ancestors() {
        let path = Path::from_ancestors(vec!['A', 'B'], 'D');
        assert_eq!(*path, ['A', 'B', 'D']);
        assert_eq!(path.origin(), &'A');
        assert_eq!(path.destination(), &'D');
        assert_eq!(path.distance(), 2);
    }

    #[test]
    fn single() {
        let path = Path::from_ancestors(Vec::new(), 'A');
        assert_eq!(path.len(), 1);
        assert_eq!(path.distance(), 0);
        assert_eq!(path.origin(), path.destination());
        assert_eq!(Path::new(vec!['A']), Some(path));
        assert_eq!(Path::<char>::new(Vec::new()), None);
    }

    #[test]
    fn reconstruct() {
        // Node 3 hangs off node 1, which hangs off the root.
        let links = Chain(vec![
            ('A', None),
            ('B', Some(0)),
            ('C', Some(0)),
            ('D', Some(1)),
        ]);
        assert_eq!(Path::reconstruct(&links, 3).into_vec(), vec!['A', 'B', 'D']);
        assert_eq!(Path::reconstruct(&links, 0).into_vec(), vec!['A']);
    }

    #[test]
    fn cost() {
        let graph = weighted();
        assert_eq!(Path::from_ancestors(vec!['A', 'B'], 'D').cost_in(&graph), Some(3));
        assert_eq!(
            Path::from_ancestors(vec!['A', 'C', 'B'], 'D').cost_in(&graph),
            Some(7)
        );
        assert_eq!(Path::from_ancestors(vec!['A'], 'D').cost_in(&graph), None);
        assert!(!Path::from_ancestors(vec!['D'], 'A').is_valid_in(&graph));
        assert!(Path::from_ancestors(Vec::new(), 'A').is_valid_in(&graph));
    }
}
