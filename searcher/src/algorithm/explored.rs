//! Explored-state tracking, to avoid expanding a state twice.

use std::collections::HashSet;
use std::default::Default;
use std::fmt::Debug;
use std::hash::Hash;

/// Defines the behavior required of an explored set.
pub trait ExploredSet: Default {
    type State;

    /// Record that `state` has been expanded.
    fn mark(&mut self, state: Self::State);

    /// Forget `state` on backtrack. Whether this has any effect
    /// depends on the policy.
    fn unmark(&mut self, state: &Self::State);

    fn contains(&self, state: &Self::State) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Explored set where a state, once expanded, is never expanded
/// again for the rest of the search.
#[derive(Debug)]
pub struct Persistent<S>
where
    S: Debug + Eq + Hash,
{
    explored: HashSet<S>,
}

impl<S> Default for Persistent<S>
where
    S: Debug + Eq + Hash,
{
    fn default() -> Self {
        Persistent {
            explored: HashSet::default(),
        }
    }
}

impl<S> ExploredSet for Persistent<S>
where
    S: Debug + Eq + Hash,
{
    type State = S;

    fn mark(&mut self, state: S) {
        self.explored.insert(state);
    }

    #[allow(unused_variables)]
    fn unmark(&mut self, state: &S) {}

    fn contains(&self, state: &S) -> bool {
        self.explored.contains(state)
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

/// Explored set which only holds the states on the branch currently
/// being descended. Backtracking out of a state unmarks it, so it may
/// be reached again through a different ancestor.
#[derive(Debug)]
pub struct BranchLocal<S>
where
    S: Debug + Eq + Hash,
{
    branch: HashSet<S>,
}

impl<S> Default for BranchLocal<S>
where
    S: Debug + Eq + Hash,
{
    fn default() -> Self {
        BranchLocal {
            branch: HashSet::default(),
        }
    }
}

impl<S> ExploredSet for BranchLocal<S>
where
    S: Debug + Eq + Hash,
{
    type State = S;

    fn mark(&mut self, state: S) {
        self.branch.insert(state);
    }

    fn unmark(&mut self, state: &S) {
        self.branch.remove(state);
    }

    fn contains(&self, state: &S) -> bool {
        self.branch.contains(state)
    }

    fn len(&self) -> usize {
        self.branch.len()
    }
}
