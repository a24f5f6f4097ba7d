use std::fmt::Debug;
use std::hash::Hash;

use num::{CheckedAdd, Zero};

use crate::errors::{Result, SearchError};

/// Read-only view of a discrete state space.
///
/// The engine only ever asks a state space for the successors of a
/// state. Implementations must not change between calls: searches
/// are deterministic only if neighbor enumeration is.
pub trait StateSpace {
    /// Position within the space. Equal states must hash identically.
    type State: Debug + Clone + Eq + Hash;

    /// Step cost. Costs must be non-negative for uniform-cost search
    /// to return an optimal path. Sums of costs are checked, so a path
    /// too expensive to represent is reported rather than wrapped.
    type Cost: Debug + Copy + Ord + Zero + CheckedAdd;

    /// Legal successors of `state`, in a fixed order, paired with
    /// the cost of stepping to each.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Cost, Self::State)>;

    /// Does this state belong to the space?
    ///
    /// Searches refuse to start from (or head for) a state outside
    /// the space.
    #[allow(unused_variables)]
    fn contains(&self, state: &Self::State) -> bool {
        true
    }
}

impl<'g, G> StateSpace for &'g G
where
    G: StateSpace + ?Sized,
{
    type State = G::State;
    type Cost = G::Cost;

    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Cost, Self::State)> {
        (**self).neighbors(state)
    }

    fn contains(&self, state: &Self::State) -> bool {
        (**self).contains(state)
    }
}

/// Check that both ends of a search are part of the space.
pub(crate) fn check_endpoints<G>(space: &G, start: &G::State, goal: &G::State) -> Result<()>
where
    G: StateSpace + ?Sized,
{
    for state in [start, goal].iter() {
        if !space.contains(state) {
            return Err(SearchError::UnknownState(format!("{:?}", state)));
        }
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use super::helpers::*;
    use super::*;

    #[test]
    fn endpoints() {
        let graph = weighted();
        assert!(check_endpoints(&graph, &'A', &'D').is_ok());
        assert_eq!(
            check_endpoints(&graph, &'A', &'Z'),
            Err(SearchError::UnknownState("'Z'".to_string()))
        );
    }

    #[test]
    fn borrowed() {
        let grid = Grid::two_walls();
        let borrowed = &grid;
        assert_eq!(
            borrowed.neighbors(&(0, 0)),
            vec![(1, (0, 1))],
            "(1, 0) is a wall"
        );
        assert_eq!(
            grid.neighbors(&(2, 2)),
            vec![(1, (2, 3)), (1, (2, 1)), (1, (1, 2))]
        );
    }
}
