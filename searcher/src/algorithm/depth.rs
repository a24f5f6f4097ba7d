//! Depth-limited and iterative-deepening search.
//!
//! Both walk the space depth first with an explicit stack of frames,
//! one per state on the current branch, so the stack never grows past
//! the depth limit. States are marked explored on the way down and
//! unmarked on the way back up.

use std::vec;

use log::{debug, trace};

use super::explored::{BranchLocal, ExploredSet};
use super::{count_step, SearchQueue, Statistics, StepLimit};
use crate::errors::{depth_bound, Result};
use crate::path::Path;
use crate::traits::{check_endpoints, StateSpace};

/// One state on the branch being descended, with the successors
/// still left to try.
#[derive(Debug)]
pub struct Frame<S> {
    state: S,
    depth: usize,
    children: vec::IntoIter<S>,
}

impl<S> Frame<S> {
    pub fn new(state: S, depth: usize, children: Vec<S>) -> Self {
        Self {
            state,
            depth,
            children: children.into_iter(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Last in, first out, one frame per state on the current branch.
///
/// Depth is counted in edges from the start, so the start frame sits
/// at depth 0 and a frame at depth `limit` may still be checked
/// against the goal. Callers check [DepthStack::admits] before
/// pushing, so the stack never holds more than `limit + 1` frames.
#[derive(Debug)]
pub struct DepthStack<S> {
    frames: Vec<Frame<S>>,
    limit: usize,
}

impl<S> DepthStack<S> {
    pub fn new(limit: usize) -> Self {
        Self {
            frames: Vec::with_capacity(limit.saturating_add(1).min(1024)),
            limit,
        }
    }

    /// Can a state at this depth be entered?
    pub fn admits(&self, depth: usize) -> bool {
        depth <= self.limit
    }

    fn top_mut(&mut self) -> Option<&mut Frame<S>> {
        self.frames.last_mut()
    }

    /// States on the current branch, from the start.
    fn branch(&self) -> impl Iterator<Item = &S> {
        self.frames.iter().map(|f| &f.state)
    }
}

impl<S> SearchQueue for DepthStack<S> {
    type Candidate = Frame<S>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.frames.pop()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.frames.push(item);
    }

    fn len(&self) -> usize {
        self.frames.len()
    }
}

/// Depth-first search which gives up on any branch deeper than its
/// limit. The first path found is returned; no alternatives are
/// considered once the goal is reached.
#[derive(Debug)]
pub struct DepthLimitedSearch<'g, G, E>
where
    G: StateSpace,
    E: ExploredSet<State = G::State>,
{
    space: &'g G,
    start: Option<G::State>,
    goal: G::State,
    stack: DepthStack<G::State>,
    explored: E,
    counter: Option<StepLimit>,
    stats: Statistics,
}

impl<'g, G, E> DepthLimitedSearch<'g, G, E>
where
    G: StateSpace,
    E: ExploredSet<State = G::State>,
{
    fn new(space: &'g G, start: G::State, goal: G::State, limit: usize) -> Self {
        Self {
            space,
            start: Some(start),
            goal,
            stack: DepthStack::new(limit),
            explored: E::default(),
            counter: None,
            stats: Statistics::default(),
        }
    }

    pub(crate) fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.counter = limit.map(StepLimit::new);
        self
    }

    /// Enter `state` at `depth`, returning the path if it is the goal.
    fn descend(&mut self, state: G::State, depth: usize) -> Result<Option<Path<G::State>>> {
        if state == self.goal {
            let ancestors = self.stack.branch().cloned().collect();
            return Ok(Some(Path::from_ancestors(ancestors, state)));
        }

        count_step(&mut self.counter)?;
        let children: Vec<G::State> = self
            .space
            .neighbors(&state)
            .into_iter()
            .map(|(_, child)| child)
            .collect();
        trace!(
            "dls: entering {:?} at depth {} ({} children)",
            state,
            depth,
            children.len()
        );
        self.stats.expand(children.len());
        self.explored.mark(state.clone());
        self.stack.push(Frame::new(state, depth, children));
        self.stats.frontier(self.stack.len());
        Ok(None)
    }

    /// Run the search to completion.
    pub fn run(&mut self) -> Result<Option<Path<G::State>>> {
        let found = self.search()?;
        self.stats.report("dls", found.is_some());
        Ok(found)
    }

    fn search(&mut self) -> Result<Option<Path<G::State>>> {
        let start = match self.start.take() {
            Some(start) => start,
            None => return Ok(None),
        };
        if let Some(path) = self.descend(start, 0)? {
            return Ok(Some(path));
        }

        loop {
            let next = match self.stack.top_mut() {
                None => break,
                Some(frame) => frame.children.next().map(|child| (child, frame.depth + 1)),
            };

            match next {
                Some((child, depth)) => {
                    if self.explored.contains(&child) || !self.stack.admits(depth) {
                        continue;
                    }
                    if let Some(path) = self.descend(child, depth)? {
                        return Ok(Some(path));
                    }
                }
                None => {
                    if let Some(frame) = self.stack.pop() {
                        self.explored.unmark(&frame.state);
                    }
                }
            }
        }

        Ok(None)
    }
}

pub(crate) type BranchLocalSearch<'g, G> =
    DepthLimitedSearch<'g, G, BranchLocal<<G as StateSpace>::State>>;

pub(crate) fn build<G>(
    space: &G,
    start: G::State,
    goal: G::State,
    limit: i64,
) -> Result<BranchLocalSearch<'_, G>>
where
    G: StateSpace,
{
    let limit = depth_bound("depth limit", limit)?;
    check_endpoints(space, &start, &goal)?;
    Ok(DepthLimitedSearch::new(space, start, goal, limit))
}

/// Depth-limited search.
///
/// Explores depth first, but never beyond `limit` edges from the start.
/// A state is only excluded while it is on the current branch, so it
/// may be reached again through a different ancestor. Returns
/// `Ok(None)` when no path of at most `limit` edges reaches the goal.
pub fn dls<G>(
    space: &G,
    start: G::State,
    goal: G::State,
    limit: i64,
) -> Result<Option<Path<G::State>>>
where
    G: StateSpace,
{
    build(space, start, goal, limit)?.run()
}

/// Repeated depth-limited search with limits 0, 1, ..., `max_depth`.
#[derive(Debug)]
pub(crate) struct IterativeDeepening<'g, G>
where
    G: StateSpace,
{
    space: &'g G,
    start: G::State,
    goal: G::State,
    max_depth: usize,
    counter: Option<StepLimit>,
}

impl<'g, G> IterativeDeepening<'g, G>
where
    G: StateSpace,
{
    pub(crate) fn new(
        space: &'g G,
        start: G::State,
        goal: G::State,
        max_depth: i64,
    ) -> Result<Self> {
        let max_depth = depth_bound("max depth", max_depth)?;
        check_endpoints(space, &start, &goal)?;
        Ok(Self {
            space,
            start,
            goal,
            max_depth,
            counter: None,
        })
    }

    /// Limit the number of expansions across every pass.
    pub(crate) fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.counter = limit.map(StepLimit::new);
        self
    }

    pub(crate) fn run(mut self) -> Result<Option<Path<G::State>>> {
        for limit in 0..=self.max_depth {
            debug!("iddfs: searching to depth {}", limit);
            let mut pass: BranchLocalSearch<'_, G> =
                DepthLimitedSearch::new(self.space, self.start.clone(), self.goal.clone(), limit);
            pass.counter = self.counter.take();
            let found = pass.run()?;
            self.counter = pass.counter.take();

            if found.is_some() {
                return Ok(found);
            }
        }
        debug!("iddfs: nothing within depth {}", self.max_depth);
        Ok(None)
    }
}

/// Iterative-deepening depth-first search.
///
/// Runs [dls] with each limit from 0 up to `max_depth` inclusive and
/// returns the first path found, which therefore has the fewest edges
/// of any path within `max_depth`. Shallow states are expanded again
/// on every pass; memory stays proportional to the depth.
pub fn iddfs<G>(
    space: &G,
    start: G::State,
    goal: G::State,
    max_depth: i64,
) -> Result<Option<Path<G::State>>>
where
    G: StateSpace,
{
    IterativeDeepening::new(space, start, goal, max_depth)?.run()
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;
    use crate::algorithm::basic::bfs;
    use crate::algorithm::explored::Persistent;
    use crate::errors::SearchError;
    use crate::traits::helpers::*;

    fn two_walls_path() -> Vec<(usize, usize)> {
        vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 4),
        ]
    }

    #[test]
    fn stack() {
        let mut stack = DepthStack::new(1);
        assert!(stack.admits(0));
        assert!(stack.admits(1));
        assert!(!stack.admits(2));

        stack.push(Frame::new('A', 0, vec!['B']));
        stack.push(Frame::new('B', 1, vec!['C']));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.branch().collect::<Vec<_>>(), vec![&'A', &'B']);
        assert_eq!(stack.pop().map(|f| *f.state()), Some('B'));
        assert_eq!(stack.pop().map(|f| *f.state()), Some('A'));
        assert!(stack.is_empty());
    }

    #[test]
    fn too_shallow() {
        let grid = Grid::two_walls();
        assert_eq!(dls(&grid, (0, 0), (4, 4), 6), Ok(None));
        assert_eq!(dls(&grid, (0, 0), (4, 4), 7), Ok(None));
    }

    #[test]
    fn deep_enough() {
        let grid = Grid::two_walls();
        let path = dls(&grid, (0, 0), (4, 4), 8).unwrap().unwrap();
        assert_eq!(path.into_vec(), two_walls_path());
    }

    #[test]
    fn limit_is_inclusive() {
        let graph = Adjacency::default().edge('A', 'B', 1).edge('B', 'C', 1);
        assert_eq!(dls(&graph, 'A', 'C', 1), Ok(None));
        let path = dls(&graph, 'A', 'C', 2).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn longer_limit_may_return_longer_path() {
        // The first branch reaches D in three edges; the direct edge is
        // only tried after it.
        let graph = Adjacency::default()
            .edge('A', 'B', 1)
            .edge('A', 'D', 1)
            .edge('B', 'C', 1)
            .edge('C', 'D', 1);
        let path = dls(&graph, 'A', 'D', 3).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec!['A', 'B', 'C', 'D']);
        let path = iddfs(&graph, 'A', 'D', 3).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec!['A', 'D']);
    }

    #[test]
    fn revisits_through_other_branch() {
        // X is first reached too deep to continue to G, then again
        // directly from A.
        let graph = Adjacency::default()
            .edge('A', 'B', 1)
            .edge('A', 'X', 1)
            .edge('B', 'X', 1)
            .edge('X', 'G', 1);

        let path = dls(&graph, 'A', 'G', 2).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec!['A', 'X', 'G']);

        let mut persistent: DepthLimitedSearch<'_, _, Persistent<char>> =
            DepthLimitedSearch::new(&graph, 'A', 'G', 2);
        assert_eq!(persistent.run(), Ok(None));
    }

    #[test]
    fn cycles() {
        let graph = Adjacency::default()
            .edge('A', 'B', 1)
            .edge('B', 'A', 1)
            .edge('B', 'C', 1)
            .edge('C', 'A', 1);
        assert_eq!(
            dls(&graph, 'A', 'Z', 50),
            Err(SearchError::UnknownState("'Z'".into()))
        );
        let graph = graph.edge('Z', 'Z', 1);
        assert_eq!(dls(&graph, 'A', 'Z', 50), Ok(None));
        assert_eq!(iddfs(&graph, 'A', 'Z', 10), Ok(None));
    }

    #[test]
    fn iddfs_matches_bfs() {
        let grid = Grid::two_walls();
        let path = iddfs(&grid, (0, 0), (4, 4), 20).unwrap().unwrap();
        assert_eq!(path.clone().into_vec(), two_walls_path());
        assert_eq!(Some(path), bfs(&grid, (0, 0), (4, 4)).unwrap());
    }

    #[test]
    fn iddfs_minimum_depth() {
        let grid = Grid::two_walls();
        for max_depth in 0..8 {
            assert_eq!(iddfs(&grid, (0, 0), (4, 4), max_depth), Ok(None));
        }
        for max_depth in 8..12 {
            let path = iddfs(&grid, (0, 0), (4, 4), max_depth).unwrap().unwrap();
            assert_eq!(path.distance(), 8);
        }
    }

    #[test]
    fn start_is_goal() {
        let graph = weighted();
        let path = dls(&graph, 'A', 'A', 0).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec!['A']);
        let path = iddfs(&graph, 'A', 'A', 0).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec!['A']);
    }

    #[test]
    fn negative_bounds() {
        let graph = weighted();
        assert_eq!(
            dls(&graph, 'A', 'D', -1),
            Err(SearchError::InvalidBound {
                name: "depth limit",
                value: -1
            })
        );
        assert_eq!(
            iddfs(&graph, 'A', 'D', -4),
            Err(SearchError::InvalidBound {
                name: "max depth",
                value: -4
            })
        );
    }

    #[test]
    fn step_limit_spans_passes() {
        let grid = Grid::two_walls();
        // Passes 0..=7 alone expand well over 20 states.
        let result = IterativeDeepening::new(&grid, (0, 0), (4, 4), 20)
            .unwrap()
            .with_limit(Some(20))
            .run();
        assert_eq!(result, Err(SearchError::StepLimitExhausted(20)));
    }
}
