//! Uniform-cost search (Dijkstra's algorithm)

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BTreeMap, BinaryHeap, HashMap};
use std::default::Default;
use std::hash::Hash;

use log::trace;
use num::{CheckedAdd, Zero};

use super::explored::{ExploredSet, Persistent};
use super::{count_step, SearchQueue, Statistics, StepLimit};
use crate::errors::{Result, SearchError};
use crate::path::{ParentLinks, Path};
use crate::traits::{check_endpoints, StateSpace};

/// Wrapper for frontier entries which sorts appropriately
/// for a min-heap, oldest entry first among equal costs.
#[derive(Debug)]
struct CostElement<C, T> {
    cost: C,
    sequence: usize,
    item: T,
}

impl<C: Ord, T> PartialEq for CostElement<C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.sequence.eq(&other.sequence)
    }
}

impl<C: Ord, T> Eq for CostElement<C, T> {}

impl<C: Ord, T> Ord for CostElement<C, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<C: Ord, T> PartialOrd for CostElement<C, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always yields the cheapest entry,
/// breaking ties by insertion order.
#[derive(Debug)]
pub struct CostQueue<C, T> {
    queue: BinaryHeap<CostElement<C, T>>,
    sequence: usize,
}

impl<C: Ord, T> Default for CostQueue<C, T> {
    fn default() -> Self {
        CostQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<C: Ord, T> SearchQueue for CostQueue<C, T> {
    type Candidate = (C, T);

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|e| (e.cost, e.item))
    }

    fn push(&mut self, (cost, item): Self::Candidate) {
        self.queue.push(CostElement {
            cost,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A node generated during the search. Nodes live in an arena and
/// point at their parent by index.
#[derive(Debug)]
struct SearchNode<S, C> {
    state: S,
    parent: Option<usize>,
    cost: C,
}

#[derive(Debug)]
struct Nodes<S, C>(Vec<SearchNode<S, C>>);

impl<S: Clone, C> ParentLinks for Nodes<S, C> {
    type State = S;

    fn state(&self, node: usize) -> &S {
        &self.0[node].state
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.0[node].parent
    }
}

impl<S, C> Nodes<S, C> {
    fn insert(&mut self, state: S, parent: Option<usize>, cost: C) -> usize {
        self.0.push(SearchNode {
            state,
            parent,
            cost,
        });
        self.0.len() - 1
    }
}

/// Costs of the entries currently in the frontier, by state.
///
/// A child is only pushed when no live entry for its state is at
/// least as cheap. Keeping the costs per state makes that a lookup
/// of the cheapest live entry instead of a scan of the frontier.
#[derive(Debug)]
struct FrontierCosts<S, C>
where
    S: Eq + Hash,
{
    live: HashMap<S, BTreeMap<C, usize>>,
}

impl<S, C> Default for FrontierCosts<S, C>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        FrontierCosts {
            live: HashMap::new(),
        }
    }
}

impl<S, C> FrontierCosts<S, C>
where
    S: Eq + Hash,
    C: Ord + Copy,
{
    /// Is there no live entry for `state` costing `cost` or less?
    fn admits(&self, state: &S, cost: C) -> bool {
        self.live
            .get(state)
            .and_then(|costs| costs.keys().next())
            .map_or(true, |cheapest| *cheapest > cost)
    }

    fn insert(&mut self, state: S, cost: C) {
        *self
            .live
            .entry(state)
            .or_insert_with(BTreeMap::new)
            .entry(cost)
            .or_insert(0) += 1;
    }

    fn remove(&mut self, state: &S, cost: C) {
        if let Some(costs) = self.live.get_mut(state) {
            if let Some(count) = costs.get_mut(&cost) {
                *count -= 1;
                if *count == 0 {
                    costs.remove(&cost);
                }
            }
            if costs.is_empty() {
                self.live.remove(state);
            }
        }
    }
}

/// Search algorithm which always expands the cheapest path found so
/// far. Requires non-negative step costs to be optimal.
#[derive(Debug)]
pub struct UniformCostSearch<'g, G>
where
    G: StateSpace,
{
    space: &'g G,
    goal: G::State,
    nodes: Nodes<G::State, G::Cost>,
    queue: CostQueue<G::Cost, usize>,
    costs: FrontierCosts<G::State, G::Cost>,
    explored: Persistent<G::State>,
    counter: Option<StepLimit>,
    stats: Statistics,
}

impl<'g, G> UniformCostSearch<'g, G>
where
    G: StateSpace,
{
    fn new(space: &'g G, start: G::State, goal: G::State) -> Self {
        let mut search = Self {
            space,
            goal,
            nodes: Nodes(Vec::new()),
            queue: CostQueue::default(),
            costs: FrontierCosts::default(),
            explored: Persistent::default(),
            counter: None,
            stats: Statistics::default(),
        };
        search.enqueue(start, None, G::Cost::zero());
        search
    }

    pub(crate) fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.counter = limit.map(StepLimit::new);
        self
    }

    fn enqueue(&mut self, state: G::State, parent: Option<usize>, cost: G::Cost) {
        self.costs.insert(state.clone(), cost);
        let node = self.nodes.insert(state, parent, cost);
        self.queue.push((cost, node));
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<Option<Path<G::State>>> {
        while let Some((cost, node)) = self.queue.pop() {
            let state = self.nodes.state(node).clone();
            self.costs.remove(&state, cost);

            if state == self.goal {
                self.stats.report("ucs", true);
                return Ok(Some(Path::reconstruct(&self.nodes, node)));
            }

            // A cheaper entry for this state was already expanded.
            if self.explored.contains(&state) {
                continue;
            }

            count_step(&mut self.counter)?;
            let children = self.space.neighbors(&state);
            trace!(
                "ucs: expanding {:?} at cost {:?} ({} children)",
                state,
                self.nodes.0[node].cost,
                children.len()
            );
            self.stats.expand(children.len());
            self.explored.mark(state);

            for (step, child) in children {
                if self.explored.contains(&child) {
                    continue;
                }
                let child_cost = cost
                    .checked_add(&step)
                    .ok_or_else(|| SearchError::CostOverflow(format!("{:?}", child)))?;
                if self.costs.admits(&child, child_cost) {
                    self.enqueue(child, Some(node), child_cost);
                }
            }
            self.stats.frontier(self.queue.len());
        }

        self.stats.report("ucs", false);
        Ok(None)
    }
}

pub(crate) fn build<G>(
    space: &G,
    start: G::State,
    goal: G::State,
) -> Result<UniformCostSearch<'_, G>>
where
    G: StateSpace,
{
    check_endpoints(space, &start, &goal)?;
    Ok(UniformCostSearch::new(space, start, goal))
}

/// Perform a uniform-cost search.
///
/// Uniform-cost search behaves like a breadth first search, but always
/// expands the cheapest path found so far, so it returns a path of
/// minimum total cost when step costs are non-negative. Among paths of
/// equal cost, the one whose nodes were generated first wins.
pub fn ucs<G>(space: &G, start: G::State, goal: G::State) -> Result<Option<Path<G::State>>>
where
    G: StateSpace,
{
    build(space, start, goal)?.run()
}
