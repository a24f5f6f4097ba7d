//! Provides the building blocks for search algorithms

use std::default::Default;

use log::{debug, trace};

use self::explored::ExploredSet;
use crate::errors::{Result, SearchError};
use crate::path::Path;
use crate::traits::{check_endpoints, StateSpace};

pub(crate) mod basic;
pub(crate) mod depth;
pub mod explored;
pub(crate) mod uniform;

pub use basic::{BreadthQueue, DepthQueue};
pub use depth::{DepthStack, Frame};
pub use uniform::CostQueue;

/// Trait used to implement frontiers of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub(crate) struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    /// Count one expansion, failing once the limit is passed.
    pub(crate) fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

pub(crate) fn count_step(counter: &mut Option<StepLimit>) -> Result<()> {
    counter.as_mut().map(|c| c.increment()).unwrap_or(Ok(()))
}

/// Counters kept over one search run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Statistics {
    pub(crate) expanded: usize,
    pub(crate) generated: usize,
    pub(crate) max_frontier: usize,
}

impl Statistics {
    pub(crate) fn expand(&mut self, children: usize) {
        self.expanded += 1;
        self.generated += children;
    }

    pub(crate) fn frontier(&mut self, len: usize) {
        if len > self.max_frontier {
            self.max_frontier = len;
        }
    }

    pub(crate) fn report(&self, name: &str, found: bool) {
        debug!(
            "{}: {} after expanding {} states (generated {}, frontier peak {})",
            name,
            if found { "found goal" } else { "exhausted" },
            self.expanded,
            self.generated,
            self.max_frontier
        );
    }
}

/// Frontier entry for searches which carry their path along.
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    state: S,
    ancestors: Vec<S>,
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic explored set (E) to provide
/// a single foundation for breadth-first and depth-first search.
/// Each frontier entry records the path taken to reach it, so no
/// reconstruction is needed at the end.
#[derive(Debug)]
pub struct SearchAlgorithm<'g, G, Q, E>
where
    G: StateSpace,
    Q: SearchQueue<Candidate = Candidate<G::State>> + Default,
    E: ExploredSet<State = G::State> + Default,
{
    name: &'static str,
    space: &'g G,
    goal: G::State,
    queue: Q,
    explored: E,
    counter: Option<StepLimit>,
    stats: Statistics,
}

impl<'g, G, Q, E> SearchAlgorithm<'g, G, Q, E>
where
    G: StateSpace,
    Q: SearchQueue<Candidate = Candidate<G::State>> + Default,
    E: ExploredSet<State = G::State> + Default,
{
    pub(crate) fn new(
        name: &'static str,
        space: &'g G,
        start: G::State,
        goal: G::State,
    ) -> Result<Self> {
        check_endpoints(space, &start, &goal)?;
        let mut sr = SearchAlgorithm {
            name,
            space,
            goal,
            queue: Q::default(),
            explored: E::default(),
            counter: None,
            stats: Statistics::default(),
        };
        sr.queue.push(Candidate {
            state: start,
            ancestors: Vec::new(),
        });
        Ok(sr)
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When more than this many states have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    pub(crate) fn with_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.set_limit(limit);
        }
        self
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<Option<Path<G::State>>> {
        while let Some(Candidate { state, ancestors }) = self.queue.pop() {
            // The goal wins even if another branch already expanded it.
            if state == self.goal {
                self.stats.report(self.name, true);
                return Ok(Some(Path::from_ancestors(ancestors, state)));
            }

            // Duplicates are left in the frontier and dropped here.
            if self.explored.contains(&state) {
                continue;
            }

            count_step(&mut self.counter)?;
            let children = self.space.neighbors(&state);
            trace!(
                "{}: expanding {:?} ({} children, depth {})",
                self.name,
                state,
                children.len(),
                ancestors.len()
            );
            self.stats.expand(children.len());
            self.explored.mark(state.clone());

            let mut path = ancestors;
            path.push(state);
            for (_, child) in children {
                self.queue.push(Candidate {
                    state: child,
                    ancestors: path.clone(),
                });
            }
            self.stats.frontier(self.queue.len());
        }

        self.stats.report(self.name, false);
        Ok(None)
    }
}
