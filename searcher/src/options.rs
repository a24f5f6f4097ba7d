//! Strategy selection and search configuration.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::{basic, depth, uniform};
use crate::errors::{Result, SearchError};
use crate::path::Path;
use crate::traits::StateSpace;

/// The traversal strategies this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    DepthLimited,
    IterativeDeepening,
    UniformCost,
}

const STRATEGIES: [Strategy; 5] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::DepthLimited,
    Strategy::IterativeDeepening,
    Strategy::UniformCost,
];

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }

    /// Short name, as accepted by [FromStr].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::DepthLimited => "dls",
            Strategy::IterativeDeepening => "iddfs",
            Strategy::UniformCost => "ucs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s
            .trim()
            .to_ascii_lowercase()
            .replace(|c: char| c == '_' || c == ' ', "-");
        match name.as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "dls" | "depth-limited" => Ok(Strategy::DepthLimited),
            "iddfs" | "ids" | "iterative-deepening" => Ok(Strategy::IterativeDeepening),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Strategy::UniformCost),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Everything needed to pick and bound a search, besides the space
/// and its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub strategy: Strategy,

    /// Depth limit for depth-limited search.
    pub depth_limit: Option<i64>,

    /// Deepest limit tried by iterative deepening.
    pub max_depth: Option<i64>,

    /// Abort after expanding this many states.
    pub step_limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions::new(Strategy::BreadthFirst)
    }
}

impl SearchOptions {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            depth_limit: None,
            max_depth: None,
            step_limit: None,
        }
    }

    pub fn with_depth_limit(mut self, limit: i64) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    pub fn with_max_depth(mut self, max_depth: i64) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    fn bound(&self, value: Option<i64>, name: &'static str) -> Result<i64> {
        value.ok_or(SearchError::MissingBound {
            strategy: self.strategy.name(),
            name,
        })
    }
}

/// Search `space` from `start` to `goal` with the strategy and bounds
/// given in `options`.
pub fn search<G>(
    space: &G,
    start: G::State,
    goal: G::State,
    options: &SearchOptions,
) -> Result<Option<Path<G::State>>>
where
    G: StateSpace,
{
    let steps = options.step_limit;
    match options.strategy {
        Strategy::BreadthFirst => basic::build_bfs(space, start, goal)?.with_limit(steps).run(),
        Strategy::DepthFirst => basic::build_dfs(space, start, goal)?.with_limit(steps).run(),
        Strategy::DepthLimited => {
            let limit = options.bound(options.depth_limit, "depth limit")?;
            depth::build(space, start, goal, limit)?
                .with_limit(steps)
                .run()
        }
        Strategy::IterativeDeepening => {
            let max_depth = options.bound(options.max_depth, "max depth")?;
            depth::IterativeDeepening::new(space, start, goal, max_depth)?
                .with_limit(steps)
                .run()
        }
        Strategy::UniformCost => uniform::build(space, start, goal)?.with_limit(steps).run(),
    }
}
