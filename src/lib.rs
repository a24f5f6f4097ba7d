//! Find routes through grid mazes and weighted graphs.
//!
//! A [Problem] bundles a state space with the start and goal of the
//! route to find. Solving it with a set of [SearchOptions] runs the
//! chosen strategy and returns a [Report] of what was found.
#![deny(clippy::all)]

use std::fmt;

use itertools::Itertools;
use log::debug;

pub use geometry::coord2d::map::{Maze, MazeError, WALL};
pub use geometry::coord2d::{Direction, ParsePointError, Point};
pub use geometry::graph::{GraphError, WeightedGraph};
pub use searcher::{
    bfs, dfs, dls, iddfs, search, ucs, Path, SearchError, SearchOptions, StateSpace, Strategy,
};

pub type Error = anyhow::Error;

/// A state space, and the two ends of the route wanted through it.
#[derive(Debug, Clone)]
pub struct Problem<G>
where
    G: StateSpace,
{
    space: G,
    start: G::State,
    goal: G::State,
}

impl<G> Problem<G>
where
    G: StateSpace,
{
    pub fn new(space: G, start: G::State, goal: G::State) -> Self {
        Self { space, start, goal }
    }

    pub fn space(&self) -> &G {
        &self.space
    }

    pub fn start(&self) -> &G::State {
        &self.start
    }

    pub fn goal(&self) -> &G::State {
        &self.goal
    }

    /// Search for a route with the strategy and bounds in `options`.
    ///
    /// Failing to reach the goal is reported, not returned as an error.
    pub fn solve(&self, options: &SearchOptions) -> Result<Report<G::State, G::Cost>, Error> {
        let path = search(&self.space, self.start.clone(), self.goal.clone(), options)?;
        let cost = path.as_ref().and_then(|p| p.cost_in(&self.space));
        debug!(
            "{}: {:?} -> {:?} in {:?} edges",
            options.strategy,
            self.start,
            self.goal,
            path.as_ref().map(|p| p.distance())
        );
        Ok(Report {
            strategy: options.strategy,
            path,
            cost,
        })
    }

    /// Solve with every strategy in turn, using `depth` as both the
    /// depth limit and the deepest iterative deepening pass.
    pub fn compare(&self, depth: i64) -> Result<Vec<Report<G::State, G::Cost>>, Error> {
        Strategy::all()
            .map(|strategy| {
                let options = SearchOptions::new(strategy)
                    .with_depth_limit(depth)
                    .with_max_depth(depth);
                self.solve(&options)
            })
            .collect()
    }
}

impl Problem<Maze> {
    /// Parse a maze along with its endpoints, written as `row,col`.
    pub fn maze(map: &str, start: &str, goal: &str) -> Result<Self, Error> {
        let space: Maze = map.parse()?;
        Ok(Self::new(space, start.parse()?, goal.parse()?))
    }
}

impl Problem<WeightedGraph> {
    /// Parse a graph in `FROM TO COST` form along with the labels of
    /// its endpoints.
    pub fn graph(edges: &str, start: &str, goal: &str) -> Result<Self, Error> {
        let space: WeightedGraph = edges.parse()?;
        Ok(Self::new(space, start.trim().to_string(), goal.trim().to_string()))
    }
}

/// Outcome of solving a [Problem] with one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<S, C> {
    pub strategy: Strategy,
    pub path: Option<Path<S>>,

    /// Total cost of the path, summed over the edges of the space.
    pub cost: Option<C>,
}

impl<S, C> Report<S, C> {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges in the path found.
    pub fn edges(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.distance())
    }
}

impl<S, C> fmt::Display for Report<S, C>
where
    S: fmt::Display,
    C: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.path, &self.cost) {
            (Some(path), Some(cost)) => write!(
                f,
                "{}: {} edges, cost {}: {}",
                self.strategy,
                path.distance(),
                cost,
                path.iter().join(" -> ")
            ),
            (Some(path), None) => write!(
                f,
                "{}: {} edges: {}",
                self.strategy,
                path.distance(),
                path.iter().join(" -> ")
            ),
            (None, _) => write!(f, "{}: no path", self.strategy),
        }
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    fn two_walls() -> Problem<Maze> {
        Problem::maze(
            include_str!("../geometry/fixtures/two_walls.txt"),
            "0,0",
            "4,4",
        )
        .unwrap()
    }

    fn weighted() -> Problem<WeightedGraph> {
        Problem::graph(include_str!("../geometry/fixtures/weighted.txt"), "A", "D").unwrap()
    }

    #[test]
    fn maze_scenarios() {
        let problem = two_walls();

        let shortest = problem.solve(&SearchOptions::default()).unwrap();
        assert_eq!(shortest.path.as_ref().map(|p| p.len()), Some(9));
        assert_eq!(shortest.edges(), Some(8));
        assert_eq!(shortest.cost, Some(8));

        let depth_first = problem
            .solve(&SearchOptions::new(Strategy::DepthFirst))
            .unwrap();
        let path = depth_first.path.unwrap();
        assert!(path.is_valid_in(problem.space()));
        assert!(path.len() <= problem.space().open_cells().count());

        let limited = SearchOptions::new(Strategy::DepthLimited);
        assert!(!problem.solve(&limited.with_depth_limit(6)).unwrap().found());
        let report = problem.solve(&limited.with_depth_limit(8)).unwrap();
        assert_eq!(report.path.map(|p| p.len()), Some(9));

        let deepening = SearchOptions::new(Strategy::IterativeDeepening).with_max_depth(20);
        assert_eq!(problem.solve(&deepening).unwrap().path, shortest.path);
    }

    #[test]
    fn graph_scenario() {
        let problem = weighted();
        let report = problem
            .solve(&SearchOptions::new(Strategy::UniformCost))
            .unwrap();
        assert_eq!(report.cost, Some(3));
        assert_eq!(
            report.path.as_ref().map(|p| p.to_vec()),
            Some(vec!["A".to_string(), "B".to_string(), "D".to_string()])
        );
        assert_eq!(report.to_string(), "ucs: 2 edges, cost 3: A -> B -> D");
    }

    #[test]
    fn compare() {
        let reports = weighted().compare(3).unwrap();
        let costs: Vec<_> = reports.iter().map(|r| (r.strategy, r.cost)).collect();
        assert_eq!(
            costs,
            vec![
                (Strategy::BreadthFirst, Some(3)),
                (Strategy::DepthFirst, Some(7)),
                (Strategy::DepthLimited, Some(3)),
                (Strategy::IterativeDeepening, Some(3)),
                (Strategy::UniformCost, Some(3)),
            ]
        );

        let reports = two_walls().compare(6).unwrap();
        for report in reports {
            match report.strategy {
                Strategy::DepthLimited | Strategy::IterativeDeepening => {
                    assert_eq!(report.to_string(), format!("{}: no path", report.strategy))
                }
                _ => assert!(report.found(), "{}", report.strategy),
            }
        }
    }

    #[test]
    fn display() {
        let problem = two_walls();
        let report = problem.solve(&SearchOptions::default()).unwrap();
        assert_eq!(
            report.to_string(),
            "bfs: 8 edges, cost 8: 0,0 -> 0,1 -> 0,2 -> 1,2 -> 2,2 -> 2,3 -> 2,4 -> 3,4 -> 4,4"
        );
    }

    #[test]
    fn errors() {
        let error = Problem::maze("..x", "0,0", "0,1").unwrap_err();
        assert_eq!(
            error.downcast_ref::<MazeError>(),
            Some(&MazeError::InvalidCell {
                row: 0,
                col: 2,
                found: "x".to_string()
            })
        );

        assert!(Problem::maze("...", "zero,0", "0,1")
            .unwrap_err()
            .downcast_ref::<ParsePointError>()
            .is_some());

        assert!(Problem::graph("A B -4", "A", "B")
            .unwrap_err()
            .downcast_ref::<GraphError>()
            .is_some());

        let problem = Problem::graph("A B 1", "A", "Q").unwrap();
        let error = problem.solve(&SearchOptions::default()).unwrap_err();
        assert_eq!(
            error.downcast_ref::<SearchError>(),
            Some(&SearchError::UnknownState(format!("{:?}", "Q")))
        );

        let error = two_walls()
            .solve(&SearchOptions::new(Strategy::DepthLimited).with_depth_limit(-1))
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SearchError>(),
            Some(SearchError::InvalidBound { value: -1, .. })
        ));
    }

    #[test]
    fn costs_too_large_to_sum() {
        let edges = format!("A B {}\nB C {}\nC D {}", i64::MAX, i64::MAX, i64::MAX);
        let problem = Problem::graph(&edges, "A", "D").unwrap();

        let report = problem.solve(&SearchOptions::default()).unwrap();
        assert_eq!(report.edges(), Some(3));
        assert_eq!(report.cost, None);
        assert_eq!(report.to_string(), "bfs: 3 edges: A -> B -> C -> D");

        let error = problem
            .solve(&SearchOptions::new(Strategy::UniformCost))
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SearchError>(),
            Some(SearchError::CostOverflow(_))
        ));
    }

    #[test]
    fn start_is_goal() {
        let problem = Problem::maze(".", "0,0", "0,0").unwrap();
        for report in problem.compare(0).unwrap() {
            assert_eq!(report.to_string(), format!("{}: 0 edges, cost 0: 0,0", report.strategy));
        }
    }
}
