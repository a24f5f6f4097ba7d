pub use bfs::{bfs, BreadthQueue};
pub use dfs::{dfs, DepthQueue};

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::explored::Persistent;
    use crate::algorithm::{SearchAlgorithm, SearchQueue};
    use crate::errors::Result;
    use crate::path::Path;
    use crate::traits::StateSpace;

    /// First in, first out.
    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub(crate) type BreadthFirstSearcher<'g, G> = SearchAlgorithm<
        'g,
        G,
        BreadthQueue<crate::algorithm::Candidate<<G as StateSpace>::State>>,
        Persistent<<G as StateSpace>::State>,
    >;

    pub(crate) fn build<G>(
        space: &G,
        start: G::State,
        goal: G::State,
    ) -> Result<BreadthFirstSearcher<'_, G>>
    where
        G: StateSpace,
    {
        SearchAlgorithm::new("bfs", space, start, goal)
    }

    /// Breadth-first search, where ties are broken by the order
    /// in which [StateSpace::neighbors] lists successors.
    ///
    /// On a space with unit step costs the returned path has the
    /// fewest possible edges.
    pub fn bfs<G>(space: &G, start: G::State, goal: G::State) -> Result<Option<Path<G::State>>>
    where
        G: StateSpace,
    {
        build(space, start, goal)?.run()
    }
}

mod dfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::explored::Persistent;
    use crate::algorithm::{SearchAlgorithm, SearchQueue};
    use crate::errors::Result;
    use crate::path::Path;
    use crate::traits::StateSpace;

    /// Last in, first out.
    #[derive(Debug)]
    pub struct DepthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    impl<S> SearchQueue for DepthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_front(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub(crate) type DepthFirstSearcher<'g, G> = SearchAlgorithm<
        'g,
        G,
        DepthQueue<crate::algorithm::Candidate<<G as StateSpace>::State>>,
        Persistent<<G as StateSpace>::State>,
    >;

    pub(crate) fn build<G>(
        space: &G,
        start: G::State,
        goal: G::State,
    ) -> Result<DepthFirstSearcher<'_, G>>
    where
        G: StateSpace,
    {
        SearchAlgorithm::new("dfs", space, start, goal)
    }

    /// Depth-first search. The last successor listed by
    /// [StateSpace::neighbors] is explored first.
    ///
    /// Finds some path to the goal when one exists, but makes no
    /// promise that it is a short one.
    pub fn dfs<G>(space: &G, start: G::State, goal: G::State) -> Result<Option<Path<G::State>>>
    where
        G: StateSpace,
    {
        build(space, start, goal)?.run()
    }
}

pub(crate) use bfs::build as build_bfs;
pub(crate) use dfs::build as build_dfs;
