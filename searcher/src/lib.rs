//! Generalized uninformed and cost-ordered search algorithms,
//! especially useful for maze and graph traversal.
//!
//! To use these search algorithms, implement the trait [StateSpace]
//! which enumerates the successors of a state. Then call one of
//! [bfs], [dfs], [dls], [iddfs] or [ucs], or pick a strategy at
//! runtime with [search] and [SearchOptions].
//!
//! Every search returns `Ok(Some(path))` when it reaches the goal and
//! `Ok(None)` when it does not; errors are reserved for searches which
//! could not be run as asked.
#![deny(clippy::all)]

pub mod algorithm;
mod errors;
mod options;
mod path;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use options::{search, SearchOptions, Strategy};
pub use path::Path;
pub use traits::StateSpace;

pub use algorithm::basic::{bfs, dfs};
pub use algorithm::depth::{dls, iddfs};
pub use algorithm::uniform::ucs;
