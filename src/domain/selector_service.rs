// Domain service interface for choosing items out of a parsed problem

use super::models::{Problem, Selection};

/// Strategy that picks the package for one problem.
///
/// Implementations are pure: the same problem always yields the same
/// selection, and an empty feasible set is [`Selection::Nothing`] rather than
/// an error.
pub trait Selector: Send + Sync {
    /// Choose the items to pack
    fn select(&self, problem: &Problem) -> Selection;

    /// Get the name of this selection strategy
    fn name(&self) -> &str;
}
