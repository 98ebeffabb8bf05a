//! Computed paths and parent-chain reconstruction.

use crate::errors::SearchError;
use crate::types::{MovieId, PersonId};

use super::frontier::ExploredSet;
use super::node::SearchNode;

/// One step of a computed path: `person` reached through `movie`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

/// Ordered steps from just after the source to the target, inclusive.
/// The number of steps is the degrees of separation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostarPath {
    steps: Vec<PathStep>,
}

impl CostarPath {
    /// The zero-degree path (`source == target`).
    pub fn empty() -> Self {
        Self::default()
    }

    pub(super) fn from_steps(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Number of movie-hops on this path.
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a CostarPath {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Walk parent links from `goal` back to `source`, reversing into forward
/// order.
///
/// Parent states are resolved through the explored set. A node whose parent
/// was never recorded there means the explored set was not populated
/// correctly; that is a defect ([`SearchError::BrokenParentChain`]), not a
/// normal outcome.
pub fn reconstruct(
    source: PersonId,
    goal: SearchNode,
    explored: &ExploredSet,
) -> Result<CostarPath, SearchError> {
    let mut steps = Vec::new();
    let mut current = goal;

    loop {
        let (parent, action) = match (current.parent, current.action) {
            (Some(parent), Some(action)) => (parent, action),
            // A root node here means the chain never reached the source.
            _ => return Err(SearchError::BrokenParentChain { state: current.state }),
        };

        steps.push(PathStep {
            movie: action,
            person: current.state,
        });

        if parent == source {
            break;
        }

        current = *explored
            .get(parent)
            .ok_or(SearchError::BrokenParentChain { state: parent })?;
    }

    steps.reverse();
    Ok(CostarPath::from_steps(steps))
}

#[cfg(test)]
mod tests {
    use lasso::ThreadedRodeo;

    use crate::types::MovieId;

    use super::*;

    struct Fixture {
        people: Vec<PersonId>,
        movies: Vec<MovieId>,
    }

    fn fixture() -> Fixture {
        let rodeo = ThreadedRodeo::default();
        let people = (0..4)
            .map(|i| PersonId::new(rodeo.get_or_intern(format!("p{i}"))))
            .collect();
        let movies = (0..4)
            .map(|i| MovieId::new(rodeo.get_or_intern(format!("m{i}"))))
            .collect();
        Fixture { people, movies }
    }

    #[test]
    fn walks_parents_back_to_the_source() {
        let f = fixture();
        let (a, b, c) = (f.people[0], f.people[1], f.people[2]);

        let mut explored = ExploredSet::new();
        explored.add(SearchNode::root(a));
        explored.add(SearchNode::step(b, a, f.movies[0]));

        let goal = SearchNode::step(c, b, f.movies[1]);
        let path = reconstruct(a, goal, &explored).unwrap();

        assert_eq!(path.degrees(), 2);
        assert_eq!(path.steps()[0].person, b);
        assert_eq!(path.steps()[0].movie, f.movies[0]);
        assert_eq!(path.steps()[1].person, c);
        assert_eq!(path.steps()[1].movie, f.movies[1]);
    }

    #[test]
    fn single_step_path_needs_no_explored_lookups() {
        let f = fixture();
        let goal = SearchNode::step(f.people[1], f.people[0], f.movies[0]);
        let path = reconstruct(f.people[0], goal, &ExploredSet::new()).unwrap();
        assert_eq!(path.degrees(), 1);
    }

    #[test]
    fn missing_parent_record_is_a_broken_chain() {
        let f = fixture();
        let (a, b, c) = (f.people[0], f.people[1], f.people[2]);

        // b was never explored, so the chain from c cannot reach a.
        let goal = SearchNode::step(c, b, f.movies[1]);
        let err = reconstruct(a, goal, &ExploredSet::new()).unwrap_err();
        assert!(matches!(err, SearchError::BrokenParentChain { state } if state == b));
    }

    #[test]
    fn root_goal_without_source_parent_is_a_broken_chain() {
        let f = fixture();
        let err = reconstruct(f.people[0], SearchNode::root(f.people[1]), &ExploredSet::new())
            .unwrap_err();
        assert!(matches!(err, SearchError::BrokenParentChain { .. }));
    }
}
