//! The breadth-first path finder.

use crate::errors::SearchError;
use crate::graph::GraphStore;
use crate::types::{FxHashMap, PersonId};

use super::frontier::{ExploredSet, Frontier};
use super::node::SearchNode;
use super::path::{reconstruct, CostarPath};

/// Search parameters.
///
/// `max_depth` is a hardening budget: it bounds how many movie-hops the
/// search will expand, without changing results on graphs where the answer
/// lies within the budget.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum depth to expand (`None` = unbounded).
    pub max_depth: Option<u32>,
}

impl SearchOptions {
    /// Builder: set max depth.
    #[must_use]
    pub fn max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Breadth-first shortest-path search between two people.
///
/// Level-order expansion guarantees the first path found is a shortest one.
/// States are marked explored when dequeued; candidates are deduplicated
/// against both the frontier and the explored set before enqueueing.
pub struct PathFinder<'a> {
    store: &'a GraphStore,
    options: SearchOptions,
}

impl<'a> PathFinder<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self {
            store,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(store: &'a GraphStore, options: SearchOptions) -> Self {
        Self { store, options }
    }

    /// Shortest co-star path from `source` to `target`.
    ///
    /// `Ok(Some(path))` with an empty path means zero degrees
    /// (`source == target`); `Ok(None)` means the two are not connected.
    /// Both identifiers must come from this store — handing over an
    /// unresolved id is a caller bug.
    pub fn shortest_path(
        &self,
        source: PersonId,
        target: PersonId,
    ) -> Result<Option<CostarPath>, SearchError> {
        debug_assert!(self.store.contains_person(source));
        debug_assert!(self.store.contains_person(target));

        if source == target {
            return Ok(Some(CostarPath::empty()));
        }

        let mut frontier = Frontier::new();
        let mut explored = ExploredSet::new();
        let mut depths: FxHashMap<PersonId, u32> = FxHashMap::default();

        frontier.add(SearchNode::root(source));
        depths.insert(source, 0);

        while !frontier.is_empty() {
            let node = frontier.remove()?;

            if node.state == target {
                let path = reconstruct(source, node, &explored)?;
                return Ok(Some(path));
            }

            explored.add(node);

            let depth = depths.get(&node.state).copied().unwrap_or(0);
            if let Some(budget) = self.options.max_depth {
                if depth >= budget {
                    continue;
                }
            }

            for costar in self.store.neighbors(node.state) {
                let candidate = SearchNode::step(costar.person, node.state, costar.movie);

                // Expansion-time short-circuit: all candidates at this depth
                // are discovered together, so the first hit is a shortest path.
                if costar.person == target {
                    let path = reconstruct(source, candidate, &explored)?;
                    tracing::debug!(
                        expanded = explored.len(),
                        degrees = path.degrees(),
                        "search finished"
                    );
                    return Ok(Some(path));
                }

                if !explored.contains_state(costar.person)
                    && !frontier.contains_state(costar.person)
                {
                    depths.insert(costar.person, depth + 1);
                    frontier.add(candidate);
                }
            }
        }

        tracing::debug!(expanded = explored.len(), "search exhausted the component");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::GraphStoreBuilder;

    use super::*;

    /// A—M1—B—M2—C plus an isolated pair {D, E} in M3.
    fn test_store() -> GraphStore {
        let mut builder = GraphStoreBuilder::new();
        for (key, name) in [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D"), ("e", "E")] {
            builder.add_person(key, name, None);
        }
        for (key, title) in [("m1", "First"), ("m2", "Second"), ("m3", "Third")] {
            builder.add_movie(key, title, None);
        }
        for (person, movie) in [
            ("a", "m1"),
            ("b", "m1"),
            ("b", "m2"),
            ("c", "m2"),
            ("d", "m3"),
            ("e", "m3"),
        ] {
            builder.add_credit(person, movie);
        }
        builder.finish()
    }

    fn person(store: &GraphStore, name: &str) -> PersonId {
        store.lookup_name(name)[0]
    }

    #[test]
    fn chain_of_two_movies_yields_two_degrees() {
        let store = test_store();
        let (a, c) = (person(&store, "a"), person(&store, "c"));

        let path = PathFinder::new(&store).shortest_path(a, c).unwrap().unwrap();

        assert_eq!(path.degrees(), 2);
        let keys: Vec<(&str, &str)> = path
            .iter()
            .map(|s| (store.movie_key(s.movie), store.person_key(s.person)))
            .collect();
        assert_eq!(keys, vec![("m1", "b"), ("m2", "c")]);
    }

    #[test]
    fn direct_costars_are_one_degree_apart() {
        let store = test_store();
        let (a, b) = (person(&store, "a"), person(&store, "b"));

        let path = PathFinder::new(&store).shortest_path(a, b).unwrap().unwrap();
        assert_eq!(path.degrees(), 1);
        assert_eq!(store.movie_key(path.steps()[0].movie), "m1");
    }

    #[test]
    fn disconnected_components_are_not_connected() {
        let store = test_store();
        let (a, d) = (person(&store, "a"), person(&store, "d"));

        assert!(PathFinder::new(&store).shortest_path(a, d).unwrap().is_none());
    }

    #[test]
    fn same_person_is_zero_degrees() {
        let store = test_store();
        let a = person(&store, "a");

        let path = PathFinder::new(&store).shortest_path(a, a).unwrap().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.degrees(), 0);
    }

    #[test]
    fn depth_budget_bounds_the_expansion() {
        let store = test_store();
        let (a, c) = (person(&store, "a"), person(&store, "c"));

        let bounded = PathFinder::with_options(&store, SearchOptions::default().max_depth(1));
        assert!(bounded.shortest_path(a, c).unwrap().is_none());

        let enough = PathFinder::with_options(&store, SearchOptions::default().max_depth(2));
        let path = enough.shortest_path(a, c).unwrap().unwrap();
        assert_eq!(path.degrees(), 2);
    }

    #[test]
    fn ties_break_on_the_smaller_movie_key() {
        // A and B share two movies; the sorted adjacency makes the choice
        // deterministic.
        let mut builder = GraphStoreBuilder::new();
        builder.add_person("a", "A", None);
        builder.add_person("b", "B", None);
        builder.add_movie("m2", "Second", None);
        builder.add_movie("m1", "First", None);
        for movie in ["m1", "m2"] {
            builder.add_credit("a", movie);
            builder.add_credit("b", movie);
        }
        let store = builder.finish();

        let (a, b) = (person(&store, "a"), person(&store, "b"));
        let path = PathFinder::new(&store).shortest_path(a, b).unwrap().unwrap();
        assert_eq!(store.movie_key(path.steps()[0].movie), "m1");
    }

    #[test]
    fn repeated_searches_return_the_same_path() {
        let store = test_store();
        let (a, c) = (person(&store, "a"), person(&store, "c"));
        let finder = PathFinder::new(&store);

        let first = finder.shortest_path(a, c).unwrap().unwrap();
        let second = finder.shortest_path(a, c).unwrap().unwrap();
        assert_eq!(first, second);
    }
}
