//! Result rendering: human-readable text and JSON.

use degrees_core::{CostarPath, GraphStore, MovieId, PersonId};
use serde_json::json;

/// Text rendering of a search result.
///
/// Connected pairs print the degree count followed by one line per hop;
/// disconnected pairs print `Not connected.`
pub fn render_text(store: &GraphStore, source: PersonId, path: Option<&CostarPath>) -> String {
    let Some(path) = path else {
        return "Not connected.\n".to_string();
    };

    let mut out = format!("{} degrees of separation.\n", path.degrees());
    let mut previous = source;
    for (i, step) in path.iter().enumerate() {
        out.push_str(&format!(
            "{}: {} and {} starred in {}\n",
            i + 1,
            person_name(store, previous),
            person_name(store, step.person),
            movie_title(store, step.movie),
        ));
        previous = step.person;
    }
    out
}

/// JSON rendering of a search result.
pub fn render_json(
    store: &GraphStore,
    source: PersonId,
    target: PersonId,
    path: Option<&CostarPath>,
) -> serde_json::Value {
    let endpoint = |id: PersonId| {
        json!({
            "id": store.person_key(id),
            "name": person_name(store, id),
        })
    };

    match path {
        None => json!({
            "connected": false,
            "source": endpoint(source),
            "target": endpoint(target),
        }),
        Some(path) => json!({
            "connected": true,
            "degrees": path.degrees(),
            "source": endpoint(source),
            "target": endpoint(target),
            "steps": path
                .iter()
                .map(|step| {
                    json!({
                        "movie": {
                            "id": store.movie_key(step.movie),
                            "title": movie_title(store, step.movie),
                        },
                        "person": {
                            "id": store.person_key(step.person),
                            "name": person_name(store, step.person),
                        },
                    })
                })
                .collect::<Vec<_>>(),
        }),
    }
}

fn person_name(store: &GraphStore, id: PersonId) -> &str {
    store.person(id).map(|p| p.name.as_str()).unwrap_or("<unknown>")
}

fn movie_title(store: &GraphStore, id: MovieId) -> &str {
    store.movie(id).map(|m| m.title.as_str()).unwrap_or("<unknown>")
}

#[cfg(test)]
mod tests {
    use degrees_core::{GraphStoreBuilder, PathFinder};

    use super::*;

    fn store() -> GraphStore {
        let mut builder = GraphStoreBuilder::new();
        builder.add_person("102", "Kevin Bacon", Some(1958));
        builder.add_person("129", "Tom Cruise", Some(1962));
        builder.add_movie("104257", "A Few Good Men", Some(1992));
        builder.add_credit("102", "104257");
        builder.add_credit("129", "104257");
        builder.finish()
    }

    #[test]
    fn text_lists_each_hop() {
        let store = store();
        let bacon = store.lookup_name("kevin bacon")[0];
        let cruise = store.lookup_name("tom cruise")[0];
        let path = PathFinder::new(&store)
            .shortest_path(bacon, cruise)
            .unwrap()
            .unwrap();

        let text = render_text(&store, bacon, Some(&path));
        assert_eq!(
            text,
            "1 degrees of separation.\n1: Kevin Bacon and Tom Cruise starred in A Few Good Men\n"
        );
    }

    #[test]
    fn text_for_disconnected_pairs() {
        let store = store();
        let bacon = store.lookup_name("kevin bacon")[0];
        assert_eq!(render_text(&store, bacon, None), "Not connected.\n");
    }

    #[test]
    fn json_document_shape() {
        let store = store();
        let bacon = store.lookup_name("kevin bacon")[0];
        let cruise = store.lookup_name("tom cruise")[0];
        let path = PathFinder::new(&store)
            .shortest_path(bacon, cruise)
            .unwrap()
            .unwrap();

        let doc = render_json(&store, bacon, cruise, Some(&path));
        assert_eq!(doc["connected"], true);
        assert_eq!(doc["degrees"], 1);
        assert_eq!(doc["steps"][0]["movie"]["title"], "A Few Good Men");
        assert_eq!(doc["steps"][0]["person"]["name"], "Tom Cruise");

        let missing = render_json(&store, bacon, cruise, None);
        assert_eq!(missing["connected"], false);
    }
}
