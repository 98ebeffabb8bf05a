//! degrees: shortest co-star connection between two people.

mod cli;
mod interactive;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use degrees_core::{
    load_dataset, CaseInsensitiveResolver, CliOverrides, DegreesConfig, DegreesErrorCode,
    FirstMatchResolver, GraphStore, NameResolution, NameResolver, PathFinder, PersonId,
    QueryError, SearchOptions,
};

use cli::Cli;

fn main() {
    degrees_core::tracing::init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error[{}]: {}", err.error_code(), err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, QueryError> {
    let overrides = CliOverrides {
        directory: cli.directory.clone(),
        max_depth: cli.max_depth,
    };
    let config = DegreesConfig::load(Path::new("."), Some(&overrides))?;

    let dir = PathBuf::from(config.effective_directory());
    println!("Loading data...");
    let (store, report) = load_dataset(&dir)?;
    println!("Data loaded.");
    tracing::debug!(?report, edges = store.costar_edge_count(), "graph ready");

    let Some(source) = resolve_endpoint(&store, cli.source.as_deref(), cli.strict_names)? else {
        println!("Person not found.");
        return Ok(1);
    };
    let Some(target) = resolve_endpoint(&store, cli.target.as_deref(), cli.strict_names)? else {
        println!("Person not found.");
        return Ok(1);
    };

    let mut options = SearchOptions::default();
    if let Some(depth) = config.search.max_depth {
        options = options.max_depth(depth);
    }
    let path = PathFinder::with_options(&store, options).shortest_path(source, target)?;

    if cli.json {
        let doc = output::render_json(&store, source, target, path.as_ref());
        println!("{doc:#}");
    } else {
        print!("{}", output::render_text(&store, source, path.as_ref()));
    }
    Ok(0)
}

/// Resolve one endpoint name to a person id.
///
/// A `--source`/`--target` value runs in batch mode: ambiguity falls back to
/// the first candidate unless `--strict-names` was given. Without a flag the
/// name is prompted for and ambiguity is settled interactively.
fn resolve_endpoint(
    store: &GraphStore,
    name_arg: Option<&str>,
    strict: bool,
) -> Result<Option<PersonId>, QueryError> {
    let (name, is_interactive) = match name_arg {
        Some(name) => (name.to_string(), false),
        None => (interactive::prompt("Name")?, true),
    };

    let resolution = if is_interactive || strict {
        CaseInsensitiveResolver.resolve(store, &name)
    } else {
        FirstMatchResolver.resolve(store, &name)
    };

    match resolution {
        NameResolution::Match(id) => Ok(Some(id)),
        NameResolution::NotFound => Ok(None),
        NameResolution::Ambiguous(candidates) => {
            if is_interactive {
                Ok(interactive::pick_candidate(store, &name, &candidates)?)
            } else {
                let keys: Vec<&str> = candidates.iter().map(|&id| store.person_key(id)).collect();
                eprintln!("Ambiguous name '{name}': candidates {}", keys.join(", "));
                Ok(None)
            }
        }
    }
}
