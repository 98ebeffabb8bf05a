//! Interactive prompts for names and ambiguity resolution.

use std::io::{self, BufRead, Write};

use degrees_core::{GraphStore, PersonId};

/// Print `label: ` and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask the user to narrow an ambiguous name down to one person id.
///
/// Lists every candidate with their birth year, then matches the typed id
/// against the candidates. Returns `None` when the answer matches none of
/// them.
pub fn pick_candidate(
    store: &GraphStore,
    name: &str,
    candidates: &[PersonId],
) -> io::Result<Option<PersonId>> {
    println!("Which '{name}'?");
    for &id in candidates {
        if let Some(person) = store.person(id) {
            match person.birth {
                Some(birth) => {
                    println!("ID: {}, Name: {}, Birth: {birth}", store.person_key(id), person.name)
                }
                None => println!("ID: {}, Name: {}", store.person_key(id), person.name),
            }
        }
    }
    let typed = prompt("Intended Person ID")?;
    Ok(candidates
        .iter()
        .copied()
        .find(|&id| store.person_key(id) == typed))
}
