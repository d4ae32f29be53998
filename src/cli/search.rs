use crate::catalog;
use crate::display::{self, build_search_rows};
use crate::error::{ClockError, Result};
use crate::search;

/// Search cities by name and print the matches
pub fn run(query: &str, similarity: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&similarity) {
        return Err(ClockError::Config(format!(
            "Similarity must be between 0 and 1, got {}",
            similarity
        )));
    }

    let catalog = catalog::load_cities()?;
    let matches = search::find_matches(&catalog, query, similarity)?;

    if matches.is_empty() {
        println!("No matches for '{}'.", query);
        return Ok(());
    }

    let set = build_search_rows(&matches);
    display::print_table(&format!("Matches for: '{}'", query), &set, 0);
    Ok(())
}
