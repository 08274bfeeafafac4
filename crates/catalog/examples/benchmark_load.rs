use catalog::{CatalogStore, normalizer};
use serde_json::json;
use std::env;
use std::fs;
use std::time::Instant;

/// Times normalizing a feed file, or a generated feed when no path is given.
fn main() {
    let body = match env::args().nth(1) {
        Some(path) => fs::read(&path).expect("Failed to read feed file"),
        None => synthetic_feed(20_000),
    };

    println!("Normalizing {} bytes of feed...\n", body.len());

    let start = Instant::now();
    let records = normalizer::load_feed(&body).expect("Failed to load feed");
    let elapsed = start.elapsed();

    let mut store = CatalogStore::new();
    store.begin_load();
    store.finish_load(Ok(records));

    let with_screenings = store.records().iter().filter(|r| r.has_screenings()).count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", store.len());
    println!("With screenings: {}", with_screenings);
    println!(
        "\nPerformance: {:.0} movies/second",
        store.len() as f64 / elapsed.as_secs_f64()
    );
}

fn synthetic_feed(n: usize) -> Vec<u8> {
    let movies: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "title": format!("Movie {}", i),
                "genre": ["Drama", "Comedy"],
                "total_rating": (i % 100).to_string(),
                "rating": { "IMDB Audience Score": i % 100 },
                "origin": { "Yes Planet": true },
                "screenings": { "Yes Planet": ["18:00", "21:15"] },
            })
        })
        .collect();
    serde_json::to_vec(&json!({ "Movies": movies })).expect("serializable")
}
