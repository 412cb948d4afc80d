//! Basic usage of the gendex-core API

use gendex_core::{analyze, Category, Config, GenderAnalyzer, JsonRecordAdapter, process_record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: convenience function
    println!("=== Convenience Function ===");
    let report = analyze("He is a king. She is a queen. The cat sat on the mat.");
    for (category, stats) in report.iter() {
        println!(
            "{:.3}% {} ({} sentences)",
            stats.word_fraction * 100.0,
            category,
            stats.sentence_count
        );
    }

    // Method 2: configured analyzer over a batch
    println!("\n=== Batch Analysis ===");
    let config = Config::builder().language("en").threads(Some(2)).build()?;
    let analyzer = GenderAnalyzer::with_config(config)?;
    let texts = [
        "My brother and sister went home.",
        "Mrs. Smith thanked her aunt.",
        "",
    ];
    for (text, report) in texts.iter().zip(analyzer.analyze_batch(&texts)) {
        match report.dominant() {
            Some(category) => println!("{text:?}: mostly {category}"),
            None => println!("{text:?}: no words"),
        }
    }

    // Method 3: JSON records through the adapter boundary
    println!("\n=== Record Adapter ===");
    let adapter = JsonRecordAdapter::new("body")?;
    let mut record = serde_json::json!({"id": 7, "body": "His uncle laughed."})
        .as_object()
        .cloned()
        .unwrap_or_default();
    let fields = process_record(&adapter, &analyzer, &mut record);
    println!("male share: {:?}", fields.score(Category::Male));
    println!("{}", serde_json::to_string(&record)?);

    Ok(())
}
