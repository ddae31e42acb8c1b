use crate::index::CharIndex;

/// Display index statistics
pub fn show_stats(index: &CharIndex) {
    let (start, end) = index.range();

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Code point range:  U+{:04X} .. U+{:04X} (exclusive)", start, end);
    println!("Characters:        {}", index.char_count());
    println!("Distinct tokens:   {}", index.token_count());

    let mut sorted: Vec<_> = index.iter().map(|(t, b)| (t, b.len())).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!();
    println!("Largest posting lists:");
    for (token, count) in sorted.iter().take(15) {
        println!("  {:20} {}", token, count);
    }

    if sorted.len() > 15 {
        println!("  ... and {} more", sorted.len() - 15);
    }
}
