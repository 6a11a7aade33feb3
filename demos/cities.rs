//! Print two example partitions and check draw frequencies against them.
//!
//! `cargo run --example cities`

use fukubiki::WeightedSampler;

fn print_partition(title: &str, sampler: &WeightedSampler<&str>) {
    println!("=== {title} ===");
    println!("Total weight: {}", sampler.total_weight());
    for band in sampler.describe() {
        println!(
            "Range: {:.3} - {:.3} | Weight: {:3} ({:5.2}%) -> {}",
            band.range_start, band.range_end, band.weight, band.percentage, band.item
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = WeightedSampler::new([
        ("London", 350),
        ("Birmingham", 200),
        ("Manchester", 150),
        ("Glasgow", 100),
        ("Other", 200),
    ])?;
    print_partition("UK CITIES", &cities);

    println!();
    println!("=== 10 SAMPLES ===");
    for i in 1..=10 {
        println!("Sample {i}: {}", cities.sample());
    }

    let n = 100_000;
    println!();
    println!("=== ACCURACY ({n} samples) ===");
    let mut counts: Vec<(&str, usize)> = cities.sample_many(n).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (city, count) in counts {
        let pct = count as f64 * 100.0 / n as f64;
        println!("{city:<12}: {count:5} ({pct:.2}%)");
    }

    println!();
    let products = WeightedSampler::new([
        ("Electronics", 40),
        ("Clothing", 30),
        ("Books", 20),
        ("Home", 10),
    ])?;
    print_partition("PRODUCT CATEGORIES", &products);

    Ok(())
}
