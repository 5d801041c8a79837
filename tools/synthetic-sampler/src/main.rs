use indicatif::MultiProgress;
use richness_stats::sampling::sample_set::format_fraction_table;
use richness_stats::sampling::{run, SamplerConfig};
use std::fs;
use std::path::PathBuf;

/// File name of the sampling artifact, inside the `data` directory.
const OUTPUT_FILE_NAME: &str = "samples.json.zst";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Results go to `data/` one directory above this tool's crate root.
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let data_dir = manifest_dir
        .parent()
        .ok_or("Tool directory has no parent")?
        .join("data");
    fs::create_dir_all(&data_dir)?;
    let output_path = data_dir.join(OUTPUT_FILE_NAME);

    let config = SamplerConfig::default();
    println!("Starting synthetic sampling pipeline...");
    println!("   🌱 Species: {}", config.species);
    println!("   📐 Alpha: {}", config.alpha);
    println!("   🎯 Fractions: {:?}", config.fractions);

    let progress = MultiProgress::new();
    let samples = run(&config, &progress)?;
    println!(
        "   ✅ Community of {} individuals sampled (seed {})",
        samples.community_size, samples.seed
    );

    println!("\n💾 Saving results to: {}", output_path.display());
    samples.save(&output_path)?;

    println!(
        "\n{}",
        format_fraction_table(&samples.summary(), Some("Sampling Summary"))
    );
    println!("\n🎉 Pipeline complete!");

    Ok(())
}
