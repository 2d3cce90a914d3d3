//! sociogram - Krackhardt kite centrality generator.
//!
//! One-shot pipeline: build the fixed kite network, compute the four
//! classic centrality measures, and write two JSON documents for a
//! force-directed visualization:
//!
//! - `centrality-measures.json` - the ordered measure-name catalog
//! - `kkg.json` - the node/link graph annotated with per-actor scores
//!
//! # Usage
//!
//! ```bash
//! # Write both documents into the current directory
//! sociogram
//!
//! # Write them somewhere else
//! sociogram --out-dir build/data
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use sociogram_core::algo::centrality::{CentralityReport, Measure};
use sociogram_core::generators::krackhardt_kite;
use sociogram_core::{catalog_json, GraphDocument, SocialGraph, GRAPH_FILE, MEASURES_FILE};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sociogram")]
#[command(about = "Generate the Krackhardt kite graph with centrality annotations", long_about = None)]
struct Cli {
    /// Directory to write the JSON documents into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let graph = krackhardt_kite();
    let stats = graph.stats();
    println!(
        "Krackhardt kite graph: {} actors, {} ties",
        stats.actor_count, stats.tie_count
    );

    println!("Computing {} centrality measures...", Measure::ALL.len());
    let start = Instant::now();
    let report = CentralityReport::compute(&graph)?;
    println!("Computed in {:.2?}", start.elapsed());

    print_leaders(&graph, &report);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let measures_path = cli.out_dir.join(MEASURES_FILE);
    fs::write(&measures_path, catalog_json()?)
        .with_context(|| format!("Failed to write {}", measures_path.display()))?;

    let graph_path = cli.out_dir.join(GRAPH_FILE);
    let doc = GraphDocument::from_graph(&graph, &report);
    doc.to_json_file(&graph_path)
        .with_context(|| format!("Failed to write {}", graph_path.display()))?;

    println!(
        "Wrote {} and {} to {}",
        MEASURES_FILE,
        GRAPH_FILE,
        cli.out_dir.display()
    );
    Ok(())
}

/// Print the most central actor per measure.
fn print_leaders(graph: &SocialGraph, report: &CentralityReport) {
    println!("Most central actors:");
    for measure in Measure::ALL {
        if let Some((id, score)) = report.most_central(measure) {
            let name = graph
                .get_actor(id)
                .map_or_else(|| id.to_string(), ToString::to_string);
            println!("  {:<12} {} ({:.4})", measure.to_string(), name, score);
        }
    }
}
