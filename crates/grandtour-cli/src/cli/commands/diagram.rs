//! `diagram`: print the architecture overview.

use anyhow::{Context, Result};
use grandtour_core::diagram::{self, Layer};

pub fn run(json: bool) -> Result<()> {
    let dataset = diagram::architecture();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(dataset).context("serialize diagram")?
        );
        return Ok(());
    }

    println!("{}", dataset.notice);
    for layer in Layer::all() {
        println!();
        println!("{}", layer.display_name());
        for node in dataset.nodes_in(*layer) {
            println!("  {:<12} {:<22} {}", node.id, node.label, node.summary);
        }
    }
    println!();
    println!("Links");
    for edge in dataset.edges {
        println!("  {} -> {}: {}", edge.from, edge.to, edge.label);
    }
    Ok(())
}
