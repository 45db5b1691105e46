//! Catalog command handler

use anyhow::Result;
use realmdex::catalog::request_count;
use realmdex::{Locale, Namespace, Region};

/// Handle `catalog`
pub fn handle() -> Result<()> {
    println!("Game versions:");
    for namespace in Namespace::ALL {
        println!(
            "  {:<12} {:<11} {}<region>",
            namespace.to_string(),
            namespace.game_version(),
            namespace.prefix()
        );
    }

    println!("\nRegions:");
    for region in Region::ALL {
        let note = if Region::EXPORTED.contains(&region) {
            String::new()
        } else {
            format!(" (not exported, addon uses {})", region.lookup_alias())
        };
        println!("  {}  {}{}", region, region.realm_index_url(), note);
    }

    let locales: Vec<_> = Locale::ALL.iter().map(|l| l.tag()).collect();
    println!("\nLocales: {}", locales.join(", "));

    println!(
        "\nA full run performs {} realm index requests.",
        request_count(&Namespace::ALL, &Region::EXPORTED)
    );
    Ok(())
}
