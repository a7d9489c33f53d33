//! Debug tool: draw many briefs and print how often each lore entry was picked
//!
//! Useful after editing the catalog to eyeball that every entry is reachable
//! and the picks look uniform.

use std::collections::HashMap;

use neon_ascendant::lore::LoreCatalog;
use neon_ascendant::mission::MissionGenerator;

fn print_histogram(title: &str, names: &[&str], counts: &HashMap<String, usize>, total: usize) {
    println!("{}:", title);
    for name in names {
        let count = counts.get(*name).copied().unwrap_or(0);
        println!(
            "  {:<72} {:>6} ({:>5.1}%)",
            name,
            count,
            100.0 * count as f64 / total as f64
        );
    }
}

fn main() {
    let total: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10_000);
    let seed: i64 = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12345);

    let catalog = LoreCatalog::shared();
    let mut generator = MissionGenerator::with_seed(catalog, seed);
    let briefs = match generator.generate_batch(total) {
        Ok(briefs) => briefs,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    println!("=== DRAW STATS ({} briefs) seed={} ===", briefs.len(), seed);

    let mut districts = HashMap::new();
    let mut factions = HashMap::new();
    let mut archetypes = HashMap::new();
    let mut weapons = HashMap::new();
    let mut implants = HashMap::new();
    let mut abilities = HashMap::new();
    let mut complications = HashMap::new();
    let mut extractions = HashMap::new();

    for brief in &briefs {
        *districts.entry(brief.district().name.clone()).or_insert(0) += 1;
        *factions.entry(brief.opposition().name.clone()).or_insert(0) += 1;
        *archetypes.entry(brief.archetype().name.clone()).or_insert(0) += 1;
        *weapons.entry(brief.primary_weapon().name.clone()).or_insert(0) += 1;
        *implants.entry(brief.backup_implant().name.clone()).or_insert(0) += 1;
        let pairing = format!("{} / {}", brief.archetype().name, brief.featured_ability().name);
        *abilities.entry(pairing).or_insert(0) += 1;
        *complications.entry(brief.complication().to_string()).or_insert(0) += 1;
        *extractions.entry(brief.extraction_condition().to_string()).or_insert(0) += 1;
    }

    let n = briefs.len();
    print_histogram(
        "Districts",
        &catalog.districts().iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
        &districts,
        n,
    );
    print_histogram(
        "Factions",
        &catalog.factions().iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        &factions,
        n,
    );
    print_histogram(
        "Archetypes",
        &catalog.archetypes().iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        &archetypes,
        n,
    );
    print_histogram(
        "Weapons",
        &catalog.weapons().iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
        &weapons,
        n,
    );
    print_histogram(
        "Implants",
        &catalog.implants().iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
        &implants,
        n,
    );

    let pairings: Vec<String> = catalog
        .archetypes()
        .iter()
        .flat_map(|a| {
            a.abilities
                .iter()
                .map(move |ability| format!("{} / {}", a.name, ability.name))
        })
        .collect();
    print_histogram(
        "Archetype / featured ability",
        &pairings.iter().map(String::as_str).collect::<Vec<_>>(),
        &abilities,
        n,
    );
    print_histogram(
        "Complications",
        &catalog.complications().iter().map(String::as_str).collect::<Vec<_>>(),
        &complications,
        n,
    );
    print_histogram(
        "Extraction conditions",
        &catalog
            .extraction_conditions()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        &extractions,
        n,
    );
}
