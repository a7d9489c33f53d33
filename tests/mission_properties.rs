//! End-to-end properties of mission generation against the built-in catalog

use std::collections::HashSet;

use proptest::prelude::*;

use neon_ascendant::draw::{ChaChaStream, DrawStream, StreamState};
use neon_ascendant::error::Result;
use neon_ascendant::{LoreCatalog, MissionBrief, MissionGenerator};

/// Forwards to a real stream and records every (bound, index) pair
struct CheckedStream {
    inner: ChaChaStream,
    draws: Vec<(usize, usize)>,
}

impl DrawStream for CheckedStream {
    fn seed(&mut self, seed: i64) {
        self.inner.seed(seed);
    }

    fn draw_uniform(&mut self, bound: usize) -> Result<usize> {
        let index = self.inner.draw_uniform(bound)?;
        assert!(index < bound, "index {} out of bound {}", index, bound);
        self.draws.push((bound, index));
        Ok(index)
    }

    fn state(&self) -> StreamState {
        self.inner.state()
    }
}

fn assert_from_catalog(catalog: &LoreCatalog, brief: &MissionBrief) {
    assert!(catalog.districts().contains(brief.district()));
    assert!(catalog.factions().contains(brief.opposition()));
    assert!(catalog.archetypes().contains(brief.archetype()));
    assert!(catalog.weapons().contains(brief.primary_weapon()));
    assert!(catalog.implants().contains(brief.backup_implant()));
    assert!(brief
        .archetype()
        .abilities
        .contains(brief.featured_ability()));
    assert!(catalog
        .complications()
        .iter()
        .any(|c| c == brief.complication()));
    assert!(catalog
        .extraction_conditions()
        .iter()
        .any(|e| e == brief.extraction_condition()));
}

fn summary(brief: &MissionBrief) -> [&str; 8] {
    [
        brief.district().name.as_str(),
        brief.opposition().name.as_str(),
        brief.archetype().name.as_str(),
        brief.primary_weapon().name.as_str(),
        brief.backup_implant().name.as_str(),
        brief.featured_ability().name.as_str(),
        brief.complication(),
        brief.extraction_condition(),
    ]
}

#[test]
fn test_seed_42_snapshot() {
    let catalog = LoreCatalog::reference();
    let briefs = MissionGenerator::with_seed(&catalog, 42)
        .generate_batch(3)
        .unwrap();

    assert_eq!(
        summary(&briefs[0]),
        [
            "Ghost Grid",
            "Vanta Syndicate",
            "Juggernaut",
            "Pulsecaster SMG",
            "Optic Cortex Prism",
            "EMP Burst",
            "Dawnbreaker converts attempt to hack your cyberdeck mid-fight",
            "Carry data-core physically to an Ascendant drop pod",
        ]
    );
    assert_eq!(
        summary(&briefs[1]),
        [
            "Ghost Grid",
            "Helix Corp",
            "Tracer",
            "Pulsecaster SMG",
            "Reflex Core X",
            "Overdrive",
            "Helix orbital overwatch sweeps disrupt cloak cycles",
            "Secure a clean uplink and survive the counter-hack timer",
        ]
    );
    assert_eq!(
        summary(&briefs[2]),
        [
            "Neon Abyss",
            "Dawnbreakers",
            "Synthmage",
            "Singularity Projector",
            "Optic Cortex Prism",
            "Nanite Swarm",
            "Ghost Grid instabilities cause random HUD distortion",
            "Maintain over 50% armor integrity for premium rewards",
        ]
    );
}

#[test]
fn test_other_seeds_snapshot() {
    let catalog = LoreCatalog::reference();

    let brief = MissionGenerator::with_seed(&catalog, 7).generate_one().unwrap();
    assert_eq!(
        summary(&brief),
        [
            "Neon Abyss",
            "Helix Corp",
            "Tracer",
            "Helix Rail Rifle",
            "Cyberdeck Mk.IV",
            "Overdrive",
            "Dawnbreaker converts attempt to hack your cyberdeck mid-fight",
            "Evacuate via hijacked mag-lev within 90 seconds of objective completion",
        ]
    );

    let brief = MissionGenerator::with_seed(&catalog, -1).generate_one().unwrap();
    assert_eq!(
        summary(&brief),
        [
            "Ghost Grid",
            "Vanta Syndicate",
            "Synthmage",
            "Pulsecaster SMG",
            "Optic Cortex Prism",
            "Neural Hack",
            "Rival Ascendant strike team is pursuing the same data ghost",
            "Evacuate via hijacked mag-lev within 90 seconds of objective completion",
        ]
    );
}

#[test]
fn test_different_seeds_diverge() {
    let catalog = LoreCatalog::shared();
    let diverging = (0..20i64)
        .filter(|&seed| {
            let a = MissionGenerator::with_seed(catalog, seed).generate_one().unwrap();
            let b = MissionGenerator::with_seed(catalog, seed + 1000)
                .generate_one()
                .unwrap();
            a != b
        })
        .count();
    assert!(diverging > 0);
}

#[test]
fn test_markdown_of_seeded_brief() {
    let catalog = LoreCatalog::reference();
    let brief = MissionGenerator::with_seed(&catalog, 42).generate_one().unwrap();
    let markdown = brief.to_markdown();

    assert!(markdown.starts_with("### Operation: Ghost Grid\n"));
    assert!(markdown.contains("**Primary Archetype:** Juggernaut (Front-line tank)"));
    assert!(markdown.contains("**Signature Ability:** EMP Burst - "));
    assert!(markdown.ends_with('\n'));
}

#[test]
fn test_batch_rejects_non_positive_counts() {
    let catalog = LoreCatalog::reference();
    let mut generator = MissionGenerator::with_seed(&catalog, 1);
    for count in [0, -1, i64::MIN] {
        let err = generator.generate_batch(count).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn test_every_entry_is_reachable() {
    let catalog = LoreCatalog::reference();
    let stream = CheckedStream {
        inner: ChaChaStream::new(),
        draws: Vec::new(),
    };
    let mut generator = MissionGenerator::with_stream(&catalog, stream);
    let briefs = generator.generate_batch(10_000).unwrap();
    assert!(generator.state().is_seeded());

    let mut districts = HashSet::new();
    let mut factions = HashSet::new();
    let mut archetypes = HashSet::new();
    let mut weapons = HashSet::new();
    let mut implants = HashSet::new();
    let mut pairings = HashSet::new();
    let mut complications = HashSet::new();
    let mut extractions = HashSet::new();

    for brief in &briefs {
        assert_from_catalog(&catalog, brief);
        districts.insert(brief.district().name.clone());
        factions.insert(brief.opposition().name.clone());
        archetypes.insert(brief.archetype().name.clone());
        weapons.insert(brief.primary_weapon().name.clone());
        implants.insert(brief.backup_implant().name.clone());
        pairings.insert((
            brief.archetype().name.clone(),
            brief.featured_ability().name.clone(),
        ));
        complications.insert(brief.complication().to_string());
        extractions.insert(brief.extraction_condition().to_string());
    }

    assert_eq!(districts.len(), catalog.districts().len());
    assert_eq!(factions.len(), catalog.factions().len());
    assert_eq!(archetypes.len(), catalog.archetypes().len());
    assert_eq!(weapons.len(), catalog.weapons().len());
    assert_eq!(implants.len(), catalog.implants().len());
    let ability_slots: usize = catalog.archetypes().iter().map(|a| a.abilities.len()).sum();
    assert_eq!(pairings.len(), ability_slots);
    assert_eq!(complications.len(), catalog.complications().len());
    assert_eq!(extractions.len(), catalog.extraction_conditions().len());

    let stream = generator.into_stream();
    assert_eq!(stream.draws.len(), 10_000 * 8);
}

#[test]
fn test_generators_share_one_catalog() {
    let catalog = LoreCatalog::shared();
    let mut first = MissionGenerator::with_seed(catalog, 3);
    let mut second = MissionGenerator::with_seed(catalog, 3);

    // Interleaving must not matter: each generator owns its stream
    let a1 = first.generate_one().unwrap();
    let b1 = second.generate_one().unwrap();
    let a2 = first.generate_one().unwrap();
    let b2 = second.generate_one().unwrap();
    assert_eq!(a1, b1);
    assert_eq!(a2, b2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_briefs_reference_the_catalog(seed in any::<i64>(), count in 1i64..50) {
        let catalog = LoreCatalog::shared();
        let briefs = MissionGenerator::with_seed(catalog, seed)
            .generate_batch(count)
            .unwrap();
        prop_assert_eq!(briefs.len(), count as usize);
        for brief in &briefs {
            assert_from_catalog(catalog, brief);
        }
    }

    #[test]
    fn prop_same_seed_same_batch(seed in any::<i64>(), count in 1i64..20) {
        let catalog = LoreCatalog::shared();
        let first = MissionGenerator::with_seed(catalog, seed).generate_batch(count).unwrap();
        let second = MissionGenerator::with_seed(catalog, seed).generate_batch(count).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reseeding_replays(seed in any::<i64>()) {
        let catalog = LoreCatalog::shared();
        let mut generator = MissionGenerator::with_seed(catalog, seed);
        let first = generator.generate_batch(3).unwrap();
        generator.seed(seed);
        prop_assert_eq!(generator.generate_batch(3).unwrap(), first);
    }
}
