//! Reference lore for Erebus Prime
//!
//! The fixed content the game ships with. Order matters: brief generation
//! draws indices into these lists, so reordering or inserting entries changes
//! what a given seed produces.

use super::types::{Ability, Archetype, District, Faction, Implant, Weapon};

// ============================================================================
// MISSION TEXT
// ============================================================================

pub const COMPLICATIONS: &[&str] = &[
    "Ghost Grid instabilities cause random HUD distortion",
    "Helix orbital overwatch sweeps disrupt cloak cycles",
    "Dawnbreaker converts attempt to hack your cyberdeck mid-fight",
    "Rival Ascendant strike team is pursuing the same data ghost",
];

pub const EXTRACTION_CONDITIONS: &[&str] = &[
    "Secure a clean uplink and survive the counter-hack timer",
    "Evacuate via hijacked mag-lev within 90 seconds of objective completion",
    "Carry data-core physically to an Ascendant drop pod",
    "Maintain over 50% armor integrity for premium rewards",
];

// ============================================================================
// ABILITIES
// ============================================================================

fn emp_burst() -> Ability {
    Ability::new(
        "EMP Burst",
        "Detonates an electromagnetic pulse that disables shields and drones",
        18,
        "electric",
    )
}

fn neural_hack() -> Ability {
    Ability::new(
        "Neural Hack",
        "Hijacks a target's firmware, forcing temporary allegiance",
        24,
        "cyber",
    )
}

fn overdrive() -> Ability {
    Ability::new(
        "Overdrive",
        "Initiates bullet time and boosts reaction throughput",
        60,
        "",
    )
}

fn nanite_swarm() -> Ability {
    Ability::new(
        "Nanite Swarm",
        "Deploys repair nanites that devour enemies while mending armor",
        30,
        "nanotech",
    )
}

// ============================================================================
// CATEGORY TABLES
// ============================================================================

pub fn districts() -> Vec<District> {
    vec![
        District::new(
            "Neon Abyss",
            "Gutter-level sprawl carved by gang warfare and neon smog",
            &["Toxic runoff", "Rolling brownouts", "Ambush choke points"],
            &["Lightly armored gangers", "Black market drones"],
        ),
        District::new(
            "Spire District",
            "Corporate citadel patrolled by Helix Corp security",
            &["Persistent surveillance", "Shielded turret nests"],
            &["Powered exosuits", "Security mechs"],
        ),
        District::new(
            "Ghost Grid",
            "Digital-physical overlap where data ghosts manifest",
            &["Reality drift", "Rogue AI anomalies"],
            &["Spectral constructs", "Hijacked sentry bots"],
        ),
    ]
}

pub fn factions() -> Vec<Faction> {
    vec![
        Faction::new(
            "Helix Corp",
            "Bio-digital ascension through proprietary consciousness loops",
            &["Deploys gene-modded operatives", "Controls orbital overwatch"],
        ),
        Faction::new(
            "Vanta Syndicate",
            "Profit through clandestine memory trading and assassinations",
            &["Optic camouflage strike teams", "Backdoor market manipulation"],
        ),
        Faction::new(
            "Dawnbreakers",
            "Liberate AI to birth post-human divinity",
            &["Swarm hacking", "Cybernetic zealots with martyr protocols"],
        ),
    ]
}

pub fn archetypes() -> Vec<Archetype> {
    vec![
        Archetype::new(
            "Specter",
            "Stealth infiltrator",
            "Adaptive camouflage and ghosting protocols",
            vec![emp_burst(), neural_hack()],
        ),
        Archetype::new(
            "Juggernaut",
            "Front-line tank",
            "Exosuit plating with hydraulic melee amplifiers",
            vec![emp_burst(), nanite_swarm()],
        ),
        Archetype::new(
            "Tracer",
            "Hyper-mobile skirmisher",
            "Reflex accelerators and kinetic boosters",
            vec![overdrive(), emp_burst()],
        ),
        Archetype::new(
            "Synthmage",
            "Battlefield control",
            "Nanite constructs and viral warfare",
            vec![neural_hack(), nanite_swarm()],
        ),
    ]
}

pub fn weapons() -> Vec<Weapon> {
    vec![
        Weapon::new(
            "Pulsecaster SMG",
            "SMG",
            "High rate-of-fire smg with conductive rounds",
            "Rapid electrical bursts with chaining potential",
        ),
        Weapon::new(
            "Helix Rail Rifle",
            "Railgun",
            "Mag-accelerated rifle built for surgical strikes",
            "Piercing kinetic slug with armor shredding",
        ),
        Weapon::new(
            "Singularity Projector",
            "Experimental",
            "Prototype weapon that collapses localized gravity wells",
            "Area denial with escalating implosion damage",
        ),
    ]
}

pub fn implants() -> Vec<Implant> {
    vec![
        Implant::new(
            "Cyberdeck Mk.IV",
            "Cyberdeck",
            &["+25% hack success", "Unlocks ghost grid reconnaissance overlay"],
        ),
        Implant::new(
            "Reflex Core X",
            "Reflex Core",
            &["+15% movement speed", "Stacking evasion when chaining eliminations"],
        ),
        Implant::new(
            "Optic Cortex Prism",
            "Optic Cortex",
            &["Highlights data ghost signatures", "Increases weak point critical damage"],
        ),
    ]
}
