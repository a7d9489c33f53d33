//! Mission brief record
//!
//! The output of one generation call. Fields are private and only readable,
//! and the featured ability is guaranteed to come from the archetype's own
//! ability list.

use std::fmt;

use serde::Serialize;

use crate::lore::{Ability, Archetype, District, Faction, Implant, Weapon};

/// Immutable mission pitch combining one pick from every lore category
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MissionBrief {
    district: District,
    opposition: Faction,
    archetype: Archetype,
    primary_weapon: Weapon,
    backup_implant: Implant,
    featured_ability: Ability,
    complication: String,
    extraction_condition: String,
}

impl MissionBrief {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        district: District,
        opposition: Faction,
        archetype: Archetype,
        primary_weapon: Weapon,
        backup_implant: Implant,
        featured_ability: Ability,
        complication: String,
        extraction_condition: String,
    ) -> Self {
        debug_assert!(archetype.has_ability(&featured_ability));
        Self {
            district,
            opposition,
            archetype,
            primary_weapon,
            backup_implant,
            featured_ability,
            complication,
            extraction_condition,
        }
    }

    pub fn district(&self) -> &District {
        &self.district
    }

    /// Faction the player is up against
    pub fn opposition(&self) -> &Faction {
        &self.opposition
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn primary_weapon(&self) -> &Weapon {
        &self.primary_weapon
    }

    pub fn backup_implant(&self) -> &Implant {
        &self.backup_implant
    }

    /// Always one of `archetype().abilities`
    pub fn featured_ability(&self) -> &Ability {
        &self.featured_ability
    }

    pub fn complication(&self) -> &str {
        &self.complication
    }

    pub fn extraction_condition(&self) -> &str {
        &self.extraction_condition
    }

    /// Render the brief as a markdown section
    pub fn to_markdown(&self) -> String {
        let lines = [
            format!("### Operation: {}", self.district.name),
            format!(
                "**Opposition:** {} - {}",
                self.opposition.name, self.opposition.philosophy
            ),
            format!(
                "**Primary Archetype:** {} ({})",
                self.archetype.name, self.archetype.role
            ),
            format!(
                "**Signature Ability:** {} - {}",
                self.featured_ability.name, self.featured_ability.description
            ),
            format!(
                "**Loadout Anchor:** {} - {}",
                self.primary_weapon.name, self.primary_weapon.damage_profile
            ),
            format!(
                "**Adaptive Implant:** {} ({})",
                self.backup_implant.name, self.backup_implant.slot
            ),
            format!("**Complication:** {}", self.complication),
            format!("**Extraction Condition:** {}", self.extraction_condition),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// One-line summary, e.g. for logs and HUD tickers
impl fmt::Display for MissionBrief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {} with {} + {} ({})",
            self.district.name,
            self.opposition.name,
            self.archetype.name,
            self.primary_weapon.name,
            self.backup_implant.name,
            self.featured_ability.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lore::LoreCatalog;

    fn sample() -> MissionBrief {
        let catalog = LoreCatalog::reference();
        let archetype = catalog.archetypes()[1].clone();
        let ability = archetype.abilities[1].clone();
        MissionBrief::new(
            catalog.districts()[2].clone(),
            catalog.factions()[0].clone(),
            archetype,
            catalog.weapons()[1].clone(),
            catalog.implants()[0].clone(),
            ability,
            catalog.complications()[3].clone(),
            catalog.extraction_conditions()[0].clone(),
        )
    }

    #[test]
    fn test_markdown_layout() {
        let markdown = sample().to_markdown();
        let lines: Vec<_> = markdown.lines().collect();
        assert_eq!(lines[0], "### Operation: Ghost Grid");
        assert!(lines[1].starts_with("**Opposition:** Helix Corp"));
        assert_eq!(lines[2], "**Primary Archetype:** Juggernaut (Front-line tank)");
        assert!(lines[3].starts_with("**Signature Ability:** Nanite Swarm"));
        assert_eq!(
            lines[4],
            "**Loadout Anchor:** Helix Rail Rifle - Piercing kinetic slug with armor shredding"
        );
        assert_eq!(lines[5], "**Adaptive Implant:** Cyberdeck Mk.IV (Cyberdeck)");
        assert!(markdown.ends_with('\n'));
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(
            sample().to_string(),
            "Ghost Grid vs Helix Corp: Juggernaut with Helix Rail Rifle + Cyberdeck Mk.IV (Nanite Swarm)"
        );
    }

    #[test]
    fn test_identical_fields_are_interchangeable() {
        let a = sample();
        let b = sample();
        assert_eq!(a, b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["district"]["name"], "Ghost Grid");
        assert_eq!(value["featured_ability"]["name"], "Nanite Swarm");
        assert_eq!(
            value["extraction_condition"],
            "Secure a clean uplink and survive the counter-hack timer"
        );
    }
}
