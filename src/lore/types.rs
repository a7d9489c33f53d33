//! Lore record types
//!
//! Plain value records that make up the catalog. Records carry no identity
//! beyond their fields: the same ability may appear verbatim under several
//! archetypes and the copies are interchangeable.

use serde::{Deserialize, Serialize};

/// Active or passive power attached to an archetype
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    /// Cooldown in seconds, meaningful only when `has_cooldown` is set
    #[serde(default)]
    pub cooldown_secs: u32,
    #[serde(default)]
    pub has_cooldown: bool,
    /// Damage tag such as "electric"; empty for utility abilities
    #[serde(default)]
    pub damage_type: String,
}

impl Ability {
    pub fn new(name: &str, description: &str, cooldown_secs: u32, damage_type: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cooldown_secs,
            has_cooldown: cooldown_secs > 0,
            damage_type: damage_type.to_string(),
        }
    }

    /// Cooldown if the ability has one
    pub fn cooldown(&self) -> Option<u32> {
        self.has_cooldown.then_some(self.cooldown_secs)
    }

    /// Damage tag, `None` when empty
    pub fn damage_tag(&self) -> Option<&str> {
        if self.damage_type.is_empty() {
            None
        } else {
            Some(&self.damage_type)
        }
    }
}

/// Combat specialization the player can field
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub role: String,
    pub signature: String,
    /// Ordered; the featured ability of a brief is drawn from this list
    pub abilities: Vec<Ability>,
}

impl Archetype {
    pub fn new(name: &str, role: &str, signature: &str, abilities: Vec<Ability>) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            signature: signature.to_string(),
            abilities,
        }
    }

    pub fn has_ability(&self, ability: &Ability) -> bool {
        self.abilities.contains(ability)
    }
}

/// Weapon family
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub category: String,
    pub description: String,
    pub damage_profile: String,
}

impl Weapon {
    pub fn new(name: &str, category: &str, description: &str, damage_profile: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            damage_profile: damage_profile.to_string(),
        }
    }
}

/// Cybernetic enhancement occupying one body slot
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Implant {
    pub name: String,
    pub slot: String,
    pub effects: Vec<String>,
}

impl Implant {
    pub fn new(name: &str, slot: &str, effects: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            slot: slot.to_string(),
            effects: to_strings(effects),
        }
    }
}

/// City zone template a mission takes place in
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub description: String,
    pub hazards: Vec<String>,
    pub enemy_profiles: Vec<String>,
}

impl District {
    pub fn new(name: &str, description: &str, hazards: &[&str], enemy_profiles: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            hazards: to_strings(hazards),
            enemy_profiles: to_strings(enemy_profiles),
        }
    }
}

/// Organization opposing the player
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Faction {
    pub name: String,
    pub philosophy: String,
    pub tactics: Vec<String>,
}

impl Faction {
    pub fn new(name: &str, philosophy: &str, tactics: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            philosophy: philosophy.to_string(),
            tactics: to_strings(tactics),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
