//! Combat stats touched by outdoor scaling

use serde::{Deserialize, Serialize};

/// Attack slots that carry a weapon damage range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponAttack {
    MainHand,
    OffHand,
    Ranged,
}

impl WeaponAttack {
    pub const ALL: [WeaponAttack; 3] = [WeaponAttack::MainHand, WeaponAttack::OffHand, WeaponAttack::Ranged];

    fn index(self) -> usize {
        match self {
            WeaponAttack::MainHand => 0,
            WeaponAttack::OffHand => 1,
            WeaponAttack::Ranged => 2,
        }
    }
}

/// End of a damage range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageBound {
    Min,
    Max,
}

impl DamageBound {
    pub const ALL: [DamageBound; 2] = [DamageBound::Min, DamageBound::Max];

    fn index(self) -> usize {
        match self {
            DamageBound::Min => 0,
            DamageBound::Max => 1,
        }
    }
}

/// Health pools and weapon damage ranges of one creature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub create_health: u32,
    pub max_health: u32,
    pub health: u32,
    /// Base-value health modifier (flat)
    pub health_base_modifier: f32,
    /// `[attack][bound]`
    weapon_damage: [[f32; 2]; 3],
}

impl CreatureStats {
    /// Full-health creature with `max_health`
    pub fn with_health(max_health: u32) -> Self {
        Self {
            create_health: max_health,
            max_health,
            health: max_health,
            health_base_modifier: max_health as f32,
            weapon_damage: [[0.0; 2]; 3],
        }
    }

    /// Builder: set the damage range of one attack slot
    pub fn with_weapon(mut self, attack: WeaponAttack, min: f32, max: f32) -> Self {
        self.set_weapon_damage(attack, DamageBound::Min, min);
        self.set_weapon_damage(attack, DamageBound::Max, max);
        self
    }

    pub fn weapon_damage(&self, attack: WeaponAttack, bound: DamageBound) -> f32 {
        self.weapon_damage[attack.index()][bound.index()]
    }

    pub fn set_weapon_damage(&mut self, attack: WeaponAttack, bound: DamageBound, value: f32) {
        self.weapon_damage[attack.index()][bound.index()] = value;
    }
}
