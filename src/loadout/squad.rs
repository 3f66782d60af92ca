use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed squad roles, in squad-building (and booster repair) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Heavy,
    Assault,
    Recon,
    Support,
    Medic,
    Demo,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Heavy,
        Role::Assault,
        Role::Recon,
        Role::Support,
        Role::Medic,
        Role::Demo,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Heavy => "heavy",
            Self::Assault => "assault",
            Self::Recon => "recon",
            Self::Support => "support",
            Self::Medic => "medic",
            Self::Demo => "demo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Heavy => "Heavy / Anti-Armor",
            Self::Assault => "Assault (Versatile)",
            Self::Recon => "Recon / Scout",
            Self::Support => "Support Specialist",
            Self::Medic => "Medic / Sustain",
            Self::Demo => "Demolitions Expert",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.id().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown role '{value}'"))
    }
}

/// One role's loadout. Any single-item field may be absent when its pool was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    #[serde(rename = "role_id")]
    pub role: Role,
    pub primary: Option<String>,
    pub sidearm: Option<String>,
    pub grenade: Option<String>,
    pub booster: Option<String>,
    pub armor: Option<String>,
    #[serde(default)]
    pub stratagems: Vec<String>,
}

impl RoleAssignment {
    pub fn empty(role: Role) -> Self {
        Self {
            role,
            primary: None,
            sidearm: None,
            grenade: None,
            booster: None,
            armor: None,
            stratagems: Vec::new(),
        }
    }

    /// Every item name carried by this assignment.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        [&self.primary, &self.sidearm, &self.grenade, &self.booster, &self.armor]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
            .chain(self.stratagems.iter().map(String::as_str))
    }
}

pub type Squad = Vec<RoleAssignment>;

/// Role for the n-th player slot; cycles through [`Role::ALL`].
pub fn role_for_slot(slot: usize) -> Role {
    Role::ALL[slot % Role::ALL.len()]
}
