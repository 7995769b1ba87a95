//! Player, Role and AttendanceStatus data structures.

use crate::models::error::EventError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams and captain lists).
pub type PlayerId = Uuid;

/// Unique identifier for a team (used as bracket slot value).
pub type TeamId = Uuid;

/// Highest skill rating a roster entry may carry.
pub const MAX_SKILL_RATING: u32 = 15000;

/// Most preferred roles a player may pick.
pub const MAX_PREFERRED_ROLES: usize = 2;

/// Position a player is willing to play.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Carry,
    Mid,
    Offlane,
    #[serde(rename = "Soft Support")]
    SoftSupport,
    #[serde(rename = "Hard Support")]
    HardSupport,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Carry,
        Role::Mid,
        Role::Offlane,
        Role::SoftSupport,
        Role::HardSupport,
    ];

    /// Display label (same text as the serialized form).
    pub fn label(self) -> &'static str {
        match self {
            Role::Carry => "Carry",
            Role::Mid => "Mid",
            Role::Offlane => "Offlane",
            Role::SoftSupport => "Soft Support",
            Role::HardSupport => "Hard Support",
        }
    }

    /// Parse a role label, ignoring case and separators ("soft support", "SoftSupport", "soft_support").
    pub fn parse(s: &str) -> Option<Role> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Role::ALL
            .into_iter()
            .find(|r| r.label().replace(' ', "").to_ascii_lowercase() == key)
    }

    pub fn is_support(self) -> bool {
        matches!(self, Role::SoftSupport | Role::HardSupport)
    }
}

/// Whether a registered player showed up for the event.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Reserve,
}

/// A registered player as supplied by the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub skill_rating: u32,
    /// 1 or 2 roles; every listed role counts toward team role balance.
    pub preferred_roles: Vec<Role>,
    #[serde(default)]
    pub attendance: AttendanceStatus,
}

impl Player {
    /// Create a present player with a fresh id.
    pub fn new(name: impl Into<String>, skill_rating: u32, preferred_roles: Vec<Role>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            skill_rating,
            preferred_roles,
            attendance: AttendanceStatus::Present,
        }
    }

    /// Same player with a different attendance status.
    pub fn with_attendance(mut self, attendance: AttendanceStatus) -> Self {
        self.attendance = attendance;
        self
    }

    pub fn is_present(&self) -> bool {
        self.attendance == AttendanceStatus::Present
    }

    pub fn plays(&self, role: Role) -> bool {
        self.preferred_roles.contains(&role)
    }

    /// Check roster invariants: 1–2 distinct roles, rating within range, non-empty name.
    pub fn validate(&self) -> Result<(), EventError> {
        let invalid = |reason: &str| EventError::InvalidPlayer {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.preferred_roles.is_empty() {
            return Err(invalid("select at least one preferred role"));
        }
        if self.preferred_roles.len() > MAX_PREFERRED_ROLES {
            return Err(invalid("maximum 2 roles"));
        }
        if self.preferred_roles.len() == 2 && self.preferred_roles[0] == self.preferred_roles[1] {
            return Err(invalid("roles must be distinct"));
        }
        if self.skill_rating > MAX_SKILL_RATING {
            return Err(invalid("rating above 15000"));
        }
        Ok(())
    }
}
