//! Role balance scoring for candidate team partitions.

use crate::models::{Player, Role};
use std::borrow::Borrow;

/// Penalty for each missing hard requirement (2 supports, 1 carry, 1 mid, 1 offlane).
pub const HARD_PENALTY: u32 = 1000;

/// Penalty per unit of deviation from the ideal 2/1/1/1 distribution.
pub const SOFT_PENALTY: u32 = 5;

/// Role coverage of one team. A player with two roles counts toward both.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RoleCounts {
    pub carry: u32,
    pub mid: u32,
    pub offlane: u32,
    pub soft_support: u32,
    pub hard_support: u32,
}

impl RoleCounts {
    pub fn from_players<P: Borrow<Player>>(players: &[P]) -> Self {
        let mut counts = Self::default();
        for player in players {
            for role in &player.borrow().preferred_roles {
                match role {
                    Role::Carry => counts.carry += 1,
                    Role::Mid => counts.mid += 1,
                    Role::Offlane => counts.offlane += 1,
                    Role::SoftSupport => counts.soft_support += 1,
                    Role::HardSupport => counts.hard_support += 1,
                }
            }
        }
        counts
    }

    pub fn supports(&self) -> u32 {
        self.soft_support + self.hard_support
    }

    /// At least 2 supports, 1 carry, 1 mid and 1 offlane.
    pub fn meets_requirements(&self) -> bool {
        self.supports() >= 2 && self.carry >= 1 && self.mid >= 1 && self.offlane >= 1
    }

    /// Hard penalties for every missing requirement plus soft deviation from 2/1/1/1.
    pub fn penalty(&self) -> u32 {
        let supports = self.supports();
        let mut score = 0;
        if supports < 2 {
            score += HARD_PENALTY;
        }
        if self.carry < 1 {
            score += HARD_PENALTY;
        }
        if self.mid < 1 {
            score += HARD_PENALTY;
        }
        if self.offlane < 1 {
            score += HARD_PENALTY;
        }
        score += SOFT_PENALTY
            * (supports.abs_diff(2)
                + self.carry.abs_diff(1)
                + self.mid.abs_diff(1)
                + self.offlane.abs_diff(1));
        score
    }
}

/// Total role score of a partition; lower is better and 0 is ideal.
pub fn role_score<P: Borrow<Player>>(teams: &[Vec<P>]) -> u32 {
    teams
        .iter()
        .map(|team| RoleCounts::from_players(team).penalty())
        .sum()
}

/// Whether one team covers every required role.
pub fn has_valid_roles<P: Borrow<Player>>(team: &[P]) -> bool {
    RoleCounts::from_players(team).meets_requirements()
}
