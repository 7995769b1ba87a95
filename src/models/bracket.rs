//! Bracket, Round, Match and Slot for single-elimination play.

use crate::models::player::{PlayerId, TeamId};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Stable match identifier, `r{round}m{match}`.
pub type MatchId = String;

/// Which side of a match a team occupies.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    #[default]
    One,
    Two,
}

/// Slot of the next-round match that receives the winner of match `match_number`.
///
/// Odd match numbers feed slot one, even ones slot two: matches 1 and 2 meet in
/// next-round match 1, matches 3 and 4 in match 2, and so on.
pub fn target_slot(match_number: u32) -> Slot {
    if match_number % 2 == 1 {
        Slot::One
    } else {
        Slot::Two
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
}

/// A single bracket match. Empty slots are "TBD".
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub round_number: u32,
    /// 1-based within the round.
    pub match_number: u32,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub winner_id: Option<TeamId>,
    pub status: MatchStatus,
    /// None only for the final.
    pub next_match_id: Option<MatchId>,
}

impl Match {
    pub fn new(round_number: u32, match_number: u32) -> Self {
        Self {
            id: match_id(round_number, match_number),
            round_number,
            match_number,
            team1_id: None,
            team2_id: None,
            winner_id: None,
            status: MatchStatus::Pending,
            next_match_id: None,
        }
    }

    pub fn slot(&self, slot: Slot) -> Option<TeamId> {
        match slot {
            Slot::One => self.team1_id,
            Slot::Two => self.team2_id,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Option<TeamId> {
        match slot {
            Slot::One => &mut self.team1_id,
            Slot::Two => &mut self.team2_id,
        }
    }

    /// Slot of `next_match_id` this match's winner moves into.
    pub fn target_slot(&self) -> Slot {
        target_slot(self.match_number)
    }

    pub fn has_team(&self, team_id: TeamId) -> bool {
        self.team1_id == Some(team_id) || self.team2_id == Some(team_id)
    }

    /// Both slots filled.
    pub fn is_ready(&self) -> bool {
        self.team1_id.is_some() && self.team2_id.is_some()
    }

    /// A first-round match seeded with one team. Its empty slot is never filled.
    pub fn is_bye(&self) -> bool {
        self.round_number == 1 && self.team1_id.is_some() != self.team2_id.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// The other team of a decided match (None for a bye or an undecided match).
    pub fn loser_id(&self) -> Option<TeamId> {
        let winner = self.winner_id?;
        if self.team1_id == Some(winner) {
            self.team2_id
        } else {
            self.team1_id
        }
    }
}

pub(crate) fn match_id(round_number: u32, match_number: u32) -> MatchId {
    format!("r{}m{}", round_number, match_number)
}

/// One column of the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based from the first round.
    pub round_number: u32,
    pub round_name: String,
    pub matches: Vec<Match>,
}

/// Label for a round by its distance from the final.
pub fn round_name(round_number: u32, total_rounds: u32) -> String {
    match total_rounds.saturating_sub(round_number) {
        0 => "Finals".to_string(),
        1 => "Semi-Finals".to_string(),
        2 => "Quarter-Finals".to_string(),
        _ => format!("Round {}", round_number),
    }
}

/// Whole single-elimination bracket; serializes as the plain round list.
///
/// All matches are addressed by id within the owning bracket, and the bracket is
/// replaced as one value after every change.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bracket {
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn total_rounds(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn find_match(&self, match_id: &str) -> Option<&Match> {
        self.matches().find(|m| m.id == match_id)
    }

    pub fn find_match_mut(&mut self, match_id: &str) -> Option<&mut Match> {
        self.rounds
            .iter_mut()
            .flat_map(|r| r.matches.iter_mut())
            .find(|m| m.id == match_id)
    }

    /// All matches, round by round.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    /// The single match of the last round.
    pub fn final_match(&self) -> Option<&Match> {
        self.rounds.last().and_then(|r| r.matches.first())
    }

    /// Winner of the final, None while undecided.
    pub fn champion(&self) -> Option<TeamId> {
        self.final_match().and_then(|m| m.winner_id)
    }

    pub fn is_complete(&self) -> bool {
        self.final_match()
            .map(|m| m.is_completed() && m.winner_id.is_some())
            .unwrap_or(false)
    }
}

/// A team as seeded into a bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketTeam {
    pub id: TeamId,
    pub team_number: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub average_rating: u32,
    pub member_ids: Vec<PlayerId>,
}

impl From<&Team> for BracketTeam {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            team_number: team.team_number,
            name: team.team_name.clone(),
            average_rating: team.average_rating,
            member_ids: team.player_ids(),
        }
    }
}

/// A team's record in the bracket so far.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub team_number: u32,
    pub team_name: Option<String>,
    pub wins: u32,
    pub losses: u32,
    /// 1 for the champion, 2 for the runner-up, 2^d + 1 for teams knocked out
    /// d rounds before the final; 0 while undecided.
    pub placing: u32,
}
