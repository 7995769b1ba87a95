//! Roster import from CSV.
//!
//! Expected header: `id,name,rating,roles,status`. `id` may be left empty (a
//! fresh id is generated), `roles` holds one or two role names separated by `;`
//! or `|`, and `status` defaults to Present.

use crate::models::{AttendanceStatus, EventError, Player, Role};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    rating: u32,
    roles: String,
    #[serde(default)]
    status: Option<String>,
}

fn parse_status(s: &str) -> Option<AttendanceStatus> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "present" => Some(AttendanceStatus::Present),
        "absent" => Some(AttendanceStatus::Absent),
        "reserve" => Some(AttendanceStatus::Reserve),
        _ => None,
    }
}

fn parse_roles(s: &str) -> Result<Vec<Role>, String> {
    s.split(|c| c == ';' || c == '|')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| Role::parse(r).ok_or_else(|| format!("unknown role '{}'", r)))
        .collect()
}

/// Read and validate a roster. Line numbers in errors count the header as line 1.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Player>, EventError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut players = Vec::new();

    for (i, result) in rdr.deserialize::<RosterRow>().enumerate() {
        let line = i as u64 + 2;
        let invalid = |message: String| EventError::InvalidRoster { line, message };

        let row = result.map_err(|e| invalid(e.to_string()))?;
        let preferred_roles = parse_roles(&row.roles).map_err(invalid)?;
        let status = row.status.as_deref().unwrap_or("");
        let attendance = parse_status(status)
            .ok_or_else(|| invalid(format!("unknown attendance status '{}'", status)))?;

        let player = Player {
            id: row.id.unwrap_or_else(Uuid::new_v4),
            name: row.name,
            skill_rating: row.rating,
            preferred_roles,
            attendance,
        };
        player.validate().map_err(|e| invalid(e.to_string()))?;
        players.push(player);
    }

    log::info!("Loaded roster with {} players", players.len());
    Ok(players)
}

/// Open and read a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Player>, EventError> {
    let file = File::open(path.as_ref()).map_err(|e| EventError::InvalidRoster {
        line: 0,
        message: format!("{}: {}", path.as_ref().display(), e),
    })?;
    read_roster(file)
}
