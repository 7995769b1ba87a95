//! Bracket progression: record winners, reset matches and cascade resets downstream.

use crate::models::{Bracket, EventError, MatchStatus, TeamId};

fn not_found(match_id: &str) -> EventError {
    EventError::MatchNotFound(match_id.to_string())
}

/// Record `winner_id` as winner of `match_id` and move it into the next match.
///
/// The winner must be one of the match's two teams, and both slots must be
/// filled unless the match is a first-round bye. Changing an earlier result
/// first resets the match, so later matches that used the old winner are
/// reopened before the new winner advances.
pub fn record_winner(
    bracket: &mut Bracket,
    match_id: &str,
    winner_id: TeamId,
) -> Result<(), EventError> {
    let m = bracket.find_match(match_id).ok_or_else(|| not_found(match_id))?;
    if !m.has_team(winner_id) {
        return Err(EventError::WinnerNotInMatch {
            match_id: match_id.to_string(),
            team_id: winner_id,
        });
    }
    if !m.is_ready() && !m.is_bye() {
        return Err(EventError::MatchNotReady(match_id.to_string()));
    }
    let (current, completed) = (m.winner_id, m.is_completed());
    match current {
        Some(w) if w == winner_id && completed => return Ok(()),
        Some(_) => reset_match(bracket, match_id)?,
        None => {}
    }

    let m = bracket
        .find_match_mut(match_id)
        .ok_or_else(|| not_found(match_id))?;
    m.winner_id = Some(winner_id);
    m.status = MatchStatus::Completed;
    log::info!("Match {}: winner {}", match_id, winner_id);

    advance_winner(bracket, match_id, winner_id)
}

/// Put `winner_id` into the slot of the next match chosen by the source match number.
pub(crate) fn advance_winner(
    bracket: &mut Bracket,
    match_id: &str,
    winner_id: TeamId,
) -> Result<(), EventError> {
    let m = bracket.find_match(match_id).ok_or_else(|| not_found(match_id))?;
    let slot = m.target_slot();
    let Some(next_id) = m.next_match_id.clone() else {
        return Ok(());
    };
    let next = bracket
        .find_match_mut(&next_id)
        .ok_or_else(|| not_found(&next_id))?;
    *next.slot_mut(slot) = Some(winner_id);
    if next.is_ready() && next.winner_id.is_none() {
        next.status = MatchStatus::Pending;
    }
    Ok(())
}

/// Clear the result of `match_id` and pull its winner back out of the next match.
///
/// A next match that was already decided is reset too, recursively, up to the final.
pub fn reset_match(bracket: &mut Bracket, match_id: &str) -> Result<(), EventError> {
    let m = bracket
        .find_match_mut(match_id)
        .ok_or_else(|| not_found(match_id))?;
    m.winner_id = None;
    m.status = MatchStatus::Pending;
    let slot = m.target_slot();
    let Some(next_id) = m.next_match_id.clone() else {
        return Ok(());
    };
    log::info!("Match {}: result reset", match_id);

    let next = bracket
        .find_match_mut(&next_id)
        .ok_or_else(|| not_found(&next_id))?;
    *next.slot_mut(slot) = None;
    if next.winner_id.is_some() {
        reset_match(bracket, &next_id)
    } else {
        next.status = MatchStatus::Pending;
        Ok(())
    }
}
