//! Combat result - the replayable record of a resolved fight
//!
//! A `CombatResult` is produced by a single backend call and never mutated
//! by the client. The replay controller only moves a cursor over its
//! rounds, so the consistency checks here run once, when the result enters
//! the client at the gateway boundary.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Snapshot of one side of a fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub original_health: u32,
    /// Remaining health after each round, in round order
    #[serde(default)]
    pub health_timeline: Vec<u32>,
}

/// One resolved exchange within a combat result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based, contiguous
    pub number: u32,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub damage_to_attacker: u32,
    #[serde(default)]
    pub damage_to_defender: u32,
    pub attacker_health: u32,
    pub defender_health: u32,
}

/// The full record of a resolved fight, ready for round-by-round replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatResult {
    pub winner: String,
    pub attacker: Combatant,
    pub defender: Combatant,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl CombatResult {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Check the invariants the replay relies on: round numbers strictly
    /// increasing by 1 from 1, health never increasing and never exceeding
    /// the original, and the final round's winner matching the overall
    /// winner.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut prev_attacker = self.attacker.original_health;
        let mut prev_defender = self.defender.original_health;

        for (i, round) in self.rounds.iter().enumerate() {
            let expected = i as u32 + 1;
            if round.number != expected {
                return Err(DomainError::RoundOutOfSequence {
                    expected,
                    found: round.number,
                });
            }
            if round.attacker_health > prev_attacker || round.defender_health > prev_defender {
                return Err(DomainError::HealthIncreased {
                    round: round.number,
                });
            }
            prev_attacker = round.attacker_health;
            prev_defender = round.defender_health;
        }

        if let Some(last) = self.rounds.last() {
            if last.winner.as_deref() != Some(self.winner.as_str()) {
                return Err(DomainError::WinnerMismatch {
                    winner: self.winner.clone(),
                    round_winner: last.winner.clone(),
                });
            }
        }
        Ok(())
    }
}
