//! Domain fixtures shared across controller tests

use std::collections::BTreeSet;

use nocturne_domain::{
    CombatResult, Combatant, Difficulty, Quest, QuestId, QuestRewards, QuestStatus, QuestStep,
    Round, StepId,
};

/// An available quest with no steps.
pub fn quest(id: u64, title: &str, level: u32, difficulty: Difficulty) -> Quest {
    Quest {
        id: QuestId::new(id),
        title: title.to_string(),
        description: String::new(),
        level,
        difficulty,
        steps: Vec::new(),
        rewards: QuestRewards::default(),
        status: QuestStatus::Available,
        reward_claimed: false,
        completed_steps: BTreeSet::new(),
    }
}

/// An active two-step quest with no progress.
pub fn active_quest_with_steps(id: u64) -> Quest {
    let mut quest = quest(id, "Dragon's Lair", 5, Difficulty::Hard);
    quest.status = QuestStatus::Active;
    quest.steps = vec![
        QuestStep {
            id: StepId::new(1),
            title: "Find the lair".to_string(),
            description: None,
            location: None,
        },
        QuestStep {
            id: StepId::new(2),
            title: "Slay the dragon".to_string(),
            description: None,
            location: None,
        },
    ];
    quest
}

/// A consistent combat result with `rounds` rounds, won by the attacker.
pub fn combat_result(rounds: usize) -> CombatResult {
    let original_health = 30;
    let built: Vec<Round> = (1..=rounds as u32)
        .map(|number| {
            let last = number == rounds as u32;
            Round {
                number,
                winner: last.then(|| "Vex".to_string()),
                damage_to_attacker: 1,
                damage_to_defender: 5,
                attacker_health: original_health - number,
                defender_health: if last {
                    0
                } else {
                    original_health - 5 * number
                },
            }
        })
        .collect();

    CombatResult {
        winner: "Vex".to_string(),
        attacker: Combatant {
            name: "Vex".to_string(),
            original_health,
            health_timeline: built.iter().map(|r| r.attacker_health).collect(),
        },
        defender: Combatant {
            name: "Grull".to_string(),
            original_health,
            health_timeline: built.iter().map(|r| r.defender_health).collect(),
        },
        rounds: built,
    }
}
