use crate::battle::engine::{deterministic_challenge, ensure_roster, random_challenge};
use crate::battle::state::{BattleOutcome, BattleRng, TrainerSnapshot};
use crate::errors::{BattleError, BattleResult};
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};

/// Number of encounters in one arena run.
pub const ARENA_ROUNDS: usize = 100;

/// Tournament protocol selector.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaProtocol {
    /// Random picks with a full reset before every round; always runs the
    /// whole round budget.
    Arena1,
    /// Strongest-living picks with persistent damage; stops early once a
    /// side has no living pokemon.
    Arena2,
}

/// Aggregated result of one arena run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArenaOutcome {
    pub winner: TrainerSnapshot,
    pub trainer1_wins: u32,
    pub trainer2_wins: u32,
    /// Rounds that stalemated and tallied no win.
    pub drawn_rounds: u32,
    pub early_stopped: bool,
    pub battles: Vec<BattleOutcome>,
}

/// Run a full tournament between two trainers under the given protocol.
///
/// Every battle mutates the trainers in place exactly like a direct call to
/// the engine; the caller persists the accumulated state when the run ends.
pub fn run_arena(
    trainer1: &mut Trainer,
    trainer2: &mut Trainer,
    protocol: ArenaProtocol,
    rng: &mut BattleRng,
) -> BattleResult<ArenaOutcome> {
    ensure_roster(trainer1)?;
    ensure_roster(trainer2)?;

    match protocol {
        ArenaProtocol::Arena1 => run_arena1(trainer1, trainer2, rng),
        ArenaProtocol::Arena2 => run_arena2(trainer1, trainer2, rng),
    }
}

/// Win tallies accumulated while an arena runs.
struct Tally {
    trainer1_wins: u32,
    trainer2_wins: u32,
    drawn_rounds: u32,
    battles: Vec<BattleOutcome>,
}

impl Tally {
    fn new() -> Self {
        Tally {
            trainer1_wins: 0,
            trainer2_wins: 0,
            drawn_rounds: 0,
            battles: Vec::new(),
        }
    }

    fn record(&mut self, trainer1_id: u32, outcome: BattleOutcome) {
        if outcome.winner.id == trainer1_id {
            self.trainer1_wins += 1;
        } else {
            self.trainer2_wins += 1;
        }
        self.battles.push(outcome);
    }

    fn into_outcome(self, winner: &Trainer, early_stopped: bool) -> ArenaOutcome {
        ArenaOutcome {
            winner: TrainerSnapshot::of(winner),
            trainer1_wins: self.trainer1_wins,
            trainer2_wins: self.trainer2_wins,
            drawn_rounds: self.drawn_rounds,
            early_stopped,
            battles: self.battles,
        }
    }
}

fn run_arena1(
    trainer1: &mut Trainer,
    trainer2: &mut Trainer,
    rng: &mut BattleRng,
) -> BattleResult<ArenaOutcome> {
    let mut tally = Tally::new();

    for _ in 0..ARENA_ROUNDS {
        match random_challenge(trainer1, trainer2, rng) {
            Ok(outcome) => tally.record(trainer1.id(), outcome),
            // A stalemated round tallies no win; the round budget still
            // shrinks, so the run always terminates.
            Err(BattleError::Stalemate { .. }) => tally.drawn_rounds += 1,
            Err(error) => return Err(error),
        }
    }

    let winner = overall_winner(trainer1, trainer2, tally.trainer1_wins, tally.trainer2_wins);
    Ok(tally.into_outcome(winner, false))
}

fn run_arena2(
    trainer1: &mut Trainer,
    trainer2: &mut Trainer,
    rng: &mut BattleRng,
) -> BattleResult<ArenaOutcome> {
    let mut tally = Tally::new();

    for _ in 0..ARENA_ROUNDS {
        // The depletion check comes before the pick: a side with no living
        // pokemon loses outright, regardless of the banked tallies.
        if !trainer1.has_living_pokemon() {
            return Ok(tally.into_outcome(trainer2, true));
        }
        if !trainer2.has_living_pokemon() {
            return Ok(tally.into_outcome(trainer1, true));
        }

        match deterministic_challenge(trainer1, trainer2, rng) {
            Ok(outcome) => tally.record(trainer1.id(), outcome),
            Err(BattleError::Stalemate { .. }) => tally.drawn_rounds += 1,
            Err(error) => return Err(error),
        }
    }

    let winner = overall_winner(trainer1, trainer2, tally.trainer1_wins, tally.trainer2_wins);
    Ok(tally.into_outcome(winner, false))
}

/// Shared tie-break cascade for both protocols: higher win count, then
/// higher trainer level, then higher experience; trainer1 wins a full tie.
fn overall_winner<'a>(
    trainer1: &'a Trainer,
    trainer2: &'a Trainer,
    trainer1_wins: u32,
    trainer2_wins: u32,
) -> &'a Trainer {
    if trainer1_wins != trainer2_wins {
        return if trainer1_wins > trainer2_wins {
            trainer1
        } else {
            trainer2
        };
    }
    if trainer1.level() != trainer2.level() {
        return if trainer1.level() > trainer2.level() {
            trainer1
        } else {
            trainer2
        };
    }
    if trainer1.experience() >= trainer2.experience() {
        trainer1
    } else {
        trainer2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn trainer_with_record(id: u32, level: u32, experience: u32) -> Trainer {
        let mut trainer = Trainer::new(id, format!("Trainer {}", id));
        trainer.absorb_experience((level - 1) * 10 + experience);
        trainer
    }

    #[rstest]
    #[case(5, 3, 1, 0, 1, 0, 1)] // more wins
    #[case(3, 5, 1, 0, 1, 0, 2)] // fewer wins
    #[case(4, 4, 3, 0, 1, 0, 1)] // tied wins, higher level
    #[case(4, 4, 1, 0, 3, 0, 2)] // tied wins, lower level
    #[case(4, 4, 2, 7, 2, 2, 1)] // tied wins and level, higher experience
    #[case(4, 4, 2, 2, 2, 7, 2)] // tied wins and level, lower experience
    #[case(4, 4, 2, 5, 2, 5, 1)] // full tie defaults to trainer1
    fn test_tie_break_cascade(
        #[case] wins1: u32,
        #[case] wins2: u32,
        #[case] level1: u32,
        #[case] experience1: u32,
        #[case] level2: u32,
        #[case] experience2: u32,
        #[case] expected_winner: u32,
    ) {
        let trainer1 = trainer_with_record(1, level1, experience1);
        let trainer2 = trainer_with_record(2, level2, experience2);

        let winner = overall_winner(&trainer1, &trainer2, wins1, wins2);
        assert_eq!(winner.id(), expected_winner);
    }
}
