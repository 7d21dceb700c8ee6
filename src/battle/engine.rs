use crate::battle::state::{
    BattleEvent, BattleOutcome, BattleRng, EventBus, PokemonSnapshot, TrainerSnapshot,
};
use crate::errors::{BattleError, BattleResult};
use crate::trainer::Trainer;

/// Experience awarded to the winning trainer of one battle.
const WIN_EXPERIENCE: u32 = 1;

/// Reject a roster that cannot field a combatant at all.
pub(crate) fn ensure_roster(trainer: &Trainer) -> BattleResult<()> {
    if trainer.pokemon().is_empty() {
        return Err(BattleError::EmptyRoster {
            trainer: trainer.name().to_string(),
        });
    }
    Ok(())
}

/// Resolve one encounter between two already-chosen pokemon.
///
/// The first attacker is decided by a coin flip, then turns alternate. An
/// attacker with no usable move forfeits its turn (the round still counts);
/// once neither side can attack the battle is a stalemate, since health can
/// never change again. The winning trainer is awarded one experience point,
/// rolling over into levels at ten.
///
/// Both trainers are mutated in place: health, move usage counters, and the
/// winner's progression record. Guard failures mutate nothing; after a
/// legitimate start every round's mutation is committed with no rollback.
pub fn execute_battle(
    trainer1: &mut Trainer,
    trainer2: &mut Trainer,
    pokemon1_index: usize,
    pokemon2_index: usize,
    rng: &mut BattleRng,
) -> BattleResult<BattleOutcome> {
    for (trainer, index) in [(&*trainer1, pokemon1_index), (&*trainer2, pokemon2_index)] {
        let pokemon = trainer
            .pokemon()
            .get(index)
            .ok_or(BattleError::InvalidPokemonIndex(index))?;
        if !pokemon.is_alive() {
            return Err(BattleError::NoLivingPokemon {
                trainer: trainer.name().to_string(),
            });
        }
    }

    let mut events = EventBus::new();
    let mut rounds: u32 = 0;
    // True while trainer1's pokemon is on the offensive.
    let mut side1_attacks = rng.coin_flip("first attacker");

    loop {
        let pokemon1 = &trainer1.pokemon()[pokemon1_index];
        let pokemon2 = &trainer2.pokemon()[pokemon2_index];
        if !pokemon1.is_alive() || !pokemon2.is_alive() {
            break;
        }
        if !pokemon1.has_usable_move() && !pokemon2.has_usable_move() {
            return Err(BattleError::Stalemate { rounds });
        }

        rounds += 1;

        let (attacker_owner, attacker_index, defender_owner, defender_index) = if side1_attacks {
            (&mut *trainer1, pokemon1_index, &mut *trainer2, pokemon2_index)
        } else {
            (&mut *trainer2, pokemon2_index, &mut *trainer1, pokemon1_index)
        };

        let attacker = attacker_owner
            .pokemon_mut(attacker_index)
            .ok_or(BattleError::InvalidPokemonIndex(attacker_index))?;
        let defender = defender_owner
            .pokemon_mut(defender_index)
            .ok_or(BattleError::InvalidPokemonIndex(defender_index))?;

        match attacker.attack(defender, rng) {
            Some(report) => {
                events.push(BattleEvent::MoveUsed {
                    attacker: attacker.name().to_string(),
                    defender: defender.name().to_string(),
                    move_name: report.move_name,
                    damage: report.damage,
                });
            }
            None => {
                events.push(BattleEvent::TurnForfeited {
                    pokemon: attacker.name().to_string(),
                });
            }
        }

        side1_attacks = !side1_attacks;
    }

    let side1_won = trainer1.pokemon()[pokemon1_index].is_alive();
    let (winner, winner_index, loser, loser_index) = if side1_won {
        (&mut *trainer1, pokemon1_index, &mut *trainer2, pokemon2_index)
    } else {
        (&mut *trainer2, pokemon2_index, &mut *trainer1, pokemon1_index)
    };

    events.push(BattleEvent::PokemonFainted {
        winner: winner.pokemon()[winner_index].name().to_string(),
        fainted: loser.pokemon()[loser_index].name().to_string(),
    });

    let levels_gained = winner.absorb_experience(WIN_EXPERIENCE);
    if levels_gained > 0 {
        events.push(BattleEvent::TrainerLeveledUp {
            trainer: winner.name().to_string(),
            level: winner.level(),
        });
    }

    Ok(BattleOutcome {
        winner: TrainerSnapshot::of(winner),
        loser: TrainerSnapshot::of(loser),
        rounds,
        winner_pokemon: PokemonSnapshot::of(&winner.pokemon()[winner_index]),
        loser_pokemon: PokemonSnapshot::of(&loser.pokemon()[loser_index]),
        log: events.into_events(),
    })
}

/// Tavern-style challenge: both rosters are fully healed, then one random
/// pokemon per side fights.
pub fn random_challenge(
    trainer1: &mut Trainer,
    trainer2: &mut Trainer,
    rng: &mut BattleRng,
) -> BattleResult<BattleOutcome> {
    ensure_roster(trainer1)?;
    ensure_roster(trainer2)?;

    trainer1.heal_all();
    trainer2.heal_all();

    let index1 = trainer1
        .random_pokemon_index(rng)
        .ok_or_else(|| BattleError::EmptyRoster {
            trainer: trainer1.name().to_string(),
        })?;
    let index2 = trainer2
        .random_pokemon_index(rng)
        .ok_or_else(|| BattleError::EmptyRoster {
            trainer: trainer2.name().to_string(),
        })?;

    execute_battle(trainer1, trainer2, index1, index2, rng)
}

/// Deterministic challenge: no healing, each side fields its living pokemon
/// with the most remaining health.
pub fn deterministic_challenge(
    trainer1: &mut Trainer,
    trainer2: &mut Trainer,
    rng: &mut BattleRng,
) -> BattleResult<BattleOutcome> {
    ensure_roster(trainer1)?;
    ensure_roster(trainer2)?;

    let index1 = trainer1
        .strongest_living_pokemon_index()
        .ok_or_else(|| BattleError::NoLivingPokemon {
            trainer: trainer1.name().to_string(),
        })?;
    let index2 = trainer2
        .strongest_living_pokemon_index()
        .ok_or_else(|| BattleError::NoLivingPokemon {
            trainer: trainer2.name().to_string(),
        })?;

    execute_battle(trainer1, trainer2, index1, index2, rng)
}
