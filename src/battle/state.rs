use crate::pokemon::Pokemon;
use crate::trainer::Trainer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Randomness handle threaded through every battle and arena call.
///
/// Real runs draw from a seeded or OS-seeded generator; tests can script the
/// exact outcome sequence. Every draw is labelled with the decision it
/// feeds, which keeps scripted tests readable and makes script exhaustion
/// diagnosable.
#[derive(Debug, Clone)]
pub struct BattleRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(StdRng),
    Scripted { outcomes: Vec<u8>, index: usize },
}

impl BattleRng {
    /// RNG seeded from the operating system.
    pub fn new_random() -> Self {
        Self {
            source: RngSource::Seeded(StdRng::from_os_rng()),
        }
    }

    /// Deterministic RNG for reproducible battles and replays.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    /// Scripted RNG that yields exactly the given outcomes, each taken
    /// modulo 100.
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Next outcome in `0..100`.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0..100),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "BattleRng script exhausted! Tried to get a value for: '{}'. Need more outcomes.",
                        reason
                    );
                }
                let outcome = outcomes[*index] % 100;
                *index += 1;
                outcome
            }
        }
    }

    /// Even-odds coin flip.
    pub fn coin_flip(&mut self, reason: &str) -> bool {
        self.next_outcome(reason) < 50
    }

    /// Uniform index into a non-empty collection of `len` items. Scripted
    /// sources spend one outcome and reduce it modulo `len`.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        if let RngSource::Seeded(rng) = &mut self.source {
            return rng.random_range(0..len);
        }
        self.next_outcome(reason) as usize % len
    }
}

/// One entry in a battle's ordered log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// A move connected and dealt (clamped) damage.
    MoveUsed {
        attacker: String,
        defender: String,
        move_name: String,
        damage: u32,
    },
    /// The attacker had no usable move; the turn passed to the other side.
    TurnForfeited { pokemon: String },
    /// The defender dropped to zero health, ending the battle.
    PokemonFainted { winner: String, fainted: String },
    /// The winning trainer's experience rolled over into a new level.
    TrainerLeveledUp { trainer: String, level: u32 },
}

impl BattleEvent {
    /// Human-readable log line for this event.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::MoveUsed {
                attacker,
                defender,
                move_name,
                damage,
            } => format!(
                "{} used {} and dealt {} damage to {}!",
                attacker, move_name, damage, defender
            ),
            BattleEvent::TurnForfeited { pokemon } => {
                format!("{} has no available attacks!", pokemon)
            }
            BattleEvent::PokemonFainted { winner, fainted } => {
                format!("{} wins! {} fainted.", winner, fainted)
            }
            BattleEvent::TrainerLeveledUp { trainer, level } => {
                format!("{} leveled up to level {}!", trainer, level)
            }
        }
    }
}

/// Collects the events of one battle in order.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {}", event.format())?;
        }
        Ok(())
    }
}

/// Immutable view of one pokemon's health, taken when a battle resolves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PokemonSnapshot {
    pub id: u32,
    pub name: String,
    pub life_points: u32,
    pub max_life_points: u32,
}

impl PokemonSnapshot {
    pub fn of(pokemon: &Pokemon) -> Self {
        PokemonSnapshot {
            id: pokemon.id(),
            name: pokemon.name().to_string(),
            life_points: pokemon.life_points(),
            max_life_points: pokemon.max_life_points(),
        }
    }
}

/// Immutable view of one trainer's progression record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainerSnapshot {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub experience: u32,
}

impl TrainerSnapshot {
    pub fn of(trainer: &Trainer) -> Self {
        TrainerSnapshot {
            id: trainer.id(),
            name: trainer.name().to_string(),
            level: trainer.level(),
            experience: trainer.experience(),
        }
    }
}

/// Result of one resolved encounter.
///
/// Snapshots are taken after the experience award, so the winner's level
/// and experience are post-battle values. The caller persists the in-place
/// mutations this record summarizes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub winner: TrainerSnapshot,
    pub loser: TrainerSnapshot,
    pub rounds: u32,
    pub winner_pokemon: PokemonSnapshot,
    pub loser_pokemon: PokemonSnapshot,
    pub log: Vec<BattleEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_lines() {
        let hit = BattleEvent::MoveUsed {
            attacker: "Pikachu".to_string(),
            defender: "Rattata".to_string(),
            move_name: "Thunder Shock".to_string(),
            damage: 18,
        };
        assert_eq!(
            hit.format(),
            "Pikachu used Thunder Shock and dealt 18 damage to Rattata!"
        );

        let forfeit = BattleEvent::TurnForfeited {
            pokemon: "Rattata".to_string(),
        };
        assert_eq!(forfeit.format(), "Rattata has no available attacks!");

        let faint = BattleEvent::PokemonFainted {
            winner: "Pikachu".to_string(),
            fainted: "Rattata".to_string(),
        };
        assert_eq!(faint.format(), "Pikachu wins! Rattata fainted.");

        let level_up = BattleEvent::TrainerLeveledUp {
            trainer: "Red".to_string(),
            level: 2,
        };
        assert_eq!(level_up.format(), "Red leveled up to level 2!");
    }

    #[test]
    fn test_event_bus_collects_in_order() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.push(BattleEvent::TurnForfeited {
            pokemon: "Rattata".to_string(),
        });
        bus.push(BattleEvent::PokemonFainted {
            winner: "Pikachu".to_string(),
            fainted: "Rattata".to_string(),
        });

        assert_eq!(bus.len(), 2);
        let display = format!("{}", bus);
        assert!(display.contains("no available attacks"));
        assert!(display.contains("Rattata fainted."));

        let events = bus.into_events();
        assert!(matches!(events[0], BattleEvent::TurnForfeited { .. }));
        assert!(matches!(events[1], BattleEvent::PokemonFainted { .. }));
    }

    #[test]
    fn test_scripted_rng_replays_its_outcomes() {
        let mut rng = BattleRng::new_for_test(vec![0, 49, 50, 250]);
        assert_eq!(rng.next_outcome("first"), 0);
        assert!(rng.coin_flip("heads"));
        assert!(!rng.coin_flip("tails"));
        // Outcomes are reduced modulo 100.
        assert_eq!(rng.next_outcome("wrapped"), 50);
    }

    #[test]
    #[should_panic(expected = "BattleRng script exhausted")]
    fn test_scripted_rng_panics_when_exhausted() {
        let mut rng = BattleRng::new_for_test(vec![]);
        rng.next_outcome("anything");
    }

    #[test]
    fn test_scripted_pick_index_wraps_modulo_len() {
        let mut rng = BattleRng::new_for_test(vec![5, 7]);
        assert_eq!(rng.pick_index(3, "pick"), 2);
        assert_eq!(rng.pick_index(4, "pick"), 3);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut first = BattleRng::from_seed(42);
        let mut second = BattleRng::from_seed(42);
        for _ in 0..20 {
            assert_eq!(first.next_outcome("replay"), second.next_outcome("replay"));
        }

        let mut reference = BattleRng::from_seed(42);
        let mut other = BattleRng::from_seed(43);
        let diverged =
            (0..20).any(|_| other.next_outcome("other") != reference.next_outcome("reference"));
        assert!(diverged);
    }

    #[test]
    fn test_seeded_pick_index_stays_in_bounds() {
        let mut rng = BattleRng::from_seed(7);
        for _ in 0..100 {
            assert!(rng.pick_index(3, "bounds") < 3);
        }
    }
}
