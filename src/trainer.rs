use crate::battle::state::BattleRng;
use crate::errors::{TrainerError, TrainerResult};
use crate::pokemon::Pokemon;
use serde::{Deserialize, Serialize};

/// Experience points needed for one level.
pub const EXPERIENCE_PER_LEVEL: u32 = 10;

/// A trainer owns a roster of pokemon and a level/experience record.
///
/// Experience is always kept below [`EXPERIENCE_PER_LEVEL`]: any surplus is
/// rolled over into levels at the moment it is awarded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trainer {
    id: u32,
    name: String,
    level: u32,
    experience: u32,
    pokemon: Vec<Pokemon>,
}

impl Trainer {
    /// Create a new trainer at level 1 with an empty roster.
    pub fn new(id: u32, name: String) -> Self {
        Trainer {
            id,
            name,
            level: 1,
            experience: 0,
            pokemon: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    /// Mutable access to one roster slot, for roster management and for the
    /// battle engine's in-place mutations.
    pub fn pokemon_mut(&mut self, index: usize) -> Option<&mut Pokemon> {
        self.pokemon.get_mut(index)
    }

    /// Add a pokemon to the roster. Fails without mutating when a pokemon
    /// with the same id is already owned.
    pub fn add_pokemon(&mut self, pokemon: Pokemon) -> bool {
        if self.pokemon.iter().any(|p| p.id() == pokemon.id()) {
            return false;
        }
        self.pokemon.push(pokemon);
        true
    }

    /// Fully heal every owned pokemon, restoring health and move uses.
    pub fn heal_all(&mut self) {
        for pokemon in &mut self.pokemon {
            pokemon.heal();
        }
    }

    pub fn has_living_pokemon(&self) -> bool {
        self.pokemon.iter().any(|p| p.is_alive())
    }

    /// Uniform draw over the whole roster, fainted pokemon included.
    pub fn random_pokemon_index(&self, rng: &mut BattleRng) -> Option<usize> {
        if self.pokemon.is_empty() {
            return None;
        }
        Some(rng.pick_index(self.pokemon.len(), "random pokemon selection"))
    }

    /// Index of the pokemon with the most remaining health; the first one
    /// seen wins ties.
    pub fn strongest_pokemon_index(&self) -> Option<usize> {
        Self::strongest_of(self.pokemon.iter().enumerate())
    }

    /// Same as [`Trainer::strongest_pokemon_index`], restricted to living
    /// pokemon.
    pub fn strongest_living_pokemon_index(&self) -> Option<usize> {
        Self::strongest_of(self.pokemon.iter().enumerate().filter(|(_, p)| p.is_alive()))
    }

    fn strongest_of<'a>(candidates: impl Iterator<Item = (usize, &'a Pokemon)>) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, pokemon) in candidates {
            let stronger = match best {
                Some((_, best_life)) => pokemon.life_points() > best_life,
                None => true,
            };
            if stronger {
                best = Some((index, pokemon.life_points()));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Award experience, rolling every full ten points into a level.
    /// Returns the number of levels gained. This is the engine's internal
    /// award path; the validated public entry point is
    /// [`Trainer::grant_experience`].
    pub(crate) fn absorb_experience(&mut self, amount: u32) -> u32 {
        self.experience += amount;
        let mut levels_gained = 0;
        while self.experience >= EXPERIENCE_PER_LEVEL {
            self.level += 1;
            self.experience -= EXPERIENCE_PER_LEVEL;
            levels_gained += 1;
        }
        levels_gained
    }

    /// Externally requested experience grant. Rejects non-positive amounts
    /// and otherwise renormalizes exactly like a battle award, returning the
    /// number of levels gained.
    pub fn grant_experience(&mut self, amount: i32) -> TrainerResult<u32> {
        if amount <= 0 {
            return Err(TrainerError::InvalidExperienceAmount(amount));
        }
        Ok(self.absorb_experience(amount as u32))
    }
}
