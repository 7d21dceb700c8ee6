use crate::moves::Move;
use crate::pokemon::Pokemon;
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};

/// Move loadout entry in a trainer template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveTemplate {
    pub id: u32,
    pub name: String,
    pub damage: u32,
    pub usage_limit: u32,
}

/// One roster slot in a trainer template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PokemonTemplate {
    pub id: u32,
    pub name: String,
    pub max_life_points: u32,
    pub moves: Vec<MoveTemplate>,
}

/// A full trainer definition as stored in RON data files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainerTemplate {
    pub id: u32,
    pub name: String,
    pub pokemon: Vec<PokemonTemplate>,
}

/// Parse a trainer template from a RON document.
pub fn load_trainer_template(source: &str) -> Result<TrainerTemplate, String> {
    ron::from_str(source).map_err(|e| format!("Failed to parse trainer template: {}", e))
}

/// Build a live trainer from a template, enforcing the roster rules
/// (unique pokemon ids, at most four unique moves each).
pub fn create_trainer_from_template(template: &TrainerTemplate) -> Result<Trainer, String> {
    let mut trainer = Trainer::new(template.id, template.name.clone());

    for pokemon_template in &template.pokemon {
        let mut pokemon = Pokemon::new(
            pokemon_template.id,
            pokemon_template.name.clone(),
            pokemon_template.max_life_points,
        );
        for move_template in &pokemon_template.moves {
            let move_ = Move::new(
                move_template.id,
                move_template.name.clone(),
                move_template.damage,
                move_template.usage_limit,
            );
            if !pokemon.learn_move(move_) {
                return Err(format!(
                    "Pokemon '{}' cannot learn move '{}' (duplicate id or full move list)",
                    pokemon_template.name, move_template.name
                ));
            }
        }
        if !trainer.add_pokemon(pokemon) {
            return Err(format!(
                "Trainer '{}' already has a pokemon with id {}",
                template.name, pokemon_template.id
            ));
        }
    }

    Ok(trainer)
}

/// Demo trainer with a fire-leaning Kanto lineup.
pub fn get_red_trainer() -> Result<Trainer, String> {
    let template = load_trainer_template(include_str!("../data/trainers/red.ron"))?;
    create_trainer_from_template(&template)
}

/// Demo trainer with a water-leaning Kanto lineup.
pub fn get_blue_trainer() -> Result<Trainer, String> {
    let template = load_trainer_template(include_str!("../data/trainers/blue.ron"))?;
    create_trainer_from_template(&template)
}
