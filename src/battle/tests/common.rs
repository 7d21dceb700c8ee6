use crate::battle::state::BattleRng;
use crate::moves::Move;
use crate::pokemon::Pokemon;
use crate::trainer::Trainer;

/// Build a move with a compact call in tests.
pub fn test_move(id: u32, name: &str, damage: u32, usage_limit: u32) -> Move {
    Move::new(id, name.to_string(), damage, usage_limit)
}

/// Build a pokemon that already knows the given moves.
pub fn test_pokemon(id: u32, name: &str, max_life_points: u32, moves: Vec<Move>) -> Pokemon {
    let mut pokemon = Pokemon::new(id, name.to_string(), max_life_points);
    for move_ in moves {
        assert!(
            pokemon.learn_move(move_),
            "test pokemon rejected a move (duplicate id or full move list)"
        );
    }
    pokemon
}

/// Build a trainer owning the given pokemon.
pub fn test_trainer(id: u32, name: &str, pokemon: Vec<Pokemon>) -> Trainer {
    let mut trainer = Trainer::new(id, name.to_string());
    for p in pokemon {
        assert!(trainer.add_pokemon(p), "test trainer rejected a pokemon");
    }
    trainer
}

/// Scripted RNG with a generous buffer of zeros: the coin flip always puts
/// trainer1's side first and every uniform pick takes index 0.
pub fn scripted_rng() -> BattleRng {
    BattleRng::new_for_test(vec![0; 256])
}
