use pokemon_arena::battle::arena::{run_arena, ArenaProtocol};
use pokemon_arena::battle::engine::random_challenge;
use pokemon_arena::battle::state::BattleRng;
use pokemon_arena::errors::EngineResult;
use pokemon_arena::teams::{get_blue_trainer, get_red_trainer};
use pokemon_arena::trainer::Trainer;

fn main() {
    let red = match get_red_trainer() {
        Ok(trainer) => trainer,
        Err(e) => {
            println!("Error loading demo trainer Red: {}", e);
            return;
        }
    };
    let blue = match get_blue_trainer() {
        Ok(trainer) => trainer,
        Err(e) => {
            println!("Error loading demo trainer Blue: {}", e);
            return;
        }
    };

    if let Err(e) = run_demo(red, blue) {
        println!("Demo failed: {}", e);
    }
}

fn run_demo(mut red: Trainer, mut blue: Trainer) -> EngineResult<()> {
    let mut rng = BattleRng::new_random();

    // A single tavern challenge, with the battle log and the JSON shape a
    // hosting service would return.
    println!("=== Random challenge: {} vs {} ===", red.name(), blue.name());
    let outcome = random_challenge(&mut red, &mut blue, &mut rng)?;
    for event in &outcome.log {
        println!("  {}", event.format());
    }
    println!(
        "{} takes the challenge in {} rounds.",
        outcome.winner.name, outcome.rounds
    );
    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("Error serializing the outcome: {}", e),
    }
    println!();

    // A tavern bonus goes through the same rollover as battle wins.
    let levels = red.grant_experience(25)?;
    println!(
        "{} banked 25 bonus experience ({} level-ups) -> level {}, {}/10 experience",
        red.name(),
        levels,
        red.level(),
        red.experience()
    );
    println!();

    println!("=== Arena 1 (full reset, random picks) ===");
    let arena1 = run_arena(&mut red, &mut blue, ArenaProtocol::Arena1, &mut rng)?;
    println!(
        "{} wins the arena {}-{} ({} drawn rounds)",
        arena1.winner.name, arena1.trainer1_wins, arena1.trainer2_wins, arena1.drawn_rounds
    );
    println!();

    println!("=== Arena 2 (persistent damage, strongest picks) ===");
    red.heal_all();
    blue.heal_all();
    let arena2 = run_arena(&mut red, &mut blue, ArenaProtocol::Arena2, &mut rng)?;
    println!(
        "{} wins the arena {}-{} (early stop: {}, {} battles fought)",
        arena2.winner.name,
        arena2.trainer1_wins,
        arena2.trainer2_wins,
        arena2.early_stopped,
        arena2.battles.len()
    );
    println!(
        "Final records: {} is level {} ({}/10), {} is level {} ({}/10)",
        red.name(),
        red.level(),
        red.experience(),
        blue.name(),
        blue.level(),
        blue.experience()
    );

    Ok(())
}
