//! Pokemon Arena Battle Engine
//!
//! Turn-based battle resolution between trainer rosters, plus arena
//! tournament orchestration over repeated encounters. Randomness is always
//! injected, so battles and whole tournaments replay deterministically from
//! a seed; all state mutation happens in place on the trainers the caller
//! hands in, and persisting it is the caller's job.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod moves;
pub mod pokemon;
pub mod teams;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---
// The most important types and entry points, importable from the crate root.

// Battle resolution and tournament orchestration.
pub use battle::arena::{run_arena, ArenaOutcome, ArenaProtocol, ARENA_ROUNDS};
pub use battle::engine::{deterministic_challenge, execute_battle, random_challenge};
pub use battle::state::{
    BattleEvent, BattleOutcome, BattleRng, EventBus, PokemonSnapshot, TrainerSnapshot,
};

// Core runtime types.
pub use moves::Move;
pub use pokemon::{AttackReport, Pokemon, MAX_MOVES};
pub use trainer::{Trainer, EXPERIENCE_PER_LEVEL};

// Roster template loading.
pub use teams::{
    create_trainer_from_template, load_trainer_template, MoveTemplate, PokemonTemplate,
    TrainerTemplate,
};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, EngineError, EngineResult, TrainerError, TrainerResult,
};
