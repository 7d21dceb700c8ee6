use std::fmt;

/// Main error type for the arena engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error raised while resolving a battle or an arena run
    Battle(BattleError),
    /// Error raised by a trainer-level operation
    Trainer(TrainerError),
}

/// Errors raised by battle and arena resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// The trainer owns no pokemon at all, so a battle cannot start
    EmptyRoster { trainer: String },
    /// The trainer owns pokemon but none of them is alive
    NoLivingPokemon { trainer: String },
    /// A combatant index does not point at a pokemon in the roster
    InvalidPokemonIndex(usize),
    /// Neither combatant has a usable move left; no further damage is
    /// possible and the battle cannot produce a winner
    Stalemate { rounds: u32 },
}

/// Errors raised by trainer-level operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    /// An experience grant must be a positive amount
    InvalidExperienceAmount(i32),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Battle(err) => write!(f, "Battle error: {}", err),
            EngineError::Trainer(err) => write!(f, "Trainer error: {}", err),
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::EmptyRoster { trainer } => {
                write!(f, "Trainer {} has no pokemon", trainer)
            }
            BattleError::NoLivingPokemon { trainer } => {
                write!(f, "Trainer {} has no living pokemon", trainer)
            }
            BattleError::InvalidPokemonIndex(index) => {
                write!(f, "Invalid pokemon index: {}", index)
            }
            BattleError::Stalemate { rounds } => {
                write!(f, "Neither side can attack; stalemate after {} rounds", rounds)
            }
        }
    }
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerError::InvalidExperienceAmount(amount) => {
                write!(f, "A positive experience amount is required, got {}", amount)
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for BattleError {}
impl std::error::Error for TrainerError {}

impl From<BattleError> for EngineError {
    fn from(err: BattleError) -> Self {
        EngineError::Battle(err)
    }
}

impl From<TrainerError> for EngineError {
    fn from(err: TrainerError) -> Self {
        EngineError::Trainer(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using TrainerError
pub type TrainerResult<T> = Result<T, TrainerError>;
