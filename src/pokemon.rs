use crate::battle::state::BattleRng;
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Maximum number of moves a pokemon can know at once.
pub const MAX_MOVES: usize = 4;

/// Report returned by a successful attack: which move connected and how much
/// damage actually landed after clamping against the target's remaining
/// health.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttackReport {
    pub move_id: u32,
    pub move_name: String,
    pub damage: u32,
}

/// A combat unit with bounded health and up to four moves.
///
/// A pokemon does not know which trainer owns it; ownership is expressed by
/// position in the trainer's roster and battles address combatants by index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pokemon {
    id: u32,
    name: String,
    life_points: u32,
    max_life_points: u32,
    moves: Vec<Move>,
}

impl Pokemon {
    /// Create a new pokemon at full health with an empty move list.
    pub fn new(id: u32, name: String, max_life_points: u32) -> Self {
        Pokemon {
            id,
            name,
            life_points: max_life_points,
            max_life_points,
            moves: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn life_points(&self) -> u32 {
        self.life_points
    }

    pub fn max_life_points(&self) -> u32 {
        self.max_life_points
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_alive(&self) -> bool {
        self.life_points > 0
    }

    /// Apply incoming damage, clamped so health never drops below zero.
    /// Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.life_points);
        self.life_points -= actual;
        actual
    }

    /// Restore full health and every move's uses.
    pub fn heal(&mut self) {
        self.life_points = self.max_life_points;
        for move_ in &mut self.moves {
            move_.reset();
        }
    }

    /// Teach a new move. Fails without mutating when the move id is already
    /// known or the pokemon is at the four-move cap.
    pub fn learn_move(&mut self, move_: Move) -> bool {
        if self.moves.iter().any(|m| m.id() == move_.id()) {
            return false;
        }
        if self.moves.len() >= MAX_MOVES {
            return false;
        }
        self.moves.push(move_);
        true
    }

    /// True while at least one move has uses left.
    pub fn has_usable_move(&self) -> bool {
        self.moves.iter().any(|m| m.can_use())
    }

    /// Pick uniformly among the moves that still have uses left. Returns an
    /// index into the move list, or None when the pool is exhausted. The
    /// RNG is only consumed when there is something to pick.
    pub fn select_usable_move(&self, rng: &mut BattleRng) -> Option<usize> {
        let usable: Vec<usize> = self
            .moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.can_use())
            .map(|(index, _)| index)
            .collect();

        if usable.is_empty() {
            return None;
        }

        let pick = rng.pick_index(usable.len(), "usable move selection");
        Some(usable[pick])
    }

    /// Attack the target with a randomly selected usable move. Returns None
    /// with no mutation on either side when no move is usable.
    pub fn attack(&mut self, target: &mut Pokemon, rng: &mut BattleRng) -> Option<AttackReport> {
        let index = self.select_usable_move(rng)?;

        let move_ = &mut self.moves[index];
        if !move_.use_move() {
            return None;
        }

        let move_id = move_.id();
        let move_name = move_.name().to_string();
        let damage = target.take_damage(move_.damage());

        Some(AttackReport {
            move_id,
            move_name,
            damage,
        })
    }
}
