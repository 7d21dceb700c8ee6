use serde::{Deserialize, Serialize};

/// A combat action with a fixed damage value and a per-battle usage ceiling.
///
/// The usage counter is private and only changes through [`Move::use_move`]
/// and [`Move::reset`], so `usage_count <= usage_limit` holds at all times.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Move {
    id: u32,
    name: String,
    damage: u32,
    usage_limit: u32,
    usage_count: u32,
}

impl Move {
    /// Create a new move with a fresh usage counter.
    pub fn new(id: u32, name: String, damage: u32, usage_limit: u32) -> Self {
        Move {
            id,
            name,
            damage,
            usage_limit,
            usage_count: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn usage_limit(&self) -> u32 {
        self.usage_limit
    }

    pub fn usage_count(&self) -> u32 {
        self.usage_count
    }

    /// True while the move still has uses left this battle.
    pub fn can_use(&self) -> bool {
        self.usage_count < self.usage_limit
    }

    /// Consume one use. Returns false without mutating anything when the
    /// ceiling is already reached.
    pub fn use_move(&mut self) -> bool {
        if self.can_use() {
            self.usage_count += 1;
            true
        } else {
            false
        }
    }

    /// Restore all uses. Called when the owning pokemon is healed.
    pub fn reset(&mut self) {
        self.usage_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_move_starts_unused() {
        let move_ = Move::new(1, "Tackle".to_string(), 10, 3);
        assert_eq!(move_.usage_count(), 0);
        assert!(move_.can_use());
    }

    #[test]
    fn test_use_move_stops_at_the_limit() {
        let mut move_ = Move::new(1, "Tackle".to_string(), 10, 2);

        assert!(move_.use_move());
        assert!(move_.use_move());
        assert!(!move_.can_use());

        // A failed use must leave the counter untouched.
        assert!(!move_.use_move());
        assert_eq!(move_.usage_count(), 2);
    }

    #[test]
    fn test_reset_restores_all_uses() {
        let mut move_ = Move::new(1, "Tackle".to_string(), 10, 1);
        assert!(move_.use_move());
        assert!(!move_.can_use());

        move_.reset();
        assert_eq!(move_.usage_count(), 0);
        assert!(move_.can_use());
    }

    #[test]
    fn test_zero_limit_move_is_never_usable() {
        let mut move_ = Move::new(1, "Splash".to_string(), 0, 0);
        assert!(!move_.can_use());
        assert!(!move_.use_move());
    }
}
