//! Score bookkeeping for one Stuck in the Mud participant.

use crate::game::DICE_PER_TURN;

/// A participant in the dice game: a name, a running score, and the stuck
/// state of each die for the turn in progress.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    name: String,
    score: u32,
    stuck: [bool; DICE_PER_TURN],
}

impl Player {
    /// Creates a player with a zero score and no stuck dice.
    pub fn new<S: Into<String>>(name: S) -> Player {
        Player {
            name: name.into(),
            score: 0,
            stuck: [false; DICE_PER_TURN],
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's total score so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds one turn's points to the total score.
    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Whether the die at `die` (0-based) is stuck.
    ///
    /// # Panics
    ///
    /// Panics if `die >= DICE_PER_TURN`.
    pub fn is_stuck(&self, die: usize) -> bool {
        self.stuck[die]
    }

    /// Records the stuck state of every die at once.
    pub fn mark_stuck(&mut self, stuck: [bool; DICE_PER_TURN]) {
        self.stuck = stuck;
    }

    /// Frees all dice, done at the start of the player's turn.
    pub fn clear_stuck(&mut self) {
        self.stuck = [false; DICE_PER_TURN];
    }
}
