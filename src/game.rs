//! The Stuck in the Mud turn loop, a thin consumer of [`RingList`].
//!
//! Players roll four dice per turn and score the face value of every die
//! that rolls free; a die showing 2 or 5 is stuck in the mud and scores
//! nothing. The first player to reach 100 points wins.
//!
//! The loop cycles through participants by repeatedly indexing positions
//! `0..len` each round; it never relies on iteration order, which runs the
//! opposite way. All narration and pacing happen through a caller-supplied
//! observer: the game itself performs no I/O and never sleeps.

use rand::Rng;

use crate::player::Player;
use crate::RingList;

/// Total score that ends the game.
pub const WINNING_SCORE: u32 = 100;

/// Number of dice each player rolls per turn.
pub const DICE_PER_TURN: usize = 4;

/// Die faces that get stuck in the mud and score nothing.
pub const STUCK_FACES: [u8; 2] = [2, 5];

/// What a single die did on one roll.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DieOutcome {
    /// The die was already stuck before this roll; it scores nothing.
    AlreadyStuck,
    /// The die rolled a stuck face; it scores nothing and is now stuck.
    Stuck(u8),
    /// The die rolled free; its face value is scored.
    Free(u8),
}

impl DieOutcome {
    /// Points this roll contributes to the turn score.
    pub fn points(&self) -> u32 {
        match *self {
            DieOutcome::Free(face) => u32::from(face),
            DieOutcome::AlreadyStuck | DieOutcome::Stuck(_) => 0,
        }
    }
}

/// Narration hooks emitted by the turn loop, in the order they happen.
///
/// Console output and artificial delays belong to the observer, never to
/// the game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameEvent {
    /// The game is about to begin.
    GameStarted,
    /// A player's turn is starting.
    TurnStarted {
        /// Whose turn it is.
        player: String,
    },
    /// One die was rolled.
    DieRolled {
        /// Whose die it was.
        player: String,
        /// 0-based die number.
        die: usize,
        /// What the die did.
        outcome: DieOutcome,
    },
    /// A turn finished and was scored.
    TurnScored {
        /// Whose turn it was.
        player: String,
        /// Points gained this turn.
        turn_score: u32,
        /// The player's new total.
        total: u32,
    },
    /// A player reached the winning score.
    GameWon {
        /// The winner.
        player: String,
        /// The winning total.
        score: u32,
    },
    /// One line of the final score table, emitted once per player after
    /// the win.
    FinalScore {
        /// The player.
        player: String,
        /// Their final total.
        score: u32,
    },
}

/// A game of Stuck in the Mud over a ring of players.
///
/// The RNG is injected so tests can drive the game deterministically.
pub struct Game<R: Rng> {
    players: RingList<Player>,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Sets up a game for the named players, all starting at zero.
    ///
    /// Note that positional indexing is newest-first, so the last player to
    /// join takes the first turn.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn new<I, S>(names: I, rng: R) -> Game<R>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players = RingList::new();
        for name in names {
            players.push(Player::new(name));
        }
        assert!(!players.is_empty(), "a game needs at least one player");
        Game { players, rng }
    }

    /// The ring of players, freshest joiner at position 0.
    pub fn players(&self) -> &RingList<Player> {
        &self.players
    }

    /// Runs rounds until a player reaches [`WINNING_SCORE`], reporting
    /// progress through `observer`. Returns the winner's name.
    pub fn play<F>(&mut self, observer: &mut F) -> String
    where
        F: FnMut(GameEvent),
    {
        observer(GameEvent::GameStarted);
        loop {
            for position in 0..self.players.len() {
                let turn_score = self.take_turn(position, observer);
                let (name, total) = {
                    let player = &mut self.players[position];
                    player.award(turn_score);
                    (player.name().to_owned(), player.score())
                };
                observer(GameEvent::TurnScored {
                    player: name.clone(),
                    turn_score,
                    total,
                });
                if total >= WINNING_SCORE {
                    observer(GameEvent::GameWon {
                        player: name.clone(),
                        score: total,
                    });
                    for i in 0..self.players.len() {
                        let player = &self.players[i];
                        observer(GameEvent::FinalScore {
                            player: player.name().to_owned(),
                            score: player.score(),
                        });
                    }
                    return name;
                }
            }
        }
    }

    /// Rolls one turn for the player at `position` and returns the points
    /// gained.
    fn take_turn<F>(&mut self, position: usize, observer: &mut F) -> u32
    where
        F: FnMut(GameEvent),
    {
        let name = self.players[position].name().to_owned();
        observer(GameEvent::TurnStarted {
            player: name.clone(),
        });
        self.players[position].clear_stuck();

        let mut rolls = [0u8; DICE_PER_TURN];
        let mut turn_score = 0;
        for die in 0..DICE_PER_TURN {
            rolls[die] = self.rng.random_range(1..=6);
            let outcome = classify(rolls[die], self.players[position].is_stuck(die));
            if let DieOutcome::Stuck(_) = outcome {
                let stuck = rolls.map(|face| STUCK_FACES.contains(&face));
                self.players[position].mark_stuck(stuck);
            }
            turn_score += outcome.points();
            observer(GameEvent::DieRolled {
                player: name.clone(),
                die,
                outcome,
            });
        }
        turn_score
    }
}

fn classify(face: u8, already_stuck: bool) -> DieOutcome {
    if already_stuck {
        DieOutcome::AlreadyStuck
    } else if STUCK_FACES.contains(&face) {
        DieOutcome::Stuck(face)
    } else {
        DieOutcome::Free(face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn stuck_faces_score_nothing() {
        for face in STUCK_FACES {
            let outcome = classify(face, false);
            assert_eq!(outcome, DieOutcome::Stuck(face));
            assert_eq!(outcome.points(), 0);
        }
    }

    #[test]
    fn free_faces_score_their_value() {
        for face in [1, 3, 4, 6] {
            let outcome = classify(face, false);
            assert_eq!(outcome, DieOutcome::Free(face));
            assert_eq!(outcome.points(), u32::from(face));
        }
    }

    #[test]
    fn stuck_dice_stay_unscored() {
        let outcome = classify(6, true);
        assert_eq!(outcome, DieOutcome::AlreadyStuck);
        assert_eq!(outcome.points(), 0);
    }

    #[test]
    fn last_joiner_takes_the_first_turn() {
        let game = Game::new(["Surafel", "Aymen"], StdRng::seed_from_u64(1));
        assert_eq!(game.players().get(0).map(Player::name), Some("Aymen"));
        assert_eq!(game.players().get(1).map(Player::name), Some("Surafel"));
    }

    #[test]
    #[should_panic]
    fn no_players_is_rejected() {
        Game::new(Vec::<String>::new(), StdRng::seed_from_u64(1));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        fn run(seed: u64) -> (String, Vec<GameEvent>) {
            let mut events = Vec::new();
            let mut game = Game::new(["Surafel", "Aymen"], StdRng::seed_from_u64(seed));
            let winner = game.play(&mut |event| events.push(event));
            (winner, events)
        }

        let (winner_a, events_a) = run(42);
        let (winner_b, events_b) = run(42);
        assert_eq!(winner_a, winner_b);
        assert_eq!(events_a, events_b);
    }

    #[test]
    fn event_stream_is_consistent() {
        let mut events = Vec::new();
        let mut game = Game::new(["Surafel", "Aymen", "Petra"], StdRng::seed_from_u64(7));
        let winner = game.play(&mut |event| events.push(event));

        assert_eq!(events.first(), Some(&GameEvent::GameStarted));

        // every scored point comes from a free die
        let mut rolled: HashMap<String, u32> = HashMap::new();
        let mut finals: HashMap<String, u32> = HashMap::new();
        let mut won = None;
        for event in &events {
            match event {
                GameEvent::DieRolled {
                    player, outcome, ..
                } => {
                    *rolled.entry(player.clone()).or_insert(0) += outcome.points();
                }
                GameEvent::TurnScored { player, total, .. } => {
                    assert_eq!(rolled[player], *total);
                }
                GameEvent::GameWon { player, score } => {
                    won = Some((player.clone(), *score));
                }
                GameEvent::FinalScore { player, score } => {
                    finals.insert(player.clone(), *score);
                }
                GameEvent::GameStarted | GameEvent::TurnStarted { .. } => {}
            }
        }

        let (won_by, winning_score) = won.expect("game ended without a winner");
        assert_eq!(won_by, winner);
        assert!(winning_score >= WINNING_SCORE);
        assert_eq!(finals.len(), 3);
        assert_eq!(finals[&winner], winning_score);
        for (player, score) in &finals {
            assert_eq!(rolled[player], *score);
        }
    }
}
