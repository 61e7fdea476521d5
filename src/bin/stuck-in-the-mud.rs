//! Console front end for Stuck in the Mud.
//!
//! All narration and pacing live here, outside the turn loop: the game
//! reports progress through events and this binary turns them into text
//! and delays.

use std::env;
use std::thread;
use std::time::Duration;

use ringlist::game::{DieOutcome, Game, GameEvent};

fn main() {
    let mut names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["Surafel".to_owned(), "Aymen".to_owned()];
    }

    let mut game = Game::new(names, rand::rng());
    game.play(&mut |event| narrate(&event));
}

fn narrate(event: &GameEvent) {
    match event {
        GameEvent::GameStarted => {
            println!("\nLet's start the game of Stuck in the Mud!\n");
        }
        GameEvent::TurnStarted { player } => {
            thread::sleep(Duration::from_millis(300));
            println!("{}'s turn:", player);
        }
        GameEvent::DieRolled { die, outcome, .. } => {
            match outcome {
                DieOutcome::AlreadyStuck => {
                    println!("Die {} was already stuck in the mud from the last turn!", die + 1);
                }
                DieOutcome::Stuck(face) => {
                    println!("Die {} rolls a {} and it's now stuck in the mud!", die + 1, face);
                }
                DieOutcome::Free(face) => {
                    println!("Die {} rolls a {} and it's free!", die + 1, face);
                }
            }
            thread::sleep(Duration::from_millis(500));
        }
        GameEvent::TurnScored {
            player,
            turn_score,
            total,
        } => {
            println!(
                "{} scores {} points this round and has a total score of {}\n",
                player, turn_score, total
            );
        }
        GameEvent::GameWon { player, score } => {
            println!("{} wins with a score of {}!", player, score);
            println!("\nFinal scores:");
        }
        GameEvent::FinalScore { player, score } => {
            println!("{}: {}", player, score);
        }
    }
}
