use crate::game::types::{ComponentKind, MoveCause, PlayerSummary};

/// Presentation seam: the simulation announces what happened, the reporter
/// decides how (or whether) to render it.
pub trait Reporter {
    fn announce_roll(&mut self, player: &str, position: usize, roll: usize);
    fn announce_move(&mut self, player: &str, from: usize, to: usize, cause: MoveCause);
    fn announce_win(&mut self, player: &str);
    fn announce_component(&mut self, kind: ComponentKind, trigger: usize, destination: usize);
    fn announce_summary(&mut self, summary: &PlayerSummary);
}

/// Renders the game as status lines on stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn announce_roll(&mut self, player: &str, position: usize, roll: usize) {
        println!();
        println!("{player}'s turn.");
        println!("Currently at {position} and rolled a {roll}");
    }

    fn announce_move(&mut self, player: &str, from: usize, to: usize, cause: MoveCause) {
        match cause {
            MoveCause::Snake => println!("\tIt's a snake!\tMoving {player} from {from} to {to}"),
            MoveCause::Ladder => println!("\tIt's a ladder!\tMoving {player} from {from} to {to}"),
            MoveCause::Regular => println!("\tMoving {player} from {from} to {to}"),
        }
    }

    fn announce_win(&mut self, player: &str) {
        println!("{player} has won!!!!");
    }

    fn announce_component(&mut self, kind: ComponentKind, trigger: usize, destination: usize) {
        let kind = match kind {
            ComponentKind::Snake => "Snake",
            ComponentKind::Ladder => "Ladder",
        };
        println!("{kind} at {trigger} leads to {destination}");
    }

    fn announce_summary(&mut self, summary: &PlayerSummary) {
        if summary.has_won {
            println!("-!-!- WINNER -- {} Details -- WINNER -!-!-", summary.name);
        } else {
            println!("----- {} Details -----", summary.name);
        }
        println!(
            "\tLadders: {} in {} climbs",
            summary.ladder_distance, summary.ladder_hits
        );
        println!(
            "\tSnakes: {} in {} slides",
            summary.snake_distance, summary.snake_hits
        );
        println!(
            "\tRegular moves: {} in {} turns",
            summary.regular_moves, summary.turns_taken
        );
        println!();
    }
}

/// Discards every announcement. Useful for tests and batch simulation.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn announce_roll(&mut self, _player: &str, _position: usize, _roll: usize) {}
    fn announce_move(&mut self, _player: &str, _from: usize, _to: usize, _cause: MoveCause) {}
    fn announce_win(&mut self, _player: &str) {}
    fn announce_component(&mut self, _kind: ComponentKind, _trigger: usize, _destination: usize) {}
    fn announce_summary(&mut self, _summary: &PlayerSummary) {}
}
