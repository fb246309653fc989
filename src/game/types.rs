use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    Snake,
    Ladder,
}

/// A snake head or ladder foot occupying one board cell. Landing on the
/// cell relocates the player to `destination`. Direction (snakes backward,
/// ladders forward) is enforced by the generator, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardComponent {
    Snake { destination: usize },
    Ladder { destination: usize },
}

impl BoardComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            BoardComponent::Snake { .. } => ComponentKind::Snake,
            BoardComponent::Ladder { .. } => ComponentKind::Ladder,
        }
    }

    pub fn destination(&self) -> usize {
        match self {
            BoardComponent::Snake { destination } | BoardComponent::Ladder { destination } => {
                *destination
            }
        }
    }
}

/// Why a player was moved; selects which counter pair is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveCause {
    Snake,
    Ladder,
    Regular,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete { winner: String },
}

/// Per-player statistics handed to the reporter at game end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub has_won: bool,
    pub ladder_hits: u32,
    pub ladder_distance: i64,
    pub snake_hits: u32,
    pub snake_distance: i64,
    pub regular_moves: i64,
    pub turns_taken: u32,
}
