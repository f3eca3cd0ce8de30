//! Partition engine: quicksort reified as a turn-based game.
//!
//! - `state` — segments, sides, score and the active partition
//! - `game` — the [`Game`] state machine
//! - `snapshot` — the display projection returned after every move

mod game;
mod snapshot;
mod state;

pub use game::Game;
pub use snapshot::{GameSnapshot, format_list};
pub use state::{ActivePartition, GameState, Move, Score, Segment, Side};
