//! Three-card readings: Past, Present, Future.
//!
//! ## Key Types
//!
//! - `Position`: the three slots, filled in fixed order
//! - `ReadingState`: selections plus the remaining pool
//! - `ReadingSession`: intro → dealing → selecting → complete flow
//! - `interpretation`: summary text once complete

pub mod interpretation;
pub mod position;
pub mod session;
pub mod state;

pub use interpretation::interpretation;
pub use position::{Position, SelectedCard};
pub use session::{ReadingPhase, ReadingSession};
pub use state::{ReadingState, SelectOutcome, READING_SIZE};
