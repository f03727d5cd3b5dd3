//! Terminal-state evaluation: win lines and board fullness.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
