//! Stateless text utilities
//!
//! Single-purpose functions with no coupling to the storage engine: case
//! transforms, a password-strength scorer, a random-string generator, a
//! weekday/time reporter, and a CSV field-table formatter. Everything here is
//! a pure function of its inputs; the two pieces that touch the outside world
//! (randomness, wall-clock time) do so behind injectable traits.

#![warn(clippy::all)]

pub mod clock;
pub mod password;
pub mod random;
pub mod table;
pub mod transform;

pub use clock::{server_time, weekday_name, SystemClock, TimeSource};
pub use password::{password_strength, MAX_SCORE};
pub use random::{rand_str, AlphanumericSource, CharSource};
pub use table::{render_table, TableError};
pub use transform::{substring, to_lower, to_upper, TransformError};
