//! Concrete constraint types.
//!
//! Line-shaped kinds ([`Thermometer`], [`Palindrome`], [`GermanWhisper`],
//! [`CappedLine`]) and [`Snowball`] are discovered by backtracking search over
//! the grid. The remaining kinds are single cells or caller-supplied regions
//! and are found in one pass.

pub use self::{
    anti_king::AntiKing,
    capped_line::CappedLine,
    german_whisper::{GermanWhisper, WHISPER_MIN_DIFFERENCE},
    killer_cage::KillerCage,
    odd_even::OddEven,
    palindrome::Palindrome,
    renban_cage::{MAX_RENBAN_LEN, RenbanCage},
    snowball::Snowball,
    thermometer::Thermometer,
};

mod anti_king;
mod capped_line;
mod german_whisper;
mod killer_cage;
mod odd_even;
mod palindrome;
mod renban_cage;
mod snowball;
mod thermometer;
