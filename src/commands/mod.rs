pub mod balance;
pub mod health;

pub use balance::*;
pub use health::*;
