pub mod balance;
pub mod credential;
pub mod settings;

pub use balance::*;
pub use credential::*;
pub use settings::*;
