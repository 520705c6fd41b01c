//! Domain types and closed-form metrics for the wager variance simulator.

pub mod enums;
pub mod error;
pub mod metrics;
pub mod value_objects;

pub use enums::StakeMode;
pub use error::DomainError;
