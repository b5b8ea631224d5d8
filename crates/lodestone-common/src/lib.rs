pub mod error;
pub mod types;

pub use error::{ErrorClass, LodestoneError};
pub use types::{PlacedBlock, Position, Result, UNIT_SIZE};
