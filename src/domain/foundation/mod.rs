//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the activity roster domain.

mod errors;
mod names;

pub use errors::{ErrorCode, ValidationError};
pub use names::{ActivityName, ParticipantEmail};
