//! Activity domain module.
//!
//! Activities are the extracurricular offerings students sign up for.
//! Each activity owns an ordered roster of unique participant emails.

mod aggregate;
mod catalog;
mod errors;
mod policy;

pub use aggregate::Activity;
pub use catalog::mergington_catalog;
pub use errors::RosterError;
pub use policy::RosterPolicy;
