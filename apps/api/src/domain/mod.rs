// Domain layer module exports
// Entities, rules and repository contracts; no transport or storage concerns

pub mod errors;
pub mod playlist;
pub mod repositories;
pub mod track;
pub mod user;

pub use errors::{DomainError, DomainResult};
