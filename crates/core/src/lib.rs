//! `storefront-core`: domain building blocks shared by the storefront crates.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering, no transport).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SessionId};
pub use value_object::ValueObject;
