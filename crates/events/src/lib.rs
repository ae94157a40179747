//! Domain events and their local distribution.
//!
//! - [`Event`]: facts emitted by aggregates.
//! - [`execute`]: decide-then-evolve helper for in-process command handling.
//! - [`EventBus`] / [`InMemoryEventBus`]: fan-out of notifications to views.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
