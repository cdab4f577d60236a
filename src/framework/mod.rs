//! Generic actor framework for resource management.
//!
//! The core building blocks for type-safe actor systems that manage
//! resource entities with CRUD operations, enumeration, and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait a resource type implements to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns a store of entities
//! - [`ResourceClient`] - Type-safe handle for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use self::core::*;
