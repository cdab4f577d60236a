//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The rest of the application never sees raw message passing; it talks to
//! these domain clients.

pub mod actor_client;
pub mod order_client;
pub mod product_client;

pub use actor_client::*;
pub use order_client::*;
pub use product_client::*;
