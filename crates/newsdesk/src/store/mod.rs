//! Store boundary: traits the core consumes and an in-memory reference
//! backend.

pub mod client;
pub mod memory;

pub use client::{ContentCrud, ContentStore, MediaStore, Subscriptions};
pub use memory::MemoryStore;
