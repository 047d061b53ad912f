//! A small social graph engine: users, bidirectional friendships, and
//! traversal queries over them (friends at distance k, common friends,
//! community detection, influence domain).
//!
//! The graph is built once, either programmatically or via
//! [`loader::load_dataset`], and then queried read-only. Queries never fail:
//! unknown identifiers behave as isolated users with no friendships.

pub mod datagen;
pub mod graph;
pub mod loader;
mod traversal;

pub use graph::SocialGraph;
pub use loader::{MalformedLine, Record, load_dataset};
