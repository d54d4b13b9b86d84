//! # tag-tree
//!
//! In-memory model of a **binary tag tree**: the typed value format used by
//! game save files and network payloads, where every node carries an explicit
//! width (`Byte`, `Short`, `Int`, ...) and integer sequences have compact,
//! homogeneous array forms distinct from generic lists.
//!
//! This crate only models the tree. Reading and writing the bytes of the
//! binary format is left to other crates; bridging the tree into a generic
//! encoding algebra lives in `tag-ops`.
//!
//! ## Quick start
//!
//! ```rust
//! use tag_tree::{Compound, Value};
//!
//! let player = Compound::new()
//!     .with("name", "Steve")
//!     .with("health", Value::Float(20.0))
//!     .with("inventory", Value::ByteArray(vec![1, 2, 3]));
//!
//! let value = Value::Compound(player);
//! assert_eq!(
//!     value.to_string(),
//!     r#"{name: "Steve", health: 20f, inventory: [B; 1b, 2b, 3b]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the [`Value`] sum type and [`TagType`] ids
//! - [`compound`]: insertion-ordered string-keyed [`Compound`]
//! - [`error`]: Error types
//!
//! `Display` (SNBT-like text) and `serde::Serialize` are implemented for
//! [`Value`] and [`Compound`].

pub mod compound;
mod display;
pub mod error;
mod serialize;
pub mod value;

pub use compound::Compound;
pub use error::TagError;
pub use value::{TagType, Value};
