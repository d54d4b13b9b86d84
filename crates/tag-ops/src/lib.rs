//! # tag-ops
//!
//! Bridges binary tag trees into an **encoding-agnostic ops algebra**.
//!
//! A codec written against [`DynamicOps`] describes a data shape once and can
//! then read, write, and transcode it in any encoding that implements the
//! algebra. [`TagOps`] implements it for [`tag_tree::Value`], keeping integer
//! widths and compact arrays intact; [`JsonOps`] implements it for
//! `serde_json::Value`.
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use tag_ops::{DynamicOps, JsonOps, RecordBuilder, TagOps};
//! use tag_tree::Value;
//!
//! // Build a record field by field.
//! let mut builder = TagOps.map_builder();
//! builder
//!     .add("name", Value::from("Steve"))
//!     .add("scores", Value::IntArray(vec![95, 87]));
//! let record = builder.build(None).result().unwrap();
//! assert_eq!(record.to_string(), r#"{name: "Steve", scores: [I; 95, 87]}"#);
//!
//! // Transcode the tag tree to JSON.
//! let as_json = TagOps.convert_to(&JsonOps, &record).result().unwrap();
//! assert_eq!(as_json, json!({"name": "Steve", "scores": [95, 87]}));
//! ```
//!
//! ## Modules
//!
//! - [`ops`]: the [`DynamicOps`] trait
//! - [`tag_ops`]: [`TagOps`], the algebra over tag trees
//! - [`json`]: [`JsonOps`], the algebra over JSON values
//! - [`collector`]: [`ListCollector`], compact-preserving list merge
//! - [`merge`]: [`MapMerger`], string-keyed compound merge
//! - [`map_like`]: [`MapLike`] keyed views
//! - [`builder`]: [`RecordBuilder`] implementations
//! - [`result`]: [`DataResult`], success or error with a partial value
//! - [`number`]: [`Number`], width-tagged numbers
//! - [`error`]: Error types

pub mod builder;
pub mod collector;
pub mod error;
pub mod json;
pub mod map_like;
pub mod merge;
pub mod number;
pub mod ops;
pub mod result;
pub mod tag_ops;

pub use builder::{MergingRecordBuilder, RecordBuilder, TagRecordBuilder};
pub use collector::ListCollector;
pub use error::{OpsError, Shape};
pub use json::JsonOps;
pub use map_like::{CompoundView, MapLike};
pub use merge::MapMerger;
pub use number::Number;
pub use ops::DynamicOps;
pub use result::DataResult;
pub use tag_ops::TagOps;
