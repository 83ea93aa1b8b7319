//! Core utilities and types for the loom code-model builder.
//!
//! This crate provides the leaf types shared by every other loom crate:
//! identifier case conversion and the member attribute set.

mod attributes;
mod utils;

pub use attributes::{MemberAttributes, Visibility};
pub use utils::{is_identifier, to_camel_case, to_pascal_case};
