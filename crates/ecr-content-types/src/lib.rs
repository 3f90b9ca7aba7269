//! # ecr-content-types — Typed Content-Type Schema
//!
//! The ECR content repository stores many kinds of *content*, each with a
//! content type that defines its fields. Content types form a
//! single-inheritance tree: a type inherits every field of its ancestors
//! and adds its own. This crate mirrors that tree with plain serde record
//! types so an external OData client gets compile-time shape-checking on
//! the payloads it exchanges with the repository.
//!
//! This is a schema crate: it performs no I/O, holds no state, and defines
//! no behavior. Deserialization, validation, and query building belong to
//! the consuming client.
//!
//! ## Key Design Principles
//!
//! 1. **Inheritance by composition.** Each subtype embeds its parent as a
//!    `#[serde(flatten)] base` field, so a descriptor's serialized field
//!    set is the union of its own and all ancestor fields — the same
//!    resolution rule the repository applies.
//!
//! 2. **The wire representation is the contract.** Field names are the
//!    repository's PascalCase names; enumeration values are the exact
//!    literals the repository stores, including numeric strings like `"0"`
//!    for the mode enumerations.
//!
//! 3. **References take three interchangeable wire forms.** A reference
//!    field arrives as a numeric id, a deferred placeholder, or embedded
//!    content, depending on query expansion; [`ContentReference`] and
//!    [`ContentListReference`] model all three.
//!
//! 4. **The `Type` field is the discriminator.** Consumers holding a
//!    [`GenericContent`] dispatch on it to pick the concrete descriptor.
//!
//! ## Crate Policy
//!
//! - No dependencies beyond the serialization and error stack.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod complex;
pub mod content;
pub mod enums;
pub mod error;
pub mod reference;

// Re-export primary types for ergonomic imports.
pub use complex::{ActionModel, DeferredObject, DeferredUriObject, MediaObject, MediaResourceObject};
pub use content::{ContentType, File, Folder, GenericContent, Group, User, Workspace};
pub use error::SchemaError;
pub use reference::{BinaryField, ContentListReference, ContentReference};
