//! # Complex Value Shapes
//!
//! The non-scalar field shapes the content-type schema refers to:
//! deferred references, media resource descriptors, and action
//! descriptors. These mirror the OData wire forms the repository emits,
//! including the double-underscore envelope keys.

use serde::{Deserialize, Serialize};

/// The URI payload of a deferred reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeferredUriObject {
    /// OData navigation URI the related entity can be fetched from.
    pub uri: String,
}

/// Placeholder for a related entity that was not embedded inline and must
/// be fetched separately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeferredObject {
    /// The OData deferred envelope.
    #[serde(rename = "__deferred")]
    pub deferred: DeferredUriObject,
}

impl DeferredObject {
    /// A deferred reference to the given navigation URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            deferred: DeferredUriObject { uri: uri.into() },
        }
    }
}

/// The payload of a media resource descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaObject {
    /// URI for updating the binary stream.
    pub edit_media: String,
    /// URI the binary stream can be downloaded from.
    pub media_src: String,
    /// MIME type of the stream.
    pub content_type: String,
    /// ETag of the stream for concurrency control.
    pub media_etag: String,
}

/// Opaque descriptor of a binary media resource (the value of every
/// binary field in the schema).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaResourceObject {
    /// The OData media resource envelope.
    #[serde(rename = "__mediaresource")]
    pub media_resource: MediaObject,
}

/// An action exposed on a content item (the element type of `Actions`
/// fields).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionModel {
    pub name: String,
    pub display_name: String,
    pub index: i32,
    pub icon: String,
    pub url: String,
    #[serde(rename = "IsODataAction")]
    pub is_odata_action: bool,
    pub action_parameters: Vec<String>,
    /// UI scenario the action is offered in.
    pub scenario: String,
    pub forbidden: bool,
}
