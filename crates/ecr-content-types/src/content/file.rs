//! The [`File`] family: binary documents and the types derived from them.

use serde::{Deserialize, Serialize};

use super::generic::GenericContent;
use super::impl_as_generic_content;
use crate::reference::BinaryField;

/// A type for binary documents, images, etc.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct File {
    #[serde(flatten)]
    pub base: GenericContent,
    pub binary: Option<BinaryField>,
    /// Size of the binary stream in bytes.
    pub size: Option<i64>,
    /// Full size including all versions, in bytes.
    pub full_size: Option<i64>,
    pub page_count: Option<i64>,
    pub mime_type: Option<String>,
    pub shapes: Option<String>,
    pub page_attributes: Option<String>,
    pub watermark: Option<String>,
}

/// A file whose binary holds structured JSON consumed by applications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamicJsonContent {
    #[serde(flatten)]
    pub base: File,
}

/// Only content of this type can be executed directly (e.g. aspx files).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecutableFile {
    #[serde(flatten)]
    pub base: File,
}

/// HTML file containing a template fragment for various controls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HtmlTemplate {
    #[serde(flatten)]
    pub base: File,
    pub template_text: Option<String>,
}

/// A special document type for storing images.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    #[serde(flatten)]
    pub base: File,
    pub keywords: Option<String>,
    pub date_taken: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// A special content type for storing preview images.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreviewImage {
    #[serde(flatten)]
    pub base: Image,
}

/// Application or module settings stored in text format or custom fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(flatten)]
    pub base: File,
    /// Whether the settings can only be defined globally, not overridden
    /// locally.
    pub global_only: Option<bool>,
}

/// Settings for the indexing subsystem.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexingSettings {
    #[serde(flatten)]
    pub base: Settings,
    pub text_extractor_instances: Option<String>,
}

/// Settings for the logging subsystem.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingSettings {
    #[serde(flatten)]
    pub base: Settings,
}

/// Portal-wide settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortalSettings {
    #[serde(flatten)]
    pub base: Settings,
}

/// A special file for internal use in the system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemFile {
    #[serde(flatten)]
    pub base: File,
}

/// String or binary resource used to localize the system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(flatten)]
    pub base: SystemFile,
    pub downloads: Option<i64>,
}

impl_as_generic_content!(
    File,
    DynamicJsonContent,
    ExecutableFile,
    HtmlTemplate,
    Image,
    PreviewImage,
    Settings,
    IndexingSettings,
    LoggingSettings,
    PortalSettings,
    SystemFile,
    Resource,
);
