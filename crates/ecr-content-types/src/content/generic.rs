//! The two roots of the schema — [`ContentType`] and [`GenericContent`] —
//! plus the direct [`GenericContent`] subtypes that fit no larger family.

use serde::{Deserialize, Serialize};

use super::impl_as_generic_content;
use super::workspace::Workspace;
use crate::complex::{ActionModel, MediaResourceObject};
use crate::enums::{
    ApprovingMode, InheritableApprovingMode, InheritableVersioningMode, QueryType, SavingState,
    VersioningMode,
};
use crate::reference::{ContentListReference, ContentReference};

/// A content type definition: a reusable set of fields applied to certain
/// content. Its own root — content type definitions do not inherit the
/// generic content fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentType {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub version_id: Option<i64>,
    pub name: String,
    pub created_by_id: Option<i64>,
    pub modified_by_id: Option<i64>,
    pub version: Option<String>,
    pub path: String,
    pub depth: Option<i32>,
    pub is_system_content: Option<bool>,
    /// Fully qualified name of the handler class implementing this type.
    pub handler_name: Option<String>,
    pub parent_type_name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// The content type definition XML.
    pub binary: Option<MediaResourceObject>,
    pub created_by: Option<ContentReference<GenericContent>>,
    pub creation_date: Option<String>,
    pub modified_by: Option<ContentReference<GenericContent>>,
    pub modification_date: Option<String>,
    pub enable_lifespan: Option<bool>,
    pub actions: Option<ContentListReference<ActionModel>>,
    /// Discriminator naming this content's own type.
    #[serde(rename = "Type")]
    pub type_name: String,
}

/// The base content type of the repository. Every other descriptor in the
/// tree resolves to these fields plus its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenericContent {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub owner: Option<ContentReference<GenericContent>>,
    pub version_id: Option<i64>,
    pub icon: Option<String>,
    pub name: String,
    pub created_by_id: Option<i64>,
    pub modified_by_id: Option<i64>,
    pub version: Option<String>,
    pub path: String,
    pub depth: Option<i32>,
    pub is_system_content: Option<bool>,
    pub is_folder: Option<bool>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub hidden: Option<bool>,
    pub index: Option<i32>,
    pub enable_lifespan: Option<bool>,
    pub valid_from: Option<String>,
    pub valid_till: Option<String>,
    pub allowed_child_types: Option<ContentListReference<GenericContent>>,
    pub effective_allowed_child_types: Option<ContentListReference<GenericContent>>,
    pub versioning_mode: Option<VersioningMode>,
    pub inheritable_versioning_mode: Option<InheritableVersioningMode>,
    pub created_by: Option<ContentReference<GenericContent>>,
    pub creation_date: Option<String>,
    pub modified_by: Option<ContentReference<GenericContent>>,
    pub modification_date: Option<String>,
    pub approving_mode: Option<ApprovingMode>,
    pub inheritable_approving_mode: Option<InheritableApprovingMode>,
    pub locked: Option<bool>,
    pub checked_out_to: Option<ContentReference<GenericContent>>,
    pub trash_disabled: Option<bool>,
    pub saving_state: Option<SavingState>,
    pub extension_data: Option<String>,
    pub browse_application: Option<ContentReference<GenericContent>>,
    pub approvable: Option<bool>,
    pub is_taggable: Option<bool>,
    pub tags: Option<String>,
    pub is_rateable: Option<bool>,
    pub rate_str: Option<String>,
    pub rate_avg: Option<f64>,
    pub rate_count: Option<i32>,
    pub rate: Option<String>,
    pub publishable: Option<bool>,
    pub versions: Option<ContentListReference<GenericContent>>,
    pub check_in_comments: Option<String>,
    pub reject_reason: Option<String>,
    pub workspace: Option<ContentReference<Workspace>>,
    pub browse_url: Option<String>,
    pub actions: Option<ContentListReference<ActionModel>>,
    /// Discriminator naming this content's concrete type.
    #[serde(rename = "Type")]
    pub type_name: String,
}

impl AsRef<GenericContent> for GenericContent {
    fn as_ref(&self) -> &GenericContent {
        self
    }
}

/// A content that propagates most of the fields of another content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentLink {
    #[serde(flatten)]
    pub base: GenericContent,
    pub link: Option<ContentReference<GenericContent>>,
}

/// A stored content query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Query {
    #[serde(flatten)]
    pub base: GenericContent,
    pub query: Option<String>,
    pub query_type: Option<QueryType>,
}

impl_as_generic_content!(ContentLink, Query);
