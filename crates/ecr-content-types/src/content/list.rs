//! The [`ContentList`] family: folders with user-defined columns, item
//! lists, and document/image libraries.

use serde::{Deserialize, Serialize};

use super::folder::Folder;
use super::generic::GenericContent;
use super::identity::User;
use super::impl_as_generic_content;
use crate::enums::GroupAttachments;
use crate::reference::{ContentListReference, ContentReference};

/// Generic content list type: a folder with a list definition and
/// user-defined columns, optionally fed by incoming e-mail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentList {
    #[serde(flatten)]
    pub base: Folder,
    /// The list definition XML describing the columns.
    pub content_list_definition: Option<String>,
    pub default_view: Option<String>,
    pub available_views: Option<ContentListReference<GenericContent>>,
    pub field_setting_contents: Option<ContentListReference<GenericContent>>,
    pub available_content_type_fields: Option<ContentListReference<GenericContent>>,
    /// Address incoming e-mail is accepted on for this list.
    pub list_email: Option<String>,
    pub exchange_subscription_id: Option<String>,
    pub overwrite_files: Option<bool>,
    pub group_attachments: Option<GroupAttachments>,
    pub save_original_email: Option<bool>,
    pub incoming_email_workflow: Option<ContentReference<GenericContent>>,
    pub only_from_local_groups: Option<bool>,
    pub inbox_folder: Option<String>,
    pub owner_when_visitor: Option<ContentReference<User>>,
}

/// Aspect base type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Aspect {
    #[serde(flatten)]
    pub base: ContentList,
    pub aspect_definition: Option<String>,
}

/// Base type for item lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemList {
    #[serde(flatten)]
    pub base: ContentList,
}

/// A custom list of content with user-defined columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomList {
    #[serde(flatten)]
    pub base: ItemList,
}

/// A list type for storing memos.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoList {
    #[serde(flatten)]
    pub base: ItemList,
}

/// A list type for storing tasks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskList {
    #[serde(flatten)]
    pub base: ItemList,
}

/// Base type for special lists storing documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Library {
    #[serde(flatten)]
    pub base: ContentList,
}

/// A special list for storing documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentLibrary {
    #[serde(flatten)]
    pub base: Library,
}

/// A special list for storing images.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageLibrary {
    #[serde(flatten)]
    pub base: Library,
    pub cover_image: Option<ContentReference<super::file::Image>>,
}

impl_as_generic_content!(
    ContentList,
    Aspect,
    ItemList,
    CustomList,
    MemoList,
    TaskList,
    Library,
    DocumentLibrary,
    ImageLibrary,
);
