//! The [`ListItem`] family: items stored in content lists.

use serde::{Deserialize, Serialize};

use super::generic::GenericContent;
use super::identity::User;
use super::impl_as_generic_content;
use crate::enums::{MemoType, Priority, Status};
use crate::reference::ContentListReference;

/// Base content type for list items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListItem {
    #[serde(flatten)]
    pub base: GenericContent,
}

/// Content type for custom list items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomListItem {
    #[serde(flatten)]
    pub base: ListItem,
    pub workflows_running: Option<bool>,
}

/// A short memo or post on a subject.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Memo {
    #[serde(flatten)]
    pub base: ListItem,
    pub date: Option<String>,
    pub memo_type: Option<MemoType>,
    pub see_also: Option<ContentListReference<GenericContent>>,
}

/// A task with assignment, scheduling, and completion tracking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(flatten)]
    pub base: ListItem,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub assigned_to: Option<ContentListReference<User>>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    /// Completion percentage.
    pub task_completion: Option<i32>,
    pub remaining_days: Option<i32>,
    pub due_text: Option<String>,
    pub due_css_class: Option<String>,
}

impl_as_generic_content!(ListItem, CustomListItem, Memo, Task);
