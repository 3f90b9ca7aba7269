//! Security principals stored as content: [`User`] and [`Group`].

use serde::{Deserialize, Serialize};

use super::generic::GenericContent;
use super::impl_as_generic_content;
use super::workspace::Workspace;
use crate::enums::{Gender, Language, MaritalStatus};
use crate::reference::{BinaryField, ContentListReference, ContentReference};

/// The basic user type, for intranet and extranet users alike.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(flatten)]
    pub base: GenericContent,
    pub login_name: Option<String>,
    pub job_title: Option<String>,
    pub enabled: Option<bool>,
    pub domain: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub image_ref: Option<ContentReference<GenericContent>>,
    pub image_data: Option<BinaryField>,
    pub avatar: Option<BinaryField>,
    pub password: Option<String>,
    pub sync_guid: Option<String>,
    pub last_sync: Option<String>,
    pub captcha: Option<String>,
    pub manager: Option<ContentReference<User>>,
    pub department: Option<String>,
    pub languages: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub birth_date: Option<String>,
    pub education: Option<String>,
    pub twitter_account: Option<String>,
    #[serde(rename = "FacebookURL")]
    pub facebook_url: Option<String>,
    #[serde(rename = "LinkedInURL")]
    pub linked_in_url: Option<String>,
    pub language: Option<Language>,
    pub followed_workspaces: Option<ContentListReference<Workspace>>,
    pub profile_path: Option<String>,
    pub last_logged_out: Option<String>,
}

/// A group of users and/or other groups, possibly synchronized from an
/// external directory.
///
/// Members may be users or groups; the element type is the generic base
/// and consumers dispatch on the `Type` discriminator of each member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    #[serde(flatten)]
    pub base: GenericContent,
    pub members: Option<ContentListReference<GenericContent>>,
    pub sync_guid: Option<String>,
    pub last_sync: Option<String>,
}

impl_as_generic_content!(User, Group);
