//! The [`Workspace`] family: collaborative workspace roots and the
//! specialized workspaces derived from them.

use serde::{Deserialize, Serialize};

use super::folder::Folder;
use super::generic::GenericContent;
use super::identity::User;
use super::impl_as_generic_content;
use crate::enums::Language;
use crate::reference::ContentReference;

/// Collaborative workspace root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Workspace {
    #[serde(flatten)]
    pub base: Folder,
    pub manager: Option<ContentReference<User>>,
    pub deadline: Option<String>,
    pub is_active: Option<bool>,
    pub workspace_skin: Option<ContentReference<GenericContent>>,
    pub is_critical: Option<bool>,
    pub is_wall_container: Option<bool>,
    pub is_followed: Option<bool>,
}

/// The site provides a primary entry point to the portal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Site {
    #[serde(flatten)]
    pub base: Workspace,
    pub language: Option<Language>,
    pub enable_client_based_culture: Option<bool>,
    pub enable_user_based_culture: Option<bool>,
    /// Newline-separated list of URLs the site answers on.
    pub url_list: Option<String>,
    pub start_page: Option<ContentReference<GenericContent>>,
    pub login_page: Option<ContentReference<GenericContent>>,
    pub site_skin: Option<ContentReference<GenericContent>>,
    pub deny_cross_site_access: Option<bool>,
}

/// The system trash bin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrashBin {
    #[serde(flatten)]
    pub base: Workspace,
    /// Minimum time deleted items are retained, in days.
    pub min_retention_time: Option<i32>,
    /// Maximum size of the trash bin, in MB.
    pub size_quota: Option<i32>,
    /// Maximum number of items per trash bag.
    pub bag_capacity: Option<i32>,
}

/// Workspace handling all information and data for a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub base: Workspace,
    pub user: Option<ContentReference<User>>,
}

impl_as_generic_content!(Workspace, Site, TrashBin, UserProfile);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_manager_expanded_inline() {
        let json = r#"{
            "Id": 1347,
            "Name": "IT",
            "Path": "/Root/Sites/Default_Site/workspaces/IT",
            "IsActive": true,
            "Manager": {
                "Id": 7,
                "Name": "alba",
                "Path": "/Root/IMS/BuiltIn/Portal/alba",
                "FullName": "Alba Monday",
                "Type": "User"
            },
            "Type": "Workspace"
        }"#;
        let workspace: Workspace = serde_json::from_str(json).unwrap();
        let manager = workspace.manager.as_ref().unwrap().content().unwrap();
        assert_eq!(manager.full_name.as_deref(), Some("Alba Monday"));
        assert_eq!(workspace.is_active, Some(true));
    }

    #[test]
    fn site_language_wire_code() {
        let site = Site {
            language: Some(Language::Hungarian),
            url_list: Some("intranet.example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&site).unwrap();
        assert_eq!(json["Language"], "hu");
        assert_eq!(json["UrlList"], "intranet.example.com");
    }

    #[test]
    fn trash_bin_quota_fields() {
        let json = r#"{
            "Id": 9,
            "Name": "Trash",
            "Path": "/Root/Trash",
            "MinRetentionTime": 30,
            "SizeQuota": 500,
            "BagCapacity": 100,
            "Type": "TrashBin"
        }"#;
        let bin: TrashBin = serde_json::from_str(json).unwrap();
        assert_eq!(bin.min_retention_time, Some(30));
        assert_eq!(bin.bag_capacity, Some(100));
    }
}
