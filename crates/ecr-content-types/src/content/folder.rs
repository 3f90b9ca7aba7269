//! The [`Folder`] family: plain containers and their specializations.
//! Content lists and workspaces are folders too, but large enough families
//! to live in their own modules.

use serde::{Deserialize, Serialize};

use super::generic::GenericContent;
use super::impl_as_generic_content;
use crate::enums::{EnableAutofilters, EnableLifespanFilter};
use crate::reference::ContentReference;

/// Use folders to group content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Folder {
    #[serde(flatten)]
    pub base: GenericContent,
}

/// Defines a device to browse the portal from, e.g. a tablet or a phone
/// type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    #[serde(flatten)]
    pub base: Folder,
    pub user_agent_pattern: Option<String>,
}

/// A centrally-managed group of users and/or computers, possibly
/// synchronized from an external LDAP directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Domain {
    #[serde(flatten)]
    pub base: Folder,
    pub sync_guid: Option<String>,
    pub last_sync: Option<String>,
}

/// The container type for domains; a single instance lives at /Root/IMS.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Domains {
    #[serde(flatten)]
    pub base: Folder,
}

/// Email content type containing attachments as children content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    #[serde(flatten)]
    pub base: Folder,
    pub from: Option<String>,
    pub body: Option<String>,
    pub sent: Option<String>,
}

/// Organizational unit (OU): classifies objects located in directories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationalUnit {
    #[serde(flatten)]
    pub base: Folder,
    pub sync_guid: Option<String>,
    pub last_sync: Option<String>,
}

/// The repository master node; one installation has a single root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortalRoot {
    #[serde(flatten)]
    pub base: Folder,
}

/// Container for user profiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileDomain {
    #[serde(flatten)]
    pub base: Folder,
}

/// The container type for profiles; a single instance lives at
/// /Root/Profiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profiles {
    #[serde(flatten)]
    pub base: Folder,
}

/// For internal use only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuntimeContentContainer {
    #[serde(flatten)]
    pub base: Folder,
}

/// The container type for sites; a single instance lives at /Root/Sites.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sites {
    #[serde(flatten)]
    pub base: Folder,
}

/// Groups content by a stored repository query instead of containment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmartFolder {
    #[serde(flatten)]
    pub base: Folder,
    pub query: Option<String>,
    pub enable_autofilters: Option<EnableAutofilters>,
    pub enable_lifespan_filter: Option<EnableLifespanFilter>,
}

/// System folders store configuration and logic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemFolder {
    #[serde(flatten)]
    pub base: Folder,
}

/// The container type for localization resources; a single instance lives
/// at /Root/Localization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resources {
    #[serde(flatten)]
    pub base: SystemFolder,
}

/// An atomic container for deleted items stored for undeletion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrashBag {
    #[serde(flatten)]
    pub base: Folder,
    pub keep_until: Option<String>,
    pub original_path: Option<String>,
    pub workspace_relative_path: Option<String>,
    pub workspace_id: Option<i64>,
    pub deleted_content: Option<ContentReference<GenericContent>>,
}

impl_as_generic_content!(
    Folder,
    Device,
    Domain,
    Domains,
    Email,
    OrganizationalUnit,
    PortalRoot,
    ProfileDomain,
    Profiles,
    RuntimeContentContainer,
    Sites,
    SmartFolder,
    SystemFolder,
    Resources,
    TrashBag,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_folder_filter_enums() {
        let json = r#"{
            "Id": 2201,
            "Name": "RecentDocs",
            "Path": "/Root/Content/RecentDocs",
            "Query": "+TypeIs:File +ModificationDate:>@@CurrentDate-7days@@",
            "EnableAutofilters": "Disabled",
            "EnableLifespanFilter": "Default",
            "Type": "SmartFolder"
        }"#;
        let folder: SmartFolder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.enable_autofilters, Some(EnableAutofilters::Disabled));
        assert_eq!(folder.enable_lifespan_filter, Some(EnableLifespanFilter::Default));
        assert_eq!(folder.base.base.type_name, "SmartFolder");
    }

    #[test]
    fn trash_bag_remembers_the_original_location() {
        let bag = TrashBag {
            original_path: Some("/Root/Content/Documents/old.docx".to_string()),
            workspace_id: Some(1347),
            deleted_content: Some(ContentReference::from(4100)),
            ..Default::default()
        };
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(json["OriginalPath"], "/Root/Content/Documents/old.docx");
        assert_eq!(json["DeletedContent"], 4100);
    }

    #[test]
    fn empty_subtypes_add_no_fields() {
        let folder = serde_json::to_value(Folder::default()).unwrap();
        let system_folder = serde_json::to_value(SystemFolder::default()).unwrap();
        let resources = serde_json::to_value(Resources::default()).unwrap();
        assert_eq!(folder.as_object().unwrap().len(), system_folder.as_object().unwrap().len());
        assert_eq!(folder.as_object().unwrap().len(), resources.as_object().unwrap().len());
    }
}
