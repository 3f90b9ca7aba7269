//! # ecr-security — Security Vocabulary for the ECR Content Repository
//!
//! Enumerations and request shapes used when querying or setting
//! permissions on repository content. These types carry no behavior:
//! they are the shared vocabulary between an external HTTP/OData client
//! and the remote repository, and they pin the exact wire representation
//! each value set uses.
//!
//! ## Wire Representations
//!
//! - [`IdentityKind`], [`PermissionLevel`] — PascalCase strings.
//! - [`Inheritance`] — lowercase strings (`"break"` / `"unbreak"`).
//! - [`PermissionValue`] — bare integers (`0` unset, `1` allow, `2` deny).
//! - [`PermissionRequestBody`] — an open-keyed JSON object; permission
//!   names are server-defined and must not be constrained client-side.
//!
//! ## Crate Policy
//!
//! - No dependencies beyond the serialization and error stack.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for the security vocabulary.
///
/// The only fallible surface in this crate is parsing a wire value back
/// into one of the closed enumerations.
#[derive(Error, Debug)]
pub enum SecurityError {
    /// A wire value did not match any variant of the named enumeration.
    #[error("unknown {enumeration} value: {value:?}")]
    UnknownValue {
        /// The enumeration that rejected the value.
        enumeration: &'static str,
        /// The rejected wire value.
        value: String,
    },
}

/// Classifies the set of security principals a permission query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityKind {
    /// Every principal kind.
    All,
    /// Users only.
    Users,
    /// Groups only.
    Groups,
    /// Organizational units only.
    OrganizationalUnits,
    /// Users and groups.
    UsersAndGroups,
    /// Users and organizational units.
    UsersAndOrganizationalUnits,
    /// Groups and organizational units.
    GroupsAndOrganizationalUnits,
}

impl IdentityKind {
    /// All identity kinds in canonical order.
    pub fn all() -> &'static [IdentityKind] {
        &[
            Self::All,
            Self::Users,
            Self::Groups,
            Self::OrganizationalUnits,
            Self::UsersAndGroups,
            Self::UsersAndOrganizationalUnits,
            Self::GroupsAndOrganizationalUnits,
        ]
    }

    /// The wire string for this identity kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Users => "Users",
            Self::Groups => "Groups",
            Self::OrganizationalUnits => "OrganizationalUnits",
            Self::UsersAndGroups => "UsersAndGroups",
            Self::UsersAndOrganizationalUnits => "UsersAndOrganizationalUnits",
            Self::GroupsAndOrganizationalUnits => "GroupsAndOrganizationalUnits",
        }
    }
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityKind {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Self::All),
            "Users" => Ok(Self::Users),
            "Groups" => Ok(Self::Groups),
            "OrganizationalUnits" => Ok(Self::OrganizationalUnits),
            "UsersAndGroups" => Ok(Self::UsersAndGroups),
            "UsersAndOrganizationalUnits" => Ok(Self::UsersAndOrganizationalUnits),
            "GroupsAndOrganizationalUnits" => Ok(Self::GroupsAndOrganizationalUnits),
            other => Err(SecurityError::UnknownValue {
                enumeration: "IdentityKind",
                value: other.to_string(),
            }),
        }
    }
}

/// Filter for permission queries: which grant states to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionLevel {
    /// Entries that are either allowed or denied.
    AllowedOrDenied,
    /// Allowed entries only.
    Allowed,
    /// Denied entries only.
    Denied,
}

impl PermissionLevel {
    /// All permission levels in canonical order.
    pub fn all() -> &'static [PermissionLevel] {
        &[Self::AllowedOrDenied, Self::Allowed, Self::Denied]
    }

    /// The wire string for this permission level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllowedOrDenied => "AllowedOrDenied",
            Self::Allowed => "Allowed",
            Self::Denied => "Denied",
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AllowedOrDenied" => Ok(Self::AllowedOrDenied),
            "Allowed" => Ok(Self::Allowed),
            "Denied" => Ok(Self::Denied),
            other => Err(SecurityError::UnknownValue {
                enumeration: "PermissionLevel",
                value: other.to_string(),
            }),
        }
    }
}

/// The three-state grant status of one permission for one identity on one
/// content item.
///
/// Serialized as a bare integer: `0` unset, `1` granted, `2` explicitly
/// denied. Consumers depend on the numeric wire form, so the conversion is
/// pinned with `From<PermissionValue> for u8` / `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PermissionValue {
    /// The permission is not set.
    Undefined,
    /// The permission is granted.
    Allow,
    /// The permission is explicitly denied.
    Deny,
}

impl PermissionValue {
    /// All permission values in canonical (numeric) order.
    pub fn all() -> &'static [PermissionValue] {
        &[Self::Undefined, Self::Allow, Self::Deny]
    }
}

impl From<PermissionValue> for u8 {
    fn from(value: PermissionValue) -> u8 {
        match value {
            PermissionValue::Undefined => 0,
            PermissionValue::Allow => 1,
            PermissionValue::Deny => 2,
        }
    }
}

impl TryFrom<u8> for PermissionValue {
    type Error = SecurityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::Allow),
            2 => Ok(Self::Deny),
            other => Err(SecurityError::UnknownValue {
                enumeration: "PermissionValue",
                value: other.to_string(),
            }),
        }
    }
}

/// A request toggling whether a content item inherits permission settings
/// from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inheritance {
    /// Stop inheriting from the parent.
    Break,
    /// Resume inheriting from the parent.
    Unbreak,
}

impl Inheritance {
    /// Both inheritance actions.
    pub fn all() -> &'static [Inheritance] {
        &[Self::Break, Self::Unbreak]
    }

    /// The lowercase wire string for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Unbreak => "unbreak",
        }
    }
}

impl std::fmt::Display for Inheritance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Inheritance {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "break" => Ok(Self::Break),
            "unbreak" => Ok(Self::Unbreak),
            other => Err(SecurityError::UnknownValue {
                enumeration: "Inheritance",
                value: other.to_string(),
            }),
        }
    }
}

/// One requested value in a [`PermissionRequestBody`].
///
/// Most entries are [`PermissionValue`] integers; a few request keys carry
/// request-specific strings instead (for example localization or custom
/// permission arguments), so the union is kept open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionEntry {
    /// A three-state permission value.
    Value(PermissionValue),
    /// A request-specific string argument.
    Text(String),
}

/// Payload of a permission-set request.
///
/// Permission names are dynamic and server-defined, so this is an
/// open-ended mapping rather than a fixed field list: any string key maps
/// to a requested [`PermissionEntry`]. The optional `identity` path names
/// the principal the entries apply to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionRequestBody {
    /// Repository path of the identity the permissions apply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    /// Permission name to requested value, flattened into the body.
    #[serde(flatten)]
    pub permissions: BTreeMap<String, PermissionEntry>,
}

impl PermissionRequestBody {
    /// A body for the given identity path with no entries yet.
    pub fn for_identity(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            permissions: BTreeMap::new(),
        }
    }

    /// Add one permission entry.
    pub fn set(mut self, permission: impl Into<String>, value: PermissionValue) -> Self {
        self.permissions
            .insert(permission.into(), PermissionEntry::Value(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_kind_symbol_set() {
        let expected = [
            "All",
            "Users",
            "Groups",
            "OrganizationalUnits",
            "UsersAndGroups",
            "UsersAndOrganizationalUnits",
            "GroupsAndOrganizationalUnits",
        ];
        let actual: Vec<&str> = IdentityKind::all().iter().map(|k| k.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn identity_kind_serde_matches_as_str() {
        for kind in IdentityKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: IdentityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }

    #[test]
    fn identity_kind_from_str_roundtrip() {
        for kind in IdentityKind::all() {
            let parsed: IdentityKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
        assert!("Everybody".parse::<IdentityKind>().is_err());
        assert!("users".parse::<IdentityKind>().is_err()); // case-sensitive
    }

    #[test]
    fn permission_level_symbol_set() {
        let actual: Vec<&str> = PermissionLevel::all().iter().map(|l| l.as_str()).collect();
        assert_eq!(actual, ["AllowedOrDenied", "Allowed", "Denied"]);
    }

    #[test]
    fn permission_level_serde_matches_as_str() {
        for level in PermissionLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
            let back: PermissionLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *level);
        }
    }

    #[test]
    fn permission_value_numeric_wire_form() {
        assert_eq!(serde_json::to_string(&PermissionValue::Undefined).unwrap(), "0");
        assert_eq!(serde_json::to_string(&PermissionValue::Allow).unwrap(), "1");
        assert_eq!(serde_json::to_string(&PermissionValue::Deny).unwrap(), "2");
    }

    #[test]
    fn permission_value_roundtrip() {
        for value in PermissionValue::all() {
            let json = serde_json::to_string(value).unwrap();
            let back: PermissionValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *value);
        }
    }

    #[test]
    fn permission_value_rejects_out_of_range() {
        assert!(PermissionValue::try_from(3).is_err());
        assert!(serde_json::from_str::<PermissionValue>("3").is_err());
        assert!(serde_json::from_str::<PermissionValue>("\"allow\"").is_err());
    }

    #[test]
    fn inheritance_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Inheritance::Break).unwrap(), "\"break\"");
        assert_eq!(serde_json::to_string(&Inheritance::Unbreak).unwrap(), "\"unbreak\"");
        assert_eq!("break".parse::<Inheritance>().unwrap(), Inheritance::Break);
        assert!("Break".parse::<Inheritance>().is_err());
    }

    #[test]
    fn request_body_flattens_permission_names() {
        let body = PermissionRequestBody::for_identity("/Root/IMS/BuiltIn/Portal/Editors")
            .set("Open", PermissionValue::Allow)
            .set("Save", PermissionValue::Deny);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["identity"], "/Root/IMS/BuiltIn/Portal/Editors");
        assert_eq!(json["Open"], 1);
        assert_eq!(json["Save"], 2);
        // Flattened: no nested "permissions" object on the wire.
        assert!(json.get("permissions").is_none());
    }

    #[test]
    fn request_body_accepts_server_defined_names() {
        let json = r#"{"identity":"/Root/IMS/BuiltIn/Portal/Visitor","See":1,"RunApplication":2,"CustomPermission17":0}"#;
        let body: PermissionRequestBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.permissions.len(), 3);
        assert_eq!(
            body.permissions.get("CustomPermission17"),
            Some(&PermissionEntry::Value(PermissionValue::Undefined))
        );
    }

    #[test]
    fn request_body_keeps_string_entries() {
        let json = r#"{"See":1,"localization":"explicit"}"#;
        let body: PermissionRequestBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.identity, None);
        assert_eq!(
            body.permissions.get("localization"),
            Some(&PermissionEntry::Text("explicit".to_string()))
        );
    }

    #[test]
    fn request_body_roundtrip() {
        let body = PermissionRequestBody::for_identity("/Root/IMS/BuiltIn/Portal/Admin")
            .set("See", PermissionValue::Allow)
            .set("Delete", PermissionValue::Undefined);
        let json = serde_json::to_string(&body).unwrap();
        let back: PermissionRequestBody = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
    }
}
