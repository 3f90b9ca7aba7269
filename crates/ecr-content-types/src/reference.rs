//! # Reference Fields
//!
//! A reference field identifies related content. On the wire it takes one
//! of three interchangeable forms, depending on how the query expanded the
//! field: a bare numeric identifier, a deferred placeholder, or the
//! referenced content embedded inline. [`ContentReference`] models the
//! zero-or-one case, [`ContentListReference`] the zero-or-many case.
//!
//! Variant order matters for the untagged unions: numbers only match the
//! identifier form and objects carrying `__deferred` are tried before
//! embedded content, so deserialization is unambiguous.

use serde::{Deserialize, Serialize};

use crate::complex::{DeferredObject, MediaResourceObject};

/// The value of every binary field in the schema.
pub type BinaryField = MediaResourceObject;

/// A single-valued reference field: zero-or-one related entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentReference<T> {
    /// Numeric identifier of the referenced content.
    Id(i64),
    /// Placeholder for a related entity that was not expanded inline.
    Deferred(DeferredObject),
    /// The referenced content embedded inline.
    Content(Box<T>),
}

impl<T> ContentReference<T> {
    /// The numeric identifier, when the reference is in identifier form.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// The embedded content, when the reference was expanded inline.
    pub fn content(&self) -> Option<&T> {
        match self {
            Self::Content(content) => Some(content),
            _ => None,
        }
    }

    /// Whether the related entity must be fetched separately.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<T> From<i64> for ContentReference<T> {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

/// A multi-valued reference field: zero-or-many related entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentListReference<T> {
    /// Placeholder for a relation that was not expanded inline.
    Deferred(DeferredObject),
    /// Numeric identifiers of the referenced content items.
    Ids(Vec<i64>),
    /// The referenced content items embedded inline.
    Contents(Vec<T>),
}

impl<T> ContentListReference<T> {
    /// The numeric identifiers, when the reference is in identifier form.
    pub fn ids(&self) -> Option<&[i64]> {
        match self {
            Self::Ids(ids) => Some(ids),
            _ => None,
        }
    }

    /// The embedded content items, when the relation was expanded inline.
    pub fn contents(&self) -> Option<&[T]> {
        match self {
            Self::Contents(contents) => Some(contents),
            _ => None,
        }
    }

    /// Whether the related entities must be fetched separately.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<T> From<Vec<i64>> for ContentListReference<T> {
    fn from(ids: Vec<i64>) -> Self {
        Self::Ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GenericContent;

    #[test]
    fn reference_from_bare_id() {
        let reference: ContentReference<GenericContent> = serde_json::from_str("42").unwrap();
        assert_eq!(reference.id(), Some(42));
        assert!(!reference.is_deferred());
    }

    #[test]
    fn reference_from_deferred_object() {
        let json = r#"{"__deferred":{"uri":"/odata.svc/Root('Content')/ModifiedBy"}}"#;
        let reference: ContentReference<GenericContent> = serde_json::from_str(json).unwrap();
        assert!(reference.is_deferred());
        assert_eq!(reference.content(), None);
    }

    #[test]
    fn reference_from_embedded_content() {
        let json = r#"{
            "Id": 7,
            "Name": "Admin",
            "Path": "/Root/IMS/BuiltIn/Portal/Admin",
            "Type": "User"
        }"#;
        let reference: ContentReference<GenericContent> = serde_json::from_str(json).unwrap();
        let content = reference.content().unwrap();
        assert_eq!(content.id, 7);
        assert_eq!(content.type_name, "User");
    }

    #[test]
    fn list_reference_from_id_array() {
        let reference: ContentListReference<GenericContent> =
            serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(reference.ids(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn list_reference_from_embedded_array() {
        let json = r#"[
            {"Id": 1, "Name": "A", "Path": "/Root/A", "Type": "Folder"},
            {"Id": 2, "Name": "B", "Path": "/Root/B", "Type": "Folder"}
        ]"#;
        let reference: ContentListReference<GenericContent> = serde_json::from_str(json).unwrap();
        let contents = reference.contents().unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[1].name, "B");
    }

    #[test]
    fn list_reference_from_deferred_object() {
        let json = r#"{"__deferred":{"uri":"/odata.svc/Root('Content')/Versions"}}"#;
        let reference: ContentListReference<GenericContent> = serde_json::from_str(json).unwrap();
        assert!(reference.is_deferred());
    }

    #[test]
    fn reference_serializes_back_to_same_form() {
        let reference: ContentReference<GenericContent> = ContentReference::from(99);
        assert_eq!(serde_json::to_string(&reference).unwrap(), "99");

        let deferred: ContentReference<GenericContent> =
            ContentReference::Deferred(DeferredObject::new("/odata.svc/x"));
        let json = serde_json::to_value(&deferred).unwrap();
        assert_eq!(json["__deferred"]["uri"], "/odata.svc/x");
    }
}
