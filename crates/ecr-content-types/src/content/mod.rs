//! # Content-Type Descriptors
//!
//! The content repository organizes content types in a single-inheritance
//! tree rooted at [`GenericContent`]. This module mirrors that tree with
//! composable record types: each subtype embeds its parent's field set as
//! a flattened `base` field, so the resolved field set of a descriptor is
//! the union of its own declared fields and every ancestor's fields —
//! exactly what the repository serves.
//!
//! Instances are never constructed or mutated here; the descriptors exist
//! to give compile-time shape to data an external OData client exchanges
//! with the repository. The `Type` field is the discriminator consumers
//! dispatch on when the static type is the generic base.
//!
//! Every descriptor in the [`GenericContent`] tree implements
//! `AsRef<GenericContent>`, giving generic consumers uniform access to
//! the shared identifier, path, name, and discriminator fields.

mod file;
mod folder;
mod generic;
mod identity;
mod item;
mod list;
mod workspace;

pub use file::{
    DynamicJsonContent, ExecutableFile, File, HtmlTemplate, Image, IndexingSettings,
    LoggingSettings, PortalSettings, PreviewImage, Resource, Settings, SystemFile,
};
pub use folder::{
    Device, Domain, Domains, Email, Folder, OrganizationalUnit, PortalRoot, ProfileDomain,
    Profiles, Resources, RuntimeContentContainer, Sites, SmartFolder, SystemFolder, TrashBag,
};
pub use generic::{ContentLink, ContentType, GenericContent, Query};
pub use identity::{Group, User};
pub use item::{CustomListItem, ListItem, Memo, Task};
pub use list::{
    Aspect, ContentList, CustomList, DocumentLibrary, ImageLibrary, ItemList, Library, MemoList,
    TaskList,
};
pub use workspace::{Site, TrashBin, UserProfile, Workspace};

/// Implements `AsRef<GenericContent>` for descriptors whose `base` field
/// (transitively) reaches [`GenericContent`].
macro_rules! impl_as_generic_content {
    ($($descriptor:ty),+ $(,)?) => {
        $(
            impl AsRef<$crate::content::GenericContent> for $descriptor {
                fn as_ref(&self) -> &$crate::content::GenericContent {
                    self.base.as_ref()
                }
            }
        )+
    };
}
pub(crate) use impl_as_generic_content;
