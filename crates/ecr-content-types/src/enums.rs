//! # Field Enumerations
//!
//! The closed value sets referenced by fields of the content-type schema.
//! Every enumeration is string-backed: the wire value is the literal the
//! repository stores, which for the mode enumerations is a numeric string
//! (`"0"`..`"3"`) rather than a symbolic name. Consumers may depend on the
//! literal wire representation, so each enum pins it with explicit serde
//! renames, exposes it through `as_str()`, and parses it back through
//! `FromStr`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

macro_rules! string_backed_enum {
    (
        $(#[$outer:meta])*
        $name:ident {
            $(
                $(#[$inner:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$inner])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in canonical order.
            pub fn all() -> &'static [$name] {
                &[$(Self::$variant,)+]
            }

            /// The literal wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(SchemaError::UnknownVariant {
                        enumeration: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_backed_enum! {
    /// How versions are created for a content item.
    ///
    /// Stored as a numeric string by the repository.
    VersioningMode {
        /// Use the setting of the parent.
        Inherited = "0",
        /// No versioning; the content has a single version.
        None = "1",
        /// Only major versions are kept.
        MajorOnly = "2",
        /// Major and minor versions are kept.
        MajorAndMinor = "3",
    }
}

string_backed_enum! {
    /// The versioning mode children of a container inherit.
    InheritableVersioningMode {
        Inherited = "0",
        None = "1",
        MajorOnly = "2",
        MajorAndMinor = "3",
    }
}

string_backed_enum! {
    /// Whether saving a content item requires approval.
    ///
    /// Stored as a numeric string by the repository.
    ApprovingMode {
        /// Use the setting of the parent.
        Inherited = "0",
        Off = "1",
        On = "2",
    }
}

string_backed_enum! {
    /// The approving mode children of a container inherit.
    InheritableApprovingMode {
        Inherited = "0",
        Off = "1",
        On = "2",
    }
}

string_backed_enum! {
    /// Multistep-save state of a content item.
    SavingState {
        Finalized = "Finalized",
        Creating = "Creating",
        Modifying = "Modifying",
        ModifyingLocked = "ModifyingLocked",
    }
}

string_backed_enum! {
    /// How attachments of incoming e-mail are grouped under a content list.
    GroupAttachments {
        Email = "email",
        Root = "root",
        Subject = "subject",
        Sender = "sender",
    }
}

string_backed_enum! {
    /// Whether a smart folder query applies the default system filters.
    EnableAutofilters {
        Default = "Default",
        Enabled = "Enabled",
        Disabled = "Disabled",
    }
}

string_backed_enum! {
    /// Whether a smart folder query applies the lifespan filter.
    EnableLifespanFilter {
        Default = "Default",
        Enabled = "Enabled",
        Disabled = "Disabled",
    }
}

string_backed_enum! {
    /// Display language of a site or user, as an ISO 639-1 code.
    Language {
        English = "en",
        Hungarian = "hu",
        German = "de",
        French = "fr",
    }
}

string_backed_enum! {
    /// Classification of a memo item.
    MemoType {
        Generic = "generic",
        Iso = "iso",
        InternalAudit = "iaudit",
    }
}

string_backed_enum! {
    /// Priority of a task item.
    ///
    /// Stored as a numeric string by the repository.
    Priority {
        Urgent = "1",
        Normal = "2",
        NotUrgent = "3",
    }
}

string_backed_enum! {
    /// Progress status of a task item.
    Status {
        Pending = "pending",
        Active = "active",
        Completed = "completed",
        Deferred = "deferred",
        Waiting = "waiting",
    }
}

string_backed_enum! {
    /// Visibility of a stored content query.
    QueryType {
        Public = "Public",
        Private = "Private",
        NonDefined = "NonDefined",
    }
}

string_backed_enum! {
    /// Gender of a user.
    ///
    /// The repository stores the literal `"..."` for the unspecified
    /// choice.
    Gender {
        Unspecified = "...",
        Female = "Female",
        Male = "Male",
    }
}

string_backed_enum! {
    /// Marital status of a user.
    ///
    /// The repository stores the literal `"..."` for the unspecified
    /// choice.
    MaritalStatus {
        Unspecified = "...",
        Single = "Single",
        Married = "Married",
    }
}
