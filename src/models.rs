//! Response payloads.
//!
//! The wire schemas belong to the server and change without notice, so each
//! endpoint gets a named payload type that wraps the decoded JSON document.
//! Use [`parse`](AdminsList::parse) to view a payload through your own
//! `Deserialize` type.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

macro_rules! payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub serde_json::Value);

        impl $name {
            /// Returns the underlying JSON document.
            pub fn into_inner(self) -> serde_json::Value {
                self.0
            }

            /// Deserializes the payload into a caller-defined type.
            ///
            /// # Errors
            ///
            /// Returns the serde error if the document does not fit `U`.
            pub fn parse<U: DeserializeOwned>(&self) -> serde_json::Result<U> {
                U::deserialize(&self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = serde_json::Value;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(payload: $name) -> Self {
                payload.0
            }
        }
    };
}

payload!(
    /// Administrators of a server.
    AdminsList
);
payload!(
    /// All families on a server.
    FamiliesList
);
payload!(
    /// A single family.
    Family
);
payload!(
    /// All fractions (factions) on a server.
    FractionsList
);
payload!(
    /// Members of one fraction.
    FractionMembers
);
payload!(
    /// Ghetto territory list.
    GhettoList
);
payload!(
    /// Fraction leaders.
    LeadersList
);
payload!(
    /// Fraction deputy leaders.
    SubleadersList
);
payload!(
    /// Property map with points of interest.
    PropertyMap
);
payload!(
    /// Players currently online.
    OnlineList
);
payload!(
    /// Result of a player lookup by nickname.
    PlayerSearch
);
payload!(
    /// Open interview ("sobes") announcements.
    SobesList
);
payload!(
    /// Global service status.
    ServiceStatus
);
