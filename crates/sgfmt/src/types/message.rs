use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string does not name any [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message key '{key}'")]
pub struct UnknownMessage {
    pub key: String,
}

macro_rules! messages {
    { $( $(#[$meta:meta])* $variant:ident => $key:literal, )+ } => {
        /// A translatable message identifier.
        ///
        /// The set is closed: every message a language file may define is
        /// listed here, and each one has a stable key used in language files.
        ///
        /// # Example
        ///
        /// ```
        /// use sgfmt::Message;
        ///
        /// assert_eq!(Message::Teleport.key(), "teleportMsg");
        /// assert_eq!("denyMsg".parse::<Message>().unwrap(), Message::Deny);
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Message {
            $( $(#[$meta])* $variant, )+
        }

        impl Message {
            /// Every message, in catalog order.
            pub const ALL: &'static [Message] = &[ $( Message::$variant, )+ ];

            /// The key identifying this message in language files.
            pub const fn key(self) -> &'static str {
                match self {
                    $( Message::$variant => $key, )+
                }
            }
        }
    };
}

messages! {
    /// Prepended to every message sent to a player.
    Prefix => "prefix",
    Teleport => "teleportMsg",
    Destroy => "destroyMsg",
    Invalid => "invalidMsg",
    Blocked => "blockMsg",
    DestinationEmpty => "destEmpty",
    Deny => "denyMsg",
    Reloaded => "reloaded",
    PermissionDenied => "permissionDenied",
    EconomyDeduct => "ecoDeduct",
    EconomyRefund => "ecoRefund",
    EconomyObtain => "ecoObtain",
    EconomyInsufficientFunds => "ecoInFunds",
    EconomyLoadError => "ecoLoadError",
    VaultLoadError => "vaultLoadError",
    VaultLoaded => "vaultLoaded",
    Create => "createMsg",
    CreateNetworkDeny => "createNetDeny",
    CreateGateDeny => "createGateDeny",
    CreatePersonal => "createPersonal",
    CreateNameLength => "createNameLength",
    CreateExists => "createExists",
    CreateFull => "createFull",
    CreateWorldDeny => "createWorldDeny",
    CreateConflict => "createConflict",
    SignRightClick => "signRightClick",
    SignToUse => "signToUse",
    SignRandom => "signRandom",
    SignDisconnected => "signDisconnected",
    SignInvalidGate => "signInvalidGate",
    BungeeDisabled => "bungeeDisabled",
    BungeeDeny => "bungeeDeny",
    BungeeEmpty => "bungeeEmpty",
    BungeeSign => "bungeeSign",
    PortalInfoTitle => "portalInfoTitle",
    PortalInfoName => "portalInfoName",
    PortalInfoDestination => "portalInfoDestination",
    PortalInfoNetwork => "portalInfoNetwork",
    PortalInfoServer => "portalInfoServer",
    /// Credit for whoever wrote the language file. May be empty.
    Author => "author",
}

impl Message {
    /// Look up a message by its language-file key.
    pub fn from_key(key: &str) -> Option<Message> {
        Message::ALL.iter().copied().find(|message| message.key() == key)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

impl FromStr for Message {
    type Err = UnknownMessage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::from_key(s).ok_or_else(|| UnknownMessage { key: s.to_string() })
    }
}

impl TryFrom<String> for Message {
    type Error = UnknownMessage;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl From<Message> for &'static str {
    fn from(message: Message) -> Self {
        message.key()
    }
}
