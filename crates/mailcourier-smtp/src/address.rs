//! Email address types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An address, optionally with a display name.
///
/// Deserializes from either `"user@example.com"` or
/// `{ "address": "user@example.com", "name": "User" }` (`displayName` is
/// accepted for `name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    /// Bare address.
    Plain(String),
    /// Address with a display name.
    Named {
        /// Email address.
        address: String,
        /// Display name (optional).
        #[serde(default, alias = "displayName", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl Address {
    /// Creates a bare address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self::Plain(address.into())
    }

    /// Creates an address with a display name.
    #[must_use]
    pub fn with_name(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::Named {
            address: address.into(),
            name: Some(name.into()),
        }
    }

    /// Returns the email address part.
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::Plain(address) | Self::Named { address, .. } => address,
        }
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Named { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
        }
    }

    /// Formats as `Name <address>`, or the bare address when there is no name.
    #[must_use]
    pub fn format(&self) -> String {
        self.name().map_or_else(
            || self.address().to_string(),
            |name| format!("{name} <{}>", self.address()),
        )
    }

    /// Converts to a lettre mailbox.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the address does not parse.
    pub fn to_mailbox(&self) -> Result<lettre::message::Mailbox> {
        let email = self
            .address()
            .parse::<lettre::Address>()
            .map_err(|e| Error::InvalidAddress(format!("{}: {e}", self.address())))?;
        Ok(lettre::message::Mailbox::new(
            self.name().map(str::to_string),
            email,
        ))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self::Plain(address)
    }
}

/// Formats an address as `Name <address>`, or the bare address.
#[must_use]
pub fn format_address(address: &Address) -> String {
    address.format()
}

/// One address or an ordered list of addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    /// A single address.
    One(Address),
    /// Several addresses, in order.
    Many(Vec<Address>),
}

impl Default for Recipients {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl Recipients {
    /// Returns the addresses in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Address] {
        match self {
            Self::One(address) => std::slice::from_ref(address),
            Self::Many(addresses) => addresses,
        }
    }

    /// Formats each address individually, preserving order.
    #[must_use]
    pub fn formatted(&self) -> Vec<String> {
        self.as_slice().iter().map(Address::format).collect()
    }

    /// Appends an address.
    pub fn push(&mut self, address: impl Into<Address>) {
        let address = address.into();
        match self {
            Self::One(first) => *self = Self::Many(vec![first.clone(), address]),
            Self::Many(addresses) => addresses.push(address),
        }
    }
}

impl From<Address> for Recipients {
    fn from(address: Address) -> Self {
        Self::One(address)
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self::One(address.into())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self::One(address.into())
    }
}

impl From<Vec<Address>> for Recipients {
    fn from(addresses: Vec<Address>) -> Self {
        Self::Many(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Self::Many(addresses.into_iter().map(Address::from).collect())
    }
}
