//! Source scope coordinates and stable identity derivation.

use super::{ImportDomainError, IssueNumber, TaskId};
use serde::{Deserialize, Serialize};
use md5::{Digest, Md5};
use std::fmt;
use uuid::Uuid;

/// Byte written between key components before hashing.
///
/// Scope validation rejects this byte in owner and repository names, which
/// keeps `("ab", "c")` and `("a", "bc")` from hashing to the same input.
const KEY_SEPARATOR: &[u8] = b"\x00";

/// Supported external issue providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueProvider {
    /// GitHub issues.
    #[serde(rename = "github")]
    GitHub,
    /// GitLab issues.
    #[serde(rename = "gitlab")]
    GitLab,
}

impl IssueProvider {
    /// Returns provider name in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }

    /// Returns the two-character tag that prefixes identity digests.
    #[must_use]
    pub const fn source_tag(self) -> &'static str {
        match self {
            Self::GitHub => "GH",
            Self::GitLab => "GL",
        }
    }
}

impl TryFrom<&str> for IssueProvider {
    type Error = ImportDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "github" => Ok(Self::GitHub),
            "gitlab" => Ok(Self::GitLab),
            _ => Err(ImportDomainError::InvalidIssueProvider(value.to_owned())),
        }
    }
}

impl fmt::Display for IssueProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner and repository pair identifying an external issue collection.
///
/// Deserialization goes through [`IssueScope::new`], so a scope read from
/// configuration obeys the same component rules as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIssueScope")]
pub struct IssueScope {
    provider: IssueProvider,
    owner: String,
    name: String,
}

impl IssueScope {
    /// Creates a validated scope.
    ///
    /// # Errors
    ///
    /// Returns [`ImportDomainError::InvalidScopeOwner`] or
    /// [`ImportDomainError::InvalidScopeName`] when a component is empty or
    /// contains whitespace or NUL bytes. Surrounding whitespace is rejected,
    /// not trimmed, so `" acme"` never aliases `"acme"`.
    pub fn new(
        provider: IssueProvider,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ImportDomainError> {
        let owner_value = owner.into();
        if !is_valid_component(&owner_value) {
            return Err(ImportDomainError::InvalidScopeOwner(owner_value));
        }
        let name_value = name.into();
        if !is_valid_component(&name_value) {
            return Err(ImportDomainError::InvalidScopeName(name_value));
        }

        Ok(Self {
            provider,
            owner: owner_value,
            name: name_value,
        })
    }

    /// Creates a GitHub scope.
    ///
    /// # Errors
    ///
    /// See [`IssueScope::new`].
    pub fn github(
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ImportDomainError> {
        Self::new(IssueProvider::GitHub, owner, name)
    }

    /// Creates a scope from raw external values.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportDomainError`] when any component is invalid.
    pub fn from_parts(provider: &str, owner: &str, name: &str) -> Result<Self, ImportDomainError> {
        Self::new(IssueProvider::try_from(provider)?, owner, name)
    }

    /// Returns the issue provider.
    #[must_use]
    pub const fn provider(&self) -> IssueProvider {
        self.provider
    }

    /// Returns the scope owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the scope repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IssueScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.provider, self.owner, self.name)
    }
}

#[derive(Deserialize)]
struct RawIssueScope {
    provider: IssueProvider,
    owner: String,
    name: String,
}

impl TryFrom<RawIssueScope> for IssueScope {
    type Error = ImportDomainError;

    fn try_from(raw: RawIssueScope) -> Result<Self, Self::Error> {
        Self::new(raw.provider, raw.owner, raw.name)
    }
}

fn is_valid_component(raw: &str) -> bool {
    !raw.is_empty() && !raw.contains('\0') && !raw.chars().any(char::is_whitespace)
}

/// Composite external key of one issue: its scope plus its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey {
    scope: IssueScope,
    number: IssueNumber,
}

impl IssueKey {
    /// Creates a key from validated components.
    #[must_use]
    pub const fn new(scope: IssueScope, number: IssueNumber) -> Self {
        Self { scope, number }
    }

    /// Returns the issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    /// Derives the stable local task identifier for this key.
    ///
    /// The identifier is the 128-bit `MD5(tag 0x00 owner 0x00 name 0x00
    /// number)` digest used as UUID bytes without version bits. That is the
    /// layout existing dstask importers write, so GitHub records they created
    /// are found and merged rather than duplicated. It depends on nothing but
    /// the key, so title or body edits upstream never move the record.
    #[must_use]
    pub fn task_id(&self) -> TaskId {
        let mut hasher = Md5::new();
        hasher.update(self.scope.provider.source_tag().as_bytes());
        hasher.update(KEY_SEPARATOR);
        hasher.update(self.scope.owner.as_bytes());
        hasher.update(KEY_SEPARATOR);
        hasher.update(self.scope.name.as_bytes());
        hasher.update(KEY_SEPARATOR);
        hasher.update(self.number.to_string().as_bytes());
        let digest: [u8; 16] = hasher.finalize().into();
        TaskId::from_uuid(Uuid::from_bytes(digest))
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.scope, self.number)
    }
}
