//! Namespace and result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// A naming registry that can be queried independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// ENS on Ethereum mainnet (primary)
    Ens,
    /// Basenames on Base
    Base,
    /// CyberID on Cyber
    Cyber,
}

impl Namespace {
    /// Every supported namespace
    pub const ALL: [Namespace; 3] = [Namespace::Ens, Namespace::Base, Namespace::Cyber];

    /// Get the namespace as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Ens => "ens",
            Namespace::Base => "base",
            Namespace::Cyber => "cyber",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ens" => Ok(Namespace::Ens),
            "base" | "basename" => Ok(Namespace::Base),
            "cyber" => Ok(Namespace::Cyber),
            other => Err(ResolveError::UnsupportedNamespace(other.to_string())),
        }
    }
}

/// Captured outcome of one namespace query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// A name is set
    Found(String),
    /// The query succeeded but no name is set
    NotFound,
    /// The query failed
    Failed(ResolveError),
}

impl ResolutionOutcome {
    /// Collapse into the caller-facing value; failures read as "not found"
    pub fn into_name(self) -> Option<String> {
        match self {
            ResolutionOutcome::Found(name) => Some(name),
            ResolutionOutcome::NotFound | ResolutionOutcome::Failed(_) => None,
        }
    }

    /// Whether the query failed
    pub fn is_failed(&self) -> bool {
        matches!(self, ResolutionOutcome::Failed(_))
    }
}

impl From<Result<Option<String>, ResolveError>> for ResolutionOutcome {
    fn from(result: Result<Option<String>, ResolveError>) -> Self {
        match result {
            Ok(Some(name)) if !name.is_empty() => ResolutionOutcome::Found(name),
            Ok(_) => ResolutionOutcome::NotFound,
            Err(e) => ResolutionOutcome::Failed(e),
        }
    }
}

/// Resolved names keyed by namespace
///
/// Every supported namespace is always present; `None` means not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameResults(BTreeMap<Namespace, Option<String>>);

impl NameResults {
    /// All supported namespaces mapped to "not found"
    pub fn empty() -> Self {
        Self(Namespace::ALL.iter().map(|ns| (*ns, None)).collect())
    }

    /// Get the resolved name for a namespace
    pub fn get(&self, namespace: Namespace) -> Option<&str> {
        self.0.get(&namespace).and_then(|name| name.as_deref())
    }

    /// Record a name for a namespace
    pub fn set(&mut self, namespace: Namespace, name: Option<String>) {
        self.0.insert(namespace, name);
    }

    /// Iterate over every namespace and its value
    pub fn iter(&self) -> impl Iterator<Item = (Namespace, Option<&str>)> {
        self.0.iter().map(|(ns, name)| (*ns, name.as_deref()))
    }

    /// Number of namespaces with a resolved name
    pub fn found_count(&self) -> usize {
        self.0.values().filter(|name| name.is_some()).count()
    }
}

impl Default for NameResults {
    fn default() -> Self {
        Self::empty()
    }
}
