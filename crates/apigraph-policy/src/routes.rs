//! The route table: one record per endpoint, widened by OR on every
//! additional path that reaches the same endpoint.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::flags::FlagState;

/// Endpoints that are always public, whatever the inherited flags say.
pub const PUBLIC_ENDPOINTS: [&str; 3] = ["/login", "/signup", "/signout"];

/// Returns `true` for the hard-coded public endpoints.
pub fn is_public_endpoint(endpoint: &str) -> bool {
    PUBLIC_ENDPOINTS.contains(&endpoint)
}

/// Resolved policy for a single endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Lowercased HTTP method.
    pub method: String,
    pub name: String,
    pub auth: bool,
    pub admin: bool,
}

impl RouteRecord {
    pub fn new(method: &str, name: &str, flags: FlagState) -> Self {
        RouteRecord {
            method: method.to_lowercase(),
            name: name.to_string(),
            auth: flags.auth,
            admin: flags.admin,
        }
    }

    pub fn flags(&self) -> FlagState {
        FlagState {
            auth: self.auth,
            admin: self.admin,
        }
    }
}

/// Outcome of [`RouteTable::insert_or_merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    Merged,
}

/// Endpoint -> record, in first-visit order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable(IndexMap<String, RouteRecord>);

impl RouteTable {
    pub fn new() -> Self {
        RouteTable(IndexMap::new())
    }

    /// Inserts `record` under `endpoint`, or widens the existing record.
    ///
    /// On merge only `auth` and `admin` change (OR); `method` and `name`
    /// stay as the first path wrote them.
    pub fn insert_or_merge(&mut self, endpoint: &str, record: RouteRecord) -> MergeOutcome {
        match self.0.get_mut(endpoint) {
            Some(existing) => {
                let merged = existing.flags().union(record.flags());
                existing.auth = merged.auth;
                existing.admin = merged.admin;
                MergeOutcome::Merged
            }
            None => {
                self.0.insert(endpoint.to_string(), record);
                MergeOutcome::Inserted
            }
        }
    }

    pub fn get(&self, endpoint: &str) -> Option<&RouteRecord> {
        self.0.get(endpoint)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteRecord)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any route needs the auth middleware.
    pub fn any_auth(&self) -> bool {
        self.0.values().any(|r| r.auth)
    }

    /// Whether any route needs the admin middleware.
    pub fn any_admin(&self) -> bool {
        self.0.values().any(|r| r.admin)
    }
}
