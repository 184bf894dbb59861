//! Per-path and process-wide middleware flags.

use serde::{Deserialize, Serialize};

use apigraph_core::Properties;

/// Auth/admin requirements carried along one traversal path.
///
/// `Copy` on purpose: every enqueued child gets its own value, so an
/// override in one subtree is never seen by a sibling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagState {
    pub auth: bool,
    pub admin: bool,
}

impl FlagState {
    pub const PUBLIC: FlagState = FlagState {
        auth: false,
        admin: false,
    };

    /// Applies a node's explicit `auth_required` / `admin_required` values.
    ///
    /// Overwrites rather than ORs: an explicit `false` downgrades an
    /// inherited `true`.
    pub fn overridden_by(self, props: &Properties) -> FlagState {
        FlagState {
            auth: props.flag("auth_required").unwrap_or(self.auth),
            admin: props.flag("admin_required").unwrap_or(self.admin),
        }
    }

    /// Logical OR of two flag sets.
    pub fn union(self, other: FlagState) -> FlagState {
        FlagState {
            auth: self.auth || other.auth,
            admin: self.admin || other.admin,
        }
    }
}

/// Process-wide middleware switches. Monotonic: once raised they stay raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalFlags {
    pub cors: bool,
    pub logging: bool,
}

impl GlobalFlags {
    pub fn raise_cors(&mut self) {
        self.cors = true;
    }

    pub fn raise_logging(&mut self) {
        self.logging = true;
    }

    /// Raises whatever a node's properties ask for: `allowed_origins`
    /// (any value) enables CORS, a truthy `log_requests` enables logging.
    pub fn observe(&mut self, props: &Properties) {
        if props.contains("allowed_origins") {
            self.raise_cors();
        }
        if props.is_truthy("log_requests") {
            self.raise_logging();
        }
    }
}
