//! Remote state vocabularies reported by the Trxps API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activation state of a payment method on the merchant's Trxps account.
///
/// A method that was never requested has no status at all; it is modelled as
/// `Option::None` and serialized as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethodStatus {
    /// Activated and ready for use.
    Activated,
    /// Waiting for the merchant to finish onboarding in the dashboard.
    PendingBoarding,
    /// Trxps has to review the request first.
    PendingReview,
    /// Activation relies on the merchant acting with an external party.
    PendingExternal,
    /// The request was rejected.
    Rejected,
}

impl PaymentMethodStatus {
    pub const NOT_REQUESTED: Option<Self> = None;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activated => "activated",
            Self::PendingBoarding => "pending-boarding",
            Self::PendingReview => "pending-review",
            Self::PendingExternal => "pending-external",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PaymentMethodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethodStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activated" => Ok(Self::Activated),
            "pending-boarding" => Ok(Self::PendingBoarding),
            "pending-review" => Ok(Self::PendingReview),
            "pending-external" => Ok(Self::PendingExternal),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown payment method status '{}'", other)),
        }
    }
}

/// Lifecycle state of a payment on the Trxps side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Open,
    Pending,
    Authorized,
    Canceled,
    Expired,
    Failed,
    Paid,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub const STATUS_OPEN: Self = Self::Open;

    /// A payment in a final state can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Canceled | Self::Expired | Self::Failed | Self::Paid
        )
    }
}
