use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default system language of the host platform.
pub const SYSTEM_LANGUAGE_ID: Uuid = Uuid::from_u128(0x2fbb5fe2_e29a_4d70_aa58_54ce7ce3e20b);
/// Live version of every versioned entity.
pub const LIVE_VERSION_ID: Uuid = Uuid::from_u128(0x0fa91ce3_e96a_4bc2_be4b_d9ce752c3425);

/// Who is driving the current call into the host data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Scope {
    System,
    #[serde(rename_all = "camelCase")]
    Admin { user_id: Uuid },
    #[serde(rename_all = "camelCase")]
    SalesChannel { sales_channel_id: Uuid },
}

/// Execution context handed to every repository and service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub scope: Scope,
    pub language_id: Uuid,
    pub version_id: Uuid,
}

impl Context {
    /// System scope, default language, live version.
    pub fn default_context() -> Self {
        Self {
            scope: Scope::System,
            language_id: SYSTEM_LANGUAGE_ID,
            version_id: LIVE_VERSION_ID,
        }
    }

    pub fn for_admin(user_id: Uuid) -> Self {
        Self {
            scope: Scope::Admin { user_id },
            ..Self::default_context()
        }
    }

    pub fn for_sales_channel(sales_channel_id: Uuid) -> Self {
        Self {
            scope: Scope::SalesChannel { sales_channel_id },
            ..Self::default_context()
        }
    }

    pub fn sales_channel_id(&self) -> Option<Uuid> {
        match self.scope {
            Scope::SalesChannel { sales_channel_id } => Some(sales_channel_id),
            _ => None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::default_context()
    }
}
