use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Custom field carrying the Trxps method name on a host payment method.
pub const CUSTOM_FIELD_METHOD_NAME: &str = "trxps_payment_method_name";

/// Identity of a registered handler, rebuilt on every service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodDescriptor {
    pub name: String,
    pub description: String,
    pub handler_identifier: String,
}

/// A payment method as stored by the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRecord {
    pub id: Uuid,
    pub handler_identifier: String,
    pub name: String,
    pub description: String,
    pub plugin_id: Option<Uuid>,
    pub media_id: Option<Uuid>,
    pub after_order_enabled: bool,
    pub active: bool,
    #[serde(default)]
    pub custom_fields: Map<String, Value>,
}

impl PaymentMethodRecord {
    /// The Trxps method name stored alongside the record, if any.
    pub fn trxps_method_name(&self) -> Option<&str> {
        self.custom_fields
            .get(CUSTOM_FIELD_METHOD_NAME)
            .and_then(Value::as_str)
    }
}

/// Partial write for `PaymentMethodRepository::upsert`.
///
/// `None` fields are left untouched on update. Inserting requires
/// `handler_identifier` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_order_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl PaymentMethodPayload {
    /// Draft for a handler. The host record is named after the handler's
    /// description; the Trxps name goes into the custom fields.
    pub fn from_descriptor(
        descriptor: &PaymentMethodDescriptor,
        plugin_id: Uuid,
        media_id: Uuid,
    ) -> Self {
        let mut custom_fields = Map::new();
        custom_fields.insert(
            CUSTOM_FIELD_METHOD_NAME.to_string(),
            Value::String(descriptor.name.clone()),
        );

        Self {
            handler_identifier: Some(descriptor.handler_identifier.clone()),
            name: Some(descriptor.description.clone()),
            description: Some(String::new()),
            plugin_id: Some(plugin_id),
            media_id: Some(media_id),
            after_order_enabled: Some(true),
            custom_fields: Some(custom_fields),
            ..Default::default()
        }
    }

    pub fn activation(id: Uuid, active: bool) -> Self {
        Self {
            id: Some(id),
            active: Some(active),
            ..Default::default()
        }
    }

    /// Applies the present fields onto an existing record.
    pub fn apply_to(self, record: &mut PaymentMethodRecord) {
        if let Some(handler_identifier) = self.handler_identifier {
            record.handler_identifier = handler_identifier;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if self.plugin_id.is_some() {
            record.plugin_id = self.plugin_id;
        }
        if self.media_id.is_some() {
            record.media_id = self.media_id;
        }
        if let Some(after_order_enabled) = self.after_order_enabled {
            record.after_order_enabled = after_order_enabled;
        }
        if let Some(active) = self.active {
            record.active = active;
        }
        if let Some(custom_fields) = self.custom_fields {
            record.custom_fields.extend(custom_fields);
        }
    }

    /// Builds a new record, or `None` when a required field is missing.
    pub fn into_record(self, id: Uuid) -> Option<PaymentMethodRecord> {
        Some(PaymentMethodRecord {
            id,
            handler_identifier: self.handler_identifier?,
            name: self.name?,
            description: self.description.unwrap_or_default(),
            plugin_id: self.plugin_id,
            media_id: self.media_id,
            after_order_enabled: self.after_order_enabled.unwrap_or(false),
            active: self.active.unwrap_or(false),
            custom_fields: self.custom_fields.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySearchResult<T> {
    pub total: usize,
    pub entities: Vec<T>,
}

impl<T> EntitySearchResult<T> {
    pub fn first(&self) -> Option<&T> {
        self.entities.first()
    }

    pub fn into_first(self) -> Option<T> {
        self.entities.into_iter().next()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdSearchResult {
    pub total: usize,
    pub ids: Vec<Uuid>,
}

/// Ids touched by a single `upsert` batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WriteResult {
    pub inserted: Vec<Uuid>,
    pub updated: Vec<Uuid>,
}

impl WriteResult {
    pub fn written(&self) -> usize {
        self.inserted.len() + self.updated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ideal() -> PaymentMethodDescriptor {
        PaymentMethodDescriptor {
            name: "iDEAL".to_string(),
            description: "iDEAL".to_string(),
            handler_identifier: "trxps_payments.handler.ideal".to_string(),
        }
    }

    #[test]
    fn test_draft_from_descriptor() {
        let plugin_id = Uuid::new_v4();
        let media_id = Uuid::new_v4();
        let draft = PaymentMethodPayload::from_descriptor(&ideal(), plugin_id, media_id);

        assert_eq!(draft.id, None);
        assert_eq!(draft.active, None);
        assert_eq!(draft.description.as_deref(), Some(""));

        let record = draft.into_record(Uuid::new_v4()).unwrap();
        assert_eq!(record.name, "iDEAL");
        assert_eq!(record.trxps_method_name(), Some("iDEAL"));
        assert!(record.after_order_enabled);
        assert!(!record.active);
        assert_eq!(record.media_id, Some(media_id));
    }

    #[test]
    fn test_activation_only_touches_active_flag() {
        let mut record = PaymentMethodPayload::from_descriptor(&ideal(), Uuid::new_v4(), Uuid::new_v4())
            .into_record(Uuid::new_v4())
            .unwrap();
        let before = record.clone();

        PaymentMethodPayload::activation(record.id, true).apply_to(&mut record);

        assert!(record.active);
        assert_eq!(record.name, before.name);
        assert_eq!(record.custom_fields, before.custom_fields);
    }

    #[test]
    fn test_insert_requires_natural_key() {
        assert!(PaymentMethodPayload::activation(Uuid::new_v4(), true)
            .into_record(Uuid::new_v4())
            .is_none());
    }

    #[test]
    fn test_payload_serializes_only_present_fields() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(PaymentMethodPayload::activation(id, true)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": id, "active": true }));
    }
}
