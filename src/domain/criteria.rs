//! Search criteria understood by the host repositories.
//!
//! Filters address entity fields by their serialized (camelCase) name. Nested
//! fields use a dotted path, e.g. `customFields.trxps_payment_method_name`.

use crate::error::{PluginError, Result};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct EqualsFilter {
    pub field: String,
    pub value: Value,
}

impl EqualsFilter {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    fn matches(&self, entity: &Value) -> bool {
        let mut current = entity;
        for segment in self.field.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => return false,
            }
        }
        current == &self.value
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    filters: Vec<EqualsFilter>,
    limit: Option<usize>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria matching a single entity id.
    pub fn with_id(id: Uuid) -> Self {
        Self::new().with_filter(EqualsFilter::new("id", id.to_string()))
    }

    pub fn with_filter(mut self, filter: EqualsFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[EqualsFilter] {
        &self.filters
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Rejects filters that cannot address any field.
    pub fn validate(&self) -> Result<()> {
        for filter in &self.filters {
            if filter.field.is_empty() || filter.field.split('.').any(str::is_empty) {
                return Err(PluginError::InconsistentCriteria(format!(
                    "invalid filter field '{}'",
                    filter.field
                )));
            }
        }
        Ok(())
    }

    /// Evaluates all filters against the serialized form of `entity`.
    pub fn matches<T: Serialize>(&self, entity: &T) -> Result<bool> {
        self.validate()?;
        let value = serde_json::to_value(entity)?;
        Ok(self.filters.iter().all(|filter| filter.matches(&value)))
    }
}
