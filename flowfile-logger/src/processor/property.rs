use crate::error::ConfigurationError;
use std::collections::BTreeMap;

/// Declares one configuration property: its key, constraints and default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Empty means any value is accepted.
    pub allowable_values: &'static [&'static str],
    pub default_value: Option<&'static str>,
    pub non_empty: bool,
}

impl PropertyDescriptor {
    /// Resolve the effective value of this property from a raw, possibly
    /// missing, value.
    ///
    /// An empty value for an optional property counts as unset. Whitespace is
    /// a value like any other and is never trimmed.
    pub fn resolve<'a>(&self, raw: Option<&'a str>) -> Result<Option<&'a str>, ConfigurationError> {
        let value = match raw {
            Some("") if !self.required => None,
            Some(v) => Some(v),
            None => None,
        }
        .or(self.default_value);

        let Some(value) = value else {
            if self.required {
                return Err(ConfigurationError::MissingProperty {
                    name: self.name.to_string(),
                });
            }
            return Ok(None);
        };

        if self.non_empty && value.is_empty() {
            return Err(ConfigurationError::EmptyProperty {
                name: self.name.to_string(),
            });
        }

        if !self.allowable_values.is_empty() && !self.allowable_values.contains(&value) {
            return Err(ConfigurationError::InvalidPropertyValue {
                name: self.name.to_string(),
                value: value.to_string(),
                allowed: self.allowable_values.join(", "),
            });
        }

        Ok(Some(value))
    }
}

/// Property values supplied by the host when the processor is scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessContext {
    properties: BTreeMap<String, String>,
}

impl ProcessContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties(properties: BTreeMap<String, String>) -> Self {
        Self { properties }
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    pub fn raw_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Effective, validated value of `descriptor` in this context.
    pub fn property(
        &self,
        descriptor: &PropertyDescriptor,
    ) -> Result<Option<&str>, ConfigurationError> {
        descriptor.resolve(self.raw_property(descriptor.name))
    }

    /// Property keys set in this context that no descriptor declares.
    pub fn unknown_properties<'a>(&'a self, descriptors: &[PropertyDescriptor]) -> Vec<&'a str> {
        self.properties
            .keys()
            .map(String::as_str)
            .filter(|key| !descriptors.iter().any(|d| d.name == *key))
            .collect()
    }
}
