//! Read-only schema handle: which logical field names map to which
//! internal property names.
//!
//! Only explicit `field:` prefixes go through the schema; default fields
//! are used verbatim. The library never loads schemas itself, callers
//! build them in code or deserialize them from configuration.

use std::collections::HashMap;

use serde::Deserialize;

/// One field of the indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// The name queries use
    pub property_name: String,
    /// The column the store actually has
    pub internal_property_name: String,
}

/// Field lookup table. Cheap to clone and safe to share across parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub fields: HashMap<String, Field>,
}

impl Schema {
    pub fn new(fields: HashMap<String, Field>) -> Self {
        Schema { fields }
    }

    /// Builds a schema from plain `logical -> internal` pairs.
    pub fn from_mapping<I>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let fields = mapping
            .into_iter()
            .map(|(property_name, internal_property_name)| {
                let field = Field {
                    property_name: property_name.clone(),
                    internal_property_name,
                };
                (property_name, field)
            })
            .collect();
        Schema { fields }
    }

    /// The internal name for `field_name`, if the schema knows the field.
    pub fn resolve(&self, field_name: &str) -> Option<&str> {
        self.fields
            .get(field_name)
            .map(|field| field.internal_property_name.as_str())
    }
}
