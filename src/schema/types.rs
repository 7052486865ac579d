//! Schema type definitions
//!
//! A schema is a named mapping from attribute name to attribute type.
//! On disk it is one JSON file of shape `{"name": ..., "attributes": {...}}`
//! where each attribute type is its integer tag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use crate::config::StoreConfig;
use crate::storage::{FileStore, StorageError};

/// Supported attribute types, serialized as their integer tags.
///
/// A tag outside this set cannot be constructed through the API; it can only
/// appear in a hand-edited schema file, where deserialization rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AttributeType {
    /// UTF-8 string (tag 1)
    String = 1,
    /// Integer (tag 2)
    Integer = 2,
    /// Homogeneous list (tag 3)
    List = 3,
}

impl AttributeType {
    /// Returns the wire tag for this type.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Returns the type name for error messages
    pub fn type_name(self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Integer => "integer",
            AttributeType::List => "list",
        }
    }
}

impl From<AttributeType> for u8 {
    fn from(ty: AttributeType) -> u8 {
        ty.tag()
    }
}

impl TryFrom<u8> for AttributeType {
    type Error = String;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(AttributeType::String),
            2 => Ok(AttributeType::Integer),
            3 => Ok(AttributeType::List),
            other => Err(format!("unrecognized attribute type tag: {other}")),
        }
    }
}

/// Named declaration of the attribute set a class of documents must have.
///
/// Name uniqueness across schemas is the caller's responsibility. Attributes
/// must not be changed after any document has been created from this schema;
/// that contract is documented, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    attributes: HashMap<String, AttributeType>,
}

impl Schema {
    /// Create a new schema with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// The schema's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared attribute set.
    pub fn attributes(&self) -> &HashMap<String, AttributeType> {
        &self.attributes
    }

    /// Declare a new attribute. Fails if the name is already declared.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        ty: AttributeType,
    ) -> SchemaResult<()> {
        let name = name.into();
        if self.attributes.contains_key(&name) {
            return Err(SchemaError::DuplicateAttribute(name));
        }
        self.attributes.insert(name, ty);
        Ok(())
    }

    /// Replace the type of an already-declared attribute.
    pub fn update_attribute(&mut self, name: &str, ty: AttributeType) -> SchemaResult<()> {
        match self.attributes.get_mut(name) {
            Some(slot) => {
                *slot = ty;
                Ok(())
            }
            None => Err(SchemaError::UnknownAttribute(name.to_string())),
        }
    }

    /// Persist the schema as a new file, then create its document folder.
    ///
    /// Two-step operation with no rollback: if folder creation fails after
    /// the schema file is written, the two are left inconsistent.
    pub fn save(&self, store: &FileStore) -> SchemaResult<()> {
        store.create(&self.name, self, store.config().schema_root())?;
        store.create_dir(&self.name, store.config().document_root())?;
        Ok(())
    }

    /// Overwrite the persisted schema file. Requires a prior [`Schema::save`].
    pub fn update(&self, store: &FileStore) -> SchemaResult<()> {
        store.overwrite(&self.name, self, store.config().schema_root())?;
        Ok(())
    }

    /// Relative path of the folder holding this schema's documents.
    pub fn document_folder(&self, config: &StoreConfig) -> String {
        config.document_path(&self.name)
    }

    /// Look a schema up by name. Absence is a normal outcome, not an error.
    pub fn load_by_name(store: &FileStore, name: &str) -> SchemaResult<Option<Schema>> {
        match store.read(name, store.config().schema_root()) {
            Ok(schema) => Ok(Some(schema)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
