//! Document construction, attribute access and persistence.

use serde_json::{Map, Value};
use uuid::Uuid;

use super::errors::{DocumentError, DocumentResult};
use crate::schema::Schema;
use crate::storage::FileStore;

/// An instance of a schema's attribute set.
///
/// Construction seeds every schema-declared attribute with JSON `null` (the
/// explicit "not yet set" sentinel) and injects a `uuid` attribute holding
/// the id's string form. The attribute map is also the persisted form:
/// unset attributes serialize as `null`.
#[derive(Debug, Clone)]
pub struct Document<'s> {
    uuid: String,
    schema: &'s Schema,
    attributes: Map<String, Value>,
}

impl<'s> Document<'s> {
    /// Create a document with a freshly generated random id.
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_uid(schema, Uuid::new_v4().to_string())
    }

    /// Create a document with a caller-supplied id.
    pub fn with_uid(schema: &'s Schema, uid: impl Into<String>) -> Self {
        let uuid = uid.into();
        let mut attributes = Map::new();
        for name in schema.attributes().keys() {
            attributes.insert(name.clone(), Value::Null);
        }
        attributes.insert("uuid".to_string(), Value::String(uuid.clone()));
        Self {
            uuid,
            schema,
            attributes,
        }
    }

    /// The document's unique id.
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// The schema this document was created from.
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// Set an attribute. The key must already be present in the attribute
    /// map, i.e. declared by the schema or the built-in `uuid`.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) -> DocumentResult<()> {
        if !self.attributes.contains_key(name) {
            return Err(DocumentError::UndeclaredAttribute(name.to_string()));
        }
        self.attributes.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Read an attribute's current value. Same declaration check as
    /// [`Document::set_attribute`].
    pub fn get_attribute(&self, name: &str) -> DocumentResult<&Value> {
        self.attributes
            .get(name)
            .ok_or_else(|| DocumentError::UndeclaredAttribute(name.to_string()))
    }

    /// Persist as a new file keyed by the id. Fails if a document with this
    /// id already exists.
    pub fn save(&self, store: &FileStore) -> DocumentResult<()> {
        let folder = self.schema.document_folder(store.config());
        store.create(&self.uuid, &self.attributes, &folder)?;
        Ok(())
    }

    /// Overwrite the persisted file. Fails if the document was never saved.
    pub fn update(&self, store: &FileStore) -> DocumentResult<()> {
        let folder = self.schema.document_folder(store.config());
        store.overwrite(&self.uuid, &self.attributes, &folder)?;
        Ok(())
    }

    /// The attribute map, which is exactly the persisted form.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Consume the document, returning its attribute map.
    pub fn into_map(self) -> Map<String, Value> {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::schema::AttributeType;
    use crate::setup::default_setup;
    use crate::storage::StorageError;
    use serde_json::json;
    use tempfile::TempDir;

    fn book_schema() -> Schema {
        let mut schema = Schema::new("Book");
        schema.add_attribute("title", AttributeType::String).unwrap();
        schema.add_attribute("pages", AttributeType::Integer).unwrap();
        schema
    }

    fn saved_store_and_schema() -> (TempDir, FileStore, Schema) {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(StoreConfig::with_root(tmp.path()));
        default_setup(&store).unwrap();
        let schema = book_schema();
        schema.save(&store).unwrap();
        (tmp, store, schema)
    }

    #[test]
    fn test_keys_are_schema_attributes_plus_uuid() {
        let schema = book_schema();
        let doc = Document::new(&schema);

        let mut keys: Vec<&str> = doc.as_map().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["pages", "title", "uuid"]);
    }

    #[test]
    fn test_attributes_start_unset() {
        let schema = book_schema();
        let doc = Document::new(&schema);
        assert_eq!(doc.get_attribute("title").unwrap(), &Value::Null);
    }

    #[test]
    fn test_uuid_is_injected() {
        let schema = book_schema();
        let doc = Document::with_uid(&schema, "id-1");
        assert_eq!(doc.uuid(), "id-1");
        assert_eq!(doc.get_attribute("uuid").unwrap(), &json!("id-1"));
    }

    #[test]
    fn test_set_undeclared_attribute_fails() {
        let schema = book_schema();
        let mut doc = Document::new(&schema);

        let result = doc.set_attribute("nonexistent", 5);
        assert!(matches!(result, Err(DocumentError::UndeclaredAttribute(_))));
    }

    #[test]
    fn test_get_undeclared_attribute_fails() {
        let schema = book_schema();
        let doc = Document::new(&schema);

        let result = doc.get_attribute("nonexistent");
        assert!(matches!(result, Err(DocumentError::UndeclaredAttribute(_))));
    }

    #[test]
    fn test_set_and_get() {
        let schema = book_schema();
        let mut doc = Document::new(&schema);

        doc.set_attribute("title", "Dune").unwrap();
        doc.set_attribute("pages", 412).unwrap();
        assert_eq!(doc.get_attribute("title").unwrap(), &json!("Dune"));
        assert_eq!(doc.get_attribute("pages").unwrap(), &json!(412));
    }

    #[test]
    fn test_save_then_save_fails() {
        let (_tmp, store, schema) = saved_store_and_schema();
        let doc = Document::new(&schema);

        doc.save(&store).unwrap();
        let result = doc.save(&store);
        assert!(matches!(
            result,
            Err(DocumentError::Storage(StorageError::AlreadyExists(_)))
        ));
    }

    #[test]
    fn test_update_before_save_fails() {
        let (_tmp, store, schema) = saved_store_and_schema();
        let doc = Document::new(&schema);

        let result = doc.update(&store);
        assert!(matches!(
            result,
            Err(DocumentError::Storage(StorageError::NotFound(_)))
        ));
    }

    #[test]
    fn test_save_update_round_trip() {
        let (_tmp, store, schema) = saved_store_and_schema();
        let mut doc = Document::new(&schema);

        doc.set_attribute("title", "Dune").unwrap();
        doc.save(&store).unwrap();

        doc.set_attribute("pages", 412).unwrap();
        doc.update(&store).unwrap();

        let folder = schema.document_folder(store.config());
        let persisted: Map<String, Value> = store.read(doc.uuid(), &folder).unwrap();
        assert_eq!(&persisted, doc.as_map());
    }
}
