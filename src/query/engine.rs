//! Per-schema CRUD and linear-scan queries.

use serde_json::{Map, Value};

use super::errors::{QueryError, QueryResult};
use crate::document::Document;
use crate::schema::Schema;
use crate::storage::{FileStore, StorageError};

/// Executes queries over one schema's document folder.
///
/// Absence outcomes that are part of normal operation (a uid miss on find or
/// delete) are ordinary return values, never errors.
#[derive(Debug)]
pub struct QueryEngine<'a> {
    schema: &'a Schema,
    store: &'a FileStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(schema: &'a Schema, store: &'a FileStore) -> Self {
        Self { schema, store }
    }

    fn folder(&self) -> String {
        self.schema.document_folder(self.store.config())
    }

    /// Build a document from the schema, apply every entry of `values`, and
    /// persist it. The first undeclared key aborts before anything is
    /// written. Returns the new document's id.
    pub fn insert(&self, values: Map<String, Value>) -> QueryResult<String> {
        let mut document = Document::new(self.schema);
        for (name, value) in values {
            document.set_attribute(&name, value)?;
        }
        document.save(self.store)?;
        Ok(document.uuid().to_string())
    }

    /// Set one attribute on the persisted record identified by `uid`.
    ///
    /// Validates against the keys actually present in the stored record, not
    /// against the schema-declared set that [`Document::set_attribute`]
    /// checks. The two can disagree if a record's shape has drifted from its
    /// schema; this operation deliberately honors the stored shape.
    pub fn update_by_uid(&self, uid: &str, name: &str, value: Value) -> QueryResult<()> {
        let folder = self.folder();
        let mut record: Map<String, Value> = self.store.read(uid, &folder)?;
        if !record.contains_key(name) {
            return Err(QueryError::UndeclaredAttribute(name.to_string()));
        }
        record.insert(name.to_string(), value);
        self.store.overwrite(uid, &record, &folder)?;
        Ok(())
    }

    /// Delete the document with the given id. Returns `false`, not an error,
    /// if no such document exists.
    pub fn delete_by_uid(&self, uid: &str) -> QueryResult<bool> {
        match self.store.delete(uid, &self.folder()) {
            Ok(()) => Ok(true),
            Err(StorageError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// The persisted content of the document with the given id, or an empty
    /// map if no such document exists.
    pub fn find_by_uid(&self, uid: &str) -> QueryResult<Map<String, Value>> {
        match self.store.read(uid, &self.folder()) {
            Ok(record) => Ok(record),
            Err(StorageError::NotFound(_)) => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Every document in this schema's folder, in directory listing order
    /// (filesystem-dependent, not sorted).
    pub fn find_all(&self) -> QueryResult<Vec<Map<String, Value>>> {
        let folder = self.folder();
        let mut records = Vec::new();
        for entry in self.store.list_entries(&folder)? {
            let Some(uid) = entry.strip_suffix(".json") else {
                continue;
            };
            records.push(self.store.read(uid, &folder)?);
        }
        Ok(records)
    }

    /// Documents whose `name` attribute equals `value` exactly. Equality is
    /// type-sensitive; a missing attribute never matches.
    pub fn find_all_where_eq(&self, name: &str, value: &Value) -> QueryResult<Vec<Map<String, Value>>> {
        let mut records = self.find_all()?;
        records.retain(|record| record.get(name) == Some(value));
        Ok(records)
    }

    /// Documents whose `name` attribute is an array containing `value`. A
    /// missing or non-array attribute never matches.
    pub fn find_all_where_contains(
        &self,
        name: &str,
        value: &Value,
    ) -> QueryResult<Vec<Map<String, Value>>> {
        let mut records = self.find_all()?;
        records.retain(|record| {
            matches!(record.get(name), Some(Value::Array(items)) if items.contains(value))
        });
        Ok(records)
    }
}
