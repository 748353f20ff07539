//! Process-wide model registry.
//!
//! Registration binds a model name to the collection an external document
//! store should persist it under, plus the fields that store must index as
//! unique. The registry is built once at startup and never mutated after;
//! repeated registration calls resolve to the same entry.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use rollbook_core::errors::ValidationError;
use rollbook_models::students::Student;

use crate::document::validate_document;

/// A registered document model: its name, target collection, and the
/// fields the external store must keep globally unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: &'static str,
    pub collection: &'static str,
    pub unique_fields: &'static [&'static str],
}

/// The student record model.
///
/// Plays the role a model handle plays in a document-mapper: other code
/// validates candidate documents through it and resolves its collection
/// from the registry; the actual storage calls belong to an external driver.
pub struct StudentModel;

impl StudentModel {
    pub const NAME: &'static str = "Student";
    pub const COLLECTION: &'static str = "students";
    pub const UNIQUE_FIELDS: &'static [&'static str] = &["id", "email"];

    pub fn info() -> ModelInfo {
        ModelInfo {
            name: Self::NAME,
            collection: Self::COLLECTION,
            unique_fields: Self::UNIQUE_FIELDS,
        }
    }

    /// Validate a candidate document against the student schema.
    pub fn validate(document: &Value) -> Result<Student, ValidationError> {
        validate_document(document)
    }
}

/// Registry of document models, keyed by model name.
pub struct ModelRegistry {
    models: HashMap<&'static str, ModelInfo>,
}

static REGISTRY: Lazy<ModelRegistry> = Lazy::new(ModelRegistry::bootstrap);

impl ModelRegistry {
    fn bootstrap() -> Self {
        let mut models = HashMap::new();
        let student = StudentModel::info();
        info!(
            model = student.name,
            collection = student.collection,
            "registered document model"
        );
        models.insert(student.name, student);
        Self { models }
    }

    /// The process-wide registry, initialized on first access.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Look up a model by name.
    pub fn resolve(&self, name: &str) -> Option<&ModelInfo> {
        self.models.get(name)
    }

    /// The collection a model persists into, if the model is registered.
    pub fn collection_for(&self, name: &str) -> Option<&'static str> {
        self.resolve(name).map(|info| info.collection)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Ensure the student model is registered and return its entry.
///
/// Safe to call more than once; every call resolves to the same entry.
pub fn register_student_model() -> ModelInfo {
    // Bootstrap registers every model, so resolution cannot miss
    ModelRegistry::global()
        .resolve(StudentModel::NAME)
        .copied()
        .unwrap_or_else(StudentModel::info)
}
