//! Collection trait definitions for domain models
//!
//! This module defines the traits for collections of domain models,
//! providing common functionality for storing and querying model
//! collections.

use crate::models::core::traits::EntityModel;
use std::sync::Arc;

/// A trait for collections of models that can be queried and modified.
///
/// `ModelCollection` provides methods for storing, retrieving, and
/// filtering collections of models.
pub trait ModelCollection<T: EntityModel> {
    /// Add a model to the collection
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;
}
