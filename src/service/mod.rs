use tracing::debug;

use crate::models::{Product, ProductId};
use crate::store::ProductStore;
use crate::validation::{validate, ValidationError};

/// CRUD operations over a [`ProductStore`]. The service is the store's only owner.
///
/// Two signalling channels are kept apart on purpose: invalid input is an
/// `Err(ValidationError)`, an unknown id is `None` / `false`.
#[derive(Debug, Default)]
pub struct ProductService {
    store: ProductStore,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        self.store.all()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.store.find(id)
    }

    pub fn create(&mut self, name: String, price: f64) -> Result<Product, ValidationError> {
        validate(&name, price)?;
        let product = self.store.insert(name, price);
        debug!(id = %product.id, "Stored product");
        Ok(product)
    }

    /// Validates before looking the id up, so a bad payload is rejected even
    /// when `id` does not exist.
    pub fn update(
        &mut self,
        id: ProductId,
        name: String,
        price: f64,
    ) -> Result<Option<Product>, ValidationError> {
        validate(&name, price)?;
        let Some(product) = self.store.find_mut(id) else {
            return Ok(None);
        };
        product.name = name;
        product.price = price;
        Ok(Some(product.clone()))
    }

    pub fn delete(&mut self, id: ProductId) -> bool {
        self.store.remove(id)
    }
}
