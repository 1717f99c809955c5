use crate::models::{Product, ProductId};

/// In-memory record store: products in insertion order plus the next-id counter.
///
/// The counter only ever moves forward, so an id is never handed out twice even
/// after the record carrying it has been removed. State lives for the lifetime
/// of the value; nothing is persisted.
#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl ProductStore {
    /// Empty store whose first issued id is 1.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the two startup records, with the counter at 3.
    pub fn seeded() -> Self {
        let mut store = Self::empty();
        store.insert("Laptop".to_string(), 1200.0);
        store.insert("Monitor".to_string(), 300.0);
        store
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn next_id(&self) -> ProductId {
        ProductId(self.next_id)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Appends a record under the next unused id and returns a copy of it.
    pub fn insert(&mut self, name: String, price: f64) -> Product {
        let product = Product {
            id: ProductId(self.next_id),
            name,
            price,
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Returns `false` when no record carries `id`.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded()
    }
}
