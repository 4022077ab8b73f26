//! Product table operations.

use super::Database;
use crate::models::Product;

/// Repository for registered products.
pub struct ProductRepository<'a> {
    db: &'a Database,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all products, newest first.
    pub async fn list_all(&self) -> Vec<Product> {
        self.db.products.read().await.iter().rev().cloned().collect()
    }

    pub async fn create(&self, product: Product) -> Product {
        self.db.products.write().await.push(product.clone());
        product
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atadiesel_core::ProductId;
    use chrono::Utc;

    use super::*;
    use crate::models::ProductForm;

    #[tokio::test]
    async fn test_newest_first() {
        let db = Database::new();
        let repo = ProductRepository::new(&db);

        for name in ["Filtro", "Óleo"] {
            let product = ProductForm {
                name: name.to_string(),
                ..ProductForm::default()
            }
            .into_product(ProductId::new(name), Utc::now())
            .unwrap();
            repo.create(product).await;
        }

        let names: Vec<_> = repo.list_all().await.into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Óleo", "Filtro"]);
    }
}
