//! Delivery board operations.

use std::sync::atomic::Ordering;

use atadiesel_core::{OrderId, OrderStatus, TransitionError};

use super::{Database, RepositoryError};
use crate::models::{DeliveryOrder, DeliveryTab};

/// Repository for delivery orders.
pub struct DeliveryRepository<'a> {
    db: &'a Database,
}

impl<'a> DeliveryRepository<'a> {
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Reserve the next order number (`ORD-001`, `ORD-002`, ...).
    pub fn next_id(&self) -> OrderId {
        let seq = self.db.delivery_seq.fetch_add(1, Ordering::Relaxed) + 1;
        OrderId::new(format!("ORD-{seq:03}"))
    }

    /// Every order, newest first.
    pub async fn list_all(&self) -> Vec<DeliveryOrder> {
        self.db.deliveries.read().await.iter().rev().cloned().collect()
    }

    /// Orders under a board tab, newest first.
    pub async fn list_tab(&self, tab: DeliveryTab) -> Vec<DeliveryOrder> {
        self.db
            .deliveries
            .read()
            .await
            .iter()
            .rev()
            .filter(|order| tab.includes(order.status))
            .cloned()
            .collect()
    }

    pub async fn create(&self, order: DeliveryOrder) -> DeliveryOrder {
        self.db.deliveries.write().await.push(order.clone());
        order
    }

    /// Move an order one step along the operator flow.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for unknown ids and
    /// `RepositoryError::Conflict` when the status cannot advance.
    pub async fn advance(&self, id: &OrderId) -> Result<DeliveryOrder, RepositoryError> {
        self.transition(id, OrderStatus::advance).await
    }

    /// Record the customer's confirmation of receipt.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for unknown ids and
    /// `RepositoryError::Conflict` unless the order is out for delivery.
    pub async fn confirm(&self, id: &OrderId) -> Result<DeliveryOrder, RepositoryError> {
        self.transition(id, OrderStatus::confirm_delivery).await
    }

    async fn transition(
        &self,
        id: &OrderId,
        next: impl FnOnce(OrderStatus) -> Result<OrderStatus, TransitionError>,
    ) -> Result<DeliveryOrder, RepositoryError> {
        let mut deliveries = self.db.deliveries.write().await;
        let order = deliveries
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("order {id}")))?;

        order.status = next(order.status).map_err(|e| RepositoryError::Conflict(e.to_string()))?;
        Ok(order.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{DeliveryForm, DeliveryLine};

    async fn seed(repo: &DeliveryRepository<'_>) -> OrderId {
        let order = DeliveryForm {
            customer: "Carlos Lima".to_string(),
            address: "Av. Brasil, 500".to_string(),
            items: vec![DeliveryLine {
                name: "Kit Pastilha de Freio".to_string(),
                quantity: 1,
                unit_price: Decimal::new(9000, 2),
            }],
            payment_method: "Cartão".to_string(),
            placed_at: None,
        }
        .into_order(|| repo.next_id(), Utc::now())
        .unwrap();
        repo.create(order).await.id
    }

    #[tokio::test]
    async fn test_sequential_ids() {
        let db = Database::new();
        let repo = DeliveryRepository::new(&db);
        assert_eq!(seed(&repo).await.as_str(), "ORD-001");
        assert_eq!(seed(&repo).await.as_str(), "ORD-002");
    }

    #[tokio::test]
    async fn test_full_flow_moves_order_to_history() {
        let db = Database::new();
        let repo = DeliveryRepository::new(&db);
        let id = seed(&repo).await;

        for _ in 0..4 {
            repo.advance(&id).await.unwrap();
        }
        let err = repo.advance(&id).await.unwrap_err();
        assert!(err.to_string().contains("awaiting customer confirmation"));
        assert_eq!(repo.list_tab(DeliveryTab::Active).await.len(), 1);

        let delivered = repo.confirm(&id).await.unwrap();
        assert_eq!(delivered.status, OrderStatus::Delivered);
        assert!(repo.list_tab(DeliveryTab::Active).await.is_empty());
        assert_eq!(repo.list_tab(DeliveryTab::History).await.len(), 1);

        assert!(matches!(
            repo.advance(&id).await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_confirm_requires_out_for_delivery() {
        let db = Database::new();
        let repo = DeliveryRepository::new(&db);
        let id = seed(&repo).await;
        assert!(matches!(
            repo.confirm(&id).await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_order() {
        let db = Database::new();
        let repo = DeliveryRepository::new(&db);
        assert!(matches!(
            repo.advance(&OrderId::new("ORD-999")).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
