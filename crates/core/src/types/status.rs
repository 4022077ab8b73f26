//! Enumerations shared by the storefront and the back-office.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a cart line or order reaches the customer.
///
/// The wire names (`casa`, `loja`) are the ones the mobile client sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryMethod {
    /// Shipped to the customer's address.
    #[default]
    #[serde(rename = "casa")]
    Home,
    /// Picked up at the store counter.
    #[serde(rename = "loja")]
    StorePickup,
}

impl DeliveryMethod {
    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "casa",
            Self::StorePickup => "loja",
        }
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Receber em casa",
            Self::StorePickup => "Retirar na loja",
        }
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casa" => Ok(Self::Home),
            "loja" => Ok(Self::StorePickup),
            _ => Err(format!("invalid delivery method: {s}")),
        }
    }
}

/// Errors raised when an order status change is not allowed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The order is on its way; only the customer can confirm receipt.
    #[error("order is out for delivery and awaiting customer confirmation")]
    AwaitingCustomer,
    /// The order already reached a final state.
    #[error("order is already {0:?}")]
    Finished(OrderStatus),
    /// Receipt can only be confirmed while the order is out for delivery.
    #[error("cannot confirm delivery of an order that is {0:?}")]
    NotOutForDelivery(OrderStatus),
}

/// Fulfillment status of an order on the delivery board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Completed,
}

impl OrderStatus {
    /// Next status reachable by a store operator.
    ///
    /// # Errors
    ///
    /// Orders out for delivery wait for the customer, and delivered or
    /// completed orders cannot move at all.
    pub const fn advance(self) -> Result<Self, TransitionError> {
        match self {
            Self::Pending => Ok(Self::Accepted),
            Self::Accepted => Ok(Self::Preparing),
            Self::Preparing => Ok(Self::Ready),
            Self::Ready => Ok(Self::OutForDelivery),
            Self::OutForDelivery => Err(TransitionError::AwaitingCustomer),
            Self::Delivered | Self::Completed => Err(TransitionError::Finished(self)),
        }
    }

    /// Customer confirmation of receipt.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotOutForDelivery`] unless the order is out
    /// for delivery.
    pub const fn confirm_delivery(self) -> Result<Self, TransitionError> {
        match self {
            Self::OutForDelivery => Ok(Self::Delivered),
            other => Err(TransitionError::NotOutForDelivery(other)),
        }
    }

    /// Whether the order still shows on the active tab.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Delivered | Self::Completed)
    }

    /// Operator-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Novo Pedido",
            Self::Accepted => "Aceito",
            Self::Preparing => "Preparando",
            Self::Ready => "Pronto",
            Self::OutForDelivery => "Em Trânsito",
            Self::Delivered => "Entregue",
            Self::Completed => "Concluído",
        }
    }

    /// Label of the button that advances this status, if any.
    #[must_use]
    pub const fn action_label(self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("Aceitar Pedido"),
            Self::Accepted => Some("Iniciar Preparo"),
            Self::Preparing => Some("Pronto para Entrega"),
            Self::Ready => Some("Saiu para Entrega"),
            Self::OutForDelivery => Some("Aguardando Confirmação"),
            Self::Delivered | Self::Completed => None,
        }
    }
}

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Back-office operator.
    Admin,
    /// Shopper.
    #[default]
    Customer,
}

impl UserRole {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Customer => "Cliente",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_method_wire_names() {
        assert_eq!(serde_json::to_string(&DeliveryMethod::Home).unwrap(), "\"casa\"");
        assert_eq!(
            serde_json::from_str::<DeliveryMethod>("\"loja\"").unwrap(),
            DeliveryMethod::StorePickup
        );
        assert_eq!("casa".parse::<DeliveryMethod>().unwrap(), DeliveryMethod::Home);
        assert!("correio".parse::<DeliveryMethod>().is_err());
    }

    #[test]
    fn test_operator_walks_order_to_out_for_delivery() {
        let mut status = OrderStatus::Pending;
        for expected in [
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OutForDelivery,
        ] {
            status = status.advance().unwrap();
            assert_eq!(status, expected);
        }
        assert_eq!(status.advance(), Err(TransitionError::AwaitingCustomer));
    }

    #[test]
    fn test_customer_confirms_delivery() {
        assert_eq!(
            OrderStatus::OutForDelivery.confirm_delivery(),
            Ok(OrderStatus::Delivered)
        );
        assert_eq!(
            OrderStatus::Ready.confirm_delivery(),
            Err(TransitionError::NotOutForDelivery(OrderStatus::Ready))
        );
    }

    #[test]
    fn test_final_states_do_not_advance() {
        assert_eq!(
            OrderStatus::Delivered.advance(),
            Err(TransitionError::Finished(OrderStatus::Delivered))
        );
        assert_eq!(
            OrderStatus::Completed.advance(),
            Err(TransitionError::Finished(OrderStatus::Completed))
        );
    }

    #[test]
    fn test_active_split() {
        assert!(OrderStatus::OutForDelivery.is_active());
        assert!(!OrderStatus::Delivered.is_active());
        assert!(!OrderStatus::Completed.is_active());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"OUT_FOR_DELIVERY\""
        );
    }

    #[test]
    fn test_user_role_round_trip() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::Customer.to_string(), "customer");
        assert_eq!(UserRole::Admin.label(), "Administrador");
    }
}
