//! Saved delivery addresses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AddressId, Cep};

/// Errors raised when saving an address.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    #[error("street is required")]
    MissingStreet,
    #[error("number is required")]
    MissingNumber,
}

/// Address fields as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressForm {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub cep: Option<Cep>,
}

/// A saved address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub cep: Option<Cep>,
}

impl AddressForm {
    /// Validate the form and turn it into a saved address.
    ///
    /// # Errors
    ///
    /// Street and number must be non-blank.
    pub fn into_address(self, id: AddressId) -> Result<Address, AddressError> {
        let street = self.street.trim();
        let number = self.number.trim();
        if street.is_empty() {
            return Err(AddressError::MissingStreet);
        }
        if number.is_empty() {
            return Err(AddressError::MissingNumber);
        }

        Ok(Address {
            id,
            street: street.to_string(),
            number: number.to_string(),
            complement: self.complement.trim().to_string(),
            neighborhood: self.neighborhood.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            cep: self.cep,
        })
    }
}

impl Address {
    /// One-line form shown in the address list.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!(
            "{}, {} - {}, {}",
            self.street, self.number, self.neighborhood, self.state
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> AddressForm {
        AddressForm {
            street: " Avenida Paulista ".to_string(),
            number: "1000".to_string(),
            complement: "Apto 12".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            cep: Some(Cep::parse("01310-100").unwrap()),
        }
    }

    #[test]
    fn test_display_line() {
        let address = form().into_address(AddressId::new("a1")).unwrap();
        assert_eq!(address.display_line(), "Avenida Paulista, 1000 - Bela Vista, SP");
    }

    #[test]
    fn test_street_and_number_required() {
        let mut missing_street = form();
        missing_street.street = "   ".to_string();
        assert_eq!(
            missing_street.into_address(AddressId::new("a")),
            Err(AddressError::MissingStreet)
        );

        let mut missing_number = form();
        missing_number.number = String::new();
        assert_eq!(
            missing_number.into_address(AddressId::new("a")),
            Err(AddressError::MissingNumber)
        );
    }

    #[test]
    fn test_form_fields_are_optional_on_the_wire() {
        let form: AddressForm =
            serde_json::from_str(r#"{"street":"Rua A","number":"5"}"#).unwrap();
        assert_eq!(form.cep, None);
        assert!(form.into_address(AddressId::new("x")).is_ok());
    }
}
