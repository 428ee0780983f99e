//! Purchase order input
//!
//! Incoming orders deserialize from JSON using either English field names or
//! the field names of the purchasing system export (`comprador`, `orden_compra`,
//! `codigo`, ...).

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidatorError};

/// Party placing the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    /// Tax id of the buyer, used as the catalog customer code
    pub nit: String,
}

/// A single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(alias = "codigo")]
    pub code: String,
    #[serde(alias = "descripcion")]
    pub description: String,
    #[serde(alias = "cantidad")]
    pub quantity: u32,
    #[serde(alias = "precio_unitario")]
    pub unit_price: f64,
    #[serde(alias = "precio_total")]
    pub total_price: f64,
    #[serde(alias = "fecha_entrega")]
    pub delivery_date: String,
}

/// A purchase order to validate against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(alias = "comprador")]
    pub buyer: Buyer,
    #[serde(alias = "orden_compra")]
    pub order_id: String,
    pub items: Vec<OrderItem>,
}

impl PurchaseOrder {
    /// Parses and checks an order from a JSON body.
    ///
    /// Malformed JSON, missing keys and invalid field values are all
    /// reported as validation errors.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let order: PurchaseOrder =
            serde_json::from_slice(body).map_err(ValidatorError::invalid_order)?;
        order.check()?;
        Ok(order)
    }

    /// Checks the field-level rules an order must satisfy before validation.
    pub fn check(&self) -> Result<()> {
        if self.buyer.nit.trim().is_empty() {
            return Err(ValidatorError::Validation(
                "buyer nit must not be empty".to_string(),
            ));
        }
        if self.items.is_empty() {
            return Err(ValidatorError::Validation(
                "order must have at least one item".to_string(),
            ));
        }

        for (position, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(ValidatorError::Validation(format!(
                    "items[{}]: quantity must be greater than 0",
                    position
                )));
            }
            if item.unit_price < 0.0 || item.total_price < 0.0 {
                return Err(ValidatorError::Validation(format!(
                    "items[{}]: price must be greater than or equal to 0",
                    position
                )));
            }
        }

        Ok(())
    }
}
