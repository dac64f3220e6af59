use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name must be a non-empty string"))]
    pub name: String,
    /// Price of zero is allowed, negative prices are rejected
    #[validate(range(min = 0.0, message = "price must be a non-negative number"))]
    pub price: f64,
}

/// DTO for replacing an existing product
///
/// Updates are full replacements, so both fields are required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "name must be a non-empty string"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price must be a non-negative number"))]
    pub price: f64,
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_assigns_id() {
        let product = Product::new(CreateProduct {
            name: "Widget".to_string(),
            price: 9.99,
        });

        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product::new(CreateProduct {
            name: "Widget".to_string(),
            price: 1.0,
        });

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_product_deserializes_id_alias() {
        let id = Uuid::now_v7();
        let json = format!(r#"{{"id":"{}","name":"Widget","price":2.5}}"#, id);

        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.id, id);
    }

    #[test]
    fn test_create_product_rejects_empty_name() {
        let input = CreateProduct {
            name: String::new(),
            price: 1.0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let input = CreateProduct {
            name: "Widget".to_string(),
            price: -0.01,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_product_allows_zero_price() {
        let input = CreateProduct {
            name: "Freebie".to_string(),
            price: 0.0,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_update_product_requires_both_fields() {
        let result: Result<UpdateProduct, _> = serde_json::from_str(r#"{"name":"Widget"}"#);
        assert!(result.is_err());
    }
}
