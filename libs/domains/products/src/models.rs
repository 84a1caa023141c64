use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Message for a missing or empty required field.
pub const REQUIRED_FIELDS: &str = "Name, price, and category are required";

/// Message for a price that is not a positive number.
pub const PRICE_MUST_BE_POSITIVE: &str = "Price must be a positive number";

/// Product entity - one catalog entry held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, never changes after creation
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Free-form category, e.g. `Electronics`
    pub category: String,
    /// Availability flag
    pub in_stock: bool,
}

/// Request body for create and update.
///
/// Every field is optional here so that missing fields are reported by
/// validation with a proper message instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(
        required(message = "Name, price, and category are required"),
        length(min = 1, message = "Name, price, and category are required")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    /// Kept as raw JSON so a non-numeric price fails validation, not parsing
    #[validate(
        required(message = "Name, price, and category are required"),
        custom(function = "validate_price")
    )]
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Value>,
    #[validate(
        required(message = "Name, price, and category are required"),
        length(min = 1, message = "Name, price, and category are required")
    )]
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Fields of a [`ProductInput`] that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: Option<bool>,
}

/// `0`, `false` and `""` count as a missing price; any other non-number or
/// non-positive value is a bad price.
fn validate_price(price: &serde_json::Value) -> Result<(), ValidationError> {
    if is_falsy(price) {
        return Err(ValidationError::new("required").with_message(REQUIRED_FIELDS.into()));
    }
    match price.as_f64() {
        Some(value) if value > 0.0 => Ok(()),
        _ => Err(ValidationError::new("positive").with_message(PRICE_MUST_BE_POSITIVE.into())),
    }
}

fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

impl ProductInput {
    /// Returns the validated fields, or `None` if a required field is absent.
    ///
    /// Call [`Validate::validate`] first; this only unpacks the options.
    pub fn into_fields(self) -> Option<ProductFields> {
        let price = self.price.as_ref().and_then(serde_json::Value::as_f64)?;
        Some(ProductFields {
            name: self.name?,
            description: self.description,
            price,
            category: self.category?,
            in_stock: self.in_stock,
        })
    }
}

impl Product {
    /// Builds a new product with a freshly generated id.
    ///
    /// `description` defaults to empty and `inStock` to `true`, each only
    /// when absent from the request.
    pub fn new(fields: ProductFields) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            description: fields.description.unwrap_or_default(),
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock.unwrap_or(true),
        }
    }

    /// Returns the product with all mutable fields replaced.
    ///
    /// The id is kept. An omitted or empty `description` and an omitted
    /// `inStock` keep their previous values.
    pub fn replaced_with(&self, fields: ProductFields) -> Self {
        Self {
            id: self.id.clone(),
            name: fields.name,
            description: fields
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| self.description.clone()),
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock.unwrap_or(self.in_stock),
        }
    }
}

/// The two products every fresh store starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High performance laptop".to_string(),
            price: 999.99,
            category: "Electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest smartphone model".to_string(),
            price: 699.99,
            category: "Electronics".to_string(),
            in_stock: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(description: Option<&str>, in_stock: Option<bool>) -> ProductFields {
        ProductFields {
            name: "Desk".to_string(),
            description: description.map(str::to_string),
            price: 120.0,
            category: "Furniture".to_string(),
            in_stock,
        }
    }

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new(fields(None, None));
        assert_eq!(product.description, "");
        assert!(product.in_stock);
        assert!(Uuid::parse_str(&product.id).is_ok());
    }

    #[test]
    fn test_new_product_keeps_explicit_out_of_stock() {
        let product = Product::new(fields(Some("oak"), Some(false)));
        assert!(!product.in_stock);
        assert_eq!(product.description, "oak");
    }

    #[test]
    fn test_replaced_with_keeps_id_and_falls_back() {
        let original = Product::new(fields(Some("oak"), Some(false)));
        let updated = original.replaced_with(ProductFields {
            name: "Standing desk".to_string(),
            description: Some(String::new()),
            price: 300.0,
            category: "Office".to_string(),
            in_stock: None,
        });

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Standing desk");
        assert_eq!(updated.description, "oak");
        assert_eq!(updated.price, 300.0);
        assert_eq!(updated.category, "Office");
        assert!(!updated.in_stock);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let value = serde_json::to_value(&seed_products()[0]).unwrap();
        assert_eq!(value["inStock"], json!(true));
        assert_eq!(value["id"], json!("1"));
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_input_validation_rules() {
        let valid: ProductInput = serde_json::from_value(json!({
            "name": "Desk", "price": 10, "category": "Furniture"
        }))
        .unwrap();
        assert!(valid.validate().is_ok());

        let string_price: ProductInput = serde_json::from_value(json!({
            "name": "Desk", "price": "10", "category": "Furniture"
        }))
        .unwrap();
        assert!(string_price.validate().is_err());

        let zero_price: ProductInput = serde_json::from_value(json!({
            "name": "Desk", "price": 0, "category": "Furniture"
        }))
        .unwrap();
        assert!(zero_price.validate().is_err());

        let empty_name: ProductInput = serde_json::from_value(json!({
            "name": "", "price": 10, "category": "Furniture"
        }))
        .unwrap();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_falsy_price_counts_as_missing() {
        for price in [json!(0), json!(0.0), json!(false), json!("")] {
            assert!(is_falsy(&price), "{price}");
        }
        for price in [json!(-1), json!("0"), json!(true), json!([])] {
            assert!(!is_falsy(&price), "{price}");
        }
    }

    #[test]
    fn test_into_fields_requires_numeric_price() {
        let input = ProductInput {
            name: Some("Desk".into()),
            price: Some(json!("ten")),
            category: Some("Furniture".into()),
            ..Default::default()
        };
        assert!(input.into_fields().is_none());
    }
}
