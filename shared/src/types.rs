//! API request and response types
//!
//! Request bodies carry their field constraints as `validator` attributes;
//! the backend runs them before any handler logic.

use crate::models::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of the token in seconds
    pub expires_in: i64,
}

// ============================================================================
// User Types
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "crate::validation::password_constraint"))]
    pub password: String,
    pub role: Role,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::password_constraint"))]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Public view of a user account
///
/// There is deliberately no password field: responses are built from this
/// type only, so a digest cannot leak through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

// ============================================================================
// Product Types
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub nombre: String,
    pub descripcion: String,
    #[validate(range(min = 0.0, message = "precio must be at least 0"))]
    pub precio: f64,
    #[validate(range(min = 0, message = "cantidad must be at least 0"))]
    pub cantidad: i32,
}

/// Partial product update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "precio must be at least 0"))]
    pub precio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "cantidad must be at least 0"))]
    pub cantidad: Option<i32>,
}

/// Product response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub cantidad: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_product_accepts_zero_values() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "nombre": "A", "descripcion": "", "precio": 0, "cantidad": 0
        }))
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "nombre": "A", "descripcion": "d", "precio": -0.5, "cantidad": 1
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("precio"));
    }

    #[test]
    fn test_create_product_rejects_negative_quantity() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "nombre": "A", "descripcion": "d", "precio": 1.5, "cantidad": -3
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cantidad"));
    }

    #[test]
    fn test_create_product_requires_all_fields() {
        let parsed: Result<CreateProductRequest, _> =
            serde_json::from_value(json!({ "nombre": "A", "precio": 1 }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_empty_product_update_is_valid() {
        let req: UpdateProductRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.nombre.is_none() && req.precio.is_none());
    }

    #[test]
    fn test_product_update_checks_present_fields_only() {
        let req: UpdateProductRequest =
            serde_json::from_value(json!({ "cantidad": -1 })).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cantidad"));
    }

    #[test]
    fn test_blank_product_name_rejected_but_blank_description_allowed() {
        let create: CreateProductRequest = serde_json::from_value(json!({
            "nombre": " \t", "descripcion": "", "precio": 1, "cantidad": 1
        }))
        .unwrap();
        let errors = create.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("nombre"));
        assert!(!errors.field_errors().contains_key("descripcion"));

        let update: UpdateProductRequest =
            serde_json::from_value(json!({ "nombre": "", "descripcion": "" })).unwrap();
        let errors = update.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("nombre"));
    }

    #[test]
    fn test_create_user_rejects_unknown_role() {
        let parsed: Result<CreateUserRequest, _> = serde_json::from_value(json!({
            "email": "a@example.com", "password": "Password123", "role": "Owner"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_user_validates_email_and_password() {
        let req: CreateUserRequest = serde_json::from_value(json!({
            "email": "not-an-email", "password": "short", "role": "Regular"
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let user = UserResponse {
            id: 1,
            email: "a@example.com".to_string(),
            role: Role::Admin,
        };
        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(!keys.iter().any(|k| k.contains("password")));
    }
}
