use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::enums::SwimlaneType;
use crate::validation::rules::validate_hex_color;

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateSwimlaneRequest {
    pub board_id: uuid::Uuid,

    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    pub swimlane_type: SwimlaneType,

    #[validate(length(min = 1, max = 100, message = "Field must be between 1 and 100 characters"))]
    pub field: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: i32,

    pub is_visible: Option<bool>,

    pub settings: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct UpdateSwimlaneRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Field must be between 1 and 100 characters"))]
    pub field: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: Option<i32>,

    pub is_visible: Option<bool>,

    pub settings: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct ReorderSwimlanesRequest {
    #[validate(length(min = 1, message = "At least one move is required"), nested)]
    pub moves: Vec<SwimlaneMove>,
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
pub struct SwimlaneMove {
    pub swimlane_id: uuid::Uuid,

    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: i32,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateSwimlaneGroupRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Value must be between 1 and 255 characters"))]
    pub value: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: i32,

    pub is_visible: Option<bool>,

    pub settings: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct UpdateSwimlaneGroupRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Value must be between 1 and 255 characters"))]
    pub value: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: Option<i32>,

    pub is_visible: Option<bool>,

    pub settings: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct UpsertUserSettingsRequest {
    pub is_collapsed: bool,

    pub settings: Option<serde_json::Value>,
}

#[derive(Deserialize, Validate, Debug, Clone, Copy)]
pub struct UserSettingsPath {
    pub board_id: uuid::Uuid,
    pub swimlane_id: uuid::Uuid,
}
