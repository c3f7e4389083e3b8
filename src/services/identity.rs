//! Identity fields of the generated theme.

use plist::Value;
use uuid::Uuid;

use crate::models::ThemeDocument;

/// Overwrites `name`, `semanticClass`, and `uuid` with a fresh v4 UUID.
pub fn update_identity(theme: &mut ThemeDocument, name: &str, semantic_class: &str) -> Uuid {
    let uuid = Uuid::new_v4();
    update_identity_with_uuid(theme, name, semantic_class, uuid);
    uuid
}

/// Overwrites `name`, `semanticClass`, and `uuid` with the given values.
///
/// Existing keys keep their position; missing ones are appended.
pub fn update_identity_with_uuid(
    theme: &mut ThemeDocument,
    name: &str,
    semantic_class: &str,
    uuid: Uuid,
) {
    let root = theme.root_mut();
    root.insert("name".to_string(), Value::String(name.to_string()));
    root.insert(
        "semanticClass".to_string(),
        Value::String(semantic_class.to_string()),
    );
    root.insert("uuid".to_string(), Value::String(uuid.to_string()));
}
