//! schema.org JSON-LD composition.
//!
//! Every document produced here has the shape
//! `{"@context": "http://schema.org", "@type": <type>, ...fields}` with keys
//! in insertion order, serialized with two-space indentation and wrapped in a
//! script descriptor named after the type.
//!
//! | Module         | Schema           |
//! |----------------|------------------|
//! | `organization` | `Organization`   |
//! | `website`      | `WebSite`        |
//! | `breadcrumbs`  | `BreadcrumbList` |

mod breadcrumbs;
mod organization;
mod website;

pub use breadcrumbs::breadcrumbs;
pub use organization::organization;
pub use website::website;

use serde_json::Value;

use super::tag::ScriptTag;
use crate::config::JsonMap;

/// Vocabulary every top-level document refers to.
pub const SCHEMA_CONTEXT: &str = "http://schema.org";

/// Top-level JSON-LD object: `@context`, `@type`, then `fields` in order.
pub fn document(schema_type: &str, fields: JsonMap) -> Value {
    let mut object = JsonMap::with_capacity(fields.len() + 2);
    object.insert("@context".into(), SCHEMA_CONTEXT.into());
    object.insert("@type".into(), schema_type.into());
    object.extend(fields);
    Value::Object(object)
}

/// Object embedded in another document: `@type` only, no `@context`.
pub fn nested(schema_type: &str, fields: JsonMap) -> Value {
    let mut object = JsonMap::with_capacity(fields.len() + 1);
    object.insert("@type".into(), schema_type.into());
    object.extend(fields);
    Value::Object(object)
}

/// Serialize with two-space indentation.
pub fn stringify(value: &Value) -> String {
    // Alternate `Display` of `Value` is serde_json's pretty printer
    format!("{value:#}")
}

/// Wrap `fields` into a complete JSON-LD script descriptor.
pub fn compose(schema_type: &str, fields: JsonMap) -> ScriptTag {
    ScriptTag::json_ld(schema_type, stringify(&document(schema_type, fields)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::JSON_LD;
    use serde_json::json;

    fn fields(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fields must be an object"),
        }
    }

    #[test]
    fn test_document_key_order() {
        let doc = document("Thing", fields(json!({"name": "n", "alpha": 1})));
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["@context", "@type", "name", "alpha"]);
    }

    #[test]
    fn test_nested_has_no_context() {
        let value = nested("ListItem", fields(json!({"position": 1})));
        assert_eq!(value, json!({"@type": "ListItem", "position": 1}));
    }

    #[test]
    fn test_compose_descriptor() {
        let script = compose("Thing", fields(json!({"name": "n"})));
        assert_eq!(script.name, "Thing");
        assert_eq!(script.mime.as_deref(), Some(JSON_LD));
        assert_eq!(
            script.inner_html,
            "{\n  \"@context\": \"http://schema.org\",\n  \"@type\": \"Thing\",\n  \"name\": \"n\"\n}"
        );
    }

    #[test]
    fn test_stringify_round_trip() {
        let doc = document(
            "Thing",
            fields(json!({"list": ["a", "b"], "inner": {"x": null}})),
        );
        let parsed: Value = serde_json::from_str(&stringify(&doc)).unwrap();
        assert_eq!(parsed, doc);
    }
}
