//! `BreadcrumbList` schema.

use serde_json::Value;

use super::{compose, nested};
use crate::config::{Breadcrumb, JsonMap};
use crate::seo::ScriptTag;

/// Compose a `BreadcrumbList` with one `ListItem` per crumb.
///
/// Positions are 1-based and follow the slice order.
pub fn breadcrumbs(trail: &[Breadcrumb]) -> ScriptTag {
    let items = trail
        .iter()
        .enumerate()
        .map(|(index, crumb)| list_item(index + 1, crumb))
        .collect();

    let mut fields = JsonMap::new();
    fields.insert("itemListElement".into(), Value::Array(items));
    compose("BreadcrumbList", fields)
}

fn list_item(position: usize, crumb: &Breadcrumb) -> Value {
    let mut item = JsonMap::new();
    item.insert("@id".into(), crumb.id.as_str().into());
    item.insert("name".into(), crumb.name.as_str().into());
    if let Some(image) = crumb.image.as_deref().filter(|s| !s.is_empty()) {
        item.insert("image".into(), image.into());
    }

    let mut fields = JsonMap::new();
    fields.insert("position".into(), position.into());
    fields.insert("item".into(), Value::Object(item));
    nested("ListItem", fields)
}
