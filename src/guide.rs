//! Guidance text that steers the model toward the catalog vocabulary.

use std::collections::HashMap;

use tracing::{instrument, trace};

use crate::ai::prompts::{
    MENU_ITEM_GUIDE_FOOTER, MENU_ITEM_GUIDE_HEADER, STYLE_DESCRIPTION_PLACEHOLDER,
    STYLE_GUIDE_HEADER,
};
use crate::catalog::{extract_menu_key, Catalog, ITEM_MENU_KEY_FIELDS, MENU_KEY_FIELDS};

/// Lines listing the priced components of every catalog menu.
///
/// Items without a `unit_price` are decorations and are left out. Menus are
/// listed in catalog order and only when at least one priced item maps to
/// them; within a menu the components keep catalog order.
#[instrument(level = "trace", skip_all)]
pub fn build_menu_item_guide(catalog: &Catalog) -> Vec<String> {
    let mut components: HashMap<String, Vec<String>> = HashMap::new();
    for item in &catalog.menu_items {
        if !item.is_set("unit_price") {
            trace!(item = ?item.text("item_name"), "Skipping unpriced item");
            continue;
        }
        let menu_key = extract_menu_key(item, &ITEM_MENU_KEY_FIELDS);
        let Some(name) = item.text("item_name") else {
            continue;
        };
        if menu_key.is_empty() {
            trace!(item = %name, "Skipping item without menu key");
            continue;
        }
        components.entry(menu_key).or_default().push(name);
    }

    let mut lines = vec![MENU_ITEM_GUIDE_HEADER.to_string()];
    for menu in &catalog.menus {
        let menu_key = extract_menu_key(menu, &MENU_KEY_FIELDS);
        let Some(display_name) = menu.text("name") else {
            continue;
        };
        if let Some(names) = components.get(&menu_key) {
            lines.push(format!("- {display_name}: {}", names.join(", ")));
        }
    }
    lines.extend(MENU_ITEM_GUIDE_FOOTER.iter().map(|l| l.to_string()));
    lines
}

/// One line per named style, with a placeholder for blank descriptions.
#[instrument(level = "trace", skip_all)]
pub fn build_style_guide(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![STYLE_GUIDE_HEADER.to_string()];
    for style in &catalog.styles {
        let Some(name) = style.text("name") else {
            continue;
        };
        let description = style
            .text("description")
            .unwrap_or_else(|| STYLE_DESCRIPTION_PLACEHOLDER.to_string());
        lines.push(format!("- {name}: {description}"));
    }
    lines
}
