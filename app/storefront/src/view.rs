//! Render boundary for the product listing and panels.

use console::style;
use storefront_commerce::Product;

use crate::panels::PanelState;

/// Display surface the dispatcher renders into.
///
/// Receives exactly one call per user action, always with a fully
/// resolved result set or an error surface — never partial output.
pub trait ProductView {
    fn display_products(&mut self, products: &[Product]);
    fn display_error(&mut self, message: &str);
    fn panels_changed(&mut self, panels: &PanelState);
}

/// Terminal rendition of the store window.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductView for ConsoleView {
    fn display_products(&mut self, products: &[Product]) {
        if products.is_empty() {
            println!("{}", style("no products found").yellow());
            return;
        }

        println!("{}", style(format!("{} products", products.len())).bold());
        for product in products {
            let category = if product.category.is_empty() {
                String::new()
            } else {
                format!("  [{}]", style(&product.category).dim())
            };
            println!(
                "  {}  {}{}",
                style(format!("{:>9.2}", product.price)).green(),
                product.display_label(),
                category
            );
        }
    }

    fn display_error(&mut self, message: &str) {
        eprintln!("{} {}", style("✗").red(), style(message).red());
    }

    fn panels_changed(&mut self, panels: &PanelState) {
        let onoff = |visible: bool| if visible { "shown" } else { "hidden" };
        println!(
            "{} filter panel {}, chat panel {}",
            style("ℹ").blue(),
            onoff(panels.filter_visible),
            onoff(panels.chat_visible)
        );
        if panels.chat_visible {
            println!("  {}", style("💬 chat is open — /chat hides it").dim());
        }
    }
}
