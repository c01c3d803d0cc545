//! Output formatting for products and result pages (table, JSON, markdown, CSV).

use crate::catalog::{Category, Product};
use crate::config::OutputFormat;
use crate::query::ResultPage;

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product with its related products.
    pub fn format_product(&self, product: &Product, related: &[Product]) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(product, related),
            OutputFormat::Table => self.table_single(product, related),
            OutputFormat::Markdown => self.markdown_single(product, related),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats a list of products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats a result page with its pagination footer.
    pub fn format_page(&self, page: &ResultPage) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(page).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => self.format_products(&page.products),
            OutputFormat::Table | OutputFormat::Markdown => {
                let body = self.format_products(&page.products);
                if page.total == 0 {
                    return body;
                }
                format!(
                    "{}\nPage {} of {} ({} matching products)",
                    body, page.page, page.total_pages, page.total
                )
            }
        }
    }

    /// Formats a list of categories.
    pub fn format_categories(&self, categories: &[Category]) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(categories).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Csv => {
                let mut lines = vec!["id,name".to_string()];
                lines.extend(
                    categories.iter().map(|c| format!("{},{}", c.id, Self::csv_escape(&c.name))),
                );
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines =
                    vec!["| ID | Name |".to_string(), "|----|------|".to_string()];
                lines.extend(categories.iter().map(|c| format!("| {} | {} |", c.id, c.name)));
                lines.join("\n")
            }
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("{:<20} {}", "ID", "Name"),
                    format!("{:-<20} {:-<20}", "", ""),
                ];
                lines.extend(categories.iter().map(|c| format!("{:<20} {}", c.id, c.name)));
                lines.join("\n")
            }
        }
    }

    // JSON formatting

    fn json_single(&self, product: &Product, related: &[Product]) -> String {
        let value = serde_json::json!({ "product": product, "related": related });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, product: &Product, related: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("ID:       {}", product.id));
        lines.push(format!("Name:     {}", product.name));
        lines.push(format!("Category: {}", product.category.name));

        let verified = if product.vendor.verified { " (verified)" } else { "" };
        lines.push(format!("Vendor:   {}{}", product.vendor.name, verified));
        lines.push(format!("Price:    {}", Self::price_text(product)));
        lines.push(format!(
            "Rating:   {:.1}/5 ({} reviews)",
            product.average_rating, product.total_reviews
        ));
        lines.push(format!("Stock:    {}", Self::stock_text(product)));

        if let Some(shipping) = &product.shipping {
            let cost =
                if shipping.free { "Free".to_string() } else { format!("{:.2}", shipping.cost) };
            lines.push(format!("Shipping: {} ({} days)", cost, shipping.estimated_days));
        }

        if !product.tags.is_empty() {
            lines.push(format!("Tags:     {}", product.tags.join(", ")));
        }

        if let Some(variants) = &product.variants {
            for variant in variants {
                let modifier = variant
                    .price_modifier
                    .map(|m| format!(" (+{:.2})", m))
                    .unwrap_or_default();
                lines.push(format!(
                    "{:<9} {}{}",
                    format!("{}:", variant.name),
                    variant.options.join(" / "),
                    modifier
                ));
            }
        }

        if let Some(specs) = &product.specifications {
            lines.push(String::new());
            lines.push("Specifications:".to_string());
            for (key, value) in specs {
                lines.push(format!("  {:<20} {}", key, value));
            }
        }

        lines.push(String::new());
        lines.push(product.description.clone());

        if !related.is_empty() {
            lines.push(String::new());
            lines.push("Related:".to_string());
            for other in related {
                lines.push(format!("  {:<10} {:>10.2}  {}", other.id, other.price, other.name));
            }
        }

        lines.join("\n")
    }

    fn table_products(&self, products: &[Product]) -> String {
        let id_width = 10;
        let price_width = 10;
        let rating_width = 6;
        let stock_width = 6;
        let name_width = 40;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<price_width$}  {:<rating_width$}  {:<stock_width$}  {}",
            "ID", "Price", "Rating", "Stock", "Name"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<price_width$}  {:-<rating_width$}  {:-<stock_width$}  {:-<name_width$}",
            "", "", "", "", ""
        ));

        for product in products {
            lines.push(format!(
                "{:<id_width$}  {:>price_width$.2}  {:>rating_width$.1}  {:>stock_width$}  {}",
                product.id,
                product.price,
                product.average_rating,
                product.stock_quantity,
                Self::truncate(&product.name, name_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, product: &Product, related: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", product.name));
        lines.push(String::new());

        lines.push(format!("- **ID:** {}", product.id));
        lines.push(format!("- **Category:** {}", product.category.name));
        lines.push(format!("- **Vendor:** {}", product.vendor.name));

        match product.compare_price.filter(|c| *c > product.price) {
            Some(compare) => {
                lines.push(format!("- **Price:** {:.2} ~~{:.2}~~", product.price, compare))
            }
            None => lines.push(format!("- **Price:** {:.2}", product.price)),
        }

        lines.push(format!(
            "- **Rating:** {:.1}/5 ({} reviews)",
            product.average_rating, product.total_reviews
        ));
        lines.push(format!("- **Stock:** {}", Self::stock_text(product)));

        if product.featured {
            lines.push("- **Featured**".to_string());
        }

        if let Some(image) = product.images.first() {
            lines.push(String::new());
            lines.push(format!("![{}]({})", product.name, image));
        }

        lines.push(String::new());
        lines.push(product.description.clone());

        if !related.is_empty() {
            lines.push(String::new());
            lines.push("### Related".to_string());
            for other in related {
                lines.push(format!("- {} ({:.2})", other.name, other.price));
            }
        }

        lines.join("\n")
    }

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Price | Rating | Stock | Name |".to_string());
        lines.push("|----|-------|--------|-------|------|".to_string());

        for product in products {
            lines.push(format!(
                "| {} | {:.2} | {:.1} | {} | {} |",
                product.id,
                product.price,
                product.average_rating,
                product.stock_quantity,
                Self::truncate(&product.name, 40)
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,name,price,compare_price,category,vendor,rating,reviews,stock,featured,tags".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            let compare = product.compare_price.map(|c| c.to_string()).unwrap_or_default();

            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                product.id,
                Self::csv_escape(&product.name),
                product.price,
                compare,
                Self::csv_escape(&product.category.name),
                Self::csv_escape(&product.vendor.name),
                product.average_rating,
                product.total_reviews,
                product.stock_quantity,
                product.featured,
                Self::csv_escape(&product.tags.join(";")),
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    // Shared helpers

    fn price_text(product: &Product) -> String {
        match (product.compare_price, product.discount_percent()) {
            (Some(compare), Some(discount)) => {
                format!("{:.2} (was {:.2}, -{}%)", product.price, compare, discount)
            }
            _ => format!("{:.2}", product.price),
        }
    }

    fn stock_text(product: &Product) -> String {
        if product.in_stock() {
            format!("{} in stock", product.stock_quantity)
        } else {
            "Out of stock".to_string()
        }
    }

    fn truncate(s: &str, max: usize) -> String {
        if s.chars().count() > max {
            let head: String = s.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", head)
        } else {
            s.to_string()
        }
    }
}
