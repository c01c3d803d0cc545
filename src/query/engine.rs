//! Filter, sort, and paginate products.

use super::{QuerySpec, ResultPage, SortKey, SortOrder};
use crate::catalog::{Category, Product};
use crate::error::CatalogError;
use crate::filters::{FilterChain, FilterChainBuilder};
use std::cmp::Ordering;
use tracing::debug;

/// Runs queries against a borrowed, read-only product slice.
///
/// Every operation is a pure function of the slice and its arguments, so
/// repeating a call against the same products yields an equal result.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    products: &'a [Product],
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over the given products.
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// Filters, sorts, and paginates the products.
    pub fn query(&self, spec: &QuerySpec) -> ResultPage {
        let filters = filters_for(spec);
        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let mut matched = filters.apply(self.products);

        if let Some(key) = spec.sort_by {
            debug!("Sorting {} products by {} {}", matched.len(), key, spec.sort_order);
            sort_products(&mut matched, key, spec.sort_order);
        }

        paginate(matched, spec.effective_page(), spec.effective_page_size())
    }

    /// Searches name, description, tags, and category name.
    ///
    /// Matches keep catalog order. A blank query matches nothing.
    pub fn search(&self, text: &str, page: usize, page_size: usize) -> ResultPage {
        let page = page.max(1);
        let page_size = page_size.max(1);

        if text.trim().is_empty() {
            debug!("Blank search query, returning empty page");
            return ResultPage::empty(page, page_size);
        }

        let matched = FilterChainBuilder::new().text(text).build().apply(self.products);
        paginate(matched, page, page_size)
    }

    /// Looks up a product by exact id.
    pub fn get_by_id(&self, id: &str) -> Result<&'a Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Returns up to `limit` other products in the same category.
    ///
    /// An unknown id yields no related products.
    pub fn get_related(&self, id: &str, limit: usize) -> Vec<&'a Product> {
        let Ok(product) = self.get_by_id(id) else {
            debug!("No product {}, no related products", id);
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|p| p.id != product.id && p.category.id == product.category.id)
            .take(limit)
            .collect()
    }

    /// Returns all featured products in catalog order.
    pub fn featured(&self) -> Vec<&'a Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Returns each distinct category once, in order of first appearance.
    pub fn categories(&self) -> Vec<&'a Category> {
        let mut categories: Vec<&Category> = Vec::new();
        for product in self.products {
            if !categories.iter().any(|c| c.id == product.category.id) {
                categories.push(&product.category);
            }
        }
        categories
    }
}

fn filters_for(spec: &QuerySpec) -> FilterChain {
    FilterChainBuilder::new()
        .category(spec.category.as_deref())
        .price_range(spec.min_price, spec.max_price)
        .min_rating(spec.min_rating)
        .featured(spec.featured)
        .in_stock(spec.in_stock)
        .vendor(spec.vendor.as_deref())
        .tags(&spec.tags)
        .build()
}

/// Stable sort; equal keys keep their catalog order in either direction.
fn sort_products(products: &mut [&Product], key: SortKey, order: SortOrder) {
    products.sort_by(|a, b| order.apply(compare(a, b, key)));
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Rating => a.average_rating.total_cmp(&b.average_rating),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

fn paginate(matched: Vec<&Product>, page: usize, page_size: usize) -> ResultPage {
    let total = matched.len();
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);

    debug!("Page {} of {} ({} matches, {} per page)", page, total_pages, total, page_size);

    let products = matched.into_iter().skip(start).take(page_size).cloned().collect();

    ResultPage { products, total, page, page_size, total_pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_products;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn ref_ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_query_no_filters_returns_catalog_order() {
        let products = demo_products();
        let page = QueryEngine::new(&products).query(&QuerySpec::default());

        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(&page.products), vec!["prod_1", "prod_2", "prod_3", "prod_4"]);
    }

    #[test]
    fn test_query_cheapest_two() {
        let products = demo_products();
        let spec = QuerySpec::page(1, 2).sorted_by(SortKey::Price, SortOrder::Asc);
        let page = QueryEngine::new(&products).query(&spec);

        assert_eq!(ids(&page.products), vec!["prod_1", "prod_4"]);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 2);
        assert!(page.has_more());
    }

    #[test]
    fn test_query_sort_desc() {
        let products = demo_products();
        let spec = QuerySpec::default().sorted_by(SortKey::Price, SortOrder::Desc);
        let page = QueryEngine::new(&products).query(&spec);

        assert_eq!(ids(&page.products), vec!["prod_2", "prod_3", "prod_4", "prod_1"]);
    }

    #[test]
    fn test_query_sort_by_rating() {
        let products = demo_products();
        let spec = QuerySpec::default().sorted_by(SortKey::Rating, SortOrder::Desc);
        let page = QueryEngine::new(&products).query(&spec);

        assert_eq!(ids(&page.products), vec!["prod_2", "prod_1", "prod_3", "prod_4"]);
    }

    #[test]
    fn test_query_sort_by_name_case_insensitive() {
        let products = demo_products();
        let spec = QuerySpec::default().sorted_by(SortKey::Name, SortOrder::Asc);
        let page = QueryEngine::new(&products).query(&spec);

        // iPhone sorts between MacBook and Premium only when case is ignored
        assert_eq!(ids(&page.products), vec!["prod_3", "prod_2", "prod_4", "prod_1"]);
    }

    #[test]
    fn test_query_sort_by_created_at() {
        let products = demo_products();
        let spec = QuerySpec::default().sorted_by(SortKey::CreatedAt, SortOrder::Desc);
        let page = QueryEngine::new(&products).query(&spec);

        assert_eq!(ids(&page.products), vec!["prod_4", "prod_3", "prod_2", "prod_1"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let mut products = demo_products();
        for product in &mut products {
            product.price = 10.0;
        }
        products[2].price = 5.0;

        let engine = QueryEngine::new(&products);

        let asc = engine.query(&QuerySpec::default().sorted_by(SortKey::Price, SortOrder::Asc));
        assert_eq!(ids(&asc.products), vec!["prod_3", "prod_1", "prod_2", "prod_4"]);

        let desc = engine.query(&QuerySpec::default().sorted_by(SortKey::Price, SortOrder::Desc));
        assert_eq!(ids(&desc.products), vec!["prod_1", "prod_2", "prod_4", "prod_3"]);
    }

    #[test]
    fn test_query_category() {
        let products = demo_products();
        let engine = QueryEngine::new(&products);

        let spec = QuerySpec { category: Some("furniture".to_string()), ..QuerySpec::default() };
        assert_eq!(ids(&engine.query(&spec).products), vec!["prod_4"]);

        let spec = QuerySpec { category: Some("cat_furniture".to_string()), ..QuerySpec::default() };
        assert_eq!(ids(&engine.query(&spec).products), vec!["prod_4"]);
    }

    #[test]
    fn test_query_featured_and_stock() {
        let mut products = demo_products();
        products[0].stock_quantity = 0;
        let engine = QueryEngine::new(&products);

        let spec = QuerySpec { featured: Some(true), in_stock: true, ..QuerySpec::default() };
        let page = engine.query(&spec);
        assert_eq!(ids(&page.products), vec!["prod_2", "prod_3"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_query_out_of_range_page_is_empty() {
        let products = demo_products();
        let page = QueryEngine::new(&products).query(&QuerySpec::page(5, 2));

        assert!(page.is_empty());
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 5);
    }

    #[test]
    fn test_query_clamps_page_and_size() {
        let products = demo_products();
        let page = QueryEngine::new(&products).query(&QuerySpec::page(0, 0));

        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 4);
        assert_eq!(ids(&page.products), vec!["prod_1"]);
    }

    #[test]
    fn test_query_huge_page_does_not_overflow() {
        let products = demo_products();
        let page = QueryEngine::new(&products).query(&QuerySpec::page(usize::MAX, usize::MAX));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_query_rating_above_scale_matches_nothing() {
        let mut products = demo_products();
        products[0].average_rating = 5.0;
        let engine = QueryEngine::new(&products);

        let spec = QuerySpec { min_rating: Some(5.5), ..QuerySpec::default() };
        let page = engine.query(&spec);
        assert!(page.is_empty());
        assert_eq!(page.total, 0);

        let spec = QuerySpec { min_rating: Some(5.0), ..QuerySpec::default() };
        assert_eq!(ids(&engine.query(&spec).products), vec!["prod_1"]);
    }

    #[test]
    fn test_query_ignores_non_finite_bounds() {
        let products = demo_products();
        let spec = QuerySpec {
            min_price: Some(f64::NAN),
            max_price: Some(f64::INFINITY),
            min_rating: Some(f64::NAN),
            ..QuerySpec::default()
        };

        let page = QueryEngine::new(&products).query(&spec);
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_query_empty_catalog() {
        let page = QueryEngine::new(&[]).query(&QuerySpec::default());
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_search() {
        let products = demo_products();
        let page = QueryEngine::new(&products).search("macbook", 1, 12);

        assert_eq!(ids(&page.products), vec!["prod_2"]);
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_paginates_in_catalog_order() {
        let products = demo_products();
        let engine = QueryEngine::new(&products);

        let first = engine.search("apple", 1, 1);
        assert_eq!(ids(&first.products), vec!["prod_2"]);
        assert_eq!(first.total, 2);
        assert_eq!(first.total_pages, 2);

        let second = engine.search("apple", 2, 1);
        assert_eq!(ids(&second.products), vec!["prod_3"]);
    }

    #[test]
    fn test_search_blank_query() {
        let products = demo_products();
        let page = QueryEngine::new(&products).search("   ", 0, 0);

        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
    }

    #[test]
    fn test_get_by_id() {
        let products = demo_products();
        let engine = QueryEngine::new(&products);

        assert_eq!(engine.get_by_id("prod_3").unwrap().name, "iPhone 15 Pro Max");

        let err = engine.get_by_id("prod_99").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("prod_99".to_string()));
    }

    #[test]
    fn test_get_related() {
        let mut products = demo_products();
        let mut extra = products[0].clone();
        extra.id = "prod_5".to_string();
        products.push(extra);

        let engine = QueryEngine::new(&products);
        assert_eq!(ref_ids(&engine.get_related("prod_1", 4)), vec!["prod_5"]);
        assert_eq!(ref_ids(&engine.get_related("prod_5", 4)), vec!["prod_1"]);
        assert!(engine.get_related("prod_2", 4).is_empty());
        assert!(engine.get_related("prod_1", 0).is_empty());
    }

    #[test]
    fn test_get_related_respects_limit() {
        let mut products = demo_products();
        for n in 5..12 {
            let mut extra = products[3].clone();
            extra.id = format!("prod_{}", n);
            products.push(extra);
        }

        let engine = QueryEngine::new(&products);
        let related = engine.get_related("prod_4", 4);
        assert_eq!(ref_ids(&related), vec!["prod_5", "prod_6", "prod_7", "prod_8"]);
    }

    #[test]
    fn test_get_related_unknown_id() {
        let products = demo_products();
        assert!(QueryEngine::new(&products).get_related("missing", 4).is_empty());
    }

    #[test]
    fn test_featured() {
        let products = demo_products();
        let featured = QueryEngine::new(&products).featured();
        assert_eq!(ref_ids(&featured), vec!["prod_1", "prod_2", "prod_3"]);
    }

    #[test]
    fn test_categories() {
        let mut products = demo_products();
        let mut extra = products[0].clone();
        extra.id = "prod_5".to_string();
        products.push(extra);

        let categories = QueryEngine::new(&products).categories();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Electronics", "Computers", "Smartphones", "Furniture"]);
    }
}
