//! Pagination types for the public product listing.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::DEFAULT_PAGE_NUMBER;
use crate::domain::PublicProduct;

/// Characters left unescaped, matching JavaScript's `encodeURIComponent`
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Search and page query parameters (`?query=&page=`)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text search across English/French names and descriptions
    pub query: Option<String>,
    /// 1-based page number; invalid values fall back to 1
    #[param(value_type = Option<u64>)]
    pub page: Option<String>,
}

impl SearchParams {
    /// Trimmed search text, `None` when blank.
    pub fn search_text(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
    }

    /// Requested page, clamped to at least 1.
    pub fn page_number(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE_NUMBER)
    }
}

/// One page of results as produced by the service layer
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page > 0 {
            self.total_items.div_ceil(self.per_page)
        } else {
            0
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(ProductPage = Paginated<PublicProduct>)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata with navigation links
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

impl<T> Paginated<T> {
    /// Build the response, linking neighbouring pages under `base_url`.
    ///
    /// The search text, when present, is carried into both links.
    pub fn from_page(page: Page<T>, base_url: &str, query: Option<&str>) -> Self {
        let total_pages = page.total_pages();
        let current = page.page;

        let link = |target: u64| {
            let mut url = format!("{}?page={}", base_url, target);
            if let Some(q) = query.filter(|q| !q.is_empty()) {
                url.push_str("&query=");
                url.extend(utf8_percent_encode(q, QUERY_COMPONENT));
            }
            url
        };

        let pagination = PaginationMeta {
            current_page: current,
            total_pages,
            per_page: page.per_page,
            total_items: page.total_items,
            next_page_url: (current < total_pages).then(|| link(current + 1)),
            prev_page_url: (current > 1).then(|| link(current - 1)),
        };

        Self {
            data: page.items,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current: u64, items: usize, total: u64) -> Page<u32> {
        Page {
            items: vec![0; items],
            page: current,
            per_page: 10,
            total_items: total,
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(page(1, 10, 25).total_pages(), 3);
        assert_eq!(page(1, 10, 30).total_pages(), 3);
        assert_eq!(page(1, 0, 0).total_pages(), 0);
    }

    #[test]
    fn test_last_page_has_no_next_link() {
        let response = Paginated::from_page(page(3, 5, 25), "/products.json", None);

        assert_eq!(response.data.len(), 5);
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.next_page_url, None);
        assert_eq!(
            response.pagination.prev_page_url.as_deref(),
            Some("/products.json?page=2")
        );
    }

    #[test]
    fn test_first_page_has_no_prev_link() {
        let response = Paginated::from_page(page(1, 10, 25), "/products.json", Some("apple"));

        assert_eq!(response.pagination.prev_page_url, None);
        assert_eq!(
            response.pagination.next_page_url.as_deref(),
            Some("/products.json?page=2&query=apple")
        );
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let response = Paginated::from_page(
            page(1, 10, 11),
            "https://catalog.example.com/products.json",
            Some("crème brûlée & co"),
        );

        assert_eq!(
            response.pagination.next_page_url.as_deref(),
            Some("https://catalog.example.com/products.json?page=2&query=cr%C3%A8me%20br%C3%BBl%C3%A9e%20%26%20co")
        );
    }

    #[test]
    fn test_empty_result_has_no_links() {
        let response = Paginated::from_page(page(1, 0, 0), "/products.json", None);

        assert_eq!(response.pagination.total_pages, 0);
        assert_eq!(response.pagination.next_page_url, None);
        assert_eq!(response.pagination.prev_page_url, None);
    }

    #[test]
    fn test_page_number_parsing() {
        let params = |p: &str| SearchParams {
            query: None,
            page: Some(p.to_string()),
        };

        assert_eq!(SearchParams::default().page_number(), 1);
        assert_eq!(params("3").page_number(), 3);
        assert_eq!(params("0").page_number(), 1);
        assert_eq!(params("-2").page_number(), 1);
        assert_eq!(params("abc").page_number(), 1);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let params = SearchParams {
            query: Some("   ".to_string()),
            page: None,
        };
        assert_eq!(params.search_text(), None);

        let params = SearchParams {
            query: Some("  apple ".to_string()),
            page: None,
        };
        assert_eq!(params.search_text().as_deref(), Some("apple"));
    }
}
