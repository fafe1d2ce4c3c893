//! Search parameters for the Guardian `/search` endpoint.

/// Result ordering accepted by the API's `order-by` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Newest,
    Oldest,
    Relevance,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Newest => "newest",
            OrderBy::Oldest => "oldest",
            OrderBy::Relevance => "relevance",
        }
    }
}

/// A single listing request. `Default` reproduces the app's fixed query:
/// the politics section with contributor tags so author names come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub section: Option<String>,
    pub show_tags: Vec<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub order_by: Option<OrderBy>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            section: Some("politics".to_string()),
            show_tags: vec!["contributor".to_string()],
            page: None,
            page_size: None,
            order_by: None,
        }
    }
}

impl SearchQuery {
    /// Sets the section filter. An empty string clears it.
    pub fn with_section(mut self, section: &str) -> Self {
        let section = section.trim();
        self.section = (!section.is_empty()).then(|| section.to_string());
        self
    }

    pub fn without_section(mut self) -> Self {
        self.section = None;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Query parameters in the order they appear on the wire, API key excluded.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(section) = self.section.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("section", section.to_string()));
        }
        if !self.show_tags.is_empty() {
            params.push(("show-tags", self.show_tags.join(",")));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("page-size", page_size.to_string()));
        }
        if let Some(order_by) = self.order_by {
            params.push(("order-by", order_by.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_politics_with_contributors() {
        let params = SearchQuery::default().params();
        assert_eq!(
            params,
            vec![
                ("section", "politics".to_string()),
                ("show-tags", "contributor".to_string()),
            ]
        );
    }

    #[test]
    fn blank_section_clears_filter() {
        let query = SearchQuery::default().with_section("   ");
        assert!(query.section.is_none());
    }

    #[test]
    fn blank_section_set_directly_is_not_sent() {
        let query = SearchQuery {
            section: Some(String::new()),
            ..SearchQuery::default()
        };
        assert_eq!(query.params(), vec![("show-tags", "contributor".to_string())]);
    }

    #[test]
    fn pagination_and_ordering_are_emitted() {
        let params = SearchQuery::default()
            .without_section()
            .with_page(2)
            .with_page_size(20)
            .with_order_by(OrderBy::Oldest)
            .params();
        assert_eq!(
            params,
            vec![
                ("show-tags", "contributor".to_string()),
                ("page", "2".to_string()),
                ("page-size", "20".to_string()),
                ("order-by", "oldest".to_string()),
            ]
        );
    }
}
