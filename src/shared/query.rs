//! Query-string parameters for listable resources.

/// Default page for list endpoints.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination and filter parameters for `GET /publications` and `GET /images`.
///
/// Filters left as `None` are not sent at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    /// Free-text search.
    pub search: Option<String>,
    pub status: Option<String>,
    /// Resource type filter (`type` on the wire).
    pub kind: Option<String>,
    pub publication_id: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            status: None,
            kind: None,
            publication_id: None,
        }
    }
}

impl ListParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_publication(mut self, publication_id: impl Into<String>) -> Self {
        self.publication_id = Some(publication_id.into());
        self
    }

    /// Render as `?page=..&limit=..[&search=..][&status=..][&type=..][&publicationId=..]`.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        if let Some(s) = &self.search {
            params.push(format!("search={}", urlencoding::encode(s)));
        }
        if let Some(s) = &self.status {
            params.push(format!("status={}", urlencoding::encode(s)));
        }
        if let Some(k) = &self.kind {
            params.push(format!("type={}", urlencoding::encode(k)));
        }
        if let Some(p) = &self.publication_id {
            params.push(format!("publicationId={}", urlencoding::encode(p)));
        }
        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters() {
        assert_eq!(ListParams::new(1, 5).to_query_string(), "?page=1&limit=5");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ListParams::default().to_query_string(), "?page=1&limit=10");
    }

    #[test]
    fn test_filters_in_order_and_encoded() {
        let q = ListParams::new(2, 20)
            .with_publication("pub_1")
            .with_kind("blog")
            .with_status("draft")
            .with_search("ai & business")
            .to_query_string();
        assert_eq!(
            q,
            "?page=2&limit=20&search=ai%20%26%20business&status=draft&type=blog&publicationId=pub_1"
        );
    }
}
