//! Navigation link rendering
//!
//! Turns the neighbouring-page offsets of a [`Slice`] into resolvable links and
//! renders them in one of three explicitly selected presentations:
//!
//! - [`LinkStyle::Body`]: `{self, next?, previous?}` embedded in the response body
//! - [`LinkStyle::LinkHeader`]: repeated `Link: <url>; rel="..."` entries
//! - [`LinkStyle::CustomHeaders`]: one `previousLink` / `nextLink` header each
//!
//! A relation that does not exist is never written, in any style.

use crate::error::{Error, Result};
use crate::pagination::Slice;
use axum::http::header::{HeaderMap, HeaderName, HeaderValue, LINK};
use serde::Serialize;

/// Header carrying the previous page in the custom-header style
pub const PREVIOUS_LINK_HEADER: HeaderName = HeaderName::from_static("previouslink");

/// Header carrying the next page in the custom-header style
pub const NEXT_LINK_HEADER: HeaderName = HeaderName::from_static("nextlink");

/// How navigation links are presented to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Links embedded as `pagination` fields in the body
    Body,
    /// Standard multi-value `Link` header with `rel` parameters
    LinkHeader,
    /// One custom header per relation
    CustomHeaders,
}

/// Rendered links, ready to attach to a response
#[derive(Debug, Clone)]
pub enum Presentation {
    /// Body fields
    Body(BodyLinks),
    /// Response headers
    Headers(HeaderMap),
}

/// Link fields embedded in a response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyLinks {
    /// The request's own path and query
    #[serde(rename = "self")]
    pub self_url: String,
    /// Following page, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Preceding page, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

/// Resolvable links for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// URL the page was requested with
    pub self_url: String,
    /// Previous page, if `offset > 0`
    pub previous: Option<String>,
    /// Next page, if `offset + limit < size`
    pub next: Option<String>,
}

impl PageLinks {
    /// Build the links for `slice` as served under `path`
    pub fn new(path: &str, self_url: impl Into<String>, slice: &Slice) -> Self {
        let nav = slice.navigation();
        Self {
            self_url: self_url.into(),
            previous: nav
                .previous
                .map(|offset| page_link(path, slice.total, slice.limit, offset)),
            next: nav
                .next
                .map(|offset| page_link(path, slice.total, slice.limit, offset)),
        }
    }

    /// Render in the requested style
    pub fn render(&self, style: LinkStyle) -> Result<Presentation> {
        match style {
            LinkStyle::Body => Ok(Presentation::Body(self.to_body())),
            LinkStyle::LinkHeader => self.link_headers().map(Presentation::Headers),
            LinkStyle::CustomHeaders => self.custom_headers().map(Presentation::Headers),
        }
    }

    /// Body representation
    pub fn to_body(&self) -> BodyLinks {
        BodyLinks {
            self_url: self.self_url.clone(),
            next: self.next.clone(),
            previous: self.previous.clone(),
        }
    }

    fn link_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.append(LINK, header_value(&link_entry(&self.self_url, "self"))?);
        if let Some(previous) = &self.previous {
            headers.append(LINK, header_value(&link_entry(previous, "previous"))?);
        }
        if let Some(next) = &self.next {
            headers.append(LINK, header_value(&link_entry(next, "next"))?);
        }
        Ok(headers)
    }

    fn custom_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(previous) = &self.previous {
            headers.insert(PREVIOUS_LINK_HEADER, header_value(previous)?);
        }
        if let Some(next) = &self.next {
            headers.insert(NEXT_LINK_HEADER, header_value(next)?);
        }
        Ok(headers)
    }
}

/// Link to the page at `offset`; `size` and `limit` are always restated
pub fn page_link(path: &str, size: u64, limit: u64, offset: u64) -> String {
    format!("{path}?size={size}&limit={limit}&offset={offset}")
}

/// Single `Link` header entry, e.g. `</linking?offset=5>; rel="next"`
pub fn link_entry(url: &str, rel: &str) -> String {
    format!("<{url}>; rel=\"{rel}\"")
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::Other(format!("Invalid link header: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn links(offset: u64) -> PageLinks {
        PageLinks::new("/linking", "/linking", &Slice::new(25, offset, 5))
    }

    #[test]
    fn test_page_link_format() {
        assert_eq!(
            page_link("/response/body", 25, 5, 10),
            "/response/body?size=25&limit=5&offset=10"
        );
        assert_eq!(link_entry("/linking", "self"), "</linking>; rel=\"self\"");
    }

    #[test]
    fn test_links_first_page() {
        let links = links(0);
        assert_eq!(links.previous, None);
        assert_eq!(
            links.next.as_deref(),
            Some("/linking?size=25&limit=5&offset=5")
        );
    }

    #[test]
    fn test_links_last_page() {
        let links = links(20);
        assert_eq!(
            links.previous.as_deref(),
            Some("/linking?size=25&limit=5&offset=15")
        );
        assert_eq!(links.next, None);
    }

    #[test]
    fn test_body_omits_missing_links() {
        let Presentation::Body(body) = links(0).render(LinkStyle::Body).unwrap() else {
            panic!("Expected body presentation");
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"self": "/linking", "next": "/linking?size=25&limit=5&offset=5"})
        );
    }

    #[test]
    fn test_link_header_entries() {
        let Presentation::Headers(headers) = links(5).render(LinkStyle::LinkHeader).unwrap()
        else {
            panic!("Expected header presentation");
        };

        let entries: Vec<&str> = headers
            .get_all(LINK)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(
            entries,
            vec![
                "</linking>; rel=\"self\"",
                "</linking?size=25&limit=5&offset=0>; rel=\"previous\"",
                "</linking?size=25&limit=5&offset=10>; rel=\"next\"",
            ]
        );
    }

    #[test]
    fn test_link_header_self_only() {
        let slice = Slice::new(3, 0, 5);
        let links = PageLinks::new("/linking", "/linking?size=3", &slice);
        let Presentation::Headers(headers) = links.render(LinkStyle::LinkHeader).unwrap() else {
            panic!("Expected header presentation");
        };
        assert_eq!(headers.get_all(LINK).iter().count(), 1);
    }

    #[test]
    fn test_custom_headers() {
        let Presentation::Headers(headers) = links(0).render(LinkStyle::CustomHeaders).unwrap()
        else {
            panic!("Expected header presentation");
        };
        assert!(headers.get(PREVIOUS_LINK_HEADER).is_none());
        assert_eq!(
            headers.get(NEXT_LINK_HEADER).unwrap(),
            "/linking?size=25&limit=5&offset=5"
        );
        assert!(headers.get(LINK).is_none());
    }
}
