//
//  testrail-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for TestRail API Responses
//!
//! Since TestRail 6.7, bulk endpoints (`get_projects`, `get_cases`,
//! `get_runs`, ...) wrap their results in an envelope:
//!
//! ```json
//! {
//!     "offset": 0,
//!     "limit": 250,
//!     "size": 2,
//!     "_links": { "next": null, "prev": null },
//!     "projects": [ { "id": 1, "name": "Alpha" }, { "id": 2, "name": "Beta" } ]
//! }
//! ```
//!
//! The array key differs per resource, so the envelope is parsed in two
//! steps by [`codec::parse_list`](crate::api::codec::parse_list): the fixed
//! fields into [`PageEnvelope`], then the items under the resource key.
//! Older servers answer with a bare JSON array, which becomes a single
//! [`Page`] without links.
//!
//! # Notes
//!
//! - `_links.next` and `_links.prev` are relative URIs (`/api/v2/get_cases/1&offset=250`)
//!   and are `null` on the last and first page respectively
//! - `size` is the number of items in the current page, not the total

use serde::{Deserialize, Serialize};

/// Navigation links of a paginated response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    /// Relative URI of the next page, `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,

    /// Relative URI of the previous page, `None` on the first page.
    #[serde(default)]
    pub prev: Option<String>,
}

/// The fixed fields of the pagination envelope.
///
/// Every field defaults so that partially populated envelopes still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub offset: u64,

    #[serde(default)]
    pub limit: u64,

    #[serde(default)]
    pub size: u64,

    #[serde(default, rename = "_links")]
    pub links: PageLinks,
}

/// One page of results from a bulk endpoint.
///
/// # Example
///
/// ```rust
/// use testrail_cli::api::common::Page;
///
/// let page = Page::from_items(vec!["a", "b"]);
/// assert_eq!(page.size, 2);
/// assert!(!page.has_next());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Index of the first item of this page.
    pub offset: u64,

    /// Page size requested from (or imposed by) the server.
    pub limit: u64,

    /// Number of items in this page.
    pub size: u64,

    /// Links to the neighbouring pages.
    pub links: PageLinks,

    /// Items of this page.
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl<T> Page<T> {
    /// Builds a page from an envelope and its items.
    pub fn new(envelope: PageEnvelope, items: Vec<T>) -> Self {
        Self {
            offset: envelope.offset,
            limit: envelope.limit,
            size: envelope.size,
            links: envelope.links,
            items,
        }
    }

    /// Wraps a bare list (no envelope) as a single, complete page.
    pub fn from_items(items: Vec<T>) -> Self {
        let len = items.len() as u64;
        Self {
            offset: 0,
            limit: len,
            size: len,
            links: PageLinks::default(),
            items,
        }
    }

    /// Returns `true` if the server advertised a next page.
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }

    /// Relative URI of the next page, if any.
    pub fn next_url(&self) -> Option<&str> {
        self.links.next.as_deref()
    }

    /// Offset to request for the following page.
    ///
    /// Advances by the larger of `size` and the number of items, so an
    /// envelope without `size` still moves forward. `None` on the last page
    /// or when the page would not advance.
    pub fn next_offset(&self) -> Option<u64> {
        let step = self.size.max(self.items.len() as u64);
        (self.has_next() && step > 0).then(|| self.offset + step)
    }
}
