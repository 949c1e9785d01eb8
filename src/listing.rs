use serde::Serialize;

use crate::models::Poll;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_SHORT_DESC: usize = 150;

/// One page of a poll listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub docs: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

/// Slice out one 1-based page. Page 0 is read as page 1 and a page size of 0
/// falls back to [`DEFAULT_PAGE_SIZE`]; a page past the end comes back empty
/// with `total` still set.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = if page_size < 1 { DEFAULT_PAGE_SIZE } else { page_size };

    let docs = items
        .iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    Page {
        docs,
        page,
        page_size,
        total: items.len(),
    }
}

/// Description cut to [`MAX_SHORT_DESC`] characters, with `...` when cut.
pub fn short_desc(desc: &str) -> String {
    if desc.chars().count() > MAX_SHORT_DESC {
        let cut: String = desc.chars().take(MAX_SHORT_DESC).collect();
        format!("{}...", cut)
    } else {
        desc.to_string()
    }
}

impl Poll {
    pub fn short_desc(&self) -> String {
        short_desc(self.desc.as_deref().unwrap_or_default())
    }
}
