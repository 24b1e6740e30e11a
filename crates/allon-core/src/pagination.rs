//! Page bounds inference and page-number affordances

use crate::envelope::PaginationMeta;

/// Projects requested per page
pub const PAGE_SIZE: usize = 5;

/// Where the page bounds of the last load came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationSource {
    /// `pagination.totalPages` / `pagination.total`
    Server,
    /// Bare `total` count
    Total,
    /// Guessed from whether the page came back full
    #[default]
    Heuristic,
}

/// Resolved bounds of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub total_pages: u32,
    /// Exact for server-supplied bounds, a lower bound for the heuristic
    pub total_projects: u64,
    pub source: PaginationSource,
}

/// Whether another page may follow a page that returned `returned` items
///
/// Only a full page suggests more data. Authoritative totals are deliberately
/// not consulted, so a collection that is an exact multiple of the page size
/// offers one trailing empty page.
pub fn has_next_page(returned: usize, page_size: usize) -> bool {
    page_size > 0 && returned == page_size
}

fn pages_for(total: u64, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(page_size as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Resolve page bounds for `page`, preferring server metadata
pub fn resolve_bounds(
    page: u32,
    returned: usize,
    page_size: usize,
    meta: Option<&PaginationMeta>,
    total: Option<u64>,
) -> PageBounds {
    if let Some(meta) = meta {
        match (meta.total_pages, meta.total) {
            (Some(total_pages), Some(total)) => {
                return PageBounds {
                    total_pages,
                    total_projects: total,
                    source: PaginationSource::Server,
                };
            }
            (None, Some(total)) => {
                return PageBounds {
                    total_pages: pages_for(total, page_size),
                    total_projects: total,
                    source: PaginationSource::Server,
                };
            }
            (Some(total_pages), None) => {
                return PageBounds {
                    total_pages,
                    total_projects: u64::from(total_pages) * page_size as u64,
                    source: PaginationSource::Server,
                };
            }
            (None, None) => {}
        }
    }

    if let Some(total) = total {
        return PageBounds {
            total_pages: pages_for(total, page_size),
            total_projects: total,
            source: PaginationSource::Total,
        };
    }

    let total_pages = if has_next_page(returned, page_size) {
        page.saturating_add(1)
    } else {
        page
    };
    PageBounds {
        total_pages,
        total_projects: u64::from(page.saturating_sub(1)) * page_size as u64 + returned as u64,
        source: PaginationSource::Heuristic,
    }
}

/// One entry of the page-number row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Current(u32),
    Page(u32),
    Ellipsis,
}

impl PageLink {
    /// Page this link navigates to, if any
    pub fn target(&self) -> Option<u32> {
        match self {
            PageLink::Page(n) => Some(*n),
            _ => None,
        }
    }
}

/// Page-number affordances for the current position
///
/// Always the current page; page 1 and an ellipsis once past page 2; the
/// following page when more data may exist.
pub fn page_links(current: u32, has_next: bool) -> Vec<PageLink> {
    let mut links = Vec::with_capacity(4);
    if current > 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Current(current));
    if has_next {
        links.push(PageLink::Page(current.saturating_add(1)));
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_pagination_wins() {
        let meta = PaginationMeta {
            total_pages: Some(3),
            total: Some(13),
        };
        let bounds = resolve_bounds(1, 5, PAGE_SIZE, Some(&meta), Some(99));
        assert_eq!(bounds.total_pages, 3);
        assert_eq!(bounds.total_projects, 13);
        assert_eq!(bounds.source, PaginationSource::Server);
    }

    #[test]
    fn test_server_total_without_pages() {
        let meta = PaginationMeta {
            total_pages: None,
            total: Some(11),
        };
        let bounds = resolve_bounds(1, 5, PAGE_SIZE, Some(&meta), None);
        assert_eq!(bounds.total_pages, 3);
        assert_eq!(bounds.total_projects, 11);
    }

    #[test]
    fn test_empty_meta_falls_through_to_total() {
        let meta = PaginationMeta::default();
        let bounds = resolve_bounds(2, 5, PAGE_SIZE, Some(&meta), Some(10));
        assert_eq!(bounds.total_pages, 2);
        assert_eq!(bounds.source, PaginationSource::Total);
    }

    #[test]
    fn test_heuristic_full_page() {
        let bounds = resolve_bounds(2, 5, PAGE_SIZE, None, None);
        assert_eq!(bounds.total_pages, 3);
        assert_eq!(bounds.total_projects, 10);
        assert_eq!(bounds.source, PaginationSource::Heuristic);
    }

    #[test]
    fn test_heuristic_short_page() {
        let bounds = resolve_bounds(3, 2, PAGE_SIZE, None, None);
        assert_eq!(bounds.total_pages, 3);
        assert_eq!(bounds.total_projects, 12);
    }

    #[test]
    fn test_has_next_page() {
        assert!(has_next_page(5, PAGE_SIZE));
        assert!(!has_next_page(4, PAGE_SIZE));
        assert!(!has_next_page(0, PAGE_SIZE));
    }

    #[test]
    fn test_page_links_first_page() {
        assert_eq!(
            page_links(1, true),
            vec![PageLink::Current(1), PageLink::Page(2)]
        );
        assert_eq!(page_links(1, false), vec![PageLink::Current(1)]);
    }

    #[test]
    fn test_page_links_second_page_has_no_first_link() {
        assert_eq!(
            page_links(2, true),
            vec![PageLink::Current(2), PageLink::Page(3)]
        );
    }

    #[test]
    fn test_page_links_far_page() {
        assert_eq!(
            page_links(4, false),
            vec![PageLink::Page(1), PageLink::Ellipsis, PageLink::Current(4)]
        );
        assert_eq!(PageLink::Page(1).target(), Some(1));
        assert_eq!(PageLink::Ellipsis.target(), None);
    }
}
