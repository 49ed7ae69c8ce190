//! Pagination controls — First, Prev, numbered pages, Next, Last.
//!
//! Each control carries its target page and whether it is disabled. Targets
//! are computed here, against the floored page total, so a renderer never has
//! to clamp or divide by anything itself.

/// A boundary control (First / Prev / Next / Last).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// Page selected when the control is activated.
    pub target: usize,
    pub disabled: bool,
}

/// A numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber {
    pub page: usize,
    /// Whether this is the page currently displayed.
    pub current: bool,
}

/// Navigation request issued by a user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    Number(usize),
}

/// The full set of pagination controls for one projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub first: PageControl,
    pub prev: PageControl,
    /// One entry per page `1..=page_count`; empty when nothing matches.
    pub pages: Vec<PageNumber>,
    pub next: PageControl,
    pub last: PageControl,
}

impl PaginationControls {
    /// Build controls for `current_page` out of `page_count` pages.
    ///
    /// `page_count` may be zero (empty result); boundary checks then use a
    /// single-page floor so every boundary control is disabled.
    #[must_use]
    pub fn new(current_page: usize, page_count: usize) -> Self {
        let total_pages = page_count.max(1);
        let at_start = current_page <= 1;
        let at_end = current_page >= total_pages;

        Self {
            first: PageControl {
                target: 1,
                disabled: at_start,
            },
            prev: PageControl {
                target: current_page.saturating_sub(1).max(1),
                disabled: at_start,
            },
            pages: (1..=page_count)
                .map(|page| PageNumber {
                    page,
                    current: page == current_page,
                })
                .collect(),
            next: PageControl {
                target: current_page.saturating_add(1).min(total_pages),
                disabled: at_end,
            },
            last: PageControl {
                target: total_pages,
                disabled: at_end,
            },
        }
    }

    /// Resolve a navigation request to a target page.
    ///
    /// Returns `None` when the matching control is disabled or the requested
    /// page number is not rendered.
    #[must_use]
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        let control = match nav {
            PageNav::First => self.first,
            PageNav::Prev => self.prev,
            PageNav::Next => self.next,
            PageNav::Last => self.last,
            PageNav::Number(page) => {
                return self.pages.iter().any(|p| p.page == page).then_some(page);
            }
        };
        (!control.disabled).then_some(control.target)
    }
}
