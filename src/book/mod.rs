//! Page-flip book.
//!
//! A book is a fixed, ordered run of pages. Every page lies either on the
//! right-hand (unread) stack or the left-hand (read) stack and clicking a page
//! moves it to the other one. The only thing the book really computes is each
//! page's layer (its `z-index`) so the right page is visible on top of each stack:
//!
//! - closed pages stack with page 0 on top: `layer = page_count - index`
//! - open pages stack with the highest index on top: `layer = index + 1`
//!
//! Opening re-layers immediately. Closing keeps the open layer until the flip
//! animation has crossed the spine, then settles it; the settle is returned to
//! the caller as a [`PendingSettle`] to schedule. Pages are independent of each
//! other, there is no "current page".
//!
//! The DOM side (click handlers, timers, class toggling) lives in [`dom`].

pub mod dom;

/// One leaf of the book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    index: usize,
    is_open: bool,
    layer: u32,
    // Ticket of the settle currently allowed to land, if any.
    pending: Option<u64>,
}

impl Page {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Derived visual state; a page shows flipped exactly while it is open.
    pub fn is_flipped(&self) -> bool {
        self.is_open
    }

    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Whether a closing settle is still outstanding for this page.
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }
}

/// Deferred layer assignment produced by closing a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSettle {
    pub index: usize,
    ticket: u64,
}

#[derive(Clone, Debug)]
pub struct Book {
    pages: Vec<Page>,
    next_ticket: u64,
}

impl Book {
    /// Build a book of `page_count` closed pages, page 0 on top of the right stack.
    pub fn new(page_count: usize) -> Self {
        let pages = (0..page_count)
            .map(|index| Page {
                index,
                is_open: false,
                layer: closed_layer(page_count, index),
                pending: None,
            })
            .collect();
        Self { pages, next_ticket: 0 }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Turn the page at `index`.
    ///
    /// Returns the settle to run after the flip animation when the page was
    /// closed, `None` when it was opened. Unknown indices are ignored.
    pub fn handle_click(&mut self, index: usize) -> Option<PendingSettle> {
        let ticket = self.next_ticket;
        let page = self.pages.get_mut(index)?;
        if page.is_open {
            page.is_open = false;
            // A newer close supersedes any settle still in flight.
            page.pending = Some(ticket);
            self.next_ticket += 1;
            Some(PendingSettle { index, ticket })
        } else {
            page.is_open = true;
            page.layer = open_layer(index);
            page.pending = None;
            None
        }
    }

    /// Apply a deferred settle. Returns `false` (and changes nothing) when the
    /// page has been clicked again since the settle was issued.
    pub fn settle(&mut self, pending: PendingSettle) -> bool {
        let page_count = self.pages.len();
        let Some(page) = self.pages.get_mut(pending.index) else {
            return false;
        };
        if page.pending != Some(pending.ticket) {
            return false;
        }
        page.pending = None;
        page.layer = closed_layer(page_count, page.index);
        true
    }
}

fn closed_layer(page_count: usize, index: usize) -> u32 {
    (page_count - index) as u32
}

fn open_layer(index: usize) -> u32 {
    index as u32 + 1
}
