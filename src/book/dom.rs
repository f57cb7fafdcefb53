//! Wires a [`Book`] to the page elements of the document.
//!
//! One click listener per page element. The book is shared between the
//! listeners and their settle timers through `Rc<RefCell<_>>`; the borrow is
//! always released before anything is scheduled.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{Book, Page};
use crate::config::BookConfig;
use crate::platform;

pub struct BookView {
    book: Rc<RefCell<Book>>,
    elements: Rc<Vec<HtmlElement>>,
}

impl BookView {
    /// Collect the pages matching `cfg.page_selector`, stack them and attach
    /// the click handlers.
    pub fn mount(doc: &Document, cfg: &BookConfig) -> Result<Self, JsValue> {
        let nodes = doc.query_selector_all(&cfg.page_selector)?;
        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                elements.push(node.dyn_into::<HtmlElement>()?);
            }
        }
        let book = Rc::new(RefCell::new(Book::new(elements.len())));
        let elements = Rc::new(elements);

        for page in book.borrow().pages() {
            render_page(&elements[page.index()], page, &cfg.flipped_class);
        }

        for (index, el) in elements.iter().enumerate() {
            let book = book.clone();
            let elements = elements.clone();
            let flipped_class = cfg.flipped_class.clone();
            let settle_ms = cfg.settle_ms;
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                let pending = book.borrow_mut().handle_click(index);
                if let Some(page) = book.borrow().page(index) {
                    render_page(&elements[index], page, &flipped_class);
                }
                let Some(pending) = pending else { return };
                let book = book.clone();
                let elements = elements.clone();
                let flipped_class = flipped_class.clone();
                let scheduled = platform::set_timeout(settle_ms, move || {
                    let settled = book.borrow_mut().settle(pending);
                    if settled {
                        if let Some(page) = book.borrow().page(pending.index) {
                            render_page(&elements[pending.index], page, &flipped_class);
                        }
                    }
                });
                if let Err(e) = scheduled {
                    platform::warn(&format!("[book] settle not scheduled: {:?}", e));
                }
            }) as Box<dyn FnMut(_)>);
            el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        platform::log(&format!("[book] mounted {} pages", elements.len()));
        Ok(Self { book, elements })
    }

    pub fn page_count(&self) -> usize {
        self.elements.len()
    }

    /// Snapshot of a page's state, for hosts and tests.
    pub fn page(&self, index: usize) -> Option<Page> {
        self.book.borrow().page(index).cloned()
    }
}

/// Reflect a page's state onto its element: `z-index` from the layer and the
/// flipped class from the open state.
fn render_page(el: &HtmlElement, page: &Page, flipped_class: &str) {
    let _ = el
        .style()
        .set_property("z-index", &page.layer().to_string());
    let _ = el
        .class_list()
        .toggle_with_force(flipped_class, page.is_flipped());
}
