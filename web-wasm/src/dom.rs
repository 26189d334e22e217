//! DOM-backed implementations of the page core's capability interfaces

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use portfolio_common::{SectionHost, SectionId, ViewportObserver, VisibilityCallback};

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Scrolls sections into view through the browser DOM.
pub struct DomSections;

impl SectionHost for DomSections {
    fn reveal(&self, id: SectionId) -> bool {
        match document().get_element_by_id(id.as_str()) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

type SharedCallbacks = Rc<RefCell<HashMap<SectionId, VisibilityCallback>>>;

struct ThresholdGroup {
    threshold: f64,
    observer: IntersectionObserver,
    // keeps the JS dispatch closure alive for the observer's lifetime
    _dispatch: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Section visibility watcher backed by `IntersectionObserver`.
///
/// One browser observer per distinct threshold; entries are dispatched in
/// callback order, so the last report of an observation batch wins any tie.
pub struct DomViewport {
    groups: Vec<ThresholdGroup>,
    callbacks: SharedCallbacks,
}

impl DomViewport {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            callbacks: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    fn group_index(&mut self, threshold: f64) -> usize {
        if let Some(index) = self.groups.iter().position(|g| g.threshold == threshold) {
            return index;
        }

        let callbacks = Rc::clone(&self.callbacks);
        let dispatch = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let Ok(id) = entry.target().id().parse::<SectionId>() else {
                        continue;
                    };
                    if let Some(callback) = callbacks.borrow_mut().get_mut(&id) {
                        callback(id, entry.intersection_ratio());
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(dispatch.as_ref().unchecked_ref(), &init)
                .unwrap();

        self.groups.push(ThresholdGroup {
            threshold,
            observer,
            _dispatch: dispatch,
        });
        self.groups.len() - 1
    }

    /// Stops watching everything and releases the browser observers.
    /// Idempotent; also runs on drop so the watcher cannot leak.
    pub fn disconnect(&mut self) {
        for group in self.groups.drain(..) {
            group.observer.disconnect();
        }
        self.callbacks.borrow_mut().clear();
    }
}

impl ViewportObserver for DomViewport {
    fn subscribe(&mut self, id: SectionId, threshold: f64, callback: VisibilityCallback) {
        self.callbacks.borrow_mut().insert(id, callback);
        let index = self.group_index(threshold);
        // sections missing from the document are silently not watched
        if let Some(element) = document().get_element_by_id(id.as_str()) {
            self.groups[index].observer.observe(&element);
        }
    }

    fn unsubscribe(&mut self, id: SectionId) {
        self.callbacks.borrow_mut().remove(&id);
        if let Some(element) = document().get_element_by_id(id.as_str()) {
            for group in &self.groups {
                group.observer.unobserve(&element);
            }
        }
    }
}

impl Default for DomViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DomViewport {
    fn drop(&mut self) {
        self.disconnect();
    }
}
