//! Viewport visibility capability

use crate::section::SectionId;

/// Minimum fraction of a section that must be visible before scroll
/// detection treats it as the active section.
pub const ACTIVE_SECTION_THRESHOLD: f64 = 0.6;

/// Callback invoked when a watched section is reported visible at or above
/// its subscription threshold. Receives the section id and the visible
/// fraction.
pub type VisibilityCallback = Box<dyn FnMut(SectionId, f64)>;

/// Capability interface over a host that can report element visibility.
///
/// Any environment able to report what fraction of an element is inside the
/// viewport can back this trait; the Web front end implements it with
/// `IntersectionObserver`. Reports arriving in one observation batch are
/// delivered in callback order, so the last report in a batch wins any tie.
pub trait ViewportObserver {
    /// Start watching `id`, reporting once at least `threshold` of it is
    /// visible.
    fn subscribe(&mut self, id: SectionId, threshold: f64, callback: VisibilityCallback);

    /// Stop watching `id`. Unsubscribing an id that was never subscribed
    /// is a no-op.
    fn unsubscribe(&mut self, id: SectionId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PageController;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Test observer: delivers batches by hand, in subscription-callback
    /// order, applying each subscription's threshold the way the DOM
    /// observer does.
    #[derive(Default)]
    struct FakeViewport {
        subscriptions: HashMap<SectionId, (f64, VisibilityCallback)>,
    }

    impl FakeViewport {
        fn emit_batch(&mut self, events: &[(SectionId, f64)]) {
            for &(id, fraction) in events {
                if let Some((threshold, callback)) = self.subscriptions.get_mut(&id) {
                    if fraction >= *threshold {
                        callback(id, fraction);
                    }
                }
            }
        }
    }

    impl ViewportObserver for FakeViewport {
        fn subscribe(&mut self, id: SectionId, threshold: f64, callback: VisibilityCallback) {
            self.subscriptions.insert(id, (threshold, callback));
        }

        fn unsubscribe(&mut self, id: SectionId) {
            self.subscriptions.remove(&id);
        }
    }

    fn wired_viewport(controller: &Rc<RefCell<PageController>>) -> FakeViewport {
        let mut viewport = FakeViewport::default();
        for id in SectionId::ALL {
            let controller = Rc::clone(controller);
            viewport.subscribe(
                id,
                ACTIVE_SECTION_THRESHOLD,
                Box::new(move |id, fraction| {
                    controller.borrow_mut().section_visible(id, fraction);
                }),
            );
        }
        viewport
    }

    #[test]
    fn test_intersection_sets_active_section() {
        let controller = Rc::new(RefCell::new(PageController::new()));
        let mut viewport = wired_viewport(&controller);

        viewport.emit_batch(&[(SectionId::Skills, 0.75)]);

        assert_eq!(controller.borrow().state().active, SectionId::Skills);
        assert!(!controller.borrow().state().menu_open);
    }

    #[test]
    fn test_last_report_in_batch_wins() {
        let controller = Rc::new(RefCell::new(PageController::new()));
        let mut viewport = wired_viewport(&controller);

        viewport.emit_batch(&[
            (SectionId::About, 0.9),
            (SectionId::Skills, 0.61),
            (SectionId::Projects, 0.8),
        ]);

        assert_eq!(controller.borrow().state().active, SectionId::Projects);
    }

    #[test]
    fn test_below_threshold_reports_are_dropped() {
        let controller = Rc::new(RefCell::new(PageController::new()));
        let mut viewport = wired_viewport(&controller);

        viewport.emit_batch(&[(SectionId::Education, 0.59)]);

        assert_eq!(controller.borrow().state().active, SectionId::Home);
    }

    #[test]
    fn test_unsubscribed_section_stops_reporting() {
        let controller = Rc::new(RefCell::new(PageController::new()));
        let mut viewport = wired_viewport(&controller);

        viewport.unsubscribe(SectionId::Contact);
        viewport.emit_batch(&[(SectionId::Contact, 1.0)]);

        assert_eq!(controller.borrow().state().active, SectionId::Home);
    }
}
