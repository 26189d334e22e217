//! Main application component

use leptos::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    education::Education,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    projects::Projects,
    skills::Skills,
};
use crate::dom::{DomSections, DomViewport};
use portfolio_common::{
    PageController, PageState, SectionId, SiteContent, ViewportObserver, ACTIVE_SECTION_THRESHOLD,
    SECTIONS,
};

/// Main application component.
///
/// Holds the page controller, mirrors its state into two reactive cells,
/// and owns the viewport watcher's mount/unmount lifecycle.
#[component]
pub fn App() -> impl IntoView {
    let content = SiteContent::default();

    // UI state mirrors, written by the controller's change listener
    let (menu_open, set_menu_open) = signal(false);
    let (active_section, set_active_section) = signal(SectionId::Home);

    let controller = StoredValue::new_local(PageController::new());
    controller.update_value(|controller| {
        controller.on_change(move |state: PageState| {
            set_menu_open.set(state.menu_open);
            set_active_section.set(state.active);
        });
    });

    // Section watcher: created once the sections are in the DOM,
    // released on unmount.
    let viewport = StoredValue::new_local(None::<DomViewport>);
    Effect::new(move |_| {
        viewport.update_value(|slot| {
            if slot.is_some() {
                return;
            }
            let mut watcher = DomViewport::new();
            for section in SECTIONS {
                watcher.subscribe(
                    section.id,
                    ACTIVE_SECTION_THRESHOLD,
                    Box::new(move |id, fraction| {
                        controller.update_value(|controller| {
                            controller.section_visible(id, fraction);
                        });
                    }),
                );
            }
            *slot = Some(watcher);
        });
    });

    on_cleanup(move || {
        viewport.update_value(|slot| {
            if let Some(mut watcher) = slot.take() {
                watcher.disconnect();
            }
        });
        controller.update_value(|controller| controller.detach());
    });

    // click-to-scroll navigation
    let on_navigate = move |id: SectionId| {
        controller.update_value(|controller| controller.navigate(id, &DomSections));
    };

    let on_toggle_menu = move |_: ()| {
        controller.update_value(|controller| controller.toggle_menu());
    };

    let SiteContent {
        name,
        tagline,
        about,
        highlights,
        technical_skills,
        soft_skills,
        projects,
        education,
        contact,
    } = content;

    view! {
        <div class="min-h-screen bg-gray-100">
            <Navbar
                active_section=active_section
                menu_open=menu_open
                on_navigate=on_navigate
                on_toggle_menu=on_toggle_menu
            />

            <div class="pt-20 px-4 max-w-6xl mx-auto space-y-8">
                <Hero name=name.clone() tagline=tagline on_navigate=on_navigate />
                <About about=about highlights=highlights />
                <Skills technical=technical_skills soft=soft_skills />
                <Projects projects=projects />
                <Education entries=education />
                <Contact info=contact />
                <Footer name=name />
            </div>
        </div>
    }
}
