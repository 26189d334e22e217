//! About section with highlight grid

use leptos::prelude::*;

use portfolio_common::{Highlight, SectionId};

#[component]
pub fn About(about: String, highlights: Vec<Highlight>) -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-16">
            <h5 class="text-xl font-semibold mb-2 text-center">"About Me"</h5>
            <p class="text-gray-600 mb-6">{about}</p>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6">
                <For
                    each=move || highlights.clone()
                    key=|highlight: &Highlight| highlight.name.clone()
                    children=|highlight: Highlight| {
                        view! {
                            <div class="mt-4">
                                <img src=highlight.image alt="images" width="60" />
                                <p>{highlight.name}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
