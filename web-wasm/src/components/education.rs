//! Education section

use leptos::prelude::*;

use portfolio_common::{EducationEntry, SectionId};

#[component]
pub fn Education(entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <section id=SectionId::Education.as_str() class="py-16">
            <h5 class="text-xl font-semibold mb-4 text-center">"Education"</h5>
            <div class="bg-white shadow p-4 rounded-lg">
                <For
                    each=move || entries.clone()
                    key=|entry: &EducationEntry| entry.title.clone()
                    children=|entry: EducationEntry| {
                        view! {
                            <div class="mb-3">
                                <p class="font-medium">{entry.title}</p>
                                <p class="text-sm text-gray-500">{entry.detail}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
