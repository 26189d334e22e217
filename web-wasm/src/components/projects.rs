//! Projects section

use leptos::prelude::*;

use portfolio_common::{Project, SectionId};

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() class="py-16">
            <h5 class="text-xl font-semibold mb-4 text-center">"Projects"</h5>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <For
                    each=move || projects.clone()
                    key=|project: &Project| project.title.clone()
                    children=|project: Project| {
                        view! {
                            <div class="bg-white shadow p-4 rounded-lg hover:shadow-lg transition">
                                <h6 class="font-semibold">{project.title}</h6>
                                <p class="text-sm text-gray-500">{project.description}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
