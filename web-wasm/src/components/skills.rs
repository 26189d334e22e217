//! Skills section

use leptos::prelude::*;

use portfolio_common::SectionId;

#[component]
pub fn Skills(technical: Vec<String>, soft: Vec<String>) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-16">
            <h5 class="text-xl font-semibold mb-4 text-center">"Skills"</h5>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <SkillCard title="Technical Skills" skills=technical />
                <SkillCard title="Soft Skills" skills=soft />
            </div>
        </section>
    }
}

#[component]
fn SkillCard(title: &'static str, skills: Vec<String>) -> impl IntoView {
    view! {
        <div class="bg-white shadow p-4 rounded-lg">
            <p class="font-medium mb-2">{title}</p>
            <ul class="list-disc list-inside text-gray-600 space-y-1">
                <For
                    each=move || skills.clone()
                    key=|skill: &String| skill.clone()
                    children=|skill: String| view! { <li>{skill}</li> }
                />
            </ul>
        </div>
    }
}
