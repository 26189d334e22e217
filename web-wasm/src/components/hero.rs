//! Hero section with profile and call-to-action buttons

use leptos::prelude::*;

use portfolio_common::SectionId;

#[component]
pub fn Hero<F>(name: String, tagline: String, on_navigate: F) -> impl IntoView
where
    F: Fn(SectionId) + 'static + Clone,
{
    view! {
        <section id=SectionId::Home.as_str() class="flex flex-col md:flex-row items-center gap-8 min-h-screen pt-20">
            <img src="/user.png" alt="profile" class="w-40 h-40 rounded-full border-4 border-indigo-600" />
            <div>
                <h4 class="text-2xl font-bold">{name}</h4>
                <p class="text-gray-500 mb-4">{tagline}</p>
                <div class="flex gap-4">
                    <button
                        class="rounded-md bg-green-500 px-4 py-2 text-white hover:bg-green-700"
                        on:click={
                            let on_navigate = on_navigate.clone();
                            move |_| on_navigate(SectionId::Projects)
                        }
                    >
                        "View My Work"
                    </button>
                    <button
                        class="rounded-md bg-blue-500 px-4 py-2 text-white hover:bg-blue-700"
                        on:click={
                            let on_navigate = on_navigate.clone();
                            move |_| on_navigate(SectionId::Contact)
                        }
                    >
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}
