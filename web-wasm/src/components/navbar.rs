//! Fixed navigation bar with scroll-spy highlighting

use leptos::prelude::*;

use portfolio_common::{Section, SectionId, SECTIONS};

fn item_class(is_active: bool) -> String {
    let state = if is_active {
        "bg-blue-500 text-white"
    } else {
        "hover:text-indigo-600"
    };
    format!("cursor-pointer px-3 py-1 rounded-md transition {state}")
}

#[component]
pub fn Navbar<FN, FT>(
    active_section: ReadSignal<SectionId>,
    menu_open: ReadSignal<bool>,
    on_navigate: FN,
    on_toggle_menu: FT,
) -> impl IntoView
where
    FN: Fn(SectionId) + 'static + Clone + Send + Sync,
    FT: Fn(()) + 'static + Clone,
{
    let desktop_navigate = on_navigate.clone();
    let mobile_navigate = on_navigate;

    view! {
        <nav class="fixed top-0 left-0 w-full bg-white shadow z-50">
            <div class="max-w-6xl mx-auto px-4 py-3 flex justify-between">
                <h1 class="text-2xl font-bold text-indigo-600">"My Portfolio"</h1>

                // Desktop menu
                <ul class="hidden md:flex gap-6 font-medium text-gray-600">
                    <For
                        each=move || SECTIONS
                        key=|section: &Section| section.id
                        children=move |section: Section| {
                            let on_navigate = desktop_navigate.clone();
                            let id = section.id;
                            view! {
                                <li
                                    class=move || item_class(active_section.get() == id)
                                    on:click=move |_| on_navigate(id)
                                >
                                    {section.label}
                                </li>
                            }
                        }
                    />
                </ul>

                // Mobile menu button
                <button
                    class="md:hidden"
                    on:click={
                        let on_toggle_menu = on_toggle_menu.clone();
                        move |_| on_toggle_menu(())
                    }
                >
                    <img src="/menu.svg" alt="menu" width="40" />
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white shadow px-4 py-3 space-y-2">
                    <For
                        each=move || SECTIONS
                        key=|section: &Section| section.id
                        children={
                            let mobile_navigate = mobile_navigate.clone();
                            move |section: Section| {
                                let on_navigate = mobile_navigate.clone();
                                let id = section.id;
                                view! {
                                    <p
                                        class=move || item_class(active_section.get() == id)
                                        on:click=move |_| on_navigate(id)
                                    >
                                        {section.label}
                                    </p>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </nav>
    }
}
