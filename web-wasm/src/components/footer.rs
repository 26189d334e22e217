//! Copyright footer

use leptos::prelude::*;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-gray-900 text-white py-4 mt-8 text-center text-sm">
            {format!("© {year} {name}. All rights reserved.")}
        </footer>
    }
}
