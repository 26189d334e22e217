#![cfg(target_arch = "wasm32")]

//! Browser tests for the mounted page

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mounts_every_section_anchor() {
    leptos::mount::mount_to_body(portfolio_wasm::app::App);

    let document = web_sys::window().unwrap().document().unwrap();
    for section in portfolio_common::SECTIONS {
        assert!(
            document.get_element_by_id(section.id.as_str()).is_some(),
            "missing section anchor: {}",
            section.id
        );
    }
}
