//! Contact section: outbound links plus the message form
//!
//! Submission never leaves the browser: the draft is validated, logged to
//! the console, and acknowledged inline.

use leptos::prelude::*;

use portfolio_common::{ContactInfo, ContactMessage, SectionId};

const FIELD_CLASS: &str = "mt-1 ring-1 ring-gray-500 mb-2 p-2 block w-full rounded-md \
                           border-gray-300 shadow-sm focus:border-indigo-500 focus:ring \
                           focus:ring-indigo-200";

#[component]
pub fn Contact(info: ContactInfo) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = ContactMessage {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };

        match draft.validate() {
            Ok(()) => {
                if let Ok(json) = draft.to_json() {
                    gloo::console::log!("contact message drafted:", json);
                }
                set_status.set(format!(
                    "Thanks {}, your message is noted!",
                    draft.name.trim()
                ));
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            Err(error) => set_status.set(error.to_string()),
        }
    };

    let mailto = format!("mailto:{}", info.email);

    view! {
        <section id=SectionId::Contact.as_str() class="py-16">
            <h5 class="text-xl font-semibold mb-4 text-center">"Get In Touch"</h5>
            <div class="flex justify-between flex-col md:flex-row gap-4">
                <div class="bg-white shadow p-6 rounded-lg flex-1">
                    <p class="flex gap-2 mb-2 items-center">
                        <img src="/phone.svg" alt="phone" width="30" />
                        <span>{info.phone}</span>
                    </p>
                    <p class="flex gap-2 mb-2 items-center">
                        <img src="/email.svg" alt="email" width="30" />
                        <span>
                            <a href=mailto class="text-indigo-600 hover:underline">
                                {info.email}
                            </a>
                        </span>
                    </p>
                    <p class="flex gap-2 mb-2 items-center">
                        <img src="/github.png" alt="github" width="30" />
                        <span>
                            <a
                                href=info.github.clone()
                                target="_blank"
                                rel="noreferrer"
                                class="text-indigo-600 hover:underline"
                            >
                                {info.github.clone()}
                            </a>
                        </span>
                    </p>
                    <p class="flex gap-2 mb-2 items-center">
                        <img src="/linkedin.png" alt="linkedin" width="30" />
                        <span>
                            <a
                                href=info.linkedin.clone()
                                target="_blank"
                                rel="noreferrer"
                                class="text-indigo-600 hover:underline"
                            >
                                {info.linkedin.clone()}
                            </a>
                        </span>
                    </p>
                </div>

                // contact form
                <div class="rounded-md bg-white p-6 flex-1 shadow">
                    <form class="space-y-4" on:submit=on_submit>
                        <p class="font-medium text-lg text-center mb-4">"Send a Message"</p>

                        <div>
                            <label for="name" class="block text-sm font-medium text-gray-700">
                                "Name"
                            </label>
                            <input
                                type="text"
                                name="name"
                                id="name"
                                class=FIELD_CLASS
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    set_name.set(event_target_value(&ev));
                                }
                            />
                        </div>

                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700">
                                "Email"
                            </label>
                            <input
                                type="email"
                                name="email"
                                id="email"
                                class=FIELD_CLASS
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                }
                            />
                        </div>

                        <div>
                            <label for="message" class="block text-sm font-medium text-gray-700">
                                "Message"
                            </label>
                            <textarea
                                name="message"
                                id="message"
                                rows="4"
                                class=FIELD_CLASS
                                placeholder="Write your message here..."
                                prop:value=move || message.get()
                                on:input=move |ev| {
                                    set_message.set(event_target_value(&ev));
                                }
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700 transition"
                        >
                            "Send"
                        </button>

                        <Show when=move || !status.get().is_empty()>
                            <p class="text-sm text-gray-600 text-center">
                                {move || status.get()}
                            </p>
                        </Show>
                    </form>
                </div>
            </div>
        </section>
    }
}
