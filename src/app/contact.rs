use leptos::{html, prelude::*};

use crate::{
    contact::{submit_contact, ContactForm},
    content::portfolio,
    nav::Section,
};

use super::{browser::AlertNotifier, homepage::SectionHeader};

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = &portfolio().contact;

    view! {
        <section id=Section::Contact.id() class="py-24 bg-surface">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader
                    icon="✉"
                    title="Contact Me"
                    subtitle="Let's build something amazing together"
                />
                <div class="grid gap-8 md:grid-cols-2">
                    <div class="reveal p-8 rounded-lg bg-background border border-edge">
                        <h3 class="text-2xl font-bold mb-2">"Get In Touch"</h3>
                        <p class="text-muted mb-8">{contact.blurb.clone()}</p>
                        <div class="space-y-6 mb-8">
                            {contact
                                .details
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <div class="flex items-center gap-4">
                                            <span class="text-2xl text-accent">
                                                {detail.icon.clone()}
                                            </span>
                                            <div>
                                                <h4 class="font-medium">{detail.label.clone()}</h4>
                                                <p class="text-muted">{detail.value.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h4 class="font-medium mb-4">"Connect with me"</h4>
                        <div class="flex gap-4">
                            {contact
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-2 px-4 py-2 rounded-md border border-edge hover:text-accent"
                                        >
                                            <i class=social.icon.clone()></i>
                                            {social.label.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

/// The form only acknowledges; nothing leaves the page.
#[component]
fn MessageForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let field_class = "w-full px-4 py-3 rounded-md border border-edge bg-surface focus:outline-none focus:ring-2 focus:ring-accent";

    view! {
        <div class="reveal p-8 rounded-lg bg-background border border-edge">
            <h3 class="text-2xl font-bold mb-6">"Send Message"</h3>
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let form = ContactForm {
                        name: name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
                        email: email_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
                        message: message_ref
                            .get_untracked()
                            .map(|el| el.value())
                            .unwrap_or_default(),
                    };
                    if let Err(e) = submit_contact(&form, &mut AlertNotifier) {
                        log::warn!("contact form not submitted: {e}");
                    }
                }
            >
                <input
                    node_ref=name_ref
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    required
                    class=field_class
                />
                <input
                    node_ref=email_ref
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    required
                    class=field_class
                />
                <textarea
                    node_ref=message_ref
                    name="message"
                    placeholder="Tell me about your project..."
                    rows="4"
                    required
                    class=field_class
                ></textarea>
                <button
                    type="submit"
                    class="w-full px-6 py-3 rounded-md bg-accent text-background font-medium"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
