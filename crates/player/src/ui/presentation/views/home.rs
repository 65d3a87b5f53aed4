//! Landing page: product picker and links to the standalone forms.

use dioxus::prelude::*;
use lendform_domain::calculator::Product;

use crate::ui::presentation::state::{use_toast_state, ToastKind};
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let services = use_services();
    let mut toasts = use_toast_state();

    rsx! {
        div {
            class: "page",
            main {
                class: "page-content",
                h1 { class: "page-title", "Choose a product" }
                p { class: "page-subtitle", "Estimate your monthly payment, then apply." }
                nav {
                    class: "product-list",
                    for (slug, title) in Product::ALL.map(|p| (p.slug(), p.config().title)) {
                        Link {
                            key: "{slug}",
                            class: "product-card",
                            to: Route::CalculatorRoute { product: slug.to_string() },
                            span { class: "product-card-title", "{title}" }
                            span { class: "product-card-arrow", "\u{203a}" }
                        }
                    }
                }

                h2 { class: "section-title", "Onboarding" }
                nav {
                    class: "link-list",
                    Link { to: Route::ProductsRoute {}, "Products" }
                    Link { to: Route::MobileOtpRoute {}, "Mobile number & OTP" }
                    Link { to: Route::EmailRoute {}, "Email" }
                    Link { to: Route::PasscodeRoute {}, "Passcode" }
                    Link { to: Route::EmailVerificationRoute { email: String::new() }, "Email verification" }
                }

                h2 { class: "section-title", "Forms" }
                nav {
                    class: "link-list",
                    Link { to: Route::ConsentRoute {}, "Consent & agreements" }
                    Link { to: Route::PersonalDetailsRoute {}, "Personal details" }
                    Link { to: Route::BuyoutRoute {}, "Buyout" }
                    Link { to: Route::ConditionalFormRoute {}, "Conditional fields" }
                    Link { to: Route::InputsFormRoute {}, "Inputs" }
                    Link { to: Route::ExtendedInputsFormRoute {}, "Extended inputs" }
                    Link { to: Route::TextareaFormRoute {}, "Textarea" }
                }

                h2 { class: "section-title", "Opus demos" }
                nav {
                    class: "link-list",
                    Link { to: Route::DemoOpusRoute {}, "HKID verification" }
                    Link { to: Route::DemoOpusMultiUploadRoute {}, "Multi upload" }
                    Link { to: Route::DemoOpusAcademicReportsRoute {}, "Student academic reports" }
                }

                button {
                    r#type: "button",
                    class: "button button--link",
                    onclick: move |_| {
                        services.app_data.clear();
                        toasts.show(ToastKind::Info, "Saved application data cleared");
                    },
                    "Start over"
                }
            }
        }
    }
}
