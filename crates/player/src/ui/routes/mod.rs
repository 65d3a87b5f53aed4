//! Application routes
//!
//! Each variant maps to a thin route component that hands its parameters
//! to the matching view.

use dioxus::prelude::*;

use crate::ui::presentation::views::{
    BuyoutView, CalculatorView, ConditionalFormView, ConsentView, DemoOpusAcademicReportsView,
    DemoOpusMultiUploadView, DemoOpusView, EmailVerificationView, EmailView,
    ExtendedInputsFormView, HomeView, InputsFormView, MobileOtpView, PasscodeView,
    PersonalDetailsView, ProductDetailView, ProductsView, TextareaFormView,
};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomeRoute {},
    #[route("/products")]
    ProductsRoute {},
    #[route("/products/:id")]
    ProductDetailRoute { id: String },
    #[route("/mobile-otp")]
    MobileOtpRoute {},
    #[route("/email")]
    EmailRoute {},
    #[route("/passcode")]
    PasscodeRoute {},
    #[route("/email-verification?:email")]
    EmailVerificationRoute { email: String },
    #[route("/calculator?:product")]
    CalculatorRoute { product: String },
    #[route("/consent")]
    ConsentRoute {},
    #[route("/personal-details")]
    PersonalDetailsRoute {},
    #[route("/buyout")]
    BuyoutRoute {},
    #[route("/demo-opus")]
    DemoOpusRoute {},
    #[route("/demo-opus-multi-upload")]
    DemoOpusMultiUploadRoute {},
    #[route("/demo-opus-academic-reports")]
    DemoOpusAcademicReportsRoute {},
    #[route("/forms/conditional")]
    ConditionalFormRoute {},
    #[route("/forms/inputs")]
    InputsFormRoute {},
    #[route("/forms/extended-inputs")]
    ExtendedInputsFormRoute {},
    #[route("/forms/textarea")]
    TextareaFormRoute {},
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

#[component]
fn HomeRoute() -> Element {
    rsx! { HomeView {} }
}

#[component]
fn ProductsRoute() -> Element {
    rsx! { ProductsView {} }
}

#[component]
fn ProductDetailRoute(id: String) -> Element {
    rsx! {
        ProductDetailView { key: "{id}", id: id.clone() }
    }
}

#[component]
fn MobileOtpRoute() -> Element {
    rsx! { MobileOtpView {} }
}

#[component]
fn EmailRoute() -> Element {
    rsx! { EmailView {} }
}

#[component]
fn PasscodeRoute() -> Element {
    rsx! { PasscodeView {} }
}

#[component]
fn EmailVerificationRoute(email: String) -> Element {
    rsx! { EmailVerificationView { email } }
}

/// Keyed by product so switching products remounts with fresh state.
#[component]
fn CalculatorRoute(product: String) -> Element {
    rsx! {
        CalculatorView { key: "{product}", product: product.clone() }
    }
}

#[component]
fn ConsentRoute() -> Element {
    rsx! { ConsentView {} }
}

#[component]
fn PersonalDetailsRoute() -> Element {
    rsx! { PersonalDetailsView {} }
}

#[component]
fn BuyoutRoute() -> Element {
    rsx! { BuyoutView {} }
}

#[component]
fn DemoOpusRoute() -> Element {
    rsx! { DemoOpusView {} }
}

#[component]
fn DemoOpusMultiUploadRoute() -> Element {
    rsx! { DemoOpusMultiUploadView {} }
}

#[component]
fn DemoOpusAcademicReportsRoute() -> Element {
    rsx! { DemoOpusAcademicReportsView {} }
}

#[component]
fn ConditionalFormRoute() -> Element {
    rsx! { ConditionalFormView {} }
}

#[component]
fn InputsFormRoute() -> Element {
    rsx! { InputsFormView {} }
}

#[component]
fn ExtendedInputsFormRoute() -> Element {
    rsx! { ExtendedInputsFormView {} }
}

#[component]
fn TextareaFormRoute() -> Element {
    rsx! { TextareaFormView {} }
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route");
    rsx! {
        div {
            class: "page page--centered",
            h1 { class: "page-title", "Page not found" }
            Link { to: Route::HomeRoute {}, class: "button button--primary", "Back to start" }
        }
    }
}
