//! Product catalog: the landing list and one page per product.
//!
//! The catalog is static; every detail page ends in the application form.

use dioxus::prelude::*;

use crate::ui::presentation::components::common::Header;
use crate::ui::routes::Route;

const RATE_FOOTNOTE: &str = "*Equivalent to 5.85% per annum reducing balance";

/// A card on the products list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub rate: &'static str,
    pub rate_note: &'static str,
    pub features: [Feature; 3],
    pub eligibility_title: &'static str,
    pub eligibility: &'static [&'static str],
    pub cta: &'static str,
    pub hero_image: &'static str,
}

pub const MAIN_PRODUCTS: [ProductCard; 2] = [
    ProductCard {
        id: "credit-card",
        title: "Al Hilal Bank Credit card",
        description: "Earn rewards by applying for a Al Hilal Bank credit card",
    },
    ProductCard {
        id: "personal-finance",
        title: "Personal Finance",
        description: "Turn your dreams into reality with Al Hilal Bank's Personal Finance",
    },
];

pub const OTHER_PRODUCTS: [ProductCard; 3] = [
    ProductCard {
        id: "home-finance",
        title: "Home Finance",
        description: "Your home. Financed the right way",
    },
    ProductCard {
        id: "wakala-deposit",
        title: "Wakala deposit",
        description: "Grow your savings. The smart, Shariah-compliant way",
    },
    ProductCard {
        id: "business-banking",
        title: "Business Banking",
        description: "Solutions for your business growth",
    },
];

const CATALOG: [ProductInfo; 5] = [
    ProductInfo {
        id: "personal-finance",
        title: "Al Hilal Personal Finance",
        description: "Turn your dreams into reality with personal finance and profit rates starting from 3.10% per annum flat*",
        rate: "3.10%",
        rate_note: "per annum flat*",
        features: [
            Feature {
                title: "Financing up to 4 Million AED",
                description: "Don't put any limits to your plans with Al Hilal Personal Finance",
            },
            Feature {
                title: "Flexible terms",
                description: "Pay off your financing in payments over 6 to 48 months",
            },
            Feature {
                title: "Individualized profit rate",
                description: "Based on your profile",
            },
        ],
        eligibility_title: "Apply for a Personal Finance if you:",
        eligibility: &[
            "are a UAE national or resident",
            "are between 21 and 65 years old",
            "earn at least 5,000 AED a month and your salary is credited to an account with Al Hilal",
        ],
        cta: "I'm interested",
        hero_image: "https://images.unsplash.com/photo-1434626881859-194d67b2b86f?w=800&h=400&fit=crop&crop=center",
    },
    ProductInfo {
        id: "credit-card",
        title: "Al Hilal Bank Credit Card",
        description: "Earn rewards and enjoy exclusive benefits with our premium credit card",
        rate: "2.99%",
        rate_note: "per annum flat*",
        features: [
            Feature {
                title: "Up to 50,000 AED Credit Limit",
                description: "Flexible credit limit based on your financial profile",
            },
            Feature {
                title: "Rewards Program",
                description: "Earn points on every purchase and redeem for exclusive rewards",
            },
            Feature {
                title: "Premium Benefits",
                description: "Enjoy airport lounge access and concierge services",
            },
        ],
        eligibility_title: "Apply for a Credit Card if you:",
        eligibility: &[
            "are a UAE national or resident",
            "are between 21 and 65 years old",
            "earn at least 8,000 AED a month",
            "have a good credit history",
        ],
        cta: "Apply Now",
        hero_image: "https://images.unsplash.com/photo-1654263937079-f63a3ea4d48b?w=800&h=400&fit=crop&crop=center",
    },
    ProductInfo {
        id: "home-finance",
        title: "Al Hilal Home Finance",
        description: "Your home. Financed the right way with competitive rates and flexible terms",
        rate: "2.89%",
        rate_note: "per annum flat*",
        features: [
            Feature {
                title: "Up to 5 Million AED",
                description: "Finance your dream home with competitive rates",
            },
            Feature {
                title: "Flexible Repayment",
                description: "Choose repayment terms from 5 to 25 years",
            },
            Feature {
                title: "Expert Guidance",
                description: "Get professional advice throughout your home buying journey",
            },
        ],
        eligibility_title: "Apply for Home Finance if you:",
        eligibility: &[
            "are a UAE national or resident",
            "are between 21 and 65 years old",
            "earn at least 10,000 AED a month",
            "have a stable employment history",
        ],
        cta: "Apply Now",
        hero_image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=400&fit=crop&crop=center",
    },
    ProductInfo {
        id: "wakala-deposit",
        title: "Al Hilal Wakala Deposit",
        description: "Grow your savings. The smart, Shariah-compliant way with competitive returns",
        rate: "4.25%",
        rate_note: "per annum*",
        features: [
            Feature {
                title: "Shariah Compliant",
                description: "Ethical savings that align with Islamic principles",
            },
            Feature {
                title: "Flexible Terms",
                description: "Choose from 3, 6, 12, or 24-month terms",
            },
            Feature {
                title: "Competitive Returns",
                description: "Earn attractive returns on your savings",
            },
        ],
        eligibility_title: "Open a Wakala Deposit if you:",
        eligibility: &[
            "are a UAE national or resident",
            "are 18 years or older",
            "have a valid Emirates ID",
            "maintain minimum balance requirements",
        ],
        cta: "Open Account",
        hero_image: "https://images.unsplash.com/photo-1633158829585-23ba8f7c8caf?w=800&h=400&fit=crop&crop=center",
    },
    ProductInfo {
        id: "business-banking",
        title: "Al Hilal Business Banking",
        description: "Solutions for your business growth with comprehensive banking services",
        rate: "3.50%",
        rate_note: "per annum flat*",
        features: [
            Feature {
                title: "Business Accounts",
                description: "Current and savings accounts tailored for businesses",
            },
            Feature {
                title: "Trade Finance",
                description: "Import and export financing solutions",
            },
            Feature {
                title: "Dedicated Support",
                description: "Personal relationship manager for your business",
            },
        ],
        eligibility_title: "Apply for Business Banking if you:",
        eligibility: &[
            "have a registered business in UAE",
            "have been in business for at least 6 months",
            "have valid trade license",
            "meet minimum turnover requirements",
        ],
        cta: "Get Started",
        hero_image: "https://images.unsplash.com/photo-1550565118-3a14e8d0386f?w=800&h=400&fit=crop&crop=center",
    },
];

pub fn product(id: &str) -> Option<&'static ProductInfo> {
    CATALOG.iter().find(|p| p.id == id)
}

#[component]
pub fn ProductsView() -> Element {
    rsx! {
        div {
            class: "page",
            header {
                class: "catalog-header",
                h1 { class: "page-title", "Welcome to Al Hilal Bank" }
                p { class: "page-subtitle", "Select a Al Hilal product to begin your Financial Journey" }
            }
            main {
                class: "page-content",
                div {
                    class: "catalog-main",
                    for card in MAIN_PRODUCTS {
                        Link {
                            key: "{card.id}",
                            class: "catalog-card",
                            to: Route::ProductDetailRoute { id: card.id.to_string() },
                            h2 { class: "catalog-card-title", "{card.title}" }
                            p { class: "catalog-card-text", "{card.description}" }
                            span { class: "button button--primary", "Apply Now" }
                        }
                    }
                }
                h2 { class: "section-title", "Al Hilal products" }
                nav {
                    class: "product-list",
                    for card in OTHER_PRODUCTS {
                        Link {
                            key: "{card.id}",
                            class: "product-card",
                            to: Route::ProductDetailRoute { id: card.id.to_string() },
                            span {
                                class: "product-card-title",
                                "{card.title}"
                                small { class: "catalog-card-text", "{card.description}" }
                            }
                            span { class: "product-card-arrow", "\u{203a}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProductDetailView(id: String) -> Element {
    let Some(info) = product(&id) else {
        tracing::debug!(%id, "Unknown product");
        return rsx! {
            div {
                class: "page page--centered",
                h1 { class: "page-title", "Product Not Found" }
                p { class: "page-subtitle", "The product you're looking for doesn't exist." }
                Link { to: Route::ProductsRoute {}, class: "button button--primary", "Back to Products" }
            }
        };
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::ProductsRoute {}, title: info.rate_note.to_string() }
            img { class: "catalog-hero", src: info.hero_image, alt: info.title }
            main {
                class: "page-content",
                h1 { class: "page-title", "{info.title}" }
                p { class: "page-subtitle", "{info.description}" }
                p { class: "page-emphasis", "{info.rate} {info.rate_note}" }
                ul {
                    class: "catalog-features",
                    for feature in info.features {
                        li {
                            key: "{feature.title}",
                            h3 { class: "catalog-card-title", "{feature.title}" }
                            p { class: "catalog-card-text", "{feature.description}" }
                        }
                    }
                }
                div {
                    class: "info-box",
                    h2 { class: "info-box-title", "{info.eligibility_title}" }
                    ul {
                        class: "catalog-eligibility",
                        for criterion in info.eligibility.iter() {
                            li { key: "{criterion}", class: "info-box-text", "{criterion}" }
                        }
                    }
                }
                p { class: "field-description", "{RATE_FOOTNOTE}" }
                Link {
                    to: Route::PersonalDetailsRoute {},
                    class: "button button--primary button--block",
                    "{info.cta}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_card_has_a_detail_page() {
        for card in MAIN_PRODUCTS.iter().chain(OTHER_PRODUCTS.iter()) {
            assert!(product(card.id).is_some(), "{} has no detail page", card.id);
        }
    }

    #[test]
    fn test_lookup() {
        let info = product("wakala-deposit").unwrap();
        assert_eq!(info.rate, "4.25%");
        assert_eq!(info.rate_note, "per annum*");
        assert_eq!(info.cta, "Open Account");
        assert_eq!(product("car-loan"), None);
    }
}
