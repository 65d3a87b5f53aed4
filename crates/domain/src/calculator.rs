//! Finance calculator
//!
//! Product bounds, the indicative monthly payment, and salary eligibility
//! for the calculator page.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SALARY_ERROR_MESSAGE: &str = "The salary provided does not meet the requirements. \
     Please check the eligibility criteria and try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Product {
    #[default]
    PersonalFinance,
    HomeFinance,
    CreditCard,
}

/// Bounds and pricing for one product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductConfig {
    pub title: &'static str,
    pub min_amount: u64,
    pub max_amount: u64,
    pub default_amount: u64,
    pub min_months: u32,
    pub max_months: u32,
    pub default_months: u32,
    /// Annual profit rate, percent
    pub profit_rate: f64,
    pub min_salary: f64,
}

impl Product {
    pub const ALL: [Product; 3] = [Self::PersonalFinance, Self::HomeFinance, Self::CreditCard];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::PersonalFinance => "personal-finance",
            Self::HomeFinance => "home-finance",
            Self::CreditCard => "credit-card",
        }
    }

    /// Unknown slugs fall back to personal finance.
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .unwrap_or_default()
    }

    pub fn config(&self) -> ProductConfig {
        match self {
            Self::PersonalFinance => ProductConfig {
                title: "Personal Finance calculator",
                min_amount: 15_000,
                max_amount: 4_000_000,
                default_amount: 20_000,
                min_months: 6,
                max_months: 48,
                default_months: 48,
                profit_rate: 3.4,
                min_salary: 5_000.0,
            },
            Self::HomeFinance => ProductConfig {
                title: "Home Finance calculator",
                min_amount: 100_000,
                max_amount: 5_000_000,
                default_amount: 500_000,
                min_months: 60,
                max_months: 300,
                default_months: 240,
                profit_rate: 2.89,
                min_salary: 10_000.0,
            },
            Self::CreditCard => ProductConfig {
                title: "Credit Card calculator",
                min_amount: 5_000,
                max_amount: 50_000,
                default_amount: 10_000,
                min_months: 6,
                max_months: 36,
                default_months: 24,
                profit_rate: 2.99,
                min_salary: 8_000.0,
            },
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl ProductConfig {
    pub fn clamp_amount(&self, amount: u64) -> u64 {
        amount.clamp(self.min_amount, self.max_amount)
    }

    pub fn clamp_months(&self, months: u32) -> u32 {
        months.clamp(self.min_months, self.max_months)
    }

    /// A salary is flagged only once entered: positive and below the minimum.
    pub fn salary_too_low(&self, salary: f64) -> bool {
        salary > 0.0 && salary < self.min_salary
    }

    /// Slider fill, 0..=100
    pub fn amount_percent(&self, amount: u64) -> f64 {
        percent(amount as f64, self.min_amount as f64, self.max_amount as f64)
    }

    pub fn months_percent(&self, months: u32) -> f64 {
        percent(months as f64, self.min_months as f64, self.max_months as f64)
    }
}

fn percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Annuity payment at `annual_rate_percent`, rounded to whole dirhams.
/// A zero rate splits the amount evenly.
pub fn monthly_payment(amount: f64, months: u32, annual_rate_percent: f64) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = f64::from(months);
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return (amount / n).round();
    }
    let growth = (1.0 + monthly_rate).powf(n);
    (amount * monthly_rate * growth / (growth - 1.0)).round()
}

/// `20000` -> `"20,000 AED"`
pub fn format_aed(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        grouped.insert(0, '-');
    }
    format!("{grouped} AED")
}

/// Calculator page state, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    pub product: Product,
    pub employer_name: String,
    pub monthly_salary: String,
    pub referral_code: String,
    pub financing_amount: u64,
    pub payment_months: u32,
}

impl CalculatorInput {
    pub fn for_product(product: Product) -> Self {
        let config = product.config();
        Self {
            product,
            employer_name: String::new(),
            monthly_salary: String::new(),
            referral_code: String::new(),
            financing_amount: config.default_amount,
            payment_months: config.default_months,
        }
    }

    pub fn salary(&self) -> f64 {
        self.monthly_salary.trim().parse().unwrap_or(0.0)
    }

    pub fn salary_error(&self) -> bool {
        self.product.config().salary_too_low(self.salary())
    }

    pub fn monthly_payment(&self) -> f64 {
        monthly_payment(
            self.financing_amount as f64,
            self.payment_months,
            self.product.config().profit_rate,
        )
    }

    pub fn can_apply(&self) -> bool {
        !self.salary_error()
            && !self.employer_name.trim().is_empty()
            && !self.monthly_salary.trim().is_empty()
    }
}
