//! Statutory rates for Trinidad & Tobago
//!
//! A single rate table applies to every calculation; there is no per-year
//! lookup.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Personal income tax on chargeable income up to and including the band threshold
pub const LOWER_BAND_RATE: Decimal = dec!(0.25);
/// Personal income tax on chargeable income above the band threshold
pub const UPPER_BAND_RATE: Decimal = dec!(0.30);
/// Chargeable income covered by the lower band
pub const BAND_THRESHOLD: Decimal = dec!(1000000);
/// Tax due on a chargeable income exactly at the threshold
pub const LOWER_BAND_TAX: Decimal = dec!(250000);

pub const HEALTH_SURCHARGE_RATE: Decimal = dec!(0.025);
pub const BUSINESS_LEVY_RATE: Decimal = dec!(0.006);
pub const CORPORATION_TAX_RATE: Decimal = dec!(0.30);
pub const PETROCHEMICAL_TAX_RATE: Decimal = dec!(0.35);
pub const VAT_RATE: Decimal = dec!(0.125);
pub const GREEN_FUND_LEVY_RATE: Decimal = dec!(0.003);

/// New businesses are exempt from the business levy while they have been
/// operating for fewer than this many years.
pub const BUSINESS_LEVY_EXEMPT_YEARS: u32 = 3;

/// Income tax band that the top slice of chargeable income falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeBand {
    Lower,
    Upper,
}

impl IncomeBand {
    /// Band for a chargeable amount. The threshold itself is in the lower band.
    pub fn for_chargeable(chargeable: Decimal) -> Self {
        if chargeable <= BAND_THRESHOLD {
            IncomeBand::Lower
        } else {
            IncomeBand::Upper
        }
    }

    pub fn rate_label(self) -> String {
        match self {
            IncomeBand::Lower => percent_label(LOWER_BAND_RATE),
            IncomeBand::Upper => format!(
                "{} / {}",
                percent_label(LOWER_BAND_RATE),
                percent_label(UPPER_BAND_RATE)
            ),
        }
    }
}

/// Two-band progressive income tax shared by individuals and sole traders.
///
/// Negative chargeable income is not clamped and yields negative tax.
pub fn progressive_income_tax(chargeable: Decimal) -> Decimal {
    match IncomeBand::for_chargeable(chargeable) {
        IncomeBand::Lower => chargeable * LOWER_BAND_RATE,
        IncomeBand::Upper => {
            LOWER_BAND_TAX.saturating_add((chargeable - BAND_THRESHOLD) * UPPER_BAND_RATE)
        }
    }
}

/// Format a fractional rate as a percentage label, e.g. 0.025 -> "2.5%"
pub fn percent_label(rate: Decimal) -> String {
    format!("{}%", (rate * dec!(100)).normalize())
}

/// A named rate for display in the rate table
#[derive(Debug, Clone, Copy)]
pub struct RateEntry {
    pub name: &'static str,
    pub rate: Decimal,
    pub applies_to: &'static str,
}

/// Every statutory rate, in display order
pub fn rate_table() -> Vec<RateEntry> {
    vec![
        RateEntry {
            name: "Income Tax (lower band)",
            rate: LOWER_BAND_RATE,
            applies_to: "Chargeable income up to TT$1,000,000",
        },
        RateEntry {
            name: "Income Tax (upper band)",
            rate: UPPER_BAND_RATE,
            applies_to: "Chargeable income above TT$1,000,000",
        },
        RateEntry {
            name: "Health Surcharge",
            rate: HEALTH_SURCHARGE_RATE,
            applies_to: "Gross income, revenue or sales",
        },
        RateEntry {
            name: "Business Levy",
            rate: BUSINESS_LEVY_RATE,
            applies_to: "Gross revenue or sales",
        },
        RateEntry {
            name: "Corporation Tax",
            rate: CORPORATION_TAX_RATE,
            applies_to: "Chargeable profit",
        },
        RateEntry {
            name: "Corporation Tax (petrochemical)",
            rate: PETROCHEMICAL_TAX_RATE,
            applies_to: "Chargeable profit of petrochemical companies",
        },
        RateEntry {
            name: "VAT",
            rate: VAT_RATE,
            applies_to: "Revenue of VAT-registered sole traders",
        },
        RateEntry {
            name: "Green Fund Levy",
            rate: GREEN_FUND_LEVY_RATE,
            applies_to: "Corporate gross sales",
        },
    ]
}
