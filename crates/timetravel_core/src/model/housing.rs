//! Year-keyed housing cost schedule
//!
//! Owning a home adds its monthly payment to expenses and recognises the home
//! value in net worth once. Renting removes a flat housing cost instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Housing figures for a single year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub home_value: f64,
    /// Annual mortgage rate, in percent
    pub rate: f64,
    pub monthly_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingSchedule {
    #[serde(default)]
    pub entries: BTreeMap<i32, ScheduleEntry>,
    /// Monthly amount removed from expenses when choosing to rent
    #[serde(default)]
    pub flat_housing_cost: f64,
}

impl HousingSchedule {
    pub fn new(flat_housing_cost: f64) -> Self {
        Self {
            entries: BTreeMap::new(),
            flat_housing_cost,
        }
    }

    #[must_use]
    pub fn entry(mut self, year: i32, entry: ScheduleEntry) -> Self {
        self.entries.insert(year, entry);
        self
    }

    pub fn get(&self, year: i32) -> Option<&ScheduleEntry> {
        self.entries.get(&year)
    }

    /// Build a schedule for a fixed-rate amortized mortgage.
    ///
    /// `annual_rate` and `appreciation` are percentages. The payment is the
    /// standard annuity payment `P·r / (1 − (1 + r)^−n)` with a monthly rate;
    /// the home value compounds by `appreciation` every year. Years past
    /// `i32::MAX` are left out.
    pub fn fixed_rate_mortgage(
        start_year: i32,
        years: u32,
        price: f64,
        annual_rate: f64,
        term_years: u32,
        appreciation: f64,
    ) -> Self {
        let payment = monthly_payment(price, annual_rate, term_years);
        let mut schedule = HousingSchedule::new(0.0);
        let mut home_value = price;

        for offset in 0..years {
            let Some(year) = i32::try_from(offset)
                .ok()
                .and_then(|offset| start_year.checked_add(offset))
            else {
                break;
            };
            // Payments stop once the loan is paid off
            let monthly_payment = if offset < term_years { payment } else { 0.0 };
            schedule.entries.insert(
                year,
                ScheduleEntry {
                    home_value,
                    rate: annual_rate,
                    monthly_payment,
                },
            );
            home_value *= 1.0 + appreciation / 100.0;
        }

        schedule
    }

    #[must_use]
    pub fn with_flat_housing_cost(mut self, cost: f64) -> Self {
        self.flat_housing_cost = cost;
        self
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.flat_housing_cost.is_finite()
            && self.entries.values().all(|e| {
                e.home_value.is_finite() && e.rate.is_finite() && e.monthly_payment.is_finite()
            })
    }
}

/// Monthly payment of an amortized loan
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let n = f64::from(term_years) * 12.0;
    if n == 0.0 {
        return 0.0;
    }
    let r = annual_rate / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    principal * r / (1.0 - (1.0 + r).powf(-n))
}
