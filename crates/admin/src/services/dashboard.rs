//! Dashboard aggregates over the delivery board.
//!
//! Everything here is a pure function of the orders, the user count and
//! `now`, so the handler only gathers inputs.

use std::collections::HashMap;

use atadiesel_core::{format_brl, format_brl_compact};
use chrono::{DateTime, Datelike, Days, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::DeliveryOrder;

/// Products listed under "top products".
pub const TOP_PRODUCTS: usize = 4;

const WEEKDAY_LABELS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];
const WEEK_LABELS: [&str; 4] = ["Sem 1", "Sem 2", "Sem 3", "Sem 4"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Revenue chart granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Days of the current week, Monday first.
    Daily,
    /// Weeks of the current month; days 22 and later fall in the fourth.
    Weekly,
    /// Months of the current year.
    #[default]
    Monthly,
}

impl Period {
    const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Daily => &WEEKDAY_LABELS,
            Self::Weekly => &WEEK_LABELS,
            Self::Monthly => &MONTH_LABELS,
        }
    }

    /// Bucket an order placed at `at` falls into, if it is in the window
    /// around `now`.
    fn bucket(self, at: DateTime<Utc>, now: DateTime<Utc>) -> Option<usize> {
        match self {
            Self::Daily => {
                let offset = u64::from(now.weekday().num_days_from_monday());
                let week_start = now.date_naive().checked_sub_days(Days::new(offset))?;
                let week_end = week_start.checked_add_days(Days::new(7))?;
                let day = at.date_naive();
                (day >= week_start && day < week_end)
                    .then(|| at.weekday().num_days_from_monday() as usize)
            }
            Self::Weekly => (at.year() == now.year() && at.month() == now.month())
                .then(|| ((at.day0() / 7) as usize).min(WEEK_LABELS.len() - 1)),
            Self::Monthly => (at.year() == now.year()).then(|| at.month0() as usize),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Totals {
    pub users: usize,
    pub orders: usize,
    pub revenue: Decimal,
    pub revenue_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub name: String,
    pub units: u32,
    pub revenue: Decimal,
    pub revenue_display: String,
}

/// One bar of the revenue chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: Decimal,
    /// Compact label shown above the bar, e.g. `R$ 2.5k`.
    pub value_display: String,
    /// Bar height relative to the tallest bar, 0 to 100.
    pub height_percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueChart {
    pub period: Period,
    pub max: Decimal,
    pub bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub totals: Totals,
    pub top_products: Vec<TopProduct>,
    pub chart: RevenueChart,
}

/// Build the dashboard for `period` as of `now`.
#[must_use]
pub fn build_report(
    period: Period,
    now: DateTime<Utc>,
    user_count: usize,
    orders: &[DeliveryOrder],
) -> DashboardReport {
    let revenue = orders
        .iter()
        .fold(Decimal::ZERO, |sum, order| sum.saturating_add(order.total));

    DashboardReport {
        totals: Totals {
            users: user_count,
            orders: orders.len(),
            revenue,
            revenue_display: format_brl(revenue),
        },
        top_products: top_products(orders),
        chart: revenue_chart(period, now, orders),
    }
}

/// Best sellers by units across all orders, ties broken by name.
#[must_use]
pub fn top_products(orders: &[DeliveryOrder]) -> Vec<TopProduct> {
    let mut sales: HashMap<&str, (u32, Decimal)> = HashMap::new();
    for line in orders.iter().flat_map(|order| &order.items) {
        let entry = sales.entry(line.name.as_str()).or_default();
        entry.0 = entry.0.saturating_add(line.quantity);
        entry.1 = entry.1.saturating_add(line.line_total());
    }

    let mut ranked: Vec<TopProduct> = sales
        .into_iter()
        .map(|(name, (units, revenue))| TopProduct {
            name: name.to_string(),
            units,
            revenue,
            revenue_display: format_brl(revenue),
        })
        .collect();
    ranked.sort_by(|a, b| b.units.cmp(&a.units).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(TOP_PRODUCTS);
    ranked
}

/// Revenue per bucket of `period`.
#[must_use]
pub fn revenue_chart(period: Period, now: DateTime<Utc>, orders: &[DeliveryOrder]) -> RevenueChart {
    let labels = period.labels();
    let mut values = vec![Decimal::ZERO; labels.len()];

    for order in orders {
        if let Some(slot) = period
            .bucket(order.placed_at, now)
            .and_then(|index| values.get_mut(index))
        {
            *slot = slot.saturating_add(order.total);
        }
    }

    let max = values.iter().copied().max().unwrap_or(Decimal::ZERO);
    let bars = labels
        .iter()
        .zip(values)
        .map(|(&label, value)| ChartBar {
            label,
            value,
            value_display: format_brl_compact(value),
            height_percent: height_percent(value, max),
        })
        .collect();

    RevenueChart { period, max, bars }
}

fn height_percent(value: Decimal, max: Decimal) -> u32 {
    if max <= Decimal::ZERO {
        return 0;
    }
    (value / max * Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
        .unwrap_or(0)
}
