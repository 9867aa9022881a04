// Pricing calculations for moving estimates
//
// The estimator is linear: a base fee plus a per-room charge, a per-km
// surcharge beyond the free distance, and the sum of checked add-on
// services. The arithmetic is kept separate from the panel that renders it
// so it is testable without a terminal. All amounts are whole SAR.

use crate::content::Addon;
use serde::Deserialize;

/// Tariff used by the estimator. Overridable from the config file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PricingRates {
    /// Flat call-out fee
    pub base_fee: u32,
    /// Charge per room
    pub per_room: u32,
    /// Distance included in the base price, in km
    pub free_km: u32,
    /// Surcharge per km beyond `free_km`
    pub per_km: u32,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            base_fee: 100,
            per_room: 50,
            free_km: 10,
            per_km: 5,
        }
    }
}

/// Base price for a move of `rooms` rooms
pub fn base_price(rates: &PricingRates, rooms: u32) -> u32 {
    rates.base_fee + rooms * rates.per_room
}

/// Surcharge for `distance_km`, zero within the free distance
pub fn distance_surcharge(rates: &PricingRates, distance_km: u32) -> u32 {
    distance_km.saturating_sub(rates.free_km) * rates.per_km
}

/// Total estimate: base + distance surcharge + checked add-on costs
pub fn estimate(
    rates: &PricingRates,
    rooms: u32,
    distance_km: u32,
    addon_costs: impl IntoIterator<Item = u32>,
) -> u32 {
    base_price(rates, rooms)
        + distance_surcharge(rates, distance_km)
        + addon_costs.into_iter().sum::<u32>()
}

/// Rows of the estimator panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorRow {
    Rooms,
    Distance,
    /// Index into the add-on catalog
    Addon(usize),
    Order,
}

pub const MIN_ROOMS: u32 = 1;
pub const MAX_ROOMS: u32 = 6;
pub const MIN_DISTANCE_KM: u32 = 1;
pub const MAX_DISTANCE_KM: u32 = 100;

/// Interactive state of the pricing estimator
///
/// The panel recomputes the displayed total from this state on every
/// frame, mirroring the site recalculating on every input change.
pub struct Estimator {
    rates: PricingRates,
    pub rooms: u32,
    pub distance_km: u32,
    addons: Vec<Addon>,
    checked: Vec<bool>,
    cursor: usize,
}

impl Estimator {
    pub fn new(rates: PricingRates, addons: Vec<Addon>) -> Self {
        let checked = vec![false; addons.len()];
        Self {
            rates,
            rooms: 3,
            distance_km: 10,
            addons,
            checked,
            cursor: 0,
        }
    }

    /// Number of selectable rows: rooms, distance, add-ons, order button
    pub fn row_count(&self) -> usize {
        2 + self.addons.len() + 1
    }

    pub fn row_at(&self, index: usize) -> EstimatorRow {
        match index {
            0 => EstimatorRow::Rooms,
            1 => EstimatorRow::Distance,
            i if i < 2 + self.addons.len() => EstimatorRow::Addon(i - 2),
            _ => EstimatorRow::Order,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_row(&self) -> EstimatorRow {
        self.row_at(self.cursor)
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Adjust the value under the cursor: rooms step by one, distance by
    /// five km (the slider analogue), add-ons toggle on any adjustment.
    pub fn adjust(&mut self, delta: i32) {
        match self.cursor_row() {
            EstimatorRow::Rooms => {
                self.rooms = step(self.rooms, delta, MIN_ROOMS, MAX_ROOMS, 1);
            }
            EstimatorRow::Distance => {
                self.distance_km =
                    step(self.distance_km, delta, MIN_DISTANCE_KM, MAX_DISTANCE_KM, 5);
            }
            EstimatorRow::Addon(i) => {
                if let Some(slot) = self.checked.get_mut(i) {
                    *slot = !*slot;
                }
            }
            EstimatorRow::Order => {}
        }
    }

    /// Toggle the add-on under the cursor (Space)
    pub fn toggle_addon(&mut self) {
        if let EstimatorRow::Addon(i) = self.cursor_row() {
            if let Some(slot) = self.checked.get_mut(i) {
                *slot = !*slot;
            }
        }
    }

    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Costs of the checked add-ons, in catalog order
    pub fn checked_costs(&self) -> impl Iterator<Item = u32> + '_ {
        self.addons
            .iter()
            .zip(&self.checked)
            .filter(|(_, &on)| on)
            .map(|(a, _)| a.cost)
    }

    pub fn total(&self) -> u32 {
        estimate(&self.rates, self.rooms, self.distance_km, self.checked_costs())
    }

    /// Service description carried into the quote-request modal
    pub fn order_summary(&self) -> String {
        format!(
            "نقل عفش - {} غرف، {} كم، {} ريال",
            self.rooms,
            self.distance_km,
            self.total()
        )
    }
}

fn step(value: u32, delta: i32, min: u32, max: u32, size: u32) -> u32 {
    if delta >= 0 {
        (value + size).min(max)
    } else {
        value.saturating_sub(size).max(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon(name: &str, cost: u32) -> Addon {
        Addon {
            name: name.to_string(),
            cost,
        }
    }

    #[test]
    fn contract_scenario() {
        // rooms=3 -> 100 + 3*50 = 250; distance=15 -> (15-10)*5 = 25;
        // one 80 SAR add-on -> total 355
        let rates = PricingRates::default();
        assert_eq!(base_price(&rates, 3), 250);
        assert_eq!(distance_surcharge(&rates, 15), 25);
        assert_eq!(estimate(&rates, 3, 15, [80]), 355);
    }

    #[test]
    fn no_surcharge_within_free_distance() {
        let rates = PricingRates::default();
        assert_eq!(distance_surcharge(&rates, 10), 0);
        assert_eq!(distance_surcharge(&rates, 1), 0);
        assert_eq!(distance_surcharge(&rates, 11), 5);
    }

    #[test]
    fn estimator_recomputes_on_input_changes() {
        let mut est = Estimator::new(
            PricingRates::default(),
            vec![addon("packing", 80), addon("storage", 150)],
        );
        est.rooms = 3;
        est.distance_km = 15;
        assert_eq!(est.total(), 275);

        // Check the first add-on
        est.select_next();
        est.select_next();
        assert_eq!(est.cursor_row(), EstimatorRow::Addon(0));
        est.toggle_addon();
        assert_eq!(est.total(), 355);

        // Unchecking removes its cost again
        est.toggle_addon();
        assert_eq!(est.total(), 275);
    }

    #[test]
    fn adjustments_are_clamped() {
        let mut est = Estimator::new(PricingRates::default(), Vec::new());
        for _ in 0..20 {
            est.adjust(1); // rooms row
        }
        assert_eq!(est.rooms, MAX_ROOMS);
        for _ in 0..20 {
            est.adjust(-1);
        }
        assert_eq!(est.rooms, MIN_ROOMS);

        est.select_next();
        for _ in 0..50 {
            est.adjust(1); // distance row
        }
        assert_eq!(est.distance_km, MAX_DISTANCE_KM);
    }

    #[test]
    fn row_layout() {
        let est = Estimator::new(PricingRates::default(), vec![addon("a", 1)]);
        assert_eq!(est.row_at(0), EstimatorRow::Rooms);
        assert_eq!(est.row_at(1), EstimatorRow::Distance);
        assert_eq!(est.row_at(2), EstimatorRow::Addon(0));
        assert_eq!(est.row_at(3), EstimatorRow::Order);
        assert_eq!(est.row_count(), 4);
    }
}
