//! Inventory search engine.
//!
//! A search is a conjunction of independent predicates evaluated per record
//! in store order. Matches are not ranked or sorted. The total is counted
//! before the requested page is cut out.

use crate::config::SearchConfig;
use crate::models::{SearchOptions, SearchQuery, SearchResponse, VehicleRecord};
use crate::sanitize::normalize_text;
use crate::store::RecordStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Read-only query engine over a loaded [`RecordStore`].
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: Arc<RecordStore>,
}

impl SearchEngine {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Collect the filter values present in the inventory.
    ///
    /// Recomputed on every call. Categorical lists are unordered. Numeric
    /// ranges start inverted (`i64::MAX`, `i64::MIN`) so that an empty
    /// inventory is recognizable by `min > max`.
    pub fn compute_options(&self) -> SearchOptions {
        let mut brands = HashSet::new();
        let mut car_types = HashSet::new();
        let mut transmissions = HashSet::new();
        let mut fuels = HashSet::new();
        let mut drives = HashSet::new();

        let mut price = (i64::MAX, i64::MIN);
        let mut mileage = (i64::MAX, i64::MIN);
        let mut power = (i64::MAX, i64::MIN);

        for car in self.store.iter() {
            brands.insert(car.brand.clone());
            car_types.insert(car.car_type.clone());
            transmissions.insert(car.transmission.clone());
            fuels.insert(car.fuel.clone());
            drives.insert(car.drive.clone());

            widen(&mut price, car.price_chf);
            widen(&mut mileage, car.mileage_km);
            widen(&mut power, car.power_hp);
        }

        SearchOptions {
            brands: brands.into_iter().collect(),
            car_types: car_types.into_iter().collect(),
            transmissions: transmissions.into_iter().collect(),
            fuels: fuels.into_iter().collect(),
            drives: drives.into_iter().collect(),
            min_price: price.0,
            max_price: price.1,
            min_mileage: mileage.0,
            max_mileage: mileage.1,
            min_power: power.0,
            max_power: power.1,
        }
    }

    /// Filter the inventory and return the requested page.
    ///
    /// A non-positive limit becomes the default page size and a negative
    /// offset becomes zero; the response echoes the values actually used.
    pub fn search(&self, query: &SearchQuery) -> SearchResponse {
        debug!("Searching inventory: {:?}", query);

        let criteria = Criteria::from_query(query);
        let matches: Vec<&VehicleRecord> = self
            .store
            .iter()
            .filter(|car| criteria.matches(car))
            .collect();
        let total = matches.len();

        let limit = if query.limit <= 0 {
            SearchConfig::DEFAULT_LIMIT
        } else {
            query.limit
        };
        let offset = query.offset.max(0);

        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        let cars = if start >= total {
            Vec::new()
        } else {
            let end = start.saturating_add(usize::try_from(limit).unwrap_or(usize::MAX));
            matches[start..end.min(total)]
                .iter()
                .map(|car| (*car).clone())
                .collect()
        };

        debug!("Search matched {} of {} vehicles", total, self.store.len());

        SearchResponse {
            cars,
            total,
            limit,
            offset,
        }
    }
}

fn widen(range: &mut (i64, i64), value: i64) {
    range.0 = range.0.min(value);
    range.1 = range.1.max(value);
}

/// A query with its normalized text filters precomputed once per search.
struct Criteria<'q> {
    text: Option<String>,
    brand: Option<String>,
    car_type: Option<&'q str>,
    transmission: Option<&'q str>,
    fuel: Option<&'q str>,
    drive: Option<&'q str>,
    price: (Option<i64>, Option<i64>),
    mileage: (Option<i64>, Option<i64>),
    power: (Option<i64>, Option<i64>),
}

impl<'q> Criteria<'q> {
    fn from_query(query: &'q SearchQuery) -> Self {
        Self {
            text: non_empty(&query.query).map(normalize_text),
            brand: non_empty(&query.brand).map(normalize_text),
            car_type: non_empty(&query.car_type),
            transmission: non_empty(&query.transmission),
            fuel: non_empty(&query.fuel),
            drive: non_empty(&query.drive),
            price: (query.min_price, query.max_price),
            mileage: (query.min_mileage, query.max_mileage),
            power: (query.min_power, query.max_power),
        }
    }

    fn matches(&self, car: &VehicleRecord) -> bool {
        if let Some(text) = &self.text {
            if !normalize_text(&car.title).contains(text.as_str())
                && !normalize_text(&car.description).contains(text.as_str())
            {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if !normalize_text(&car.brand).contains(brand.as_str()) {
                return false;
            }
        }

        let categorical = [
            (self.car_type, car.car_type.as_str()),
            (self.transmission, car.transmission.as_str()),
            (self.fuel, car.fuel.as_str()),
            (self.drive, car.drive.as_str()),
        ];
        if categorical
            .iter()
            .any(|(wanted, actual)| wanted.is_some_and(|w| w != *actual))
        {
            return false;
        }

        in_range(car.price_chf, self.price)
            && in_range(car.mileage_km, self.mileage)
            && in_range(car.power_hp, self.power)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn in_range(value: i64, (min, max): (Option<i64>, Option<i64>)) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}
