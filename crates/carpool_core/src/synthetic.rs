//! Seeded synthetic trip request datasets.
//!
//! Commuters travel between a handful of hubs (office parks, stations)
//! scattered inside a bounding box, with some jitter around each hub, so a
//! realistic share of riders land within a driver's detour budget.

use chrono::{Duration, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geo::GeoPoint;
use crate::model::{Commuter, Driver, PersonRecord, Rider};

/// Default bounding box: Berlin, Germany (approx).
const DEFAULT_LAT_MIN: f64 = 52.34;
const DEFAULT_LAT_MAX: f64 = 52.68;
const DEFAULT_LON_MIN: f64 = 13.08;
const DEFAULT_LON_MAX: f64 = 13.76;

const KM_PER_DEGREE_LAT: f64 = 110.574;
const KM_PER_DEGREE_LON_AT_EQUATOR: f64 = 111.320;

const GENDERS: [&str; 2] = ["Female", "Male"];

#[derive(Debug, Clone)]
pub struct GeneratorParams {
    pub num_drivers: usize,
    pub num_riders: usize,
    pub seed: u64,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    /// Number of shared origin/destination hubs.
    pub num_hubs: usize,
    /// Maximum distance of a trip endpoint from its hub (km).
    pub hub_jitter_km: f64,
    /// Earliest departure time; departures are spread over `departure_window_minutes`.
    pub earliest_departure: NaiveTime,
    pub departure_window_minutes: u32,
    pub min_detour_km: f64,
    pub max_detour_km: f64,
    /// Probability (0.0–1.0) that a driver only accepts riders of their gender.
    pub same_gender_probability: f64,
    /// Probability (0.0–1.0) that a person is non-smoking.
    pub non_smoking_probability: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            num_drivers: 100,
            num_riders: 500,
            seed: 0,
            lat_min: DEFAULT_LAT_MIN,
            lat_max: DEFAULT_LAT_MAX,
            lon_min: DEFAULT_LON_MIN,
            lon_max: DEFAULT_LON_MAX,
            num_hubs: 8,
            hub_jitter_km: 2.0,
            earliest_departure: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN),
            departure_window_minutes: 120,
            min_detour_km: 1.0,
            max_detour_km: 5.0,
            same_gender_probability: 0.3,
            non_smoking_probability: 0.7,
        }
    }
}

impl GeneratorParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_counts(mut self, num_drivers: usize, num_riders: usize) -> Self {
        self.num_drivers = num_drivers;
        self.num_riders = num_riders;
        self
    }

    pub fn with_bounds(mut self, lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        self.lat_min = lat_min;
        self.lat_max = lat_max;
        self.lon_min = lon_min;
        self.lon_max = lon_max;
        self
    }
}

/// Generate drivers followed by riders. The same params always produce the same records.
pub fn generate_dataset(params: &GeneratorParams) -> Vec<PersonRecord> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let hubs: Vec<GeoPoint> = (0..params.num_hubs.max(1))
        .map(|_| random_point_in_bounds(&mut rng, params))
        .collect();

    let mut records = Vec::with_capacity(params.num_drivers + params.num_riders);
    for i in 0..params.num_drivers {
        let commuter = random_commuter(&mut rng, params, &hubs, format!("driver_{i:04}"));
        let max_detour_km = sample_between(&mut rng, params.min_detour_km, params.max_detour_km).max(0.0);
        records.push(PersonRecord::Driver(Driver {
            commuter,
            max_detour_km: round_to_tenths(max_detour_km),
            same_gender: rng.gen_bool(probability(params.same_gender_probability)),
        }));
    }
    for i in 0..params.num_riders {
        let commuter = random_commuter(&mut rng, params, &hubs, format!("rider_{i:04}"));
        records.push(PersonRecord::Rider(Rider { commuter }));
    }
    records
}

fn random_commuter<R: Rng>(
    rng: &mut R,
    params: &GeneratorParams,
    hubs: &[GeoPoint],
    name: String,
) -> Commuter {
    let origin = hubs[rng.gen_range(0..hubs.len())];
    let destination = hubs[rng.gen_range(0..hubs.len())];
    let offset = rng.gen_range(0..=params.departure_window_minutes);
    Commuter {
        name,
        start: jitter(rng, origin, params.hub_jitter_km),
        destination: jitter(rng, destination, params.hub_jitter_km),
        time_of_travel: params.earliest_departure + Duration::minutes(i64::from(offset)),
        gender: GENDERS[rng.gen_range(0..GENDERS.len())].to_owned(),
        non_smoking: rng.gen_bool(probability(params.non_smoking_probability)),
    }
}

fn random_point_in_bounds<R: Rng>(rng: &mut R, params: &GeneratorParams) -> GeoPoint {
    let lat = sample_between(rng, params.lat_min, params.lat_max).clamp(-90.0, 90.0);
    let lon = sample_between(rng, params.lon_min, params.lon_max).clamp(-180.0, 180.0);
    GeoPoint::new(lat, lon)
}

/// Uniform sample between two bounds given in either order. A non-finite
/// bound collapses the range onto the other one (or 0.0 when both are).
fn sample_between<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    match (a.is_finite(), b.is_finite()) {
        (true, true) if a == b => a,
        (true, true) => rng.gen_range(a.min(b)..=a.max(b)),
        (true, false) => a,
        (false, true) => b,
        (false, false) => 0.0,
    }
}

/// Clamp to [0, 1]; NaN counts as never.
fn probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Move `point` by up to `max_km` in each axis.
fn jitter<R: Rng>(rng: &mut R, point: GeoPoint, max_km: f64) -> GeoPoint {
    if !max_km.is_finite() || max_km <= 0.0 {
        return point;
    }
    let dlat_km = rng.gen_range(-max_km..=max_km);
    let dlon_km = rng.gen_range(-max_km..=max_km);
    let km_per_degree_lon = KM_PER_DEGREE_LON_AT_EQUATOR * point.lat.to_radians().cos().max(1e-6);
    GeoPoint::new(
        round_coordinate((point.lat + dlat_km / KM_PER_DEGREE_LAT).clamp(-90.0, 90.0)),
        round_coordinate((point.lon + dlon_km / km_per_degree_lon).clamp(-180.0, 180.0)),
    )
}

/// Six decimals (~10 cm) keeps generated files readable.
fn round_coordinate(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
