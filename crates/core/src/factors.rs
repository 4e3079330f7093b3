use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Malaysian electricity grid operators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GridProvider {
    /// Tenaga Nasional Berhad (Peninsular Malaysia)
    TNB,
    /// Sabah Electricity
    SESB,
    /// Sarawak Energy
    SEB,
}

/// Emission factor table, kg CO2e per unit of activity.
///
/// Every constant the calculator uses lives here, including the distance and
/// working-day assumptions, so regional or regulatory updates are a config
/// change rather than a code change. Partial overrides from `greenmetric.toml`
/// fall back to these defaults field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub petrol_per_liter: f64,
    pub diesel_per_liter: f64,
    pub natural_gas_per_m3: f64,

    /// kg CO2e per kWh, keyed by grid operator.
    pub grid: BTreeMap<GridProvider, f64>,

    pub domestic_flight_per_km: f64,
    pub international_flight_per_km: f64,
    pub hotel_night: f64,
    pub commute_per_km: f64,

    pub landfill_waste_per_kg: f64,
    /// Negative: avoided emissions credit.
    pub recycling_per_kg: f64,

    pub avg_domestic_flight_km: f64,
    pub avg_international_flight_km: f64,
    pub working_days_per_year: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        let mut grid = BTreeMap::new();
        grid.insert(GridProvider::TNB, 0.585);
        grid.insert(GridProvider::SESB, 0.694);
        grid.insert(GridProvider::SEB, 0.702);

        Self {
            petrol_per_liter: 2.31,
            diesel_per_liter: 2.68,
            natural_gas_per_m3: 1.96,
            grid,
            domestic_flight_per_km: 0.255,
            international_flight_per_km: 0.195,
            hotel_night: 30.0,
            commute_per_km: 0.21,
            landfill_waste_per_kg: 0.467,
            recycling_per_kg: -0.285,
            avg_domestic_flight_km: 500.0,
            avg_international_flight_km: 3000.0,
            working_days_per_year: 250.0,
        }
    }
}

impl EmissionFactors {
    /// A table missing the requested provider is a configuration error, not
    /// a silent fallback.
    pub fn grid_factor(&self, provider: GridProvider) -> anyhow::Result<f64> {
        self.grid
            .get(&provider)
            .copied()
            .with_context(|| format!("no grid emission factor configured for provider {provider:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_all_providers() {
        let f = EmissionFactors::default();
        assert_eq!(f.grid_factor(GridProvider::TNB).unwrap(), 0.585);
        assert_eq!(f.grid_factor(GridProvider::SESB).unwrap(), 0.694);
        assert_eq!(f.grid_factor(GridProvider::SEB).unwrap(), 0.702);
    }

    #[test]
    fn missing_grid_factor_is_an_error() {
        let mut f = EmissionFactors::default();
        f.grid.remove(&GridProvider::SEB);
        let err = f.grid_factor(GridProvider::SEB).unwrap_err();
        assert!(format!("{err:#}").contains("SEB"));
    }

    #[test]
    fn partial_toml_override_keeps_defaults() {
        let f: EmissionFactors = toml::from_str(
            r#"
            petrol_per_liter = 2.4

            [grid]
            TNB = 0.55
            "#,
        )
        .unwrap();
        assert_eq!(f.petrol_per_liter, 2.4);
        assert_eq!(f.diesel_per_liter, 2.68);
        // the grid map is replaced wholesale, not merged
        assert_eq!(f.grid.len(), 1);
        assert_eq!(f.grid_factor(GridProvider::TNB).unwrap(), 0.55);
        assert!(f.grid_factor(GridProvider::SEB).is_err());
    }
}
