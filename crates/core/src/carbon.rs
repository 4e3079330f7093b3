use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::factors::{EmissionFactors, GridProvider};

/// Descriptive only; never enters the arithmetic. `industry` selects the
/// benchmark table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub state: String,
}

/// Direct fuel combustion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope1Activity {
    pub petrol_liters: f64,
    pub diesel_liters: f64,
    pub natural_gas_m3: f64,
    pub generator_diesel_liters: f64,
}

/// Purchased electricity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope2Activity {
    pub electricity_kwh: f64,
    pub provider: GridProvider,
    pub renewable_percent: f64,
}

impl Default for Scope2Activity {
    fn default() -> Self {
        Self {
            electricity_kwh: 0.0,
            provider: GridProvider::TNB,
            renewable_percent: 0.0,
        }
    }
}

/// Value-chain activity: travel, commuting, waste.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope3Activity {
    pub domestic_flights: f64,
    pub international_flights: f64,
    pub hotel_nights: f64,
    pub employees: f64,
    pub avg_commute_km: f64,
    pub waste_kg: f64,
    pub recycled_kg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonInput {
    pub company: CompanyProfile,
    pub scope1: Scope1Activity,
    pub scope2: Scope2Activity,
    pub scope3: Scope3Activity,
}

impl CarbonInput {
    /// The form layer in front of us is expected to coerce blanks to zero;
    /// anything negative (or an out-of-range renewable share) is rejected
    /// rather than silently folded into the arithmetic.
    pub fn validate(&self) -> anyhow::Result<()> {
        let quantities = [
            ("scope1.petrol_liters", self.scope1.petrol_liters),
            ("scope1.diesel_liters", self.scope1.diesel_liters),
            ("scope1.natural_gas_m3", self.scope1.natural_gas_m3),
            (
                "scope1.generator_diesel_liters",
                self.scope1.generator_diesel_liters,
            ),
            ("scope2.electricity_kwh", self.scope2.electricity_kwh),
            ("scope3.domestic_flights", self.scope3.domestic_flights),
            (
                "scope3.international_flights",
                self.scope3.international_flights,
            ),
            ("scope3.hotel_nights", self.scope3.hotel_nights),
            ("scope3.employees", self.scope3.employees),
            ("scope3.avg_commute_km", self.scope3.avg_commute_km),
            ("scope3.waste_kg", self.scope3.waste_kg),
            ("scope3.recycled_kg", self.scope3.recycled_kg),
        ];

        for (name, value) in quantities {
            if !value.is_finite() {
                bail!("{name} must be a finite number, got {value}");
            }
            if value < 0.0 {
                bail!("{name} must be non-negative, got {value}");
            }
        }

        let rp = self.scope2.renewable_percent;
        if !rp.is_finite() || !(0.0..=100.0).contains(&rp) {
            bail!("scope2.renewable_percent must be within 0..=100, got {rp}");
        }

        Ok(())
    }
}

/// Rounded kg CO2e. Scope 3 (and therefore the total) can go negative when
/// the recycling credit outweighs everything else; we report the net value
/// unclamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintResult {
    pub scope1_kg: i64,
    pub scope2_kg: i64,
    pub scope3_kg: i64,
    pub total_kg: i64,
    pub breakdown: ScopeBreakdown,
}

/// Integer percentage share of each scope. All zero when the reported total
/// is zero or negative, where shares are meaningless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeBreakdown {
    pub scope1_percent: i64,
    pub scope2_percent: i64,
    pub scope3_percent: i64,
}

pub fn compute_footprint(
    input: &CarbonInput,
    factors: &EmissionFactors,
) -> anyhow::Result<FootprintResult> {
    input.validate()?;

    let s1 = &input.scope1;
    let scope1 = s1.petrol_liters * factors.petrol_per_liter
        + s1.diesel_liters * factors.diesel_per_liter
        + s1.natural_gas_m3 * factors.natural_gas_per_m3
        + s1.generator_diesel_liters * factors.diesel_per_liter;

    let s2 = &input.scope2;
    let grid_factor = factors.grid_factor(s2.provider)?;
    let scope2 = s2.electricity_kwh * grid_factor * (1.0 - s2.renewable_percent / 100.0);

    let s3 = &input.scope3;
    let scope3 = s3.domestic_flights * factors.avg_domestic_flight_km * factors.domestic_flight_per_km
        + s3.international_flights
            * factors.avg_international_flight_km
            * factors.international_flight_per_km
        + s3.hotel_nights * factors.hotel_night
        + s3.employees * s3.avg_commute_km * factors.working_days_per_year * factors.commute_per_km
        + s3.waste_kg * factors.landfill_waste_per_kg
        + s3.recycled_kg * factors.recycling_per_kg;

    let total = scope1 + scope2 + scope3;
    let total_kg = total.round() as i64;

    // guard on the rounded total the caller sees, so a footprint that
    // reports 0 kg never carries a non-zero breakdown
    let breakdown = if total_kg > 0 {
        ScopeBreakdown {
            scope1_percent: (scope1 / total * 100.0).round() as i64,
            scope2_percent: (scope2 / total * 100.0).round() as i64,
            scope3_percent: (scope3 / total * 100.0).round() as i64,
        }
    } else {
        ScopeBreakdown {
            scope1_percent: 0,
            scope2_percent: 0,
            scope3_percent: 0,
        }
    };

    Ok(FootprintResult {
        scope1_kg: scope1.round() as i64,
        scope2_kg: scope2.round() as i64,
        scope3_kg: scope3.round() as i64,
        total_kg,
        breakdown,
    })
}
