use std::io::Write;

use greenmetric_core::config::Config;
use greenmetric_core::factors::GridProvider;

#[test]
fn parse_valid_toml() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"
industry = "Technology"
store_path = "my-records.json"
min_score = 60

[factors]
petrol_per_liter = 2.4
working_days_per_year = 220

[factors.grid]
TNB = 0.55
SESB = 0.694
SEB = 0.702
"#
    )
    .unwrap();

    let cfg = Config::load(f.path()).unwrap();
    assert_eq!(cfg.industry.as_deref(), Some("Technology"));
    assert_eq!(cfg.min_score, Some(60));
    assert_eq!(
        cfg.store_path.as_deref(),
        Some(std::path::Path::new("my-records.json"))
    );

    let factors = cfg.factors();
    assert_eq!(factors.petrol_per_liter, 2.4);
    assert_eq!(factors.working_days_per_year, 220.0);
    // unnamed fields keep their defaults
    assert_eq!(factors.diesel_per_liter, 2.68);
    assert_eq!(factors.grid_factor(GridProvider::TNB).unwrap(), 0.55);
}

#[test]
fn parse_empty_toml_gives_defaults() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "").unwrap();

    let cfg = Config::load(f.path()).unwrap();
    assert_eq!(cfg.industry, None);
    assert_eq!(cfg.store_path, None);
    assert_eq!(cfg.min_score, None);
    assert!(cfg.factors.is_none());
    assert_eq!(cfg.factors().petrol_per_liter, 2.31);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "this is not valid [ toml {{{{").unwrap();

    let result = Config::load(f.path());
    assert!(result.is_err());
}
