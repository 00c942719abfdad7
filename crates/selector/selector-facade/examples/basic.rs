//! Basic example demonstrating transform-select forecasting
//!
//! Run with: cargo run --example basic -p selector-facade
//! Set RUST_LOG=selector_core=debug to see routing decisions.

use selector_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Repeats the last observation
#[derive(Clone, Default)]
struct Naive {
    last: Option<f64>,
}

impl Forecaster for Naive {
    fn fit(
        &mut self,
        y: &[f64],
        _x: Option<&Exogenous>,
        _fh: Option<&ForecastHorizon>,
    ) -> Result<()> {
        self.last = y.last().copied();
        self.last.map(|_| ()).ok_or(SelectorError::InsufficientData {
            required: 1,
            actual: 0,
        })
    }

    fn predict(&self, fh: &ForecastHorizon, _x: Option<&Exogenous>) -> Result<Vec<f64>> {
        let last = self.last.ok_or(SelectorError::NotFitted)?;
        Ok(vec![last; fh.len()])
    }

    fn update(&mut self, y: &[f64], _x: Option<&Exogenous>, _update_params: bool) -> Result<()> {
        self.last = y.last().copied().or(self.last);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.last.is_some()
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::new().with(Capability::PredictionIntervals, false)
    }

    fn clone_box(&self) -> Box<dyn Forecaster> {
        Box::new(Naive::default())
    }

    fn name(&self) -> &str {
        "naive"
    }
}

/// Average demand per period, zeros included
#[derive(Clone, Default)]
struct DemandRate {
    rate: Option<f64>,
}

impl Forecaster for DemandRate {
    fn fit(
        &mut self,
        y: &[f64],
        _x: Option<&Exogenous>,
        _fh: Option<&ForecastHorizon>,
    ) -> Result<()> {
        if y.is_empty() {
            return Err(SelectorError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        self.rate = Some(y.iter().sum::<f64>() / y.len() as f64);
        Ok(())
    }

    fn predict(&self, fh: &ForecastHorizon, _x: Option<&Exogenous>) -> Result<Vec<f64>> {
        let rate = self.rate.ok_or(SelectorError::NotFitted)?;
        Ok(vec![rate; fh.len()])
    }

    fn update(&mut self, _y: &[f64], _x: Option<&Exogenous>, _update_params: bool) -> Result<()> {
        self.rate.map(|_| ()).ok_or(SelectorError::NotFitted)
    }

    fn is_fitted(&self) -> bool {
        self.rate.is_some()
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::new().with(Capability::PredictionIntervals, false)
    }

    fn clone_box(&self) -> Box<dyn Forecaster> {
        Box::new(DemandRate::default())
    }

    fn name(&self) -> &str {
        "demand_rate"
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "selector_core=info".into()),
        )
        .init();

    println!("=== selector-facade Basic Examples ===\n");

    // 1. Build a composite
    println!("1. Transform-select forecaster");
    let mut forecaster = TransformSelectBuilder::new()
        .candidate("smooth", Naive::default())
        .candidate("intermittent", DemandRate::default())
        .fallback(DemandRate::default())
        .build()?;
    for step in forecaster.steps() {
        println!("   step: {}", step.name());
    }
    println!();

    // 2. Route series by demand class
    println!("2. Routing");
    let series: [(&str, Vec<f64>); 3] = [
        ("regular", vec![10.0, 11.0, 9.0, 10.0, 12.0, 10.0, 11.0, 9.0]),
        ("sparse", vec![0.0, 0.0, 5.0, 0.0, 0.0, 6.0, 0.0, 0.0, 5.0, 0.0, 0.0, 6.0]),
        ("bursty", vec![0.0, 0.0, 1.0, 0.0, 0.0, 30.0, 0.0, 0.0, 2.0, 0.0, 0.0, 40.0]),
    ];
    let fh = ForecastHorizon::ahead(3);
    for (name, y) in &series {
        forecaster.fit(y, None, None)?;
        let slot = forecaster.selection().map(|s| s.slot().to_string()).unwrap_or_default();
        let category = forecaster.category().map(|c| c.to_string()).unwrap_or_default();
        let forecast = forecaster.predict(&fh, None)?;
        println!("   {:<8} -> {:<13} via {:<24} {:?}", name, category, slot, forecast);
    }
    println!();

    // 3. Capability gating
    println!("3. Capabilities");
    let capabilities = forecaster.capabilities();
    for (capability, value) in capabilities.iter() {
        println!("   {:<40} {}", capability.tag(), value);
    }
    match forecaster.predict_interval(&fh, None, &[0.9]) {
        Ok(interval) => println!("   intervals: {:?}", interval),
        Err(e) => println!("   predict_interval: {}", e),
    }

    Ok(())
}
