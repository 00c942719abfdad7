//! Transform-select forecaster
//!
//! Classifies the training series with a [`SeriesClassifier`], picks the
//! candidate forecaster registered for the observed category (or the
//! fallback), fits a fresh copy of it and delegates every later call to
//! that copy.
//!
//! # Example
//!
//! ```rust,ignore
//! use selector_core::TransformSelectForecaster;
//!
//! let mut forecaster = TransformSelectForecaster::new(
//!     vec![("smooth", naive), ("erratic", croston)],
//!     None,            // default ADI/CV² classifier
//!     Some(fallback),
//! )?;
//! forecaster.fit(&demand, None, None)?;
//! println!("category: {}", forecaster.category().unwrap());
//! let forecast = forecaster.predict(&ForecastHorizon::ahead(12), None)?;
//! ```

use std::fmt;

use selector_spi::{
    Capability, CapabilitySet, Category, Exogenous, ForecastHorizon, Forecaster, IntervalForecast,
    PredictiveDistribution, Result, SelectorError, SeriesClassifier, VarianceForecast,
};
use tracing::debug;

use crate::adi_cv::AdiCvClassifier;
use crate::classifier::ClassifierAdapter;
use crate::router::{ModelSlot, Router};

/// Outcome of the last successful fit
pub struct Selection {
    category: Category,
    slot: ModelSlot,
    forecaster: Box<dyn Forecaster>,
}

impl Selection {
    /// Category the classifier observed
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Slot the active forecaster was copied from
    pub fn slot(&self) -> &ModelSlot {
        &self.slot
    }

    /// The fitted forecaster all calls are delegated to
    pub fn forecaster(&self) -> &dyn Forecaster {
        self.forecaster.as_ref()
    }
}

/// One constituent of a transform-select forecaster
pub enum Step<'a> {
    Classifier(&'a dyn SeriesClassifier),
    Candidate(&'a str, &'a dyn Forecaster),
    Fallback(&'a dyn Forecaster),
}

impl<'a> Step<'a> {
    /// Name of the constituent, borrowed for as long as the constituent
    pub fn name(&self) -> &'a str {
        match *self {
            Step::Classifier(classifier) => classifier.name(),
            Step::Candidate(_, forecaster) | Step::Fallback(forecaster) => forecaster.name(),
        }
    }
}

/// Forecaster that routes each series to a candidate chosen by category
pub struct TransformSelectForecaster {
    classifier: ClassifierAdapter,
    router: Router,
    capabilities: CapabilitySet,
    selection: Option<Selection>,
}

impl TransformSelectForecaster {
    /// Create a transform-select forecaster.
    ///
    /// # Arguments
    ///
    /// * `candidates` - Forecasters keyed by the category they handle
    /// * `classifier` - Series classifier; defaults to [`AdiCvClassifier`]
    ///   emitting the demand class
    /// * `fallback` - Forecaster for categories without a candidate
    ///
    /// Candidates, fallback and classifier are all copied; the originals are
    /// never fitted. Capabilities are aggregated once here.
    pub fn new<I, S>(
        candidates: I,
        classifier: Option<Box<dyn SeriesClassifier>>,
        fallback: Option<Box<dyn Forecaster>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Box<dyn Forecaster>)>,
        S: Into<String>,
    {
        let router = Router::new(candidates, fallback)?;
        let classifier = match classifier {
            Some(classifier) => ClassifierAdapter::new(classifier.as_ref()),
            None => ClassifierAdapter::new(&AdiCvClassifier::default()),
        };
        let capabilities = router.capabilities();

        debug!(
            candidates = router.len(),
            fallback = router.fallback().is_some(),
            classifier = classifier.classifier().name(),
            "created transform-select forecaster"
        );

        Ok(Self {
            classifier,
            router,
            capabilities,
            selection: None,
        })
    }

    /// Category observed during the last successful fit
    pub fn category(&self) -> Option<&Category> {
        self.selection.as_ref().map(Selection::category)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The fitted forecaster calls are delegated to
    pub fn active_forecaster(&self) -> Option<&dyn Forecaster> {
        self.selection.as_ref().map(Selection::forecaster)
    }

    pub fn classifier(&self) -> &dyn SeriesClassifier {
        self.classifier.classifier()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Every candidate in label order, followed by the fallback if present
    pub fn list_all_models(&self) -> Vec<(ModelSlot, &dyn Forecaster)> {
        self.router.entries()
    }

    /// Replace or add constituents and re-aggregate capabilities.
    ///
    /// The active forecaster of a previous fit is kept until the next fit.
    pub fn apply_model_updates<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (ModelSlot, Box<dyn Forecaster>)>,
    {
        self.router.apply(entries)?;
        self.capabilities = self.router.capabilities();
        Ok(())
    }

    /// The classifier followed by every candidate and the fallback
    pub fn steps(&self) -> Vec<Step<'_>> {
        let mut steps = vec![Step::Classifier(self.classifier.classifier())];
        for label in self.router.labels() {
            if let Some(forecaster) = self.router.candidate(label) {
                steps.push(Step::Candidate(label, forecaster));
            }
        }
        if let Some(fallback) = self.router.fallback() {
            steps.push(Step::Fallback(fallback));
        }
        steps
    }

    fn active(&self) -> Result<&Selection> {
        self.selection.as_ref().ok_or(SelectorError::NotFitted)
    }

    fn ensure_probabilistic(&self, operation: &str) -> Result<()> {
        if self.capabilities.get(Capability::PredictionIntervals) {
            Ok(())
        } else {
            Err(SelectorError::unsupported(operation))
        }
    }
}

impl Forecaster for TransformSelectForecaster {
    /// Classify `y`, route to a fresh copy of the matching forecaster and fit
    /// it. The previous selection survives any failure.
    fn fit(
        &mut self,
        y: &[f64],
        x: Option<&Exogenous>,
        fh: Option<&ForecastHorizon>,
    ) -> Result<()> {
        let category = self.classifier.classify(y, x)?;
        let (slot, mut forecaster) = self.router.select(&category)?;
        forecaster.fit(y, x, fh)?;

        debug!(
            category = %category,
            slot = %slot,
            forecaster = forecaster.name(),
            "fitted selected forecaster"
        );

        self.selection = Some(Selection {
            category,
            slot,
            forecaster,
        });
        Ok(())
    }

    fn predict(&self, fh: &ForecastHorizon, x: Option<&Exogenous>) -> Result<Vec<f64>> {
        self.active()?.forecaster.predict(fh, x)
    }

    /// Forwarded to the active forecaster. The category is not re-evaluated,
    /// even if the new data would classify differently.
    fn update(&mut self, y: &[f64], x: Option<&Exogenous>, update_params: bool) -> Result<()> {
        let selection = self.selection.as_mut().ok_or(SelectorError::NotFitted)?;
        selection.forecaster.update(y, x, update_params)
    }

    fn is_fitted(&self) -> bool {
        self.selection.is_some()
    }

    fn capabilities(&self) -> CapabilitySet {
        self.capabilities.clone()
    }

    fn clone_box(&self) -> Box<dyn Forecaster> {
        Box::new(Self {
            classifier: self.classifier.clone(),
            router: self.router.clone(),
            capabilities: self.capabilities.clone(),
            selection: None,
        })
    }

    fn name(&self) -> &str {
        "transform_select"
    }

    fn predict_interval(
        &self,
        fh: &ForecastHorizon,
        x: Option<&Exogenous>,
        coverage: &[f64],
    ) -> Result<IntervalForecast> {
        self.ensure_probabilistic("predict_interval")?;
        self.active()?.forecaster.predict_interval(fh, x, coverage)
    }

    fn predict_var(
        &self,
        fh: &ForecastHorizon,
        x: Option<&Exogenous>,
        cov: bool,
    ) -> Result<VarianceForecast> {
        self.ensure_probabilistic("predict_var")?;
        self.active()?.forecaster.predict_var(fh, x, cov)
    }

    fn predict_proba(
        &self,
        fh: &ForecastHorizon,
        x: Option<&Exogenous>,
        marginal: bool,
    ) -> Result<PredictiveDistribution> {
        self.ensure_probabilistic("predict_proba")?;
        self.active()?.forecaster.predict_proba(fh, x, marginal)
    }
}

impl fmt::Debug for TransformSelectForecaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformSelectForecaster")
            .field("classifier", &self.classifier)
            .field("router", &self.router)
            .field("category", &self.category())
            .field("active", &self.active_forecaster().map(|forecaster| forecaster.name()))
            .finish()
    }
}
