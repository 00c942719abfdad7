//! Category-to-forecaster routing
//!
//! The router owns unfitted prototypes of every candidate and of the
//! optional fallback, and hands out fresh copies for each fit.

use std::collections::BTreeMap;
use std::fmt;

use selector_spi::{CapabilitySet, Category, Forecaster, Result, SelectorError};
use tracing::debug;

use crate::capability::aggregate_capabilities;

/// Position of a forecaster within a composite.
///
/// The fallback is a variant of its own, so a category that happens to be
/// named like the fallback can never collide with it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelSlot {
    /// Candidate registered under a category label
    Candidate(String),
    /// Forecaster used when no candidate matches
    Fallback,
}

impl ModelSlot {
    pub fn candidate(label: impl Into<String>) -> Self {
        ModelSlot::Candidate(label.into())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ModelSlot::Fallback)
    }
}

impl fmt::Display for ModelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSlot::Candidate(label) => write!(f, "candidate '{}'", label),
            ModelSlot::Fallback => f.write_str("fallback"),
        }
    }
}

/// Maps categories to forecaster prototypes
#[derive(Clone, Default)]
pub struct Router {
    candidates: BTreeMap<String, Box<dyn Forecaster>>,
    fallback: Option<Box<dyn Forecaster>>,
}

impl Router {
    /// Register fresh copies of `candidates` and `fallback`.
    ///
    /// Fails with [`SelectorError::Configuration`] if a label is blank or
    /// registered twice.
    pub fn new<I, S>(candidates: I, fallback: Option<Box<dyn Forecaster>>) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Box<dyn Forecaster>)>,
        S: Into<String>,
    {
        let mut registered = BTreeMap::new();
        for (label, forecaster) in candidates {
            let label = label.into();
            validate_label(&label)?;
            if registered.contains_key(&label) {
                return Err(SelectorError::Configuration {
                    label,
                    reason: "label is registered more than once".to_string(),
                });
            }
            registered.insert(label, forecaster.clone_box());
        }

        Ok(Self {
            candidates: registered,
            fallback: fallback.map(|forecaster| forecaster.clone_box()),
        })
    }

    /// Fresh, unfitted forecaster for `category`.
    ///
    /// Picks the candidate registered under `category`, else the fallback.
    /// Fails with [`SelectorError::MissingCandidate`] when neither exists.
    pub fn select(&self, category: &Category) -> Result<(ModelSlot, Box<dyn Forecaster>)> {
        if let Some(prototype) = self.candidates.get(category.as_str()) {
            debug!(category = %category, forecaster = prototype.name(), "routing to candidate");
            return Ok((
                ModelSlot::Candidate(category.to_string()),
                prototype.clone_box(),
            ));
        }

        match &self.fallback {
            Some(fallback) => {
                debug!(category = %category, forecaster = fallback.name(), "routing to fallback");
                Ok((ModelSlot::Fallback, fallback.clone_box()))
            }
            None => Err(SelectorError::MissingCandidate {
                category: category.to_string(),
            }),
        }
    }

    /// Slot `select` would use for `category`, without cloning anything
    pub fn route(&self, category: &Category) -> Option<ModelSlot> {
        if self.candidates.contains_key(category.as_str()) {
            Some(ModelSlot::Candidate(category.to_string()))
        } else if self.fallback.is_some() {
            Some(ModelSlot::Fallback)
        } else {
            None
        }
    }

    pub fn candidate(&self, label: &str) -> Option<&dyn Forecaster> {
        self.candidates.get(label).map(|forecaster| forecaster.as_ref())
    }

    pub fn fallback(&self) -> Option<&dyn Forecaster> {
        self.fallback.as_deref()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.candidates.keys().map(String::as_str)
    }

    /// Number of candidates, not counting the fallback
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Capabilities aggregated over every candidate and the fallback
    pub fn capabilities(&self) -> CapabilitySet {
        aggregate_capabilities(
            self.candidates.values().map(|forecaster| forecaster.capabilities()),
            self.fallback.as_ref().map(|forecaster| forecaster.capabilities()),
        )
    }

    /// Every candidate in label order, followed by the fallback if present
    pub fn entries(&self) -> Vec<(ModelSlot, &dyn Forecaster)> {
        let mut entries: Vec<(ModelSlot, &dyn Forecaster)> =
            Vec::with_capacity(self.candidates.len() + 1);
        for (label, forecaster) in &self.candidates {
            entries.push((ModelSlot::Candidate(label.clone()), forecaster.as_ref()));
        }
        if let Some(fallback) = &self.fallback {
            entries.push((ModelSlot::Fallback, fallback.as_ref()));
        }
        entries
    }

    /// Replace or add prototypes.
    ///
    /// Entries for [`ModelSlot::Fallback`] replace the fallback; all others
    /// replace or add the candidate with that label. Nothing is applied if
    /// any label is invalid.
    pub fn apply<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (ModelSlot, Box<dyn Forecaster>)>,
    {
        let entries: Vec<(ModelSlot, Box<dyn Forecaster>)> = entries.into_iter().collect();
        for (slot, _) in &entries {
            if let ModelSlot::Candidate(label) = slot {
                validate_label(label)?;
            }
        }

        for (slot, forecaster) in entries {
            match slot {
                ModelSlot::Candidate(label) => {
                    self.candidates.insert(label, forecaster.clone_box());
                }
                ModelSlot::Fallback => self.fallback = Some(forecaster.clone_box()),
            }
        }
        Ok(())
    }
}

fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(SelectorError::Configuration {
            label: label.to_string(),
            reason: "label must not be blank".to_string(),
        });
    }
    Ok(())
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("candidates", &self.labels().collect::<Vec<_>>())
            .field("fallback", &self.fallback.as_ref().map(|forecaster| forecaster.name()))
            .finish()
    }
}
