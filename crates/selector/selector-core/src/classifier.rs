//! Classifier adapter
//!
//! Turns the tabular output of a [`SeriesClassifier`] into a [`Category`].

use selector_spi::{Category, Exogenous, Result, SelectorError, SeriesClassifier};

/// Owns a private copy of a classifier and reads the category it produces
#[derive(Clone)]
pub struct ClassifierAdapter {
    classifier: Box<dyn SeriesClassifier>,
}

impl ClassifierAdapter {
    /// Wrap a fresh copy of `classifier`
    pub fn new(classifier: &dyn SeriesClassifier) -> Self {
        Self {
            classifier: classifier.clone_box(),
        }
    }

    /// Re-fit the classifier on `y` and return the category at row 0, column 0.
    ///
    /// Errors raised by the classifier are returned as they are.
    pub fn classify(&mut self, y: &[f64], x: Option<&Exogenous>) -> Result<Category> {
        let table = self.classifier.fit_transform(y, x)?;
        table.get(0, 0).map(Category::from).ok_or_else(|| {
            SelectorError::InvalidClassification(format!(
                "classifier '{}' returned a {}x{} table, expected at least one row and one column",
                self.classifier.name(),
                table.n_rows(),
                table.n_cols()
            ))
        })
    }

    pub fn classifier(&self) -> &dyn SeriesClassifier {
        self.classifier.as_ref()
    }
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
