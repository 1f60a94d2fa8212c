//! Contract with the external graph learner.
//!
//! The learner itself (clauses, thresholds, message passing) lives outside
//! this crate. It consumes [`GraphBatch`]es through [`GraphClassifier`]:
//! `fit` on labelled batches, then `predict_proba` on batches that share the
//! same [`Signature`].

use serde::{Deserialize, Serialize};

use crate::core::{HexError, Result};

use super::encoder::GraphBatch;
use super::graph::Signature;

/// Binary classifier over graph batches.
///
/// Class 1 means "the side to move goes on to win".
pub trait GraphClassifier {
    /// Train on a fully populated batch with one label (0 or 1) per sample.
    fn fit(&mut self, batch: &GraphBatch, labels: &[u32], epochs: usize) -> Result<()>;

    /// Probability of class 1 for each sample.
    fn predict_proba(&self, batch: &GraphBatch) -> Result<Vec<f32>>;

    /// Hard class predictions, thresholded at 0.5.
    fn predict(&self, batch: &GraphBatch) -> Result<Vec<u32>> {
        Ok(self
            .predict_proba(batch)?
            .into_iter()
            .map(|p| u32::from(p >= 0.5))
            .collect())
    }
}

/// Validate `fit` inputs: complete batch, one label per sample, labels in {0, 1}.
pub fn check_fit_inputs(batch: &GraphBatch, labels: &[u32]) -> Result<()> {
    if labels.len() != batch.len() {
        return Err(HexError::LabelCountMismatch {
            labels: labels.len(),
            samples: batch.len(),
        });
    }
    if let Some(&bad) = labels.iter().find(|&&l| l > 1) {
        return Err(HexError::InvalidConfig {
            message: format!("label {bad} is not 0 or 1"),
        });
    }
    batch.ensure_complete()
}

/// Predicts the training-set frequency of class 1 for every sample.
///
/// A baseline for wiring tests. It enforces the same signature discipline a
/// real learner needs: prediction batches must match the fitted vocabulary.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MajorityClassifier {
    fitted: Option<(Signature, f32)>,
}

impl MajorityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signature of the batch this classifier was fitted on.
    #[must_use]
    pub fn signature(&self) -> Option<Signature> {
        self.fitted.map(|(sig, _)| sig)
    }

    /// Fraction of positive labels seen during fit.
    #[must_use]
    pub fn positive_rate(&self) -> Option<f32> {
        self.fitted.map(|(_, rate)| rate)
    }
}

impl GraphClassifier for MajorityClassifier {
    fn fit(&mut self, batch: &GraphBatch, labels: &[u32], _epochs: usize) -> Result<()> {
        check_fit_inputs(batch, labels)?;
        if let Some(sig) = self.signature() {
            if sig != batch.signature() {
                return Err(HexError::SignatureMismatch);
            }
        }
        let positives = labels.iter().filter(|&&l| l == 1).count();
        let rate = if labels.is_empty() {
            0.5
        } else {
            positives as f32 / labels.len() as f32
        };
        self.fitted = Some((batch.signature(), rate));
        Ok(())
    }

    fn predict_proba(&self, batch: &GraphBatch) -> Result<Vec<f32>> {
        let (sig, rate) = self.fitted.ok_or(HexError::NotFitted)?;
        if sig != batch.signature() {
            return Err(HexError::SignatureMismatch);
        }
        batch.ensure_complete()?;
        Ok(vec![rate; batch.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::nn::GraphEncoder;
    use crate::rules::Board;

    fn batch(size: usize, count: usize) -> GraphBatch {
        let board = Board::new(size);
        let encoder = GraphEncoder::new(size);
        encoder
            .encode_batch((0..count).map(|_| (&board, Player::X)))
            .unwrap()
    }

    #[test]
    fn test_majority_fit_predict() {
        let train = batch(3, 4);
        let mut clf = MajorityClassifier::new();
        clf.fit(&train, &[1, 1, 1, 0], 1).unwrap();

        assert_eq!(clf.positive_rate(), Some(0.75));
        assert_eq!(clf.predict_proba(&batch(3, 2)).unwrap(), vec![0.75, 0.75]);
        assert_eq!(clf.predict(&batch(3, 2)).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_predict_before_fit() {
        let clf = MajorityClassifier::new();
        assert!(matches!(clf.predict_proba(&batch(3, 1)), Err(HexError::NotFitted)));
    }

    #[test]
    fn test_signature_mismatch() {
        let mut clf = MajorityClassifier::new();
        clf.fit(&batch(3, 2), &[0, 1], 1).unwrap();
        assert!(matches!(
            clf.predict_proba(&batch(4, 2)),
            Err(HexError::SignatureMismatch)
        ));
        assert!(matches!(
            clf.fit(&batch(5, 1), &[1], 1),
            Err(HexError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_fit_input_checks() {
        let mut clf = MajorityClassifier::new();
        assert!(matches!(
            clf.fit(&batch(3, 2), &[1], 1),
            Err(HexError::LabelCountMismatch { labels: 1, samples: 2 })
        ));
        assert!(clf.fit(&batch(3, 1), &[2], 1).is_err());

        let incomplete = GraphEncoder::new(3).empty_batch(2);
        assert!(matches!(
            clf.fit(&incomplete, &[0, 1], 1),
            Err(HexError::IncompleteBatch { index: 0 })
        ));
    }
}
