use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered win/loss outcomes of one run; `true` is a win.
///
/// Built once per run and only handed out by shared reference afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeSequence {
    outcomes: Vec<bool>,
}

impl OutcomeSequence {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes }
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.outcomes
    }

    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|won| **won).count()
    }

    pub fn losses(&self) -> usize {
        self.outcomes.len() - self.wins()
    }
}

impl Deref for OutcomeSequence {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.outcomes
    }
}

impl From<Vec<bool>> for OutcomeSequence {
    fn from(outcomes: Vec<bool>) -> Self {
        Self::new(outcomes)
    }
}

impl FromIterator<bool> for OutcomeSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let seq: OutcomeSequence = [true, false, true, true].into_iter().collect();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.wins(), 3);
        assert_eq!(seq.losses(), 1);
        assert_eq!(&seq[1..3], &[false, true]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let seq = OutcomeSequence::new(vec![true, false]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[true,false]");
    }
}
