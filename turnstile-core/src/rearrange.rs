use std::collections::VecDeque;

/// Reorders integers so non-negative and negative values alternate.
///
/// The input is split, keeping relative order, into the non-negative values and the
/// negative values. The output then takes one from each side in turn, non-negative
/// first, and drains whichever side is left once the other runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rearranger {
    values: Vec<i64>,
}

impl Rearranger {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn rearrange(&self) -> Vec<i64> {
        let (mut non_negative, mut negative): (VecDeque<i64>, VecDeque<i64>) =
            self.values.iter().partition(|&&v| v >= 0);

        let mut result = Vec::with_capacity(self.values.len());
        while !non_negative.is_empty() || !negative.is_empty() {
            if let Some(v) = non_negative.pop_front() {
                result.push(v);
            }
            if let Some(v) = negative.pop_front() {
                result.push(v);
            }
        }
        result
    }
}
