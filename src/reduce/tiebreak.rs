use crate::error::ReductionError;
use crate::machine::StateId;

/// Decides which state to eliminate when several candidates are tied at the
/// minimum cost.
///
/// The reducer consults the tie-break only when at least two candidates are
/// offered. Implementations must return one of the offered ids, anything
/// else aborts the reduction. An implementation may be interactive, the
/// engine itself never is.
pub trait TieBreak {
    /// Pick one id out of `candidates`. The slice is never empty.
    fn pick(&mut self, candidates: &[StateId]) -> Result<StateId, ReductionError>;
}

/// The deterministic default policy: the lexicographically smallest id wins.
pub struct Lexicographic;

impl TieBreak for Lexicographic {
    fn pick(&mut self, candidates: &[StateId]) -> Result<StateId, ReductionError> {
        let choice = candidates
            .iter()
            .min()
            .expect("tie-break consulted without candidates");

        Ok(choice.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic() {
        let candidates = [StateId::new("Idle"), StateId::new("Busy"), StateId::new("Done")];
        let choice = Lexicographic.pick(&candidates).unwrap();
        assert_eq!(choice.as_str(), "Busy");
    }
}
