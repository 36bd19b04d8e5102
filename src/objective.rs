/// Defines the interface for evaluating a position in the search space.
///
/// Implementations must be pure: deterministic, free of side effects, and
/// total over the configured bounds. Lower values are better. The problem
/// dimensionality is the length of the parameter slice.
pub trait ObjectiveFunction: Send + Sync {
    /// Evaluates the objective at the given position.
    fn evaluate(&self, params: &[f64]) -> f64;
}
