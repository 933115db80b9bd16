/// Scores an individual; higher is better.
///
/// Implementations must be pure: the same individual always yields the same score.
pub trait Challenge<P> {
    fn score(&self, individual: &P) -> f64;
}
