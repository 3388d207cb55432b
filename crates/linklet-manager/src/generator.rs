pub mod random;

/// Trait for producing candidate short url identifiers.
///
/// Implementations are pure generators that don't interact with storage:
/// uniqueness is enforced by the store's atomic add, not by the generator,
/// so any source with adequate unpredictability is acceptable.
pub trait Generator: Send + Sync + 'static {
    /// Produces a candidate identifier of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}
