use factmatrix_core::Fact;

/// Trust carried along a chain. Each link decays the running trust by the
/// product of the two scores, so long or weak chains fade quickly.
///
/// ```
/// use factmatrix_core::{create_fact_hash, Confidence, Fact, FactQuad};
/// use factmatrix_engine::analysis::path_trust;
///
/// let fact = |parts: [&str; 4], confidence: u128| {
///     let quad = FactQuad::from(parts);
///     let mut fact = Fact::new(create_fact_hash(&quad), quad);
///     fact.confidence = Confidence::new(confidence);
///     fact
/// };
/// let a = fact(["Name", "Alex", "House", "Blue"], 90);
/// let b = fact(["House", "Blue", "Job", "Doctor"], 80);
/// assert!((path_trust(&[&a, &b]) - 57.6).abs() < 1e-9);
/// ```
pub fn path_trust(path: &[&Fact]) -> f64 {
    let mut scores = path.iter().map(|f| f64::from(f.confidence));
    let Some(mut trust) = scores.next() else {
        return 0.0;
    };
    for score in scores {
        let decay = score * trust / 10_000.0;
        trust = trust.min(score) * decay;
    }
    trust
}

/// Path trust halved for every link after the first.
pub fn contradiction_impact(path: &[&Fact]) -> f64 {
    let links = path.len().saturating_sub(1);
    path_trust(path) * 0.5_f64.powi(links as i32)
}
