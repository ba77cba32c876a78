/// Alias to a scalar floating type.
///
/// NOTE: trained weights are compared bit for bit between sequential and parallel runs, so the
/// type is kept at double precision.
pub type Float = f64;
