/// Numeric helpers.
///
/// Exact `f64` to `i64` conversion for printing integral results, and small
/// helpers used while scanning numeric literals.
pub mod num;
