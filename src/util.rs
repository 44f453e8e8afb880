/// Numeric formatting and conversion helpers.
///
/// This module renders doubles the way the language prints them and converts
/// doubles into array indices and bit patterns without silently accepting
/// fractional or out-of-range values.
pub mod num;
