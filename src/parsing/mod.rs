pub mod regex;
pub mod numeric;

pub use numeric::coerce_numeric_input;
