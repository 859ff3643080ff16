pub(crate) mod helpers;

pub mod fitted;
pub mod not_a_knot;
