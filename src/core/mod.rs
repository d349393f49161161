pub(crate) mod coefficients;
pub mod cost;
pub mod estimator;
pub mod panels;
pub mod recommendations;
pub mod units;
