//! Console front-ends for the calculator

pub mod funds;
pub mod invest;
pub mod quote;
pub mod setup;
pub mod ui;
