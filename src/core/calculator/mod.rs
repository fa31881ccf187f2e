//! Pure derivation: punches → shifts → weekly hour split. No I/O anywhere
//! in this module tree.

pub mod overtime;
pub mod rounding;
pub mod shifts;
