//! Arithmetic utilities for exchange calculations.
//!
//! All quantities are 256-bit unsigned integers.  Every addition,
//! subtraction and multiplication is checked, and every division truncates
//! toward zero: rounding residue always stays in the pool.

mod checked;

pub use checked::{mul_div, CheckedArithmetic};
