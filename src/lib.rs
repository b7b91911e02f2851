// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! `inv-sqrt-lut`
//! ===========
//!
//! Reciprocal square root lookup table over `[1.0, 2.0)`, quantized to
//! Q1.15 and emitted as a SystemVerilog `case` function.
//!
//! ## Usage
//!
//! ```
//! use inv_sqrt_lut::{verilog, Lut};
//!
//! let lut = Lut::new();
//! assert_eq!(lut.get(0), 0x8000);
//!
//! let mut out = Vec::new();
//! verilog::write_case_function(&lut, &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("8'h00: lut_inv_sqrt = 16'h8000;"));
//! ```

pub mod table;
pub mod verilog;

pub use table::{Lut, FRAC_BITS, LUT_LEN, SCALE};
pub use verilog::FUNCTION_NAME;
