// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! SystemVerilog emission of the lookup table.
//!
//! The output is a `function` wrapping an exhaustive `case` on an 8-bit
//! index, with one branch per entry in ascending order and a zero default.

use std::io::{self, Write};

use log::trace;

use crate::table::{Lut, LUT_LEN};

/// Name of the emitted SystemVerilog function.
pub const FUNCTION_NAME: &str = "lut_inv_sqrt";

/// Writes the `lut_inv_sqrt` function for `lut` to `out`.
///
/// Write errors are returned as-is; nothing is flushed on failure.
pub fn write_case_function<W: Write>(lut: &Lut, out: &mut W) -> io::Result<()> {
    writeln!(out, "function logic [15:0] {}(input logic [7:0] index);", FUNCTION_NAME)?;
    writeln!(out, "    case (index)")?;
    for (index, value) in lut.iter() {
        writeln!(out, "        8'h{:02X}: {} = 16'h{:04X};", index, FUNCTION_NAME, value)?;
    }
    // all 256 indices are covered; synthesis tools still expect a default
    writeln!(out, "        default: {} = 16'h0000;", FUNCTION_NAME)?;
    writeln!(out, "    endcase")?;
    writeln!(out, "endfunction")?;
    trace!("wrote {} with {} branches", FUNCTION_NAME, LUT_LEN);
    Ok(())
}

/// Renders the function into a `String`.
pub fn render(lut: &Lut) -> String {
    let mut buf = Vec::with_capacity(64 * 261);
    // writing into a Vec cannot fail
    let res = write_case_function(lut, &mut buf);
    debug_assert!(res.is_ok());
    String::from_utf8_lossy(&buf).into_owned()
}
