// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

//! Prints the `lut_inv_sqrt` SystemVerilog function to stdout.
//!
//! usage:
//!
//!  ./build_lut > lut_inv_sqrt.svh
//!
//! Set `RUST_LOG=debug` for table statistics on stderr.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use inv_sqrt_lut::{verilog, Lut};
use log::debug;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let lut = Lut::new();
    debug!(
        "generated {} entries: [0] = {:#06x}, [255] = {:#06x}, max error = {:e}",
        lut.as_slice().len(),
        lut.get(0),
        lut.get(255),
        lut.max_abs_error()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    verilog::write_case_function(&lut, &mut out)
        .and_then(|()| out.flush())
        .context("failed to write lookup table to stdout")?;

    debug!("emitted {}", verilog::FUNCTION_NAME);
    Ok(())
}
