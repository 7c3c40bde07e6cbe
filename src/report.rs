use std::ffi::{c_char, c_int};
use std::io::Write;

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::pointer::PointerStep;

const LABEL_WIDTH: usize = 19;

/// A `char` and an `int` pointer, each advanced by one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrideReport {
    pub char_step: PointerStep,
    pub int_step: PointerStep,
}

impl StrideReport {
    pub fn capture() -> Self {
        Self::capture_with(10, 10)
    }

    /// The initial values only give the locals something to hold; they are
    /// never read back.
    pub fn capture_with(c: c_char, i: c_int) -> Self {
        let char_step = PointerStep::of("char", &c);
        let int_step = PointerStep::of("int", &i);
        debug!("{char_step}");
        debug!("{int_step}");
        StrideReport {
            char_step,
            int_step,
        }
    }

    pub fn from_addresses(char_addr: usize, int_addr: usize) -> Self {
        StrideReport {
            char_step: PointerStep::at_address::<c_char>("char", char_addr),
            int_step: PointerStep::at_address::<c_int>("int", int_addr),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write_step(out, &self.char_step)?;
        writeln!(out)?;
        write_step(out, &self.int_step)?;
        out.flush()?;
        Ok(())
    }
}

fn write_step<W: Write>(out: &mut W, step: &PointerStep) -> Result<()> {
    let before = format!("{} pointer before", step.label);
    let after = format!("{} pointer after", step.label);
    writeln!(out, "{before:<width$} = {:p}", step.before_ptr(), width = LABEL_WIDTH)?;
    writeln!(out, "{after:<width$} = {:p}", step.after_ptr(), width = LABEL_WIDTH)?;
    Ok(())
}

/// Captures a report, logs it and writes it to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<StrideReport> {
    let report = StrideReport::capture();
    debug!("report: {}", serde_json::to_string(&report)?);
    report.write_to(out)?;
    Ok(report)
}
