//! Per-test-case stimulus and check emission.
//!
//! Each test case becomes three ordered fragments inside the testbench
//! process: input-pin assignments, exactly one wait statement, and one
//! assertion per checked output pin. A case with no drives emits no
//! assignments (prior values persist); a case with no checks emits no
//! assertions and no fail-counter update.

use crate::timing::{ResolvedWait, WaitKind};
use std::fmt::Write;
use vbench_spec::{ClockSpec, TestCase};

/// Appends the VHDL fragments for one test case to `out`.
///
/// `clock` must be `Some` whenever the resolved wait counts edges; the
/// timing resolver has already rejected edge waits on unclocked specs.
pub fn emit_test_case(
    out: &mut String,
    index: usize,
    case: &TestCase,
    resolved: &ResolvedWait,
    clock: Option<&ClockSpec>,
) {
    let _ = writeln!(out, "        -- test case {index}");
    for (pin, literal) in &case.drives {
        let _ = writeln!(out, "        tb_{pin} <= {literal};");
    }
    emit_wait(out, resolved, clock);
    if case.checks.is_empty() {
        return;
    }
    for (pin, literal) in &case.checks {
        let _ = writeln!(out, "        assert (tb_{pin} = {literal})");
        let _ = writeln!(
            out,
            "        report \"test case {index}: expected {pin} = {} at {} ns\"",
            escaped(literal.to_string()),
            resolved.end_ns
        );
        let _ = writeln!(out, "        severity error;");
    }
    let mismatches = case
        .checks
        .iter()
        .map(|(pin, literal)| format!("(tb_{pin} /= {literal})"))
        .collect::<Vec<_>>()
        .join(" or ");
    let _ = writeln!(out, "        if ({mismatches}) then");
    let _ = writeln!(out, "            fail_count := fail_count + 1;");
    let _ = writeln!(out, "        end if;");
}

/// Appends the single wait statement produced by the timing resolver.
fn emit_wait(out: &mut String, resolved: &ResolvedWait, clock: Option<&ClockSpec>) {
    match resolved.kind {
        WaitKind::Delay(ns) => {
            let _ = writeln!(out, "        wait for {ns} ns;");
        }
        WaitKind::Edges { count, rising } => {
            let clock = clock.expect("edge wait resolved without a clock");
            let _ = writeln!(
                out,
                "        wait_until_clk_edges(tb_{}, {count}, {rising});",
                clock.pin
            );
        }
    }
}

/// Escapes double quotes for embedding in a VHDL report string, where a
/// quote is doubled rather than backslash-escaped.
fn escaped(literal: String) -> String {
    literal.replace('"', "\"\"")
}
