//! Template assembly: stitching emitted fragments into the full testbench.
//!
//! The output layout is: header comment, library clauses, testbench entity
//! and architecture framing, the edge-wait procedure (clocked only), signal
//! declarations, the unit-under-test instantiation, the clock process
//! (clocked only), and the stimulus/check process with a fail counter and
//! final verdict report.

use crate::clock::emit_clock_process;
use crate::error::TimingError;
use crate::stimulus::emit_test_case;
use crate::timing::{resolve, TimeCursor};
use std::fmt::Write;
use vbench_common::PinKind;
use vbench_spec::TestSpec;

/// A fully assembled testbench.
#[derive(Debug, Clone)]
pub struct Testbench {
    /// The generated testbench entity name (`<entity>_tb`).
    pub entity: String,
    /// The complete VHDL text.
    pub vhdl: String,
}

/// Generates the complete VHDL testbench for a validated spec.
///
/// All timing is resolved while the text is assembled, and the text is
/// only returned once every test case has resolved, so a [`TimingError`]
/// never leaves partial output behind.
pub fn generate(spec: &TestSpec) -> Result<Testbench, TimingError> {
    let tb_entity = format!("{}_tb", spec.entity);
    let mut out = String::new();

    let _ = write!(
        out,
        "--------------------------------------------------------\n\
         -- Test bench for entity {0}.{1}({2})\n\
         -- Generated by vbench\n\
         --------------------------------------------------------\n\
         \n\
         library ieee;\n\
         use ieee.std_logic_1164.all;\n\
         library {0};\n\
         \n\
         -- test bench entity\n\
         entity {3} is\n\
         end {3};\n\
         \n\
         -- test bench architecture\n\
         architecture tb of {3} is\n",
        spec.library, spec.entity, spec.architecture, tb_entity
    );

    if spec.clock.is_some() {
        out.push_str(EDGE_WAIT_PROCEDURE);
    }

    emit_signal_declarations(&mut out, spec);
    out.push_str("begin\n");
    emit_uut_instantiation(&mut out, spec);

    if let Some(ref clock) = spec.clock {
        out.push('\n');
        out.push_str(&emit_clock_process(clock));
    }

    out.push_str(
        "\n    -- test bench process\n    \
         process\n        \
         -- test fail counter\n        \
         variable fail_count: integer := 0;\n    \
         begin\n",
    );

    let mut cursor = TimeCursor::zero();
    for (index, case) in spec.test_cases.iter().enumerate() {
        let (resolved, next) = resolve(index, case.wait, spec.clock.as_ref(), cursor)?;
        emit_test_case(&mut out, index, case, &resolved, spec.clock.as_ref());
        cursor = next;
    }

    out.push_str(
        "\n        -- check if all tests passed\n        \
         if (fail_count = 0) then\n            \
         assert false report \"All tests passed!\"\n            \
         severity note;\n        \
         else\n            \
         assert false report \"Testbench failed!\"\n            \
         severity error;\n        \
         end if;\n\n        \
         wait;\n    \
         end process;\nend tb;\n",
    );

    Ok(Testbench {
        entity: tb_entity,
        vhdl: out,
    })
}

/// VHDL procedure that blocks until n rising or falling clock edges pass.
const EDGE_WAIT_PROCEDURE: &str = "    \
-- procedure to wait for a number of rising or falling clock edges\n    \
procedure wait_until_clk_edges (signal clk: in std_logic; n: in positive; rising: in boolean) is\n    \
begin\n        \
if rising then\n            \
for i in 1 to n loop\n                \
wait until rising_edge(clk);\n            \
end loop;\n        \
else\n            \
for i in 1 to n loop\n                \
wait until falling_edge(clk);\n            \
end loop;\n        \
end if;\n    \
end procedure;\n";

/// Declares one testbench signal per input pin, clock pin, and output pin.
fn emit_signal_declarations(out: &mut String, spec: &TestSpec) {
    out.push_str("    -- internal signal declarations\n");
    for (pin, kind) in declared_pins(spec) {
        let _ = writeln!(out, "    signal tb_{pin}: {};", vhdl_type(kind));
    }
}

/// Emits the unit-under-test instantiation with generic and port maps.
fn emit_uut_instantiation(out: &mut String, spec: &TestSpec) {
    out.push_str("    -- instantiate unit under test\n");
    let _ = writeln!(
        out,
        "    E_UUT: entity {}.{}({})",
        spec.library, spec.entity, spec.architecture
    );
    if !spec.generic_params.is_empty() {
        out.push_str("           generic map (\n");
        let assocs = spec
            .generic_params
            .iter()
            .map(|(name, value)| format!("               {name} => {value}"))
            .collect::<Vec<_>>()
            .join(",\n");
        out.push_str(&assocs);
        out.push_str("\n           )\n");
    }
    out.push_str("           port map (\n");
    let ports = declared_pins(spec)
        .iter()
        .map(|(pin, _)| format!("               {pin} => tb_{pin}"))
        .collect::<Vec<_>>()
        .join(",\n");
    out.push_str(&ports);
    out.push_str("\n           );\n");
}

/// All pins on the entity boundary in declaration order: inputs, the clock
/// pin (if any), then outputs.
fn declared_pins(spec: &TestSpec) -> Vec<(&str, PinKind)> {
    let mut pins: Vec<(&str, PinKind)> = spec
        .inputs
        .iter()
        .map(|(pin, kind)| (pin.as_str(), *kind))
        .collect();
    if let Some(ref clock) = spec.clock {
        pins.push((clock.pin.as_str(), PinKind::Bit));
    }
    pins.extend(spec.outputs.iter().map(|(pin, kind)| (pin.as_str(), *kind)));
    pins
}

/// The VHDL subtype for a pin of the given kind.
fn vhdl_type(kind: PinKind) -> String {
    match kind {
        PinKind::Bit => "std_logic".to_string(),
        PinKind::Vector(w) => format!("std_logic_vector({} downto 0)", w - 1),
    }
}
