//! Free-running clock process emission.

use std::fmt::Write;
use vbench_spec::ClockSpec;

/// Emits the clock-toggle process for a clocked entity.
///
/// The generated process drives the clock low for half a period, then high
/// for half a period, and repeats (a VHDL process restarts when it reaches
/// its end). The clock therefore starts low at time zero with its first
/// rising edge at `period / 2` — the phase the timing resolver's edge
/// arithmetic assumes.
pub fn emit_clock_process(clock: &ClockSpec) -> String {
    let half = clock.period / 2;
    let pin = &clock.pin;
    let mut out = String::new();
    let _ = writeln!(out, "    -- clock process");
    let _ = writeln!(out, "    process");
    let _ = writeln!(out, "    begin");
    let _ = writeln!(out, "        tb_{pin} <= '0';");
    let _ = writeln!(out, "        wait for {half} ns;");
    let _ = writeln!(out, "        tb_{pin} <= '1';");
    let _ = writeln!(out, "        wait for {half} ns;");
    let _ = writeln!(out, "    end process;");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_percent_duty_cycle() {
        let clock = ClockSpec {
            pin: "clk".to_string(),
            period: 20,
        };
        let out = emit_clock_process(&clock);
        assert!(out.contains("tb_clk <= '0';"));
        assert!(out.contains("tb_clk <= '1';"));
        assert_eq!(out.matches("wait for 10 ns;").count(), 2);
    }

    #[test]
    fn starts_low() {
        let clock = ClockSpec {
            pin: "sys_clk".to_string(),
            period: 8,
        };
        let out = emit_clock_process(&clock);
        let low = out.find("tb_sys_clk <= '0';").unwrap();
        let high = out.find("tb_sys_clk <= '1';").unwrap();
        assert!(low < high);
    }

    #[test]
    fn odd_period_truncates_half() {
        let clock = ClockSpec {
            pin: "clk".to_string(),
            period: 15,
        };
        let out = emit_clock_process(&clock);
        assert_eq!(out.matches("wait for 7 ns;").count(), 2);
    }
}
