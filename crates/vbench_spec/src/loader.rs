//! Spec file loading and validation.
//!
//! Parsing is all-or-nothing: either every field, pin, and literal checks
//! out and a [`TestSpec`] is returned, or the first problem found aborts
//! with a [`SchemaError`] naming the offending field or pin.

use crate::error::SchemaError;
use crate::types::{ClockSpec, RawSpec, TestCase, TestSpec, WaitSpec};
use std::collections::BTreeMap;
use std::path::Path;
use vbench_common::{Literal, PinKind};

/// Loads and validates a JSON test-case file from disk.
pub fn load_spec(path: &Path) -> Result<TestSpec, SchemaError> {
    let content = std::fs::read_to_string(path)?;
    parse_spec(&content)
}

/// Parses and validates a JSON test-case description from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn parse_spec(content: &str) -> Result<TestSpec, SchemaError> {
    let raw: RawSpec =
        serde_json::from_str(content).map_err(|e| SchemaError::Json(e.to_string()))?;
    validate(raw)
}

/// Lowers the raw schema into the validated model, checking every
/// invariant along the way.
fn validate(raw: RawSpec) -> Result<TestSpec, SchemaError> {
    for (field, value) in [
        ("library", &raw.library),
        ("entity", &raw.entity),
        ("architecture", &raw.architecture),
    ] {
        if value.is_empty() {
            return Err(SchemaError::EmptyField(field));
        }
    }

    let clock = if raw.clocked {
        let period = raw.clock_period.ok_or(SchemaError::MissingClockPeriod)?;
        // A period of 1 would have a zero half-period and no usable edges.
        if period < 2 {
            return Err(SchemaError::InvalidClockPeriod(period));
        }
        let pin = match raw.clock_pin {
            Some(ref pin) if !pin.is_empty() => pin.clone(),
            _ => return Err(SchemaError::MissingClockPin),
        };
        Some(ClockSpec {
            pin,
            period: period as u64,
        })
    } else {
        None
    };

    let inputs = resolve_kinds(&raw.input_pins)?;
    let outputs = resolve_kinds(&raw.output_pins)?;

    for name in inputs.keys() {
        if outputs.contains_key(name) {
            return Err(SchemaError::PinCollision(name.clone()));
        }
    }
    if let Some(ref clock) = clock {
        if inputs.contains_key(&clock.pin) || outputs.contains_key(&clock.pin) {
            return Err(SchemaError::PinCollision(clock.pin.clone()));
        }
    }

    let mut test_cases = Vec::with_capacity(raw.test_cases.len());
    for (case, raw_case) in raw.test_cases.iter().enumerate() {
        let mut drives = Vec::new();
        let mut checks = Vec::new();
        for (pin, text) in &raw_case.assignments {
            let (kind, is_input) = match (inputs.get(pin), outputs.get(pin)) {
                (Some(kind), _) => (*kind, true),
                (None, Some(kind)) => (*kind, false),
                (None, None) => {
                    return Err(SchemaError::UnknownPin {
                        case,
                        pin: pin.clone(),
                    })
                }
            };
            let literal = Literal::parse(text, kind).map_err(|source| SchemaError::BadLiteral {
                case,
                pin: pin.clone(),
                source,
            })?;
            if is_input {
                drives.push((pin.clone(), literal));
            } else {
                checks.push((pin.clone(), literal));
            }
        }
        let wait = WaitSpec::from_raw(raw_case.wait).ok_or(SchemaError::InvalidWait {
            case,
            wait: raw_case.wait,
        })?;
        test_cases.push(TestCase {
            drives,
            checks,
            wait,
        });
    }

    Ok(TestSpec {
        library: raw.library,
        entity: raw.entity,
        architecture: raw.architecture,
        clock,
        generic_params: raw.generic_params.into_iter().collect(),
        inputs,
        outputs,
        test_cases,
    })
}

/// Converts a raw pin map (`null` or width) into pin kinds, rejecting
/// widths outside `1..=u32::MAX`.
fn resolve_kinds(
    pins: &BTreeMap<String, Option<i64>>,
) -> Result<BTreeMap<String, PinKind>, SchemaError> {
    let mut kinds = BTreeMap::new();
    for (name, width) in pins {
        let kind = match width {
            None => PinKind::Bit,
            Some(w) if *w >= 1 && *w <= u32::MAX as i64 => PinKind::Vector(*w as u32),
            Some(w) => {
                return Err(SchemaError::InvalidWidth {
                    pin: name.clone(),
                    width: *w,
                })
            }
        };
        kinds.insert(name.clone(), kind);
    }
    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vbench_common::Logic;

    fn adder_spec() -> &'static str {
        r#"{
            "library": "work",
            "entity": "full_adder",
            "architecture": "rtl",
            "clocked": false,
            "generic_params": {},
            "input_pins": { "a": null, "b": null, "cin": null },
            "output_pins": { "sum": null, "cout": null },
            "test_cases": [
                { "a": "0", "b": "0", "cin": "0", "sum": "0", "cout": "0", "_wait": 0 },
                { "a": "1", "b": "1", "cin": "1", "sum": "1", "cout": "1", "_wait": 0 }
            ]
        }"#
    }

    fn counter_spec() -> &'static str {
        r#"{
            "library": "work",
            "entity": "counter",
            "architecture": "rtl",
            "clocked": true,
            "clock_period": 20,
            "clock_pin": "clk",
            "generic_params": { "WIDTH": 4 },
            "input_pins": { "rst": null },
            "output_pins": { "count": 4 },
            "test_cases": [
                { "rst": "1", "_wait": 1 },
                { "rst": "0", "count": "0000", "_wait": 1 },
                { "count": "0001", "_wait": -1 }
            ]
        }"#
    }

    #[test]
    fn parse_unclocked() {
        let spec = parse_spec(adder_spec()).unwrap();
        assert_eq!(spec.entity, "full_adder");
        assert!(spec.clock.is_none());
        assert_eq!(spec.inputs.len(), 3);
        assert_eq!(spec.outputs.len(), 2);
        assert_eq!(spec.test_cases.len(), 2);
        let case = &spec.test_cases[0];
        assert_eq!(case.drives.len(), 3);
        assert_eq!(case.checks.len(), 2);
        assert_eq!(case.wait, WaitSpec::FixedDelay);
    }

    #[test]
    fn parse_clocked() {
        let spec = parse_spec(counter_spec()).unwrap();
        let clock = spec.clock.as_ref().unwrap();
        assert_eq!(clock.pin, "clk");
        assert_eq!(clock.period, 20);
        assert_eq!(spec.kind_of("count"), PinKind::Vector(4));
        assert_eq!(spec.kind_of("rst"), PinKind::Bit);
        assert_eq!(spec.test_cases[2].wait, WaitSpec::FallingEdges(1));
        // Second case drives rst and checks count.
        let case = &spec.test_cases[1];
        assert_eq!(case.drives, vec![("rst".to_string(), Literal::Bit(Logic::Zero))]);
        assert_eq!(case.checks.len(), 1);
    }

    #[test]
    fn subset_assignments_allowed() {
        let spec = parse_spec(counter_spec()).unwrap();
        // First case drives rst only; no output check.
        assert!(spec.test_cases[0].checks.is_empty());
        // Third case checks count only; no drives.
        assert!(spec.test_cases[2].drives.is_empty());
    }

    #[test]
    fn missing_required_field_names_it() {
        let err = parse_spec(r#"{ "library": "work" }"#).unwrap_err();
        match err {
            SchemaError::Json(msg) => assert!(msg.contains("entity"), "got: {msg}"),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn empty_entity_rejected() {
        let json = adder_spec().replace("\"full_adder\"", "\"\"");
        let err = parse_spec(&json).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyField("entity")));
    }

    #[test]
    fn clocked_without_period() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_pin": "clk",
            "input_pins": {}, "output_pins": {}, "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::MissingClockPeriod));
    }

    #[test]
    fn clocked_with_nonpositive_period() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_period": 0, "clock_pin": "clk",
            "input_pins": {}, "output_pins": {}, "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidClockPeriod(0)));
    }

    #[test]
    fn clocked_with_period_one() {
        // A period of 1 has a zero half-period: no usable edges.
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_period": 1, "clock_pin": "clk",
            "input_pins": {}, "output_pins": {}, "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidClockPeriod(1)));
    }

    #[test]
    fn minimum_clock_period_accepted() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_period": 2, "clock_pin": "clk",
            "input_pins": {}, "output_pins": {}, "test_cases": []
        }"#;
        let spec = parse_spec(json).unwrap();
        assert_eq!(spec.clock.unwrap().period, 2);
    }

    #[test]
    fn clocked_without_clock_pin() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_period": 10,
            "input_pins": {}, "output_pins": {}, "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::MissingClockPin));
    }

    #[test]
    fn unclocked_ignores_clock_fields() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false, "clock_period": 10, "clock_pin": "clk",
            "input_pins": {}, "output_pins": {}, "test_cases": []
        }"#;
        let spec = parse_spec(json).unwrap();
        assert!(spec.clock.is_none());
    }

    #[test]
    fn input_output_collision() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "a": null }, "output_pins": { "a": null },
            "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::PinCollision(pin) if pin == "a"));
    }

    #[test]
    fn clock_pin_collision() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_period": 10, "clock_pin": "clk",
            "input_pins": { "clk": null }, "output_pins": {},
            "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::PinCollision(pin) if pin == "clk"));
    }

    #[test]
    fn oversized_wait_rejected() {
        // 2^32 + 1 = 4294967297 must error, not wrap to an edge count of 1.
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": true, "clock_period": 20, "clock_pin": "clk",
            "input_pins": { "a": null }, "output_pins": {},
            "test_cases": [ { "a": "1", "_wait": 4294967297 } ]
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidWait {
                case: 0,
                wait: 4294967297
            }
        ));
    }

    #[test]
    fn zero_width_rejected() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "bus": 0 }, "output_pins": {},
            "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidWidth { pin, width: 0 } if pin == "bus"
        ));
    }

    #[test]
    fn oversized_width_rejected() {
        // 2^32 + 1 must error, not truncate to a width of 1.
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "bus": 4294967297 }, "output_pins": {},
            "test_cases": []
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidWidth {
                pin,
                width: 4294967297
            } if pin == "bus"
        ));
    }

    #[test]
    fn unknown_pin_in_test_case() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "a": null }, "output_pins": {},
            "test_cases": [ { "ghost": "1", "_wait": 0 } ]
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownPin { case: 0, pin } if pin == "ghost"
        ));
    }

    #[test]
    fn bit_pin_rejects_two_char_literal() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "d": null }, "output_pins": {},
            "test_cases": [ { "d": "01", "_wait": 0 } ]
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::BadLiteral { case: 0, ref pin, .. } if pin == "d"
        ));
    }

    #[test]
    fn vector_literal_length_enforced() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "bus": 4 }, "output_pins": {},
            "test_cases": [ { "bus": "011", "_wait": 0 } ]
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::BadLiteral { .. }));
    }

    #[test]
    fn bad_logic_char_rejected() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "a": null }, "output_pins": {},
            "test_cases": [ { "a": "9", "_wait": 0 } ]
        }"#;
        let err = parse_spec(json).unwrap_err();
        assert!(matches!(err, SchemaError::BadLiteral { .. }));
    }

    #[test]
    fn empty_test_cases_allowed() {
        let json = r#"{
            "library": "work", "entity": "e", "architecture": "a",
            "clocked": false,
            "input_pins": { "a": null }, "output_pins": {},
            "test_cases": []
        }"#;
        let spec = parse_spec(json).unwrap();
        assert!(spec.test_cases.is_empty());
    }

    #[test]
    fn serialize_roundtrip() {
        for json in [adder_spec(), counter_spec()] {
            let spec = parse_spec(json).unwrap();
            let reserialized = serde_json::to_string(&spec.to_raw()).unwrap();
            let reparsed = parse_spec(&reserialized).unwrap();
            assert_eq!(spec, reparsed);
        }
    }
}
