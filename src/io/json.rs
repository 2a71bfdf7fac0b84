use std::io::Write;

use crate::dynamics::history::Sample;
use crate::error::{Error, Result};

/// Summary statistics computed from a body's recorded history.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub apogee_m: f64,
    pub apogee_time: f64,
    pub max_speed: f64,
    pub downrange_m: f64,
    pub flight_time: f64,
    pub final_altitude: f64,
    pub impact_speed: f64,
    pub samples: usize,
}

impl FlightSummary {
    /// Compute summary from history data. The history must not be empty.
    pub fn from_history(history: &[Sample]) -> Result<Self> {
        let (first, last) = match (history.first(), history.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(Error::InvalidParam("empty history".into())),
        };

        let apogee = history
            .iter()
            .max_by(|a, b| a.state.altitude().total_cmp(&b.state.altitude()))
            .unwrap_or(first);

        let max_speed = history
            .iter()
            .map(|s| s.state.velocity().norm())
            .fold(0.0_f64, f64::max);

        let downrange =
            (last.state.position() - first.state.position()).horizontal_norm();

        Ok(FlightSummary {
            apogee_m: apogee.state.altitude(),
            apogee_time: apogee.time,
            max_speed,
            downrange_m: downrange,
            flight_time: last.time - first.time,
            final_altitude: last.state.altitude(),
            impact_speed: last.state.velocity().norm(),
            samples: history.len(),
        })
    }
}

/// JSON string body for `s`: quotes, backslashes and control characters escaped.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// JSON number with three decimals; `null` for NaN and infinities.
fn number(v: f64) -> String {
    if v.is_finite() {
        format!("{:.3}", v)
    } else {
        "null".to_string()
    }
}

/// Write a named flight summary as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, name: &str, summary: &FlightSummary) -> Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"body\": \"{}\",", escape(name))?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"apogee_m\": {},", number(summary.apogee_m))?;
    writeln!(writer, "    \"apogee_time_s\": {},", number(summary.apogee_time))?;
    writeln!(writer, "    \"max_speed_ms\": {},", number(summary.max_speed))?;
    writeln!(writer, "    \"downrange_m\": {},", number(summary.downrange_m))?;
    writeln!(writer, "    \"flight_time_s\": {},", number(summary.flight_time))?;
    writeln!(writer, "    \"final_altitude_m\": {},", number(summary.final_altitude))?;
    writeln!(writer, "    \"impact_speed_ms\": {},", number(summary.impact_speed))?;
    writeln!(writer, "    \"samples\": {}", summary.samples)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a flight summary JSON to a file.
pub fn write_summary_file(path: &str, name: &str, summary: &FlightSummary) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, name, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::State;
    use crate::frame::Vector3;

    fn simple_history() -> Vec<Sample> {
        let g = Vector3::new(0.0, 0.0, -9.8);
        vec![
            Sample {
                time: 0.0,
                state: State::new(Vector3::zeros(), Vector3::new(3.0, 4.0, 10.0), g),
            },
            Sample {
                time: 1.0,
                state: State::new(Vector3::new(3.0, 4.0, 5.1), Vector3::new(3.0, 4.0, 0.2), g),
            },
            Sample {
                time: 2.0,
                state: State::new(Vector3::new(6.0, 8.0, 0.4), Vector3::new(3.0, 4.0, -9.6), g),
            },
        ]
    }

    #[test]
    fn summary_computes_apogee_and_range() {
        let s = FlightSummary::from_history(&simple_history()).unwrap();
        assert!((s.apogee_m - 5.1).abs() < 1e-9);
        assert!((s.apogee_time - 1.0).abs() < 1e-9);
        assert!((s.downrange_m - 10.0).abs() < 1e-9);
        assert!((s.flight_time - 2.0).abs() < 1e-9);
        assert_eq!(s.samples, 3);
    }

    #[test]
    fn empty_history_rejected() {
        assert!(FlightSummary::from_history(&[]).is_err());
    }

    #[test]
    fn json_output_is_valid() {
        let summary = FlightSummary::from_history(&simple_history()).unwrap();
        let mut buf = Vec::new();
        write_summary(&mut buf, "golf_ball_one", &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"body\": \"golf_ball_one\""));
        assert!(json.contains("\"apogee_m\""));
        assert!(json.contains("\"downrange_m\": 10.000"));
        assert!(json.trim_end().ends_with('}'));
    }

    #[test]
    fn body_name_is_escaped() {
        let summary = FlightSummary::from_history(&simple_history()).unwrap();
        let mut buf = Vec::new();
        write_summary(&mut buf, "ball \"A\"\\\n", &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains(r#""body": "ball \"A\"\\\n","#), "{json}");
    }

    #[test]
    fn non_finite_values_written_as_null() {
        let mut summary = FlightSummary::from_history(&simple_history()).unwrap();
        summary.max_speed = f64::NAN;
        summary.impact_speed = f64::INFINITY;
        let mut buf = Vec::new();
        write_summary(&mut buf, "ball", &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"max_speed_ms\": null,"));
        assert!(json.contains("\"impact_speed_ms\": null,"));
        assert!(!json.contains("NaN") && !json.contains("inf"));
    }
}
