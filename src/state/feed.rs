//! Feed Data Model
//!
//! Parse-or-fallback classification of inbound LoRa frames and the
//! fixed-capacity sliding windows behind the dashboard views.

use chrono::{DateTime, Local, NaiveDateTime};
use serde_json::Value;

/// Raw messages kept for the scrolling list.
pub const MESSAGE_CAP: usize = 200;

/// Telemetry samples kept for the live chart.
pub const SAMPLE_CAP: usize = 10;

/// Structured frame as broadcast by the backend.
///
/// Field names match the wire format: `+EVT:RXP2P` lines parsed server-side
/// into uppercase keys. Every field is optional because the feed also
/// carries fallback frames holding only `raw_data` and `timestamp`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FeedFrame {
    #[serde(rename = "POT", default)]
    pub pot: Option<Value>,
    #[serde(rename = "SNR", default)]
    pub snr: Option<Value>,
    #[serde(rename = "PAYLOAD", default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub raw_data: Option<String>,
}

impl FeedFrame {
    /// Power reading as a number, if present and numeric.
    pub fn pot_value(&self) -> Option<f64> {
        numeric(self.pot.as_ref()?)
    }

    /// Signal-to-noise ratio as a number, if present and numeric.
    pub fn snr_value(&self) -> Option<f64> {
        numeric(self.snr.as_ref()?)
    }
}

// The backend emits POT/SNR as strings; other producers send bare numbers.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A single chart point derived from a structured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    /// Local wall-clock label shown on the chart axis.
    pub display_time: String,
    pub value: f64,
    /// Timestamp exactly as it arrived.
    pub source_timestamp: String,
}

/// Result of classifying one inbound payload.
#[derive(Debug, Clone)]
pub enum Inbound {
    /// JSON frame, with a chart sample when POT and timestamp are present.
    Frame(FeedFrame, Option<TelemetrySample>),
    /// Anything that is not a structured frame is displayed verbatim.
    Text(String),
}

/// Classify an inbound payload: structured frame or raw text.
pub fn classify(text: &str) -> Inbound {
    match serde_json::from_str::<FeedFrame>(text) {
        Ok(frame) => {
            let sample = derive_sample(&frame);
            Inbound::Frame(frame, sample)
        }
        Err(_) => Inbound::Text(text.to_string()),
    }
}

/// Derive a chart sample from a frame. Frames missing a numeric POT or a
/// timestamp silently produce no sample.
pub fn derive_sample(frame: &FeedFrame) -> Option<TelemetrySample> {
    let value = frame.pot_value()?;
    let timestamp = frame.timestamp.as_deref()?;
    Some(TelemetrySample {
        display_time: display_time(timestamp),
        value,
        source_timestamp: timestamp.to_string(),
    })
}

/// Render a source timestamp as a local `%H:%M:%S` label, falling back to
/// the original string when it does not parse.
pub fn display_time(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S") {
        return naive.format("%H:%M:%S").to_string();
    }
    timestamp.to_string()
}

/// Append to a sliding window, evicting the oldest entry once `cap` would
/// be exceeded.
pub fn push_capped<T>(items: &mut Vec<T>, item: T, cap: usize) {
    items.push(item);
    if items.len() > cap {
        items.remove(0);
    }
}

/// The two sliding windows a dashboard view accumulates.
#[derive(Debug, Clone, Default)]
pub struct FeedWindows {
    /// Raw payload text, most recent last.
    pub messages: Vec<String>,
    /// Derived chart points, most recent last.
    pub samples: Vec<TelemetrySample>,
}

impl FeedWindows {
    /// Ingest one inbound payload. The verbatim text always enters the
    /// message window; a chart sample is added only for structured frames
    /// carrying a numeric POT and a timestamp. Returns the parsed frame
    /// when there was one.
    pub fn ingest(&mut self, text: &str) -> Option<FeedFrame> {
        match classify(text) {
            Inbound::Frame(frame, sample) => {
                push_capped(&mut self.messages, text.to_string(), MESSAGE_CAP);
                if let Some(sample) = sample {
                    push_capped(&mut self.samples, sample, SAMPLE_CAP);
                }
                Some(frame)
            }
            Inbound::Text(raw) => {
                push_capped(&mut self.messages, raw, MESSAGE_CAP);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_json(pot: f64, ts: &str) -> String {
        format!(
            r#"{{"POT":"{}","SNR":"9","PAYLOAD":"Hello","timestamp":"{}","raw_data":"+EVT:RXP2P:{}:9:48656C6C6F"}}"#,
            pot, ts, pot
        )
    }

    #[test]
    fn plain_text_falls_back_to_raw() {
        let mut windows = FeedWindows::default();
        for text in ["+EVT:RXP2P", "hola", "not json at all"] {
            assert!(windows.ingest(text).is_none());
        }
        assert_eq!(windows.messages, vec!["+EVT:RXP2P", "hola", "not json at all"]);
        assert!(windows.samples.is_empty());
    }

    #[test]
    fn structured_frame_yields_sample() {
        let mut windows = FeedWindows::default();
        let frame = windows
            .ingest(&frame_json(-14.0, "2025-01-01 12:30:05"))
            .unwrap();

        assert_eq!(frame.pot_value(), Some(-14.0));
        assert_eq!(frame.snr_value(), Some(9.0));
        assert_eq!(frame.payload.as_deref(), Some("Hello"));
        assert_eq!(windows.messages.len(), 1);

        let sample = &windows.samples[0];
        assert_eq!(sample.value, -14.0);
        assert_eq!(sample.source_timestamp, "2025-01-01 12:30:05");
        assert_eq!(sample.display_time, "12:30:05");
    }

    #[test]
    fn missing_pot_reaches_list_but_never_chart() {
        let mut windows = FeedWindows::default();
        let text = r#"{"raw_data":"garbled","timestamp":"2025-01-01 08:00:00"}"#;
        assert!(windows.ingest(text).is_some());
        assert_eq!(windows.messages, vec![text]);
        assert!(windows.samples.is_empty());
    }

    #[test]
    fn missing_timestamp_suppresses_sample() {
        let mut windows = FeedWindows::default();
        windows.ingest(r#"{"POT":"-12","SNR":"7"}"#);
        assert_eq!(windows.messages.len(), 1);
        assert!(windows.samples.is_empty());
    }

    #[test]
    fn non_numeric_pot_suppresses_sample() {
        let mut windows = FeedWindows::default();
        windows.ingest(r#"{"POT":"n/a","timestamp":"2025-01-01 08:00:00"}"#);
        assert_eq!(windows.messages.len(), 1);
        assert!(windows.samples.is_empty());
    }

    #[test]
    fn pot_accepts_string_or_number() {
        let string_frame: FeedFrame = serde_json::from_str(r#"{"POT":"-15.5"}"#).unwrap();
        let number_frame: FeedFrame = serde_json::from_str(r#"{"POT":-15.5}"#).unwrap();
        assert_eq!(string_frame.pot_value(), Some(-15.5));
        assert_eq!(number_frame.pot_value(), Some(-15.5));
    }

    #[test]
    fn push_capped_evicts_oldest() {
        let mut items = Vec::new();
        for i in 0..5 {
            push_capped(&mut items, i, 3);
        }
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn message_window_keeps_most_recent_in_order() {
        let mut windows = FeedWindows::default();
        for i in 0..250 {
            windows.ingest(&format!("line {}", i));
        }
        assert_eq!(windows.messages.len(), MESSAGE_CAP);
        assert_eq!(windows.messages.first().unwrap(), "line 50");
        assert_eq!(windows.messages.last().unwrap(), "line 249");
    }

    #[test]
    fn chart_window_keeps_last_ten_of_twelve() {
        let mut windows = FeedWindows::default();
        for i in 0..12 {
            windows.ingest(&frame_json(i as f64, "2025-01-01 00:00:00"));
        }
        assert_eq!(windows.messages.len(), 12);
        assert_eq!(windows.samples.len(), SAMPLE_CAP);
        let values: Vec<f64> = windows.samples.iter().map(|s| s.value).collect();
        assert_eq!(values, (2..12).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn display_time_falls_back_to_raw_string() {
        assert_eq!(display_time("yesterday-ish"), "yesterday-ish");
        assert_eq!(display_time("2025-06-30 23:59:01"), "23:59:01");
    }
}
