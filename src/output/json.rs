use anyhow::Result;
use serde::Serialize;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::render_json;
    use crate::gap::{analyze, AnalysisOptions};

    #[test]
    fn report_serializes_with_snake_case_status() {
        let report = analyze("rice", "10", "40", &AnalysisOptions::default()).expect("analysis");
        let rendered = render_json(&report).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["records"][0]["status"], "severe_surplus");
        assert_eq!(value["summary"]["average_policy"], "aggregate_ratio");
        assert_eq!(value["options"]["classification"]["scheme"], "banded");
    }
}
