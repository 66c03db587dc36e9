use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const SCALE_MIN: i32 = 0;
pub const SCALE_MAX: i32 = 10;
pub const MAX_SLEEP_HOURS: f64 = 24.0;

/// Returned when the model could not be reached at all.
pub const FALLBACK_DIAGNOSIS: &str = "Falha na IA";
pub const FALLBACK_RECOMMENDATIONS: &[&str] = &["Respiração 4-7-8", "Alongamento rápido"];

/// The user's daily snapshot, as posted by the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsInput {
    pub recovery_status: i32,
    pub perceived_fatigue: i32,
    pub focus_level: i32,
    pub sleep_hours: f64,
    pub main_task: String,
}

impl MetricsInput {
    /// Checks scale bounds, sleep hours and the task description.
    /// Must pass before the prompt is built.
    pub fn validate(&self) -> Result<(), AppError> {
        check_scale("recoveryStatus", self.recovery_status)?;
        check_scale("perceivedFatigue", self.perceived_fatigue)?;
        check_scale("focusLevel", self.focus_level)?;

        if !self.sleep_hours.is_finite() || !(0.0..=MAX_SLEEP_HOURS).contains(&self.sleep_hours) {
            return Err(AppError::Validation(format!(
                "sleepHours must be between 0 and {MAX_SLEEP_HOURS}, got {}",
                self.sleep_hours
            )));
        }

        if self.main_task.trim().is_empty() {
            return Err(AppError::Validation("mainTask cannot be empty".to_string()));
        }

        Ok(())
    }
}

fn check_scale(name: &str, value: i32) -> Result<(), AppError> {
    if (SCALE_MIN..=SCALE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{name} must be between {SCALE_MIN} and {SCALE_MAX}, got {value}"
        )))
    }
}

/// Structured view of a model answer. `raw_text` is always the exact input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    #[serde(rename = "diagnostico")]
    pub diagnosis: String,
    #[serde(rename = "ajusteCarga")]
    pub load_adjustment: String,
    #[serde(rename = "recomendacoesAutocuidado")]
    pub self_care: Vec<String>,
    /// `None` when the answer has no day-plan section.
    #[serde(rename = "planoDia")]
    pub day_plan: Option<Vec<String>>,
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

impl AdjustmentResult {
    /// Result served when no model answer exists; `reason` ends up in `rawText`.
    pub fn fallback(reason: impl Into<String>) -> Self {
        AdjustmentResult {
            diagnosis: FALLBACK_DIAGNOSIS.to_string(),
            load_adjustment: String::new(),
            self_care: FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
            day_plan: None,
            raw_text: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> MetricsInput {
        MetricsInput {
            recovery_status: 7,
            perceived_fatigue: 3,
            focus_level: 6,
            sleep_hours: 7.5,
            main_task: "Escrever relatório trimestral".to_string(),
        }
    }

    #[test]
    fn test_valid_metrics_pass() {
        assert!(metrics().validate().is_ok());
    }

    #[test]
    fn test_scale_bounds_are_inclusive() {
        let mut m = metrics();
        m.recovery_status = 0;
        m.perceived_fatigue = 10;
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_scale_above_max_fails() {
        let mut m = metrics();
        m.focus_level = 11;
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("focusLevel"));
    }

    #[test]
    fn test_negative_scale_fails() {
        let mut m = metrics();
        m.perceived_fatigue = -1;
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_negative_sleep_fails() {
        let mut m = metrics();
        m.sleep_hours = -0.5;
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_nan_sleep_fails() {
        let mut m = metrics();
        m.sleep_hours = f64::NAN;
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_blank_task_fails() {
        let mut m = metrics();
        m.main_task = "   ".to_string();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("mainTask"));
    }

    #[test]
    fn test_metrics_deserialize_from_camel_case() {
        let json = r#"{"recoveryStatus": 4, "perceivedFatigue": 8, "focusLevel": 3,
                       "sleepHours": 5.5, "mainTask": "Revisão de código"}"#;
        let m: MetricsInput = serde_json::from_str(json).unwrap();
        assert_eq!(m.perceived_fatigue, 8);
        assert_eq!(m.main_task, "Revisão de código");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"recoveryStatus": 4, "perceivedFatigue": 8, "focusLevel": 3, "sleepHours": 5.5}"#;
        assert!(serde_json::from_str::<MetricsInput>(json).is_err());
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let value = serde_json::to_value(AdjustmentResult::default()).unwrap();
        for key in [
            "diagnostico",
            "ajusteCarga",
            "recomendacoesAutocuidado",
            "planoDia",
            "rawText",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert!(value["planoDia"].is_null());
    }

    #[test]
    fn test_fallback_carries_reason_in_raw_text() {
        let result = AdjustmentResult::fallback("timeout");
        assert_eq!(result.diagnosis, FALLBACK_DIAGNOSIS);
        assert_eq!(result.self_care, vec!["Respiração 4-7-8", "Alongamento rápido"]);
        assert_eq!(result.raw_text, "timeout");
        assert!(result.day_plan.is_none());
    }
}
