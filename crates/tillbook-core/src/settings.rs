//! # AI Model Settings
//!
//! Tunable parameters for the assistant models behind the dashboard. Each
//! parameter carries its own control kind, and every change is checked
//! against it before it is stored.
//!
//! ## Parameter Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind      Accepts                  Rejected with                       │
//! │  ──────    ───────                  ─────────────                       │
//! │  slider    number in [min, max],    OutOfBounds / OffStep               │
//! │            on a step from min                                           │
//! │  toggle    true / false             WrongType                           │
//! │  select    one of the options       NotAllowed                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A value of the wrong kind (a number for a toggle, text for a slider) is a
//! [`ValidationError::WrongType`] regardless of the parameter.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

/// Slack for float steps, e.g. 0.5 + 6 × 0.05.
const STEP_EPSILON: f64 = 1e-9;

// =============================================================================
// Parameter Types
// =============================================================================

/// The control a parameter is edited with, and its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterKind {
    Slider { min: f64, max: f64, step: f64 },
    Toggle,
    Select { options: Vec<String> },
}

impl ParameterKind {
    fn label(&self) -> &'static str {
        match self {
            ParameterKind::Slider { .. } => "number",
            ParameterKind::Toggle => "true/false",
            ParameterKind::Select { .. } => "text",
        }
    }
}

/// A parameter's current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Flag(bool),
    Choice(String),
}

/// Reads a typed value from command-line text.
///
/// `true`/`false` become flags, anything numeric a number, the rest a choice.
impl FromStr for ParameterValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "true" => ParameterValue::Flag(true),
            "false" => ParameterValue::Flag(false),
            _ => match s.parse::<f64>() {
                Ok(n) => ParameterValue::Number(n),
                Err(_) => ParameterValue::Choice(s.to_string()),
            },
        })
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Number(n) => write!(f, "{}", n),
            ParameterValue::Flag(b) => write!(f, "{}", b),
            ParameterValue::Choice(s) => f.write_str(s),
        }
    }
}

/// One tunable setting of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AiParameter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ParameterKind,
    pub value: ParameterValue,
}

impl AiParameter {
    /// Checks `value` against this parameter's kind.
    ///
    /// ## Example
    /// ```rust
    /// use tillbook_core::settings::{AiSettings, ParameterValue};
    ///
    /// let settings = AiSettings::defaults();
    /// let threshold = &settings.models()[0].parameters[0];
    /// assert!(threshold.check(&ParameterValue::Number(0.9)).is_ok());
    /// assert!(threshold.check(&ParameterValue::Number(0.97)).is_err());
    /// ```
    pub fn check(&self, value: &ParameterValue) -> Result<(), ValidationError> {
        match (&self.kind, value) {
            (ParameterKind::Slider { min, max, step }, ParameterValue::Number(n)) => {
                let (min, max, step) = (*min, *max, *step);
                if !(min..=max).contains(n) {
                    return Err(ValidationError::OutOfBounds {
                        field: self.id.clone(),
                        min,
                        max,
                    });
                }
                let steps = (n - min) / step;
                if (steps - steps.round()).abs() > STEP_EPSILON {
                    return Err(ValidationError::OffStep {
                        field: self.id.clone(),
                        min,
                        step,
                    });
                }
                Ok(())
            }
            (ParameterKind::Toggle, ParameterValue::Flag(_)) => Ok(()),
            (ParameterKind::Select { options }, ParameterValue::Choice(choice)) => {
                if options.iter().any(|o| o == choice) {
                    Ok(())
                } else {
                    Err(ValidationError::NotAllowed {
                        field: self.id.clone(),
                        allowed: options.clone(),
                    })
                }
            }
            (kind, _) => Err(ValidationError::WrongType {
                field: self.id.clone(),
                expected: kind.label().to_string(),
            }),
        }
    }
}

/// An assistant model and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<AiParameter>,
}

// =============================================================================
// Settings Store
// =============================================================================

/// All model settings, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AiSettings {
    models: Vec<AiModel>,
}

impl AiSettings {
    /// Factory settings shown on first load and after a reset.
    pub fn defaults() -> Self {
        let models = vec![
            AiModel {
                id: "financial-forecasting".to_string(),
                name: "Financial Forecasting".to_string(),
                description: "AI model for predicting revenue, expenses, and cash flow"
                    .to_string(),
                parameters: vec![
                    slider(
                        "confidence-threshold",
                        "Confidence Threshold",
                        "Minimum confidence level for predictions",
                        0.8,
                        (0.5, 0.95, 0.05),
                    ),
                    select(
                        "forecast-horizon",
                        "Forecast Horizon",
                        "How far into the future to predict",
                        "3-months",
                        &["1-month", "3-months", "6-months", "1-year"],
                    ),
                ],
            },
            AiModel {
                id: "inventory-optimization".to_string(),
                name: "Inventory Optimization".to_string(),
                description: "AI-powered inventory management and ordering suggestions"
                    .to_string(),
                parameters: vec![
                    slider(
                        "reorder-sensitivity",
                        "Reorder Sensitivity",
                        "How quickly to suggest reordering low stock items",
                        0.7,
                        (0.3, 0.9, 0.1),
                    ),
                    AiParameter {
                        id: "seasonal-adjustment".to_string(),
                        name: "Seasonal Adjustment".to_string(),
                        description: "Account for seasonal variations in demand".to_string(),
                        kind: ParameterKind::Toggle,
                        value: ParameterValue::Flag(true),
                    },
                ],
            },
            AiModel {
                id: "customer-insights".to_string(),
                name: "Customer Insights".to_string(),
                description: "AI analysis of customer behavior and preferences".to_string(),
                parameters: vec![
                    select(
                        "analysis-depth",
                        "Analysis Depth",
                        "How detailed the customer analysis should be",
                        "balanced",
                        &["basic", "balanced", "deep", "comprehensive"],
                    ),
                    select(
                        "privacy-level",
                        "Privacy Level",
                        "Level of data anonymization",
                        "high",
                        &["standard", "high", "maximum"],
                    ),
                ],
            },
        ];

        AiSettings { models }
    }

    pub fn models(&self) -> &[AiModel] {
        &self.models
    }

    /// Looks up one parameter.
    pub fn parameter(&self, model_id: &str, param_id: &str) -> CoreResult<&AiParameter> {
        let model = self
            .models
            .iter()
            .find(|m| m.id == model_id)
            .ok_or_else(|| CoreError::SettingNotFound(model_id.to_string()))?;

        model
            .parameters
            .iter()
            .find(|p| p.id == param_id)
            .ok_or_else(|| CoreError::SettingNotFound(format!("{}/{}", model_id, param_id)))
    }

    /// Sets one parameter, returning it with the new value.
    ///
    /// ## Errors
    /// - [`CoreError::SettingNotFound`] for an unknown model or parameter
    /// - [`CoreError::Validation`] when the value does not fit the parameter;
    ///   the stored value is left unchanged
    pub fn set_parameter(
        &mut self,
        model_id: &str,
        param_id: &str,
        value: ParameterValue,
    ) -> CoreResult<&AiParameter> {
        self.parameter(model_id, param_id)?.check(&value)?;

        let param = self
            .models
            .iter_mut()
            .filter(|m| m.id == model_id)
            .flat_map(|m| m.parameters.iter_mut())
            .find(|p| p.id == param_id)
            .ok_or_else(|| CoreError::SettingNotFound(format!("{}/{}", model_id, param_id)))?;

        param.value = value;
        Ok(&*param)
    }

    /// Restores every parameter to its factory value.
    pub fn reset(&mut self) {
        *self = AiSettings::defaults();
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings::defaults()
    }
}

fn slider(
    id: &str,
    name: &str,
    description: &str,
    value: f64,
    (min, max, step): (f64, f64, f64),
) -> AiParameter {
    AiParameter {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind: ParameterKind::Slider { min, max, step },
        value: ParameterValue::Number(value),
    }
}

fn select(id: &str, name: &str, description: &str, value: &str, options: &[&str]) -> AiParameter {
    AiParameter {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind: ParameterKind::Select {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
        value: ParameterValue::Choice(value.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(settings: &AiSettings, model: &str, param: &str) -> ParameterValue {
        settings.parameter(model, param).unwrap().value.clone()
    }

    #[test]
    fn test_defaults() {
        let settings = AiSettings::defaults();
        let ids: Vec<&str> = settings.models().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "financial-forecasting",
                "inventory-optimization",
                "customer-insights"
            ]
        );
        assert_eq!(
            value_of(&settings, "financial-forecasting", "confidence-threshold"),
            ParameterValue::Number(0.8)
        );
        assert_eq!(
            value_of(&settings, "inventory-optimization", "seasonal-adjustment"),
            ParameterValue::Flag(true)
        );
        assert_eq!(
            value_of(&settings, "customer-insights", "privacy-level"),
            ParameterValue::Choice("high".to_string())
        );
    }

    #[test]
    fn test_every_default_passes_its_own_check() {
        for model in AiSettings::defaults().models() {
            for param in &model.parameters {
                assert!(param.check(&param.value).is_ok(), "{}", param.id);
            }
        }
    }

    #[test]
    fn test_set_slider() {
        let mut settings = AiSettings::defaults();
        let param = settings
            .set_parameter(
                "financial-forecasting",
                "confidence-threshold",
                ParameterValue::Number(0.95),
            )
            .unwrap();
        assert_eq!(param.value, ParameterValue::Number(0.95));

        settings
            .set_parameter(
                "inventory-optimization",
                "reorder-sensitivity",
                ParameterValue::Number(0.3),
            )
            .unwrap();
        assert_eq!(
            value_of(&settings, "inventory-optimization", "reorder-sensitivity"),
            ParameterValue::Number(0.3)
        );
    }

    #[test]
    fn test_set_slider_rejects_out_of_bounds_and_off_step() {
        let mut settings = AiSettings::defaults();

        let err = settings
            .set_parameter(
                "financial-forecasting",
                "confidence-threshold",
                ParameterValue::Number(1.5),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfBounds { .. })
        ));

        let err = settings
            .set_parameter(
                "financial-forecasting",
                "confidence-threshold",
                ParameterValue::Number(0.83),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OffStep { .. })
        ));

        let err = settings
            .set_parameter(
                "financial-forecasting",
                "confidence-threshold",
                ParameterValue::Number(f64::NAN),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfBounds { .. })
        ));

        assert_eq!(
            value_of(&settings, "financial-forecasting", "confidence-threshold"),
            ParameterValue::Number(0.8)
        );
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let mut settings = AiSettings::defaults();

        let err = settings
            .set_parameter(
                "inventory-optimization",
                "seasonal-adjustment",
                ParameterValue::Number(1.0),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::WrongType { .. })
        ));

        let err = settings
            .set_parameter(
                "financial-forecasting",
                "confidence-threshold",
                ParameterValue::Choice("high".to_string()),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::WrongType { .. })
        ));
    }

    #[test]
    fn test_set_select() {
        let mut settings = AiSettings::defaults();
        settings
            .set_parameter(
                "customer-insights",
                "analysis-depth",
                ParameterValue::Choice("deep".to_string()),
            )
            .unwrap();
        assert_eq!(
            value_of(&settings, "customer-insights", "analysis-depth"),
            ParameterValue::Choice("deep".to_string())
        );

        let err = settings
            .set_parameter(
                "customer-insights",
                "privacy-level",
                ParameterValue::Choice("none".to_string()),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_set_unknown_setting() {
        let mut settings = AiSettings::defaults();
        assert!(matches!(
            settings.set_parameter("weather", "rain", ParameterValue::Flag(true)),
            Err(CoreError::SettingNotFound(_))
        ));
        assert!(matches!(
            settings.set_parameter("customer-insights", "rain", ParameterValue::Flag(true)),
            Err(CoreError::SettingNotFound(_))
        ));
    }

    #[test]
    fn test_reset() {
        let mut settings = AiSettings::defaults();
        settings
            .set_parameter(
                "inventory-optimization",
                "seasonal-adjustment",
                ParameterValue::Flag(false),
            )
            .unwrap();
        assert_ne!(settings, AiSettings::defaults());

        settings.reset();
        assert_eq!(settings, AiSettings::defaults());
    }

    #[test]
    fn test_value_from_str() {
        let parse = |s: &str| s.parse::<ParameterValue>().unwrap();
        assert_eq!(parse("true"), ParameterValue::Flag(true));
        assert_eq!(parse("0.85"), ParameterValue::Number(0.85));
        assert_eq!(
            parse(" 6-months "),
            ParameterValue::Choice("6-months".to_string())
        );
    }

    #[test]
    fn test_value_serializes_untagged() {
        let json = serde_json::to_string(&ParameterValue::Number(0.8)).unwrap();
        assert_eq!(json, "0.8");
        let kind = serde_json::to_value(ParameterKind::Toggle).unwrap();
        assert_eq!(kind, serde_json::json!({ "type": "toggle" }));
    }
}
