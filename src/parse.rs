//! Best-effort extraction of the analysis JSON from free model text.
//!
//! Model output is untrusted. Anything ambiguous yields `None` and the
//! caller falls back to the offline critique.

use log::{debug, error};
use serde::Deserialize;
use serde_json::Value;

use crate::request::{AnalysisResult, FigurativeLanguage};

pub const DEFAULT_SCORE: u8 = 70;
const DEFAULT_MOOD: &str = "inspiratif";

/// Substring from the first `{` to the last `}`, inclusive.
pub fn extract_json_object(raw: &str) -> Option<&str>
{   let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start
    {   return None;
    }
    Some(&raw[start..=end])
}

fn non_empty_str<'a>(obj: &'a Value, key: &str) -> Option<&'a str>
{   obj.get(key)
      .and_then(Value::as_str)
      .filter(|s| !s.is_empty())
}

fn text_or(obj: &Value, key: &str, default: &str) -> String
{   non_empty_str(obj, key).unwrap_or(default).to_string()
}

fn string_list(obj: &Value, key: &str) -> Vec<String>
{   obj.get(key)
      .and_then(Value::as_array)
      .map(|items| {
        items.iter()
          .filter_map(Value::as_str)
          .map(str::to_string)
          .collect()
      })
      .unwrap_or_default()
}

#[derive(Deserialize)]
struct LooseFigure
{   #[serde(rename = "type", default)]
    kind: String
  , #[serde(default)]
    example: String
  , #[serde(default)]
    explanation: String
}

fn figures(obj: &Value) -> Vec<FigurativeLanguage>
{   obj.get("figurativeLanguage")
      .and_then(Value::as_array)
      .map(|items| {
        items.iter()
          .filter_map(|item| {
            serde_json::from_value::<LooseFigure>(item.clone()).ok()
          })
          .map(|f| FigurativeLanguage
          {   kind: f.kind
            , example: f.example
            , explanation: f.explanation
          })
          .collect()
      })
      .unwrap_or_default()
}

/// Score in [0, 100]; absent or non-numeric reads as the default.
/// Numeric strings are accepted since models often quote numbers.
pub fn clamp_score(value: Option<&Value>) -> u8
{   let number = match value
    {   Some(Value::Number(n)) => n.as_f64()
      , Some(Value::String(s)) => s.trim().parse::<f64>().ok()
      , _ => None
    };
    match number
    {   Some(n) if n.is_finite() => n.round().clamp(0.0, 100.0) as u8
      , _ => DEFAULT_SCORE
    }
}

/// Validate a parsed object and fill every optional field.
pub fn analysis_from_value(obj: &Value) -> Option<AnalysisResult>
{   if !obj.is_object()
    {   return None;
    }
    let summary = non_empty_str(obj, "summary")?;
    let literature_type = non_empty_str(obj, "literatureType")?;
    let theme = non_empty_str(obj, "theme")?;

    Some(AnalysisResult
    {   summary: summary.to_string()
      , literature_type: literature_type.to_string()
      , theme: theme.to_string()
      , mood: text_or(obj, "mood", DEFAULT_MOOD)
      , strengths: string_list(obj, "strengths")
      , improvements: string_list(obj, "improvements")
      , style_analysis: text_or(obj, "styleAnalysis", "")
      , figurative_language: figures(obj)
      , rhyme_pattern: non_empty_str(obj, "rhymePattern")
          .map(str::to_string)
      , overall_score: clamp_score(obj.get("overallScore"))
      , detailed_feedback: text_or(obj, "detailedFeedback", "")
    })
}

/// Parse raw model output into a complete analysis, or `None`.
pub fn parse_analysis(raw: &str) -> Option<AnalysisResult>
{   let json_str = match extract_json_object(raw)
    {   Some(s) => s
      , None => {
          debug!("No JSON object in analysis response");
          return None;
        }
    };

    let value: Value = match serde_json::from_str(json_str)
    {   Ok(v) => v
      , Err(e) => {
          error!("Analysis parse error: {}", e);
          return None;
        }
    };

    let result = analysis_from_value(&value);
    if result.is_none()
    {   debug!("Analysis JSON missing summary/literatureType/theme");
    }
    result
}
