use crate::error::{Result, TallyError};
use regex::Regex;

/// Matcher for the embedded hours annotation in a summary field.
///
/// Recognizes the leftmost occurrence of `(<number> h<anything>)`, for
/// example `(7.5 h)` or `(10 hours, urgent)`, and yields the numeric part.
#[derive(Debug, Clone)]
pub struct HoursPattern {
    re: Regex,
}

impl HoursPattern {
    pub fn new() -> Self {
        // The character class allows multiple dots; parse failure on the
        // capture is surfaced as an error rather than silently dropped.
        let re = Regex::new(r"\(([\d.]+) h.*\)").expect("hours pattern must compile");
        Self { re }
    }

    /// Extract the estimated hours from a summary field.
    ///
    /// A summary without the annotation yields exactly 0.0; that is the
    /// defined default, not an error, and is indistinguishable from a
    /// summary genuinely encoding zero hours.
    pub fn extract(&self, summary: &str) -> Result<f64> {
        match self.re.captures(summary) {
            Some(caps) => {
                let capture = &caps[1];
                capture.parse::<f64>().map_err(|e| TallyError::InvalidHours {
                    capture: capture.to_string(),
                    reason: e.to_string(),
                })
            }
            None => Ok(0.0),
        }
    }
}

impl Default for HoursPattern {
    fn default() -> Self {
        Self::new()
    }
}
