//! Daily water usage tally behind the header's tracker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageField {
    Drinking,
    Showering,
    Other,
}

impl UsageField {
    pub const ALL: [UsageField; 3] = [UsageField::Drinking, UsageField::Showering, UsageField::Other];

    pub fn name(self) -> &'static str {
        match self {
            UsageField::Drinking => "drinking",
            UsageField::Showering => "showering",
            UsageField::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UsageField::Drinking => "Drinking (liters)",
            UsageField::Showering => "Showering (liters)",
            UsageField::Other => "Other Uses (liters)",
        }
    }
}

/// Raw text of the three tracker inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageLog {
    pub drinking: String,
    pub showering: String,
    pub other: String,
}

impl UsageLog {
    pub fn get(&self, field: UsageField) -> &str {
        match field {
            UsageField::Drinking => &self.drinking,
            UsageField::Showering => &self.showering,
            UsageField::Other => &self.other,
        }
    }

    /// Stores `raw` with everything but ASCII digits stripped.
    pub fn set(&mut self, field: UsageField, raw: &str) {
        let value = sanitize_digits(raw);
        match field {
            UsageField::Drinking => self.drinking = value,
            UsageField::Showering => self.showering = value,
            UsageField::Other => self.other = value,
        }
    }

    pub fn total(&self) -> UsageTotal {
        let liters = UsageField::ALL
            .iter()
            .map(|field| parse_liters(self.get(*field)))
            .sum();
        UsageTotal::from_liters(liters)
    }
}

pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Reads the leading decimal number of `value` ("12.5l" → 12.5). Anything
/// without a leading number counts as zero; numbers too large for `f64` read
/// as infinity.
pub fn parse_liters(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if has_digits || frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return 0.0;
    }
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

/// Sum of the tracker inputs, rounded to hundredths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageTotal(f64);

impl UsageTotal {
    pub fn from_liters(liters: f64) -> Self {
        Self((liters * 100.0).round() / 100.0)
    }

    #[cfg(test)]
    pub fn liters(self) -> f64 {
        self.0
    }

    pub fn display(self) -> String {
        format!("{:.2}", self.0)
    }

    pub fn verdict(self, warning_above: f64) -> UsageVerdict {
        if self.0 > warning_above {
            UsageVerdict::High
        } else {
            UsageVerdict::Good
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageVerdict {
    High,
    Good,
}

impl UsageVerdict {
    pub fn message(self) -> &'static str {
        match self {
            UsageVerdict::High => {
                "High usage! Consider reducing water consumption to help conserve resources."
            }
            UsageVerdict::Good => {
                "Great job! Keep conserving water to support sustainable communities."
            }
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            UsageVerdict::High => "verdict-high",
            UsageVerdict::Good => "verdict-good",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: f64 = 100.0;

    fn log(drinking: &str, showering: &str, other: &str) -> UsageLog {
        UsageLog {
            drinking: drinking.to_string(),
            showering: showering.to_string(),
            other: other.to_string(),
        }
    }

    #[test]
    fn moderate_day_is_encouraged() {
        let total = log("30", "45.5", "10").total();
        assert_eq!(total.display(), "85.50");
        assert_eq!(total.verdict(LIMIT), UsageVerdict::Good);
    }

    #[test]
    fn heavy_day_is_flagged() {
        let total = log("80", "30", "0").total();
        assert_eq!(total.display(), "110.00");
        assert_eq!(total.verdict(LIMIT), UsageVerdict::High);
    }

    #[test]
    fn exactly_at_limit_is_not_flagged() {
        let total = log("50", "50", "").total();
        assert_eq!(total.display(), "100.00");
        assert_eq!(total.verdict(LIMIT), UsageVerdict::Good);
    }

    #[test]
    fn rounding_happens_before_the_limit_check() {
        assert_eq!(UsageTotal::from_liters(100.004).verdict(LIMIT), UsageVerdict::Good);
        assert_eq!(UsageTotal::from_liters(100.006).verdict(LIMIT), UsageVerdict::High);
    }

    #[test]
    fn empty_and_garbage_count_as_zero() {
        assert_eq!(UsageLog::default().total().display(), "0.00");
        assert_eq!(log("abc", ".", "-").total().liters(), 0.0);
    }

    #[test]
    fn oversized_input_is_flagged_not_zeroed() {
        let mut usage = UsageLog::default();
        usage.set(UsageField::Showering, &"9".repeat(400));
        let total = usage.total();
        assert!(total.liters().is_infinite());
        assert_eq!(total.verdict(LIMIT), UsageVerdict::High);

        let mut near_max = UsageLog::default();
        near_max.set(UsageField::Drinking, &"9".repeat(308));
        near_max.set(UsageField::Other, &"9".repeat(308));
        assert_eq!(near_max.total().verdict(LIMIT), UsageVerdict::High);
        assert_eq!(parse_liters(&"1".repeat(400)), f64::INFINITY);
    }

    #[test]
    fn input_keeps_only_digits() {
        let mut usage = UsageLog::default();
        usage.set(UsageField::Showering, "12a3");
        assert_eq!(usage.showering, "123");
        usage.set(UsageField::Drinking, " 4.5 L");
        assert_eq!(usage.get(UsageField::Drinking), "45");
        assert_eq!(sanitize_digits("-7e2"), "72");
    }

    #[test]
    fn leading_number_parse() {
        assert_eq!(parse_liters("12abc"), 12.0);
        assert_eq!(parse_liters("  3.25"), 3.25);
        assert_eq!(parse_liters("4.5.6"), 4.5);
        assert_eq!(parse_liters(".5"), 0.5);
        assert_eq!(parse_liters("7."), 7.0);
        assert_eq!(parse_liters(""), 0.0);
        assert_eq!(parse_liters("x9"), 0.0);
    }

    #[test]
    fn field_names_match_inputs() {
        let names: Vec<_> = UsageField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["drinking", "showering", "other"]);
    }
}
