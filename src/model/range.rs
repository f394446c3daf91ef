//! Reference-range expressions and the abnormal-result check.
//!
//! A range is authored as text in one of three shapes: `low-high`,
//! `<threshold` or `>threshold`. It is parsed once when the catalog is
//! built; classification then only compares numbers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceRange {
    /// `low-high`, both bounds count as normal.
    Interval { low: f64, high: f64 },
    /// `<threshold`, abnormal at or above the threshold.
    UpperBound(f64),
    /// `>threshold`, abnormal at or below the threshold.
    LowerBound(f64),
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Normal,
    Abnormal,
    /// Entered text is empty or not a number.
    Unparsed,
}

impl Classification {
    pub fn is_abnormal(self) -> bool {
        matches!(self, Classification::Abnormal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Normal => "normal",
            Classification::Abnormal => "abnormal",
            Classification::Unparsed => "unparsed",
        }
    }
}

impl ReferenceRange {
    pub fn parse(expr: &str) -> Self {
        if let Some((low, high)) = expr.split_once('-') {
            // A second separator makes the two-part split fail.
            if high.contains('-') {
                return ReferenceRange::Unrecognized;
            }
            return match (parse_number(low), parse_number(high)) {
                (Some(low), Some(high)) => ReferenceRange::Interval { low, high },
                _ => ReferenceRange::Unrecognized,
            };
        }
        if let Some(rest) = expr.strip_prefix('<') {
            return parse_number(rest)
                .map(ReferenceRange::UpperBound)
                .unwrap_or(ReferenceRange::Unrecognized);
        }
        if let Some(rest) = expr.strip_prefix('>') {
            return parse_number(rest)
                .map(ReferenceRange::LowerBound)
                .unwrap_or(ReferenceRange::Unrecognized);
        }
        ReferenceRange::Unrecognized
    }

    pub fn classify(&self, entered: &str) -> Classification {
        let Some(value) = parse_number(entered) else {
            return Classification::Unparsed;
        };
        let abnormal = match *self {
            ReferenceRange::Interval { low, high } => value < low || value > high,
            ReferenceRange::UpperBound(threshold) => value >= threshold,
            ReferenceRange::LowerBound(threshold) => value <= threshold,
            ReferenceRange::Unrecognized => false,
        };
        if abnormal {
            Classification::Abnormal
        } else {
            Classification::Normal
        }
    }

    /// Empty or non-numeric entries are never abnormal.
    pub fn is_abnormal(&self, entered: &str) -> bool {
        self.classify(entered).is_abnormal()
    }
}

/// Classifies against a range that has not been parsed yet.
pub fn is_abnormal(entered: &str, range: &str) -> bool {
    ReferenceRange::parse(range).is_abnormal(entered)
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.contains('_') {
        return strip_digit_separators(text)?.parse::<f64>().ok();
    }
    text.parse::<f64>().ok()
}

/// Drops `_` separators; each one must sit between two ASCII digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            let after = bytes.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/range.rs"]
mod tests;
