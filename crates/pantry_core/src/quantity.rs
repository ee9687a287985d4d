use std::fmt;

/// A measure split into its numeric amount and free-text unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.unit)
        }
    }
}

/// Parses a measure such as `"2 cups"` or `"200g"`.
///
/// Never fails: input without a leading number counts as one of the whole
/// string, so `"Salt to taste"` becomes `(1, "Salt to taste")`. A fraction
/// like `"1/2 tsp"` is not numeric and is kept whole as the unit.
pub fn parse_quantity(raw: &str) -> Quantity {
    let trimmed = raw.trim();
    let numeric_len = leading_number_len(trimmed);

    let parsed = (numeric_len > 0)
        .then(|| &trimmed[numeric_len..])
        .filter(|rest| !rest.starts_with('/'))
        .and_then(|rest| {
            trimmed[..numeric_len]
                .parse::<f64>()
                .ok()
                .map(|amount| (amount, rest))
        });

    match parsed {
        Some((amount, rest)) => Quantity {
            amount,
            unit: rest.trim().to_string(),
        },
        None => Quantity {
            amount: 1.0,
            unit: trimmed.to_string(),
        },
    }
}

/// Byte length of a leading `digits`, `digits.digits` or `.digits` token.
fn leading_number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            return int_len + 1 + frac_len;
        }
    }
    int_len
}
