//! Environment variable validation
//!
//! Invalid values never abort a run: they produce a warning (with a
//! typo suggestion when one is close) and the previous value is kept.

use std::io::Write;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `fallback` if invalid (with a warning on stderr)
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse with a custom writer for the warning
    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        tracing::warn!(var = self.var_name, value, "ignoring invalid environment value");
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        fallback
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist);

        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein edit distance, used for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
