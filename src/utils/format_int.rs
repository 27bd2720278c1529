/// Integer displayed with `'` between groups of three digits.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", with_delimiters(self.0))
    }
}

fn with_delimiters(value: i128) -> String {
    let mut result = value
        .abs()
        .to_string()
        .chars()
        .rev()
        .collect::<Vec<char>>()
        .chunks(3)
        .map(|c| c.iter().rev().collect::<String>())
        .rev()
        .collect::<Vec<String>>()
        .join("'");
    if value < 0 {
        result.insert(0, '-');
    }
    result
}

/// Formats live cells against the grid area, e.g. `42/54 (77.8%)`.
pub fn population_summary(population: usize, total: usize) -> String {
    let percentage = if total == 0 {
        0.
    } else {
        population as f64 / total as f64 * 100.
    };
    format!(
        "{}/{} ({:.1}%)",
        NiceInt::from_usize(population),
        NiceInt::from_usize(total),
        percentage
    )
}
