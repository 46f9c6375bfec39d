//! Stats Aggregator
//!
//! Counts and packed percentage, recomputed from the item slice on every read.

use crate::domain::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub packed: usize,
}

/// What the stats footer should say
#[derive(Debug, Clone, PartialEq)]
pub enum StatsSummary {
    /// Nothing on the list yet
    Empty,
    /// Every item packed (total > 0)
    FullyPacked,
    Progress { total: usize, packed: usize, percent: f64 },
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            total: items.len(),
            packed: items.iter().filter(|item| item.packed).count(),
        }
    }

    /// `None` when the list is empty
    pub fn percent_packed(&self) -> Option<f64> {
        (self.total > 0).then(|| self.packed as f64 * 100.0 / self.total as f64)
    }

    pub fn summary(&self) -> StatsSummary {
        match self.percent_packed() {
            None => StatsSummary::Empty,
            Some(_) if self.packed == self.total => StatsSummary::FullyPacked,
            Some(percent) => StatsSummary::Progress {
                total: self.total,
                packed: self.packed,
                percent,
            },
        }
    }
}

impl StatsSummary {
    pub fn message(&self) -> String {
        match self {
            StatsSummary::Empty => "Start adding some items to your packing list 🚀".to_string(),
            StatsSummary::FullyPacked => "You got everything! Ready to go ✈️".to_string(),
            StatsSummary::Progress { total, packed, percent } => format!(
                "🧳 You have {} items on your list, and you already packed {} ({}%)",
                total,
                packed,
                format_percent(*percent)
            ),
        }
    }
}

/// Format a percentage (0..=100) with three significant figures.
///
/// Matches JavaScript `Number.prototype.toPrecision(3)` for that range:
/// `0 -> "0.00"`, `50 -> "50.0"`, `100 -> "100"`, `100/3 -> "33.3"`.
/// Exact halves round away from zero (`10.25 -> "10.3"`).
pub fn format_percent(value: f64) -> String {
    const DIGITS: i32 = 3;

    if value == 0.0 || !value.is_finite() {
        return round_half_up(0.0, (DIGITS - 1) as usize);
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let mut text = round_half_up(value, decimals_for(DIGITS, exponent));

    // Rounding can carry into the next power of ten (99.95 -> 100.0)
    if let Ok(rounded) = text.parse::<f64>() {
        if rounded.abs() >= 10f64.powi(exponent + 1) {
            exponent += 1;
            text = round_half_up(value, decimals_for(DIGITS, exponent));
        }
    }
    text
}

fn decimals_for(digits: i32, exponent: i32) -> usize {
    (digits - 1 - exponent).max(0) as usize
}

/// Enough places to print any finite f64 exactly
const EXACT_DECIMALS: usize = 1074;

/// Round to `decimals` places using the exact binary value, halves away from zero
fn round_half_up(value: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_DECIMALS, value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    if frac.as_bytes().get(decimals).is_some_and(|&b| b >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}
