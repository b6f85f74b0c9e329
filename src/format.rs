//! Display formatting: currency, whole percentages, and axis tick scales
//!
//! These rules are part of the output contract: the dashboard's displayed
//! values depend on the exact rounding here. Non-finite values (a zero
//! close rate divides through the engine) render as-is rather than crash.

/// Currency code for money formatting. No fractional cents anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    Usd,
    #[default]
    Cad,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Cad => "CA$",
        }
    }
}

/// Format a currency amount rounded to whole units with thousands grouping
pub fn money0(n: f64, currency: Currency) -> String {
    if !n.is_finite() {
        return format!("{}{}", currency.symbol(), n);
    }
    format!("{}{}", currency.symbol(), group_thousands(n.round() as i64))
}

/// Whole-percentage formatting: round(x * 100) followed by "%"
pub fn pct0(x: f64) -> String {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return format!("{}%", scaled);
    }
    format!("{}%", scaled.round() as i64)
}

/// Tick scale for the cumulative chart's y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// "$31k" style, whole thousands
    Thousands,
    /// "$1.6M" style, one decimal
    Millions,
}

impl AxisScale {
    /// Millions once the tallest series value reaches 1,000,000
    pub fn select(max_value: f64) -> Self {
        if max_value >= 1_000_000.0 {
            AxisScale::Millions
        } else {
            AxisScale::Thousands
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            AxisScale::Millions => format!("${:.1}M", value / 1_000_000.0),
            AxisScale::Thousands => format!("${}k", (value / 1_000.0).round() as i64),
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
