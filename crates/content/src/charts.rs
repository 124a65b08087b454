use serde::Deserialize;

/// Lower end of the energy chart's log scale, in megatons.
pub const LOG_SCALE_MIN: f64 = 0.01;
/// Upper end of the energy chart's log scale, in megatons.
pub const LOG_SCALE_MAX: f64 = 100_000_000.0;
/// Bars never shrink below this width so tiny values stay visible.
pub const MIN_BAR_PERCENT: f64 = 5.0;

pub const HIGHLIGHTED_NAME: &str = "Chicxulub";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartDataPoint {
    pub name: String,
    pub value: f64,
    pub unit: String,
    #[serde(default)]
    pub description: String,
}

impl ChartDataPoint {
    pub fn is_highlighted(&self) -> bool {
        self.name == HIGHLIGHTED_NAME
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ChartsFile {
    pub(crate) crater_diameters: Vec<ChartDataPoint>,
    pub(crate) energy_releases: Vec<ChartDataPoint>,
}

/// Fraction of the widest bar, for the linear crater chart.
pub fn linear_bar_fraction(value: f64, max: f64) -> f32 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0) as f32
}

pub fn max_value(points: &[ChartDataPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// Bar width in percent on the fixed log scale, floored at `MIN_BAR_PERCENT`.
pub fn log_bar_width_percent(value: f64) -> f64 {
    let min_log = LOG_SCALE_MIN.log10();
    let max_log = LOG_SCALE_MAX.log10();
    let width = (value.log10() - min_log) / (max_log - min_log) * 100.0;
    // NaN and -inf (non-positive values) fall through to the floor.
    width.max(MIN_BAR_PERCENT)
}

/// Thousands-grouped display value, e.g. `100,000,000` or `0.015`.
pub fn format_quantity(value: f64) -> String {
    let text = format!("{value}");
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn validate(chart: &str, points: &[ChartDataPoint]) -> Result<(), String> {
    if points.is_empty() {
        return Err(format!("{chart} chart must define at least one entry"));
    }
    for p in points {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(format!(
                "{chart} entry '{}' has value={} (must be finite and positive)",
                p.name, p.value
            ));
        }
    }
    Ok(())
}
