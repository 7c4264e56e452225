//! Vital-sign metrics and the line chart on the patient records panel.

use std::fmt::Write;

use strum::EnumIter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum MetricKind {
    BloodPressure,
    HeartRate,
    Temperature,
    Visits,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::BloodPressure => "Blood Pressure",
            MetricKind::HeartRate => "Heart Rate",
            MetricKind::Temperature => "Temperature",
            MetricKind::Visits => "Monthly Visits",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MetricKind::BloodPressure => "#3b82f6",
            MetricKind::HeartRate => "#ef4444",
            MetricKind::Temperature => "#f59e0b",
            MetricKind::Visits => "#10b981",
        }
    }

    /// Whether a drop in the value counts as an improvement.
    pub fn lower_is_better(self) -> bool {
        matches!(self, MetricKind::BloodPressure | MetricKind::HeartRate)
    }

    pub fn format(self, value: f64) -> String {
        match self {
            MetricKind::BloodPressure => format!("{value}/80 mmHg"),
            MetricKind::HeartRate => format!("{value} bpm"),
            MetricKind::Temperature => format!("{value}°F"),
            MetricKind::Visits => format!("{value} visits"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthMetric {
    pub kind: MetricKind,
    pub value: f64,
    pub previous_value: f64,
}

impl HealthMetric {
    /// Percentage change from the previous reading.
    pub fn change(&self) -> f64 {
        if self.previous_value == 0.0 {
            return 0.0;
        }
        (self.value - self.previous_value) / self.previous_value * 100.0
    }

    pub fn is_improvement(&self) -> bool {
        let change = self.change();
        if self.kind.lower_is_better() {
            change < 0.0
        } else {
            change > 0.0
        }
    }

    pub fn change_label(&self) -> String {
        format!("{:.1}%", self.change().abs())
    }
}

pub const HEALTH_METRICS: [HealthMetric; 4] = [
    HealthMetric {
        kind: MetricKind::BloodPressure,
        value: 119.0,
        previous_value: 125.0,
    },
    HealthMetric {
        kind: MetricKind::HeartRate,
        value: 73.0,
        previous_value: 78.0,
    },
    HealthMetric {
        kind: MetricKind::Temperature,
        value: 98.5,
        previous_value: 99.1,
    },
    HealthMetric {
        kind: MetricKind::Visits,
        value: 8.0,
        previous_value: 6.0,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatientSample {
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    pub blood_pressure: f64,
    pub heart_rate: f64,
    pub temperature: f64,
    pub visits: f64,
}

impl PatientSample {
    const fn new(
        date: &'static str,
        blood_pressure: f64,
        heart_rate: f64,
        temperature: f64,
        visits: f64,
    ) -> Self {
        Self {
            date,
            blood_pressure,
            heart_rate,
            temperature,
            visits,
        }
    }

    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::BloodPressure => self.blood_pressure,
            MetricKind::HeartRate => self.heart_rate,
            MetricKind::Temperature => self.temperature,
            MetricKind::Visits => self.visits,
        }
    }
}

pub const PATIENT_SAMPLES: [PatientSample; 15] = [
    PatientSample::new("2024-04-01", 120.0, 72.0, 98.6, 1.0),
    PatientSample::new("2024-04-02", 118.0, 75.0, 98.4, 0.0),
    PatientSample::new("2024-04-03", 122.0, 70.0, 98.8, 1.0),
    PatientSample::new("2024-04-04", 115.0, 68.0, 98.2, 0.0),
    PatientSample::new("2024-04-05", 125.0, 78.0, 99.1, 1.0),
    PatientSample::new("2024-04-06", 119.0, 73.0, 98.5, 0.0),
    PatientSample::new("2024-04-07", 121.0, 71.0, 98.7, 1.0),
    PatientSample::new("2024-04-08", 117.0, 69.0, 98.3, 0.0),
    PatientSample::new("2024-04-09", 123.0, 76.0, 98.9, 1.0),
    PatientSample::new("2024-04-10", 116.0, 74.0, 98.1, 0.0),
    PatientSample::new("2024-04-11", 120.0, 72.0, 98.6, 1.0),
    PatientSample::new("2024-04-12", 124.0, 77.0, 99.0, 0.0),
    PatientSample::new("2024-04-13", 118.0, 70.0, 98.4, 1.0),
    PatientSample::new("2024-04-14", 122.0, 75.0, 98.8, 0.0),
    PatientSample::new("2024-04-15", 119.0, 73.0, 98.5, 1.0),
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `2024-04-01` -> `Apr 1`
pub fn short_date(iso: &str) -> Option<String> {
    let mut parts = iso.splitn(3, '-');
    let _year = parts.next()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let name = MONTHS.get(month.checked_sub(1)?)?;
    Some(format!("{name} {day}"))
}

pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 300.0;
pub const PADDING: f64 = 60.0;
const GRID_LINES: usize = 6;
const DATE_LABEL_EVERY: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateLabel {
    pub x: f64,
    pub text: String,
}

/// Everything the SVG needs to draw one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthChart {
    pub kind: MetricKind,
    pub points: Vec<(f64, f64)>,
    pub path: String,
    pub grid: Vec<GridLine>,
    pub date_labels: Vec<DateLabel>,
}

impl HealthChart {
    pub fn view_box() -> String {
        format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
    }

    pub fn build(kind: MetricKind, samples: &[PatientSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let values: Vec<f64> = samples.iter().map(|s| s.value(kind)).collect();
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        let min = values.iter().copied().fold(f64::MAX, f64::min);
        // a flat series would otherwise divide by zero
        let range = if max > min { max - min } else { 1.0 };

        let plot_width = VIEW_WIDTH - PADDING * 2.0;
        let plot_height = VIEW_HEIGHT - PADDING * 2.0;
        let x_step = if samples.len() > 1 {
            plot_width / (samples.len() - 1) as f64
        } else {
            0.0
        };
        let y_scale = plot_height / (range * 1.2);

        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = PADDING + i as f64 * x_step;
                let y = VIEW_HEIGHT - PADDING - (value - min + range * 0.1) * y_scale;
                (x, y)
            })
            .collect();

        let mut path = String::new();
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                path.push(' ');
            }
            let command = if i == 0 { 'M' } else { 'L' };
            let _ = write!(path, "{command} {x} {y}");
        }

        let grid = (0..GRID_LINES)
            .map(|i| {
                let step = i as f64 / (GRID_LINES - 1) as f64;
                let value = max - step * (max - min);
                GridLine {
                    y: PADDING + step * plot_height,
                    label: kind.format((value * 10.0).round() / 10.0),
                }
            })
            .collect();

        let date_labels = samples
            .iter()
            .zip(points.iter())
            .step_by(DATE_LABEL_EVERY)
            .filter_map(|(sample, (x, _))| {
                short_date(sample.date).map(|text| DateLabel { x: *x, text })
            })
            .collect();

        Some(Self {
            kind,
            points,
            path,
            grid,
            date_labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_formats() {
        assert_eq!(MetricKind::BloodPressure.format(119.0), "119/80 mmHg");
        assert_eq!(MetricKind::HeartRate.format(73.0), "73 bpm");
        assert_eq!(MetricKind::Temperature.format(98.5), "98.5°F");
        assert_eq!(MetricKind::Visits.format(8.0), "8 visits");
    }

    #[test]
    fn test_metrics_cover_every_kind_in_order() {
        let kinds: Vec<MetricKind> = HEALTH_METRICS.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, MetricKind::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_change_and_improvement() {
        let [bp, hr, temp, visits] = HEALTH_METRICS;

        assert_eq!(bp.change_label(), "4.8%");
        assert!(bp.is_improvement());
        assert_eq!(hr.change_label(), "6.4%");
        assert!(hr.is_improvement());

        // temperature went down but lower is not better
        assert!(temp.change() < 0.0);
        assert!(!temp.is_improvement());

        assert_eq!(visits.change_label(), "33.3%");
        assert!(visits.is_improvement());
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-04-01").as_deref(), Some("Apr 1"));
        assert_eq!(short_date("2024-12-31").as_deref(), Some("Dec 31"));
        assert_eq!(short_date("2024-13-01"), None);
        assert_eq!(short_date("April"), None);
    }

    #[test]
    fn test_chart_extents() {
        let chart = HealthChart::build(MetricKind::BloodPressure, &PATIENT_SAMPLES).unwrap();
        assert_eq!(chart.points.len(), 15);

        let (first_x, _) = chart.points[0];
        let (last_x, _) = chart.points[14];
        assert!(approx(first_x, PADDING));
        assert!(approx(last_x, VIEW_WIDTH - PADDING));

        // max (125) and min (115) sit a tenth of the range inside the plot
        let plot_height = VIEW_HEIGHT - PADDING * 2.0;
        let (_, y_max) = chart.points[4];
        let (_, y_min) = chart.points[3];
        assert!(approx(y_min, VIEW_HEIGHT - PADDING - plot_height / 12.0));
        assert!(approx(y_max, VIEW_HEIGHT - PADDING - plot_height * 11.0 / 12.0));
        assert!(chart.path.starts_with("M 60 "));
        assert_eq!(chart.path.matches('L').count(), 14);
    }

    #[test]
    fn test_chart_grid_and_dates() {
        let chart = HealthChart::build(MetricKind::Temperature, &PATIENT_SAMPLES).unwrap();
        let labels: Vec<&str> = chart.grid.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            ["99.1°F", "98.9°F", "98.7°F", "98.5°F", "98.3°F", "98.1°F"]
        );
        assert!(approx(chart.grid[0].y, PADDING));
        assert!(approx(chart.grid[5].y, VIEW_HEIGHT - PADDING));

        let dates: Vec<&str> = chart.date_labels.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(dates, ["Apr 1", "Apr 4", "Apr 7", "Apr 10", "Apr 13"]);
    }

    #[test]
    fn test_flat_and_empty_series() {
        assert!(HealthChart::build(MetricKind::Visits, &[]).is_none());

        let flat = [PATIENT_SAMPLES[0]; 3];
        let chart = HealthChart::build(MetricKind::HeartRate, &flat).unwrap();
        assert!(chart.points.iter().all(|(_, y)| y.is_finite()));

        let single = HealthChart::build(MetricKind::HeartRate, &flat[..1]).unwrap();
        assert!(approx(single.points[0].0, PADDING));
    }
}
