//! Chart geometry in SVG user units.
//!
//! Angles are radians measured clockwise from 12 o'clock.

use std::f64::consts::{PI, TAU};

use super::{Series, WeekdayRow};

/// Outer size of a chart and the space reserved around its plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    /// Top and right padding.
    pub margin: f64,
    /// Left and bottom space for axis labels.
    pub gutter: f64,
}

impl ChartFrame {
    pub fn left(&self) -> f64 {
        self.gutter
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin
    }

    pub fn top(&self) -> f64 {
        self.margin
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.gutter
    }

    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }
}

/// Round a raw tick interval to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Value axis domain aligned to a nice step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NiceDomain {
    pub fn covering(lo: f64, hi: f64, target_ticks: usize) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let intervals = target_ticks.saturating_sub(1).max(1) as f64;
        let step = nice_step((hi - lo) / intervals);
        let min = (lo / step).floor() * step;
        let mut max = (hi / step).ceil() * step;
        if max <= min {
            max = min + step;
        }
        Self { min, max, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    /// Position of `value` within the domain, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Hover target spanning one weekday column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub x: f64,
    pub width: f64,
}

/// Layout of the weekly contacts line chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChart {
    frame: ChartFrame,
    domain: NiceDomain,
    count: usize,
}

impl LineChart {
    pub const TARGET_TICKS: usize = 5;

    pub fn new(frame: ChartFrame, rows: &[WeekdayRow]) -> Self {
        let values = rows
            .iter()
            .flat_map(|row| Series::ALL.map(|series| f64::from(row.value(series))));
        let (lo, hi) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 0.0));

        Self {
            frame,
            domain: NiceDomain::covering(lo, hi, Self::TARGET_TICKS),
            count: rows.len(),
        }
    }

    pub fn frame(&self) -> ChartFrame {
        self.frame
    }

    pub fn domain(&self) -> NiceDomain {
        self.domain
    }

    pub fn x(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.frame.left() + self.frame.inner_width() / 2.0;
        }
        self.frame.left() + index as f64 * self.frame.inner_width() / (self.count - 1) as f64
    }

    pub fn y(&self, value: f64) -> f64 {
        self.frame.bottom() - self.domain.fraction(value) * self.frame.inner_height()
    }

    pub fn points(&self, rows: &[WeekdayRow], series: Series) -> Vec<(f64, f64)> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| (self.x(i), self.y(f64::from(row.value(series)))))
            .collect()
    }

    pub fn series_path(&self, rows: &[WeekdayRow], series: Series) -> String {
        line_path(&self.points(rows, series))
    }

    /// Hover column centered on point `index`; neighbouring columns touch.
    pub fn column(&self, index: usize) -> Column {
        let width = if self.count <= 1 {
            self.frame.inner_width()
        } else {
            self.frame.inner_width() / (self.count - 1) as f64
        };
        Column {
            x: self.x(index) - width / 2.0,
            width,
        }
    }
}

/// SVG path through `points` as straight segments.
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One slice of a pie/donut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Sector {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Split a full turn proportionally to `values`. Non-positive values get an
/// empty sector so indices stay aligned with the input.
pub fn sectors(values: &[f64]) -> Vec<Sector> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let span = value.max(0.0) / total * TAU;
            let sector = Sector {
                index,
                start: angle,
                end: angle + span,
            };
            angle += span;
            sector
        })
        .collect()
}

pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

/// SVG path of a donut slice between `inner` and `outer` radii.
pub fn donut_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let span = end - start;
    if span >= TAU - 1e-9 {
        // A single arc cannot start and end on the same point
        let mid = start + PI;
        return format!(
            "{} {}",
            donut_path(cx, cy, inner, outer, start, mid),
            donut_path(cx, cy, inner, outer, mid, start + TAU)
        );
    }

    let large_arc = u8::from(span > PI);
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);

    format!(
        "M{x0:.2},{y0:.2} A{outer:.2},{outer:.2} 0 {large_arc} 1 {x1:.2},{y1:.2} \
         L{x2:.2},{y2:.2} A{inner:.2},{inner:.2} 0 {large_arc} 0 {x3:.2},{y3:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{weekday_rows, WeeklyContacts};

    const FRAME: ChartFrame = ChartFrame {
        width: 560.0,
        height: 240.0,
        margin: 16.0,
        gutter: 40.0,
    };

    fn rows() -> Vec<WeekdayRow> {
        weekday_rows(&WeeklyContacts {
            last_week: vec![398, 412, 425, 430, 445, 460, 430],
            this_week: vec![438, 438, 450, 459, 482, 483, 492],
        })
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(23.5), 25.0);
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(140.0), 200.0);
        assert_eq!(nice_step(4.0), 5.0);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
    }

    #[test]
    fn test_domain_covers_values() {
        let domain = NiceDomain::covering(398.0, 492.0, 5);
        assert_eq!(domain.min, 375.0);
        assert_eq!(domain.max, 500.0);
        assert_eq!(domain.step, 25.0);
        assert_eq!(domain.ticks(), vec![375.0, 400.0, 425.0, 450.0, 475.0, 500.0]);
    }

    #[test]
    fn test_degenerate_domain() {
        let domain = NiceDomain::covering(7.0, 7.0, 5);
        assert!(domain.max > domain.min);
        assert!(domain.min <= 7.0 && domain.max >= 7.0);
    }

    #[test]
    fn test_line_chart_maps_extremes_to_frame() {
        let rows = rows();
        let chart = LineChart::new(FRAME, &rows);
        assert_eq!(chart.x(0), FRAME.left());
        assert_eq!(chart.x(6), FRAME.right());
        assert_eq!(chart.y(chart.domain().min), FRAME.bottom());
        assert_eq!(chart.y(chart.domain().max), FRAME.top());

        let points = chart.points(&rows, Series::ThisWeek);
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|(_, y)| *y >= FRAME.top() && *y <= FRAME.bottom()));
    }

    #[test]
    fn test_series_path_shape() {
        let rows = rows();
        let path = LineChart::new(FRAME, &rows).series_path(&rows, Series::LastWeek);
        assert!(path.starts_with("M40.0,"));
        assert_eq!(path.matches('L').count(), 6);
    }

    #[test]
    fn test_columns_tile_plot_width() {
        let rows = rows();
        let chart = LineChart::new(FRAME, &rows);
        let first = chart.column(0);
        let second = chart.column(1);
        assert!((first.x + first.width - second.x).abs() < 1e-9);
    }

    #[test]
    fn test_sectors_fill_full_turn() {
        let sectors = sectors(&[232.0, 35.0, 125.0, 48.0, 11.0]);
        assert_eq!(sectors.len(), 5);
        assert_eq!(sectors[0].start, 0.0);
        let total: f64 = sectors.iter().map(Sector::span).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert!((sectors[4].end - TAU).abs() < 1e-9);
        for pair in sectors.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_sectors_empty_when_no_data() {
        assert!(sectors(&[]).is_empty());
        assert!(sectors(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_donut_path_large_arc_flag() {
        let small = donut_path(100.0, 100.0, 50.0, 80.0, 0.0, PI / 2.0);
        assert!(small.contains(" 0 0 1 "));

        let large = donut_path(100.0, 100.0, 50.0, 80.0, 0.0, PI * 1.5);
        assert!(large.contains(" 0 1 1 "));
    }

    #[test]
    fn test_full_ring_is_split() {
        let ring = donut_path(100.0, 100.0, 50.0, 80.0, 0.0, TAU);
        assert_eq!(ring.matches('M').count(), 2);
    }

    #[test]
    fn test_polar_starts_at_twelve_oclock() {
        let (x, y) = polar(100.0, 100.0, 10.0, 0.0);
        assert_eq!((x, y), (100.0, 90.0));
    }
}
