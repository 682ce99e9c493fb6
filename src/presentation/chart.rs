// Line chart drawing over parallel label/value sequences
use crate::domain::series::ChartDisplay;

const CHART_HEIGHT: usize = 10;

pub struct LineChart<'a> {
    display: &'a ChartDisplay,
    height: usize,
}

impl<'a> LineChart<'a> {
    pub fn new(display: &'a ChartDisplay) -> Self {
        Self {
            display,
            height: CHART_HEIGHT,
        }
    }

    /// Draw the chart as a fixed-height column grid. One column per point,
    /// y-axis extremes on the left, first and last labels under the axis.
    pub fn render(&self) -> String {
        let values = &self.display.values;
        if values.is_empty() {
            return "(no data)\n".to_string();
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        // Row index for each value, 0 = top row.
        let rows: Vec<usize> = values
            .iter()
            .map(|v| {
                if span == 0.0 {
                    self.height / 2
                } else {
                    ((max - v) / span * (self.height - 1) as f64).round() as usize
                }
            })
            .collect();

        let mut out = String::new();
        for row in 0..self.height {
            let prefix = if row == 0 {
                format!("{:>8.1} ┤", max)
            } else if row == self.height - 1 {
                format!("{:>8.1} ┤", min)
            } else {
                format!("{:>8} │", "")
            };
            out.push_str(&prefix);
            for &r in &rows {
                out.push(if r == row { '*' } else { ' ' });
            }
            out.push('\n');
        }

        out.push_str(&format!("{:>8} └", ""));
        for _ in values {
            out.push('─');
        }
        out.push('\n');

        // First and last labels anchor the x-axis.
        let first = self.display.labels.first().cloned().unwrap_or_default();
        let last = self.display.labels.last().cloned().unwrap_or_default();
        if self.display.labels.len() > 1 {
            let gap = (values.len() + 1).saturating_sub(first.chars().count());
            out.push_str(&format!("{:>8} {}{:>gap$}\n", "", first, last));
        } else {
            out.push_str(&format!("{:>8} {}\n", "", first));
        }

        out
    }
}
