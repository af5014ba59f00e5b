use std::fmt;

/// A single value in a [`Summary`] row, tagged with how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    /// Fixed-point, six decimals.
    Float(f64),
    /// Scientific notation, three decimals.
    Scientific(f64),
    /// Integer count.
    Count(usize),
    /// Short label.
    Text(&'static str),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Float(v) => write!(f, "{v:10.6}"),
            SummaryValue::Scientific(v) => write!(f, "{v:10.3e}"),
            SummaryValue::Count(v) => write!(f, "{v:10}"),
            SummaryValue::Text(v) => write!(f, "{v:>10}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: SummaryValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarySection {
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}

impl SummarySection {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: &'static str, value: SummaryValue) -> Self {
        self.rows.push(SummaryRow { label, value });
        self
    }
}

/// Report of a grid model's configuration, derived values and grid points.
///
/// Rendered as plain text by its [`Display`](fmt::Display) implementation;
/// the command-line tool renders the same rows as tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub sections: Vec<SummarySection>,
    pub points: Vec<f64>,
}

impl Summary {
    /// Looks up a row by section title and label.
    pub fn get(&self, section: &str, label: &str) -> Option<SummaryValue> {
        self.sections
            .iter()
            .find(|s| s.title == section)?
            .rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value)
    }
}

const POINTS_PER_LINE: usize = 6;

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", section.title)?;
            for row in &section.rows {
                writeln!(f, "\t{:10}: {}", row.label, row.value)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Grid points:")?;
        for chunk in self.points.chunks(POINTS_PER_LINE) {
            write!(f, "\t")?;
            for r in chunk {
                write!(f, "{r:12.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        Summary {
            sections: vec![
                SummarySection::new("System info")
                    .row("Re", SummaryValue::Float(1.4))
                    .row("method", SummaryValue::Text("ridder")),
                SummarySection::new("Grid")
                    .row("npoints", SummaryValue::Count(16))
                    .row("residual", SummaryValue::Scientific(1.5e-13)),
            ],
            points: vec![0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5],
        }
    }

    #[test]
    fn value_formats() {
        assert_eq!(SummaryValue::Float(1.4).to_string(), "  1.400000");
        assert_eq!(SummaryValue::Count(16).to_string(), "        16");
        assert_eq!(SummaryValue::Text("ridder").to_string(), "    ridder");
        assert_eq!(SummaryValue::Scientific(1.5e-13).to_string(), " 1.500e-13");
    }

    #[test]
    fn renders_sections_and_points() {
        let text = sample().to_string();
        assert!(text.starts_with("System info:\n\tRe        :   1.400000\n"));
        assert!(text.contains("\nGrid:\n\tnpoints   :         16\n"));
        assert!(text.contains("Grid points:\n"));
        // 7 points over two lines
        let point_lines = text
            .lines()
            .skip_while(|l| *l != "Grid points:")
            .skip(1)
            .count();
        assert_eq!(point_lines, 2);
    }

    #[test]
    fn get_finds_rows() {
        let summary = sample();
        assert_eq!(summary.get("Grid", "npoints"), Some(SummaryValue::Count(16)));
        assert_eq!(summary.get("Grid", "missing"), None);
        assert_eq!(summary.get("Missing", "npoints"), None);
    }
}
