//! Prometheus text exposition encoding.
//!
//! Metric state lives beside the store that owns it; services recompute a
//! snapshot on every scrape and render it through [`Exposition`]. Nothing in
//! this module caches or owns metric values.

use std::fmt::Write;

/// Metric family kind, as reported on the `# TYPE` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// Incremental builder for the text exposition format.
///
/// One `family` call emits the `# HELP`/`# TYPE` header; `sample`/`labeled`
/// append value lines for it. Families are separated by a blank line.
#[derive(Debug, Default)]
pub struct Exposition {
    buf: String,
    families: usize,
}

impl Exposition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new metric family.
    pub fn family(&mut self, name: &str, help: &str, kind: MetricKind) -> &mut Self {
        if self.families > 0 {
            self.buf.push('\n');
        }
        self.families += 1;
        let _ = writeln!(self.buf, "# HELP {name} {help}");
        let _ = writeln!(self.buf, "# TYPE {name} {}", kind.as_str());
        self
    }

    /// Append an unlabeled sample.
    pub fn sample(&mut self, name: &str, value: f64) -> &mut Self {
        let _ = writeln!(self.buf, "{name} {}", format_value(value));
        self
    }

    /// Append a sample with `key="value"` labels.
    pub fn labeled(&mut self, name: &str, labels: &[(&str, &str)], value: f64) -> &mut Self {
        let _ = write!(self.buf, "{name}{{");
        for (i, (key, val)) in labels.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            let _ = write!(self.buf, "{key}=\"{}\"", escape_label(val));
        }
        let _ = writeln!(self.buf, "}} {}", format_value(value));
        self
    }

    /// Render the exposition body.
    pub fn render(&self) -> String {
        self.buf.trim_end().to_string()
    }
}

/// Integral values render without a fraction; everything else gets two
/// decimals.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Escape a label value per the exposition format rules.
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
