// Figure domain model - Plotly-compatible chart definitions
use crate::error::{DashboardError, Result};
use serde::Serialize;

const TRANSPARENT: &str = "rgba(0,0,0,0)";
const FONT_COLOR: &str = "white";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeAxis {
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis: GaugeAxis,
    pub bar: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeTrace {
    pub mode: String,
    pub value: f64,
    pub title: Title,
    pub gauge: Gauge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub mode: String,
    pub name: String,
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: BarMarker,
}

/// A single Plotly trace. The variant name becomes the trace `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Indicator(GaugeTrace),
    Scatter(LineTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
}

impl FigureLayout {
    /// Transparent backgrounds with white text, for figures drawn on a dark page.
    pub fn transparent() -> Self {
        Self {
            title: None,
            xaxis: None,
            yaxis: None,
            paper_bgcolor: TRANSPARENT.to_string(),
            plot_bgcolor: TRANSPARENT.to_string(),
            font: Font {
                color: FONT_COLOR.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct PlotlyFigure<'a> {
    data: [&'a Trace; 1],
    layout: &'a FigureLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub id: String,
    pub trace: Trace,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn gauge(
        id: &str,
        title: &str,
        value: f64,
        range: [f64; 2],
        bar_color: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            trace: Trace::Indicator(GaugeTrace {
                mode: "gauge+number".to_string(),
                value,
                title: Title::new(title),
                gauge: Gauge {
                    axis: GaugeAxis { range },
                    bar: Color {
                        color: bar_color.to_string(),
                    },
                    bgcolor: None,
                },
            }),
            layout: FigureLayout::transparent(),
        }
    }

    pub fn line(
        id: &str,
        name: &str,
        x: Vec<String>,
        y: Vec<f64>,
        color: &str,
        width: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            trace: Trace::Scatter(LineTrace {
                x,
                y,
                mode: "lines+markers".to_string(),
                name: name.to_string(),
                line: LineStyle {
                    color: color.to_string(),
                    width,
                },
            }),
            layout: FigureLayout::transparent(),
        }
    }

    pub fn bar(id: &str, labels: &[&str], values: &[f64], colors: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            trace: Trace::Bar(BarTrace {
                x: labels.iter().map(|l| l.to_string()).collect(),
                y: values.to_vec(),
                marker: BarMarker {
                    color: colors.iter().map(|c| c.to_string()).collect(),
                },
            }),
            layout: FigureLayout::transparent(),
        }
    }

    /// Sets the gauge background. No effect on other trace kinds.
    pub fn with_gauge_background(mut self, color: &str) -> Self {
        if let Trace::Indicator(gauge) = &mut self.trace {
            gauge.gauge.bgcolor = Some(color.to_string());
        }
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.layout.title = Some(Title::new(title));
        self
    }

    pub fn with_axis_titles(mut self, x: &str, y: &str) -> Self {
        self.layout.xaxis = Some(AxisLayout { title: Title::new(x) });
        self.layout.yaxis = Some(AxisLayout { title: Title::new(y) });
        self
    }

    pub fn point_count(&self) -> usize {
        match &self.trace {
            Trace::Indicator(_) => 1,
            Trace::Scatter(line) => line.y.len(),
            Trace::Bar(bar) => bar.y.len(),
        }
    }

    /// Checks that every value is finite and fits the figure's display range.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(DashboardError::figure(&self.id, "figure id is empty"));
        }

        match &self.trace {
            Trace::Indicator(gauge) => {
                let [min, max] = gauge.gauge.axis.range;
                if !(min.is_finite() && max.is_finite()) || min >= max {
                    return Err(DashboardError::figure(
                        &self.id,
                        format!("gauge range [{}, {}] is not ordered", min, max),
                    ));
                }
                if !gauge.value.is_finite() || gauge.value < min || gauge.value > max {
                    return Err(DashboardError::figure(
                        &self.id,
                        format!("gauge value {} outside [{}, {}]", gauge.value, min, max),
                    ));
                }
            }
            Trace::Scatter(line) => {
                if line.y.is_empty() {
                    return Err(DashboardError::figure(&self.id, "line series is empty"));
                }
                if line.x.len() != line.y.len() {
                    return Err(DashboardError::figure(
                        &self.id,
                        format!("{} x values for {} y values", line.x.len(), line.y.len()),
                    ));
                }
                check_finite(&self.id, &line.y)?;
            }
            Trace::Bar(bar) => {
                if bar.y.is_empty() {
                    return Err(DashboardError::figure(&self.id, "bar series is empty"));
                }
                if bar.x.len() != bar.y.len() || bar.marker.color.len() != bar.y.len() {
                    return Err(DashboardError::figure(
                        &self.id,
                        "bar labels, values and colors differ in length",
                    ));
                }
                check_finite(&self.id, &bar.y)?;
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let figure = PlotlyFigure {
            data: [&self.trace],
            layout: &self.layout,
        };
        Ok(serde_json::to_string(&figure)?)
    }
}

fn check_finite(id: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(DashboardError::figure(
            id,
            format!("value at index {} is not finite", idx),
        )),
        None => Ok(()),
    }
}
