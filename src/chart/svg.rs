use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{ChartData, ChartError, Plotter};

/// Line colors, cycled per series
const PALETTE: [&str; 6] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b"];

const TICKS: usize = 5;

/// Renders a standalone SVG line chart with axes, tick labels and a legend
#[derive(Debug, Clone, Copy)]
pub struct SvgPlotter {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for SvgPlotter {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

/// Closed interval covered by an axis
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn of<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<Self> {
        let mut range: Option<Range> = None;
        for &v in values.into_iter().filter(|v| v.is_finite()) {
            range = Some(match range {
                None => Range { min: v, max: v },
                Some(r) => Range {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            });
        }
        range
    }

    /// Widen a zero-width range so it can be scaled
    fn padded(self) -> Self {
        if self.max > self.min {
            return self;
        }
        let pad = (self.min.abs() * 0.05).max(0.5);
        Range {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    fn with_margin(self, fraction: f64) -> Self {
        let margin = (self.max - self.min) * fraction;
        Range {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }

    fn tick(&self, i: usize) -> f64 {
        self.min + (self.max - self.min) * i as f64 / (TICKS - 1) as f64
    }
}

/// Pixel area inside the axes
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x: Range,
    y: Range,
}

impl PlotArea {
    fn px(&self, x: f64) -> f64 {
        self.left + self.x.fraction(x) * self.width
    }

    fn py(&self, y: f64) -> f64 {
        self.top + self.height - self.y.fraction(y) * self.height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

impl SvgPlotter {
    fn area(&self, data: &ChartData) -> Result<PlotArea, ChartError> {
        let x = Range::of(data.time()).ok_or(ChartError::NoData)?.padded();
        let y = Range::of(data.series().iter().flat_map(|s| s.values.iter()))
            .ok_or(ChartError::NoData)?
            .padded()
            .with_margin(0.05);

        let (left, right, top, bottom) = (80.0, 20.0, 20.0, 60.0);
        Ok(PlotArea {
            left,
            top,
            width: (f64::from(self.width) - left - right).max(1.0),
            height: (f64::from(self.height) - top - bottom).max(1.0),
            x,
            y,
        })
    }

    fn write_axes<W: Write>(
        &self,
        svg: &mut Writer<W>,
        area: &PlotArea,
        data: &ChartData,
    ) -> Result<(), ChartError> {
        empty(
            svg,
            "rect",
            &[
                ("x", px(area.left)),
                ("y", px(area.top)),
                ("width", px(area.width)),
                ("height", px(area.height)),
                ("fill", "none".into()),
                ("stroke", "black".into()),
            ],
        )?;

        for i in 0..TICKS {
            let tx = area.x.tick(i);
            let x = area.px(tx);
            empty(
                svg,
                "line",
                &[
                    ("x1", px(x)),
                    ("y1", px(area.bottom())),
                    ("x2", px(x)),
                    ("y2", px(area.bottom() + 5.0)),
                    ("stroke", "black".into()),
                ],
            )?;
            text(
                svg,
                &[
                    ("x", px(x)),
                    ("y", px(area.bottom() + 20.0)),
                    ("font-size", "12".into()),
                    ("text-anchor", "middle".into()),
                ],
                &format_tick(tx),
            )?;

            let ty = area.y.tick(i);
            let y = area.py(ty);
            empty(
                svg,
                "line",
                &[
                    ("x1", px(area.left - 5.0)),
                    ("y1", px(y)),
                    ("x2", px(area.left)),
                    ("y2", px(y)),
                    ("stroke", "black".into()),
                ],
            )?;
            text(
                svg,
                &[
                    ("x", px(area.left - 8.0)),
                    ("y", px(y + 4.0)),
                    ("font-size", "12".into()),
                    ("text-anchor", "end".into()),
                ],
                &format_tick(ty),
            )?;
        }

        text(
            svg,
            &[
                ("x", px(area.left + area.width / 2.0)),
                ("y", px(f64::from(self.height) - 15.0)),
                ("font-size", "14".into()),
                ("text-anchor", "middle".into()),
            ],
            data.x_label(),
        )?;
        let cy = px(area.top + area.height / 2.0);
        text(
            svg,
            &[
                ("x", "20".into()),
                ("y", cy.clone()),
                ("font-size", "14".into()),
                ("text-anchor", "middle".into()),
                ("transform", format!("rotate(-90 20 {cy})")),
            ],
            data.y_label(),
        )
    }

    fn write_lines<W: Write>(
        &self,
        svg: &mut Writer<W>,
        area: &PlotArea,
        data: &ChartData,
    ) -> Result<(), ChartError> {
        for (n, series) in data.series().iter().enumerate() {
            let color = PALETTE[n % PALETTE.len()];
            // Non-finite points split the line into separate segments
            let mut segment: Vec<String> = Vec::new();
            for (&x, &y) in data.time().iter().zip(series.values.iter()) {
                if x.is_finite() && y.is_finite() {
                    segment.push(format!("{:.2},{:.2}", area.px(x), area.py(y)));
                } else {
                    polyline(svg, &segment, color)?;
                    segment.clear();
                }
            }
            polyline(svg, &segment, color)?;
        }
        Ok(())
    }

    fn write_legend<W: Write>(
        &self,
        svg: &mut Writer<W>,
        area: &PlotArea,
        data: &ChartData,
    ) -> Result<(), ChartError> {
        let row = 18.0;
        let longest = data
            .series()
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        let box_width = 40.0 + longest as f64 * 7.0;
        let x0 = area.right() - box_width - 10.0;
        let y0 = area.top + 10.0;

        empty(
            svg,
            "rect",
            &[
                ("x", px(x0)),
                ("y", px(y0)),
                ("width", px(box_width)),
                ("height", px(row * data.series().len() as f64 + 8.0)),
                ("fill", "white".into()),
                ("stroke", "#cccccc".into()),
            ],
        )?;
        for (n, series) in data.series().iter().enumerate() {
            let color = PALETTE[n % PALETTE.len()];
            let y = y0 + 4.0 + row * (n as f64 + 0.5);
            empty(
                svg,
                "line",
                &[
                    ("x1", px(x0 + 6.0)),
                    ("y1", px(y)),
                    ("x2", px(x0 + 28.0)),
                    ("y2", px(y)),
                    ("stroke", color.into()),
                    ("stroke-width", "2".into()),
                ],
            )?;
            text(
                svg,
                &[
                    ("x", px(x0 + 34.0)),
                    ("y", px(y + 4.0)),
                    ("font-size", "12".into()),
                ],
                &series.label,
            )?;
        }
        Ok(())
    }
}

impl Plotter for SvgPlotter {
    fn write_to(&self, data: &ChartData, out: &mut dyn Write) -> Result<(), ChartError> {
        let area = self.area(data)?;
        let mut svg = Writer::new(&mut *out);

        let (w, h) = (self.width.to_string(), self.height.to_string());
        let root = attributes(
            BytesStart::new("svg"),
            &[
                ("xmlns", "http://www.w3.org/2000/svg".into()),
                ("width", w.clone()),
                ("height", h.clone()),
                ("viewBox", format!("0 0 {w} {h}")),
                ("font-family", "sans-serif".into()),
            ],
        );
        svg.write_event(Event::Start(root))?;
        empty(
            &mut svg,
            "rect",
            &[
                ("width", "100%".into()),
                ("height", "100%".into()),
                ("fill", "white".into()),
            ],
        )?;
        self.write_axes(&mut svg, &area, data)?;
        self.write_lines(&mut svg, &area, data)?;
        self.write_legend(&mut svg, &area, data)?;
        svg.write_event(Event::End(BytesEnd::new("svg")))?;

        let out = svg.into_inner();
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// Attribute values are escaped by the writer
fn attributes<'a>(mut element: BytesStart<'a>, attrs: &[(&str, String)]) -> BytesStart<'a> {
    for (key, value) in attrs {
        element.push_attribute((*key, value.as_str()));
    }
    element
}

fn empty<W: Write>(
    svg: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, String)],
) -> Result<(), ChartError> {
    svg.write_event(Event::Empty(attributes(BytesStart::new(name), attrs)))?;
    Ok(())
}

fn text<W: Write>(
    svg: &mut Writer<W>,
    attrs: &[(&str, String)],
    content: &str,
) -> Result<(), ChartError> {
    svg.write_event(Event::Start(attributes(BytesStart::new("text"), attrs)))?;
    svg.write_event(Event::Text(BytesText::new(content)))?;
    svg.write_event(Event::End(BytesEnd::new("text")))?;
    Ok(())
}

fn polyline<W: Write>(
    svg: &mut Writer<W>,
    points: &[String],
    color: &str,
) -> Result<(), ChartError> {
    if points.is_empty() {
        return Ok(());
    }
    empty(
        svg,
        "polyline",
        &[
            ("fill", "none".into()),
            ("stroke", color.into()),
            ("stroke-width", "1.5".into()),
            ("points", points.join(" ")),
        ],
    )
}

fn px(v: f64) -> String {
    format!("{:.2}", v)
}

fn format_tick(v: f64) -> String {
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-2..1e4).contains(&magnitude) {
        format!("{:.2e}", v)
    } else {
        format!("{:.2}", v)
    }
}
