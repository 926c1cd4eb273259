//! Minimal SVG document model.
//!
//! Only the three shapes the map needs. Shapes form a closed enum and the
//! document renders them through `Display`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Point on the drawing plane.
///
/// Serialized as a two-element array `[x, y]`, the form label offsets take
/// in render settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// SVG paint: a named color, `[r, g, b]` or `[r, g, b, opacity]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Color {
    pub fn none() -> Self {
        Color::Named("none".to_string())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::none()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// Fill and stroke attributes shared by every shape. Unset attributes are
/// omitted from the output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathProps {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap: Option<StrokeLineCap>,
    pub line_join: Option<StrokeLineJoin>,
}

impl PathProps {
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Round caps and joins.
    pub fn rounded(mut self) -> Self {
        self.line_cap = Some(StrokeLineCap::Round);
        self.line_join = Some(StrokeLineJoin::Round);
        self
    }
}

impl fmt::Display for PathProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.line_cap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub props: PathProps,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub props: PathProps,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
    pub props: PathProps,
}

/// Anything that can be placed in a [`Document`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Shape::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                c.center.x, c.center.y, c.radius, c.props
            ),
            Shape::Polyline(p) => {
                f.write_str("<polyline points=\"")?;
                for (i, point) in p.points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{},{}", point.x, point.y)?;
                }
                write!(f, "\"{}/>", p.props)
            }
            Shape::Text(t) => {
                write!(
                    f,
                    "<text{} x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    t.props, t.position.x, t.position.y, t.offset.x, t.offset.y, t.font_size
                )?;
                if let Some(family) = &t.font_family {
                    write!(f, " font-family=\"{family}\"")?;
                }
                if let Some(weight) = &t.font_weight {
                    write!(f, " font-weight=\"{weight}\"")?;
                }
                write!(f, ">{}</text>", Escaped(&t.data))
            }
        }
    }
}

/// Text content with XML special characters replaced by entities.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// An ordered list of shapes; later shapes paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">")?;
        for shape in &self.shapes {
            writeln!(f, "  {shape}")?;
        }
        f.write_str("</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_display() {
        assert_eq!(Color::none().to_string(), "none");
        assert_eq!(Color::Rgb(255, 16, 12).to_string(), "rgb(255,16,12)");
        assert_eq!(Color::Rgba(255, 200, 23, 0.85).to_string(), "rgba(255,200,23,0.85)");
    }

    #[test]
    fn color_from_json() {
        let colors: Vec<Color> =
            serde_json::from_str(r#"["green", [255, 160, 0], [255, 200, 23, 0.85]]"#).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::named("green"),
                Color::Rgb(255, 160, 0),
                Color::Rgba(255, 200, 23, 0.85),
            ]
        );
    }

    #[test]
    fn point_from_json_array() {
        let point: Point = serde_json::from_str("[7, -3]").unwrap();
        assert_eq!(point, Point::new(7.0, -3.0));
        assert_eq!(serde_json::to_string(&point).unwrap(), "[7.0,-3.0]");
    }

    #[test]
    fn circle_markup() {
        let circle = Shape::from(Circle {
            center: Point::new(20.0, 30.0),
            radius: 5.0,
            props: PathProps::default().fill(Color::named("white")),
        });
        assert_eq!(
            circle.to_string(),
            r#"<circle cx="20" cy="30" r="5" fill="white"/>"#
        );
    }

    #[test]
    fn polyline_markup() {
        let line = Shape::from(Polyline {
            points: vec![Point::new(1.0, 2.5), Point::new(3.0, 4.0)],
            props: PathProps::default()
                .fill(Color::none())
                .stroke(Color::named("red"))
                .stroke_width(14.0)
                .rounded(),
        });
        assert_eq!(
            line.to_string(),
            r#"<polyline points="1,2.5 3,4" fill="none" stroke="red" stroke-width="14" stroke-linecap="round" stroke-linejoin="round"/>"#
        );
    }

    #[test]
    fn text_markup_escapes_data() {
        let text = Shape::from(Text {
            position: Point::new(10.0, 20.0),
            offset: Point::new(7.0, -3.0),
            font_size: 20,
            font_family: Some("Verdana".into()),
            font_weight: Some("bold".into()),
            data: "Tom & \"Jerry\" <3 'x'".into(),
            props: PathProps::default().fill(Color::named("black")),
        });
        assert_eq!(
            text.to_string(),
            r#"<text fill="black" x="10" y="20" dx="7" dy="-3" font-size="20" font-family="Verdana" font-weight="bold">Tom &amp; &quot;Jerry&quot; &lt;3 &apos;x&apos;</text>"#
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(
            Document::new().to_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n</svg>"
        );
    }

    #[test]
    fn document_keeps_paint_order() {
        let mut doc = Document::new();
        doc.add(Polyline::default());
        doc.add(Circle {
            center: Point::default(),
            radius: 1.0,
            props: PathProps::default(),
        });
        assert!(matches!(doc.shapes()[0], Shape::Polyline(_)));
        assert!(matches!(doc.shapes()[1], Shape::Circle(_)));

        let rendered = doc.to_string();
        let polyline_at = rendered.find("<polyline").unwrap();
        let circle_at = rendered.find("<circle").unwrap();
        assert!(polyline_at < circle_at);
    }
}
