// File: crates/highlow-core/src/geometry.rs
// Summary: Lightweight geometry helpers: points, path commands and number formatting for markup.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    HorizontalTo(f64),
    VerticalTo(f64),
    CubicTo(Point, Point, Point),
    Close,
}

/// Ordered list of path commands; serializes to an SVG `d` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn h_to(mut self, x: f64) -> Self {
        self.commands.push(PathCommand::HorizontalTo(x));
        self
    }

    pub fn v_to(mut self, y: f64) -> Self {
        self.commands.push(PathCommand::VerticalTo(y));
        self
    }

    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            // Writing into a String cannot fail.
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L{},{}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::HorizontalTo(x) => write!(d, "H{}", fmt_num(x)),
                PathCommand::VerticalTo(y) => write!(d, "V{}", fmt_num(y)),
                PathCommand::CubicTo(c1, c2, p) => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_num(c1.x), fmt_num(c1.y), fmt_num(c2.x), fmt_num(c2.y), fmt_num(p.x), fmt_num(p.y)
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Up to three decimals, trailing zeros dropped, never `-0`.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut s = format!("{:.3}", rounded);
    while s.ends_with('0') { s.pop(); }
    if s.ends_with('.') { s.pop(); }
    s
}
