// File: crates/highlow-core/src/scene.rs
// Summary: Renderer-agnostic vector scene (groups, rects, lines, paths, text) and its SVG markup.

use std::fmt::Write;

use crate::geometry::{fmt_num, PathData};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub data: PathData,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub fill: Color,
    pub bold: bool,
    /// Content is written upper-cased; not every rasterizer honours `text-transform`.
    pub uppercase: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    /// Baseline shift in em.
    pub dy: Option<f64>,
    pub anchor: TextAnchor,
    pub style: TextStyle,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub class: Option<String>,
    pub translate: Option<(f64, f64)>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(class: impl Into<String>) -> Self {
        Self { class: Some(class.into()), ..Self::default() }
    }

    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.translate = Some((dx, dy));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Depth-first search for the first group carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Group> {
        if self.class.as_deref() == Some(class) {
            return Some(self);
        }
        self.children.iter().find_map(|n| match n {
            Node::Group(g) => g.find_class(class),
            _ => None,
        })
    }

    /// Every node below this group, depth first.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            if let Node::Group(g) = child {
                out.extend(g.descendants());
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Rect(RectNode),
    Line(LineNode),
    Path(PathNode),
    Text(TextNode),
}

impl From<Group> for Node { fn from(v: Group) -> Self { Node::Group(v) } }
impl From<RectNode> for Node { fn from(v: RectNode) -> Self { Node::Rect(v) } }
impl From<LineNode> for Node { fn from(v: LineNode) -> Self { Node::Line(v) } }
impl From<PathNode> for Node { fn from(v: PathNode) -> Self { Node::Path(v) } }
impl From<TextNode> for Node { fn from(v: TextNode) -> Self { Node::Text(v) } }

/// Serialized scene ready for a rasterizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneMarkup {
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

/// The finished drawing of one chart. Built once, consumed once.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorScene {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub root: Group,
}

impl VectorScene {
    pub fn to_markup(&self) -> SceneMarkup {
        SceneMarkup { svg: self.to_svg(), width: self.width, height: self.height }
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        );
        let _ = write!(out, "<title>{}</title>", escape(&self.title));
        write_group(&mut out, &self.root);
        out.push_str("</svg>");
        out
    }
}

fn write_group(out: &mut String, g: &Group) {
    out.push_str("<g");
    if let Some(class) = &g.class {
        let _ = write!(out, r#" class="{}""#, escape(class));
    }
    if let Some((dx, dy)) = g.translate {
        let _ = write!(out, r#" transform="translate({},{})""#, fmt_num(dx), fmt_num(dy));
    }
    out.push('>');
    for child in &g.children {
        write_node(out, child);
    }
    out.push_str("</g>");
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group(g) => write_group(out, g),
        Node::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                fmt_num(r.x), fmt_num(r.y), fmt_num(r.width), fmt_num(r.height), r.fill
            );
        }
        Node::Line(l) => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt_num(l.x1), fmt_num(l.y1), fmt_num(l.x2), fmt_num(l.y2), l.stroke.color, fmt_num(l.stroke.width)
            );
        }
        Node::Path(p) => {
            let fill = p.fill.map(|c| c.to_css()).unwrap_or_else(|| "none".to_string());
            let _ = write!(out, r#"<path d="{}" fill="{}""#, p.data.to_svg_d(), fill);
            if let Some(stroke) = p.stroke {
                let _ = write!(out, r#" stroke="{}" stroke-width="{}""#, stroke.color, fmt_num(stroke.width));
            }
            out.push_str("/>");
        }
        Node::Text(t) => {
            let _ = write!(out, r#"<text x="{}" y="{}""#, fmt_num(t.x), fmt_num(t.y));
            if let Some(dy) = t.dy {
                let _ = write!(out, r#" dy="{}em""#, fmt_num(dy));
            }
            let _ = write!(
                out,
                r#" text-anchor="{}" font-size="{}" fill="{}""#,
                t.anchor.as_str(), fmt_num(t.style.size), t.style.fill
            );
            if t.style.bold {
                out.push_str(r#" font-weight="bold""#);
            }
            let content = if t.style.uppercase { t.content.to_uppercase() } else { t.content.clone() };
            let _ = write!(out, ">{}</text>", escape(&content));
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
