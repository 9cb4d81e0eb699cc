// File: crates/highlow-core/src/axis.rs
// Summary: Axis model (orientation, ticks, tick styling) and its conversion into scene groups.

use crate::geometry::PathData;
use crate::scene::{Group, LineNode, PathNode, Stroke, TextAnchor, TextNode, TextStyle};
use crate::theme::Theme;

/// Gap between a tick mark and its label, in pixels.
pub const TICK_PADDING: f64 = 3.0;
/// Axis label font size, in pixels.
pub const LABEL_SIZE: f64 = 9.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// One labelled position, already in pixels along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub ticks: Vec<AxisTick>,
    /// Signed tick length; negative values reach back across the plot as gridlines.
    /// Zero draws no tick mark at all.
    pub tick_size: f64,
    /// Pixel extent of the baseline, `None` to leave it out.
    pub domain: Option<f64>,
}

impl Axis {
    pub fn new(orientation: Orientation, ticks: Vec<AxisTick>) -> Self {
        Self { orientation, ticks, tick_size: 6.0, domain: None }
    }

    pub fn with_tick_size(mut self, size: f64) -> Self {
        self.tick_size = size;
        self
    }

    pub fn with_domain(mut self, length: f64) -> Self {
        self.domain = Some(length);
        self
    }

    fn class(&self) -> &'static str {
        match self.orientation {
            Orientation::Bottom => "x-axis",
            Orientation::Left => "y-axis",
        }
    }

    /// Lay the axis out at the origin of its own group; callers translate it into place.
    pub fn to_group(&self, theme: &Theme) -> Group {
        let mut group = Group::with_class(self.class());
        let stroke = Stroke::new(theme.grid, 1.0);

        if let Some(length) = self.domain {
            let data = match self.orientation {
                Orientation::Bottom => PathData::new().move_to(0.0, 0.0).h_to(length),
                Orientation::Left => PathData::new().move_to(0.0, 0.0).v_to(length),
            };
            group.push(PathNode { data, fill: None, stroke: Some(stroke) });
        }

        let style = TextStyle { size: LABEL_SIZE, fill: theme.axis_label, bold: false, uppercase: true };
        let label_gap = self.tick_size.max(0.0) + TICK_PADDING;

        for tick in &self.ticks {
            let (mut tick_group, line, text) = match self.orientation {
                Orientation::Bottom => (
                    Group::with_class("tick").translated(tick.offset, 0.0),
                    LineNode { x1: 0.0, y1: 0.0, x2: 0.0, y2: self.tick_size, stroke },
                    TextNode {
                        x: 0.0,
                        y: label_gap,
                        dy: Some(0.71),
                        anchor: TextAnchor::Middle,
                        style,
                        content: tick.label.clone(),
                    },
                ),
                Orientation::Left => (
                    Group::with_class("tick").translated(0.0, tick.offset),
                    LineNode { x1: 0.0, y1: 0.0, x2: -self.tick_size, y2: 0.0, stroke },
                    TextNode {
                        x: -label_gap,
                        y: 0.0,
                        dy: Some(0.32),
                        anchor: TextAnchor::End,
                        style,
                        content: tick.label.clone(),
                    },
                ),
            };
            if self.tick_size != 0.0 {
                tick_group.push(line);
            }
            tick_group.push(text);
            group.push(tick_group);
        }
        group
    }
}
