//! Loading skeleton layouts. Stateless: a variant (and a line count for the
//! repeating variants) maps to an ordered list of placeholder shapes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LINES: usize = 3;
pub const MAX_LINES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkeletonVariant {
    Text,
    Card,
    Profile,
    Resume,
    List,
}

impl FromStr for SkeletonVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(SkeletonVariant::Text),
            "card" => Ok(SkeletonVariant::Card),
            "profile" => Ok(SkeletonVariant::Profile),
            "resume" => Ok(SkeletonVariant::Resume),
            "list" => Ok(SkeletonVariant::List),
            other => Err(format!("Unknown skeleton variant '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Block,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonShape {
    pub kind: ShapeKind,
    /// Percentage of the container width.
    pub width_percent: u8,
    pub height_px: u16,
}

const fn line(width_percent: u8) -> SkeletonShape {
    SkeletonShape {
        kind: ShapeKind::Line,
        width_percent,
        height_px: 16,
    }
}

const fn heading(width_percent: u8) -> SkeletonShape {
    SkeletonShape {
        kind: ShapeKind::Line,
        width_percent,
        height_px: 24,
    }
}

const fn block(height_px: u16) -> SkeletonShape {
    SkeletonShape {
        kind: ShapeKind::Block,
        width_percent: 100,
        height_px,
    }
}

const fn circle(size_px: u16) -> SkeletonShape {
    SkeletonShape {
        kind: ShapeKind::Circle,
        width_percent: 0,
        height_px: size_px,
    }
}

/// Paragraph lines, the last one shorter.
fn text_lines(lines: usize) -> impl Iterator<Item = SkeletonShape> {
    (0..lines).map(move |i| if i + 1 == lines && lines > 1 { line(60) } else { line(100) })
}

/// Shapes for `variant`. `lines` applies to `text` and `list` and is clamped to `1..=MAX_LINES`.
pub fn layout(variant: SkeletonVariant, lines: usize) -> Vec<SkeletonShape> {
    let lines = lines.clamp(1, MAX_LINES);
    match variant {
        SkeletonVariant::Text => text_lines(lines).collect(),
        SkeletonVariant::Card => {
            let mut shapes = vec![block(192), heading(75)];
            shapes.extend(text_lines(2));
            shapes
        }
        SkeletonVariant::Profile => vec![circle(64), heading(50), line(33)],
        SkeletonVariant::Resume => {
            let mut shapes = vec![heading(50), line(33), line(40)];
            for _ in 0..3 {
                shapes.push(heading(25));
                shapes.extend(text_lines(3));
            }
            shapes
        }
        SkeletonVariant::List => (0..lines)
            .flat_map(|_| [circle(40), line(75)])
            .collect(),
    }
}
