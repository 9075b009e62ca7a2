//! Text rendering of the three artifacts (points, segments, regions).
//!
//! Formats (one record per line, `\n` terminated)
//! - points:   `<vid> <x> <y>`, ascending vertex id.
//! - segments: `<sid> <u> <v>`, `sid` from 1 in registration order.
//! - regions:  per face three lines: `<fid>`, outer ids, inner ids (empty line if no hole).
//!
//! Numbers use the shortest round-trip `Display` form of `f64`.

use std::fmt;

use super::context::GenContext;
use super::types::VertexId;

/// Default artifact file names.
pub const POINTS_FILE: &str = "point.in";
pub const SEGMENTS_FILE: &str = "segment.in";
pub const REGIONS_FILE: &str = "region.in";

/// The three artifacts, fully rendered in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    pub points: String,
    pub segments: String,
    pub regions: String,
}

impl Artifacts {
    pub fn render(ctx: &GenContext) -> Self {
        Self {
            points: PointsText(ctx).to_string(),
            segments: SegmentsText(ctx).to_string(),
            regions: RegionsText(ctx).to_string(),
        }
    }

    /// `(file name, contents)` in write order.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (POINTS_FILE, self.points.as_str()),
            (SEGMENTS_FILE, self.segments.as_str()),
            (REGIONS_FILE, self.regions.as_str()),
        ]
    }
}

pub struct PointsText<'a>(pub &'a GenContext);
pub struct SegmentsText<'a>(pub &'a GenContext);
pub struct RegionsText<'a>(pub &'a GenContext);

impl fmt::Display for PointsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, p) in self.0.points() {
            writeln!(f, "{id} {} {}", p.x, p.y)?;
        }
        Ok(())
    }
}

impl fmt::Display for SegmentsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sid, seg) in (1usize..).zip(self.0.edges().segments()) {
            writeln!(f, "{sid} {} {}", seg.u, seg.v)?;
        }
        Ok(())
    }
}

impl fmt::Display for RegionsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.0.faces() {
            writeln!(f, "{}", face.id)?;
            write_ids(f, &face.outer)?;
            write_ids(f, &face.inner)?;
        }
        Ok(())
    }
}

/// Space-separated ids on one line; an empty slice yields an empty line.
fn write_ids(f: &mut fmt::Formatter<'_>, ids: &[VertexId]) -> fmt::Result {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{id}")?;
    }
    f.write_str("\n")
}
