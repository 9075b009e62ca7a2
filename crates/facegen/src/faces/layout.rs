//! Face centers on a jittered square grid.
//!
//! Cells are `3 * margin` apart with `margin = 2 * radius_mean +
//! radius_variation`, and each center moves at most `margin` per axis. This
//! makes overlap unlikely but is not a collision check.

use rand::Rng;

use super::types::Point;
use crate::rng::uniform;

/// `face_count` centers in face-id order (row-major over the grid).
pub fn layout_centers<R: Rng>(
    rng: &mut R,
    face_count: u32,
    radius_mean: f64,
    radius_variation: f64,
) -> Vec<Point> {
    if face_count == 0 {
        return Vec::new();
    }
    let grid = (face_count as f64).sqrt().ceil() as u32;
    let margin = 2.0 * radius_mean + radius_variation;
    let pitch = 3.0 * margin;
    (0..face_count)
        .map(|i| {
            let gx = (i % grid) as f64;
            let gy = (i / grid) as f64;
            let cx = (gx + 0.5) * pitch + uniform(rng, -margin, margin);
            let cy = (gy + 0.5) * pitch + uniform(rng, -margin, margin);
            Point::new(cx, cy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn empty_layout() {
        let mut rng = seeded(1);
        assert!(layout_centers(&mut rng, 0, 6.0, 3.0).is_empty());
    }

    #[test]
    fn centers_stay_in_their_cells() {
        let mut rng = seeded(5);
        let (mean, var) = (6.0, 3.0);
        let margin = 2.0 * mean + var;
        let pitch = 3.0 * margin;
        let centers = layout_centers(&mut rng, 10, mean, var);
        assert_eq!(centers.len(), 10);
        // 10 faces -> 4x4 grid, row-major.
        for (i, c) in centers.iter().enumerate() {
            let gx = (i % 4) as f64;
            let gy = (i / 4) as f64;
            assert!((c.x - (gx + 0.5) * pitch).abs() <= margin + 1e-12);
            assert!((c.y - (gy + 0.5) * pitch).abs() <= margin + 1e-12);
        }
    }

    #[test]
    fn neighbouring_centers_keep_clearance() {
        let mut rng = seeded(9);
        let (mean, var) = (6.0, 3.0);
        let centers = layout_centers(&mut rng, 9, mean, var);
        // Worst case: adjacent cells jitter towards each other by `margin` each.
        let margin = 2.0 * mean + var;
        for (i, a) in centers.iter().enumerate() {
            for b in &centers[i + 1..] {
                assert!((a - b).norm() >= margin - 1e-9);
            }
        }
    }
}
