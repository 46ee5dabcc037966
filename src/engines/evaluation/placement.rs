use crate::geometry::Rect;
use crate::types::{OrientedRect, Region};
use std::cmp::Ordering;

/// Greedy skyline placement.
///
/// Each new rectangle tries to rest directly on the lowest existing top
/// surface, pushed rightward past any interfering taller stack at that
/// height. The first feasible support wins; there is no best-fit search
/// and no backtracking. The placed list is seeded with a zero-height
/// "floor" spanning the full region width at y = 0, so the region's
/// bottom edge is just another support surface.
pub struct PlacementEngine {
    region: Region,
}

impl PlacementEngine {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    fn floor(&self) -> Rect {
        Rect::new(0.0, 0.0, self.region.width, 0.0)
    }

    fn parent(&self) -> Rect {
        Rect::new(0.0, 0.0, self.region.width, self.region.height)
    }

    /// Try to place `candidate` against the current skyline.
    ///
    /// `placed` must include the floor sentinel. Returns the accepted
    /// placement, or `None` when no support surface yields a feasible
    /// trial — the candidate is unplaceable, which is a normal outcome,
    /// not an error.
    pub fn place_next(&self, candidate: &OrientedRect, placed: &[Rect]) -> Option<Rect> {
        // Support surfaces from lowest top edge to highest; stable, so
        // earlier placements win ties.
        let mut supports: Vec<usize> = (0..placed.len()).collect();
        supports.sort_by(|&i, &j| {
            placed[i]
                .top()
                .partial_cmp(&placed[j].top())
                .unwrap_or(Ordering::Equal)
        });

        for &s in &supports {
            let support = &placed[s];
            let p = support.top();
            let t = p + candidate.height;
            // Tentative left edge with the candidate right-justified
            // against the support's right edge.
            let l = support.right() - candidate.width;

            // Interference set: everything else occupying the band at
            // this level whose right edge lies strictly left of `l`.
            // The candidate's actual left edge is pushed right past the
            // rightmost of them; with no interference it rests at x = 0.
            let mut x_p = 0.0f64;
            for (i, other) in placed.iter().enumerate() {
                if i == s {
                    continue;
                }
                if other.is_within_vertical_span(p, t) && other.right() < l {
                    x_p = x_p.max(other.right());
                }
            }

            let trial = Rect::new(x_p, p, candidate.width, candidate.height);

            // Full containment: overlap with the parent region must
            // equal the trial's own area.
            if trial.overlap_area(&self.parent()) != trial.area() {
                continue;
            }

            let collides = placed
                .iter()
                .enumerate()
                .any(|(i, other)| i != s && trial.overlap_area(other) != 0.0);
            if collides {
                continue;
            }

            // First feasible support wins.
            return Some(trial);
        }

        None
    }

    /// Place a whole sequence, lowest sequence position first, dropping
    /// whatever cannot be placed. Returns the accepted placements
    /// without the floor sentinel.
    pub fn pack(&self, rects: &[OrientedRect]) -> Vec<Rect> {
        let mut ordered: Vec<&OrientedRect> = rects.iter().collect();
        ordered.sort_by_key(|r| r.position);

        let mut placed = vec![self.floor()];
        for rect in ordered {
            if let Some(accepted) = self.place_next(rect, &placed) {
                placed.push(accepted);
            }
        }

        placed.remove(0);
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(position: usize, width: f64, height: f64) -> OrientedRect {
        OrientedRect {
            position,
            width,
            height,
        }
    }

    #[test]
    fn two_rects_fill_a_3x2_region() {
        // Catalog [2x1, 1x1] in order, no flips: the 2x1 lands on the
        // floor at (0,0); the 1x1 overlaps it there, so it rests on the
        // 2x1's top surface at (0,1). Total area 2 + 1 = 3.
        let engine = PlacementEngine::new(Region {
            width: 3.0,
            height: 2.0,
        });
        let placed = engine.pack(&[rect(0, 2.0, 1.0), rect(1, 1.0, 1.0)]);

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0], Rect::new(0.0, 0.0, 2.0, 1.0));
        assert_eq!(placed[1], Rect::new(0.0, 1.0, 1.0, 1.0));
        let total: f64 = placed.iter().map(Rect::area).sum();
        assert_eq!(total, 3.0);
    }

    #[test]
    fn wider_than_region_is_unplaceable() {
        let engine = PlacementEngine::new(Region {
            width: 3.0,
            height: 2.0,
        });
        let placed = engine.pack(&[rect(0, 4.0, 1.0)]);
        assert!(placed.is_empty());
    }

    #[test]
    fn taller_than_region_is_unplaceable() {
        let engine = PlacementEngine::new(Region {
            width: 3.0,
            height: 2.0,
        });
        let placed = engine.pack(&[rect(0, 1.0, 3.0)]);
        assert!(placed.is_empty());
    }

    #[test]
    fn placements_never_overlap() {
        let engine = PlacementEngine::new(Region {
            width: 5.0,
            height: 5.0,
        });
        let placed = engine.pack(&[
            rect(0, 2.0, 1.0),
            rect(1, 3.0, 2.0),
            rect(2, 1.0, 1.0),
            rect(3, 2.0, 2.0),
            rect(4, 1.0, 3.0),
        ]);

        let parent = Rect::new(0.0, 0.0, 5.0, 5.0);
        for (i, a) in placed.iter().enumerate() {
            assert_eq!(a.overlap_area(&parent), a.area(), "{:?} escapes the region", a);
            for b in placed.iter().skip(i + 1) {
                assert_eq!(a.overlap_area(b), 0.0, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn unplaceable_rect_does_not_block_later_ones() {
        let engine = PlacementEngine::new(Region {
            width: 3.0,
            height: 2.0,
        });
        // The 4x1 is dropped; the 1x1 still lands on the floor.
        let placed = engine.pack(&[rect(0, 4.0, 1.0), rect(1, 1.0, 1.0)]);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0], Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn pack_respects_sequence_positions_not_slice_order() {
        let engine = PlacementEngine::new(Region {
            width: 3.0,
            height: 2.0,
        });
        // Same rects as the 3x2 scenario but handed over out of order.
        let placed = engine.pack(&[rect(1, 1.0, 1.0), rect(0, 2.0, 1.0)]);
        assert_eq!(placed[0], Rect::new(0.0, 0.0, 2.0, 1.0));
        assert_eq!(placed[1], Rect::new(0.0, 1.0, 1.0, 1.0));
    }
}
