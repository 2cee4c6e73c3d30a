use crate::game::star::Star;

/// Axis-aligned box in canvas pixels, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Result of one lifecycle pass over the falling stars.
#[derive(Debug, Default)]
pub struct Sweep {
    pub kept: Vec<Star>,
    pub caught: u32,
    pub missed: u32,
}

/// Moves every star one frame and sorts it into kept, caught or missed.
///
/// A catch wins over a miss when both would apply in the same frame. The
/// input list is consumed so nothing is removed from a list being walked.
pub fn sweep(stars: Vec<Star>, basket: &Bounds, floor: i32) -> Sweep {
    let mut out = Sweep {
        kept: Vec::with_capacity(stars.len()),
        ..Sweep::default()
    };
    for mut star in stars {
        star.fall();
        if star.bounds().intersects(basket) {
            log::trace!("caught star at x={}", star.x);
            out.caught += 1;
        } else if star.y > floor {
            log::trace!("missed star at x={}", star.x);
            out.missed += 1;
        } else {
            out.kept.push(star);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STAR_COLORS;

    fn star(x: i32, y: i32, size: i32, speed: i32) -> Star {
        Star { x, y, size, speed, color: STAR_COLORS[0] }
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Bounds::new(0, 0, 10, 10);
        assert!(!a.intersects(&Bounds::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Bounds::new(0, 10, 10, 10)));
        assert!(a.intersects(&Bounds::new(9, 9, 10, 10)));
    }

    #[test]
    fn containment_intersects() {
        let outer = Bounds::new(0, 0, 100, 20);
        let inner = Bounds::new(40, 5, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn sweep_partitions_stars() {
        let basket = Bounds::new(0, 550, 100, 20);
        let stars = vec![
            star(10, 530, 20, 5),  // reaches the basket
            star(300, 598, 10, 5), // drops off the bottom
            star(500, 100, 15, 3), // still falling
        ];
        let out = sweep(stars, &basket, 600);
        assert_eq!(out.caught, 1);
        assert_eq!(out.missed, 1);
        assert_eq!(out.kept, vec![star(500, 103, 15, 3)]);
    }

    #[test]
    fn catch_beats_miss() {
        // A basket hanging past the floor: the star is both overlapping
        // and below the floor after moving.
        let basket = Bounds::new(0, 590, 100, 40);
        let out = sweep(vec![star(0, 598, 20, 5)], &basket, 600);
        assert_eq!(out.caught, 1);
        assert_eq!(out.missed, 0);
        assert!(out.kept.is_empty());
    }

    #[test]
    fn top_edge_on_floor_is_kept() {
        let basket = Bounds::new(700, 550, 100, 20);
        let out = sweep(vec![star(0, 595, 10, 5)], &basket, 600);
        assert_eq!(out.missed, 0);
        assert_eq!(out.kept.len(), 1);
    }
}
