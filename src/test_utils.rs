use nalgebra::Point;

use crate::Precision;

pub fn make_line<const D: usize>(coords: Vec<[Precision; D]>) -> Vec<Point<Precision, D>> {
    coords.into_iter().map(Point::from).collect()
}
