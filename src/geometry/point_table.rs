use slotmap::SlotMap;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a point in a [`PointTable`].
    pub struct PointId;
}

/// Arena of shared, named-by-key points.
///
/// Figures whose endpoints are edited interactively reference table entries
/// by [`PointId`] instead of copying coordinates around; generational keys
/// keep stale references detectable after removal.
#[derive(Debug, Default)]
pub struct PointTable {
    points: SlotMap<PointId, Point2>,
}

impl PointTable {
    /// Creates a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point and returns its key.
    pub fn insert(&mut self, point: Point2) -> PointId {
        self.points.insert(point)
    }

    /// Looks up a point by key.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&Point2> {
        self.points.get(id)
    }

    /// Overwrites the point behind `id`. Returns `false` if the key is stale.
    pub fn set(&mut self, id: PointId, point: Point2) -> bool {
        if let Some(slot) = self.points.get_mut(id) {
            *slot = point;
            true
        } else {
            false
        }
    }

    /// Removes a point, returning it if the key was live.
    pub fn remove(&mut self, id: PointId) -> Option<Point2> {
        self.points.remove(id)
    }

    /// Number of live points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A coordinate given either literally or by table reference.
///
/// The two cases are explicit constructors; a coordinate is never
/// overloaded on its argument type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    /// A literal coordinate.
    Literal(Point2),
    /// A reference into a [`PointTable`].
    Ref(PointId),
}

impl Coord {
    /// Convenience literal constructor.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self::Literal(Point2::new(x, y))
    }

    /// Resolves to a concrete point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnknownPointRef`] when a `Ref` key is not
    /// live in `table`.
    pub fn resolve(&self, table: &PointTable) -> Result<Point2> {
        match self {
            Self::Literal(pt) => Ok(*pt),
            Self::Ref(id) => table
                .get(*id)
                .copied()
                .ok_or_else(|| GeometryError::UnknownPointRef.into()),
        }
    }
}

impl From<Point2> for Coord {
    fn from(pt: Point2) -> Self {
        Self::Literal(pt)
    }
}

impl From<PointId> for Coord {
    fn from(id: PointId) -> Self {
        Self::Ref(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut table = PointTable::new();
        let id = table.insert(Point2::new(1.0, 2.0));
        assert_eq!(table.get(id), Some(&Point2::new(1.0, 2.0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn set_updates_live_key() {
        let mut table = PointTable::new();
        let id = table.insert(Point2::new(0.0, 0.0));
        assert!(table.set(id, Point2::new(5.0, 5.0)));
        assert_eq!(table.get(id), Some(&Point2::new(5.0, 5.0)));
    }

    #[test]
    fn removed_key_is_stale() {
        let mut table = PointTable::new();
        let id = table.insert(Point2::new(0.0, 0.0));
        table.remove(id);
        assert!(table.get(id).is_none());
        assert!(!table.set(id, Point2::new(1.0, 1.0)));
    }

    #[test]
    fn literal_coord_resolves_without_table() {
        let table = PointTable::new();
        let pt = Coord::at(3.0, 4.0).resolve(&table).unwrap();
        assert_eq!(pt, Point2::new(3.0, 4.0));
    }

    #[test]
    fn ref_coord_resolves_through_table() {
        let mut table = PointTable::new();
        let id = table.insert(Point2::new(7.0, 8.0));
        let pt = Coord::Ref(id).resolve(&table).unwrap();
        assert_eq!(pt, Point2::new(7.0, 8.0));
    }

    #[test]
    fn stale_ref_fails_to_resolve() {
        let mut table = PointTable::new();
        let id = table.insert(Point2::new(7.0, 8.0));
        table.remove(id);
        assert!(Coord::Ref(id).resolve(&table).is_err());
    }
}
