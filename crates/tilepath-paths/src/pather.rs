use tilepath_core::{Point, Tile, TileMap};

use crate::cost::CostTable;
use crate::distance::manhattan;
use crate::error::PathError;
use crate::neighbors::passable_neighbors;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// [`AstarPather`] over a tile map: 4-directional moves onto passable
/// tiles, priced by a [`CostTable`], estimated with Manhattan distance.
#[derive(Debug)]
pub struct GridPather<'a, M: ?Sized> {
    map: &'a M,
    costs: &'a CostTable,
}

impl<'a, M: TileMap + ?Sized> GridPather<'a, M> {
    pub fn new(map: &'a M, costs: &'a CostTable) -> Self {
        Self { map, costs }
    }

    pub fn map(&self) -> &'a M {
        self.map
    }

    pub fn costs(&self) -> &'a CostTable {
        self.costs
    }
}

impl<M: TileMap + ?Sized> Pather for GridPather<'_, M> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        passable_neighbors(self.map, p, buf);
    }
}

impl<M: TileMap + ?Sized> WeightedPather for GridPather<'_, M> {
    /// The cost of the tile being entered. A destination off the map is
    /// priced as a wall, which never has a cost.
    fn cost(&self, _from: Point, to: Point) -> Result<i32, PathError> {
        let tile = self.map.tile_at(to).unwrap_or(Tile::WALL);
        self.costs.cost_of(tile, to)
    }
}

impl<M: TileMap + ?Sized> AstarPather for GridPather<'_, M> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
