//! Tile traversal costs.

use std::collections::BTreeMap;

use tilepath_core::{Point, Tile};

use crate::error::{CostTableError, PathError};

/// Mapping from passable tile symbols to the positive cost of entering them.
///
/// Lookups of symbols not in the table fail; there is no fallback cost.
/// The default table maps the digits `'1'..='9'` to their numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BTreeMap<char, i32>", into = "BTreeMap<char, i32>")
)]
pub struct CostTable {
    costs: BTreeMap<Tile, i32>,
}

impl Default for CostTable {
    fn default() -> Self {
        let costs = ('1'..='9')
            .zip(1..)
            .map(|(ch, cost)| (Tile(ch), cost))
            .collect();
        Self { costs }
    }
}

impl CostTable {
    /// An empty table. Every lookup fails until entries are added.
    pub fn empty() -> Self {
        Self {
            costs: BTreeMap::new(),
        }
    }

    /// Build a table from `(symbol, cost)` pairs. Later pairs win.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CostTableError>
    where
        I: IntoIterator<Item = (char, i32)>,
    {
        let mut table = Self::empty();
        for (ch, cost) in pairs {
            table.insert(Tile(ch), cost)?;
        }
        Ok(table)
    }

    /// Set the cost of `tile`, returning the previous cost if any.
    pub fn insert(&mut self, tile: Tile, cost: i32) -> Result<Option<i32>, CostTableError> {
        if !tile.is_passable() {
            return Err(CostTableError::ImpassableSymbol(tile));
        }
        if cost <= 0 {
            return Err(CostTableError::NonPositiveCost { tile, cost });
        }
        Ok(self.costs.insert(tile, cost))
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, tile: Tile, cost: i32) -> Result<Self, CostTableError> {
        self.insert(tile, cost)?;
        Ok(self)
    }

    /// The cost of `tile`, if it has one.
    #[inline]
    pub fn get(&self, tile: Tile) -> Option<i32> {
        self.costs.get(&tile).copied()
    }

    /// The cost of entering `tile`, found at `at`.
    ///
    /// `at` only serves to locate the offending cell in the error.
    #[inline]
    pub fn cost_of(&self, tile: Tile, at: Point) -> Result<i32, PathError> {
        self.get(tile)
            .ok_or(PathError::UnknownTileSymbol { tile, at })
    }

    /// Smallest cost in the table.
    pub fn min_cost(&self) -> Option<i32> {
        self.costs.values().copied().min()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterate over `(tile, cost)` entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, i32)> + '_ {
        self.costs.iter().map(|(&t, &c)| (t, c))
    }
}

impl TryFrom<BTreeMap<char, i32>> for CostTable {
    type Error = CostTableError;

    fn try_from(map: BTreeMap<char, i32>) -> Result<Self, Self::Error> {
        Self::from_pairs(map)
    }
}

impl From<CostTable> for BTreeMap<char, i32> {
    fn from(table: CostTable) -> Self {
        table.costs.into_iter().map(|(t, c)| (t.0, c)).collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserializes_from_symbol_map() {
        let t: CostTable = serde_json::from_str(r#"{"1": 1, "~": 5}"#).unwrap();
        assert_eq!(t.get(Tile('~')), Some(5));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn deserialize_validates_entries() {
        assert!(serde_json::from_str::<CostTable>(r#"{"0": 1}"#).is_err());
        assert!(serde_json::from_str::<CostTable>(r#"{"1": 0}"#).is_err());
    }

    #[test]
    fn serializes_as_symbol_map() {
        let t = CostTable::from_pairs([('2', 2), ('1', 1)]).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"1":1,"2":2}"#);
    }
}
