use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::{Point, TileGrid, TileMap};
use tilepath_paths::{AstarSearch, CostTable, GridPather, find_path, passable_neighbors};

fn random_grid(rng: &mut StdRng) -> TileGrid {
    let w = rng.random_range(1..9);
    let h = rng.random_range(1..9);
    let rows: Vec<String> = (0..h)
        .map(|_| {
            (0..w)
                .map(|_| {
                    if rng.random_bool(0.25) {
                        '0'
                    } else {
                        char::from(b'1' + rng.random_range(0..3u8))
                    }
                })
                .collect()
        })
        .collect();
    TileGrid::from_rows(rows).unwrap()
}

fn random_point(rng: &mut StdRng, g: &TileGrid) -> Point {
    Point::new(rng.random_range(0..g.width()), rng.random_range(0..g.height()))
}

/// Exhaustive uniform-cost search with the same move and cost rules.
fn cheapest_cost(g: &TileGrid, costs: &CostTable, start: Point, goal: Point) -> Option<i32> {
    let mut best: HashMap<Point, i32> = HashMap::from([(start, 0)]);
    let mut open = BinaryHeap::from([Reverse((0, start))]);
    while let Some(Reverse((c, q))) = open.pop() {
        if q == goal {
            return Some(c);
        }
        if best.get(&q).is_some_and(|&b| c > b) {
            continue;
        }
        let mut nb = Vec::new();
        passable_neighbors(g, q, &mut nb);
        for n in nb {
            let nc = c + costs.get(g.tile_at(n).unwrap()).unwrap();
            if best.get(&n).is_none_or(|&b| nc < b) {
                best.insert(n, nc);
                open.push(Reverse((nc, n)));
            }
        }
    }
    None
}

#[test]
fn astar_matches_exhaustive_search_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(0x7173_7061);
    let costs = CostTable::default();
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        let start = random_point(&mut rng, &g);
        let goal = random_point(&mut rng, &g);
        let path = find_path(&g, &costs, start, goal).unwrap();

        if start == goal {
            assert_eq!(path.steps, vec![start]);
            continue;
        }
        match cheapest_cost(&g, &costs, start, goal) {
            None => assert!(path.is_empty(), "route found on unreachable goal\n{g}"),
            Some(expected) => {
                assert_eq!(path.cost, expected, "suboptimal route\n{g}");
                assert_eq!(path.start(), Some(start));
                assert_eq!(path.goal(), Some(goal));
                let mut total = 0;
                for pair in path.steps.windows(2) {
                    let mut nb = Vec::new();
                    passable_neighbors(&g, pair[0], &mut nb);
                    assert!(nb.contains(&pair[1]));
                    total += costs.get(g.tile_at(pair[1]).unwrap()).unwrap();
                }
                assert_eq!(total, path.cost);
            }
        }
    }
}

#[test]
fn path_cost_equals_reached_cost_of_goal() {
    let mut rng = StdRng::seed_from_u64(42);
    let costs = CostTable::default();
    for _ in 0..100 {
        let g = random_grid(&mut rng);
        let start = random_point(&mut rng, &g);
        let goal = random_point(&mut rng, &g);
        let pather = GridPather::new(&g, &costs);
        let mut search = AstarSearch::new(&pather, start, goal);
        let path = search.run().unwrap();
        if !path.is_empty() {
            assert_eq!(Some(path.cost), search.reached_cost(goal));
        }
    }
}
