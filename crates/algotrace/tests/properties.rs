//! Cross-crate properties of generated traces.

use algotrace::paths::{astar, bfs, bidirectional, cc, dfs, dijkstra, greedy, jps, octile};
use algotrace::{
    AlgorithmKind, Category, GridArena, Input, MazeConfig, MazeGen, MazeKind, PathfindingStep,
    Point, Step, Timed, TraceConfig, distribute_execution_time, generate,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn cfg() -> TraceConfig {
    TraceConfig::unbenchmarked()
}

fn last(steps: &[PathfindingStep]) -> &PathfindingStep {
    steps.last().expect("a trace always has a final step")
}

/// Solvable unweighted grids of a few shapes, from the maze generators.
fn sample_grids() -> Vec<GridArena> {
    let mut grids = vec![GridArena::new(12, 20).unwrap()];
    let sparse = MazeConfig {
        wall_density: 0.2,
        ..MazeConfig::default()
    };
    for seed in 0..6 {
        let mut mg = MazeGen::with_config(StdRng::seed_from_u64(seed), sparse.clone());
        for (kind, rows, cols) in [
            (MazeKind::RandomWalls, 15, 25),
            (MazeKind::RecursiveDivision, 18, 24),
            (MazeKind::Kruskal, 13, 21),
        ] {
            let maze = mg.generate(kind, rows, cols).unwrap();
            if maze.report.solvable {
                grids.push(maze.grid);
            }
        }
    }
    grids
}

#[test]
fn optimal_searches_agree_on_length() {
    for g in sample_grids() {
        let d = dijkstra::generate(&g, &cfg());
        let a = astar::generate(&g, &cfg());
        let j = jps::generate(&g, &cfg());
        let (d, a, j) = (last(&d), last(&a), last(&j));

        assert!(d.path.is_some(), "dijkstra failed on\n{g}");
        assert_eq!(d.stats.path_length, a.stats.path_length, "A* on\n{g}");
        assert_eq!(d.stats.path_length, j.stats.path_length, "JPS on\n{g}");
        assert!((d.stats.path_cost - a.stats.path_cost).abs() < 1e-9);
        assert!((d.stats.path_cost - j.stats.path_cost).abs() < 1e-9);
    }
}

#[test]
fn bidirectional_matches_bfs() {
    for g in sample_grids() {
        let b = bfs::generate(&g, &cfg());
        let bi = bidirectional::generate(&g, &cfg());
        assert_eq!(
            last(&b).stats.path_length,
            last(&bi).stats.path_length,
            "on\n{g}"
        );
    }
}

#[test]
fn every_path_is_walkable() {
    for g in sample_grids() {
        let paths = [
            bfs::find_path(&g),
            dfs::find_path(&g),
            dijkstra::find_path(&g),
            astar::find_path(&g),
            greedy::find_path(&g),
            bidirectional::find_path(&g),
            jps::find_path(&g),
        ];
        for path in paths {
            let path = path.expect("solvable grid");
            assert_eq!(path.first(), Some(&g.start()));
            assert_eq!(path.last(), Some(&g.end()));
            for w in path.windows(2) {
                let d = w[1] - w[0];
                assert!(d.row.abs() <= 1 && d.col.abs() <= 1 && d != Point::ZERO);
                assert!(g.is_passable(w[1]));
            }
        }
    }
}

#[test]
fn octile_never_overestimates() {
    let g = GridArena::new(9, 17).unwrap();
    for p in [Point::new(0, 0), Point::new(8, 16), Point::new(3, 11), Point::new(4, 4)] {
        let mut probe = g.clone();
        probe.move_end(p).ok();
        if probe.end() != p {
            continue;
        }
        let steps = dijkstra::generate(&probe, &cfg());
        let best = last(&steps).stats.path_cost;
        assert!(octile(probe.start(), p) <= best + 1e-9);
    }
}

#[test]
fn separated_start_visits_its_whole_component() {
    let text = "\
.....#......
.S...#......
.....#...E..
.....#......";
    let g = GridArena::parse(text).unwrap();
    let size = cc::component_size(&g, g.start());
    assert_eq!(size, 20);

    for kind in [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::AStar,
        AlgorithmKind::GreedyBestFirst,
    ] {
        let steps = generate(kind, Input::Grid(&g), &cfg()).unwrap();
        let end = steps.last().unwrap().as_pathfinding().unwrap();
        assert_eq!(end.message, "No path found", "{kind}");
        assert!(end.path.is_none());
        assert_eq!(end.stats.nodes_visited, size, "{kind}");
    }
}

#[test]
fn traces_share_one_snapshot_of_the_grid() {
    let mut g = GridArena::new(8, 12).unwrap();
    let steps = astar::generate(&g, &cfg());
    g.set_wall(Point::new(0, 0)).unwrap();
    assert!(steps.iter().all(|s| !s.grid.is_wall(Point::new(0, 0))));
    assert!(
        steps
            .windows(2)
            .all(|w| std::rc::Rc::ptr_eq(&w[0].grid, &w[1].grid))
    );
}

#[test]
fn visited_only_grows() {
    for g in sample_grids().into_iter().take(4) {
        for kind in AlgorithmKind::by_category(Category::Pathfinding) {
            let steps = generate(kind, Input::Grid(&g), &cfg()).unwrap();
            let mut prev = 0;
            for s in &steps {
                let s = s.as_pathfinding().unwrap();
                assert!(s.visited.len() >= prev, "{kind}");
                prev = s.visited.len();
            }
            let with_path = steps
                .iter()
                .filter(|s| s.as_pathfinding().is_some_and(|p| p.path.is_some()))
                .count();
            assert_eq!(with_path, 1, "{kind}");
        }
    }
}

#[test]
fn every_maze_is_solvable() {
    let sizes = [(10, 10), (21, 21), (30, 45), (50, 80), (61, 61)];
    for kind in MazeKind::ALL {
        for (rows, cols) in sizes {
            for seed in 0..12 {
                let maze = MazeGen::new(StdRng::seed_from_u64(seed))
                    .generate(kind, rows, cols)
                    .unwrap();
                assert!(maze.report.solvable, "{kind} {rows}x{cols} seed {seed}");
                assert!(
                    bfs::find_path(&maze.grid).is_some(),
                    "{kind} {rows}x{cols} seed {seed}"
                );
            }
        }
    }
}

#[test]
fn distributed_times_climb_to_the_average() {
    let mut steps = generate(
        AlgorithmKind::MergeSort,
        Input::Values(&[9, 4, 7, 1, 8, 2]),
        &cfg(),
    )
    .unwrap();
    distribute_execution_time(&mut steps, 2.5);
    assert_eq!(steps[0].execution_time(), 0.0);
    assert_eq!(steps.last().unwrap().execution_time(), 2.5);
    assert!(
        steps
            .windows(2)
            .all(|w| w[0].execution_time() <= w[1].execution_time())
    );
}

#[test]
fn bubble_sort_reference_trace() {
    let steps = generate(AlgorithmKind::BubbleSort, Input::Values(&[5, 3, 8, 1]), &cfg()).unwrap();
    let Some(Step::Sorting(end)) = steps.last() else {
        panic!("expected a sorting step");
    };
    assert_eq!(end.array, vec![1, 3, 5, 8]);
    assert_eq!(end.sorted, Some(vec![0, 1, 2, 3]));
    assert_eq!(end.stats.comparisons, 6);
    assert_eq!(end.stats.swaps, 4);
}

proptest! {
    #[test]
    fn sorts_through_the_facade(values in prop::collection::vec(any::<i16>(), 0..48)) {
        let values: Vec<i32> = values.into_iter().map(i32::from).collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        for kind in AlgorithmKind::by_category(Category::Sorting) {
            let steps = generate(kind, Input::Values(&values), &cfg()).unwrap();
            let end = steps.last().and_then(Step::as_sorting).unwrap();
            prop_assert_eq!(&end.array, &expected, "{}", kind);
        }
    }
}
