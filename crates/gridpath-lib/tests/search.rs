mod common;

use gridpath_lib::{
    Grid, Heuristic, PathFinder, PathResult, Position, SearchAlgorithm, SearchRun, SearchStatus,
};

use common::{assert_valid_path, grid_from, open_grid, run, DETOUR_LAYOUT, ENCLOSED_LAYOUT};

#[test]
fn five_by_five_corner_to_corner_takes_eight_steps() {
    for algorithm in SearchAlgorithm::ALL {
        let mut grid = open_grid(5, 5, Position::new(4, 4));
        let (result, _) = run(&mut grid, algorithm);

        let path = result.path().expect("open grid has a path");
        assert_eq!(path.len(), 8, "{algorithm} path length");
        assert_valid_path(&grid, path);
        for id in path.iter() {
            let position = grid[id].position();
            assert!(position.x < 5 && position.y < 5);
        }
    }
}

#[test]
fn full_middle_column_wall_blocks_every_algorithm() {
    for algorithm in SearchAlgorithm::ALL {
        let mut grid = open_grid(3, 3, Position::new(2, 0));
        for y in 0..3 {
            let id = grid.id_at(Position::new(1, y)).unwrap();
            grid.set_wall(id).unwrap();
        }

        let (result, finder) = run(&mut grid, algorithm);
        assert_eq!(result, PathResult::NotFound, "{algorithm}");
        assert!(finder.path().is_empty());
    }
}

#[test]
fn open_grid_paths_match_manhattan_distance() {
    let targets = [
        Position::new(1, 0),
        Position::new(0, 6),
        Position::new(3, 2),
        Position::new(6, 6),
        Position::new(5, 1),
    ];
    for target in targets {
        for algorithm in SearchAlgorithm::ALL {
            let mut grid = open_grid(7, 7, target);
            let (result, _) = run(&mut grid, algorithm);
            let path = result.path().expect("open grid has a path");
            assert_eq!(
                path.len(),
                Position::new(0, 0).manhattan_distance(&target),
                "{algorithm} to {target}"
            );
        }
    }
}

#[test]
fn walls_force_a_detour_and_paths_stay_valid() {
    for algorithm in SearchAlgorithm::ALL {
        let mut grid = grid_from(DETOUR_LAYOUT);
        let (result, _) = run(&mut grid, algorithm);
        let path = result.path().expect("detour exists");
        assert_eq!(path.len(), 8, "{algorithm}");
        assert_valid_path(&grid, path);
    }
}

#[test]
fn dijkstra_and_astar_agree_on_length() {
    let layouts = [
        DETOUR_LAYOUT,
        "
        S..#....
        .#.#.##.
        .#...#..
        .####.#.
        ......#T
        ",
        "
        S.#.....
        ..#.###.
        ..#...#.
        ....#.#T
        ",
    ];
    for layout in layouts {
        let mut dijkstra_grid = grid_from(layout);
        let mut astar_grid = grid_from(layout);
        let (dijkstra, _) = run(&mut dijkstra_grid, SearchAlgorithm::Dijkstra);
        let (astar, _) = run(&mut astar_grid, SearchAlgorithm::AStar);

        let dijkstra = dijkstra.into_path().expect("dijkstra path");
        let astar = astar.into_path().expect("astar path");
        assert_eq!(dijkstra.len(), astar.len());
        assert_valid_path(&dijkstra_grid, &dijkstra);
        assert_valid_path(&astar_grid, &astar);
    }
}

#[test]
fn bfs_matches_cost_ordered_searches_on_unit_costs() {
    let mut bfs_grid = grid_from(DETOUR_LAYOUT);
    let mut dijkstra_grid = grid_from(DETOUR_LAYOUT);
    let (bfs, _) = run(&mut bfs_grid, SearchAlgorithm::Bfs);
    let (dijkstra, _) = run(&mut dijkstra_grid, SearchAlgorithm::Dijkstra);
    assert_eq!(
        bfs.path().map(|path| path.len()),
        dijkstra.path().map(|path| path.len())
    );
}

#[test]
fn enclosed_target_is_not_found() {
    for algorithm in SearchAlgorithm::ALL {
        let mut grid = grid_from(ENCLOSED_LAYOUT);
        let (result, finder) = run(&mut grid, algorithm);
        assert!(!result.is_found(), "{algorithm}");
        // Every reachable open cell was expanded before giving up.
        assert_eq!(finder.visit_order().len(), 25 - 4 - 1, "{algorithm}");
    }
}

#[test]
fn start_equal_to_target_is_an_empty_found_path() {
    for algorithm in SearchAlgorithm::ALL {
        let mut grid = Grid::new(4, 4).unwrap();
        let start = grid.start();
        let mut finder = PathFinder::default();
        let result = finder
            .search(algorithm, &mut grid, start, Some(start))
            .unwrap();

        let path = result.path().expect("trivially found");
        assert!(path.is_empty());
        assert!(finder.visit_order().is_empty());
    }
}

#[test]
fn foreign_cell_handles_are_invalid_arguments() {
    let mut small = Grid::new(2, 2).unwrap();
    let big = Grid::new(6, 6).unwrap();
    let far = big.id_at(Position::new(5, 5)).unwrap();

    let mut finder = PathFinder::default();
    let start = small.start();
    let error = finder
        .search(SearchAlgorithm::Bfs, &mut small, start, Some(far))
        .unwrap_err();
    assert!(error.is_invalid_argument());
}

#[test]
fn search_leaves_display_state_behind() {
    let mut grid = open_grid(5, 5, Position::new(4, 0));
    let (result, finder) = run(&mut grid, SearchAlgorithm::Bfs);
    assert!(result.is_found());

    let start = grid.start();
    assert!(grid[start].is_visited());
    assert!(grid[start].predecessor().is_none());
    for id in finder.visit_order() {
        assert!(grid[*id].is_visited());
        assert!(grid[*id].is_queued());
    }
    let target = grid.target().unwrap();
    assert_eq!(grid[target].distance_from_start(), 4.0);
}

#[test]
fn bfs_visits_in_west_east_north_south_order() {
    let mut grid = open_grid(3, 3, Position::new(2, 2));
    let centre = grid.id_at(Position::new(1, 1)).unwrap();
    grid.set_start(centre).unwrap();

    let (_, finder) = run(&mut grid, SearchAlgorithm::Bfs);
    let order: Vec<Position> = finder
        .visit_order()
        .iter()
        .take(5)
        .map(|id| grid[*id].position())
        .collect();
    assert_eq!(
        order,
        vec![
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(1, 0),
            Position::new(1, 2),
        ]
    );
}

#[test]
fn repeated_searches_are_deterministic() {
    for algorithm in SearchAlgorithm::ALL {
        let mut grid = grid_from(DETOUR_LAYOUT);
        let (first, first_finder) = run(&mut grid, algorithm);
        let first_order = first_finder.visit_order().to_vec();
        let (second, second_finder) = run(&mut grid, algorithm);
        assert_eq!(first, second);
        assert_eq!(first_order, second_finder.visit_order());
    }
}

#[test]
fn reset_then_search_matches_a_fresh_grid() {
    for algorithm in SearchAlgorithm::ALL {
        let mut reused = grid_from(DETOUR_LAYOUT);
        run(&mut reused, SearchAlgorithm::Bfs);
        reused.reset_search_state();
        let (reused_result, reused_finder) = run(&mut reused, algorithm);

        let mut fresh = grid_from(DETOUR_LAYOUT);
        let (fresh_result, fresh_finder) = run(&mut fresh, algorithm);

        assert_eq!(reused_result, fresh_result);
        assert_eq!(reused_finder.visit_order(), fresh_finder.visit_order());
        for ((_, a), (_, b)) in reused.cells().zip(fresh.cells()) {
            assert_eq!(a.search_state(), b.search_state());
        }
    }
}

#[test]
fn astar_expands_fewer_cells_than_dijkstra() {
    let mut dijkstra_grid = open_grid(15, 15, Position::new(7, 0));
    let mut astar_grid = open_grid(15, 15, Position::new(7, 0));
    let (_, dijkstra) = run(&mut dijkstra_grid, SearchAlgorithm::Dijkstra);
    let (_, astar) = run(&mut astar_grid, SearchAlgorithm::AStar);
    // Straight along the top row: start plus seven steps.
    assert_eq!(astar.visit_order().len(), 8);
    assert!(astar.visit_order().len() < dijkstra.visit_order().len());
}

#[test]
fn euclidean_astar_still_finds_a_valid_path() {
    let mut grid = grid_from(DETOUR_LAYOUT);
    let mut finder = PathFinder::new(Heuristic::Euclidean);
    let (start, target) = (grid.start(), grid.target());
    let result = finder
        .search(SearchAlgorithm::AStar, &mut grid, start, target)
        .unwrap();
    let path = result.path().expect("detour exists");
    assert_valid_path(&grid, path);
}

#[test]
fn stepping_reaches_the_same_outcome_as_a_full_run() {
    let mut stepped = grid_from(DETOUR_LAYOUT);
    let (start, target) = (stepped.start(), stepped.target().unwrap());
    let strategy =
        gridpath_lib::finder::select_strategy(SearchAlgorithm::AStar, Heuristic::Manhattan);
    let mut search = SearchRun::new(&mut stepped, strategy.as_ref(), start, target).unwrap();

    let mut steps = 0;
    while search.step() == SearchStatus::Running {
        steps += 1;
    }
    assert_eq!(search.status(), SearchStatus::Found);
    assert!(steps >= search.visit_order().len() - 1);
    let stepped_path = search.path().expect("found");

    let mut full = grid_from(DETOUR_LAYOUT);
    let (result, _) = run(&mut full, SearchAlgorithm::AStar);
    assert_eq!(result.into_path(), Some(stepped_path));
}
