//! Tests for grid construction, row-major iteration and the text view

#[cfg(test)]
mod tests {
    use wavetile::AdjacencyRules;
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::spatial::{Direction, Grid, Position};

    fn two_tiles() -> AdjacencyRules {
        let all = ["A", "B"];
        let mut builder = AdjacencyRules::builder();
        for direction in Direction::ALL {
            builder = builder
                .allow("A", direction, all)
                .allow("B", direction, all);
        }
        builder.build().expect("valid rules")
    }

    // Tests fresh cells hold every tile and sit at their own coordinates
    // Verified by swapping row and column in Grid::new
    #[test]
    fn test_new_grid_cells() {
        let grid = Grid::new(3, &TileBitset::all(4));

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.len(), 9);
        assert!(!grid.is_empty());
        for cell in grid.iter() {
            assert_eq!(cell.entropy(), 3);
            assert!(!cell.is_collapsed());
        }

        let cell = grid.get(Position::new(2, 1)).expect("in grid");
        assert_eq!(cell.position(), Position::new(2, 1));
    }

    // Tests iteration visits rows top to bottom, each left to right
    // Verified by iterating the transposed array
    #[test]
    fn test_iteration_is_row_major() {
        let grid = Grid::new(2, &TileBitset::all(1));
        let order: Vec<Position> = grid.iter().map(|cell| cell.position()).collect();

        assert_eq!(
            order,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    // Tests out-of-grid lookups return None instead of panicking
    // Verified by clamping negative coordinates to zero
    #[test]
    fn test_get_out_of_grid() {
        let mut grid = Grid::new(2, &TileBitset::all(1));

        assert!(grid.get(Position::new(-1, 0)).is_none());
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get_mut(Position::new(0, 2)).is_none());
    }

    // Tests collapsed counts and tile lookups follow cell mutations
    // Verified by counting uncollapsed cells
    #[test]
    fn test_collapsed_count_and_tile_at() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut grid = Grid::new(2, &TileBitset::all(1));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(grid.collapsed_count(), 0);
        assert!(!grid.is_complete());

        let tile = grid
            .get_mut(Position::new(1, 1))
            .expect("in grid")
            .observe(&mut rng)
            .expect("one candidate");

        assert_eq!(grid.collapsed_count(), 1);
        assert_eq!(grid.tile_at(Position::new(1, 1)), Some(tile));
        assert_eq!(grid.tile_at(Position::new(0, 0)), None);
    }

    // Tests the text view marks undecided cells and contradictions
    // Verified by printing '?' for contradictions
    #[test]
    fn test_display_marks() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let rules = two_tiles();
        let mut grid = Grid::new(2, &TileBitset::singleton(
            rules.id("B").expect("B defined"),
            rules.tile_count(),
        ));
        let mut rng = StdRng::seed_from_u64(1);

        grid.get_mut(Position::new(0, 0))
            .expect("in grid")
            .observe(&mut rng)
            .expect("one candidate");
        grid.get_mut(Position::new(1, 1))
            .expect("in grid")
            .narrow(&TileBitset::new(rules.tile_count()));

        let text = grid.display(&rules).to_string();
        assert_eq!(text, "B ?\n? !\n");
    }
}
