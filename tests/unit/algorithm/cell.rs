//! Tests for cell entropy, observation and neighbour narrowing

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use wavetile::TileId;
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::cell::Cell;
    use wavetile::spatial::Position;

    fn set(max_tiles: usize, indices: &[usize]) -> TileBitset {
        let mut bitset = TileBitset::new(max_tiles);
        for &i in indices {
            bitset.insert(TileId::new(i));
        }
        bitset
    }

    // Tests entropy is candidate count minus one, down to -1 when empty
    // Verified by returning the raw candidate count
    #[test]
    fn test_entropy() {
        assert_eq!(Cell::new(Position::new(0, 0), TileBitset::all(4)).entropy(), 3);
        assert_eq!(Cell::new(Position::new(0, 0), set(4, &[2])).entropy(), 0);
        assert_eq!(Cell::new(Position::new(0, 0), TileBitset::new(4)).entropy(), -1);
    }

    // Tests narrowing keeps only allowed tiles, in their original order
    // Verified by replacing candidates with the allowed set
    #[test]
    fn test_narrow_intersects() {
        let mut cell = Cell::new(Position::new(0, 0), set(6, &[0, 2, 3, 5]));
        let before = cell.candidates().clone();

        cell.narrow(&set(6, &[1, 3, 5]));

        assert!(cell.candidates().is_subset(&before));
        assert_eq!(
            cell.candidates().to_vec(),
            vec![TileId::new(3), TileId::new(5)]
        );
        assert!(!cell.is_collapsed());
    }

    // Tests narrowing to nothing is allowed and not yet an error
    // Verified by skipping the intersection when the result would be empty
    #[test]
    fn test_narrow_to_empty() {
        let mut cell = Cell::new(Position::new(0, 0), TileBitset::all(3));
        cell.narrow(&TileBitset::new(3));

        assert!(cell.is_contradiction());
        assert_eq!(cell.entropy(), -1);
        assert!(!cell.is_collapsed());
    }

    // Tests collapsed cells are frozen against narrowing
    // Verified by removing the collapsed guard in narrow
    #[test]
    fn test_narrow_collapsed_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cell = Cell::new(Position::new(0, 0), TileBitset::all(3));
        let tile = cell.observe(&mut rng).expect("has candidates");

        cell.narrow(&TileBitset::new(3));

        assert_eq!(cell.collapsed_tile(), Some(tile));
        assert_eq!(cell.entropy(), 0);
    }

    // Tests a single candidate is kept as the collapsed tile
    // Verified by picking a random id instead of a random member
    #[test]
    fn test_observe_single_candidate() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut cell = Cell::new(Position::new(1, 1), set(5, &[4]));

        let tile = cell.observe(&mut rng).expect("one candidate");

        assert_eq!(tile, TileId::new(4));
        assert!(cell.is_collapsed());
        assert_eq!(cell.candidates().to_vec(), vec![TileId::new(4)]);
    }

    // Tests observing an empty cell fails and leaves it uncollapsed
    // Verified by setting collapsed before the emptiness check
    #[test]
    fn test_observe_contradiction() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut cell = Cell::new(Position::new(2, 3), TileBitset::new(5));

        let err = cell.observe(&mut rng).unwrap_err();

        assert_eq!(err.position, Position::new(2, 3));
        assert!(!cell.is_collapsed());
        assert_eq!(cell.collapsed_tile(), None);
    }

    // Tests observation commits to one of the candidates and covers all of them
    // Verified by always choosing the first candidate
    #[test]
    fn test_observe_picks_among_candidates() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = set(6, &[1, 3, 4]);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let mut cell = Cell::new(Position::new(0, 0), candidates.clone());
            let tile = cell.observe(&mut rng).expect("has candidates");

            assert!(candidates.contains(tile));
            assert_eq!(cell.entropy(), 0);
            assert_eq!(cell.collapsed_tile(), Some(tile));
            seen.insert(tile);
        }

        assert_eq!(seen.len(), 3);
    }

    // Tests uncollapsed cells report no tile even with one candidate left
    // Verified by returning the first candidate regardless of state
    #[test]
    fn test_collapsed_tile_requires_observation() {
        let cell = Cell::new(Position::new(0, 0), set(3, &[1]));
        assert_eq!(cell.collapsed_tile(), None);
    }
}
