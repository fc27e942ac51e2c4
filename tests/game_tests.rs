use mathleship::{
    Coord, GameError, Match, MatchPhase, ShotResult, FLEET, GRID_SIZE, TOTAL_FLEET_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_default_fleet_always_places() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Match::new(&mut rng, &FLEET).unwrap();
        assert_eq!(game.board().occupied_cells(), TOTAL_FLEET_CELLS);
        assert_eq!(game.board().ships().len(), FLEET.len());
        assert_eq!(game.phase(), MatchPhase::InPlay);
    }
}

#[test]
fn test_two_cell_ship_sinks_on_second_hit() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Match::new(&mut rng, &[2, 1]).unwrap();
    let cells: Vec<Coord> = game.board().ships()[0].cells().to_vec();

    let first = game.resolve_hit(cells[0]).unwrap();
    assert_eq!(first.result, ShotResult::Hit);
    assert!(!first.ship_sunk);
    assert!(!first.match_won);

    let second = game.resolve_hit(cells[1]).unwrap();
    assert_eq!(second.result, ShotResult::Hit);
    assert!(second.ship_sunk);
    // the single-cell ship is still afloat
    assert!(!second.match_won);
    assert_eq!(game.phase(), MatchPhase::InPlay);
}

#[test]
fn test_miss_changes_nothing_but_targeting() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Match::new(&mut rng, &[1]).unwrap();
    let water = (0..GRID_SIZE)
        .flat_map(|r| (0..GRID_SIZE).map(move |c| Coord::new(r, c)))
        .find(|&c| !game.board().is_occupied(c))
        .unwrap();

    let report = game.resolve_hit(water).unwrap();
    assert_eq!(report.result, ShotResult::Miss);
    assert!(!report.ship_sunk);
    assert!(!report.match_won);
    assert!(game.board().is_targeted(water));

    let repeat = game.resolve_hit(water).unwrap();
    assert_eq!(repeat.result, ShotResult::AlreadyTargeted);
}

#[test]
fn test_repeat_shot_does_not_advance_state() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = Match::new(&mut rng, &FLEET).unwrap();
    let target = game.board().ships()[0].cells()[0];

    assert_eq!(game.resolve_hit(target).unwrap().result, ShotResult::Hit);
    assert_eq!(game.shots_taken(), 1);

    let repeat = game.resolve_hit(target).unwrap();
    assert_eq!(repeat.result, ShotResult::AlreadyTargeted);
    assert!(!repeat.ship_sunk);
    assert!(!repeat.match_won);
    assert_eq!(game.shots_taken(), 1);
    assert_eq!(game.board().ships()[0].hit_count(), 1);
}

#[test]
fn test_match_won_and_finished() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut game = Match::new(&mut rng, &[2]).unwrap();
    let cells: Vec<Coord> = game.board().ships()[0].cells().to_vec();

    assert!(!game.resolve_hit(cells[0]).unwrap().match_won);
    let winning = game.resolve_hit(cells[1]).unwrap();
    assert!(winning.ship_sunk);
    assert!(winning.match_won);
    assert_eq!(game.phase(), MatchPhase::Won);

    // any further shot is a caller error, state unchanged
    assert_eq!(
        game.resolve_hit(Coord::new(0, 0)).unwrap_err(),
        GameError::MatchAlreadyFinished
    );
    assert_eq!(
        game.resolve_hit(cells[0]).unwrap_err(),
        GameError::MatchAlreadyFinished
    );
    assert_eq!(game.shots_taken(), 2);
}

#[test]
fn test_match_state_is_debuggable() {
    let mut rng = SmallRng::seed_from_u64(13);
    let game = Match::new(&mut rng, &FLEET).unwrap();
    let dump = format!("{:?}", game);
    assert!(dump.contains("phase: InPlay"));
    assert!(format!("{:?}", game.board()).contains("ships"));
}

#[test]
fn test_unplaceable_fleet_is_exhausted() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Match::new(&mut rng, &[7]).unwrap_err(),
        GameError::PlacementExhausted { length: 7 }
    );
}

#[test]
fn test_out_of_bounds_shot_does_not_end_match() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut game = Match::new(&mut rng, &FLEET).unwrap();
    assert_eq!(
        game.resolve_hit(Coord::new(0, GRID_SIZE)).unwrap_err(),
        GameError::OutOfBounds {
            row: 0,
            col: GRID_SIZE
        }
    );
    // match keeps playing
    assert_eq!(game.phase(), MatchPhase::InPlay);
    assert!(game.resolve_hit(Coord::new(0, 0)).is_ok());
}
