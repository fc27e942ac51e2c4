use mathleship::{HitReport, Match, ShipView, ShotResult, ShotView, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::{json, Value};

#[test]
fn test_ship_view_matches_platform_shape() {
    let mut rng = SmallRng::seed_from_u64(42);
    let game = Match::new(&mut rng, &FLEET).unwrap();
    let views: Vec<ShipView> = game.board().ships().iter().map(ShipView::from).collect();

    let value = serde_json::to_value(&views).unwrap();
    let ships = value.as_array().unwrap();
    assert_eq!(ships.len(), FLEET.len());

    for (ship, &size) in ships.iter().zip(FLEET.iter()) {
        assert_eq!(ship["size"], json!(size));
        assert_eq!(ship["hitCount"], json!(0));
        let cells = ship["cellsOccupied"].as_array().unwrap();
        assert_eq!(cells.len(), size);
        for cell in cells {
            assert!(cell["row"].as_u64().unwrap() < 6);
            let column = cell["column"].as_str().unwrap();
            assert_eq!(column.len(), 1);
            assert!(("A".."G").contains(&column));
            assert_eq!(cell["hasShip"], json!(1));
            assert_eq!(cell["isHit"], json!(0));
        }
    }
}

#[test]
fn test_ship_view_reflects_damage() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = Match::new(&mut rng, &[2]).unwrap();
    let target = game.board().ships()[0].cells()[0];
    game.resolve_hit(target).unwrap();

    let view = ShipView::from(&game.board().ships()[0]);
    assert_eq!(view.hit_count, 1);
    assert_eq!(view.cells_occupied[0].is_hit, 1);
    assert_eq!(view.cells_occupied[1].is_hit, 0);
}

#[test]
fn test_shot_view_field_names() {
    let view = ShotView::from(HitReport {
        result: ShotResult::Hit,
        ship_sunk: true,
        match_won: false,
    });
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
        value,
        json!({"result": "hit", "shipSunk": true, "matchWon": false})
    );

    let view = ShotView::from(HitReport {
        result: ShotResult::AlreadyTargeted,
        ship_sunk: false,
        match_won: false,
    });
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["result"], json!("alreadyTargeted"));
}

#[test]
fn test_shot_view_parses_back() {
    let value: Value = json!({"result": "miss", "shipSunk": false, "matchWon": false});
    let view: ShotView = serde_json::from_value(value).unwrap();
    assert_eq!(view.result, ShotResult::Miss);
    assert!(!view.ship_sunk);
}
