use std::fs;
use std::path::Path;

use gridtown::{Building, Cell, Config, Session};

fn config_saving_to(path: &Path) -> Config {
    Config {
        save_path: path.to_path_buf(),
        ..Config::default()
    }
}

fn assert_all_grass_except(session: &Session, exceptions: &[(u32, u32, Cell)]) {
    let (width, height) = session.grid().dimensions();
    for y in 0..height {
        for x in 0..width {
            let expected = exceptions
                .iter()
                .find(|(ex, ey, _)| (*ex, *ey) == (x, y))
                .map_or(Cell::Grass, |(_, _, cell)| *cell);
            assert_eq!(session.grid().get(x, y).unwrap(), expected, "at ({x}, {y})");
        }
    }
}

#[test]
fn starts_with_house_selected_on_a_default_grid() {
    let session = Session::new(&Config::default()).unwrap();
    assert_eq!(session.selected(), Building::House);
    assert_eq!(session.grid().dimensions(), (20, 15));
    assert_all_grass_except(&session, &[]);
}

#[test]
fn number_keys_select_building_types() {
    let mut session = Session::new(&Config::default()).unwrap();

    session.handle_key('2').unwrap();
    assert_eq!(session.selected(), Building::Shop);
    session.handle_key('3').unwrap();
    assert_eq!(session.selected(), Building::Factory);
    session.handle_key('1').unwrap();
    assert_eq!(session.selected(), Building::House);

    // Unbound keys neither fail nor change the selection.
    session.handle_key('9').unwrap();
    session.handle_key('q').unwrap();
    assert_eq!(session.selected(), Building::House);
}

#[test]
fn pointer_down_places_the_selected_building() {
    let mut session = Session::new(&Config::default()).unwrap();

    session.handle_key('2').unwrap();
    session.handle_pointer_down((65, 97));

    assert_all_grass_except(&session, &[(2, 3, Cell::Shop)]);
}

#[test]
fn clicks_outside_the_grid_are_dropped() {
    let mut session = Session::new(&Config::default()).unwrap();

    // Right of, below, and left of the 20x15 grid at 32px cells.
    session.handle_pointer_down((20 * 32, 10));
    session.handle_pointer_down((10, 15 * 32));
    session.handle_pointer_down((-5, 10));
    session.handle_pointer_down((i32::MAX, i32::MAX));

    assert_all_grass_except(&session, &[]);
}

#[test]
fn save_and_load_round_trip_through_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_saving_to(&dir.path().join("city_save.json"));

    let mut session = Session::new(&config).unwrap();
    session.handle_pointer_down((65, 97));
    session.handle_key('s').unwrap();

    let mut restored = Session::new(&config).unwrap();
    assert_all_grass_except(&restored, &[]);
    restored.handle_key('l').unwrap();

    assert_all_grass_except(&restored, &[(2, 3, Cell::House)]);
}

#[test]
fn loading_with_no_save_file_resets_to_a_default_grid() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_saving_to(&dir.path().join("missing.json"));

    let mut session = Session::new(&config).unwrap();
    session.handle_pointer_down((0, 0));
    session.handle_key('l').unwrap();

    assert_eq!(session.grid().dimensions(), (20, 15));
    assert_all_grass_except(&session, &[]);
}

#[test]
fn failed_load_keeps_the_current_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("damaged.json");
    fs::write(&path, "{{{ definitely not a grid").unwrap();

    let mut session = Session::new(&config_saving_to(&path)).unwrap();
    session.handle_pointer_down((65, 97));

    assert!(session.handle_key('l').is_err());
    assert_all_grass_except(&session, &[(2, 3, Cell::House)]);
}

#[test]
fn save_failure_leaves_the_grid_intact() {
    let dir = tempfile::tempdir().unwrap();
    // Saving onto a directory path fails with an I/O error.
    let mut session = Session::new(&config_saving_to(dir.path())).unwrap();
    session.handle_pointer_down((65, 97));

    assert!(session.handle_key('s').is_err());
    assert_all_grass_except(&session, &[(2, 3, Cell::House)]);
}
