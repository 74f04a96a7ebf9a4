use bitplane::BitGrid;
use bitplane::tools::{grid_stats, load_grid, save_grid};
use tempfile::tempdir;

#[test]
fn png_round_trip_preserves_grid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.png");

    let mut grid = BitGrid::checkerboard(37, 21, true).unwrap();
    grid.set_area(3, 5, 10, 4, Some(true)).unwrap();
    save_grid(&grid, &path).unwrap();

    let loaded = load_grid(&path, Some(128)).unwrap();
    assert_eq!(loaded, grid);
}

#[test]
fn otsu_threshold_recovers_two_tone_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stripe.png");

    let mut grid = BitGrid::new(16, 16).unwrap();
    grid.set_area(0, 0, 16, 8, Some(true)).unwrap();
    save_grid(&grid, &path).unwrap();

    let loaded = load_grid(&path, None).unwrap();
    let stats = grid_stats(&loaded);
    assert_eq!(stats.set_cells, 128);
    assert_eq!(loaded, grid);
}
