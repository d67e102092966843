//! End-to-end tests of the demo scenario, including configuration loading.

use std::fs;

use player_events::game;
use player_events::observers::achievement::TAKE_DAMAGE_UNLOCKED;
use player_events::resources::gameconfig::GameConfig;

#[test]
fn demo_reports_health_after_each_hit() {
    for start in [100, 8, 0] {
        let mut config = GameConfig::new();
        config.health = start;
        let report = game::run(&config);

        assert_eq!(report.final_health, start - 8);
        assert_eq!(
            report.ui_popups,
            [
                format!("[UI]: You have {} health!", start - 5),
                format!("[UI]: You have {} health!", start - 8),
            ]
        );
        assert_eq!(report.achievements, [TAKE_DAMAGE_UNLOCKED]);
        assert_eq!(report.removals, [true, true, false]);
        assert_eq!(report.remaining_observers, 0);
    }
}

#[test]
fn demo_runs_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    fs::write(
        &path,
        "[player]\nhealth = 30\ncoins = 2\n\n[demo]\nfirst_hit = 10\nsecond_hit = 25\n",
    )
    .unwrap();

    let mut config = GameConfig::with_path(&path);
    config.load_from_file().unwrap();
    let report = game::run(&config);

    assert_eq!(report.final_health, -5);
    assert_eq!(
        report.ui_popups,
        ["[UI]: You have 20 health!", "[UI]: You have -5 health!"]
    );
}
