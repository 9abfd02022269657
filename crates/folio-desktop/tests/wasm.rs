//! Browser tests for the wasm controller
//!
//! Run with `wasm-pack test --headless --firefox -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use folio_desktop::DesktopController;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_controller_window_flow() {
    let mut desktop = DesktopController::new(None);

    assert!(desktop.open_window("finder", None));
    assert!(desktop.open_window("terminal", None));
    assert!(desktop.close_window("terminal"));
    assert_eq!(desktop.get_topmost().as_deref(), Some("finder"));

    assert!(!desktop.open_window("notepad", None));
    assert!(!desktop.close_window("terminal"));
}

#[wasm_bindgen_test]
fn test_controller_config_and_content() {
    let mut desktop = DesktopController::new(Some(r#"{"initial_z": 10}"#.to_string()));

    let link = r#"{"kind": "link", "url": "https://example.com"}"#.to_string();
    assert!(desktop.open_window("safari", Some(link)));
    assert!(desktop.get_window_json("safari").contains("\"z_index\":11"));

    // Wrong content for the window is refused
    let link = r#"{"kind": "link", "url": "https://example.com"}"#.to_string();
    assert!(!desktop.open_window("photos", Some(link)));
}

#[wasm_bindgen_test]
fn test_controller_shortcuts() {
    let mut desktop = DesktopController::new(None);
    desktop.open_window("contact", None);

    let result = desktop.handle_key("w", true, false, false, false);
    assert!(result.contains("closed_window"));
    assert!(desktop.get_topmost().is_none());
    assert!(!desktop.drop_on_trash("{bad"));
}

#[wasm_bindgen_test]
fn test_controller_island_feeds() {
    let mut desktop = DesktopController::new(None);

    assert!(desktop.set_github_json(r#"{"commit_streak": 5, "recent_activity": []}"#));
    desktop.set_github_typing(true);
    let island = desktop.get_island_json();
    assert!(island.contains("\"commit_streak\":5"));
    assert!(island.contains("\"is_typing\":true"));

    let reading = r#"{"current": {"temperature_2m": 18.2, "weather_code": 0}, "daily": {}}"#;
    assert!(desktop.set_weather_reading_json(reading, 10));
    assert!(desktop.get_island_json().contains("\"temperature\":18"));
    assert!(!desktop.set_weather_json("{oops"));
}

#[wasm_bindgen_test]
fn test_controller_widgets() {
    let mut desktop = DesktopController::new(None);

    assert!(desktop.music_play_pause());
    desktop.music_next();
    assert!(desktop.get_music_json().contains("Starboy"));

    assert!(desktop.set_theme("dark"));
    assert!(desktop.is_dark_mode());
    assert!(!desktop.set_theme("sepia"));
    assert!(desktop.toggle_airplane_mode());
    assert!(desktop.get_control_center_json().contains("\"wifi\":false"));
}
