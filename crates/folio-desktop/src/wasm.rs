//! WASM exports for the portfolio desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing React to drive the desktop directly. Structured values cross
//! the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::catalog::{self, FinderNode, LocationRef, DOCK_APPS, NAV_LINKS};
use crate::config::DesktopConfig;
use crate::context_menu::{self, ContextMenuAction};
use crate::engine::DesktopEngine;
use crate::input::Modifiers;
use crate::control_center::Theme;
use crate::island::{GithubActivity, MusicUpdate, WeatherReading, WeatherReport};
use crate::window::{WindowContent, WindowEvent};

// Import js_sys::Date for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// `log` backend writing to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    // A second controller finds the logger already installed
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn find_node(loc: LocationRef, node_id: u32) -> Option<&'static FinderNode> {
    loc.children()?.iter().find(|node| node.id == node_id)
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller
    ///
    /// `config_json` may override any `DesktopConfig` field; invalid JSON
    /// falls back to the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        init_logging();

        let config = match config_json.as_deref() {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                log::warn!("Invalid desktop config, using defaults: {}", e);
                DesktopConfig::default()
            }),
            None => DesktopConfig::default(),
        };

        Self {
            engine: DesktopEngine::new(config),
        }
    }

    /// Register a JS callback receiving each window transition as JSON
    #[wasm_bindgen]
    pub fn subscribe(&mut self, callback: js_sys::Function) {
        self.engine.subscribe(Box::new(move |event: &WindowEvent| {
            let payload = JsValue::from_str(&to_json(event));
            if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                web_sys::console::error_1(&e);
            }
        }));
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window by id, optionally with content JSON
    ///
    /// Returns false for unknown ids, unreadable content, or content the
    /// window cannot show.
    #[wasm_bindgen]
    pub fn open_window(&mut self, id: &str, data_json: Option<String>) -> bool {
        let data = match data_json.as_deref().map(serde_json::from_str::<WindowContent>) {
            Some(Ok(content)) => Some(content),
            Some(Err(e)) => {
                log::warn!("Invalid window content for {}: {}", id, e);
                return false;
            }
            None => None,
        };
        self.tick_clock();
        self.engine.open_window_by_name(id, data).is_ok()
    }

    /// Close a window by id
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> bool {
        matches!(self.engine.close_window_by_name(id), Ok(Some(_)))
    }

    /// Bring a window to the front
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> bool {
        match id.parse() {
            Ok(id) => self.engine.focus_window(id).is_some(),
            Err(e) => {
                log::error!("{}", e);
                false
            }
        }
    }

    /// Get the topmost open window id
    #[wasm_bindgen]
    pub fn get_topmost(&self) -> Option<String> {
        self.engine.windows.topmost().map(|id| id.as_str().to_string())
    }

    /// Get one window's state as JSON
    #[wasm_bindgen]
    pub fn get_window_json(&self, id: &str) -> String {
        match self.engine.windows.get_by_name(id) {
            Ok(state) => to_json(state),
            Err(_) => "null".to_string(),
        }
    }

    /// Get all windows as JSON, in registry order
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let windows: Vec<_> = self.engine.windows.all_windows().collect();
        to_json(&windows)
    }

    /// Get the registry snapshot as JSON
    #[wasm_bindgen]
    pub fn get_snapshot_json(&self) -> String {
        to_json(&self.engine.snapshot())
    }

    // =========================================================================
    // Launchers
    // =========================================================================

    /// Handle a dock icon click
    #[wasm_bindgen]
    pub fn toggle_dock_app(&mut self, app_id: &str) -> bool {
        self.tick_clock();
        self.engine.toggle_dock_app(app_id).is_ok()
    }

    /// Whether the dock's trash menu is showing
    #[wasm_bindgen]
    pub fn is_trash_menu_open(&self) -> bool {
        self.engine.trash_menu_open
    }

    /// Handle a menu-bar link click
    #[wasm_bindgen]
    pub fn open_nav_link(&mut self, link_id: u32) -> bool {
        self.tick_clock();
        self.engine.open_nav_link(link_id).is_some()
    }

    /// Point Finder at a location (`{"location": "work", "folder": 5}`)
    #[wasm_bindgen]
    pub fn open_location(&mut self, location_json: &str) -> bool {
        match serde_json::from_str::<LocationRef>(location_json) {
            Ok(loc) => {
                self.tick_clock();
                self.engine.open_location(loc).is_some()
            }
            Err(e) => {
                log::warn!("Invalid location: {}", e);
                false
            }
        }
    }

    /// Open entry `node_id` of the active Finder folder
    #[wasm_bindgen]
    pub fn open_file(&mut self, node_id: u32) -> bool {
        let Some(node) = find_node(self.engine.locations.active(), node_id) else {
            log::warn!("No entry {} in {}", node_id, self.engine.locations.active().location);
            return false;
        };
        self.tick_clock();
        matches!(self.engine.open_file(node), Ok(Some(_)))
    }

    /// Get the active Finder folder and its entries as JSON
    #[wasm_bindgen]
    pub fn get_finder_json(&self) -> String {
        let active = self.engine.locations.active();
        to_json(&serde_json::json!({
            "active": active,
            "name": active.name(),
            "entries": self.engine.locations.entries(),
        }))
    }

    /// Get dock apps, nav links, and Finder locations as JSON
    #[wasm_bindgen]
    pub fn get_catalog_json(&self) -> String {
        let dock: Vec<_> = DOCK_APPS
            .iter()
            .map(|app| {
                serde_json::json!({
                    "id": app.id(),
                    "name": app.name,
                    "icon": app.icon,
                    "canOpen": app.can_open,
                })
            })
            .collect();
        let nav: Vec<_> = NAV_LINKS
            .iter()
            .map(|link| serde_json::json!({ "id": link.id, "name": link.name, "type": link.target }))
            .collect();
        let locations: Vec<_> = catalog::locations()
            .iter()
            .map(|loc| serde_json::json!({ "key": loc.key, "id": loc.id, "name": loc.name, "icon": loc.icon }))
            .collect();

        to_json(&serde_json::json!({
            "dock": dock,
            "navLinks": nav,
            "locations": locations,
        }))
    }

    // =========================================================================
    // Spotlight
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_spotlight(&mut self) {
        self.engine.toggle_spotlight();
    }

    #[wasm_bindgen]
    pub fn close_spotlight(&mut self) {
        self.engine.close_spotlight();
    }

    #[wasm_bindgen]
    pub fn set_spotlight_query(&mut self, query: &str) {
        self.engine.set_spotlight_query(query);
    }

    /// Click the result at `index`
    #[wasm_bindgen]
    pub fn spotlight_click(&mut self, index: usize) -> bool {
        self.tick_clock();
        self.engine.spotlight_click(index).is_some()
    }

    /// Get the panel state and current results as JSON
    #[wasm_bindgen]
    pub fn get_spotlight_json(&self) -> String {
        let spotlight = &self.engine.spotlight;
        to_json(&serde_json::json!({
            "isOpen": spotlight.is_open(),
            "query": spotlight.query(),
            "selected": spotlight.selected(),
            "results": spotlight.results(),
        }))
    }

    // =========================================================================
    // Context menu
    // =========================================================================

    /// Show the desktop menu at the cursor
    #[wasm_bindgen]
    pub fn open_context_menu(&mut self, x: f32, y: f32, viewport_width: f32, viewport_height: f32) {
        self.engine.open_context_menu(x, y, viewport_width, viewport_height);
    }

    #[wasm_bindgen]
    pub fn close_context_menu(&mut self) {
        self.engine.close_context_menu();
    }

    /// Handle a menu row click by its kebab-case action name
    #[wasm_bindgen]
    pub fn context_menu_action(&mut self, action: &str) -> bool {
        match ContextMenuAction::from_name(action) {
            Some(action) => {
                self.tick_clock();
                self.engine.context_menu_action(action);
                true
            }
            None => {
                log::warn!("Unknown menu action: {}", action);
                self.engine.close_context_menu();
                false
            }
        }
    }

    /// Get menu placement and rows as JSON
    #[wasm_bindgen]
    pub fn get_context_menu_json(&self) -> String {
        let menu = &self.engine.context_menu;
        to_json(&serde_json::json!({
            "isOpen": menu.is_open,
            "x": menu.x,
            "y": menu.y,
            "items": context_menu::menu_entries(self.engine.trash.len()),
        }))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a keydown event, returning the result as JSON
    ///
    /// The shell should call `preventDefault` unless the result is
    /// `unhandled`.
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str, ctrl: bool, meta: bool, shift: bool, alt: bool) -> String {
        let modifiers = Modifiers { ctrl, meta, shift, alt };
        to_json(&self.engine.handle_key(key, modifiers))
    }

    /// Handle transfer data dropped on the trash icon
    #[wasm_bindgen]
    pub fn drop_on_trash(&mut self, data: &str) -> bool {
        self.engine.drop_on_trash(data, date_now()).unwrap_or(false)
    }

    // =========================================================================
    // Trash
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_trash_json(&self) -> String {
        to_json(self.engine.trash.items())
    }

    /// Put an item back; returns it as JSON
    #[wasm_bindgen]
    pub fn restore_trash_item(&mut self, id: u64) -> Option<String> {
        self.engine.trash.restore(id).map(|item| to_json(&item))
    }

    #[wasm_bindgen]
    pub fn remove_trash_item(&mut self, id: u64) -> usize {
        self.engine.trash.remove(id)
    }

    #[wasm_bindgen]
    pub fn empty_trash(&mut self) -> usize {
        self.engine.trash.empty()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.engine.toggle_dark_mode()
    }

    #[wasm_bindgen]
    pub fn is_dark_mode(&self) -> bool {
        self.engine.is_dark_mode()
    }

    /// Record the host's `prefers-color-scheme` answer
    #[wasm_bindgen]
    pub fn set_system_prefers_dark(&mut self, dark: bool) {
        self.engine.system_prefers_dark = dark;
    }

    /// Pick the appearance: "light", "dark" or "system"
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme: &str) -> bool {
        match serde_json::from_value::<Theme>(serde_json::Value::from(theme)) {
            Ok(theme) => {
                self.engine.set_theme(theme);
                true
            }
            Err(e) => {
                log::warn!("Invalid theme {}: {}", theme, e);
                false
            }
        }
    }

    // =========================================================================
    // Control center
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_control_center(&mut self) {
        self.engine.toggle_control_center();
    }

    #[wasm_bindgen]
    pub fn toggle_wifi(&mut self) -> bool {
        self.engine.control_center.toggle_wifi()
    }

    #[wasm_bindgen]
    pub fn toggle_bluetooth(&mut self) -> bool {
        self.engine.control_center.toggle_bluetooth()
    }

    #[wasm_bindgen]
    pub fn toggle_sound(&mut self) -> bool {
        self.engine.control_center.toggle_sound()
    }

    #[wasm_bindgen]
    pub fn toggle_airplane_mode(&mut self) -> bool {
        self.engine.control_center.toggle_airplane_mode()
    }

    #[wasm_bindgen]
    pub fn set_volume(&mut self, volume: u8) {
        self.engine.control_center.set_volume(volume);
    }

    #[wasm_bindgen]
    pub fn set_brightness(&mut self, brightness: u8) {
        self.engine.control_center.set_brightness(brightness);
    }

    /// Get the control center state as JSON, including the resolved dark flag
    #[wasm_bindgen]
    pub fn get_control_center_json(&self) -> String {
        to_json(&serde_json::json!({
            "panel": self.engine.control_center,
            "darkMode": self.engine.is_dark_mode(),
        }))
    }

    // =========================================================================
    // Music
    // =========================================================================

    #[wasm_bindgen]
    pub fn music_play_pause(&mut self) -> bool {
        self.tick_clock();
        self.engine.music_play_pause()
    }

    #[wasm_bindgen]
    pub fn music_next(&mut self) {
        self.engine.music_next();
    }

    #[wasm_bindgen]
    pub fn music_prev(&mut self) {
        self.engine.music_prev();
    }

    #[wasm_bindgen]
    pub fn music_select(&mut self, index: usize) -> bool {
        self.engine.music_select(index)
    }

    #[wasm_bindgen]
    pub fn music_set_volume(&mut self, volume: u8) {
        self.engine.music.set_volume(volume);
    }

    /// Show or hide the music widget
    #[wasm_bindgen]
    pub fn set_music_open(&mut self, open: bool) {
        self.engine.music.is_open = open;
    }

    #[wasm_bindgen]
    pub fn toggle_music_expanded(&mut self) {
        self.engine.music.toggle_expanded();
    }

    /// Get the player state as JSON
    #[wasm_bindgen]
    pub fn get_music_json(&self) -> String {
        let music = &self.engine.music;
        to_json(&serde_json::json!({
            "player": music,
            "currentTrack": music.current_track(),
            "elapsed": crate::music::format_time(music.elapsed_s()),
        }))
    }

    // =========================================================================
    // Island
    // =========================================================================

    /// Advance timers; call from `requestAnimationFrame` or an interval
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.engine.tick(date_now());
    }

    /// Merge a music widget update (`{"is_playing": true, ...}`)
    #[wasm_bindgen]
    pub fn set_music(&mut self, update_json: &str) -> bool {
        match serde_json::from_str::<MusicUpdate>(update_json) {
            Ok(update) => {
                self.engine.island.set_music(update);
                true
            }
            Err(e) => {
                log::warn!("Invalid music update: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen]
    pub fn clear_notification(&mut self) {
        self.engine.island.clear_notification();
    }

    /// Replace the weather panel (`WeatherReport` JSON)
    #[wasm_bindgen]
    pub fn set_weather_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<WeatherReport>(json) {
            Ok(report) => {
                self.engine.island.set_weather(report);
                true
            }
            Err(e) => {
                log::warn!("Invalid weather data: {}", e);
                false
            }
        }
    }

    /// Build the weather panel from a raw provider response taken at `hour`
    #[wasm_bindgen]
    pub fn set_weather_reading_json(&mut self, json: &str, hour: u32) -> bool {
        match serde_json::from_str::<WeatherReading>(json) {
            Ok(reading) => {
                let report = WeatherReport::from_reading(&reading, hour);
                self.engine.island.set_weather(report);
                true
            }
            Err(e) => {
                log::warn!("Invalid weather reading: {}", e);
                false
            }
        }
    }

    /// Replace the activity panel (`GithubActivity` JSON)
    #[wasm_bindgen]
    pub fn set_github_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<GithubActivity>(json) {
            Ok(activity) => {
                self.engine.island.set_github(activity);
                true
            }
            Err(e) => {
                log::warn!("Invalid activity data: {}", e);
                false
            }
        }
    }

    #[wasm_bindgen]
    pub fn set_github_typing(&mut self, is_typing: bool) {
        self.engine.island.set_github_typing(is_typing);
    }

    /// Record a failed weather fetch (`month` is zero-based)
    #[wasm_bindgen]
    pub fn weather_unavailable(&mut self, month: u32, hour: u32) {
        self.engine.island.weather_unavailable(month, hour);
    }

    #[wasm_bindgen]
    pub fn github_unavailable(&mut self) {
        self.engine.island.github_unavailable();
    }

    /// Get the island state as JSON
    #[wasm_bindgen]
    pub fn get_island_json(&self) -> String {
        let island = &self.engine.island;
        to_json(&serde_json::json!({
            "state": island.state(),
            "idleView": island.idle_view(),
            "music": island.music(),
            "notification": island.notification(),
            "weather": island.weather,
            "github": island.github,
        }))
    }
}

impl DesktopController {
    fn tick_clock(&mut self) {
        self.engine.tick(date_now());
    }
}
