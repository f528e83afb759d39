//! User configuration: keybindings, carousel timings and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/slidedeck/config.toml` (default
//! `~/.config/slidedeck/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slidedeck::CarouselConfig;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the deck view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevSlide,
    NextSlide,
    Expand,
    Collapse,
    ScrollUp,
    ScrollDown,
    FocusWidget,
    ToggleLightbox,
    ToggleTheme,
    CyclePalette,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used when serialising).
    pub const ALL: &[Action] = &[
        Action::PrevSlide,
        Action::NextSlide,
        Action::Expand,
        Action::Collapse,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::FocusWidget,
        Action::ToggleLightbox,
        Action::ToggleTheme,
        Action::CyclePalette,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::PrevSlide => "prev_slide",
            Action::NextSlide => "next_slide",
            Action::Expand => "expand",
            Action::Collapse => "collapse",
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::FocusWidget => "focus_widget",
            Action::ToggleLightbox => "toggle_lightbox",
            Action::ToggleTheme => "toggle_theme",
            Action::CyclePalette => "cycle_palette",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"←"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Left"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Left"`, `"q"`, `"Esc"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

// ───────────────────────────────────────── config ────────────

/// Application configuration: keybindings, timings and theme.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Minimum gap between accepted wheel steps.
    pub gesture_gap_ms: u64,
    /// Snap / revert / entrance animation length.
    pub animation_ms: u64,
    /// Page rows scrolled per wheel notch or scroll key.
    pub scroll_step: u16,
    pub light_theme: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            gesture_gap_ms: 200,
            animation_ms: 250,
            scroll_step: 3,
            light_theme: false,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(PrevSlide, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(NextSlide, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(Expand, vec![KeyBind::new(Char('e'), n), KeyBind::new(Enter, n)]);
        m.insert(Collapse, vec![KeyBind::new(Esc, n)]);
        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(FocusWidget, vec![KeyBind::new(Tab, n)]);
        m.insert(ToggleLightbox, vec![KeyBind::new(Char('o'), n)]);
        m.insert(ToggleTheme, vec![KeyBind::new(Char('t'), n)]);
        m.insert(CyclePalette, vec![KeyBind::new(Char('p'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When several bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Carousel timings derived from this config.
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig::default()
            .with_gesture_gap(Duration::from_millis(self.gesture_gap_ms))
            .with_animation_duration(Duration::from_millis(self.animation_ms))
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: slide | {}: expand | {}: collapse | {}: focus | {}: lightbox | {}: quit",
            self.short_binding(Action::PrevSlide),
            self.short_binding(Action::NextSlide),
            self.short_binding(Action::Expand),
            self.short_binding(Action::Collapse),
            self.short_binding(Action::FocusWidget),
            self.short_binding(Action::ToggleLightbox),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no config file; using defaults");
                Self::default()
            }
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "gesture_gap_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.gesture_gap_ms = v.clamp(20, 2000);
                    }
                    continue;
                }
                "animation_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.animation_ms = v.min(2000);
                    }
                    continue;
                }
                "scroll_step" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.scroll_step = v.clamp(1, 20);
                    }
                    continue;
                }
                "light_theme" => {
                    config.light_theme = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!(key, "unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# slidedeck configuration".to_string(),
            String::new(),
            "# Carousel timings".to_string(),
            format!("gesture_gap_ms = {}", self.gesture_gap_ms),
            format!("animation_ms = {}", self.animation_ms),
            format!("scroll_step = {}", self.scroll_step),
            format!("light_theme = {}", self.light_theme),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/slidedeck/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("slidedeck").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_map_arrows_to_slides() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Left)), Some(Action::PrevSlide));
        assert_eq!(config.match_key(key(KeyCode::Char('l'))), Some(Action::NextSlide));
        assert_eq!(config.match_key(key(KeyCode::Esc)), Some(Action::Collapse));
        assert_eq!(config.match_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn parse_overrides_bindings_and_timings() {
        let config = AppConfig::parse_config(
            "# comment\n\
             gesture_gap_ms = 120\n\
             animation_ms = 5000\n\
             light_theme = true\n\
             next_slide = Ctrl+n, PageDown\n\
             bogus = x\n",
        );
        assert_eq!(config.gesture_gap_ms, 120);
        assert_eq!(config.animation_ms, 2000);
        assert!(config.light_theme);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(config.match_key(ctrl_n), Some(Action::NextSlide));
        assert_eq!(config.match_key(key(KeyCode::Right)), None);
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.scroll_step = 5;
        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed.scroll_step, 5);
        assert_eq!(parsed.bindings, config.bindings);
    }

    #[test]
    fn carousel_config_carries_timings() {
        let config = AppConfig {
            gesture_gap_ms: 90,
            ..AppConfig::default()
        };
        let carousel = config.carousel_config();
        assert_eq!(carousel.gesture_gap, Duration::from_millis(90));
        assert_eq!(carousel.animation_duration, Duration::from_millis(250));
    }
}
