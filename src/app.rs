use crate::config::Config;
use crate::items::demo_items;
use crate::keymap::Keymap;
use crate::screens::{FocusListsScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::ScreenStyles;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{info, warn};

/// Main application state
pub struct App {
    keymap: Keymap,
    tick_rate: Duration,
    styles: ScreenStyles,
    screen: FocusListsScreen,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        for (binding, err) in config.keymap.invalid_bindings() {
            warn!("Ignoring key binding {:?}: {}", binding.key, err);
        }

        let styles = ScreenStyles::resolve(config.color_scheme());
        info!(
            "Starting with {} theme, {} keymap, {}ms tick",
            styles.scheme.name(),
            config.keymap.preset.name(),
            config.tick_rate_ms
        );

        Self {
            tick_rate: config.tick_rate(),
            keymap: config.keymap,
            styles,
            screen: FocusListsScreen::new(demo_items()),
            should_quit: false,
        }
    }

    pub fn styles(&self) -> &ScreenStyles {
        &self.styles
    }

    pub fn screen(&self) -> &FocusListsScreen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let result = self.event_loop(&mut tui);

        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            self.draw(tui)?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(self.tick_rate)? {
                self.handle_event(event)?;
            }
            self.screen.on_tick();
        }
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let ctx = RenderContext::new(&self.styles, &self.keymap);
        let screen = &mut self.screen;
        let mut rendered = Ok(());
        tui.terminal_mut().draw(|frame| {
            rendered = screen.render(frame, frame.area(), &ctx);
        })?;
        rendered
    }

    /// Route one terminal event to the screen and apply the resulting action
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let ctx = ScreenContext::new(&self.keymap);
        let action = self.screen.handle_event(event, &ctx)?;
        self.apply(action);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::ToggleTheme => {
                let scheme = self.styles.scheme.toggled();
                self.styles = ScreenStyles::for_scheme(scheme);
                info!("Theme switched to {}", scheme.name());
            }
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::ColorScheme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn dark_app() -> App {
        App::new(Config {
            theme: "dark".to_string(),
            ..Config::default()
        })
    }

    #[test]
    fn test_theme_toggle_recomputes_styles() {
        let mut app = dark_app();
        assert_eq!(app.styles().scheme, ColorScheme::Dark);

        app.handle_event(key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.styles(), &ScreenStyles::for_scheme(ColorScheme::Light));

        app.handle_event(key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.styles().scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut app = dark_app();
        assert!(!app.should_quit());
        app.handle_event(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_navigation_reaches_screen() {
        let mut app = dark_app();
        app.handle_event(key(KeyCode::Down)).unwrap();
        app.handle_event(key(KeyCode::Down)).unwrap();
        assert_eq!(app.screen().focused().map(|f| f.row), Some(2));
    }
}
