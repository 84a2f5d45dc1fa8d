#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Point, Size, Subscription, Task, Theme};

use crate::settings;
use crate::state::State;
use crate::theme::ThemeManager;
use crate::widgets::page_detail::{PageDetailIntent, PageDetailWidget};
use crate::widgets::page_tabs::{PageTabsEvent, PageTabsWidget};

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Page tabs widget
    PageTabs(PageTabsEvent),
    // Page detail widget
    PageDetail(PageDetailIntent),
    // Direct operations
    CursorMoved { position: Point },
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) page_tabs: PageTabsWidget,
    pub(crate) page_detail: PageDetailWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = settings::load_initial();

        let mut theme_manager = ThemeManager::new();
        theme_manager.set_custom_palette(settings.palette());

        let widgets = Widgets {
            page_tabs: PageTabsWidget::new(
                settings.pages().to_vec(),
                settings.menu_placement(),
            ),
            page_detail: PageDetailWidget::new(
                settings.active_page_id().clone(),
            ),
        };
        let mount = widgets.page_tabs.mount().map(AppEvent::PageTabs);

        let app = App {
            theme_manager,
            state: State::new(Size::new(
                DEFAULT_WINDOW_WIDTH,
                DEFAULT_WINDOW_HEIGHT,
            )),
            widgets,
        };

        (app, mount)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("{} - Pages", self.widgets.page_detail.vm().title)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::page_tabs;
    use crate::widgets::page_detail::model::PagePosition;
    use crate::widgets::page_tabs::context_menu::ContextMenuAction;
    use crate::widgets::page_tabs::{
        PageTabsCtx, PageTabsEffect, PageTabsIntent,
    };
    use crate::widgets::page_tabs::model::{PageId, default_pages};

    fn app() -> App {
        App {
            theme_manager: ThemeManager::new(),
            state: State::new(Size::new(800.0, 600.0)),
            widgets: Widgets {
                page_tabs: PageTabsWidget::new(
                    default_pages(),
                    Default::default(),
                ),
                page_detail: PageDetailWidget::new(PageId::new("1")),
            },
        }
    }

    fn intent(intent: PageTabsIntent) -> AppEvent {
        AppEvent::PageTabs(PageTabsEvent::Intent(intent))
    }

    /// Feed widget effects through the host routing, as the runtime would.
    fn deliver(app: &mut App, effects: Vec<PageTabsEffect>) {
        for intent in effects.into_iter().filter_map(page_tabs::route) {
            let _ = app.update(AppEvent::PageDetail(intent));
        }
    }

    #[test]
    fn given_mounted_app_when_snapshot_delivered_then_heading_shows_page() {
        let mut app = app();
        let effects = app.widgets.page_tabs.mount_effects();

        deliver(&mut app, effects);

        let vm = app.widgets.page_detail.vm();
        assert_eq!(vm.title, "Info");
        assert_eq!(vm.position, Some(PagePosition { index: 1, count: 4 }));
    }

    #[test]
    fn given_active_page_deleted_when_effects_routed_then_heading_follows() {
        let mut app = app();
        let effects = app.widgets.page_tabs.mount_effects();
        deliver(&mut app, effects);

        let _ = app.update(intent(PageTabsIntent::TabRightClicked {
            page_id: PageId::new("1"),
        }));
        let active = PageId::new("1");
        let ctx = PageTabsCtx {
            active_page_id: Some(&active),
            cursor: app.state.cursor,
            viewport: app.state.screen_size,
        };
        let effects = app.widgets.page_tabs.apply(
            PageTabsIntent::ContextMenuAction(ContextMenuAction::Delete),
            &ctx,
        );
        deliver(&mut app, effects);

        let vm = app.widgets.page_detail.vm();
        assert_eq!(vm.title, "Details");
        assert_eq!(vm.position, Some(PagePosition { index: 1, count: 3 }));
        assert_eq!(app.widgets.page_tabs.vm().pages.len(), 3);
    }

    #[test]
    fn given_cursor_and_resize_events_when_updated_then_state_tracks_them() {
        let mut app = app();

        let _ = app.update(AppEvent::CursorMoved {
            position: Point::new(12.0, 34.0),
        });
        let _ = app.update(AppEvent::Window(iced::window::Event::Resized(
            Size::new(500.0, 400.0),
        )));

        assert_eq!(app.state.cursor, Point::new(12.0, 34.0));
        assert_eq!(app.state.screen_size, Size::new(500.0, 400.0));
    }

    #[test]
    fn given_narrow_window_when_menu_opened_then_menu_pins_right() {
        let mut app = app();
        let _ = app.update(AppEvent::Window(iced::window::Event::Resized(
            Size::new(600.0, 400.0),
        )));
        let _ = app.update(AppEvent::CursorMoved {
            position: Point::new(40.0, 20.0),
        });

        let _ = app.update(intent(PageTabsIntent::TabRightClicked {
            page_id: PageId::new("2"),
        }));

        let menu = app.widgets.page_tabs.vm().context_menu.expect("menu open");
        assert_eq!(menu.position, Point::new(340.0, 20.0));
    }
}
