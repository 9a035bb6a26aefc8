// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search state, the
//! HTTP client and the UI components.
//!
//! The `App` struct owns the [`SearchState`] and the image caches, and turns
//! component messages into side effects like search requests or image
//! downloads.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ClientSettings, ImageClient};
use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::search::SearchState;
use crate::ui::gallery::ThumbnailCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::AppTheme;
use crate::ui::{loader, searchbar};
use iced::widget::{operation, Id};
use iced::{window, Element, Subscription, Task, Theme};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    search: SearchState,
    /// `None` when the HTTP client could not be built.
    client: Option<ImageClient>,
    searchbar: searchbar::State,
    thumbnails: ThumbnailCache,
    /// Recently viewed full-size images.
    full_images: LruCache<String, RemoteImage>,
    spinner: loader::State,
    tile_width: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.search.query())
            .field("results", &self.search.results().len())
            .field("status", &self.search.status())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes an `Fn` boot closure; the flags are consumed on the
    // first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn full_image_cache() -> LruCache<String, RemoteImage> {
    let capacity =
        NonZeroUsize::new(config::FULL_IMAGE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
    LruCache::new(capacity)
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme: AppTheme::default(),
            search: SearchState::new(),
            client: None,
            searchbar: searchbar::State::default(),
            thumbnails: ThumbnailCache::new(),
            full_images: full_image_cache(),
            spinner: loader::State::default(),
            tile_width: config::DEFAULT_TILE_WIDTH,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the CLI
    /// flags, and starts the initial search if a query was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            tile_width: config.gallery.tile_width(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        let settings = ClientSettings::from_config(&config.api, flags.api_key.as_deref());
        match ImageClient::new(settings) {
            Ok(client) => app.client = Some(client),
            Err(err) => {
                log::error!("failed to build HTTP client: {err}");
                app.notifications.push(
                    Notification::error("notification-client-error")
                        .with_arg("error", err.to_string()),
                );
            }
        }

        let focus = operation::focus(Id::new(searchbar::INPUT_ID));

        let Some(query) = flags.query.filter(|q| !q.trim().is_empty()) else {
            return (app, focus);
        };
        app.searchbar = searchbar::State::new(query.clone());
        let search = update::start_search(&mut app.update_context(), &query);
        (app, Task::batch([focus, search]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.search.query().is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.search.query())
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.search.is_loading() || self.overlay_image_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::SearchBar(message) => update::handle_searchbar_message(&mut ctx, message),
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::LoadMore(message) => update::handle_load_more_message(&mut ctx, message),
            Message::Modal(message) => update::handle_modal_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, &message)
            }
            Message::SearchCompleted { ticket, outcome } => {
                update::handle_search_completed(&mut ctx, &ticket, outcome)
            }
            Message::ThumbnailLoaded { url, result } => {
                update::handle_thumbnail_loaded(&mut ctx, &url, result)
            }
            Message::FullImageLoaded { url, result } => {
                update::handle_full_image_loaded(&mut ctx, &url, result)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search: &self.search,
            searchbar: &self.searchbar,
            thumbnails: &self.thumbnails,
            overlay_image: self
                .search
                .overlay()
                .and_then(|payload| self.full_images.peek(&payload.full_url)),
            spinner: self.spinner,
            tile_width: self.tile_width,
            spinner_color: self.theme.colors.brand_primary,
            notifications: &self.notifications,
        })
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            search: &mut self.search,
            client: self.client.as_ref(),
            searchbar: &mut self.searchbar,
            thumbnails: &mut self.thumbnails,
            full_images: &mut self.full_images,
            spinner: &mut self.spinner,
            notifications: &mut self.notifications,
        }
    }

    fn overlay_image_loading(&self) -> bool {
        self.search
            .overlay()
            .and_then(|payload| self.full_images.peek(&payload.full_url))
            .is_some_and(RemoteImage::is_loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::app::paths::{tests::ENV_MUTEX, ENV_CONFIG_DIR};
    use crate::error::Error;
    use crate::media::ImageData;
    use crate::search::state::tests::page_of;
    use crate::search::{FetchTicket, OverlayPayload};
    use crate::ui::{gallery, load_more, modal};
    use std::time::Instant;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    fn app_with_client() -> App {
        App {
            client: ImageClient::new(ClientSettings::default()).ok(),
            ..App::default()
        }
    }

    fn submit(app: &mut App, query: &str) -> FetchTicket {
        let _ = app.update(Message::SearchBar(searchbar::Message::InputChanged(
            query.into(),
        )));
        let _ = app.update(Message::SearchBar(searchbar::Message::Submit));
        app.search.in_flight().cloned().expect("request in flight")
    }

    fn complete(app: &mut App, ticket: FetchTicket, count: usize, offset: usize, total: u64) {
        let _ = app.update(Message::SearchCompleted {
            ticket,
            outcome: Ok(page_of(count, offset, total)),
        });
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255; 4])
    }

    #[test]
    fn new_without_query_starts_idle() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(!app.search.is_loading());
            assert!(app.search.results().is_empty());
            assert!(app.client.is_some());
        });
    }

    #[test]
    fn new_with_query_starts_first_search() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                query: Some("red fox".into()),
                ..Flags::default()
            });
            assert!(app.search.is_loading());
            let ticket = app.search.in_flight().expect("first page in flight");
            assert_eq!(ticket.query(), "red fox");
            assert_eq!(ticket.page(), 1);
            assert_eq!(app.searchbar.value(), "red fox");
        });
    }

    #[test]
    fn broken_config_shows_warning_toast() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "not = [valid").expect("write config");
            let (app, _task) = App::new(Flags::default());
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn blank_submit_warns_without_loading() {
        let mut app = app_with_client();
        let _ = app.update(Message::SearchBar(searchbar::Message::InputChanged(
            "   ".into(),
        )));
        let _ = app.update(Message::SearchBar(searchbar::Message::Submit));

        assert!(!app.search.is_loading());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn first_page_fills_grid_and_requests_thumbnails() {
        let mut app = app_with_client();
        let ticket = submit(&mut app, "forest");
        complete(&mut app, ticket, 12, 0, 40);

        assert_eq!(app.search.results().len(), 12);
        assert_eq!(app.thumbnails.len(), 12);
        assert!(app.thumbnails.values().all(RemoteImage::is_loading));
        assert!(app.search.load_more_visible());
    }

    #[test]
    fn load_more_appends_and_requests_new_thumbnails_only() {
        let mut app = app_with_client();
        let ticket = submit(&mut app, "forest");
        complete(&mut app, ticket, 12, 0, 40);

        let _ = app.update(Message::LoadMore(load_more::Message::LoadMoreRequested));
        let ticket = app.search.in_flight().cloned().expect("second page in flight");
        assert_eq!(ticket.page(), 2);
        complete(&mut app, ticket, 12, 12, 40);

        assert_eq!(app.search.results().len(), 24);
        assert_eq!(app.thumbnails.len(), 24);
    }

    #[test]
    fn new_search_drops_previous_thumbnails() {
        let mut app = app_with_client();
        let ticket = submit(&mut app, "forest");
        complete(&mut app, ticket, 12, 0, 40);

        let ticket = submit(&mut app, "desert");
        complete(&mut app, ticket, 3, 100, 3);

        assert_eq!(app.thumbnails.len(), 3);
        assert!(app.thumbnails.contains_key("https://cdn.test/100_640.jpg"));
        assert!(!app.search.load_more_visible());
    }

    #[test]
    fn failed_search_keeps_results_and_warns() {
        let mut app = app_with_client();
        let ticket = submit(&mut app, "forest");
        complete(&mut app, ticket, 12, 0, 40);

        let ticket = submit(&mut app, "ocean");
        let _ = app.update(Message::SearchCompleted {
            ticket,
            outcome: Err(FetchError::Network("timed out".into())),
        });

        assert_eq!(app.search.results().len(), 12);
        assert_eq!(app.thumbnails.len(), 12);
        assert!(!app.search.is_loading());
        assert!(app.notifications.has_notifications());

        // Load-more keeps paging the query that is on screen.
        let _ = app.update(Message::LoadMore(load_more::Message::LoadMoreRequested));
        let ticket = app.search.in_flight().cloned().expect("second page in flight");
        assert_eq!(ticket.query(), "forest");
        assert_eq!(ticket.page(), 2);
        complete(&mut app, ticket, 12, 12, 40);
        assert_eq!(app.search.results().len(), 24);

        // The failed query can be submitted again.
        let retry = submit(&mut app, "ocean");
        assert_eq!(retry.query(), "ocean");
        assert_eq!(retry.page(), 1);
    }

    #[test]
    fn thumbnail_results_are_stored() {
        let mut app = app_with_client();
        let ticket = submit(&mut app, "forest");
        complete(&mut app, ticket, 2, 0, 2);

        let _ = app.update(Message::ThumbnailLoaded {
            url: "https://cdn.test/0_640.jpg".into(),
            result: Ok(pixel()),
        });
        let _ = app.update(Message::ThumbnailLoaded {
            url: "https://cdn.test/1_640.jpg".into(),
            result: Err(Error::Network("HTTP status: 404 Not Found".into())),
        });

        assert!(matches!(
            app.thumbnails.get("https://cdn.test/0_640.jpg"),
            Some(RemoteImage::Ready(_))
        ));
        assert!(matches!(
            app.thumbnails.get("https://cdn.test/1_640.jpg"),
            Some(RemoteImage::Failed(_))
        ));
    }

    #[test]
    fn late_thumbnail_for_replaced_grid_is_ignored() {
        let mut app = app_with_client();
        let _ = app.update(Message::ThumbnailLoaded {
            url: "https://cdn.test/old_640.jpg".into(),
            result: Ok(pixel()),
        });
        assert!(app.thumbnails.is_empty());
    }

    #[test]
    fn tile_click_opens_overlay_and_downloads_full_image() {
        let mut app = app_with_client();
        let payload = OverlayPayload {
            full_url: "https://cdn.test/7_1280.jpg".into(),
            tags: "lake".into(),
        };

        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(
            payload.clone(),
        )));

        assert_eq!(app.search.overlay(), Some(&payload));
        assert!(app.overlay_image_loading());

        let _ = app.update(Message::FullImageLoaded {
            url: payload.full_url.clone(),
            result: Ok(pixel()),
        });
        assert!(!app.overlay_image_loading());
        assert!(matches!(
            app.full_images.peek(&payload.full_url),
            Some(RemoteImage::Ready(_))
        ));
    }

    #[test]
    fn full_image_evicted_while_overlay_is_open_is_stored_on_arrival() {
        let mut app = app_with_client();
        let payload = OverlayPayload {
            full_url: "https://cdn.test/7_1280.jpg".into(),
            tags: "lake".into(),
        };
        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(
            payload.clone(),
        )));
        let _ = app.full_images.pop(&payload.full_url);

        let _ = app.update(Message::FullImageLoaded {
            url: payload.full_url.clone(),
            result: Ok(pixel()),
        });

        assert!(matches!(
            app.full_images.peek(&payload.full_url),
            Some(RemoteImage::Ready(_))
        ));
        assert!(!app.overlay_image_loading());
    }

    #[test]
    fn late_full_image_for_closed_overlay_is_not_cached() {
        let mut app = app_with_client();
        let _ = app.update(Message::FullImageLoaded {
            url: "https://cdn.test/9_1280.jpg".into(),
            result: Ok(pixel()),
        });
        assert!(app.full_images.is_empty());
    }

    #[test]
    fn escape_and_close_button_dismiss_overlay() {
        let mut app = app_with_client();
        let payload = OverlayPayload {
            full_url: "https://cdn.test/7_1280.jpg".into(),
            tags: "lake".into(),
        };

        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(
            payload.clone(),
        )));
        let _ = app.update(Message::EscapePressed);
        assert!(app.search.overlay().is_none());

        let _ = app.update(Message::Gallery(gallery::Message::TileClicked(payload)));
        let _ = app.update(Message::Modal(modal::Message::CardPressed));
        assert!(app.search.overlay().is_some());
        let _ = app.update(Message::Modal(modal::Message::Close));
        assert!(app.search.overlay().is_none());
    }

    #[test]
    fn tick_advances_spinner() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner.rotation() > 0.0);
    }

    #[test]
    fn title_includes_active_query() {
        let mut app = app_with_client();
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        let ticket = submit(&mut app, "northern lights");
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        complete(&mut app, ticket, 3, 0, 3);
        assert!(app.title().starts_with("northern lights - "));
    }
}
