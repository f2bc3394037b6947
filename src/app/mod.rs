pub mod bindings;
pub mod context;
pub mod flags;
pub mod message;

mod action;
mod menu;

use crate::core::config::DashboardConfig;
use crate::core::icons;
use crate::core::route::Route;
use crate::fl;
use crate::pages::{self, insights, inventory, sales, Page};
use action::Action;
use bindings::key_binds;
use context::ContextPage;
use cosmic::app::context_drawer;
use cosmic::app::{Core, Task};
use cosmic::cosmic_config::{CosmicConfigEntry, Update};
use cosmic::cosmic_theme::ThemeMode;
use cosmic::iced::keyboard::Modifiers;
use cosmic::iced::{event, keyboard::Event as KeyEvent, Event};
use cosmic::widget;
use cosmic::widget::about::About;
use cosmic::widget::menu::{Action as _, KeyBind};
pub use cosmic::{executor, ApplicationExt, Element};
use message::AppMessage;
use std::any::TypeId;
use std::collections::HashMap;

/// The [`App`] stores application-specific state.
pub struct App {
    core: Core,
    nav_model: widget::nav_bar::Model,
    about: About,
    handler: Option<cosmic::cosmic_config::Config>,
    config: DashboardConfig,
    app_themes: Vec<String>,
    modifiers: Modifiers,
    key_binds: HashMap<KeyBind, Action>,
    context_page: ContextPage,
}

/// Implement [`cosmic::Application`] to integrate with COSMIC.
impl cosmic::Application for App {
    /// Default async executor to use with the app.
    type Executor = executor::Default;

    /// Argument received [`cosmic::Application::new`].
    type Flags = flags::Flags;

    /// Message types specific to our [`App`].
    type Message = AppMessage;

    /// The unique application ID to supply to the window manager.
    const APP_ID: &'static str = "io.github.cosmic_utils.fashion_dashboard";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Creates the application, and optionally emits command on initialize.
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let mut nav_model = widget::nav_bar::Model::default();
        for route in Route::ALL {
            let page: Box<dyn Page> = match route {
                Route::Sales => Box::new(sales::SalesPage::new()),
                Route::Inventory => Box::new(inventory::InventoryPage::new()),
                Route::Insights => Box::new(insights::InsightsPage::new()),
            };
            nav_model
                .insert()
                .text(route.label())
                .icon(icons::get_icon(route.icon(), 18))
                .data::<Route>(route)
                .data::<Box<dyn Page>>(page);
        }
        nav_model.activate_position(flags.initial_route.position());

        let (config, handler) = (
            DashboardConfig::config(),
            DashboardConfig::config_handler(),
        );

        let app_themes = vec![fl!("match-desktop"), fl!("dark"), fl!("light")];

        let about = About::default()
            .name(fl!("app-title"))
            .icon(Self::APP_ID)
            .version(env!("CARGO_PKG_VERSION"))
            .license("MPL-2.0")
            .comments(fl!("about-blurb"))
            .links([
                (
                    "Repository",
                    "https://github.com/cosmic-utils/fashion-dashboard",
                ),
                (
                    "Support",
                    "https://github.com/cosmic-utils/fashion-dashboard/issues",
                ),
            ]);

        let mut app = App {
            core,
            nav_model,
            about,
            handler,
            config,
            app_themes,
            modifiers: Modifiers::empty(),
            key_binds: key_binds(),
            context_page: ContextPage::Settings,
        };

        let command = Task::batch([app.update_title(), app.update_theme()]);
        (app, command)
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        match self.context_page {
            ContextPage::About => Some(
                context_drawer::about(&self.about, AppMessage::Open, AppMessage::ContextClose)
                    .title(self.context_page.title()),
            ),
            ContextPage::Settings => Some(
                context_drawer::context_drawer(self.settings(), AppMessage::ContextClose)
                    .title(self.context_page.title()),
            ),
        }
    }

    fn footer(&self) -> Option<Element<Self::Message>> {
        self.nav_model
            .active_data::<Box<dyn Page>>()
            .and_then(|page| page.footer())
    }

    fn header_start(&self) -> Vec<Element<Self::Message>> {
        vec![menu::menu_bar(&self.key_binds)]
    }

    /// Allows COSMIC to integrate with your application's [`nav_bar::Model`].
    fn nav_model(&self) -> Option<&widget::nav_bar::Model> {
        Some(&self.nav_model)
    }

    /// Called when a navigation item is selected.
    fn on_nav_select(&mut self, id: widget::nav_bar::Id) -> Task<Self::Message> {
        self.nav_model.activate(id);
        if let Some(route) = self.nav_model.active_data::<Route>() {
            tracing::debug!("navigated to {}", route.label());
        }
        self.update_title()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<AppMessage> {
        struct ConfigSubscription;
        struct ThemeSubscription;

        let keybinds = event::listen_with(|event, _status, _window_id| match event {
            Event::Keyboard(KeyEvent::KeyPressed { key, modifiers, .. }) => {
                Some(AppMessage::Key(modifiers, key))
            }
            Event::Keyboard(KeyEvent::ModifiersChanged(modifiers)) => {
                Some(AppMessage::Modifiers(modifiers))
            }
            _ => None,
        });

        let config = cosmic::cosmic_config::config_subscription(
            TypeId::of::<ConfigSubscription>(),
            Self::APP_ID.into(),
            DashboardConfig::VERSION,
        )
        .map(|update: Update<DashboardConfig>| {
            if !update.errors.is_empty() {
                tracing::info!(
                    "errors loading config {:?}: {:?}",
                    update.keys,
                    update.errors
                );
            }
            AppMessage::ConfigChanged(update.config)
        });
        let theme = cosmic::cosmic_config::config_subscription::<_, ThemeMode>(
            TypeId::of::<ThemeSubscription>(),
            cosmic::cosmic_theme::THEME_MODE_ID.into(),
            ThemeMode::version(),
        )
        .map(|update: Update<ThemeMode>| {
            if !update.errors.is_empty() {
                tracing::info!(
                    "errors loading theme mode {:?}: {:?}",
                    update.keys,
                    update.errors
                );
            }
            AppMessage::SystemThemeChanged
        });

        cosmic::iced::Subscription::batch([keybinds, config, theme])
    }

    /// Handle application events here.
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        let mut tasks = vec![];
        match message {
            AppMessage::SystemThemeChanged => tasks.push(self.update_theme()),
            AppMessage::ConfigChanged(ref config) => {
                if &self.config != config {
                    self.config = config.clone();
                    tasks.push(self.update_theme());
                }
            }
            AppMessage::Open(ref url) => {
                if let Err(err) = open::that_detached(url) {
                    tracing::error!("Failed to open URL: {}", err);
                }
            }
            AppMessage::ToggleContextPage(ref context_page) => {
                if &self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page.clone();
                    self.core.window.show_context = true;
                }
            }
            AppMessage::ContextClose => self.core.window.show_context = false,
            AppMessage::Navigate(route) => {
                self.nav_model.activate_position(route.position());
                tracing::debug!("navigated to {}", route.label());
                tasks.push(self.update_title());
            }
            AppMessage::Key(modifiers, ref key) => {
                for (key_bind, action) in &self.key_binds {
                    if key_bind.matches(modifiers, key) {
                        return self.update(action.message());
                    }
                }
            }
            AppMessage::Modifiers(modifiers) => {
                self.modifiers = modifiers;
            }
            AppMessage::AppTheme(theme) => {
                if let Some(ref handler) = self.handler {
                    if let Err(err) = self.config.set_app_theme(handler, theme.into()) {
                        tracing::error!("Failed to set app theme: {}", err);
                    }
                }
                tasks.push(self.update_theme());
            }
            _ => (),
        }

        // Pages keep their own selections, so each one sees every message.
        let entities = self
            .nav_model
            .iter()
            .collect::<Vec<widget::segmented_button::Entity>>();

        for entity in entities {
            if let Some(page) = self.nav_model.data_mut::<Box<dyn Page>>(entity) {
                tasks.push(page.update(message.clone()));
            }
        }

        Task::batch(tasks)
    }

    /// Creates a view after each update.
    fn view(&self) -> Element<Self::Message> {
        match self.nav_model.active_data::<Box<dyn pages::Page>>() {
            Some(page) => widget::container(widget::scrollable(page.view()))
                .height(cosmic::iced::Length::Fill)
                .into(),
            None => widget::text("ERROR, PAGE NOT SET").into(),
        }
    }
}

impl App
where
    Self: cosmic::Application,
{
    fn active_page_title(&self) -> &str {
        self.nav_model
            .active_data::<Route>()
            .map(Route::label)
            .unwrap_or("Unknown Page")
    }

    fn update_title(&mut self) -> Task<AppMessage> {
        let header_title = self.active_page_title().to_owned();
        let window_title = format!("{header_title} - {}", fl!("app-title"));
        self.set_header_title(header_title);
        self.set_window_title(window_title)
    }

    fn update_theme(&self) -> Task<AppMessage> {
        cosmic::app::command::set_theme::<AppMessage>(self.config.app_theme.theme())
    }

    fn settings(&self) -> Element<AppMessage> {
        widget::scrollable(widget::settings::section().title(fl!("appearance")).add(
            widget::settings::item::item(
                fl!("theme"),
                widget::dropdown(
                    &self.app_themes,
                    Some(self.config.app_theme.into()),
                    AppMessage::AppTheme,
                ),
            ),
        ))
        .into()
    }
}
