use crate::catalog::{FixtureSource, Item};
use crate::config::Config;
use crate::error::{AppError, ContractViolation};
use crate::ui::catalog::{grid_columns, CatalogPage};
use crate::ui::home::{HomePage, Link};
use crate::ui::layout::body_rect;
use crate::ui::mvi::dispatch_mvi;
use crate::ui::notify::{NotificationQueue, NotifyIntent, NotifyReducer};
use crate::ui::router::Route;
use ratatui::layout::Rect;

pub struct App {
    should_quit: bool,
    route: Route,
    home: HomePage,
    /// Present exactly while the catalog route is active.
    catalog: Option<CatalogPage>,
    notifications: NotificationQueue,
    config: Config,
    fixture: Box<dyn FixtureSource>,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: Config, fixture: Box<dyn FixtureSource>) -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            home: HomePage::default(),
            catalog: None,
            notifications: NotificationQueue::default(),
            config,
            fixture,
            size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn home(&self) -> &HomePage {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomePage {
        &mut self.home
    }

    pub fn catalog(&self) -> Option<&CatalogPage> {
        self.catalog.as_ref()
    }

    /// Mutable catalog page; only valid while the catalog route is active.
    pub fn catalog_mut(&mut self) -> Result<&mut CatalogPage, ContractViolation> {
        self.catalog
            .as_mut()
            .ok_or(ContractViolation::MissingProvider {
                component: "CatalogView",
            })
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Switch pages. Entering the catalog mounts a fresh page (one fixture
    /// load); leaving it drops the page with its filters and cart.
    pub fn navigate(&mut self, route: Route) -> Result<(), AppError> {
        if route == self.route && (route != Route::Catalog || self.catalog.is_some()) {
            return Ok(());
        }
        if self.catalog.take().is_some() {
            tracing::info!("catalog unmounted");
        }
        if route == Route::Catalog {
            let mut page = CatalogPage::new();
            page.mount(self.fixture.as_ref(), self.config.rules)?;
            if let Some((cols, rows)) = self.size {
                page.set_columns(body_columns(cols, rows));
            }
            self.catalog = Some(page);
        }
        tracing::info!(from = %self.route, to = %route, "navigated");
        self.route = route;
        Ok(())
    }

    /// Follow the highlighted landing-page link.
    pub fn activate_home_link(&mut self) -> Result<(), AppError> {
        match self.home.activate() {
            Link::External(path) => {
                self.notify(format!("Open {path} in a browser to start Challenge 1"));
                Ok(())
            }
            Link::Route(route) => self.navigate(route),
        }
    }

    /// Add the highlighted card to the cart and acknowledge it.
    pub fn add_selected_to_cart(&mut self) -> Result<Option<Item>, AppError> {
        let added = self.catalog_mut()?.add_selected_to_cart()?;
        if let Some(item) = &added {
            self.notify(format!("Added {} to cart!", item.name));
        }
        Ok(added)
    }

    pub fn notify(&mut self, message: String) {
        tracing::debug!(%message, "notification queued");
        let ticks = self.config.ui.notification_ticks;
        self.dispatch_notify(NotifyIntent::Push { message, ticks });
    }

    pub fn dismiss_notification(&mut self) {
        self.dispatch_notify(NotifyIntent::DismissOldest);
    }

    pub fn on_tick(&mut self) {
        if !self.notifications.is_empty() {
            self.dispatch_notify(NotifyIntent::Tick);
        }
    }

    /// Record the terminal size so the grid knows how many columns it has.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        if let Some(page) = self.catalog.as_mut() {
            page.set_columns(body_columns(cols, rows));
        }
    }

    fn dispatch_notify(&mut self, intent: NotifyIntent) {
        dispatch_mvi!(self, notifications, NotifyReducer, intent);
    }
}

fn body_columns(cols: u16, rows: u16) -> usize {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    grid_columns(body.width)
}
