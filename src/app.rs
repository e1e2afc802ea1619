//! Application state and the key/render loop glue.
//!
//! `App` owns the store, one view per page, and the toast stack. Views
//! handle their own keys and report requested mutations as actions; the
//! app applies them to the store, shows a toast, and pushes fresh rows
//! back into the affected view.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{info, warn};

use crate::config::Config;
use crate::data::Store;
use crate::error::Result;
use crate::events::{Event, KeyBindings};
use crate::ui::components::{render_help_bar, ToastStack};
use crate::ui::theme::Theme;
use crate::ui::views::{
    AnalyticsView, CustomersView, OrdersAction, OrdersView, OverviewView, ProductsAction,
    ProductsView,
};

/// The dashboard pages, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Orders,
    Products,
    Customers,
    Analytics,
}

impl Page {
    const ALL: [Page; 5] = [
        Page::Overview,
        Page::Orders,
        Page::Products,
        Page::Customers,
        Page::Analytics,
    ];

    /// Tab label for this page.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Orders => "Orders",
            Page::Products => "Products",
            Page::Customers => "Customers",
            Page::Analytics => "Analytics",
        }
    }

    /// Resolve a configured page name, falling back to the overview.
    pub fn from_name(name: &str) -> Page {
        match name {
            "orders" => Page::Orders,
            "products" => Page::Products,
            "customers" => Page::Customers,
            "analytics" => Page::Analytics,
            _ => Page::Overview,
        }
    }

    fn next(self) -> Page {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Page {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Top-level application state.
pub struct App {
    page: Page,
    config: Config,
    settings_dirty: bool,
    store: Store,
    overview: OverviewView,
    orders: OrdersView,
    products: ProductsView,
    customers: CustomersView,
    analytics: AnalyticsView,
    toasts: ToastStack,
    theme: Theme,
    bindings: KeyBindings,
    should_quit: bool,
}

impl App {
    /// Build the app from loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let store = Store::new();
        let mut orders = OrdersView::new(store.orders().to_vec())?;
        let mut products = ProductsView::new(store.products().to_vec())?;
        let mut customers = CustomersView::new(store.customers().to_vec())?;
        let mut analytics = AnalyticsView::new()?;

        let page_size = config.settings.page_size;
        orders.set_page_size(page_size);
        products.set_page_size(page_size);
        customers.set_page_size(page_size);
        analytics.set_page_size(page_size);

        let mut toasts = ToastStack::new();
        toasts.info(format!(
            "Loaded {} orders, {} products, {} customers",
            store.orders().len(),
            store.products().len(),
            store.customers().len()
        ));

        Ok(Self {
            page: Page::from_name(&config.settings.start_page),
            config: config.clone(),
            settings_dirty: false,
            store,
            overview: OverviewView::new(),
            orders,
            products,
            customers,
            analytics,
            toasts,
            theme: Theme::by_name(&config.settings.theme),
            bindings: KeyBindings::new(config.settings.vim_mode),
            should_quit: false,
        })
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Process one event from the terminal.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Key(_) => {}
            Event::Tick => self.toasts.tick(),
            Event::Resize(_, _) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global keys apply only while no modal or filter owns the input.
        if !self.current_view_captures_input() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Tab => {
                    self.page = self.page.next();
                    return;
                }
                KeyCode::BackTab => {
                    self.page = self.page.previous();
                    return;
                }
                _ => {}
            }
        }

        match self.page {
            Page::Overview => {}
            Page::Orders => {
                if let Some(action) = self.orders.handle_input(key, &self.bindings) {
                    self.apply_orders_action(action);
                }
            }
            Page::Products => {
                if let Some(action) = self.products.handle_input(key, &self.bindings) {
                    self.apply_products_action(action);
                }
            }
            Page::Customers => self.customers.handle_input(key, &self.bindings),
            Page::Analytics => self.analytics.handle_input(key, &self.bindings),
        }

        self.sync_page_size();
    }

    /// Fold a page-size change made in the active view back into settings.
    fn sync_page_size(&mut self) {
        let page_size = match self.page {
            Page::Overview => return,
            Page::Orders => self.orders.page_size(),
            Page::Products => self.products.page_size(),
            Page::Customers => self.customers.page_size(),
            Page::Analytics => self.analytics.page_size(),
        };
        if page_size != self.config.settings.page_size {
            self.config.settings.page_size = page_size;
            self.settings_dirty = true;
        }
    }

    /// Settings changed since the last call, for the caller to persist.
    pub fn changed_settings(&mut self) -> Option<&Config> {
        if self.settings_dirty {
            self.settings_dirty = false;
            Some(&self.config)
        } else {
            None
        }
    }

    fn current_view_captures_input(&self) -> bool {
        match self.page {
            Page::Overview => false,
            Page::Orders => self.orders.is_capturing_input(),
            Page::Products => self.products.is_capturing_input(),
            Page::Customers => self.customers.is_capturing_input(),
            Page::Analytics => self.analytics.is_capturing_input(),
        }
    }

    fn apply_orders_action(&mut self, action: OrdersAction) {
        match action {
            OrdersAction::UpdateStatus { order_id, status } => {
                match self.store.update_order_status(&order_id, status) {
                    Ok(()) => {
                        info!(order = %order_id, status = status.name(), "order status updated");
                        self.orders.set_orders(self.store.orders().to_vec());
                        self.toasts
                            .success(format!("Order {} marked {}", order_id, status));
                    }
                    Err(err) => {
                        warn!(order = %order_id, error = %err, "order status update failed");
                        self.toasts.error(err.to_string());
                    }
                }
            }
        }
    }

    fn apply_products_action(&mut self, action: ProductsAction) {
        match action {
            ProductsAction::Create(draft) => match self.store.add_product(draft) {
                Ok(id) => {
                    self.products.close_form();
                    self.products.set_products(self.store.products().to_vec());
                    self.toasts.success(format!("Product {} added", id));
                }
                Err(err) => {
                    self.products.show_form_error(err.to_string());
                }
            },
            ProductsAction::Update { product_id, draft } => {
                match self.store.update_product(&product_id, draft) {
                    Ok(()) => {
                        self.products.close_form();
                        self.products.set_products(self.store.products().to_vec());
                        self.toasts.success(format!("Product {} updated", product_id));
                    }
                    Err(err) => {
                        self.products.show_form_error(err.to_string());
                    }
                }
            }
            ProductsAction::Delete(product_id) => match self.store.delete_product(&product_id) {
                Ok(()) => {
                    self.products.set_products(self.store.products().to_vec());
                    self.toasts.success(format!("Product {} deleted", product_id));
                }
                Err(err) => {
                    warn!(product = %product_id, error = %err, "product delete failed");
                    self.toasts.warning(err.to_string());
                }
            },
        }
    }

    /// Draw the whole frame: tab bar, current page, help bar, toasts.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_tabs(frame, chunks[0]);

        match self.page {
            Page::Overview => self.overview.render(frame, chunks[1]),
            Page::Orders => self.orders.render(frame, chunks[1]),
            Page::Products => self.products.render(frame, chunks[1]),
            Page::Customers => self.customers.render(frame, chunks[1]),
            Page::Analytics => self.analytics.render(frame, chunks[1]),
        }

        render_help_bar(frame, chunks[2], self.help_text());
        self.toasts.render(frame, frame.area());
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " shopdeck ",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        for page in Page::ALL {
            let label = if page == Page::Orders {
                let open = self.store.open_order_count();
                if open > 0 {
                    format!(" {} ({}) ", page.title(), open)
                } else {
                    format!(" {} ", page.title())
                }
            } else {
                format!(" {} ", page.title())
            };
            let style = if page == self.page {
                Style::default()
                    .fg(self.theme.bg)
                    .bg(self.theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn help_text(&self) -> &'static str {
        match self.page {
            Page::Overview => self.overview.help_text(),
            Page::Orders => self.orders.help_text(),
            Page::Products => self.products.help_text(),
            Page::Customers => self.customers.help_text(),
            Page::Analytics => self.analytics.help_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OrderStatus;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = app();
        assert_eq!(app.page, Page::Overview);
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.page, Page::Orders);
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.page, Page::Overview);
        // Wraps around in both directions.
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.page, Page::Analytics);
    }

    #[test]
    fn test_q_quits_from_navigation_mode() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_does_not_quit_while_filtering() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab)); // orders
        app.handle_event(key(KeyCode::Char('/')));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_order_status_update_round_trip() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab)); // orders

        // Open the status picker on the first order and choose Pending.
        app.handle_event(key(KeyCode::Char('u')));
        for _ in 0..3 {
            app.handle_event(key(KeyCode::Up));
        }
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(
            app.store.order("ORD001").map(|o| o.status),
            Some(OrderStatus::Pending)
        );
        assert_eq!(
            app.toasts.iter().last().map(|t| t.message.as_str()),
            Some("Order ORD001 marked Pending")
        );
    }

    #[test]
    fn test_product_delete_round_trip() {
        let mut app = app();
        for _ in 0..2 {
            app.handle_event(key(KeyCode::Tab)); // products
        }
        let before = app.store.products().len();
        app.handle_event(key(KeyCode::Char('d')));
        app.handle_event(key(KeyCode::Char('y')));
        assert_eq!(app.store.products().len(), before - 1);
    }

    #[test]
    fn test_invalid_product_form_keeps_modal_open() {
        let mut app = app();
        for _ in 0..2 {
            app.handle_event(key(KeyCode::Tab)); // products
        }
        app.handle_event(key(KeyCode::Char('a')));
        // Name too short, but a parseable price.
        app.handle_event(key(KeyCode::Char('x')));
        for _ in 0..3 {
            app.handle_event(key(KeyCode::Tab));
        }
        app.handle_event(key(KeyCode::Char('5')));
        app.handle_event(key(KeyCode::Enter));

        assert!(app.products.is_capturing_input());
        assert_eq!(app.store.products().len(), 3);
    }

    #[test]
    fn test_page_size_change_marks_settings_for_saving() {
        let mut app = app();
        assert!(app.changed_settings().is_none());

        app.handle_event(key(KeyCode::Tab)); // orders
        app.handle_event(key(KeyCode::Char('+')));

        let config = app.changed_settings().expect("settings should be dirty");
        assert_eq!(config.settings.page_size, 20);
        // Consumed: nothing further to persist until the next change.
        assert!(app.changed_settings().is_none());

        app.handle_event(key(KeyCode::Char('j')));
        assert!(app.changed_settings().is_none());
    }

    #[test]
    fn test_start_page_from_config() {
        let mut config = Config::default();
        config.settings.start_page = "customers".to_string();
        let app = App::new(&config).unwrap();
        assert_eq!(app.page, Page::Customers);
    }
}
