//! Products page: the catalog table, an add/edit form, and delete
//! confirmation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::data::{Product, ProductDraft, ProductStatus};
use crate::events::KeyBindings;
use crate::table::{CellValue, Column, DataTable, TableError};
use crate::ui::components::{
    centered_rect, render_data_table, ConfirmAction, ConfirmDialog, TextInput,
};
use crate::ui::theme::product_status_color;

use super::{handle_filter_keys, handle_table_keys};

/// A change requested by the products page.
#[derive(Debug, Clone)]
pub enum ProductsAction {
    /// Add a new product from this draft.
    Create(ProductDraft),
    /// Replace the product with this id.
    Update { product_id: String, draft: ProductDraft },
    /// Remove the product with this id.
    Delete(String),
}

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Sku,
    Category,
    Price,
    Stock,
    Status,
    Description,
}

impl FormField {
    const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Sku,
        FormField::Category,
        FormField::Price,
        FormField::Stock,
        FormField::Status,
        FormField::Description,
    ];

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The add/edit form. `product_id` is `None` when adding.
struct ProductForm {
    product_id: Option<String>,
    name: TextInput,
    sku: TextInput,
    category: TextInput,
    price: TextInput,
    stock: TextInput,
    status: ProductStatus,
    description: TextInput,
    focus: FormField,
    error: Option<String>,
}

impl ProductForm {
    fn empty() -> Self {
        let mut name = TextInput::new();
        name.set_placeholder("Plush Toy Dragon");
        let mut sku = TextInput::new();
        sku.set_placeholder("PROD-XXX");
        Self {
            product_id: None,
            name,
            sku,
            category: TextInput::new(),
            price: TextInput::new(),
            stock: TextInput::new(),
            status: ProductStatus::Draft,
            description: TextInput::new(),
            focus: FormField::Name,
            error: None,
        }
    }

    fn for_product(product: &Product) -> Self {
        Self {
            product_id: Some(product.id.clone()),
            name: TextInput::with_value(&product.name),
            sku: TextInput::with_value(&product.sku),
            category: TextInput::with_value(&product.category),
            price: TextInput::with_value(format!("{:.2}", product.price)),
            stock: TextInput::with_value(product.stock.to_string()),
            status: product.status,
            description: TextInput::with_value(&product.description),
            focus: FormField::Name,
            error: None,
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Sku => Some(&mut self.sku),
            FormField::Category => Some(&mut self.category),
            FormField::Price => Some(&mut self.price),
            FormField::Stock => Some(&mut self.stock),
            FormField::Description => Some(&mut self.description),
            FormField::Status => None,
        }
    }

    /// Build a draft from the current field values.
    ///
    /// Numeric fields that fail to parse surface as a form error rather
    /// than an invalid draft.
    fn to_draft(&self) -> Result<ProductDraft, String> {
        let price: f64 = self
            .price
            .value()
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        let stock: u32 = if self.stock.is_empty() {
            0
        } else {
            self.stock
                .value()
                .trim()
                .parse()
                .map_err(|_| "Stock must be a whole number".to_string())?
        };
        Ok(ProductDraft {
            name: self.name.value().to_string(),
            sku: self.sku.value().to_string(),
            category: self.category.value().to_string(),
            price,
            stock,
            status: self.status,
            description: self.description.value().to_string(),
        })
    }
}

enum Modal {
    None,
    Form(Box<ProductForm>),
    ConfirmDelete { product_id: String, dialog: ConfirmDialog },
}

pub struct ProductsView {
    table: DataTable<Product>,
    filter_active: bool,
    modal: Modal,
}

impl ProductsView {
    pub fn new(products: Vec<Product>) -> Result<Self, TableError> {
        let columns = vec![
            Column::new("name", "Name", |p: &Product| CellValue::text(p.name.clone())),
            Column::new("sku", "SKU", |p: &Product| CellValue::text(p.sku.clone())),
            Column::new("category", "Category", |p: &Product| {
                CellValue::text(p.category.clone())
            }),
            Column::new("price", "Price", |p: &Product| CellValue::money(p.price)),
            Column::new("stock", "Stock", |p: &Product| {
                CellValue::number(p.stock as f64)
            }),
            Column::new("status", "Status", |p: &Product| {
                CellValue::text(p.status.name())
            }),
        ];
        Ok(Self {
            table: DataTable::new(columns, products)?
                .with_filter_placeholder("Press / to search products by name, SKU, category..."),
            filter_active: false,
            modal: Modal::None,
        })
    }

    /// Replace the backing rows after a store mutation.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.table.set_rows(products);
    }

    /// Apply a configured page size. Out-of-set sizes are ignored.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        self.table.set_page_size(size)
    }

    /// Current rows per page.
    pub fn page_size(&self) -> usize {
        self.table.page_size()
    }

    /// Whether a modal or the filter line is capturing input.
    pub fn is_capturing_input(&self) -> bool {
        self.filter_active || !matches!(self.modal, Modal::None)
    }

    /// Record a validation error reported back by the store so the form
    /// stays open with the message shown.
    pub fn show_form_error(&mut self, message: String) {
        if let Modal::Form(form) = &mut self.modal {
            form.error = Some(message);
        }
    }

    /// Close the form after a successful save.
    pub fn close_form(&mut self) {
        if matches!(self.modal, Modal::Form(_)) {
            self.modal = Modal::None;
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, bindings: &KeyBindings) -> Option<ProductsAction> {
        match &mut self.modal {
            Modal::Form(form) => {
                match key.code {
                    KeyCode::Esc => {
                        self.modal = Modal::None;
                        return None;
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        form.focus = form.focus.next();
                        return None;
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        form.focus = form.focus.previous();
                        return None;
                    }
                    KeyCode::Enter => {
                        return match form.to_draft() {
                            Ok(draft) => match form.product_id.clone() {
                                Some(product_id) => {
                                    Some(ProductsAction::Update { product_id, draft })
                                }
                                None => Some(ProductsAction::Create(draft)),
                            },
                            Err(message) => {
                                form.error = Some(message);
                                None
                            }
                        };
                    }
                    _ => {}
                }
                if form.focus == FormField::Status {
                    if let KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right = key.code {
                        let all = ProductStatus::all();
                        let i = all.iter().position(|s| *s == form.status).unwrap_or(0);
                        form.status = all[(i + 1) % all.len()];
                    }
                } else if let Some(input) = form.focused_input() {
                    input.handle_input(key);
                }
                return None;
            }
            Modal::ConfirmDelete { product_id, dialog } => {
                return match dialog.handle_input(key) {
                    Some(ConfirmAction::Confirm) => {
                        let product_id = product_id.clone();
                        self.modal = Modal::None;
                        Some(ProductsAction::Delete(product_id))
                    }
                    Some(ConfirmAction::Cancel) => {
                        self.modal = Modal::None;
                        None
                    }
                    None => None,
                };
            }
            Modal::None => {}
        }

        if self.filter_active {
            self.filter_active = handle_filter_keys(&mut self.table, &key);
            return None;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.filter_active = true;
            }
            KeyCode::Char('a') => {
                self.modal = Modal::Form(Box::new(ProductForm::empty()));
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(product) = self.table.selected_row() {
                    self.modal = Modal::Form(Box::new(ProductForm::for_product(product)));
                }
            }
            KeyCode::Char('d') => {
                if let Some(product) = self.table.selected_row() {
                    self.modal = Modal::ConfirmDelete {
                        product_id: product.id.clone(),
                        dialog: ConfirmDialog::new(
                            "Delete Product",
                            format!("Delete \"{}\"? This cannot be undone.", product.name),
                        ),
                    };
                }
            }
            _ => {
                handle_table_keys(&mut self.table, &key, bindings);
            }
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_data_table(
            frame,
            area,
            "Products",
            &self.table,
            self.filter_active,
            |product: &Product, column_id: &str| {
                (column_id == "status")
                    .then(|| Style::default().fg(product_status_color(product.status)))
            },
        );

        match &self.modal {
            Modal::Form(form) => render_form(frame, area, form),
            Modal::ConfirmDelete { dialog, .. } => dialog.render(frame, area),
            Modal::None => {}
        }
    }

    pub fn help_text(&self) -> &'static str {
        match &self.modal {
            Modal::Form(_) => "[Tab] next field  [Enter] save  [Esc] cancel",
            Modal::ConfirmDelete { .. } => "[y] delete  [n] keep",
            Modal::None if self.filter_active => "[Esc/Enter] done  type to filter",
            Modal::None => {
                "[a] add  [e] edit  [d] delete  [/] search  [1-6] sort  [j/k/h/l] navigate"
            }
        }
    }

}

fn render_form(frame: &mut Frame, area: Rect, form: &ProductForm) {
    let rect = centered_rect(60, 80, area);
    frame.render_widget(Clear, rect);

    let title = match &form.product_id {
        Some(id) => format!(" Edit Product {} ", id),
        None => " Add Product ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // sku
            Constraint::Length(3), // category
            Constraint::Length(3), // price + stock
            Constraint::Length(1), // status
            Constraint::Length(3), // description
            Constraint::Length(1), // error line
        ])
        .split(inner);

    form.name
        .render_with_label(frame, rows[0], "Name", form.focus == FormField::Name);
    form.sku
        .render_with_label(frame, rows[1], "SKU", form.focus == FormField::Sku);
    form.category
        .render_with_label(frame, rows[2], "Category", form.focus == FormField::Category);

    let pair = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    form.price
        .render_with_label(frame, pair[0], "Price", form.focus == FormField::Price);
    form.stock
        .render_with_label(frame, pair[1], "Stock", form.focus == FormField::Stock);

    let status_focused = form.focus == FormField::Status;
    let status_style = if status_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(form.status.name(), status_style),
            Span::styled(
                if status_focused { "  [Space] cycle" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        rows[4],
    );

    form.description.render_with_label(
        frame,
        rows[5],
        "Description",
        form.focus == FormField::Description,
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[6],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> ProductsView {
        ProductsView::new(sample::products()).unwrap()
    }

    fn type_text(view: &mut ProductsView, text: &str, bindings: &KeyBindings) {
        for c in text.chars() {
            view.handle_input(key(KeyCode::Char(c)), bindings);
        }
    }

    #[test]
    fn test_add_form_submits_create_action() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('a')), &bindings);
        assert!(view.is_capturing_input());

        type_text(&mut view, "Wooden Blocks", &bindings);
        view.handle_input(key(KeyCode::Tab), &bindings);
        type_text(&mut view, "PROD-010", &bindings);
        view.handle_input(key(KeyCode::Tab), &bindings);
        type_text(&mut view, "Toys", &bindings);
        view.handle_input(key(KeyCode::Tab), &bindings);
        type_text(&mut view, "19.99", &bindings);

        let action = view.handle_input(key(KeyCode::Enter), &bindings);
        match action {
            Some(ProductsAction::Create(draft)) => {
                assert_eq!(draft.name, "Wooden Blocks");
                assert_eq!(draft.sku, "PROD-010");
                assert_eq!(draft.price, 19.99);
                assert_eq!(draft.stock, 0);
            }
            other => panic!("expected Create, got {:?}", other),
        }
    }

    #[test]
    fn test_form_rejects_unparseable_price() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('a')), &bindings);
        type_text(&mut view, "Wooden Blocks", &bindings);
        // Price left empty: parse fails and the form stays open.
        let action = view.handle_input(key(KeyCode::Enter), &bindings);
        assert!(action.is_none());
        assert!(view.is_capturing_input());
    }

    #[test]
    fn test_edit_prefills_and_emits_update() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('e')), &bindings);

        let action = view.handle_input(key(KeyCode::Enter), &bindings);
        match action {
            Some(ProductsAction::Update { product_id, draft }) => {
                assert_eq!(product_id, "PROD001");
                assert_eq!(draft.name, "Plush Toy Dragon");
                assert_eq!(draft.price, 29.99);
            }
            other => panic!("expected Update, got {:?}", other),
        }
    }

    #[test]
    fn test_status_field_cycles() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('a')), &bindings);
        // Tab to the status field (sixth).
        for _ in 0..5 {
            view.handle_input(key(KeyCode::Tab), &bindings);
        }
        view.handle_input(key(KeyCode::Char(' ')), &bindings);
        if let Modal::Form(form) = &view.modal {
            assert_eq!(form.status, ProductStatus::Archived);
        } else {
            panic!("form closed unexpectedly");
        }
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('d')), &bindings);
        assert!(view.is_capturing_input());

        let action = view.handle_input(key(KeyCode::Char('y')), &bindings);
        match action {
            Some(ProductsAction::Delete(id)) => assert_eq!(id, "PROD001"),
            other => panic!("expected Delete, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_cancel_keeps_product() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('d')), &bindings);
        let action = view.handle_input(key(KeyCode::Char('n')), &bindings);
        assert!(action.is_none());
        assert!(!view.is_capturing_input());
    }

    #[test]
    fn test_form_error_is_displayed_until_closed() {
        let mut view = view();
        let bindings = KeyBindings::default();
        view.handle_input(key(KeyCode::Char('a')), &bindings);
        view.show_form_error("SKU is required".to_string());
        assert!(view.is_capturing_input());
        view.close_form();
        assert!(!view.is_capturing_input());
    }
}
