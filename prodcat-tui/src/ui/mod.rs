pub mod filter_bar;
pub mod hint_bar;
pub mod layout;
pub mod product_table;
pub mod status_bar;

use ratatui::Frame;

use crate::app::App;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let (status_area, filter_area, table_area, hint_area) = layout::Layout::main(f.area());

    status_bar::render(f, status_area, app);
    filter_bar::render(f, filter_area, app);
    product_table::render(f, table_area, app);
    hint_bar::render(f, hint_area, app);
}
