//! UI module for rendering the TUI

mod forms;
mod layout;
mod pages;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (tabs_area, main_area) = layout::create_layout(area);

    layout::draw_tabs(frame, tabs_area, app);

    // Draw main content based on current view
    match app.view {
        View::Home => pages::draw_home(frame, main_area, app),
        View::Menu => pages::draw_menu(frame, main_area),
        View::Book => forms::draw_book(frame, main_area, app),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
