use crate::App;
use ratatui::Frame;

use drivetui::model::Screen;

use super::{
    breadcrumb, entry_form, file_list, header, layout,
    legend::{self, LegendContext},
    search, stats, status_bar, toast,
};

/// Draw the whole frame for the current screen
pub fn render(f: &mut Frame, app: &App) {
    match app.model.screen {
        Screen::Entry => render_entry_screen(f, app),
        Screen::Listing => render_listing_screen(f, app),
    }

    if let Some((message, _)) = &app.model.ui.toast_message {
        let area = f.area();
        toast::render_toast(f, area, message);
    }
}

fn legend_context(app: &App) -> LegendContext<'_> {
    let model = &app.model;
    LegendContext {
        screen: &model.screen,
        vim_mode: model.ui.vim_mode,
        nested: model
            .navigation
            .as_ref()
            .is_some_and(|nav| !nav.is_at_root()),
        search_mode: model.ui.search_mode,
        has_search_query: !model.listing.query.is_empty(),
        has_error: model.listing.error.is_some(),
    }
}

fn render_entry_screen(f: &mut Frame, app: &App) {
    let size = f.area();
    let ctx = legend_context(app);
    let layout_info = layout::calculate_entry_layout(size, legend::calculate_legend_height(size.width, ctx));

    entry_form::render_entry_form(
        f,
        layout_info.form_area,
        &app.model.ui.entry_input,
        &app.icon_renderer,
    );
    legend::render_legend(f, layout_info.legend_area, ctx);
}

fn render_listing_screen(f: &mut Frame, app: &App) {
    let Some(nav) = app.model.navigation.as_ref() else {
        return;
    };
    let listing = &app.model.listing;
    let ui = &app.model.ui;

    let size = f.area();
    let ctx = legend_context(app);
    let search_visible = ui.search_mode || !listing.query.is_empty();
    let layout_info = layout::calculate_listing_layout(
        size,
        legend::calculate_legend_height(size.width, ctx),
        search_visible,
    );

    header::render_header(
        f,
        layout_info.header_area,
        nav.title(),
        nav.subtitle(),
        &nav.location().to_string(),
        ui.location_recently_copied(),
        &app.icon_renderer,
    );

    breadcrumb::render_breadcrumb_bar(
        f,
        layout_info.breadcrumb_area,
        &nav.breadcrumbs,
        nav.breadcrumbs_resolved,
        !nav.is_at_root(),
    );

    stats::render_stats(f, layout_info.stats_area, listing.tally(), &app.icon_renderer);

    if listing.loading {
        file_list::render_loading(f, layout_info.content_area, ui.tick);
    } else if let Some(error) = &listing.error {
        file_list::render_error(f, layout_info.content_area, error);
    } else if let Some(message) = listing.empty_message() {
        file_list::render_empty(f, layout_info.content_area, message);
    } else {
        file_list::render_file_list(
            f,
            layout_info.content_area,
            &listing.filtered,
            listing.selected,
            nav.title(),
            &app.icon_renderer,
        );
    }

    if let Some(search_area) = layout_info.search_area {
        search::render_search_input(
            f,
            search_area,
            &listing.query,
            ui.search_mode,
            listing.filtered.len(),
            ui.vim_mode,
        );
    }

    legend::render_legend(f, layout_info.legend_area, ctx);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        listing.filtered.len(),
        listing.entries.len(),
        listing.selected_entry(),
        listing.truncated,
    );
}
