pub mod breadcrumb;
pub mod entry_form;
pub mod file_list;
pub mod header;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod stats;
pub mod status_bar;
pub mod toast;

pub use render::render;
