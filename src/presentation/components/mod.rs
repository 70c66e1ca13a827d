mod fields;
mod footer;
mod layout;
mod modal;
mod page;

pub use footer::render_footer;
pub use modal::render_modal;
pub use page::render_page;
