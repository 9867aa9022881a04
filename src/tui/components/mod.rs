// Reusable UI components
//
// Each component renders one region of the screen from App state.

mod contact_panel;
mod faq_panel;
mod gallery_panel;
mod pricing_panel;
mod reviews_panel;
mod status_bar;
mod title_bar;
mod toast;

pub use contact_panel::form_lines;
pub use contact_panel::render as render_contact;
pub use faq_panel::render as render_faq;
pub use gallery_panel::render as render_gallery;
pub use pricing_panel::render as render_pricing;
pub use reviews_panel::render as render_reviews;
pub use status_bar::render as render_status;
pub use title_bar::render as render_title;
pub use toast::Toast;
