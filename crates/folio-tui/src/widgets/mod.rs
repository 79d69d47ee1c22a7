//! Custom widget components

mod footer;
mod navbar;
mod scroll_hint;
mod section_indicator;
mod section_page;

pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll_hint::ScrollHint;
pub use section_indicator::SectionIndicator;
pub use section_page::SectionPage;
