mod footer;
mod header;

pub use footer::SiteFooter;
pub use header::SiteHeader;
