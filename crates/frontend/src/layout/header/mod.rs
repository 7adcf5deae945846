pub mod header;
pub mod mobile_nav;

pub use header::Header;
pub use mobile_nav::MobileNav;
