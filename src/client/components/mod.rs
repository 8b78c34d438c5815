pub mod admin;
pub mod navbar;
pub mod page;
pub mod title;
pub mod trip_card;

pub use navbar::Navbar;
pub use page::Page;
pub use title::SkyEgyptTitle;
pub use trip_card::TripCard;
