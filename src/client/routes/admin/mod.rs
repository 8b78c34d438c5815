pub mod dashboard;
pub mod hotels;
pub mod login;
pub mod safaris;
pub mod sea_trips;

pub use dashboard::Dashboard;
pub use hotels::Hotels;
pub use login::Login;
pub use safaris::Safaris;
pub use sea_trips::SeaTrips;
