//! Page views

pub mod favorites;
pub mod home;
pub mod list;

pub use favorites::FavoritesView;
pub use home::HomeView;
pub use list::ListView;
