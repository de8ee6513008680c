//! Page components, one per route

pub mod explore;
pub mod favorites;
pub mod login;
pub mod not_found;
pub mod profile;

pub use explore::Explore;
pub use favorites::Favorites;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
