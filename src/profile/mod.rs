mod model;
mod store;

pub use model::UserProfile;
pub use store::{JsonProfileStore, ProfileStore};
