pub mod dashboard;
pub mod effects;
pub mod landing;
pub mod layout;
