pub mod beauty;
pub mod classifier;
pub mod entities;
pub mod hair;
pub mod policies;
pub mod ports;
pub mod response;
pub mod services;
pub mod skin;
pub mod value_objects;
