pub mod entities;
pub mod history;
pub mod matcher;
pub mod parser;
pub mod policies;
pub mod ports;
pub mod risk;
pub mod services;
pub mod value_objects;
