pub mod bearing;
pub mod heading;
