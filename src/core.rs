pub mod categories;
pub mod converter;
pub mod currency;
pub mod equation;
pub mod linear;
pub mod temperature;
