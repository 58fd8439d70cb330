pub mod formatter;
pub mod prices;
pub mod priority;
pub mod selection;
pub mod valuator;
