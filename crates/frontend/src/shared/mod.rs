pub mod components;
pub mod icons;
pub mod leaflet;
pub mod modal;
