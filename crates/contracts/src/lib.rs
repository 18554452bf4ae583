//! Pure core of the camp & afterschool finder: data model, normalizers,
//! filter engine and the presentation models the frontend binds to the DOM.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
