//! One renderer per screen.

pub mod coding;
pub mod detective;
pub mod factory;
pub mod home;
pub mod paradox;
