//! Reusable view components shared across pages.

pub mod appointment_card;
pub mod appointment_management;
pub mod booking_modal;
pub mod doctor_card;
pub mod doctor_list;
pub mod navbar;
pub mod pagination;
pub mod status_badge;
pub mod toast_host;
