//! DTO modules bridging the external API wire format and the view shapes
//! consumed by the dashboard.

pub mod dashboard;
pub mod notice;
