//! Domain and service core for a tax & legal notice tracking dashboard.
//!
//! Notices are documents with a due date, an optional hearing date and a
//! completion status, each belonging to a client. Persistence, HTTP
//! transport, authentication and file storage all live in an external API
//! server; this crate models those collaborators as [`repository`] traits
//! and keeps everything behind them pure and synchronous.
//!
//! The main entry points are [`services::categorize`] for the due-date and
//! hearing-date buckets shown on the dashboard, [`services::calendar`] for
//! the month-grid presence markers, and [`services::dashboard`] for the
//! aggregated dashboard payload.

pub mod domain;
pub mod dto;
mod error_conversions;
pub mod repository;
pub mod services;
