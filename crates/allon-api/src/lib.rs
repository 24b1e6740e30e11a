//! # allon-api - Projects REST Client
//!
//! Talks to the ESPAllOn projects API:
//!
//! - `GET /api/projects?page={n}&limit={size}` lists one page of projects
//! - `POST /api/config/load` applies a project by sending the whole object
//! - `POST /api/project/{id}/load` applies a project by id (older firmware)
//!
//! The [`ProjectsApi`] trait is the seam between the application layer and
//! the network; [`HttpProjectsApi`] is the `reqwest` implementation.

pub mod client;
pub mod mode;

pub use client::{HttpProjectsApi, LocalProjectsApi, ProjectsApi};
pub use mode::ApplyMode;
