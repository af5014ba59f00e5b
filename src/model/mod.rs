//! Plain data produced by a grid model.
//!
//! - [`morse`] – Morse potential of the diatomic.
//! - [`points`] – Bond-length grid with its repulsive/equilibrium/attractive split.
//! - [`summary`] – Tabular report of a model, rendered as text or tables.
//! - [`plot`] – Energy curve and grid points for plotting.
//!
//! None of these types know how they were computed; [`crate::GridModel`]
//! builds them and [`crate::io`] persists them.

pub mod morse;
pub mod plot;
pub mod points;
pub mod summary;
