//! Price estimator client for Tunisian real estate.
//!
//! The form logic lives in [`form`]: a pure reducer over [`form::AppState`]
//! driven by a [`form::FormController`], which submits completed forms to a
//! [`predictor::PricePredictor`]. [`view`] turns state into text.

pub mod cli;
pub mod config;
pub mod form;
pub mod locations;
pub mod predictor;
pub mod view;
