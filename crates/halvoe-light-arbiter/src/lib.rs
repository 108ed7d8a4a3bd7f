#![no_std]

//! Mode arbitration for the effect light
//!
//! Two endpoints, a color light and a fire switch, share one LED strip.
//! This crate decides which of them owns the strip and keeps both
//! endpoints' reported on/off state consistent with that decision.
//!
//! Layers:
//! - `domain` - Mode, endpoint attributes, events and the ports
//! - `services` - [`ModeAuthority`], atomic endpoint mirrors, shared strip and indicator
//! - `app` - Light and fire usecases (the adapters)
//! - `controllers` - [`EndpointController`], the inbound event dispatcher
//! - `pacing` - [`PacingLoop`], the fixed-interval render driver

pub mod app;
pub mod controllers;
pub mod domain;
pub mod pacing;
pub mod services;

pub use app::usecases::{FireUsecases, LightUsecases};
pub use controllers::EndpointController;
pub use domain::{
    dto::{EndpointEvent, EndpointReport},
    entity::{ColorMode, FireCommandState, LightCommandState, Mode},
};
pub use pacing::PacingLoop;
pub use services::{AtomicFireState, AtomicLightState, ModeAuthority, SharedIndicator, SharedStrip};
