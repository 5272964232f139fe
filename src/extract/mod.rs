//! Markup extraction
//!
//! This module contains the generic, I/O-free half of scraping:
//! - Ordered strategy chains evaluated by a single dispatcher
//! - Noise filtering of metadata text that leaks into generic containers
//! - Text helpers shared by the per-fact projectors

mod chain;

pub use chain::{
    extract, first_text, is_noise, last_text, normalize_text, own_text, Extraction,
    Fact, Projector, Strategy, NOISE_TOKENS,
};
