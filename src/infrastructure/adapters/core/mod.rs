//! Core Adapters

mod mock_core;

pub use mock_core::MockSynthesisCore;
