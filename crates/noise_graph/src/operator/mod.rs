//! Operator modules.
//!
//! Every operator owns a [`SourceSlots`](crate::module::SourceSlots) array whose length is
//! its [`required_inputs`](crate::module::Module::required_inputs), offers `new()` with all
//! slots empty plus a convenience constructor taking its configuration and sources, and
//! evaluates purely from its sources and its own fields.
//!
//! Unary: [`Abs`], [`Clamp`], [`Exponent`], [`Invert`], [`ScaleBias`].
//! Binary: [`Add`], [`Max`], [`Min`], [`Multiply`], [`Power`], [`Subtract`].
//! Ternary: [`Blend`].
pub mod abs;
pub mod blend;
pub mod clamp;
pub mod combine;
pub mod exponent;
pub mod invert;
pub mod scale_bias;

pub use abs::Abs;
pub use blend::Blend;
pub use clamp::Clamp;
pub use combine::{Add, Max, Min, Multiply, Power, Subtract};
pub use exponent::Exponent;
pub use invert::Invert;
pub use scale_bias::ScaleBias;
