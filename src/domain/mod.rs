// Domain layer: models, form rules and ports. Adapters live under crate::adapters.

pub mod category;
pub mod form;
pub mod model;
pub mod ports;
