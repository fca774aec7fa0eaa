pub mod codec;
mod entity;
mod markup;
mod render;
mod units;
#[cfg(feature = "serde")]
mod wire;

pub use entity::{Entity, EntityKind, MarkupLanguage};
pub use markup::{MarkupError, TemplateKind, apply_template};
pub use render::render;
pub use units::{UnitIndex, unit_len, unit_slice};
