pub use self::{combination::*, number_set::*};

pub(crate) mod combination;
pub(crate) mod number_set;
