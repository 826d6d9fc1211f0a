use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    /// Derived display value, never stored.
    #[must_use]
    pub fn total_minutes(self) -> f64 {
        self.0 * 60.0
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} h", self.0)
    }
}
