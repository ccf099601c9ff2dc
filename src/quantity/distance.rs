quantity!(Kilometers, f64, "km");

impl Kilometers {
    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}
