/// A configurable value, together with the bounds within which the value is used.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + Ord> ConfigOption<T> {
    /// The value of the option, moved to the nearest bound if outside of the bounds.
    pub fn bounded_value(&self) -> T {
        let (min, max) = self.min_max();
        self.value.clone().clamp(min, max)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ConfigOption<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}, {}]", self.name, self.value, self.min, self.max)
    }
}
