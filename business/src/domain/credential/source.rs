/// Port for reading named values from the process environment.
pub trait EnvironmentSource: Send + Sync {
    /// Returns the value of `name`, or `None` when it is not set.
    fn get(&self, name: &str) -> Option<String>;
}
