/// Source of candidate employee ids for new request records.
pub trait EmployeeIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
