use domain_request::service::EmployeeIdGenerator;
use uuid::Uuid;

pub const EMPLOYEE_ID_PREFIX: &str = "EMP";

/// Draws `EMPnnnn` codes from the last four decimal digits of a random uuid.
///
/// Only ten thousand codes exist, callers must retry on conflict.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomEmployeeIdGenerator;

impl EmployeeIdGenerator for RandomEmployeeIdGenerator {
    fn generate(&self) -> String {
        format!("{EMPLOYEE_ID_PREFIX}{:04}", Uuid::new_v4().as_u128() % 10_000)
    }
}
