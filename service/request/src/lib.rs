mod employee_id;
mod request_record;

#[rustfmt::skip]
pub use {
    employee_id::RandomEmployeeIdGenerator,
    employee_id::EMPLOYEE_ID_PREFIX,
    request_record::RequestRecordServiceImpl,
    request_record::DEFAULT_EMPLOYEE_ID_ATTEMPTS,
};
