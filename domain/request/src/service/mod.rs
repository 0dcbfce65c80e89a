mod employee_id;
mod request_record;

#[rustfmt::skip]
pub use {
    employee_id::EmployeeIdGenerator,
    request_record::RequestRecordService,
};
