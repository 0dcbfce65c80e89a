pub mod request_record;

#[rustfmt::skip]
pub use {
    request_record::RequestRecord,
    request_record::RequestStatus,
};
