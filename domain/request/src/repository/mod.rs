mod request_record;

#[rustfmt::skip]
pub use {
    request_record::RequestRecordRepo,
};
