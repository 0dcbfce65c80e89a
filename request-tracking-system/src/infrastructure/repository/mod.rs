mod request_record;
