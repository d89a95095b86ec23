macro_rules! db_handle_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(error) if error.is_not_found() => {
                return Err(Status::NotFound);
            }
            Err(error) => {
                error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(Status::InternalServerError);
            }
        }
    };
}

pub(crate) use db_handle_error_http;
