/// Return early with `$err` unless `$cond` holds. The rejection is logged at debug level.
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !($cond) {
            let err = $err;
            log::debug!("rejected: {err}");
            return Err(err);
        }
    }};
}
