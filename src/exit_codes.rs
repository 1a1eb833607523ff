//! Exit code constants for the artgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid paths)
//! - 2: Template failure (template file missing or unreadable)
//! - 3: Dispatch failure (external render command could not be run)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid input paths.
pub const USER_ERROR: i32 = 1;

/// Template failure: prompt template file missing or unreadable.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Dispatch failure: the external render command failed to start or exited nonzero.
pub const DISPATCH_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, TEMPLATE_FAILURE, DISPATCH_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
