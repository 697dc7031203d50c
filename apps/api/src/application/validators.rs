use validator::ValidateEmail;

/// Validates that the input looks like a valid email address.
///
/// The value is checked as given; callers trim user-typed input first.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.validate_email()
}

/// Constant-time string equality for shared secrets.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
