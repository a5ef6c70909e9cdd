use kernel::id::Id;

/// Marker for rows of the `users` table
pub struct UserMarker;

/// Store-generated numeric user identity
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_row() {
        let user_id = UserId::from_i64(3);
        assert_eq!(user_id.value(), 3);
        assert_eq!(user_id.to_string(), "3");
    }
}
