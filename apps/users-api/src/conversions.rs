use domain_users::User;
use rpc::users::v1 as proto;

/// Wire representation of a user. The password hash never crosses the wire.
pub fn user_to_proto(user: &User) -> proto::User {
    proto::User {
        id: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        admin: user.admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_to_proto_omits_hash() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$v=19$hash".to_string(),
            true,
        );
        let proto = user_to_proto(&user);

        assert_eq!(proto.id, user.id.to_string());
        assert_eq!(proto.username, "alice");
        assert_eq!(proto.email, "alice@example.com");
        assert!(proto.admin);
    }
}
