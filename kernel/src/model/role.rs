use strum::{AsRefStr, Display, EnumIter, EnumString};

// ロールは作成時に決まり、以後変更されない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Renter,
    Owner,
}

impl Role {
    pub fn is_owner(self) -> bool {
        matches!(self, Role::Owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn roles_are_stored_as_lowercase_text() {
        assert_eq!(Role::Owner.as_ref(), "owner");
        assert_eq!(Role::from_str("renter").ok(), Some(Role::Renter));
        assert!(Role::from_str("admin").is_err());
        assert_eq!(Role::default(), Role::Renter);
    }
}
