#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the API console page, one per backend resource group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsoleTab {
    #[default]
    Auth,
    User,
    Kyc,
    Health,
    Admin,
}

impl ConsoleTab {
    pub const ALL: [Self; 5] = [Self::Auth, Self::User, Self::Kyc, Self::Health, Self::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::User => "user",
            Self::Kyc => "kyc",
            Self::Health => "health",
            Self::Admin => "admin",
        }
    }
}
