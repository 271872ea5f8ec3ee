use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct LoginData {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) login_type: LoginType,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LoginType {
    Vulnerable,
    Secure,
}

impl LoginType {
    pub(crate) fn failure_message(self) -> &'static str {
        match self {
            LoginType::Vulnerable => "Vulnerable Login Failed! Invalid credentials.",
            LoginType::Secure => "Secure Login Failed! Invalid credentials.",
        }
    }
}
