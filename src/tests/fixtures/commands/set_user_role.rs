// Shared test fixture for the SetUserRole command.

use crate::modules::roles::use_cases::set_user_role::command::{CallerClaims, SetUserRole};
use std::fs;

pub struct SetUserRoleBuilder {
    inner: SetUserRole,
}

impl Default for SetUserRoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SetUserRoleBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/set_user_role.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn uid(mut self, v: impl Into<String>) -> Self {
        self.inner.uid = v.into();
        self
    }

    pub fn business_id(mut self, v: impl Into<String>) -> Self {
        self.inner.business_id = v.into();
        self
    }

    pub fn role(mut self, v: impl Into<String>) -> Self {
        self.inner.role = v.into();
        self
    }

    pub fn build(self) -> SetUserRole {
        self.inner
    }
}

pub fn admin_caller() -> CallerClaims {
    CallerClaims {
        role: Some("admin".to_string()),
    }
}

pub fn caller_with_role(role: Option<&str>) -> CallerClaims {
    CallerClaims {
        role: role.map(str::to_string),
    }
}
