use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::{AppState, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Admin,
    Courier,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            "courier" => Ok(Role::Courier),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::Courier => "courier",
        };
        f.write_str(s)
    }
}

/// Where the staff panel gate stands. Stage one opens the role picker,
/// stage two binds one role at a time. This is a convenience gate for a
/// kiosk, not an authentication system: no sessions, no lockout.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GateState {
    pub unlocked: bool,
    pub active_role: Option<Role>,
}

/// Code comparison lives behind this trait so the gate logic never learns
/// where the codes come from.
pub trait AccessPolicy: Send + Sync {
    fn verify_panel(&self, code: &str) -> bool;
    fn verify_role(&self, role: Role, code: &str) -> bool;
}

/// Production policy: the four codes are read from the environment at
/// startup. There are deliberately no compiled-in defaults.
pub struct EnvAccessCodes {
    panel: String,
    manager: String,
    admin: String,
    courier: String,
}

impl EnvAccessCodes {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            panel: std::env::var("PANEL_CODE").expect("PANEL_CODE not found in .env file"),
            manager: std::env::var("MANAGER_CODE").expect("MANAGER_CODE not found in .env file"),
            admin: std::env::var("ADMIN_CODE").expect("ADMIN_CODE not found in .env file"),
            courier: std::env::var("COURIER_CODE").expect("COURIER_CODE not found in .env file"),
        }
    }
}

impl AccessPolicy for EnvAccessCodes {
    fn verify_panel(&self, code: &str) -> bool {
        self.panel == code
    }

    fn verify_role(&self, role: Role, code: &str) -> bool {
        let expected = match role {
            Role::Manager => &self.manager,
            Role::Admin => &self.admin,
            Role::Courier => &self.courier,
        };
        expected == code
    }
}

impl AppState {
    pub fn unlock_panel(
        &mut self,
        policy: &dyn AccessPolicy,
        code: &str,
    ) -> Result<(), StoreError> {
        if !policy.verify_panel(code) {
            return Err(StoreError::WrongPanelCode);
        }
        self.gate.unlocked = true;
        Ok(())
    }

    /// Second stage. Requires the panel to be unlocked first.
    pub fn authorize_role(
        &mut self,
        policy: &dyn AccessPolicy,
        role: Role,
        code: &str,
    ) -> Result<Role, StoreError> {
        if !self.gate.unlocked {
            return Err(StoreError::PanelLocked);
        }
        if !policy.verify_role(role, code) {
            return Err(StoreError::WrongRoleCode);
        }
        self.gate.active_role = Some(role);
        Ok(role)
    }

    /// Back to the role picker; the panel itself stays unlocked.
    pub fn leave_role(&mut self) {
        self.gate.active_role = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCodes;

    impl AccessPolicy for FixedCodes {
        fn verify_panel(&self, code: &str) -> bool {
            code == "open-sesame"
        }

        fn verify_role(&self, role: Role, code: &str) -> bool {
            match role {
                Role::Manager => code == "m",
                Role::Admin => code == "a",
                Role::Courier => code == "c",
            }
        }
    }

    #[test]
    fn wrong_panel_code_changes_nothing() {
        let mut state = AppState::seeded();

        let result = state.unlock_panel(&FixedCodes, "guess");

        assert_eq!(result, Err(StoreError::WrongPanelCode));
        assert!(!state.gate.unlocked);
        assert_eq!(state.gate.active_role, None);
    }

    #[test]
    fn role_stage_is_unreachable_while_locked() {
        let mut state = AppState::seeded();

        let result = state.authorize_role(&FixedCodes, Role::Admin, "a");

        assert_eq!(result, Err(StoreError::PanelLocked));
        assert_eq!(state.gate.active_role, None);
    }

    #[test]
    fn wrong_role_code_leaves_the_role_unset() {
        let mut state = AppState::seeded();
        state.unlock_panel(&FixedCodes, "open-sesame").unwrap();

        let result = state.authorize_role(&FixedCodes, Role::Courier, "m");

        assert_eq!(result, Err(StoreError::WrongRoleCode));
        assert!(state.gate.unlocked);
        assert_eq!(state.gate.active_role, None);
    }

    #[test]
    fn correct_codes_unlock_exactly_the_requested_role() {
        let mut state = AppState::seeded();
        state.unlock_panel(&FixedCodes, "open-sesame").unwrap();

        state.authorize_role(&FixedCodes, Role::Courier, "c").unwrap();
        assert_eq!(state.gate.active_role, Some(Role::Courier));

        state.leave_role();
        assert_eq!(state.gate.active_role, None);
        assert!(state.gate.unlocked);
    }
}
