//! Staff account entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Account, Role};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for account_role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "snake_case")]
pub enum AccountRoleDb {
    SuperAdmin,
    Admin,
}

impl From<AccountRoleDb> for Role {
    fn from(db: AccountRoleDb) -> Self {
        match db {
            AccountRoleDb::SuperAdmin => Role::Owner,
            AccountRoleDb::Admin => Role::Staff,
        }
    }
}

impl From<Role> for AccountRoleDb {
    fn from(role: Role) -> Self {
        match role {
            Role::Owner => AccountRoleDb::SuperAdmin,
            Role::Staff => AccountRoleDb::Admin,
        }
    }
}

/// Database row mapping for the accounts table.
///
/// This is the only place the password hash is carried.
#[derive(Debug, Clone, FromRow)]
pub struct AccountEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: AccountRoleDb,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountEntity> for Account {
    fn from(entity: AccountEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role.into(),
            is_active: entity.is_active,
            last_login: entity.last_login,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
