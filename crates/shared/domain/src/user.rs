//! User domain entity and related types.

use chrono::{DateTime, Utc};

use crate::entity::{Entity, Identifiable, Timestamped, Timestamps};
use crate::identity::UniqueEntityId;

#[derive(Clone)]
pub struct UserProps {
    tax_id: String,
    name: String,
    email: String,
    password: String,
    birth_date: DateTime<Utc>,
    timestamps: Timestamps,
}

impl Timestamped for UserProps {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

/// User creation data. Timestamps default to now when left empty.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub tax_id: String,
    pub name: String,
    pub email: String,
    /// Password hash, never plain text
    pub password: String,
    pub birth_date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// User domain entity
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    entity: Entity<UserProps>,
}

impl User {
    /// Build a user, generating an id unless one is supplied
    pub fn create(data: CreateUser, id: Option<UniqueEntityId>) -> Self {
        let props = UserProps {
            tax_id: data.tax_id,
            name: data.name,
            email: data.email,
            password: data.password,
            birth_date: data.birth_date,
            timestamps: Timestamps::resolve(data.created_at, data.updated_at),
        };

        Self {
            entity: Entity::new(props, id),
        }
    }

    pub fn id(&self) -> &UniqueEntityId {
        self.entity.id()
    }

    pub fn tax_id(&self) -> &str {
        &self.entity.props().tax_id
    }

    pub fn name(&self) -> &str {
        &self.entity.props().name
    }

    pub fn email(&self) -> &str {
        &self.entity.props().email
    }

    /// Stored password hash
    pub fn password(&self) -> &str {
        &self.entity.props().password
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.entity.props().birth_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.entity.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.entity.updated_at()
    }

    pub fn set_tax_id(&mut self, tax_id: String) {
        self.entity.props_mut().tax_id = tax_id;
        self.entity.touch();
    }

    pub fn set_name(&mut self, name: String) {
        self.entity.props_mut().name = name;
        self.entity.touch();
    }

    pub fn set_email(&mut self, email: String) {
        self.entity.props_mut().email = email;
        self.entity.touch();
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password: String) {
        self.entity.props_mut().password = password;
        self.entity.touch();
    }

    pub fn set_birth_date(&mut self, birth_date: DateTime<Utc>) {
        self.entity.props_mut().birth_date = birth_date;
        self.entity.touch();
    }
}

impl Identifiable for User {
    fn id(&self) -> &UniqueEntityId {
        self.entity.id()
    }
}

// Don't expose the password hash in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", self.id())
            .field("tax_id", &self.tax_id())
            .field("name", &self.name())
            .field("email", &self.email())
            .field("password", &"[REDACTED]")
            .field("birth_date", &self.birth_date())
            .field("created_at", &self.created_at())
            .field("updated_at", &self.updated_at())
            .finish()
    }
}
